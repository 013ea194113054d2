//! Compound identifiers used as keys of the semantic model.
//!
//! A compound name is the run of identifier tokens that names an action or
//! a test (`Increment by value`). Equality is structural over the parts; the
//! textual form joins them with single spaces.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

macro_rules! compound_identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name {
            name: Vec<String>,
        }

        impl $name {
            /// Build an identifier from its parts, in order.
            pub fn new<I, S>(parts: I) -> Self
            where
                I: IntoIterator<Item = S>,
                S: Into<String>,
            {
                Self {
                    name: parts.into_iter().map(Into::into).collect(),
                }
            }

            /// Split `text` on whitespace. An empty string yields an empty name.
            pub fn parse(text: &str) -> Self {
                Self::new(text.split_whitespace())
            }

            pub fn parts(&self) -> &[String] {
                &self.name
            }

            pub fn is_empty(&self) -> bool {
                self.name.is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.name.join(" "))
            }
        }

        impl From<&str> for $name {
            fn from(text: &str) -> Self {
                Self::parse(text)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let text = String::deserialize(deserializer)?;
                Ok(Self::parse(&text))
            }
        }
    };
}

compound_identifier!(
    /// Key of a declared state. Always a single part.
    StateIdentifier
);

compound_identifier!(
    /// Key of a declared action, e.g. `Increment by value`.
    ActionIdentifier
);

compound_identifier!(
    /// Key of a test within its state. May be empty (`test for Counter`).
    TestIdentifier
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_compound_display() {
        let id = ActionIdentifier::new(["Increment", "by", "value"]);
        assert_eq!(id.to_string(), "Increment by value");
        assert_eq!(id.parts().len(), 3);
    }

    #[test]
    fn test_parse_matches_new() {
        assert_eq!(
            ActionIdentifier::parse("Increment  by value"),
            ActionIdentifier::new(["Increment", "by", "value"])
        );
    }

    #[test]
    fn test_empty_test_identifier() {
        let id = TestIdentifier::parse("");
        assert!(id.is_empty());
        assert_eq!(id, TestIdentifier::default());
        assert_eq!(id.to_string(), "");
    }

    #[test]
    fn test_structural_equality() {
        assert_ne!(
            ActionIdentifier::new(["Increment"]),
            ActionIdentifier::new(["Increment", "by", "value"])
        );
    }

    #[test]
    fn test_serializes_as_map_key() {
        let mut map = BTreeMap::new();
        map.insert(TestIdentifier::parse("Simple increment"), 1);
        map.insert(TestIdentifier::default(), 2);
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"":2,"Simple increment":1}"#);

        let back: BTreeMap<TestIdentifier, i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, map);
    }
}

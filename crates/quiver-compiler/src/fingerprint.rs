use sha2::{Digest, Sha256};

/// Lowercase hex SHA-256 of the source text.
///
/// Lets a caller that compiles in the background discard results for text
/// that has since changed.
pub fn fingerprint(source: &str) -> String {
    format!("{:x}", Sha256::digest(source.as_bytes()))
}

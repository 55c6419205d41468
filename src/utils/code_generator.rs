//! Short code generation.
//!
//! Codes are drawn uniformly, with replacement, from the 62-character
//! alphanumeric alphabet. No existence check is made here; the `urls` table
//! rejects a duplicate code through its unique constraint.

use rand::Rng;

/// Characters a short code may contain: `A-Z`, `a-z`, `0-9`.
pub const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Code length used when none is configured.
pub const DEFAULT_CODE_LENGTH: usize = 8;

/// Shortest code length accepted by configuration.
pub const MIN_CODE_LENGTH: usize = 4;

/// Longest code length accepted by configuration.
pub const MAX_CODE_LENGTH: usize = 64;

/// Generates a random short code of `length` characters.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code(8);
/// assert_eq!(code.len(), 8);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..ALPHABET.len());
            ALPHABET[idx] as char
        })
        .collect()
}

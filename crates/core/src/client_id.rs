//! Unique client identifier generation and format checks.
//!
//! The unique client identifier is the durable correlation key shared with the
//! automation system. It is independent of the database primary key and never
//! changes after the client row is created.

use rand::Rng;

/// Prefix carried by every unique client identifier.
pub const UNIQUE_CLIENT_ID_PREFIX: &str = "CL-";

/// Number of random characters following the prefix.
pub const UNIQUE_CLIENT_ID_SUFFIX_LEN: usize = 6;

/// Alphabet for the random suffix (upper-case alphanumerics).
const SUFFIX_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generate a fresh identifier of the form `CL-XXXXXX`.
///
/// Uniqueness is enforced by the `uq_clients_unique_client_id` constraint;
/// callers that care about collisions check the directory before inserting.
pub fn generate_unique_client_id() -> String {
    let mut rng = rand::rng();
    let suffix: String = (0..UNIQUE_CLIENT_ID_SUFFIX_LEN)
        .map(|_| SUFFIX_ALPHABET[rng.random_range(0..SUFFIX_ALPHABET.len())] as char)
        .collect();
    format!("{UNIQUE_CLIENT_ID_PREFIX}{suffix}")
}

/// Whether `value` has the shape produced by [`generate_unique_client_id`].
pub fn is_well_formed(value: &str) -> bool {
    let Some(suffix) = value.strip_prefix(UNIQUE_CLIENT_ID_PREFIX) else {
        return false;
    };
    suffix.len() == UNIQUE_CLIENT_ID_SUFFIX_LEN
        && suffix.bytes().all(|b| SUFFIX_ALPHABET.contains(&b))
}

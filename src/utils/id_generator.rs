//! Short id generation.
//!
//! Ids are drawn uniformly from a 62-character alphanumeric alphabet, giving
//! 62^7 (about 3.5 * 10^12) combinations at the default length.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Length of every generated id.
pub const ID_LENGTH: usize = 7;

/// Generates a random id of [`ID_LENGTH`] characters from `[a-zA-Z0-9]`.
///
/// # Examples
///
/// ```ignore
/// let id = generate_id();
/// assert_eq!(id.len(), 7);
/// assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_id() -> String {
    generate_id_with(&mut rand::rng(), ID_LENGTH)
}

/// Generates an id of `length` characters using the given random source.
pub fn generate_id_with<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| char::from(rng.sample(Alphanumeric)))
        .collect()
}

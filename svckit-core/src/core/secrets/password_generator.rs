use crate::shared::constants::GENERATED_PASSWORD_LENGTH;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};

const DIGITS: &[u8] = b"0123456789";
const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Generate a random 23-character password of upper and lower case
/// letters and digits.
///
/// The buffer is seeded with a digit before being filled and shuffled, so
/// the output always contains at least one digit but the digit's final
/// position is random.
///
/// Uses a non-cryptographic generator seeded from the wall clock. That is
/// acceptable for human-facing temporary passwords but NOT for secrets
/// that need cryptographic unpredictability; use a secure generator for
/// those.
pub fn random_password() -> String {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default();
    let mut rng = StdRng::seed_from_u64(seed);

    let mut buf = Vec::with_capacity(GENERATED_PASSWORD_LENGTH);
    buf.push(DIGITS[rng.gen_range(0..DIGITS.len())]);
    for _ in 1..GENERATED_PASSWORD_LENGTH {
        buf.push(ALPHABET[rng.gen_range(0..ALPHABET.len())]);
    }
    buf.shuffle(&mut rng);

    buf.into_iter().map(char::from).collect()
}

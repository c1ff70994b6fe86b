//! Account number generation

use rand::Rng;

pub const ACCOUNT_NUMBER_LENGTH: usize = 10;

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Draw one candidate account number
pub fn random_account_number<R: Rng>(rng: &mut R) -> String {
    (0..ACCOUNT_NUMBER_LENGTH)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Draw candidates until one is not already taken
pub fn generate_unique<R, F>(rng: &mut R, is_taken: F) -> String
where
    R: Rng,
    F: Fn(&str) -> bool,
{
    loop {
        let candidate = random_account_number(rng);
        if !is_taken(&candidate) {
            return candidate;
        }
        tracing::debug!("Account number collision, regenerating");
    }
}

use rand::rngs::OsRng;
use rand::Rng;

use super::errors::PasswordError;

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%&*";

/// Default length used when provisioning employee accounts.
pub const DEFAULT_TEMPORARY_LENGTH: usize = 12;

/// Generate a random temporary password.
///
/// The result always contains at least one uppercase letter, one lowercase
/// letter, one digit, and one symbol. The remaining positions are drawn from
/// the full alphabet and the whole string is shuffled so the character-class
/// positions are not predictable.
///
/// # Arguments
/// * `length` - Total password length, must be at least 4
///
/// # Returns
/// Randomly generated password of exactly `length` characters
///
/// # Errors
/// * `LengthTooShort` - `length` cannot hold all four mandatory character
///   classes. This is a configuration mistake by the caller, not a condition
///   to retry.
pub fn generate_temporary(length: usize) -> Result<String, PasswordError> {
    if length < 4 {
        return Err(PasswordError::LengthTooShort {
            min: 4,
            actual: length,
        });
    }

    let all: String = [UPPERCASE, LOWERCASE, DIGITS, SYMBOLS].concat();
    let mut rng = OsRng;

    let mut chars: Vec<char> = vec![
        random_char(UPPERCASE, &mut rng),
        random_char(LOWERCASE, &mut rng),
        random_char(DIGITS, &mut rng),
        random_char(SYMBOLS, &mut rng),
    ];
    for _ in 4..length {
        chars.push(random_char(&all, &mut rng));
    }

    // Fisher-Yates shuffle
    for i in (1..chars.len()).rev() {
        let j = rng.gen_range(0..=i);
        chars.swap(i, j);
    }

    Ok(chars.into_iter().collect())
}

fn random_char(alphabet: &str, rng: &mut OsRng) -> char {
    let chars: Vec<char> = alphabet.chars().collect();
    chars[rng.gen_range(0..chars.len())]
}

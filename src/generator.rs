//! Random password and id generation

use crate::error::{ErrorCategory, ErrorKind, QuantumboxError, Result};
use crate::random::RandomSource;

/// Uppercase letter class
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Lowercase letter class
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";

/// Digit class
pub const DIGITS: &str = "0123456789";

/// Symbol class: all 32 printable ASCII punctuation characters, making the
/// combined alphabet the 94 printable non-space ASCII characters.
pub const SYMBOLS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Alphabet for opaque ids: letters and digits only.
const ID_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Selection of character classes to draw a password from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharClasses {
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl Default for CharClasses {
    /// All classes enabled.
    fn default() -> Self {
        Self {
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: true,
        }
    }
}

impl CharClasses {
    /// Concatenated alphabet of the selected classes, in fixed class order.
    /// Empty if no class is selected.
    pub fn alphabet(&self) -> String {
        let mut charset = String::new();
        if self.uppercase {
            charset.push_str(UPPERCASE);
        }
        if self.lowercase {
            charset.push_str(LOWERCASE);
        }
        if self.digits {
            charset.push_str(DIGITS);
        }
        if self.symbols {
            charset.push_str(SYMBOLS);
        }
        charset
    }
}

/// Generate a random password of exactly `length` characters drawn from the
/// selected character classes.
///
/// Each position takes one random byte reduced modulo the alphabet size.
/// Since the alphabet size is not a power of two this has a slight bias
/// toward earlier characters; that is a known and accepted property of the
/// format, kept as-is rather than silently changing observable output.
pub fn generate(
    random: &mut dyn RandomSource,
    length: usize,
    classes: CharClasses,
) -> Result<String> {
    let charset = classes.alphabet();
    if charset.is_empty() {
        return Err(QuantumboxError::with_kind(
            ErrorCategory::User,
            ErrorKind::InvalidConfig,
            "at least one character class must be selected",
        ));
    }
    draw_from(random, length, &charset)
}

/// Generate a random alphanumeric id, e.g. for correlating UI entries.
pub fn generate_id(random: &mut dyn RandomSource, length: usize) -> Result<String> {
    draw_from(random, length, ID_ALPHABET)
}

fn draw_from(random: &mut dyn RandomSource, length: usize, charset: &str) -> Result<String> {
    // All alphabets are ASCII, so byte indexing is character indexing.
    debug_assert!(charset.is_ascii());
    let chars = charset.as_bytes();
    let bytes = random.generate_bytes(length)?;
    let mut out = String::with_capacity(length);
    for b in bytes.iter() {
        out.push(chars[*b as usize % chars.len()] as char);
    }
    Ok(out)
}

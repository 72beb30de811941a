//! High-level encrypt/decrypt facade
//!
//! Composes the random source, key derivation, cipher, and blob codec into
//! the surface collaborators actually call: encrypt a string under a
//! password, decrypt a blob, pre-validate a blob, generate a password.
//!
//! Every call is single-shot and stateless apart from the vault's random
//! source; salt, nonce, and derived key live only for the duration of one
//! call and are never serialized beyond the blob itself.

use crate::blob;
use crate::cipher::{self, NONCE_LEN};
use crate::error::{ErrorCategory, ErrorKind, QuantumboxError, Result};
use crate::generator::{self, CharClasses};
use crate::kdf::{self, SALT_LEN};
use crate::random::{OsRandom, RandomSource};

/// Password-based encryption facade holding its randomness source.
///
/// Holding the source explicitly (instead of reaching for process-wide
/// state) lets tests substitute a deterministic [`RandomSource`].
pub struct Vault<R: RandomSource = OsRandom> {
    random: R,
}

impl Vault<OsRandom> {
    /// A vault backed by the operating system's secure random generator.
    pub fn new() -> Self {
        Self::with_random_source(OsRandom::new())
    }
}

impl Default for Vault<OsRandom> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> Vault<R> {
    pub fn with_random_source(random: R) -> Self {
        Self { random }
    }

    /// Encrypt `plaintext` under `password`, returning a base64 blob.
    ///
    /// A fresh salt and nonce are drawn for every call, so encrypting the
    /// same inputs twice yields different blobs. Fails only if the random
    /// source does.
    pub fn encrypt(&mut self, plaintext: &str, password: &str) -> Result<String> {
        let mut salt = [0u8; SALT_LEN];
        self.random.fill_bytes(&mut salt)?;

        let mut nonce = [0u8; NONCE_LEN];
        self.random.fill_bytes(&mut nonce)?;

        encrypt_with_params(plaintext, password, &salt, &nonce)
    }

    /// Decrypt a blob produced by [`Vault::encrypt`]. See [`decrypt`].
    pub fn decrypt(&self, blob: &str, password: &str) -> Result<String> {
        decrypt(blob, password)
    }

    /// Generate a random password from the selected character classes.
    pub fn generate_password(&mut self, length: usize, classes: CharClasses) -> Result<String> {
        generator::generate(&mut self.random, length, classes)
    }

    /// Generate a random alphanumeric id.
    pub fn generate_id(&mut self, length: usize) -> Result<String> {
        generator::generate_id(&mut self.random, length)
    }
}

/// Encrypt with a caller-provided salt and nonce.
///
/// This function is ONLY for testing purposes to generate deterministic
/// output. NEVER use this in production - always use [`Vault::encrypt`],
/// which draws a fresh random salt and nonce per call.
pub fn encrypt_with_params(
    plaintext: &str,
    password: &str,
    salt: &[u8; SALT_LEN],
    nonce: &[u8; NONCE_LEN],
) -> Result<String> {
    let key = kdf::derive_key(password, salt);
    let sealed = cipher::seal(&key, nonce, plaintext.as_bytes())?;
    Ok(blob::pack(salt, nonce, &sealed))
}

/// Encrypt `plaintext` under `password` using the OS random generator.
pub fn encrypt(plaintext: &str, password: &str) -> Result<String> {
    Vault::new().encrypt(plaintext, password)
}

/// Decrypt a blob back into the original string.
///
/// Unpacks the blob, re-derives the key from the password and the embedded
/// salt, and opens the sealed payload. A wrong password, tampered data, and
/// a payload that does not decode as UTF-8 all fail with the same
/// [`ErrorKind::DecryptionFailed`] and the same message; callers cannot tell
/// the cases apart, and are not meant to.
pub fn decrypt(blob: &str, password: &str) -> Result<String> {
    let (salt, nonce, payload) = blob::unpack(blob)?;
    let key = kdf::derive_key(password, &salt);
    let plaintext = cipher::open(&key, &nonce, &payload)?;
    let text = std::str::from_utf8(&plaintext).map_err(|_| {
        QuantumboxError::with_kind(
            ErrorCategory::User,
            ErrorKind::DecryptionFailed,
            "decryption failed: wrong password or corrupted data",
        )
    })?;
    Ok(text.to_owned())
}

/// Cheap structural pre-check of a blob. Advisory; see [`blob::is_valid`].
pub fn is_valid(blob: &str) -> bool {
    blob::is_valid(blob)
}

/// Generate a random password using the OS random generator.
pub fn generate_password(length: usize, classes: CharClasses) -> Result<String> {
    Vault::new().generate_password(length, classes)
}

//! Quantumbox - Password-based text encryption using PBKDF2 and AES-256-GCM
//!
//! Derives a 256-bit key from a password with PBKDF2-HMAC-SHA256 (100,000
//! iterations), seals the plaintext with AES-256-GCM under a fresh random
//! salt and nonce, and packs `salt || nonce || ciphertext+tag` into a single
//! base64 string. Decryption is the inverse; a wrong password and corrupted
//! data fail identically.
//!
//! ```no_run
//! let blob = quantumbox::encrypt("hello world", "correct-horse-battery-staple")?;
//! assert!(quantumbox::is_valid(&blob));
//! let plain = quantumbox::decrypt(&blob, "correct-horse-battery-staple")?;
//! assert_eq!(plain, "hello world");
//! # Ok::<(), quantumbox::QuantumboxError>(())
//! ```

#![forbid(unsafe_code)]

pub mod blob;
pub mod cipher;
pub mod error;
pub mod generator;
pub mod kdf;
pub mod random;
pub mod strength;
pub mod vault;

pub use error::{ErrorCategory, ErrorKind, QuantumboxError, Result};
pub use generator::CharClasses;
pub use random::{OsRandom, RandomSource};
pub use vault::{Vault, decrypt, encrypt, generate_password, is_valid};

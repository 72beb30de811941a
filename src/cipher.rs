//! Authenticated encryption with AES-256-GCM
//!
//! Seals and opens byte payloads under a caller-supplied key and nonce. The
//! nonce is 16 bytes rather than GCM's usual 12; for non-96-bit nonces GCM
//! derives the initial counter through GHASH as specified, which keeps this
//! module interoperable with blobs produced by other standard GCM
//! implementations using 16-byte IVs.
//!
//! Both operations are pure functions of their inputs - the caller provides
//! the nonce, nothing here draws randomness.

use crate::error::{ErrorCategory, ErrorKind, QuantumboxError, Result};
use crate::kdf::KEY_LEN;
use aes_gcm::aead::consts::U16;
use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::aes::Aes256;
use aes_gcm::{AesGcm, Nonce};
use zeroize::Zeroizing;

/// Length of nonce in bytes
pub const NONCE_LEN: usize = 16;

/// Length of the authentication tag appended to the ciphertext
pub const TAG_LEN: usize = 16;

/// AES-256-GCM parameterized with a 16-byte nonce.
type Aes256Gcm16 = AesGcm<Aes256, U16>;

/// Encrypt and authenticate `plaintext`, returning ciphertext || 16-byte tag.
pub fn seal(
    key: &[u8; KEY_LEN],
    nonce: &[u8; NONCE_LEN],
    plaintext: &[u8],
) -> Result<Vec<u8>> {
    let cipher = Aes256Gcm16::new(&(*key).into());
    let nonce_obj = Nonce::from(*nonce);
    cipher.encrypt(&nonce_obj, plaintext).map_err(|_| {
        QuantumboxError::new(ErrorCategory::Internal, "AES-GCM encryption failed")
    })
}

/// Verify and decrypt a sealed payload.
///
/// Fails with a single [`ErrorKind::DecryptionFailed`] whether the data was
/// tampered with or the key was derived from the wrong password; the two
/// cases are deliberately indistinguishable. There is no separate password
/// check anywhere - tag verification is it.
pub fn open(
    key: &[u8; KEY_LEN],
    nonce: &[u8; NONCE_LEN],
    sealed: &[u8],
) -> Result<Zeroizing<Vec<u8>>> {
    let cipher = Aes256Gcm16::new(&(*key).into());
    let nonce_obj = Nonce::from(*nonce);
    let plaintext = cipher.decrypt(&nonce_obj, sealed).map_err(|_| {
        QuantumboxError::with_kind(
            ErrorCategory::User,
            ErrorKind::DecryptionFailed,
            "decryption failed: wrong password or corrupted data",
        )
    })?;
    Ok(Zeroizing::new(plaintext))
}

//! Blob packing and parsing
//!
//! An encrypted blob is the ordered concatenation salt(32) + nonce(16) +
//! ciphertext-with-tag (variable), encoded as a single standard base64 string
//! with padding. There is no version byte and no algorithm identifier; the
//! format is implicit and fixed, and byte offsets must be preserved exactly
//! for existing blobs to keep decrypting.

use crate::cipher::NONCE_LEN;
use crate::error::{ErrorCategory, ErrorKind, QuantumboxError, Result};
use crate::kdf::SALT_LEN;
use base64::{Engine, engine::general_purpose::STANDARD};

/// Minimum decoded length of a structurally valid blob. Anything shorter
/// cannot even contain the salt and nonce header.
pub const MIN_BLOB_LEN: usize = SALT_LEN + NONCE_LEN;

/// Pack salt, nonce, and sealed payload into a base64 blob string.
pub fn pack(salt: &[u8; SALT_LEN], nonce: &[u8; NONCE_LEN], payload: &[u8]) -> String {
    let mut body = Vec::with_capacity(SALT_LEN + NONCE_LEN + payload.len());
    body.extend_from_slice(salt);
    body.extend_from_slice(nonce);
    body.extend_from_slice(payload);
    STANDARD.encode(&body)
}

/// Parse a blob string back into (salt, nonce, sealed payload).
///
/// The split happens at fixed offsets: bytes [0,32) are the salt, [32,48)
/// the nonce, and everything after is the sealed payload. The payload is not
/// inspected here; whether it authenticates is the cipher's business.
pub fn unpack(blob: &str) -> Result<([u8; SALT_LEN], [u8; NONCE_LEN], Vec<u8>)> {
    let body = STANDARD.decode(blob).map_err(|e| {
        QuantumboxError::with_kind_and_source(
            ErrorCategory::User,
            ErrorKind::BlobDecode,
            format!("base64 decoding failed: {}", e),
            e,
        )
    })?;

    if body.len() < MIN_BLOB_LEN {
        return Err(QuantumboxError::with_kind(
            ErrorCategory::User,
            ErrorKind::TruncatedInput,
            "input shorter than salt and nonce header; likely truncated",
        ));
    }

    // Infallible: lengths checked above.
    let salt: [u8; SALT_LEN] = body[..SALT_LEN].try_into().map_err(|_| {
        QuantumboxError::new(ErrorCategory::Internal, "salt slice length mismatch")
    })?;
    let nonce: [u8; NONCE_LEN] = body[SALT_LEN..MIN_BLOB_LEN].try_into().map_err(|_| {
        QuantumboxError::new(ErrorCategory::Internal, "nonce slice length mismatch")
    })?;
    let payload = body[MIN_BLOB_LEN..].to_vec();

    Ok((salt, nonce, payload))
}

/// Cheap structural check without attempting decryption.
///
/// Advisory only: a blob that passes can still fail to decrypt. UI callers
/// use this for fast feedback before paying for the KDF-backed decrypt.
/// Never panics.
pub fn is_valid(blob: &str) -> bool {
    match STANDARD.decode(blob) {
        Ok(body) => body.len() >= MIN_BLOB_LEN,
        Err(_) => false,
    }
}

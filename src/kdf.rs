//! Key derivation from passwords
//!
//! Stretches a password and salt into a 256-bit cipher key using
//! PBKDF2-HMAC-SHA256 with a fixed iteration count. The parameters are part
//! of the wire format: changing any of them breaks decryption of existing
//! blobs.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::Zeroizing;

/// Length of salt in bytes
pub const SALT_LEN: usize = 32;

/// Length of derived key in bytes (AES-256)
pub const KEY_LEN: usize = 32;

/// PBKDF2 iteration count
pub const ITERATIONS: u32 = 100_000;

/// Derive a 32-byte key from a password and salt.
///
/// Deterministic: the same (password, salt) pair always yields the same key.
/// The password's UTF-8 bytes are fed to the KDF whole - never truncated or
/// pre-hashed. An empty password is accepted; password strength is the
/// caller's concern, not this layer's.
///
/// This is CPU-bound and intentionally slow (around a hundred milliseconds).
/// Callers that cannot block should run it on a worker thread.
pub fn derive_key(password: &str, salt: &[u8; SALT_LEN]) -> Zeroizing<[u8; KEY_LEN]> {
    let mut key = Zeroizing::new([0u8; KEY_LEN]);
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, ITERATIONS, &mut *key);
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic() {
        let salt = [7u8; SALT_LEN];
        let k1 = derive_key("password", &salt);
        let k2 = derive_key("password", &salt);
        assert_eq!(*k1, *k2);
    }

    #[test]
    fn test_different_password_different_key() {
        let salt = [7u8; SALT_LEN];
        assert_ne!(*derive_key("password", &salt), *derive_key("Password", &salt));
    }

    #[test]
    fn test_different_salt_different_key() {
        assert_ne!(
            *derive_key("password", &[1u8; SALT_LEN]),
            *derive_key("password", &[2u8; SALT_LEN])
        );
    }

    #[test]
    fn test_empty_password_accepted() {
        let salt = [0u8; SALT_LEN];
        let key = derive_key("", &salt);
        assert_ne!(*key, [0u8; KEY_LEN]);
    }

    #[test]
    fn test_known_vector() {
        // PBKDF2-HMAC-SHA256("password", 32 zero bytes, 100000 iterations),
        // computed with an independent implementation.
        let salt = [0u8; SALT_LEN];
        let key = derive_key("password", &salt);
        let expected: [u8; KEY_LEN] = [
            0xb7, 0x7d, 0x00, 0x7d, 0x1a, 0x61, 0x35, 0x51,
            0x5a, 0x1e, 0xb9, 0x81, 0x16, 0x39, 0xe4, 0xa9,
            0x6b, 0x1f, 0xd4, 0xba, 0x2b, 0x2b, 0x8e, 0xd3,
            0x89, 0x38, 0x3f, 0x81, 0x97, 0x9a, 0x42, 0xd2,
        ];
        assert_eq!(*key, expected);
    }
}

//! Cryptographically secure randomness
//!
//! All salts, nonces, and generated passwords draw their bytes through the
//! [`RandomSource`] trait. The only production implementation is [`OsRandom`],
//! backed by the operating system's CSPRNG. There is deliberately no
//! lower-quality fallback: if the OS generator fails, the operation fails.

use crate::error::{ErrorCategory, ErrorKind, QuantumboxError, Result};
use rand::RngCore;
use rand::rngs::OsRng;
use zeroize::Zeroizing;

/// Source of cryptographically strong random bytes.
///
/// Held by the [`Vault`](crate::vault::Vault) facade rather than accessed
/// through process-wide state, so tests can substitute a deterministic source.
pub trait RandomSource {
    /// Fill `dest` with uniformly distributed, unpredictable bytes.
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<()>;

    /// Convenience wrapper allocating a fresh buffer of `n` random bytes.
    ///
    /// The buffer is `Zeroizing` since callers routinely use it for key-like
    /// material.
    fn generate_bytes(&mut self, n: usize) -> Result<Zeroizing<Vec<u8>>> {
        let mut buf = Zeroizing::new(vec![0u8; n]);
        self.fill_bytes(&mut buf)?;
        Ok(buf)
    }
}

/// The operating system's secure random generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl OsRandom {
    pub fn new() -> Self {
        Self
    }
}

impl RandomSource for OsRandom {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<()> {
        OsRng.try_fill_bytes(dest).map_err(|e| {
            QuantumboxError::with_kind_and_source(
                ErrorCategory::Internal,
                ErrorKind::RandomUnavailable,
                "OS secure random generator unavailable",
                e,
            )
        })
    }
}

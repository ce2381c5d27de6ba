//! Type-safe wrappers for cipher inputs
//!
//! Domain-specific types with compile-time and runtime guarantees, designed
//! to be ergonomic while preventing common mistakes such as passing a nonce
//! of the wrong size.

pub mod nonce;

// Sealed trait module (not public)
pub(crate) mod sealed;

pub use nonce::{ChaCha20Compatible, Nonce};

use rand::{CryptoRng, RngCore};

/// Trait for cipher types with constant-time equality
pub trait ConstantTimeEq {
    /// Compare two values in constant time
    fn ct_eq(&self, other: &Self) -> bool;
}

/// Trait for cipher types that can be randomly generated
pub trait RandomGeneration: Sized {
    /// Generate a random instance using the provided RNG
    fn random<R: RngCore + CryptoRng>(rng: &mut R) -> crate::error::Result<Self>;
}

/// Trait for types that have a fixed size
pub trait FixedSize {
    /// Get the size in bytes
    fn size() -> usize;
}

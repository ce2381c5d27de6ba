//! ChaCha20 stream cipher (RFC 8439)
//!
//! This crate provides a pure Rust, software-only implementation of the
//! ChaCha20 stream cipher as specified in RFC 8439, with no FFI and no
//! architecture-specific code. It is usable in both `std` and `no_std`
//! environments (an allocator is required).
//!
//! # Security Features
//!
//! - Secret key material is held in zeroize-on-drop buffers
//! - Nonce comparison is constant-time
//! - Input lengths are validated; wrong-sized keys or nonces are rejected
//!   instead of being truncated or padded
//! - The block counter is explicit in the API, keeping (key, nonce, counter)
//!   reuse visible to the caller
//!
//! ChaCha20 on its own provides confidentiality only. It has no integrity
//! or authenticity guarantees and must be combined with a MAC in any real
//! protocol. Nonce uniqueness per key is the caller's responsibility.
//!
//! # Example
//!
//! ```
//! use chacha20_stream::transform;
//!
//! let key = [0x42u8; 32];
//! let nonce = [0x24u8; 12];
//!
//! let ciphertext = transform(&key, &nonce, 1, b"attack at dawn")?;
//! let plaintext = transform(&key, &nonce, 1, &ciphertext)?;
//! assert_eq!(plaintext, b"attack at dawn");
//! # Ok::<(), chacha20_stream::Error>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Secure memory handling
pub mod security;
pub use security::{EphemeralSecret, SecretBuffer, SecureZeroingType};

// Type system
pub mod types;
pub use types::{ChaCha20Compatible, Nonce, RandomGeneration};

// Stream cipher implementations
pub mod stream;
pub use stream::chacha::chacha20::{
    transform, ChaCha20, CHACHA20_BLOCK_SIZE, CHACHA20_KEY_SIZE, CHACHA20_MAX_STREAM_LEN,
    CHACHA20_NONCE_SIZE,
};
pub use stream::StreamCipher;

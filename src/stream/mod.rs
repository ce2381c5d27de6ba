//! Stream cipher implementations
//!
//! Stream ciphers encrypt by XORing plaintext with a pseudorandom keystream
//! derived from a key and a nonce. The same operation decrypts.
//!
//! # Security Considerations
//!
//! A nonce must never be reused with the same key: two messages encrypted
//! under the same (key, nonce) pair leak the XOR of their plaintexts. This
//! module keeps the block counter explicit for the same reason.

/// ChaCha family of stream cipher implementations
pub mod chacha;

pub use chacha::chacha20::{
    ChaCha20, CHACHA20_BLOCK_SIZE, CHACHA20_KEY_SIZE, CHACHA20_NONCE_SIZE,
};

use crate::error::{validate, Result};

/// Common trait for stream cipher implementations
pub trait StreamCipher {
    /// The key size in bytes
    const KEY_SIZE: usize;

    /// The nonce size in bytes
    const NONCE_SIZE: usize;

    /// The internal block size in bytes
    const BLOCK_SIZE: usize;

    /// Process data in place; the same transform encrypts and decrypts
    fn process(&mut self, data: &mut [u8]) -> Result<()>;

    /// Encrypt data in place
    fn encrypt(&mut self, data: &mut [u8]) -> Result<()> {
        self.process(data)
    }

    /// Decrypt data in place
    fn decrypt(&mut self, data: &mut [u8]) -> Result<()> {
        self.process(data)
    }

    /// Generate keystream directly into an output buffer
    fn keystream(&mut self, output: &mut [u8]) -> Result<()>;

    /// Reset the cipher to its initial state
    fn reset(&mut self) -> Result<()>;

    /// Seek to a block position relative to the initial counter
    fn seek(&mut self, position: u64) -> Result<()>;
}

impl StreamCipher for ChaCha20 {
    const KEY_SIZE: usize = CHACHA20_KEY_SIZE;
    const NONCE_SIZE: usize = CHACHA20_NONCE_SIZE;
    const BLOCK_SIZE: usize = CHACHA20_BLOCK_SIZE;

    fn process(&mut self, data: &mut [u8]) -> Result<()> {
        self.process(data);
        Ok(())
    }

    fn keystream(&mut self, output: &mut [u8]) -> Result<()> {
        self.keystream(output);
        Ok(())
    }

    fn reset(&mut self) -> Result<()> {
        self.reset();
        Ok(())
    }

    fn seek(&mut self, position: u64) -> Result<()> {
        validate::parameter(
            position <= u64::from(u32::MAX),
            "position",
            "ChaCha20 seek position must fit in u32",
        )?;
        self.seek(position as u32);
        Ok(())
    }
}

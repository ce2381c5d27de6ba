//! ChaCha20 stream cipher implementation
//!
//! Implements the ChaCha20 stream cipher as defined in RFC 8439. The cipher
//! keys a 16-word state from a 256-bit key, a 32-bit block counter, and a
//! 96-bit nonce, then derives each 64-byte keystream block by running 20
//! rounds of ARX mixing over a copy of that state and adding the original
//! state back before serialization.

use alloc::vec::Vec;
use core::fmt;

use byteorder::{ByteOrder, LittleEndian};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{validate, Result};
use crate::security::{EphemeralSecret, SecretBuffer};
use crate::types::nonce::ChaCha20Compatible;
use crate::types::Nonce;

/// Size of ChaCha20 key in bytes
pub const CHACHA20_KEY_SIZE: usize = 32;
/// Size of ChaCha20 nonce in bytes
pub const CHACHA20_NONCE_SIZE: usize = 12;
/// Size of ChaCha20 block in bytes
pub const CHACHA20_BLOCK_SIZE: usize = 64;

/// Maximum number of bytes one (key, nonce, counter) stream can carry
/// before the 32-bit block counter would wrap: 2^32 blocks of 64 bytes.
pub const CHACHA20_MAX_STREAM_LEN: u64 = (1u64 << 32) * CHACHA20_BLOCK_SIZE as u64;

/// Number of 32-bit words in the cipher state
const STATE_WORDS: usize = 16;

/// "expand 32-byte k", little-endian
const CONSTANTS: [u32; 4] = [0x6170_7865, 0x3320_646e, 0x7962_2d32, 0x6b20_6574];

/// Each double round is one column pass plus one diagonal pass; RFC 8439
/// specifies ten of them (20 rounds)
const DOUBLE_ROUNDS: usize = 10;

/// The ChaCha20 quarter round: four ARX steps over state words a, b, c, d.
/// The rotation distances 16, 12, 8, 7 are fixed by RFC 8439.
#[inline]
fn quarter_round(state: &mut [u32; STATE_WORDS], a: usize, b: usize, c: usize, d: usize) {
    state[a] = state[a].wrapping_add(state[b]);
    state[d] ^= state[a];
    state[d] = state[d].rotate_left(16);

    state[c] = state[c].wrapping_add(state[d]);
    state[b] ^= state[c];
    state[b] = state[b].rotate_left(12);

    state[a] = state[a].wrapping_add(state[b]);
    state[d] ^= state[a];
    state[d] = state[d].rotate_left(8);

    state[c] = state[c].wrapping_add(state[d]);
    state[b] ^= state[c];
    state[b] = state[b].rotate_left(7);
}

/// Assemble the initial 4x4 word matrix: constants, key, counter, nonce.
///
/// Pure and deterministic. Lengths are guaranteed by the public
/// constructors; this function reads exactly 32 key bytes and 12 nonce
/// bytes, little-endian.
fn build_state(key: &[u8], counter: u32, nonce: &[u8]) -> [u32; STATE_WORDS] {
    let mut state = [0u32; STATE_WORDS];

    state[..4].copy_from_slice(&CONSTANTS);

    for i in 0..8 {
        state[4 + i] = LittleEndian::read_u32(&key[i * 4..]);
    }

    state[12] = counter;

    state[13] = LittleEndian::read_u32(&nonce[0..4]);
    state[14] = LittleEndian::read_u32(&nonce[4..8]);
    state[15] = LittleEndian::read_u32(&nonce[8..12]);

    state
}

/// Run the 20-round permutation over `initial` and serialize the
/// feed-forward sum into `block`.
///
/// The feed-forward addition of the original state is what makes the block
/// function non-invertible; it is part of the RFC definition, not optional.
fn keystream_block(initial: &[u32; STATE_WORDS], block: &mut [u8; CHACHA20_BLOCK_SIZE]) {
    let mut working = EphemeralSecret::new(*initial);

    for _ in 0..DOUBLE_ROUNDS {
        // Column rounds
        quarter_round(&mut working, 0, 4, 8, 12);
        quarter_round(&mut working, 1, 5, 9, 13);
        quarter_round(&mut working, 2, 6, 10, 14);
        quarter_round(&mut working, 3, 7, 11, 15);

        // Diagonal rounds
        quarter_round(&mut working, 0, 5, 10, 15);
        quarter_round(&mut working, 1, 6, 11, 12);
        quarter_round(&mut working, 2, 7, 8, 13);
        quarter_round(&mut working, 3, 4, 9, 14);
    }

    for (i, chunk) in block.chunks_exact_mut(4).enumerate() {
        LittleEndian::write_u32(chunk, working[i].wrapping_add(initial[i]));
    }
}

/// ChaCha20 stream cipher with an internal keystream buffer
///
/// The key/nonce-derived word layout is cached; only the counter word
/// changes between blocks. Keystream is produced one 64-byte block at a
/// time and consumed byte-wise, so inputs need not be block-aligned.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct ChaCha20 {
    /// Initial state; word 12 holds the starting counter
    state: [u32; STATE_WORDS],
    /// Current keystream block
    buffer: [u8; CHACHA20_BLOCK_SIZE],
    /// Consumed bytes of `buffer`
    position: usize,
    /// Counter for the next block to generate
    counter: u32,
}

impl ChaCha20 {
    /// Create a cipher with the given key and nonce, counter starting at 0
    ///
    /// # Errors
    ///
    /// Returns a length error if `key` is not 32 bytes or `nonce` is not
    /// 12 bytes.
    pub fn new(key: &[u8], nonce: &[u8]) -> Result<Self> {
        Self::with_counter(key, nonce, 0)
    }

    /// Create a cipher with the given key, nonce, and initial counter
    ///
    /// RFC 8439 starts the counter at 1 when the first block is reserved
    /// for a one-time MAC key; any starting value is accepted here.
    ///
    /// # Errors
    ///
    /// Returns a length error if `key` is not 32 bytes or `nonce` is not
    /// 12 bytes.
    pub fn with_counter(key: &[u8], nonce: &[u8], counter: u32) -> Result<Self> {
        validate::length("ChaCha20 key", key.len(), CHACHA20_KEY_SIZE)?;
        validate::length("ChaCha20 nonce", nonce.len(), CHACHA20_NONCE_SIZE)?;
        let key = SecretBuffer::<CHACHA20_KEY_SIZE>::from_slice(key)?;
        let nonce = Nonce::<CHACHA20_NONCE_SIZE>::from_slice(nonce)?;
        Ok(Self::from_parts(&key, &nonce, counter))
    }

    /// Create a cipher from already-validated key and nonce material
    pub fn from_parts<const N: usize>(
        key: &SecretBuffer<CHACHA20_KEY_SIZE>,
        nonce: &Nonce<N>,
        counter: u32,
    ) -> Self
    where
        Nonce<N>: ChaCha20Compatible,
    {
        Self {
            state: build_state(key.as_ref(), counter, nonce.as_ref()),
            buffer: [0u8; CHACHA20_BLOCK_SIZE],
            // Force keystream generation on first use
            position: CHACHA20_BLOCK_SIZE,
            counter,
        }
    }

    /// Generate the next keystream block into the internal buffer
    fn generate_keystream(&mut self) {
        let mut initial = EphemeralSecret::new(self.state);
        initial[12] = self.counter;

        keystream_block(&initial, &mut self.buffer);

        self.position = 0;
        self.counter = self.counter.wrapping_add(1);
    }

    /// Encrypt or decrypt data in place
    ///
    /// The operation is symmetric: applying it twice from the same position
    /// restores the original bytes.
    pub fn process(&mut self, data: &mut [u8]) {
        for byte in data.iter_mut() {
            if self.position >= CHACHA20_BLOCK_SIZE {
                self.generate_keystream();
            }

            *byte ^= self.buffer[self.position];
            self.position += 1;
        }
    }

    /// Encrypt data in place
    pub fn encrypt(&mut self, data: &mut [u8]) {
        self.process(data);
    }

    /// Decrypt data in place
    pub fn decrypt(&mut self, data: &mut [u8]) {
        self.process(data);
    }

    /// Generate keystream directly into an output buffer
    ///
    /// Starts at the next block boundary; any partially consumed block is
    /// discarded.
    pub fn keystream(&mut self, output: &mut [u8]) {
        for byte in output.iter_mut() {
            *byte = 0;
        }

        self.position = CHACHA20_BLOCK_SIZE;
        self.process(output);
    }

    /// Seek so the next generated block is `block` blocks past the initial
    /// counter
    ///
    /// The counter wraps modulo 2^32; staying within 2^32 blocks per nonce
    /// is the caller's responsibility.
    pub fn seek(&mut self, block: u32) {
        self.counter = self.state[12].wrapping_add(block);
        self.position = CHACHA20_BLOCK_SIZE;
        self.buffer.zeroize();
    }

    /// Reset to the initial counter with the same key and nonce
    pub fn reset(&mut self) {
        self.counter = self.state[12];
        self.position = CHACHA20_BLOCK_SIZE;
        self.buffer.zeroize();
    }
}

// The cached state and keystream buffer are key-derived; never print them.
impl fmt::Debug for ChaCha20 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChaCha20([REDACTED])")
    }
}

/// Apply the ChaCha20 keystream to `data`, returning a new vector of the
/// same length
///
/// Block `i` of the input is XORed with the keystream block generated for
/// counter `initial_counter + i` (wrapping modulo 2^32). Encryption and
/// decryption are the same operation: applying `transform` twice with
/// identical arguments returns the original input. Zero-length input yields
/// zero-length output without generating any keystream.
///
/// Each block's keystream depends only on (key, nonce, counter), never on
/// neighboring blocks, so callers may also partition large inputs and
/// process block ranges independently.
///
/// # Errors
///
/// Returns a length error if `key` is not 32 bytes or `nonce` is not 12
/// bytes, and a parameter error if `data` is longer than
/// [`CHACHA20_MAX_STREAM_LEN`], which would wrap the 32-bit counter
/// mid-stream.
pub fn transform(key: &[u8], nonce: &[u8], initial_counter: u32, data: &[u8]) -> Result<Vec<u8>> {
    validate::length("ChaCha20 key", key.len(), CHACHA20_KEY_SIZE)?;
    validate::length("ChaCha20 nonce", nonce.len(), CHACHA20_NONCE_SIZE)?;
    validate::parameter(
        data.len() as u64 <= CHACHA20_MAX_STREAM_LEN,
        "data",
        "stream exceeds 2^32 ChaCha20 blocks for one nonce",
    )?;

    if data.is_empty() {
        return Ok(Vec::new());
    }

    let state = EphemeralSecret::new(build_state(key, initial_counter, nonce));
    let mut out = Vec::with_capacity(data.len());
    let mut block = [0u8; CHACHA20_BLOCK_SIZE];

    for (i, chunk) in data.chunks(CHACHA20_BLOCK_SIZE).enumerate() {
        let mut initial = EphemeralSecret::new(*state);
        initial[12] = initial_counter.wrapping_add(i as u32);

        keystream_block(&initial, &mut block);

        // A partial final chunk consumes only the keystream prefix it needs
        out.extend(chunk.iter().zip(block.iter()).map(|(p, k)| p ^ k));
    }

    block.zeroize();
    Ok(out)
}

//! Property-based tests for the ChaCha20 stream cipher

use chacha20_stream::{transform, ChaCha20, StreamCipher};
use proptest::prelude::*;

/// Arbitrary message up to a few blocks long, including the empty message
fn message() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=512)
}

proptest! {
    #[test]
    fn transform_is_an_involution(
        key in any::<[u8; 32]>(),
        nonce in any::<[u8; 12]>(),
        counter in any::<u32>(),
        data in message()
    ) {
        let ciphertext = transform(&key, &nonce, counter, &data).unwrap();
        let plaintext = transform(&key, &nonce, counter, &ciphertext).unwrap();
        prop_assert_eq!(plaintext, data);
    }

    #[test]
    fn transform_preserves_length(
        key in any::<[u8; 32]>(),
        nonce in any::<[u8; 12]>(),
        counter in any::<u32>(),
        data in message()
    ) {
        let ciphertext = transform(&key, &nonce, counter, &data).unwrap();
        prop_assert_eq!(ciphertext.len(), data.len());
    }

    #[test]
    fn earlier_blocks_do_not_depend_on_later_input(
        key in any::<[u8; 32]>(),
        nonce in any::<[u8; 12]>(),
        counter in any::<u32>(),
        data in message(),
        split in any::<prop::sample::Index>()
    ) {
        let cut = split.index(data.len() + 1);
        let full = transform(&key, &nonce, counter, &data).unwrap();
        let prefix = transform(&key, &nonce, counter, &data[..cut]).unwrap();
        prop_assert_eq!(&prefix[..], &full[..cut]);
    }

    #[test]
    fn different_nonces_produce_different_ciphertexts(
        key in any::<[u8; 32]>(),
        nonce1 in any::<[u8; 12]>(),
        nonce2 in any::<[u8; 12]>(),
        data in prop::collection::vec(any::<u8>(), 16..=256)
    ) {
        prop_assume!(nonce1 != nonce2);

        let ct1 = transform(&key, &nonce1, 0, &data).unwrap();
        let ct2 = transform(&key, &nonce2, 0, &data).unwrap();
        prop_assert_ne!(ct1, ct2);
    }

    #[test]
    fn different_keys_produce_different_ciphertexts(
        key1 in any::<[u8; 32]>(),
        key2 in any::<[u8; 32]>(),
        nonce in any::<[u8; 12]>(),
        data in prop::collection::vec(any::<u8>(), 16..=256)
    ) {
        prop_assume!(key1 != key2);

        let ct1 = transform(&key1, &nonce, 0, &data).unwrap();
        let ct2 = transform(&key2, &nonce, 0, &data).unwrap();
        prop_assert_ne!(ct1, ct2);
    }

    #[test]
    fn incremental_cipher_agrees_with_transform(
        key in any::<[u8; 32]>(),
        nonce in any::<[u8; 12]>(),
        counter in any::<u32>(),
        data in message()
    ) {
        let mut cipher = ChaCha20::with_counter(&key, &nonce, counter).unwrap();
        let mut buffer = data.clone();
        StreamCipher::process(&mut cipher, &mut buffer).unwrap();

        let expected = transform(&key, &nonce, counter, &data).unwrap();
        prop_assert_eq!(buffer, expected);
    }
}

//! RC5-32 block cipher: key expansion and single-block encryption/decryption.
//!
//! [`Rc5`] owns the subkey table expanded from a secret key and transforms
//! one 8-byte block at a time. There is no padding and no chaining mode.

mod block;
mod cipher;
mod decrypt;
mod encrypt;
mod error;
mod expand_key;
mod parameters;
mod rotate;

pub use block::Block;
pub use cipher::Rc5;
pub use decrypt::decrypt_block;
pub use encrypt::encrypt_block;
pub use error::Rc5Error;
pub use expand_key::{SubkeyTable, expand_key};
pub use parameters::Parameters;
pub use rotate::{rotate_left, rotate_right};

/// A single RC5 word. Every addition and subtraction on it wraps modulo 2^32.
pub type Word = u32;

/// Number of bits in a [`Word`] (`w`).
pub const RC5_WORD_SIZE: u32 = Word::BITS;

/// Number of bytes in a [`Word`] (`u = w / 8`).
pub(crate) const RC5_WORD_BYTES: usize = size_of::<Word>();

/// Size in bytes of one block, two words.
pub const RC5_BLOCK_SIZE: usize = 2 * RC5_WORD_BYTES;

/// Round count used by [`Parameters::default`].
pub const RC5_DEFAULT_ROUNDS: u8 = 12;

/// Magic constant `P32 = Odd((e - 2) * 2^32)`, the first word of the seed table.
pub(crate) const RC5_P32: Word = 0xB7E1_5163;

/// Magic constant `Q32 = Odd((phi - 1) * 2^32)`, the step between seed table words.
pub(crate) const RC5_Q32: Word = 0x9E37_79B9;

#[cfg(test)]
mod tests {
    use super::*;

    /// Decodes a hex test vector.
    fn from_hex(text: &str) -> Vec<u8> {
        hex::decode(text).expect("Test vector must be valid hex")
    }

    /// Counts the bits that differ between two blocks.
    fn bit_distance(left: &[u8; RC5_BLOCK_SIZE], right: &[u8; RC5_BLOCK_SIZE]) -> u32 {
        left.iter()
            .zip(right)
            .map(|(l, r)| (l ^ r).count_ones())
            .sum()
    }

    #[test]
    fn test_known_answer_vectors() {
        // RC5-32/12/16 vectors from Rivest's paper and the common reference set.
        const VECTORS: &[(&str, &str, &str)] = &[
            (
                "00000000000000000000000000000000",
                "0000000000000000",
                "21A5DBEE154B8F6D",
            ),
            (
                "915F4619BE41B2516355A50110A9CE91",
                "21A5DBEE154B8F6D",
                "F7C013AC5B2B8952",
            ),
            (
                "000102030405060708090A0B0C0D0E0F",
                "0011223344556677",
                "2DDC149BCF088B9E",
            ),
            (
                "000102030405060708090A0B0C0D0E0F",
                "0001020304050607",
                "C8D3B3C486700CFA",
            ),
        ];

        for &(key, plaintext, ciphertext) in VECTORS {
            let cipher = Rc5::new(&from_hex(key)).expect("Vector key must be accepted");

            let encrypted = cipher.encrypt(&from_hex(plaintext)).expect("8-byte block");
            assert_eq!(
                encrypted.as_slice(),
                from_hex(ciphertext).as_slice(),
                "Encryption mismatch for key {key}"
            );

            let decrypted = cipher.decrypt(&encrypted).expect("8-byte block");
            assert_eq!(
                decrypted.as_slice(),
                from_hex(plaintext).as_slice(),
                "Decryption mismatch for key {key}"
            );
        }
    }

    #[test]
    fn test_roundtrip_for_many_blocks() {
        let cipher = Rc5::new(b"roundtrip key").expect("Key must be accepted");

        for seed in 0u32..256 {
            let plaintext = Block::new(seed.wrapping_mul(0x0101_0101), !seed).to_bytes();

            let ciphertext = cipher.encrypt(&plaintext).expect("8-byte block");
            let recovered = cipher.decrypt(&ciphertext).expect("8-byte block");

            assert_eq!(recovered, plaintext, "Roundtrip failed for seed {seed}");
        }
    }

    #[test]
    fn test_encryption_is_deterministic() {
        const PLAINTEXT: &[u8; 8] = b"same blk";

        let first = Rc5::new(b"key").and_then(|c| c.encrypt(PLAINTEXT));
        let second = Rc5::new(b"key").and_then(|c| c.encrypt(PLAINTEXT));

        assert_eq!(first, second);
    }

    #[test]
    fn test_key_lengths_that_are_not_word_multiples_roundtrip() {
        const PLAINTEXT: &[u8; 8] = b"RC5-test";

        // 1, 4, 16 and 255 byte keys; the 255-byte key counts up from 0x00.
        let cases: [(Vec<u8>, &str); 4] = [
            (vec![0x01], "6402608342F416A7"),
            (b"abcd".to_vec(), "3FE1099C286647DB"),
            (b"0123456789abcdef".to_vec(), "57F97CF87CFA3552"),
            ((0..=254).collect(), "E56F4F6AF0771179"),
        ];

        for (key, expected) in cases {
            let cipher = Rc5::new(&key).expect("Non-empty key must be accepted");

            let ciphertext = cipher.encrypt(PLAINTEXT).expect("8-byte block");
            assert_eq!(
                ciphertext.as_slice(),
                from_hex(expected).as_slice(),
                "Unexpected ciphertext for a {}-byte key",
                key.len()
            );
            assert_eq!(&cipher.decrypt(&ciphertext).expect("8-byte block"), PLAINTEXT);
        }
    }

    #[test]
    fn test_single_bit_flips_avalanche() {
        const KEY: [u8; 16] = [0x5A; 16];
        const PLAINTEXT: [u8; 8] = *b"avalanch";

        let reference = Rc5::new(&KEY)
            .and_then(|c| c.encrypt(&PLAINTEXT))
            .expect("Reference encryption");

        for bit in 0..64 {
            let mut flipped = PLAINTEXT;
            flipped[bit / 8] ^= 1 << (bit % 8);

            let changed = Rc5::new(&KEY)
                .and_then(|c| c.encrypt(&flipped))
                .expect("Encryption with flipped plaintext bit");

            assert!(
                bit_distance(&reference, &changed) >= 10,
                "Flipping plaintext bit {bit} changed too few output bits"
            );
        }

        for bit in 0..128 {
            let mut flipped = KEY;
            flipped[bit / 8] ^= 1 << (bit % 8);

            let changed = Rc5::new(&flipped)
                .and_then(|c| c.encrypt(&PLAINTEXT))
                .expect("Encryption with flipped key bit");

            assert!(
                bit_distance(&reference, &changed) >= 10,
                "Flipping key bit {bit} changed too few output bits"
            );
        }
    }

    #[test]
    fn test_engine_is_shareable_between_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Rc5>();

        let cipher = Rc5::new(b"shared").expect("Key must be accepted");

        std::thread::scope(|scope| {
            for worker in 0u8..4 {
                let cipher = &cipher;
                scope.spawn(move || {
                    let plaintext = [worker; 8];
                    let ciphertext = cipher.encrypt(&plaintext).expect("8-byte block");
                    assert_eq!(cipher.decrypt(&ciphertext).expect("8-byte block"), plaintext);
                });
            }
        });
    }
}

//! Shared inputs for the workspace benchmarks.

/// Key lengths exercised by the key expansion benchmarks, in bytes.
pub const KEY_LENGTHS: [usize; 4] = [1, 4, 16, 255];

/// Builds a deterministic key of `length` bytes.
pub fn sample_key(length: usize) -> Vec<u8> {
    (0..length).map(|i| (i as u8).wrapping_mul(31).wrapping_add(7)).collect()
}

/// A fixed plaintext block.
pub const SAMPLE_BLOCK: [u8; rc5_cipher::RC5_BLOCK_SIZE] = *b"RC5bench";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_key_has_requested_length() {
        for length in KEY_LENGTHS {
            assert_eq!(sample_key(length).len(), length);
        }
    }
}

use crate::{Block, SubkeyTable, rotate::rotate_left};

/// Encrypts one block with an expanded subkey table.
///
/// The block is whitened with `S[0]` and `S[1]`, then each round mixes the
/// halves through XOR, a data-dependent left rotation and a subkey addition.
/// `B` is updated from the `A` computed earlier in the same round.
///
/// # Parameters
/// - `block`: The plaintext words.
/// - `subkeys`: The table produced by [`expand_key`](crate::expand_key).
///
/// # Returns
/// The ciphertext words.
pub fn encrypt_block(block: Block, subkeys: &SubkeyTable) -> Block {
    // Whitening: add S[0] and S[1] before the first round.
    let (s0, s1) = subkeys.pair(0);

    let mut a = block.a.wrapping_add(s0);
    let mut b = block.b.wrapping_add(s1);

    for round in 1..=subkeys.rounds() as usize {
        let (s_a, s_b) = subkeys.pair(round);

        // A = ((A ^ B) <<< B) + S[2i]
        a = rotate_left(a ^ b, b).wrapping_add(s_a);

        // B = ((B ^ A) <<< A) + S[2i + 1], using the A just computed.
        b = rotate_left(b ^ a, a).wrapping_add(s_b);
    }

    Block::new(a, b)
}

use crate::{Block, SubkeyTable, rotate::rotate_right};

/// Decrypts one block with an expanded subkey table.
///
/// Runs the rounds of [`encrypt_block`](crate::encrypt_block) backwards: `B` is
/// recovered first from the current `A`, then `A` from the recovered `B`, and
/// finally the `S[0]`/`S[1]` whitening is removed.
///
/// # Parameters
/// - `block`: The ciphertext words.
/// - `subkeys`: The table the block was encrypted with.
///
/// # Returns
/// The plaintext words.
pub fn decrypt_block(block: Block, subkeys: &SubkeyTable) -> Block {
    let mut a = block.a;
    let mut b = block.b;

    // Walk the rounds from the last one back to the first.
    for round in (1..=subkeys.rounds() as usize).rev() {
        let (s_a, s_b) = subkeys.pair(round);

        // Undo the B update while A still holds this round's value.
        b = rotate_right(b.wrapping_sub(s_b), a) ^ a;

        // Undo the A update with the B recovered above.
        a = rotate_right(a.wrapping_sub(s_a), b) ^ b;
    }

    // Remove the whitening subkeys.
    let (s0, s1) = subkeys.pair(0);

    Block::new(a.wrapping_sub(s0), b.wrapping_sub(s1))
}

use crate::{RC5_WORD_SIZE, Word};

/// Rotates a word left by `amount` bit positions.
///
/// Only the low bits of `amount` matter: the shift is reduced modulo the word
/// size first, so an amount that is a multiple of 32 returns `value` unchanged.
#[inline(always)]
pub fn rotate_left(value: Word, amount: Word) -> Word {
    value.rotate_left(amount % RC5_WORD_SIZE)
}

/// Rotates a word right by `amount` bit positions. Inverse of [`rotate_left`].
#[inline(always)]
pub fn rotate_right(value: Word, amount: Word) -> Word {
    value.rotate_right(amount % RC5_WORD_SIZE)
}

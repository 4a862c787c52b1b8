use log::trace;

use crate::{Parameters, RC5_P32, RC5_Q32, RC5_WORD_BYTES, Rc5Error, Word, rotate::rotate_left};

/// The expanded subkey table `S` derived from a secret key.
///
/// Holds `2 * (rounds + 1)` words: `S[0]` and `S[1]` whiten the block, and
/// every round `i` consumes `S[2i]` and `S[2i + 1]`.
#[derive(Clone, PartialEq, Eq)]
pub struct SubkeyTable {
    words: Box<[Word]>,
    rounds: u8,
}

impl SubkeyTable {
    /// Number of rounds this table was expanded for.
    #[inline(always)]
    pub const fn rounds(&self) -> u8 {
        self.rounds
    }

    /// Returns the pair of subkeys consumed by round `round` (1-based).
    ///
    /// Round 0 returns the whitening pair `S[0]`, `S[1]`.
    #[inline(always)]
    pub(crate) fn pair(&self, round: usize) -> (Word, Word) {
        (self.words[2 * round], self.words[2 * round + 1])
    }
}

impl std::ops::Deref for SubkeyTable {
    type Target = [Word];

    /// Dereferences to the subkey words, `S[0]` first.
    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        &self.words
    }
}

impl std::fmt::Debug for SubkeyTable {
    /// Prints the table shape only, never its words.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubkeyTable")
            .field("rounds", &self.rounds)
            .field("len", &self.words.len())
            .finish_non_exhaustive()
    }
}

/// Expands a secret key into the RC5 subkey table.
///
/// # Parameters
/// - `key`: The secret key, any non-empty number of bytes.
/// - `parameters`: Word size and round count to expand for.
///
/// # Returns
/// A [`SubkeyTable`] of `2 * (rounds + 1)` words, or an [`Rc5Error`] if the
/// key is unusable.
///
/// # Errors
/// - [`Rc5Error::InvalidKey`]: If `key` is empty.
pub fn expand_key(key: &[u8], parameters: &Parameters) -> Result<SubkeyTable, Rc5Error> {
    if key.is_empty() {
        return Err(Rc5Error::InvalidKey);
    }

    // L: the key as little-endian words, zero-padded at the high end.
    let mut key_words = pack_key_words(key);

    // S: the key-independent seed sequence P, P + Q, P + 2Q, ...
    let table_size = parameters.table_size();
    let mut subkeys = vec![0 as Word; table_size].into_boxed_slice();
    subkeys[0] = RC5_P32;
    for i in 1..table_size {
        subkeys[i] = subkeys[i - 1].wrapping_add(RC5_Q32);
    }

    // Mix the key into the table, cycling through the longer of S and L three times.
    let iterations = 3 * table_size.max(key_words.len());

    trace!(
        "Expanding {}-byte key into {} subkeys over {} mixing steps",
        key.len(),
        table_size,
        iterations
    );

    // Running accumulators carried from one mixing step to the next.
    let (mut a, mut b): (Word, Word) = (0, 0);
    let (mut i, mut j) = (0, 0);

    for _ in 0..iterations {
        // Fold the accumulators into S[i] with a fixed rotation of 3.
        a = rotate_left(subkeys[i].wrapping_add(a).wrapping_add(b), 3);
        subkeys[i] = a;

        // Fold them into L[j], rotating by the data-dependent amount A + B.
        let sum = a.wrapping_add(b);
        b = rotate_left(key_words[j].wrapping_add(sum), sum);
        key_words[j] = b;

        // Advance both cursors, wrapping each at its own length.
        i = (i + 1) % table_size;
        j = (j + 1) % key_words.len();
    }

    Ok(SubkeyTable {
        words: subkeys,
        rounds: parameters.rounds(),
    })
}

/// Packs key bytes into `ceil(len / 4)` little-endian words.
///
/// Bytes are folded in from the last to the first, shifting the target word
/// left by one byte before adding each one.
///
/// # Returns
/// The `L` array consumed by the mixing pass of [`expand_key`].
fn pack_key_words(key: &[u8]) -> Vec<Word> {
    let mut words = vec![0 as Word; key.len().div_ceil(RC5_WORD_BYTES)];

    for (index, &byte) in key.iter().enumerate().rev() {
        // Byte `index` lands in word `index / 4`; earlier bytes end up lower.
        let word = &mut words[index / RC5_WORD_BYTES];
        *word = (*word << 8).wrapping_add(byte as Word);
    }

    words
}

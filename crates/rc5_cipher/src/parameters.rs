use crate::{RC5_DEFAULT_ROUNDS, RC5_WORD_SIZE, Rc5Error};

/// Word size and round count of an RC5 instance (the `w` and `r` of RC5-w/r/b).
///
/// Only 32-bit words are supported, because the magic constants are only
/// defined here for that width. The round count may be anything from 0 to 255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Parameters {
    word_size: u32,
    rounds: u8,
}

impl Parameters {
    /// Creates validated cipher parameters.
    ///
    /// # Errors
    /// - [`Rc5Error::UnsupportedWordSize`]: If `word_size` is not 32.
    pub const fn new(word_size: u32, rounds: u8) -> Result<Self, Rc5Error> {
        if word_size != RC5_WORD_SIZE {
            return Err(Rc5Error::UnsupportedWordSize(word_size));
        }

        Ok(Self { word_size, rounds })
    }

    /// RC5-32 with the given number of rounds.
    pub const fn with_rounds(rounds: u8) -> Self {
        Self {
            word_size: RC5_WORD_SIZE,
            rounds,
        }
    }

    /// Bits per word (`w`).
    #[inline(always)]
    pub const fn word_size(&self) -> u32 {
        self.word_size
    }

    /// Number of rounds (`r`).
    #[inline(always)]
    pub const fn rounds(&self) -> u8 {
        self.rounds
    }

    /// Number of words in the expanded subkey table, `t = 2 * (r + 1)`.
    #[inline(always)]
    pub const fn table_size(&self) -> usize {
        2 * (self.rounds as usize + 1)
    }
}

impl Default for Parameters {
    /// RC5-32/12, the nominal choice from the RC5 paper.
    fn default() -> Self {
        Self::with_rounds(RC5_DEFAULT_ROUNDS)
    }
}

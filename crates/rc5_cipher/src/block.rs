use bytes::{Buf, BufMut};

use crate::{RC5_BLOCK_SIZE, Rc5Error, Word};

/// One RC5 block: the two words `A` and `B`.
///
/// On the wire a block is 8 bytes, `A` first, each word little-endian.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Block {
    /// The first word (`A`).
    pub a: Word,
    /// The second word (`B`).
    pub b: Word,
}

impl Block {
    /// Creates a block from its two words.
    #[inline(always)]
    pub const fn new(a: Word, b: Word) -> Self {
        Self { a, b }
    }

    /// Reads a block from exactly [`RC5_BLOCK_SIZE`] bytes.
    ///
    /// # Errors
    /// - [`Rc5Error::InvalidLength`]: If `bytes` is not exactly 8 bytes long.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Rc5Error> {
        if bytes.len() != RC5_BLOCK_SIZE {
            return Err(Rc5Error::InvalidLength {
                expected: RC5_BLOCK_SIZE,
                actual: bytes.len(),
            });
        }

        let mut reader = bytes;
        let a = reader.get_u32_le();
        let b = reader.get_u32_le();

        Ok(Self { a, b })
    }

    /// Writes the block back into its 8-byte little-endian form.
    pub fn to_bytes(self) -> [u8; RC5_BLOCK_SIZE] {
        let mut bytes = [0u8; RC5_BLOCK_SIZE];

        let mut writer = &mut bytes[..];
        writer.put_u32_le(self.a);
        writer.put_u32_le(self.b);

        bytes
    }
}

impl From<[u8; RC5_BLOCK_SIZE]> for Block {
    #[inline(always)]
    fn from(bytes: [u8; RC5_BLOCK_SIZE]) -> Self {
        let mut reader = &bytes[..];
        Self::new(reader.get_u32_le(), reader.get_u32_le())
    }
}

impl From<Block> for [u8; RC5_BLOCK_SIZE] {
    #[inline(always)]
    fn from(block: Block) -> Self {
        block.to_bytes()
    }
}

impl TryFrom<&[u8]> for Block {
    type Error = Rc5Error;

    #[inline(always)]
    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(bytes)
    }
}

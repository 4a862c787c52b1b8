use crate::{
    Block, Parameters, RC5_BLOCK_SIZE, Rc5Error, SubkeyTable, decrypt_block, encrypt_block,
    expand_key,
};

/// An RC5 engine bound to one secret key.
///
/// The subkey table is expanded once in the constructor and only read
/// afterwards, so a single engine can be shared between threads and used for
/// any number of blocks.
///
/// # Example
/// ```
/// let cipher = rc5_cipher::Rc5::new(&[0u8; 16]).unwrap();
///
/// let ciphertext = cipher.encrypt(&[0u8; 8]).unwrap();
/// assert_eq!(ciphertext, [0x21, 0xA5, 0xDB, 0xEE, 0x15, 0x4B, 0x8F, 0x6D]);
/// assert_eq!(cipher.decrypt(&ciphertext).unwrap(), [0u8; 8]);
/// ```
#[derive(Clone)]
pub struct Rc5 {
    parameters: Parameters,
    subkeys: SubkeyTable,
}

impl Rc5 {
    /// Creates an RC5-32/12 engine for `key`.
    ///
    /// # Errors
    /// - [`Rc5Error::InvalidKey`]: If `key` is empty.
    pub fn new(key: &[u8]) -> Result<Self, Rc5Error> {
        Self::with_parameters(key, Parameters::default())
    }

    /// Creates an engine for `key` with explicit parameters.
    ///
    /// # Errors
    /// - [`Rc5Error::InvalidKey`]: If `key` is empty.
    pub fn with_parameters(key: &[u8], parameters: Parameters) -> Result<Self, Rc5Error> {
        let subkeys = expand_key(key, &parameters)?;

        Ok(Self {
            parameters,
            subkeys,
        })
    }

    /// The parameters this engine was built with.
    #[inline(always)]
    pub const fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// The expanded subkey table.
    #[inline(always)]
    pub const fn subkeys(&self) -> &SubkeyTable {
        &self.subkeys
    }

    /// Encrypts a single 8-byte block.
    ///
    /// # Errors
    /// - [`Rc5Error::InvalidLength`]: If `plaintext` is not exactly 8 bytes.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<[u8; RC5_BLOCK_SIZE], Rc5Error> {
        let block = Block::from_bytes(plaintext)?;

        Ok(self.encrypt_block(block).to_bytes())
    }

    /// Decrypts a single 8-byte block.
    ///
    /// # Errors
    /// - [`Rc5Error::InvalidLength`]: If `ciphertext` is not exactly 8 bytes.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<[u8; RC5_BLOCK_SIZE], Rc5Error> {
        let block = Block::from_bytes(ciphertext)?;

        Ok(self.decrypt_block(block).to_bytes())
    }

    /// Encrypts a block that is already split into words.
    #[inline]
    pub fn encrypt_block(&self, block: Block) -> Block {
        encrypt_block(block, &self.subkeys)
    }

    /// Decrypts a block that is already split into words.
    #[inline]
    pub fn decrypt_block(&self, block: Block) -> Block {
        decrypt_block(block, &self.subkeys)
    }
}

impl std::fmt::Debug for Rc5 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rc5")
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}

use log::debug;
use rc5_cipher::{Rc5, Rc5Error};
use thiserror::Error;

use crate::{mode::Mode, settings::HexCase};

/// Errors that can occur while turning hex input into a hex result.
#[derive(Debug, Error)]
pub(crate) enum ProcessError {
    /// Occurs when the input or the key is not valid hexadecimal.
    #[error("{field} is not valid hexadecimal")]
    InvalidHex {
        /// Which argument failed to decode.
        field: &'static str,
        /// The underlying decoding failure.
        source: hex::FromHexError,
    },

    /// Occurs when the cipher rejects the key or the block.
    #[error(transparent)]
    Cipher(#[from] Rc5Error),
}

/// Encrypts or decrypts one hex-encoded block with a hex-encoded key.
///
/// Whitespace anywhere in `input_hex` or `key_hex` is ignored, so both
/// `"00112233 44556677"` and `"0011223344556677"` are accepted.
pub(crate) fn process(
    mode: Mode,
    input_hex: &str,
    key_hex: &str,
    output_case: HexCase,
) -> Result<String, ProcessError> {
    let input = decode_hex("Input", input_hex)?;
    let key = decode_hex("Key", key_hex)?;

    debug!(
        "Running {} on a {}-byte block with a {}-byte key",
        mode,
        input.len(),
        key.len()
    );

    let cipher = Rc5::new(&key)?;

    let output = match mode {
        Mode::Encrypt => cipher.encrypt(&input)?,
        Mode::Decrypt => cipher.decrypt(&input)?,
    };

    Ok(output_case.encode(output))
}

fn decode_hex(field: &'static str, text: &str) -> Result<Vec<u8>, ProcessError> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();

    hex::decode(compact).map_err(|source| ProcessError::InvalidHex { field, source })
}

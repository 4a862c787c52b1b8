use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Direction in which a block is transformed.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, Default)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Mode {
    /// Plaintext in, ciphertext out.
    #[default]
    Encrypt,

    /// Ciphertext in, plaintext out.
    Decrypt,
}

impl FromStr for Mode {
    type Err = anyhow::Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text.to_ascii_lowercase().as_str() {
            "encrypt" | "enc" | "e" => Ok(Self::Encrypt),
            "decrypt" | "dec" | "d" => Ok(Self::Decrypt),
            other => anyhow::bail!("Unknown mode '{other}', expected 'encrypt' or 'decrypt'"),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encrypt => f.write_str("encrypt"),
            Self::Decrypt => f.write_str("decrypt"),
        }
    }
}

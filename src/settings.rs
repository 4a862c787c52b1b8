use anyhow::Context;
use log::{debug, info, trace};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::mode::Mode;

/// Command-line driver configuration.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Settings {
    /// Mode used when the command line does not name one.
    pub default_mode: Mode,

    /// Letter case of the hexadecimal result.
    pub output_case: HexCase,
}

impl Settings {
    /// Default path to the configuration file, relative to the working directory.
    pub(crate) const PATH: &'static str = "Rc5Settings.toml";

    /// Loads the settings from `path`, or falls back to the defaults if the file doesn't exist.
    ///
    /// A missing file is never created; only an existing file that cannot be
    /// read or parsed is an error.
    pub(crate) fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            info!(
                "Configuration file '{}' found, attempting to load.",
                path.display()
            );

            Self::load(path)
        } else {
            debug!(
                "Configuration file '{}' not found. Using default configuration.",
                path.display()
            );

            Ok(Self::default())
        }
    }

    /// Tries to load the settings from the file.
    fn load(path: &Path) -> anyhow::Result<Self> {
        debug!("Attempting to read configuration from '{}'", path.display());

        let config_str =
            fs::read_to_string(path).context("Failed to read the configuration file")?;

        let settings: Self = toml::from_str(&config_str)
            .context("Failed to parse the configuration file as TOML")?;

        trace!("Loaded settings: {:?}", settings);

        Ok(settings)
    }
}

/// Letter case used when rendering bytes as hexadecimal.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, Default)]
#[serde(rename_all = "lowercase")]
pub(crate) enum HexCase {
    /// `0a1b2c`.
    #[default]
    Lower,

    /// `0A1B2C`.
    Upper,
}

impl HexCase {
    /// Renders `bytes` as hexadecimal in this case.
    pub(crate) fn encode(self, bytes: impl AsRef<[u8]>) -> String {
        match self {
            Self::Lower => hex::encode(bytes),
            Self::Upper => hex::encode_upper(bytes),
        }
    }
}

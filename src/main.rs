mod mode;
mod process;
mod settings;

use anyhow::Context;
use log::info;
use std::{path::Path, process::ExitCode};

use crate::{mode::Mode, process::process, settings::Settings};

const USAGE: &str = "Usage: rc5 [encrypt|decrypt] <input-hex> <key-hex>";

/// Positional arguments after the program name.
#[derive(Debug, PartialEq, Eq)]
struct Request {
    mode: Option<Mode>,
    input_hex: String,
    key_hex: String,
}

impl Request {
    /// Parses `[mode] <input-hex> <key-hex>`.
    fn parse(args: &[String]) -> anyhow::Result<Self> {
        match args {
            [input_hex, key_hex] => Ok(Self {
                mode: None,
                input_hex: input_hex.clone(),
                key_hex: key_hex.clone(),
            }),
            [mode, input_hex, key_hex] => Ok(Self {
                mode: Some(mode.parse().context("Invalid mode argument")?),
                input_hex: input_hex.clone(),
                key_hex: key_hex.clone(),
            }),
            _ => anyhow::bail!("Expected 2 or 3 arguments, got {}", args.len()),
        }
    }
}

/// Loads the settings at `settings_path` and runs `request` against them.
///
/// Every failure comes back as one error chain so the caller reports it once.
fn run(request: &Request, settings_path: &Path) -> anyhow::Result<String> {
    let settings = Settings::load_or_default(settings_path).context("Failed to load settings")?;

    let mode = request.mode.unwrap_or(settings.default_mode);

    info!("Processing request in {} mode", mode);

    let result = process(
        mode,
        &request.input_hex,
        &request.key_hex,
        settings.output_case,
    )?;

    Ok(result)
}

fn main() -> ExitCode {
    pretty_env_logger::formatted_builder()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let request = match Request::parse(&args) {
        Ok(request) => request,
        Err(err) => {
            eprintln!("{err:#}\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    match run(&request, Path::new(Settings::PATH)) {
        Ok(result) => {
            println!("{result}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

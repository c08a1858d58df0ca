//! Command-line configuration for `compress_payload`.

use anyhow::{Result, anyhow, bail};
use std::path::PathBuf;

/// Default size the payload is compressed towards, in MiB.
pub const DEFAULT_TARGET_SIZE_MB: f64 = 150.0;

/// Usage line printed with argument errors.
pub const USAGE: &str =
    "usage: compress_payload <input.json> <output.json> [--aggressive] [--target-size <MB>]";

/// Options for a single compression run.
#[derive(Clone, Debug, PartialEq)]
pub struct CompressOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Skip the standard pass and go straight to the aggressive one.
    pub aggressive: bool,
    pub target_size_mb: f64,
}

impl Default for CompressOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            output: PathBuf::new(),
            aggressive: false,
            target_size_mb: DEFAULT_TARGET_SIZE_MB,
        }
    }
}

fn parse_target(raw: &str) -> Result<f64> {
    let target: f64 = raw
        .parse()
        .map_err(|_| anyhow!("invalid --target-size {raw:?}\n{USAGE}"))?;
    if !target.is_finite() || target < 0.0 {
        bail!("--target-size must be a non-negative number, got {raw:?}");
    }
    Ok(target)
}

impl CompressOptions {
    /// Parse arguments (without the program name).
    ///
    /// Accepts `--target-size N` and `--target-size=N` in any position.
    ///
    /// # Errors
    /// Returns an error for unknown flags, a missing or invalid target size,
    /// or a wrong number of positional paths.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut options = Self::default();
        let mut positional: Vec<String> = Vec::with_capacity(2);
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            if arg == "--aggressive" {
                options.aggressive = true;
            } else if arg == "--target-size" {
                let raw = args
                    .next()
                    .ok_or_else(|| anyhow!("--target-size needs a value\n{USAGE}"))?;
                options.target_size_mb = parse_target(&raw)?;
            } else if let Some(raw) = arg.strip_prefix("--target-size=") {
                options.target_size_mb = parse_target(raw)?;
            } else if arg.starts_with("--") {
                bail!("unknown flag {arg}\n{USAGE}");
            } else {
                positional.push(arg);
            }
        }
        match <[String; 2]>::try_from(positional) {
            Ok([input, output]) => {
                options.input = PathBuf::from(input);
                options.output = PathBuf::from(output);
                Ok(options)
            }
            Err(_) => Err(anyhow!("expected an input and an output path\n{USAGE}")),
        }
    }
}

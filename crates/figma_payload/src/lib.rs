//! Size reduction for design capture payloads.
//!
//! A capture payload is the JSON document built from mapped page styles
//! (`tree`, `assets`, `designTokens`, `components`, ...). Large pages produce
//! payloads the design-tool plugin cannot load, so this crate drops oversized
//! assets, trims design tokens and truncates the element tree until the
//! payload fits a target size.

#![forbid(unsafe_code)]

pub mod assets;
pub mod config;
pub mod passes;
pub mod tokens;
pub mod tree;

pub use assets::{compress_images, compress_svgs};
pub use config::CompressOptions;
pub use passes::{compress_aggressive, compress_standard};
pub use tokens::compress_design_tokens;
pub use tree::simplify_tree;

use anyhow::{Context as _, Result};
use log::{info, warn};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Bytes per mebibyte.
const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Size thresholds that steer [`compress_payload`], in MiB.
#[derive(Clone, Copy, Debug, PartialEq)]
struct SizeLimits {
    /// Payloads above this always get the aggressive pass first.
    aggressive_above_mb: f64,
    /// Final sizes above this are reported as still too large.
    warn_above_mb: f64,
}

const SIZE_LIMITS: SizeLimits = SizeLimits {
    aggressive_above_mb: 250.0,
    warn_above_mb: 200.0,
};

/// Which compression passes ran on a payload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Compression {
    /// Already under target; left untouched.
    #[default]
    Skipped,
    Standard,
    Aggressive,
    /// Standard, then aggressive because the target was still exceeded.
    StandardThenAggressive,
    /// Aggressive twice because the target was still exceeded.
    AggressiveTwice,
}

/// Outcome of [`compress_payload`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CompressReport {
    pub original_mb: f64,
    pub final_mb: f64,
    pub compression: Compression,
    /// The final size is still above the very-large warning threshold.
    pub still_large: bool,
}

impl CompressReport {
    /// Size reduction in percent of the original size.
    pub fn reduction_percent(&self) -> f64 {
        percent_reduction(self.original_mb, self.final_mb)
    }
}

fn percent_reduction(original_mb: f64, final_mb: f64) -> f64 {
    if original_mb > 0.0 {
        (original_mb - final_mb) / original_mb * 100.0
    } else {
        0.0
    }
}

/// Size of the compact JSON encoding of `payload`, in MiB.
pub fn payload_size_mb(payload: &Value) -> f64 {
    serde_json::to_vec(payload).map_or(0.0, |bytes| bytes.len() as f64 / BYTES_PER_MB)
}

/// Compress `payload` in place until it fits `options.target_size_mb`.
///
/// The aggressive pass is used up front when requested or when the payload
/// exceeds 250 MiB; otherwise the standard pass runs first and the
/// aggressive pass follows only if the target is still exceeded.
pub fn compress_payload(payload: &mut Value, options: &CompressOptions) -> CompressReport {
    compress_with_limits(payload, options, SIZE_LIMITS)
}

fn compress_with_limits(
    payload: &mut Value,
    options: &CompressOptions,
    limits: SizeLimits,
) -> CompressReport {
    let original_mb = payload_size_mb(payload);
    info!("Original size: {original_mb:.2}MB");

    if original_mb <= options.target_size_mb {
        info!("Payload is already under the {}MB target", options.target_size_mb);
        return CompressReport {
            original_mb,
            final_mb: original_mb,
            compression: Compression::Skipped,
            still_large: false,
        };
    }

    let aggressive_first = options.aggressive || original_mb > limits.aggressive_above_mb;
    if aggressive_first {
        compress_aggressive(payload);
    } else {
        compress_standard(payload);
    }

    let mut final_mb = payload_size_mb(payload);
    let reduction = percent_reduction(original_mb, final_mb);
    info!("Compressed size: {final_mb:.2}MB");
    info!("Size reduction: {reduction:.1}%");

    let compression = if final_mb > options.target_size_mb {
        warn!(
            "Still over the {}MB target, applying additional compression",
            options.target_size_mb
        );
        compress_aggressive(payload);
        final_mb = payload_size_mb(payload);
        info!("Final size: {final_mb:.2}MB");
        if aggressive_first {
            Compression::AggressiveTwice
        } else {
            Compression::StandardThenAggressive
        }
    } else if aggressive_first {
        Compression::Aggressive
    } else {
        Compression::Standard
    };

    let still_large = final_mb > limits.warn_above_mb;
    if still_large {
        warn!("Payload is still very large; consider capturing a smaller page");
    }

    CompressReport {
        original_mb,
        final_mb,
        compression,
        still_large,
    }
}

/// Read `options.input`, compress it and write compact JSON to
/// `options.output`.
///
/// # Errors
/// Returns an error when the input cannot be read or parsed, or the output
/// cannot be written.
pub fn run(options: &CompressOptions) -> Result<CompressReport> {
    info!("Loading {}", options.input.display());
    let mut payload = read_payload(&options.input)?;
    let report = compress_payload(&mut payload, options);
    info!("Saving to {}", options.output.display());
    write_payload(&options.output, &payload)?;
    info!("Compression complete");
    Ok(report)
}

fn read_payload(path: &Path) -> Result<Value> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("{} is not valid JSON", path.display()))
}

fn write_payload(path: &Path, payload: &Value) -> Result<()> {
    let bytes = serde_json::to_vec(payload)?;
    fs::write(path, bytes).with_context(|| format!("failed to write {}", path.display()))
}

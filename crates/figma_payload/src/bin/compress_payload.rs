//! Shrink a capture payload before it is handed to the design-tool plugin.

use env_logger::{Builder, Env};
use figma_payload::{CompressOptions, run};
use log::{error, info};
use std::env;
use std::process::exit;

fn main() {
    let _log_init: Result<(), _> = Builder::from_env(Env::default().filter_or("RUST_LOG", "info"))
        .is_test(false)
        .try_init();
    let options = match CompressOptions::from_args(env::args().skip(1)) {
        Ok(options) => options,
        Err(err) => {
            error!("{err}");
            exit(2);
        }
    };
    match run(&options) {
        Ok(report) => {
            info!(
                "{:.2}MB -> {:.2}MB ({:?})",
                report.original_mb, report.final_mb, report.compression
            );
        }
        Err(err) => {
            error!("error: {err:#}");
            exit(1);
        }
    }
}

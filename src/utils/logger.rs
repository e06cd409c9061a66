//! Logger setup for the command-line tool
//!
//! Installs `env_logger` as the backend of the `log` facade. Output goes to
//! stderr, or to a file when one is given.

use std::fs::File;
use std::path::Path;

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

use crate::errors::GeoResult;

/// Initialize the global logger
///
/// # Arguments
/// * `verbose` - Log at debug level instead of warn
/// * `log_file` - Optional file to write log records to
///
/// `RUST_LOG` overrides the level chosen here. Calling this twice is not an
/// error; the first logger stays installed.
pub fn init_logger(verbose: bool, log_file: Option<&str>) -> GeoResult<()> {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };

    let mut builder = Builder::new();
    builder.filter_level(level);
    builder.parse_env(Env::default());

    if let Some(path) = log_file {
        let file = File::create(Path::new(path))?;
        builder.target(Target::Pipe(Box::new(file)));
    }

    if builder.try_init().is_err() {
        log::debug!("Global logger was already initialized");
    }
    Ok(())
}

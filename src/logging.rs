use std::fs::File;
use std::path::{Path, PathBuf};

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

use crate::error::{Result, SceneError};

/// Environment variable naming a file to receive log output.
pub const LOG_FILE_ENV: &str = "COSMIC_LOG";

/// Initializes the global logger from `RUST_LOG` (default `warn`), writing
/// to the file named by `COSMIC_LOG` when it is set.
///
/// The scene owns the alternate screen, so anything written to stderr lands
/// on top of the stars. Call this before entering full-screen mode so a
/// failure can still be reported on a normal terminal.
pub fn init() -> Result<()> {
    let path = std::env::var_os(LOG_FILE_ENV).map(PathBuf::from);
    init_with(path.as_deref())
}

/// Like [`init`], with the log file given explicitly.
///
/// If the file cannot be created the logger still falls back to stderr,
/// and the error is returned so the caller can tell the user.
pub fn init_with(log_file: Option<&Path>) -> Result<()> {
    let env = Env::default().default_filter_or(LevelFilter::Warn.to_string());
    let mut builder = Builder::from_env(env);

    let opened = match log_file {
        Some(path) => File::create(path)
            .map(|file| {
                builder.target(Target::Pipe(Box::new(file)));
            })
            .map_err(|source| SceneError::LogFile {
                path: path.to_path_buf(),
                source,
            }),
        None => Ok(()),
    };

    // `try_init` only fails if a logger was already set.
    let _ = builder.try_init();
    opened
}

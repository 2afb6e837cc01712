use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop the scene.
///
/// None of these are recoverable: a failed asset load means the scene never
/// starts, and any error raised while resuming an entity ends the loop.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("failed to read ship frame {path}: {source}")]
    FrameLoad {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("draw at ({row}, {col}) is outside the {rows}x{cols} canvas")]
    OutOfBounds {
        row: i32,
        col: i32,
        rows: u16,
        cols: u16,
    },

    #[error("terminal is {rows}x{cols}; the ship needs at least {min_rows}x{min_cols}")]
    CanvasTooSmall {
        rows: u16,
        cols: u16,
        min_rows: u16,
        min_cols: u16,
    },

    #[error("cannot open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T, E = SceneError> = std::result::Result<T, E>;

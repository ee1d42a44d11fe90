use std::path::PathBuf;

use thiserror::Error;

/// Error types
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        source: netcdf::Error,
    },
    #[error("variable `{0}` not found in file")]
    MissingVariable(String),
    #[error("failed to read variable `{name}`: {source}")]
    Read { name: String, source: netcdf::Error },
    #[error("variable `{0}` holds no samples")]
    EmptySeries(String),
}

//! Crate-level error type.
//!
//! Each module reports its own error enum; [`MargaError`] wraps them so
//! binaries and callers mixing several modules can use a single `?`.

use thiserror::Error;

use crate::config::ConfigLoadError;
use crate::grid::GridBuildError;
use crate::io::{DatasetError, SvgError};
use crate::scenario::SampleError;

#[derive(Error, Debug)]
pub enum MargaError {
    #[error("grid error: {0}")]
    Grid(#[from] GridBuildError),

    #[error("config error: {0}")]
    Config(#[from] ConfigLoadError),

    #[error("dataset error: {0}")]
    Dataset(#[from] DatasetError),

    #[error("render error: {0}")]
    Svg(#[from] SvgError),

    #[error("sampling error: {0}")]
    Sample(#[from] SampleError),
}

pub type Result<T> = std::result::Result<T, MargaError>;

// File: crates/energy-chart-core/src/error.rs
// Summary: Error type shared by surface creation, configuration and rasterization.

use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    /// The placeholder had no drawable area when the surface was created.
    #[error("invalid dimensions for plot, width = {width}, height = {height}")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("invalid chart configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid color `{0}`")]
    InvalidColor(String),

    #[error("raster backend failed: {0}")]
    Raster(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl ChartError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

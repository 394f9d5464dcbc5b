//! Error types for Project Terra.

use thiserror::Error;

use crate::coords::Axis;

/// Errors raised by terrain grid construction, cell addressing, and token parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TerrainError {
    /// A grid was requested with a zero or negative size
    #[error("Invalid grid dimension: {axis} size {size} must be positive")]
    InvalidDimension {
        /// Offending axis
        axis: Axis,
        /// Requested size
        size: i32,
    },

    /// The grid's cells cannot be counted or allocated
    #[error("Grid too large: {x_size}x{y_size}x{z_size} cells cannot be allocated")]
    TooManyCells {
        /// Requested X size
        x_size: i32,
        /// Requested Y size
        y_size: i32,
        /// Requested Z size
        z_size: i32,
    },

    /// A coordinate or layer index fell outside the grid
    #[error("Coordinate out of bounds: {axis}={value} not in [0, {extent})")]
    OutOfBounds {
        /// First offending axis
        axis: Axis,
        /// Requested component
        value: i32,
        /// Grid extent along that axis
        extent: u32,
    },

    /// Unrecognized terrain type token
    #[error("Unknown terrain type: {0:?}")]
    UnknownTerrainType(String),

    /// Unrecognized feature token
    #[error("Unknown feature: {0:?}")]
    UnknownFeature(String),

    /// Unrecognized underground material token
    #[error("Unknown underground type: {0:?}")]
    UnknownUndergroundType(String),

    /// Unrecognized underwater depth token
    #[error("Unknown underwater type: {0:?}")]
    UnknownUnderwaterType(String),
}

impl TerrainError {
    /// Checks if this error is an addressing failure.
    #[must_use]
    pub const fn is_out_of_bounds(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }
}

/// Result type alias for terrain operations.
pub type TerrainResult<T> = Result<T, TerrainError>;

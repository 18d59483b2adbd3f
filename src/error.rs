//! Configuration errors rejected before any grid is allocated.

use thiserror::Error;

/// Reasons a [`MapSettings`](crate::world::MapSettings) cannot produce a world.
#[derive(Debug, Error, PartialEq)]
pub enum GenerationError {
    /// The map must have at least one column.
    #[error("map width must be non-zero")]
    InvalidWidth {
        /// Requested column count.
        width: u32,
    },
    /// Too few rows to hold the equator and both tropical rows.
    #[error("map height {height} is too small, need at least {min} rows for the equator currents")]
    InvalidHeight {
        /// Requested row count.
        height: u32,
        /// Smallest accepted row count.
        min: u32,
    },
    /// Mountain level must sit strictly above sea level.
    #[error("mountain level {mountain_level} must be above sea level {sea_level}")]
    InvalidLevels {
        /// Configured sea level.
        sea_level: f32,
        /// Configured mountain level.
        mountain_level: f32,
    },
    /// Cylinder radius used for noise sampling must be a positive finite number.
    #[error("noise radius {radius} must be positive and finite")]
    InvalidNoiseRadius {
        /// Configured radius.
        radius: f64,
    },
    /// Fractal noise needs at least one octave.
    #[error("noise octave count must be non-zero")]
    InvalidOctaves,
}

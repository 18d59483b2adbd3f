#![warn(missing_docs)]
//! Wrapping hex world with noise-generated continents and ocean currents.
//!
//! The map wraps horizontally like a cylinder. Terrain is sampled from
//! fractal noise on a matching cylinder so the seam is invisible, and
//! latitudinal currents are seeded along the equator and reduced to line
//! segments for display.

pub mod error;
pub mod math;
pub mod world;

pub use error::GenerationError;
pub use world::{GeneratedWorld, WorldConfig, WorldPlugin};

use bevy::prelude::*;
use noise::{Fbm, MultiFractal, NoiseFn, Simplex};

use super::MapSettings;
use super::hex_grid::{HexGrid, WIDTH_MULT, cell_center};
use crate::math;

/// Surface classification of a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Reflect)]
pub enum TileType {
    /// Open ocean; may carry a current.
    #[default]
    Water,
    /// Above sea level; never carries a current.
    Land,
}

/// One terrain cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Reflect)]
pub struct Tile {
    /// Water or land.
    pub kind: TileType,
    /// Elevation above sea level in `[0, 1]`. Only meaningful on land.
    pub mountain_factor: f32,
}

impl Tile {
    /// Whether currents may flow through this cell.
    pub fn is_water(&self) -> bool {
        self.kind == TileType::Water
    }
}

/// Seeded fractal simplex noise sampled on a cylinder wrapped around the map.
pub struct TerrainGenerator {
    fbm: Fbm<Simplex>,
    width: i32,
    circumference: f32,
    noise_radius: f64,
    noise_height: f64,
    sea_level: f32,
    mountain_level: f32,
}

impl TerrainGenerator {
    /// Builds the noise function for the given settings.
    ///
    /// Settings are expected to be validated already.
    pub fn new(settings: &MapSettings) -> Self {
        let fbm: Fbm<Simplex> = Fbm::new(settings.seed)
            .set_octaves(settings.octaves)
            .set_frequency(settings.frequency);
        Self {
            fbm,
            width: settings.width as i32,
            circumference: settings.width as f32 * WIDTH_MULT,
            noise_radius: settings.noise_radius,
            noise_height: settings.noise_height,
            sea_level: settings.sea_level,
            mountain_level: settings.mountain_level,
        }
    }

    /// Raw noise value for cell `(x, y)`. Accepts unwrapped columns:
    /// `x` and `x + width` sample the same point.
    pub fn sample(&self, x: i32, y: i32) -> f64 {
        let point = math::cylinder_sample_point(
            cell_center(x.rem_euclid(self.width), y),
            self.circumference,
            self.noise_radius,
            self.noise_height,
        );
        self.fbm.get(point)
    }

    /// Classifies a noise sample against sea and mountain levels.
    pub fn classify(&self, sample: f64) -> Tile {
        let sample = sample as f32;
        if sample > self.sea_level {
            Tile {
                kind: TileType::Land,
                mountain_factor: math::mountain_factor(self.sea_level, self.mountain_level, sample),
            }
        } else {
            Tile::default()
        }
    }

    /// Fills a `width × height` tile grid.
    pub fn generate(&self, width: u32, height: u32) -> HexGrid<Tile> {
        let mut tiles = HexGrid::new(width, height);
        for y in 0..tiles.height() {
            for x in 0..tiles.width() {
                tiles.set(x, y, self.classify(self.sample(x, y)));
            }
        }
        tiles
    }
}

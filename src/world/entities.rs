use bevy::prelude::*;

use super::MapSettings;
use super::currents::{Current, CurrentPath, CurrentSimulator};
use super::hex_grid::HexGrid;
use super::terrain_gen::{TerrainGenerator, Tile};
use crate::error::GenerationError;

/// Output of one generation run: terrain, currents and their line segments.
///
/// Immutable once built; owned values only, nothing is shared between runs.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct GeneratedWorld {
    /// Water/land classification per cell.
    pub tiles: HexGrid<Tile>,
    /// Current per cell; always `Unset` on land.
    pub currents: HexGrid<Current>,
    /// Maximal same-direction runs, in unrecentred layout space.
    pub paths: Vec<CurrentPath>,
}

/// Cell counts summarising a [`GeneratedWorld`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WorldStats {
    /// Cells above sea level.
    pub land_cells: usize,
    /// Cells at or below sea level.
    pub water_cells: usize,
    /// Water cells carrying a current.
    pub current_cells: usize,
    /// Extracted current segments.
    pub path_count: usize,
}

impl GeneratedWorld {
    /// Validates `settings`, then runs terrain generation and both current
    /// phases in order. Nothing is allocated when validation fails.
    pub fn generate(settings: &MapSettings) -> Result<Self, GenerationError> {
        settings.validate()?;

        let tiles = TerrainGenerator::new(settings).generate(settings.width, settings.height);
        let (currents, paths) = CurrentSimulator::new(&tiles)?.run();

        let world = Self {
            tiles,
            currents,
            paths,
        };
        let stats = world.stats();
        info!(
            "generated {}x{} world (seed {}): {} land, {} water, {} current cells, {} paths",
            settings.width,
            settings.height,
            settings.seed,
            stats.land_cells,
            stats.water_cells,
            stats.current_cells,
            stats.path_count,
        );
        Ok(world)
    }

    /// Counts land, water and current cells.
    pub fn stats(&self) -> WorldStats {
        let mut stats = WorldStats {
            path_count: self.paths.len(),
            ..default()
        };
        for (x, y, tile) in self.tiles.iter() {
            if tile.is_water() {
                stats.water_cells += 1;
                if self.currents.get(x, y).is_set() {
                    stats.current_cells += 1;
                }
            } else {
                stats.land_cells += 1;
            }
        }
        stats
    }
}

/// Marker on the single entity holding the map mesh.
#[derive(Component, Reflect)]
pub struct MapMesh;

/// Whether current lines are drawn (toggled with `C`).
#[derive(Resource, Reflect)]
pub struct CurrentOverlay {
    /// Draw current paths this frame.
    pub visible: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::currents::CurrentState;
    use crate::world::terrain_gen::TileType;

    fn settings() -> MapSettings {
        MapSettings {
            width: 48,
            height: 24,
            seed: 1234,
            ..MapSettings::default()
        }
    }

    #[test]
    fn identical_settings_reproduce_world() {
        let a = GeneratedWorld::generate(&settings()).unwrap();
        let b = GeneratedWorld::generate(&settings()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn invalid_settings_fail_before_generation() {
        let s = MapSettings {
            height: 2,
            ..settings()
        };
        assert_eq!(
            GeneratedWorld::generate(&s),
            Err(GenerationError::InvalidHeight { height: 2, min: 5 })
        );
    }

    #[test]
    fn land_has_no_currents() {
        let world = GeneratedWorld::generate(&settings()).unwrap();
        for (x, y, tile) in world.tiles.iter() {
            if tile.kind == TileType::Land {
                assert_eq!(world.currents.get(x, y).state, CurrentState::Unset);
            }
        }
    }

    #[test]
    fn currents_only_on_seeded_rows() {
        let world = GeneratedWorld::generate(&settings()).unwrap();
        let equator = crate::world::currents::equator_row(24);
        for (_, y, current) in world.currents.iter() {
            if current.is_set() {
                assert!((equator - 1..=equator + 1).contains(&y), "row {y}");
            }
        }
    }

    #[test]
    fn stats_add_up() {
        let world = GeneratedWorld::generate(&settings()).unwrap();
        let stats = world.stats();
        assert_eq!(stats.land_cells + stats.water_cells, 48 * 24);
        assert!(stats.current_cells <= stats.water_cells);
        assert_eq!(stats.path_count, world.paths.len());
    }
}

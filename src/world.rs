//! Wrapping hex world: terrain, ocean currents, and the plugin that shows them.
//!
//! The generation pipeline ([`GeneratedWorld::generate`]) is plain Rust with no
//! ECS dependency; [`WorldPlugin`] runs it at startup and turns the result into
//! a coloured mesh plus gizmo lines for the currents.

pub mod currents;
pub mod entities;
pub mod hex_grid;
pub mod mesh_builder;
mod startup_systems;
mod systems;
pub mod terrain_gen;

pub use currents::{Current, CurrentPath, CurrentSimulator, CurrentState};
pub use entities::{CurrentOverlay, GeneratedWorld, MapMesh, WorldStats};
pub use hex_grid::{HexDirection, HexGrid};
pub use terrain_gen::{TerrainGenerator, Tile, TileType};

use bevy::prelude::*;

use crate::error::GenerationError;

/// Nested configuration for the world subsystem.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct WorldConfig {
    /// Map dimensions and noise parameters.
    pub map: MapSettings,
    /// Mesh and overlay appearance.
    pub render: RenderSettings,
    /// Background clear color.
    pub clear_color: Color,
}

/// Map dimensions and noise parameters.
#[derive(Clone, Debug, PartialEq, Reflect)]
pub struct MapSettings {
    /// Number of columns; the map wraps around horizontally.
    pub width: u32,
    /// Number of rows.
    pub height: u32,
    /// Seed for the terrain noise generator.
    pub seed: u32,
    /// Radius of the sampling cylinder; larger values give smaller continents.
    pub noise_radius: f64,
    /// Vertical stretch of the sampling cylinder per world unit.
    pub noise_height: f64,
    /// Noise value above which a cell becomes land.
    pub sea_level: f32,
    /// Noise value at which land reaches full mountain intensity.
    pub mountain_level: f32,
    /// Number of fractal octaves.
    pub octaves: usize,
    /// Base frequency of the fractal noise.
    pub frequency: f64,
}

/// Mesh and overlay appearance.
#[derive(Clone, Debug, Reflect)]
pub struct RenderSettings {
    /// World units per layout unit.
    pub tile_size: f32,
    /// Corner radius of each drawn hex, in layout units. Values below `1.0`
    /// leave a gap between cells.
    pub margin_size: f32,
    /// Colour of every water cell.
    pub water_color: Color,
    /// Land colour stops keyed by mountain factor.
    pub land_gradient: Vec<(f32, Color)>,
    /// Colour of current lines.
    pub current_color: Color,
    /// Z offset of current lines above the map plane.
    pub current_depth: f32,
    /// Whether current lines are drawn at startup.
    pub show_currents: bool,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            map: MapSettings::default(),
            render: RenderSettings {
                tile_size: 1.0,
                margin_size: 0.95,
                water_color: Color::srgb(0.09, 0.24, 0.45),
                land_gradient: vec![
                    (0.0, Color::srgb(0.82, 0.77, 0.55)),
                    (0.25, Color::srgb(0.28, 0.55, 0.24)),
                    (0.7, Color::srgb(0.42, 0.36, 0.3)),
                    (1.0, Color::srgb(0.95, 0.95, 0.97)),
                ],
                current_color: Color::srgb(0.55, 0.85, 1.0),
                current_depth: 0.1,
                show_currents: true,
            },
            clear_color: Color::srgb(0.01, 0.01, 0.02),
        }
    }
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            width: 96,
            height: 48,
            seed: 42,
            noise_radius: 1.5,
            noise_height: 0.04,
            sea_level: 0.05,
            mountain_level: 0.55,
            octaves: 4,
            frequency: 1.0,
        }
    }
}

impl MapSettings {
    /// Rejects settings that cannot produce a world.
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.width == 0 {
            return Err(GenerationError::InvalidWidth { width: self.width });
        }
        if self.height < currents::MIN_HEIGHT {
            return Err(GenerationError::InvalidHeight {
                height: self.height,
                min: currents::MIN_HEIGHT,
            });
        }
        if self.mountain_level <= self.sea_level {
            return Err(GenerationError::InvalidLevels {
                sea_level: self.sea_level,
                mountain_level: self.mountain_level,
            });
        }
        if !self.noise_radius.is_finite() || self.noise_radius <= 0.0 {
            return Err(GenerationError::InvalidNoiseRadius {
                radius: self.noise_radius,
            });
        }
        if self.octaves == 0 {
            return Err(GenerationError::InvalidOctaves);
        }
        Ok(())
    }
}

/// World plugin: generation and mesh at startup, current overlay at runtime.
pub struct WorldPlugin(pub WorldConfig);

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<WorldConfig>()
            .register_type::<MapMesh>()
            .register_type::<CurrentOverlay>()
            .insert_resource(self.0.clone())
            .insert_resource(ClearColor(self.0.clear_color))
            .insert_resource(CurrentOverlay {
                visible: self.0.render.show_currents,
            })
            .add_systems(
                Startup,
                (startup_systems::generate_world, startup_systems::spawn_camera).chain(),
            )
            .add_systems(
                Update,
                (
                    systems::toggle_current_overlay,
                    systems::draw_current_paths
                        .after(systems::toggle_current_overlay)
                        .run_if(resource_exists::<GeneratedWorld>),
                ),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_are_valid() {
        assert_eq!(WorldConfig::default().map.validate(), Ok(()));
    }

    #[test]
    fn zero_width_is_rejected() {
        let s = MapSettings {
            width: 0,
            ..MapSettings::default()
        };
        assert_eq!(
            s.validate(),
            Err(GenerationError::InvalidWidth { width: 0 })
        );
    }

    #[test]
    fn degenerate_heights_are_rejected() {
        for height in [0, 1, 2, 3, 4] {
            let s = MapSettings {
                height,
                ..MapSettings::default()
            };
            assert!(
                matches!(s.validate(), Err(GenerationError::InvalidHeight { .. })),
                "height {height}"
            );
        }
    }

    #[test]
    fn inverted_levels_are_rejected() {
        let s = MapSettings {
            sea_level: 0.4,
            mountain_level: 0.4,
            ..MapSettings::default()
        };
        assert!(matches!(
            s.validate(),
            Err(GenerationError::InvalidLevels { .. })
        ));
    }

    #[test]
    fn bad_noise_radius_is_rejected() {
        for radius in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let s = MapSettings {
                noise_radius: radius,
                ..MapSettings::default()
            };
            assert!(matches!(
                s.validate(),
                Err(GenerationError::InvalidNoiseRadius { .. })
            ));
        }
    }

    #[test]
    fn zero_octaves_is_rejected() {
        let s = MapSettings {
            octaves: 0,
            ..MapSettings::default()
        };
        assert_eq!(s.validate(), Err(GenerationError::InvalidOctaves));
    }
}

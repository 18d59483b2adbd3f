//! Runtime systems for the world plugin.

use bevy::prelude::*;

use super::WorldConfig;
use super::entities::{CurrentOverlay, GeneratedWorld};

/// Flips [`CurrentOverlay::visible`] on `C`.
pub fn toggle_current_overlay(keys: Res<ButtonInput<KeyCode>>, mut overlay: ResMut<CurrentOverlay>) {
    if keys.just_pressed(KeyCode::KeyC) {
        overlay.visible = !overlay.visible;
        debug!("current overlay visible: {}", overlay.visible);
    }
}

/// Draws one arrow per current path, just above the map plane.
pub fn draw_current_paths(
    mut gizmos: Gizmos,
    world: Res<GeneratedWorld>,
    overlay: Res<CurrentOverlay>,
    cfg: Res<WorldConfig>,
) {
    if !overlay.visible {
        return;
    }
    let origin = world.tiles.grid_center();
    let r = &cfg.render;
    for path in &world.paths {
        let (start, end) = path.world_segment(origin, r.tile_size, r.current_depth);
        gizmos.arrow(start, end, r.current_color);
    }
}

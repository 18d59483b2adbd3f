//! Startup systems for the world plugin.

use bevy::prelude::*;

use super::WorldConfig;
use super::entities::{GeneratedWorld, MapMesh};
use super::hex_grid::{ROW_PITCH, WIDTH_MULT};
use super::mesh_builder::MapMeshData;
use crate::math;

/// Window shape assumed when framing the map before the first resize.
const ASSUMED_ASPECT: f32 = 16.0 / 9.0;
/// Extra room around the map when framing it.
const FRAMING_MARGIN: f32 = 1.1;

/// Runs the generation pipeline, spawns the map mesh, and inserts
/// [`GeneratedWorld`]. Invalid settings abort startup through Bevy's error
/// handler before anything is spawned.
pub fn generate_world(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    cfg: Res<WorldConfig>,
) -> Result {
    let world = GeneratedWorld::generate(&cfg.map)?;

    let mesh = meshes.add(MapMeshData::build(&world.tiles, &cfg.render).into_mesh());
    // Vertex colours carry the terrain; the material only has to pass them through.
    let material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        unlit: true,
        cull_mode: None,
        ..default()
    });

    commands.spawn((
        MapMesh,
        Name::new("MapMesh"),
        Mesh3d(mesh),
        MeshMaterial3d(material),
        Transform::default(),
    ));
    commands.insert_resource(world);
    Ok(())
}

/// Spawns a perspective camera on the +Z axis looking at the map centre.
pub fn spawn_camera(mut commands: Commands, cfg: Res<WorldConfig>) {
    let extent = Vec2::new(
        cfg.map.width as f32 * WIDTH_MULT,
        cfg.map.height as f32 * ROW_PITCH,
    ) * cfg.render.tile_size;
    let fov = PerspectiveProjection::default().fov;
    let distance = math::framing_distance(extent, fov, ASSUMED_ASPECT) * FRAMING_MARGIN;

    commands.spawn((
        Camera3d::default(),
        Name::new("MapCamera"),
        Transform::from_xyz(0.0, 0.0, distance).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

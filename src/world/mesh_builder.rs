use bevy::asset::RenderAssetUsages;
use bevy::mesh::Indices;
use bevy::prelude::*;
use bevy::render::render_resource::PrimitiveTopology;

use super::RenderSettings;
use super::hex_grid::HexGrid;
use super::terrain_gen::Tile;
use crate::math;

/// Vertices of the flat map: a six-triangle fan per cell, one colour per cell.
///
/// Cells are recentred on the origin and scaled by the tile size. Triangles
/// are unshared so each cell keeps a hard colour edge.
#[derive(Clone, Debug, Default)]
pub struct MapMeshData {
    /// Vertex positions on the z = 0 plane.
    pub positions: Vec<[f32; 3]>,
    /// All `+Z`.
    pub normals: Vec<[f32; 3]>,
    /// Linear RGBA vertex colours.
    pub colors: Vec<[f32; 4]>,
    /// Triangle list indices.
    pub indices: Vec<u32>,
}

impl MapMeshData {
    /// Builds fan geometry for every cell of `tiles`.
    pub fn build(tiles: &HexGrid<Tile>, render: &RenderSettings) -> Self {
        let corners = math::hex_corner_offsets(render.margin_size);
        let water = render.water_color.to_linear();
        let gradient: Vec<_> = render
            .land_gradient
            .iter()
            .map(|&(at, color)| (at, color.to_linear()))
            .collect();

        let cells = (tiles.width() * tiles.height()) as usize;
        let mut data = Self {
            positions: Vec::with_capacity(cells * 18),
            normals: Vec::with_capacity(cells * 18),
            colors: Vec::with_capacity(cells * 18),
            indices: Vec::with_capacity(cells * 18),
        };

        let origin = tiles.grid_center();
        for (x, y, tile) in tiles.iter() {
            let center = origin + tiles.center(x, y);
            let color = rgba(if tile.is_water() {
                water
            } else {
                math::sample_gradient(&gradient, tile.mountain_factor)
            });

            for i in 0..6 {
                let base = data.positions.len() as u32;
                data.indices.extend([base, base + 1, base + 2]);
                for p in [center, center + corners[i], center + corners[(i + 1) % 6]] {
                    let p = p * render.tile_size;
                    data.positions.push([p.x, p.y, 0.0]);
                    data.normals.push([0.0, 0.0, 1.0]);
                    data.colors.push(color);
                }
            }
        }
        data
    }

    /// Converts into a renderable triangle-list mesh.
    pub fn into_mesh(self) -> Mesh {
        Mesh::new(
            PrimitiveTopology::TriangleList,
            RenderAssetUsages::RENDER_WORLD,
        )
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, self.positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, self.normals)
        .with_inserted_attribute(Mesh::ATTRIBUTE_COLOR, self.colors)
        .with_inserted_indices(Indices::U32(self.indices))
    }
}

fn rgba(color: LinearRgba) -> [f32; 4] {
    [color.red, color.green, color.blue, color.alpha]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::WorldConfig;
    use crate::world::terrain_gen::TileType;

    fn render() -> RenderSettings {
        WorldConfig::default().render
    }

    fn island(width: u32, height: u32) -> HexGrid<Tile> {
        let mut tiles = HexGrid::new(width, height);
        tiles.set(
            1,
            1,
            Tile {
                kind: TileType::Land,
                mountain_factor: 1.0,
            },
        );
        tiles
    }

    #[test]
    fn eighteen_vertices_per_cell() {
        let data = MapMeshData::build(&island(4, 3), &render());
        assert_eq!(data.positions.len(), 4 * 3 * 18);
        assert_eq!(data.colors.len(), data.positions.len());
        assert_eq!(data.normals.len(), data.positions.len());
        assert_eq!(data.indices.len(), data.positions.len());
    }

    #[test]
    fn indices_are_sequential() {
        let data = MapMeshData::build(&island(2, 2), &render());
        for (i, &index) in data.indices.iter().enumerate() {
            assert_eq!(index, i as u32);
        }
    }

    #[test]
    fn fan_apex_is_recentred_cell_center() {
        let tiles = island(4, 3);
        let mut r = render();
        r.tile_size = 2.0;
        let data = MapMeshData::build(&tiles, &r);
        let expected = (tiles.grid_center() + tiles.center(0, 0)) * 2.0;
        let apex = data.positions[0];
        assert!((apex[0] - expected.x).abs() < 1e-5);
        assert!((apex[1] - expected.y).abs() < 1e-5);
        assert_eq!(apex[2], 0.0);
    }

    #[test]
    fn cells_are_coloured_by_type() {
        let tiles = island(3, 3);
        let r = render();
        let data = MapMeshData::build(&tiles, &r);

        let water = rgba(r.water_color.to_linear());
        let peak = rgba(r.land_gradient.last().unwrap().1.to_linear());

        // row-major: cell (1, 1) is the fifth cell.
        let land_cell = 3 + 1;
        for (cell, chunk) in data.colors.chunks(18).enumerate() {
            let expected = if cell == land_cell { peak } else { water };
            assert!(chunk.iter().all(|c| *c == expected), "cell {cell}");
        }
    }

    #[test]
    fn converts_into_mesh() {
        let mesh = MapMeshData::build(&island(2, 2), &render()).into_mesh();
        assert_eq!(mesh.count_vertices(), 2 * 2 * 18);
        assert!(mesh.attribute(Mesh::ATTRIBUTE_COLOR).is_some());
    }
}

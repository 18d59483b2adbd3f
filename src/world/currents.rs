//! Ocean currents: seeded latitudinal rows and their extraction into line
//! segments.
//!
//! Phase A walks the equator row eastward and the two tropical rows on
//! either side westward, marking each open-water cell it reaches. Phase B
//! reads the finished grid and reduces every maximal run of same-direction
//! cells to a single [`CurrentPath`].

use bevy::prelude::*;

use super::hex_grid::{HexDirection, HexGrid};
use super::terrain_gen::Tile;
use crate::error::GenerationError;

/// Smallest map height whose equator and tropical rows all fit on the grid.
pub const MIN_HEIGHT: u32 = 5;

/// Lifecycle of a cell's current. Never goes back to `Unset`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Reflect)]
pub enum CurrentState {
    /// No current has reached this cell.
    #[default]
    Unset,
    /// Marked by a flood walk.
    Generated,
    /// Reserved for currents that take precedence over flooded ones.
    /// Segment extraction never walks into a `Major` cell.
    Major,
}

/// Flow direction and state of one ocean cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Reflect)]
pub struct Current {
    /// Direction of flow; ignored while `state` is `Unset`.
    pub direction: HexDirection,
    /// Lifecycle state.
    pub state: CurrentState,
}

impl Current {
    /// Whether a walk has already claimed this cell.
    pub fn is_set(&self) -> bool {
        self.state != CurrentState::Unset
    }
}

/// A straight run of same-direction current, in unrecentred layout space.
#[derive(Clone, Copy, Debug, PartialEq, Reflect)]
pub struct CurrentPath {
    /// Centre of the first cell of the run.
    pub start: Vec2,
    /// Centre of the last cell of the run.
    pub end: Vec2,
    /// Direction shared by every cell of the run.
    pub direction: HexDirection,
}

impl CurrentPath {
    /// End points in world space: recentred by `origin`, scaled by
    /// `tile_size`, lifted to `depth` on the Z axis.
    pub fn world_segment(&self, origin: Vec2, tile_size: f32, depth: f32) -> (Vec3, Vec3) {
        let lift = |p: Vec2| ((origin + p) * tile_size).extend(depth);
        (lift(self.start), lift(self.end))
    }
}

/// Row index of the eastward equatorial current.
pub fn equator_row(height: i32) -> i32 {
    height / 2 + 1
}

/// Builds the current grid over a finished tile grid.
pub struct CurrentSimulator<'a> {
    tiles: &'a HexGrid<Tile>,
}

impl<'a> CurrentSimulator<'a> {
    /// Rejects grids too short to hold the equator and both tropical rows.
    pub fn new(tiles: &'a HexGrid<Tile>) -> Result<Self, GenerationError> {
        if tiles.height() < MIN_HEIGHT as i32 {
            return Err(GenerationError::InvalidHeight {
                height: tiles.height() as u32,
                min: MIN_HEIGHT,
            });
        }
        Ok(Self { tiles })
    }

    /// Runs both phases: seeds the current grid, then extracts its segments.
    pub fn run(&self) -> (HexGrid<Current>, Vec<CurrentPath>) {
        let currents = self.seed_major_currents();
        let paths = extract_paths(&currents);
        (currents, paths)
    }

    /// Phase A: eastward current on the equator, westward on the rows above
    /// and below it.
    pub fn seed_major_currents(&self) -> HexGrid<Current> {
        let mut currents =
            HexGrid::new(self.tiles.width() as u32, self.tiles.height() as u32);
        let equator = equator_row(self.tiles.height());

        let seeded = [
            (equator, HexDirection::East),
            (equator + 1, HexDirection::West),
            (equator - 1, HexDirection::West),
        ];
        for (row, direction) in seeded {
            let marked = self.seed_row(&mut currents, row, direction);
            debug!("seeded row {row} {direction:?}: {marked} cells");
        }
        currents
    }

    /// Walks `direction` from every column of `row`, marking open water until
    /// the walk meets land, an already-set cell, or completes a lap.
    ///
    /// Returns how many cells were marked.
    pub fn seed_row(
        &self,
        currents: &mut HexGrid<Current>,
        row: i32,
        direction: HexDirection,
    ) -> usize {
        let lap = currents.width();
        let mut marked = 0;
        for start in 0..lap {
            let mut pos = IVec2::new(start, row);
            for _ in 0..lap {
                if !currents.contains_row(pos.y) || !self.tiles.get(pos.x, pos.y).is_water() {
                    break;
                }
                let mut cell = *currents.get(pos.x, pos.y);
                if cell.is_set() {
                    break;
                }
                cell.direction = direction;
                cell.state = CurrentState::Generated;
                currents.set(pos.x, pos.y, cell);
                marked += 1;
                pos = currents.neighbor(pos.x, pos.y, direction);
            }
        }
        marked
    }
}

/// Phase B: reduces every maximal run of same-direction cells to one path.
///
/// Pure read of `currents`; calling it twice yields the same list.
pub fn extract_paths(currents: &HexGrid<Current>) -> Vec<CurrentPath> {
    let (width, height) = (currents.width(), currents.height());
    let mut paths = Vec::new();

    for direction in HexDirection::ALL {
        // Upstream cells are scanned first so a run is always entered at its head.
        let xs: Vec<i32> = if direction.is_westward() {
            (0..width).rev().collect()
        } else {
            (0..width).collect()
        };
        let ys: Vec<i32> = if direction.is_southward() {
            (0..height).rev().collect()
        } else {
            (0..height).collect()
        };

        let mut consumed: HexGrid<bool> = HexGrid::new(width as u32, height as u32);
        let before = paths.len();

        for &y in &ys {
            for &x in &xs {
                let cell = currents.get(x, y);
                if !cell.is_set() || cell.direction != direction || *consumed.get(x, y) {
                    continue;
                }
                consumed.set(x, y, true);

                let start = IVec2::new(x, y);
                let mut end = start;
                loop {
                    let next = currents.neighbor(end.x, end.y, direction);
                    if !(0..width).contains(&next.x) {
                        break;
                    }
                    let Some(next_cell) = currents.try_get(next.x, next.y) else {
                        break;
                    };
                    if next_cell.state != CurrentState::Generated
                        || next_cell.direction != direction
                    {
                        break;
                    }
                    consumed.set(next.x, next.y, true);
                    end = next;
                }

                if end != start {
                    paths.push(CurrentPath {
                        start: currents.center(start.x, start.y),
                        end: currents.center(end.x, end.y),
                        direction,
                    });
                }
            }
        }
        debug!("{direction:?}: {} segments", paths.len() - before);
    }
    paths
}

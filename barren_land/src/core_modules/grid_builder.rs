// THEORY:
// The Grid Builder turns a classified `LandMap` into the two tables the component
// search runs on: an adjacency table holding every cell's same-status neighbours,
// and a visited table holding one flag per cell.
//
// Key architectural principles:
// 1.  **Index Arena**: Cells are referred to by their flat index. The adjacency
//     table is a compressed arena: `offsets[i]..offsets[i + 1]` is the slice of
//     `neighbors` that belongs to cell `i`. No per-cell allocation, no hashing.
// 2.  **Barren Pre-Visiting**: Barren cells are never reported, so their visited
//     flag starts out `true`. They can neither seed nor extend a traversal.
// 3.  **Single Ownership**: A `FieldGrid` is built for one survey and owned by it
//     until the area list has been produced. The visited flags only ever go from
//     `false` to `true`.

use crate::core_modules::land_map::LandMap;
use crate::core_modules::plot::{Cell, Rectangle};
use crate::survey::FieldConfig;

/// Precomputed same-status neighbour lists for every cell of the field.
#[derive(Debug, Clone)]
pub struct Adjacency {
    config: FieldConfig,
    offsets: Vec<u32>,
    neighbors: Vec<u32>,
}

impl Adjacency {
    /// Neighbour indices of the cell at `index`.
    pub fn of(&self, index: usize) -> &[u32] {
        let start = self.offsets[index] as usize;
        let end = self.offsets[index + 1] as usize;
        &self.neighbors[start..end]
    }

    pub fn cell_count(&self) -> usize {
        self.offsets.len() - 1
    }

    pub fn cell_at(&self, index: usize) -> Cell {
        self.config.cell_at(index)
    }
}

/// The full per-survey grid state.
pub struct FieldGrid {
    pub map: LandMap,
    pub adjacency: Adjacency,
    /// One flag per cell; barren cells start visited.
    pub visited: Vec<bool>,
}

impl FieldGrid {
    /// Classifies the field and builds both tables.
    pub fn build(config: &FieldConfig, rectangles: &[Rectangle]) -> Self {
        let map = LandMap::new(config, rectangles);
        let adjacency = build_adjacency(&map);
        let visited = (0..map.cell_count())
            .map(|i| map.is_barren(map.cell_at(i)))
            .collect();

        Self {
            map,
            adjacency,
            visited,
        }
    }
}

/// Walks every cell in index order and records its neighbour list.
fn build_adjacency(map: &LandMap) -> Adjacency {
    let cells = map.cell_count();
    let mut offsets = Vec::with_capacity(cells + 1);
    let mut neighbors = Vec::with_capacity(cells * 4);

    offsets.push(0);
    for index in 0..cells {
        let cell = map.cell_at(index);
        neighbors.extend(map.neighbors(cell).map(|n| map.index_of(n) as u32));
        offsets.push(neighbors.len() as u32);
    }
    neighbors.shrink_to_fit();

    tracing::debug!(cells, edges = neighbors.len(), "built adjacency table");

    Adjacency {
        config: *map.config(),
        offsets,
        neighbors,
    }
}

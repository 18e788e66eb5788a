// THEORY:
// The Component Search is the engine of the survey. Starting from one unvisited
// fertile cell it floods outwards over the precomputed adjacency table, counting
// every cell of the connected fertile region exactly once.
//
// Key architectural principles & algorithm steps:
// 1.  **First-In-First-Out**: The frontier is a `VecDeque`. Cells are expanded in
//     the order they were discovered, so the traversal is a true breadth-first
//     search.
// 2.  **Mark On Enqueue**: A cell's visited flag is set the moment it is pushed,
//     not when it is popped. A cell reachable along several paths can therefore
//     never be queued twice, and each cell adds exactly one to the area.
// 3.  **Summary On The Way**: While counting, the search also records the region's
//     bounding box. The result is packaged into a `FertileRegion`, a plain data
//     container describing the region.

use crate::core_modules::grid_builder::Adjacency;
use crate::core_modules::plot::Cell;

/// A single connected fertile region found by the search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FertileRegion {
    /// Position of this region in discovery order.
    pub id: u64,
    /// The unvisited cell the search was started from.
    pub seed: Cell,
    /// Number of cells in the region.
    pub area: usize,
    /// Lower-left and upper-right corners of the box enclosing every cell of the region.
    pub bounding_box: (Cell, Cell),
}

pub mod component_search {
    use super::*;
    use std::collections::VecDeque;

    /// Counts the cells of the connected component containing `start`.
    /// `start` must not have been visited yet.
    pub fn explore_component(start: usize, adjacency: &Adjacency, visited: &mut [bool]) -> usize {
        explore_region(0, start, adjacency, visited).area
    }

    /// Breadth-first search from `start`, returning the region it fills.
    pub fn explore_region(
        id: u64,
        start: usize,
        adjacency: &Adjacency,
        visited: &mut [bool],
    ) -> FertileRegion {
        explore_region_with(id, start, adjacency, visited, |_| {})
    }

    /// Like `explore_region`, calling `on_cell` with the index of every cell as it is counted.
    pub fn explore_region_with(
        id: u64,
        start: usize,
        adjacency: &Adjacency,
        visited: &mut [bool],
        mut on_cell: impl FnMut(usize),
    ) -> FertileRegion {
        debug_assert!(!visited[start], "search seeded from a visited cell");

        let seed = adjacency.cell_at(start);
        let mut min = seed;
        let mut max = seed;
        let mut area = 0;

        let mut queue = VecDeque::new();
        visited[start] = true;
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            area += 1;
            on_cell(current);

            let cell = adjacency.cell_at(current);
            min.x = min.x.min(cell.x);
            min.y = min.y.min(cell.y);
            max.x = max.x.max(cell.x);
            max.y = max.y.max(cell.y);

            for &next in adjacency.of(current) {
                let next = next as usize;
                if !visited[next] {
                    visited[next] = true;
                    queue.push_back(next);
                }
            }
        }

        tracing::trace!(id, ?seed, area, "explored region");

        FertileRegion {
            id,
            seed,
            area,
            bounding_box: (min, max),
        }
    }
}

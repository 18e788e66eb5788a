// THEORY:
// The `LandMap` is the classified field: one barren/fertile flag per cell, laid out
// as a flat array indexed by `y * width + x`. It is built exactly once per survey by
// running the Rectangle Classifier over every cell, and from then on every question
// about a cell's status is a single array lookup.
//
// The map also hosts the Adjacency Generator. A neighbour is any of the four axis
// cells (right, left, up, down, in that order) that lies on the field and shares the
// cell's status. Because status comes from the precomputed bitmap, generating
// neighbours never goes back to the rectangle list.

use crate::core_modules::plot::{Cell, Rectangle, is_barren};
use crate::survey::FieldConfig;

/// Offsets for the four axis neighbours, in traversal order: right, left, up, down.
const DIRECTIONS: [(i64, i64); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// The barren/fertile status of every cell on the field.
#[derive(Debug, Clone)]
pub struct LandMap {
    config: FieldConfig,
    barren: Vec<bool>,
    barren_count: usize,
}

impl LandMap {
    /// Classifies every cell of a `config.width` x `config.height` field.
    pub fn new(config: &FieldConfig, rectangles: &[Rectangle]) -> Self {
        let FieldConfig { width, height } = *config;
        let mut barren = vec![false; config.cell_count()];
        let mut barren_count = 0;

        for y in 0..height {
            for x in 0..width {
                if is_barren(Cell::new(x, y), rectangles) {
                    barren[config.offset(Cell::new(x, y))] = true;
                    barren_count += 1;
                }
            }
        }

        tracing::debug!(width, height, rectangles = rectangles.len(), barren_count, "classified field");

        Self {
            config: *config,
            barren,
            barren_count,
        }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn cell_count(&self) -> usize {
        self.barren.len()
    }

    pub fn barren_count(&self) -> usize {
        self.barren_count
    }

    pub fn fertile_count(&self) -> usize {
        self.cell_count() - self.barren_count
    }

    /// Flat index of `cell`. The cell must be in bounds.
    pub fn index_of(&self, cell: Cell) -> usize {
        self.config.offset(cell)
    }

    pub fn cell_at(&self, index: usize) -> Cell {
        self.config.cell_at(index)
    }

    /// Barren status of an in-bounds cell.
    pub fn is_barren(&self, cell: Cell) -> bool {
        self.barren[self.index_of(cell)]
    }

    /// The Adjacency Generator.
    /// Yields the in-bounds axis neighbours of `cell` that share its status.
    pub fn neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        let status = self.is_barren(cell);
        DIRECTIONS.into_iter().filter_map(move |(dx, dy)| {
            let nx = cell.x as i64 + dx;
            let ny = cell.y as i64 + dy;
            if nx < 0 || ny < 0 || nx >= self.config.width as i64 || ny >= self.config.height as i64 {
                return None;
            }
            let candidate = Cell::new(nx as u32, ny as u32);
            (self.is_barren(candidate) == status).then_some(candidate)
        })
    }
}

// THEORY:
// The `survey` module is the top-level API of the crate. It encapsulates the full
// stack (classification, grid construction, component search) behind a single
// entry point that takes a list of barren rectangles and hands back the areas of
// every fertile region, smallest first.
//
// Stages of one survey:
// 1.  **Grid Building**: classify every cell and precompute the same-status
//     adjacency table, pre-marking barren cells as visited.
// 2.  **Scanning**: walk the field column by column (outer `x`, inner `y`) and
//     start a component search on every cell that is still unvisited. Only fertile
//     cells can still be unvisited, so every search yields one fertile region.
// 3.  **Reporting**: sort the collected areas ascending. The grid tables are
//     dropped once the report has been assembled.

use crate::core_modules::component_search::{FertileRegion, component_search};
use crate::core_modules::grid_builder::FieldGrid;
use crate::core_modules::parser::parse_rectangles;
use crate::core_modules::plot::{Cell, Rectangle};
use crate::error::Result;

/// Width of the standard field, in cells.
pub const FIELD_WIDTH: u32 = 400;
/// Height of the standard field, in cells.
pub const FIELD_HEIGHT: u32 = 600;

/// Dimensions of the field being surveyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
        }
    }
}

impl FieldConfig {
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x < self.width && cell.y < self.height
    }

    /// Flat index of `cell`, or `None` if it lies off the field.
    pub fn index_of(&self, cell: Cell) -> Option<usize> {
        self.contains(cell).then(|| self.offset(cell))
    }

    /// Flat index of an on-field cell, without the bounds check.
    pub(crate) fn offset(&self, cell: Cell) -> usize {
        cell.y as usize * self.width as usize + cell.x as usize
    }

    /// The cell stored at flat index `index`.
    pub fn cell_at(&self, index: usize) -> Cell {
        let width = self.width as usize;
        Cell::new((index % width) as u32, (index / width) as u32)
    }
}

/// Everything a survey learned about the field.
#[derive(Debug, Clone)]
pub struct FieldSurvey {
    pub config: FieldConfig,
    /// Fertile regions in discovery order.
    pub regions: Vec<FertileRegion>,
    /// Region areas sorted ascending.
    pub areas: Vec<usize>,
    pub barren_count: usize,
    /// Region id of every cell, indexed by `y * width + x`. `None` for barren cells.
    pub labels: Vec<Option<u32>>,
}

impl FieldSurvey {
    /// The fertile region covering `cell`. `None` for barren or off-field cells.
    pub fn region_at(&self, cell: Cell) -> Option<&FertileRegion> {
        let label = (*self.labels.get(self.config.index_of(cell)?)?)?;
        self.regions.get(label as usize)
    }

    pub fn fertile_count(&self) -> usize {
        self.areas.iter().sum()
    }
}

/// Runs surveys over a field of fixed dimensions.
#[derive(Debug, Clone, Default)]
pub struct FieldSurveyor {
    config: FieldConfig,
}

impl FieldSurveyor {
    pub fn new(config: FieldConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Areas of every fertile region, sorted ascending.
    pub fn compute_fertile_areas(&self, rectangles: &[Rectangle]) -> Vec<usize> {
        let mut grid = FieldGrid::build(&self.config, rectangles);
        let mut areas = Vec::new();

        for x in 0..self.config.width {
            for y in 0..self.config.height {
                let start = grid.map.index_of(Cell::new(x, y));
                if !grid.visited[start] {
                    areas.push(component_search::explore_component(
                        start,
                        &grid.adjacency,
                        &mut grid.visited,
                    ));
                }
            }
        }

        areas.sort_unstable();
        tracing::debug!(regions = areas.len(), "computed fertile areas");
        areas
    }

    /// Same scan as `compute_fertile_areas`, keeping a summary of each region and a
    /// per-cell region map.
    pub fn survey(&self, rectangles: &[Rectangle]) -> FieldSurvey {
        let mut grid = FieldGrid::build(&self.config, rectangles);
        let mut regions: Vec<FertileRegion> = Vec::new();
        let mut labels = vec![None; self.config.cell_count()];

        for x in 0..self.config.width {
            for y in 0..self.config.height {
                let start = grid.map.index_of(Cell::new(x, y));
                if grid.visited[start] {
                    continue;
                }

                let id = regions.len() as u32;
                let region = component_search::explore_region_with(
                    id as u64,
                    start,
                    &grid.adjacency,
                    &mut grid.visited,
                    |index| labels[index] = Some(id),
                );
                regions.push(region);
            }
        }

        let mut areas: Vec<usize> = regions.iter().map(|r| r.area).collect();
        areas.sort_unstable();

        let barren_count = grid.map.barren_count();
        tracing::debug!(regions = regions.len(), barren_count, "survey complete");

        FieldSurvey {
            config: self.config,
            regions,
            areas,
            barren_count,
            labels,
        }
    }
}

/// Areas of every fertile region of the standard 400 x 600 field, sorted ascending.
pub fn compute_fertile_areas(rectangles: &[Rectangle]) -> Vec<usize> {
    FieldSurveyor::default().compute_fertile_areas(rectangles)
}

/// Renders areas as space-separated text terminated by a newline.
pub fn format_areas(areas: &[usize]) -> String {
    let mut out = areas.iter().map(usize::to_string).collect::<Vec<_>>().join(" ");
    out.push('\n');
    out
}

/// Parses textual rectangle descriptions and surveys the standard field.
/// Nothing is computed if any rectangle is malformed.
pub fn find_fertile_land<S: AsRef<str>>(parts: &[S]) -> Result<Vec<usize>> {
    let surveyor = FieldSurveyor::default();
    let rectangles = parse_rectangles(parts, surveyor.config())?;
    Ok(surveyor.compute_fertile_areas(&rectangles))
}

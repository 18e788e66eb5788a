// THEORY:
// The `plot` module holds the two "dumb" value types every other layer speaks in:
// a `Cell` on the field and a `Rectangle` of barren land. It also owns the
// Rectangle Classifier, the single rule that decides whether a cell is barren.
//
// Key architectural principles:
// 1.  **Plain Values**: `Cell` and `Rectangle` are `Copy` data containers with no
//     knowledge of the field's dimensions. Bounds are the concern of the grid
//     layer and of the parser that produced the rectangle.
// 2.  **Inclusive Membership**: A rectangle covers both of its corners. A cell
//     sitting exactly on an edge or a corner is barren.
// 3.  **Empty When Inverted**: A rectangle whose start lies beyond its end on
//     either axis covers nothing. The parser refuses such input, so this only
//     matters for rectangles built directly in code.

/// A single cell on the field, addressed by its column (`x`) and row (`y`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub x: u32,
    pub y: u32,
}

impl Cell {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// A rectangular plot of barren land.
/// `start` is the lower-left corner and `end` the upper-right corner, both inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rectangle {
    pub start: Cell,
    pub end: Cell,
}

impl Rectangle {
    pub const fn new(start: Cell, end: Cell) -> Self {
        Self { start, end }
    }

    /// Shorthand for `Rectangle::new(Cell::new(x0, y0), Cell::new(x1, y1))`.
    pub const fn from_corners(x0: u32, y0: u32, x1: u32, y1: u32) -> Self {
        Self::new(Cell::new(x0, y0), Cell::new(x1, y1))
    }

    /// Returns true if `cell` lies within this rectangle, edges included.
    pub fn contains(&self, cell: Cell) -> bool {
        (self.start.x..=self.end.x).contains(&cell.x)
            && (self.start.y..=self.end.y).contains(&cell.y)
    }

    pub fn is_inverted(&self) -> bool {
        self.start.x > self.end.x || self.start.y > self.end.y
    }
}

/// The Rectangle Classifier.
/// A cell is barren iff at least one rectangle contains it.
pub fn is_barren(cell: Cell, rectangles: &[Rectangle]) -> bool {
    rectangles.iter().any(|r| r.contains(cell))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_and_edges_are_inclusive() {
        let r = Rectangle::from_corners(2, 3, 5, 7);
        for cell in [
            Cell::new(2, 3),
            Cell::new(5, 7),
            Cell::new(2, 7),
            Cell::new(5, 3),
            Cell::new(4, 3),
        ] {
            assert!(r.contains(cell), "{cell:?} should be inside");
        }
        assert!(!r.contains(Cell::new(1, 3)));
        assert!(!r.contains(Cell::new(6, 7)));
        assert!(!r.contains(Cell::new(3, 8)));
        assert!(!r.contains(Cell::new(3, 2)));
    }

    #[test]
    fn single_cell_rectangle() {
        let r = Rectangle::from_corners(9, 9, 9, 9);
        assert!(r.contains(Cell::new(9, 9)));
        assert!(!r.contains(Cell::new(9, 10)));
    }

    #[test]
    fn inverted_rectangle_matches_nothing() {
        let r = Rectangle::from_corners(10, 10, 5, 20);
        assert!(r.is_inverted());
        for x in 0..20 {
            for y in 0..30 {
                assert!(!r.contains(Cell::new(x, y)));
            }
        }
    }

    #[test]
    fn barren_if_any_rectangle_contains_the_cell() {
        let plots = [
            Rectangle::from_corners(0, 0, 1, 1),
            Rectangle::from_corners(5, 5, 6, 6),
        ];
        assert!(is_barren(Cell::new(1, 0), &plots));
        assert!(is_barren(Cell::new(6, 5), &plots));
        assert!(!is_barren(Cell::new(3, 3), &plots));
        assert!(!is_barren(Cell::new(0, 0), &[]));
    }
}

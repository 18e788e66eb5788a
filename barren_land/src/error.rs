use thiserror::Error;

pub type Result<T> = std::result::Result<T, ParseError>;

/// Which corner of a rectangle a coordinate belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    Start,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Reasons a textual rectangle list is refused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Rectangles are described by four integers each.
    #[error("expected a multiple of 4 coordinates, found {found}")]
    CoordinateCount { found: usize },

    #[error("rectangle {rectangle}: `{token}` is not an integer coordinate")]
    NotAnInteger { rectangle: usize, token: String },

    #[error("rectangle {rectangle}: {corner:?} {axis:?} coordinate {value} is outside 0..{limit}")]
    OutOfBounds {
        rectangle: usize,
        corner: Corner,
        axis: Axis,
        value: i64,
        limit: u32,
    },

    #[error("rectangle {rectangle}: start ({x0}, {y0}) lies beyond end ({x1}, {y1})")]
    InvertedRectangle {
        rectangle: usize,
        x0: u32,
        y0: u32,
        x1: u32,
        y1: u32,
    },
}

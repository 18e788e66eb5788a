// THEORY:
// The parser is the only gate between free-form text and the survey. Input such as
// `{"48 192 351 207", "48 392 351 407"}` is split on a fixed set of delimiter
// characters, and every group of four integers becomes one `Rectangle`
// (`x0 y0 x1 y1`, lower-left then upper-right).
//
// Validation is all-or-nothing: the first bad token aborts the whole list, so the
// survey never runs on a partial set of rectangles.

use crate::core_modules::plot::Rectangle;
use crate::error::{Axis, Corner, ParseError, Result};
use crate::survey::FieldConfig;

/// Braces, commas and straight or curly double quotes separate coordinates,
/// alongside any whitespace.
pub fn is_delimiter(c: char) -> bool {
    matches!(c, '{' | '}' | ',' | '"' | '“' | '”') || c.is_whitespace()
}

/// Splits `parts` into coordinate tokens, ignoring empty fields.
pub fn tokenize<S: AsRef<str>>(parts: &[S]) -> Vec<String> {
    parts
        .iter()
        .flat_map(|part| part.as_ref().split(is_delimiter))
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Parses and validates every rectangle described by `parts` against the field bounds.
pub fn parse_rectangles<S: AsRef<str>>(parts: &[S], config: &FieldConfig) -> Result<Vec<Rectangle>> {
    let tokens = tokenize(parts);
    if tokens.len() % 4 != 0 {
        return Err(ParseError::CoordinateCount { found: tokens.len() });
    }

    let rectangles = tokens
        .chunks_exact(4)
        .enumerate()
        .map(|(rectangle, coords)| validate_coordinates(rectangle, coords, config))
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(count = rectangles.len(), "parsed barren rectangles");
    Ok(rectangles)
}

fn validate_coordinates(rectangle: usize, coords: &[String], config: &FieldConfig) -> Result<Rectangle> {
    let mut values = [0i64; 4];
    for (value, token) in values.iter_mut().zip(coords) {
        *value = token.parse().map_err(|_| ParseError::NotAnInteger {
            rectangle,
            token: token.clone(),
        })?;
    }

    let [x0, y0, x1, y1] = values;
    let check = |value: i64, corner: Corner, axis: Axis| -> Result<u32> {
        let limit = match axis {
            Axis::X => config.width,
            Axis::Y => config.height,
        };
        if value < 0 || value >= limit as i64 {
            return Err(ParseError::OutOfBounds {
                rectangle,
                corner,
                axis,
                value,
                limit,
            });
        }
        Ok(value as u32)
    };

    let x0 = check(x0, Corner::Start, Axis::X)?;
    let y0 = check(y0, Corner::Start, Axis::Y)?;
    let x1 = check(x1, Corner::End, Axis::X)?;
    let y1 = check(y1, Corner::End, Axis::Y)?;

    let parsed = Rectangle::from_corners(x0, y0, x1, y1);
    if parsed.is_inverted() {
        return Err(ParseError::InvertedRectangle {
            rectangle,
            x0,
            y0,
            x1,
            y1,
        });
    }
    Ok(parsed)
}

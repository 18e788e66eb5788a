// THEORY:
// This file is the main entry point for the `barren_land` library crate.
// It exposes the survey API (`FieldSurveyor`, `FieldConfig`, `FieldSurvey`) and the
// text helpers around it, while the classification and traversal machinery lives in
// `core_modules`.
//
// A typical caller parses text into rectangles, runs a survey, and prints the areas:
//
//     let rectangles = parse_rectangles(&["0 292 399 307"], &FieldConfig::default())?;
//     let areas = compute_fertile_areas(&rectangles);
//     print!("{}", format_areas(&areas));

pub mod core_modules;
pub mod error;
pub mod survey;

pub use core_modules::component_search::FertileRegion;
pub use core_modules::parser::parse_rectangles;
pub use core_modules::plot::{Cell, Rectangle};
pub use core_modules::utils::image_helper::image_helper;
pub use error::{Axis, Corner, ParseError, Result};
pub use survey::{
    FIELD_HEIGHT, FIELD_WIDTH, FieldConfig, FieldSurvey, FieldSurveyor, compute_fertile_areas, find_fertile_land,
    format_areas,
};

pub mod component_search;
pub mod grid_builder;
pub mod land_map;
pub mod parser;
pub mod plot;
pub mod utils;

pub mod grid;
pub mod grid_source;
pub mod ranges;

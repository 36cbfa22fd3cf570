//! Tabular input and output.
//!
//! The engine itself only sees domain types. This module maps them to and
//! from CSV: reading classes, specialists, and requirements, writing them
//! back (for generated instances), and rendering a finished grid.

mod records;
mod render;

pub use records::{
    read_classes, read_requirements, read_specialists, write_classes, write_requirements,
    write_specialists,
};
pub use render::render_grid;

//! Renders parsed expressions as inline LaTeX math.

mod generator;

pub use generator::generate;

pub mod bpm;
pub mod generator;

pub use generator::{ChartGenerator, ChartGeneratorOptions, create_chart};

pub mod chart;
pub mod config;
pub mod game;
pub mod model;
pub mod util;

#[cfg(test)]
mod test_utils;

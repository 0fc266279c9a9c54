//! Test fixtures for scenario-builder.
//!
//! Provides realistic line geometries drawn through real Las Vegas locations.

pub mod las_vegas_lines;

pub use las_vegas_lines::*;

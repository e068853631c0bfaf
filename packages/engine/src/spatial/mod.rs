//! Spatial storage: the cell grid and everything that addresses particles by position.

pub mod grid;

//! Systems - per-category physics rules.

pub mod behaviors;

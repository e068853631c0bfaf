pub mod elements;
pub mod color;
pub mod repose;
pub mod catalog;
pub mod builtin;
pub mod particle;

//! Public API exposed to JavaScript.

pub mod wasm;

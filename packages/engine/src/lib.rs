//! Grainfall Engine - falling-sand grid physics in WASM
//!
//! Architecture:
//! - core/        - logging macros, seeded randomness
//! - domain/      - element ids, catalog, particle entities, repose tables
//! - spatial/     - the cell grid (storage, dirty tracking, movement)
//! - systems/     - per-category behaviors
//! - simulation/  - world orchestration, pacing, render extraction
//! - api/         - wasm-bindgen facade

// Logging macros must be declared before every module that uses them.
#[macro_use]
pub mod core;
pub mod error;
pub mod domain;
pub mod spatial;
pub mod systems;
pub mod simulation;
pub mod api;

pub use domain::elements;
pub use spatial::grid;
pub use systems::behaviors;

use wasm_bindgen::prelude::*;

#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    engine_log!("Grainfall engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use api::wasm::World;
pub use domain::catalog::{ElementKind, ParticleCatalog};
pub use domain::elements::{Category, ElementId};
pub use domain::particle::Particle;
pub use error::{EngineError, Result};
pub use simulation::{Settings, WorldCore};

// Export element constants for JS
#[wasm_bindgen]
pub fn el_empty() -> ElementId { elements::EL_EMPTY }
#[wasm_bindgen]
pub fn el_stone() -> ElementId { elements::EL_STONE }
#[wasm_bindgen]
pub fn el_wall() -> ElementId { elements::EL_WALL }
#[wasm_bindgen]
pub fn el_wood() -> ElementId { elements::EL_WOOD }
#[wasm_bindgen]
pub fn el_metal() -> ElementId { elements::EL_METAL }
#[wasm_bindgen]
pub fn el_ice() -> ElementId { elements::EL_ICE }
#[wasm_bindgen]
pub fn el_glass() -> ElementId { elements::EL_GLASS }
#[wasm_bindgen]
pub fn el_water() -> ElementId { elements::EL_WATER }
#[wasm_bindgen]
pub fn el_oil() -> ElementId { elements::EL_OIL }
#[wasm_bindgen]
pub fn el_lava() -> ElementId { elements::EL_LAVA }
#[wasm_bindgen]
pub fn el_mud() -> ElementId { elements::EL_MUD }
#[wasm_bindgen]
pub fn el_acid() -> ElementId { elements::EL_ACID }
#[wasm_bindgen]
pub fn el_steam() -> ElementId { elements::EL_STEAM }
#[wasm_bindgen]
pub fn el_alcohol() -> ElementId { elements::EL_ALCOHOL }
#[wasm_bindgen]
pub fn el_smoke() -> ElementId { elements::EL_SMOKE }
#[wasm_bindgen]
pub fn el_fire() -> ElementId { elements::EL_FIRE }
#[wasm_bindgen]
pub fn el_chlorine() -> ElementId { elements::EL_CHLORINE }
#[wasm_bindgen]
pub fn el_hydrogen() -> ElementId { elements::EL_HYDROGEN }
#[wasm_bindgen]
pub fn el_vapor() -> ElementId { elements::EL_VAPOR }
#[wasm_bindgen]
pub fn el_sand() -> ElementId { elements::EL_SAND }
#[wasm_bindgen]
pub fn el_wet_sand() -> ElementId { elements::EL_WET_SAND }
#[wasm_bindgen]
pub fn el_dust() -> ElementId { elements::EL_DUST }
#[wasm_bindgen]
pub fn el_gravel() -> ElementId { elements::EL_GRAVEL }
#[wasm_bindgen]
pub fn el_volcanic_ash() -> ElementId { elements::EL_VOLCANIC_ASH }
#[wasm_bindgen]
pub fn el_coarse_gravel() -> ElementId { elements::EL_COARSE_GRAVEL }
#[wasm_bindgen]
pub fn el_quartz_sand() -> ElementId { elements::EL_QUARTZ_SAND }
#[wasm_bindgen]
pub fn el_wire() -> ElementId { elements::EL_WIRE }
#[wasm_bindgen]
pub fn el_battery() -> ElementId { elements::EL_BATTERY }

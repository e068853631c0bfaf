//! wasm-bindgen facade over `WorldCore`
//!
//! Errors cross the boundary as `JsValue` strings; everything else is a plain number,
//! bool or string. The pixel buffer is shared by pointer: the host builds a
//! `Uint32Array` view over wasm memory at `pixels_ptr()` with `pixels_len()` entries.

use wasm_bindgen::prelude::*;

use crate::domain::elements::ElementId;
use crate::error::EngineError;
use crate::simulation::{now_ms, PerfStats, Settings, WorldCore};

fn to_js(err: EngineError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

#[wasm_bindgen]
impl World {
    /// Create a new world with given dimensions
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            core: WorldCore::new(width, height),
        }
    }

    /// Build from a settings JSON document (camelCase keys, all optional).
    #[wasm_bindgen(js_name = fromSettingsJson)]
    pub fn from_settings_json(json: &str) -> Result<World, JsValue> {
        let core = WorldCore::from_settings_json(json).map_err(to_js)?;
        Ok(Self { core })
    }

    /// Settings as JSON, including the seed actually used.
    pub fn settings_json(&self) -> String {
        let settings = Settings {
            seed: Some(self.core.seed()),
            ..self.core.settings().clone()
        };
        serde_json::to_string(&settings).unwrap_or_default()
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.core.particle_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn tick_count(&self) -> u64 { self.core.tick_count() }

    #[wasm_bindgen(getter)]
    pub fn fps(&self) -> f64 { self.core.fps() }

    #[wasm_bindgen(getter)]
    pub fn tps(&self) -> f64 { self.core.tps() }

    pub fn set_jitter(&mut self, enabled: bool) {
        self.core.set_jitter(enabled);
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    // === Catalog ===

    /// Replace the particle catalog; clears the grid.
    pub fn load_catalog_json(&mut self, json: &str) -> Result<(), JsValue> {
        self.core.load_catalog_json(json).map_err(to_js)
    }

    pub fn manifest_json(&self) -> String {
        self.core.manifest_json()
    }

    // === Input ===

    pub fn create_particle(&mut self, x: i32, y: i32, element: ElementId) -> bool {
        self.core.create_particle(x, y, element)
    }

    /// Circular brush; returns the number of cells written.
    pub fn fill_circle(&mut self, x: i32, y: i32, radius: i32, element: ElementId, concentration: i32) -> u32 {
        self.core.fill_circle(x, y, radius, element, concentration) as u32
    }

    pub fn erase_circle(&mut self, x: i32, y: i32, radius: i32) -> u32 {
        self.core.erase_circle(x, y, radius) as u32
    }

    /// Clear all particles
    pub fn clear(&mut self) {
        self.core.clear();
    }

    // === Simulation ===

    /// Run one physics tick now.
    pub fn step(&mut self) {
        self.core.step();
    }

    /// Frame callback. Pass the `requestAnimationFrame` timestamp, or nothing to use
    /// the wall clock. Returns `true` when the host should redraw.
    pub fn frame(&mut self, now_ms_opt: Option<f64>) -> bool {
        let now = now_ms_opt.unwrap_or_else(now_ms);
        self.core.frame(now).render_due
    }

    // === Render ===

    pub fn pixels_ptr(&self) -> *const u32 {
        self.core.pixels_ptr()
    }

    pub fn pixels_len(&self) -> usize {
        self.core.pixels_len()
    }

    /// Cell indices repainted since the previous call.
    pub fn take_changed_indices(&mut self) -> Vec<u32> {
        self.core.take_changed_indices()
    }

    /// Element id at a cell, `u16::MAX` outside the grid.
    pub fn element_at(&self, x: i32, y: i32) -> ElementId {
        self.core.grid().element_at(x, y).unwrap_or(ElementId::MAX)
    }
}

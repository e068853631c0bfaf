use wasm_bindgen::prelude::*;

/// Snapshot of the last tick, zeros while perf metrics are disabled.
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) worklist_size: u32,
    pub(super) particles_processed: u32,
    pub(super) particles_moved: u32,
    pub(super) dirty_count: u32,
    pub(super) particle_count: u32,
    pub(super) grid_size: u32,
    pub(super) tick: u64,
    pub(super) fps: f64,
    pub(super) tps: f64,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn worklist_size(&self) -> u32 { self.worklist_size }
    #[wasm_bindgen(getter)]
    pub fn particles_processed(&self) -> u32 { self.particles_processed }
    #[wasm_bindgen(getter)]
    pub fn particles_moved(&self) -> u32 { self.particles_moved }
    #[wasm_bindgen(getter)]
    pub fn dirty_count(&self) -> u32 { self.dirty_count }
    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.particle_count }
    #[wasm_bindgen(getter)]
    pub fn grid_size(&self) -> u32 { self.grid_size }
    #[wasm_bindgen(getter)]
    pub fn tick(&self) -> u64 { self.tick }
    #[wasm_bindgen(getter)]
    pub fn fps(&self) -> f64 { self.fps }
    #[wasm_bindgen(getter)]
    pub fn tps(&self) -> f64 { self.tps }
}

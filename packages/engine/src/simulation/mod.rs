//! World - simulation orchestration
//!
//! `WorldCore` owns the grid, the behavior table, the seeded RNG, the frame pacers
//! and the render buffers. It only orchestrates: cell storage and movement live in
//! `spatial::grid`, per-category rules in `systems::behaviors`. The wasm facade in
//! `api::wasm` is a thin wrapper around it.

use std::sync::Arc;

use crate::core::utils::random::SimRng;
use crate::domain::catalog::ParticleCatalog;
use crate::domain::elements::ElementId;
use crate::error::Result;
use crate::spatial::grid::Grid;
use crate::systems::behaviors::BehaviorRegistry;

#[path = "perf/clock.rs"]
mod clock;
#[path = "perf/pacer.rs"]
mod pacer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;

pub use clock::now_ms;
pub use commands::MAX_BRUSH_RADIUS;
pub use pacer::{FrameCounter, Pacer};
pub use perf_stats::PerfStats;
pub use render_extract::RenderBuffers;
pub use settings::Settings;

use clock::PerfTimer;

/// What a call to [`WorldCore::frame`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct FrameOutcome {
    /// A physics tick ran.
    pub stepped: bool,
    /// The host should redraw.
    pub render_due: bool,
}

/// The simulation world
pub struct WorldCore {
    settings: Settings,
    grid: Grid,
    behaviors: BehaviorRegistry,
    rng: SimRng,
    seed: u64,

    // State
    tick: u64,
    jitter: bool,

    // Pacing
    physics_pacer: Pacer,
    render_pacer: Pacer,
    fps: FrameCounter,
    tps: FrameCounter,

    render: RenderBuffers,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl WorldCore {
    /// Create a new world with given dimensions, default settings and the built-in catalog.
    ///
    /// Zero dimensions are raised to 1.
    pub fn new(width: u32, height: u32) -> Self {
        let settings = Settings::with_size(width.max(1), height.max(1));
        init::create_world_core(settings, Arc::new(ParticleCatalog::builtin()))
    }

    pub fn with_settings(settings: Settings) -> Result<Self> {
        Self::with_catalog(settings, Arc::new(ParticleCatalog::builtin()))
    }

    pub fn with_catalog(settings: Settings, catalog: Arc<ParticleCatalog>) -> Result<Self> {
        settings.validate()?;
        Ok(init::create_world_core(settings, catalog))
    }

    pub fn from_settings_json(json: &str) -> Result<Self> {
        Self::with_settings(Settings::from_json(json)?)
    }

    /// Replace the catalog with a JSON bundle. The grid is cleared.
    pub fn load_catalog_json(&mut self, json: &str) -> Result<()> {
        let catalog = ParticleCatalog::from_bundle_json(json)?;
        self.set_catalog(Arc::new(catalog));
        Ok(())
    }

    pub fn set_catalog(&mut self, catalog: Arc<ParticleCatalog>) {
        engine_log!("catalog loaded: {} elements", catalog.len());
        self.grid.set_catalog(catalog);
        self.render.refresh_all(&self.grid);
    }

    pub fn catalog(&self) -> &Arc<ParticleCatalog> {
        self.grid.catalog()
    }

    pub fn manifest_json(&self) -> String {
        self.grid.catalog().manifest_json()
    }

    pub fn settings(&self) -> &Settings { &self.settings }

    pub fn grid(&self) -> &Grid { &self.grid }

    pub fn width(&self) -> u32 { self.grid.width() }

    pub fn height(&self) -> u32 { self.grid.height() }

    pub fn seed(&self) -> u64 { self.seed }

    /// Number of physics ticks run so far.
    pub fn tick_count(&self) -> u64 { self.tick }

    pub fn particle_count(&self) -> usize { self.grid.particle_count() }

    pub fn fps(&self) -> f64 { self.fps.rate() }

    pub fn tps(&self) -> f64 { self.tps.rate() }

    pub fn set_jitter(&mut self, enabled: bool) {
        settings::set_jitter(self, enabled);
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    // === Commands ===

    /// Place a single particle, replacing whatever is there.
    pub fn create_particle(&mut self, x: i32, y: i32, element: ElementId) -> bool {
        commands::create_particle(self, x, y, element)
    }

    /// Circular brush; radius is clamped to `0..=MAX_BRUSH_RADIUS`.
    pub fn fill_circle(&mut self, x: i32, y: i32, radius: i32, element: ElementId, concentration: i32) -> usize {
        commands::fill_circle(self, x, y, radius, element, concentration)
    }

    pub fn erase_circle(&mut self, x: i32, y: i32, radius: i32) -> usize {
        commands::erase_circle(self, x, y, radius)
    }

    /// Clear all particles
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    // === Simulation ===

    /// Run one physics tick now, ignoring the pacer.
    pub fn step(&mut self) {
        step::step(self);
    }

    /// Host frame callback: runs at most one tick if the physics interval has elapsed
    /// and reports whether a redraw is due.
    pub fn frame(&mut self, now_ms: f64) -> FrameOutcome {
        self.fps.record(now_ms);

        let stepped = self.physics_pacer.ready(now_ms);
        if stepped {
            self.step();
            self.tps.record(now_ms);
        }

        FrameOutcome {
            stepped,
            render_due: self.render_pacer.ready(now_ms),
        }
    }

    // === Render ===

    pub fn pixels(&self) -> &[u32] {
        self.render.pixels()
    }

    pub fn pixels_ptr(&self) -> *const u32 {
        self.render.pixels_ptr()
    }

    pub fn pixels_len(&self) -> usize {
        self.render.pixels_len()
    }

    /// Indices of cells repainted since the last call.
    pub fn take_changed_indices(&mut self) -> Vec<u32> {
        self.render.take_changed()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;

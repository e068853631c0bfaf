use std::sync::Arc;

use crate::core::utils::random::{entropy_seed, seeded};
use crate::domain::catalog::ParticleCatalog;
use crate::spatial::grid::Grid;
use crate::systems::behaviors::BehaviorRegistry;

use super::pacer::{FrameCounter, Pacer};
use super::perf_stats::PerfStats;
use super::settings::Settings;
use super::{RenderBuffers, WorldCore};

/// Grid tints and the stepper draw from separate streams derived from one seed.
const GRID_SEED_SALT: u64 = 0x5EED_0F_5A4D;

/// Settings are expected to be validated by the caller.
pub(super) fn create_world_core(settings: Settings, catalog: Arc<ParticleCatalog>) -> WorldCore {
    let seed = settings.seed.unwrap_or_else(entropy_seed);
    let mut grid = Grid::new(settings.width, settings.height, catalog, seed ^ GRID_SEED_SALT);
    grid.set_jitter_chance(settings.jitter_chance);

    let mut render = RenderBuffers::new(grid.size());
    render.refresh_all(&grid);

    WorldCore {
        grid,
        behaviors: BehaviorRegistry::new(),
        rng: seeded(seed),
        seed,
        tick: 0,
        jitter: settings.jitter,
        physics_pacer: Pacer::new(settings.physics_interval_ms),
        render_pacer: Pacer::new(settings.render_interval_ms),
        fps: FrameCounter::new(),
        tps: FrameCounter::new(),
        render,
        perf_enabled: settings.perf_enabled,
        perf_stats: PerfStats::default(),
        settings,
    }
}

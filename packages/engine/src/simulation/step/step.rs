use std::cmp::Reverse;

use rand::seq::SliceRandom;

use crate::systems::behaviors::UpdateContext;

use super::{PerfTimer, WorldCore};

/// One physics tick.
///
/// 1. snapshot: the dirty set becomes the worklist and the live set starts empty
/// 2. order: shuffle, then stable sort bottom row first
/// 3. dispatch: each live, unprocessed particle runs its category's rule
///
/// Everything a rule touches is re-marked dirty on the live set, which is what the
/// next tick (and the renderer) picks up.
pub(super) fn step(world: &mut WorldCore) {
    let perf_on = world.perf_enabled;
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    world.grid.reset_processed();

    // === SNAPSHOT ===
    let mut worklist = world.grid.take_dirty();

    // === ORDER ===
    worklist.shuffle(&mut world.rng);
    {
        let grid = &world.grid;
        worklist.sort_by_key(|&h| Reverse(grid.particle(h).map_or(0, |p| p.y())));
    }

    // === DISPATCH ===
    let mut processed = 0u32;
    let mut moved = 0u32;
    let mut warned = false;

    for &handle in &worklist {
        let Some(category) = world.grid.particle(handle).map(|p| p.category) else {
            continue;
        };
        if world.grid.is_processed(handle) {
            continue;
        }
        processed += 1;

        let mut ctx = UpdateContext {
            grid: &mut world.grid,
            handle,
            rng: &mut world.rng,
            jitter: world.jitter,
            moved: &mut moved,
        };
        if !world.behaviors.update(category, &mut ctx) && !warned {
            engine_warn!("no physics rule for category '{}', particles left inert", category.name());
            warned = true;
        }
    }

    world.tick += 1;
    world.render.sync_dirty(&world.grid);

    if let Some(t0) = step_start {
        let stats = &mut world.perf_stats;
        stats.reset();
        stats.step_ms = t0.elapsed_ms();
        stats.worklist_size = worklist.len() as u32;
        stats.particles_processed = processed;
        stats.particles_moved = moved;
        stats.dirty_count = world.grid.dirty_len() as u32;
        stats.particle_count = world.grid.particle_count() as u32;
        stats.grid_size = world.grid.size() as u32;
        stats.tick = world.tick;
        stats.fps = world.fps.rate();
        stats.tps = world.tps.rate();
    }
}

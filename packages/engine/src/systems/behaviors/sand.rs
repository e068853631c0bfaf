//! SandBehavior - granular falling with an angle of repose
//!
//! The particle carries its type's direction table (straight down first, then the
//! lateral groups derived from the repose angle). One resolver call per tick; when
//! it swaps, both the sand and whatever it displaced are done for this tick.

use super::{Behavior, UpdateContext};

pub struct SandBehavior;

impl SandBehavior {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SandBehavior {
    fn default() -> Self {
        Self::new()
    }
}

impl Behavior for SandBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        let Some(directions) = ctx.grid.particle(ctx.handle).and_then(|p| p.directions()).cloned() else {
            return;
        };

        let displaced = ctx
            .grid
            .try_move_particle(ctx.handle, &directions, ctx.jitter, true, true, ctx.rng);

        if let Some(displaced) = displaced {
            ctx.grid.set_processed(ctx.handle, true);
            ctx.grid.set_processed(displaced, true);
            *ctx.moved += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::core::utils::random::seeded;
    use crate::domain::catalog::ParticleCatalog;
    use crate::domain::elements::{EL_SAND, EL_STONE};
    use crate::spatial::grid::Grid;

    #[test]
    fn sand_falls_and_marks_both_processed() {
        let mut grid = Grid::new(3, 3, Arc::new(ParticleCatalog::builtin()), 1);
        let sand = grid.create_particle_at(1, 0, EL_SAND, false, false).unwrap();
        let below = grid.handle_at(1, 1).unwrap();
        let mut rng = seeded(1);
        let mut moved = 0;

        let mut ctx = UpdateContext { grid: &mut grid, handle: sand, rng: &mut rng, jitter: false, moved: &mut moved };
        SandBehavior::new().update(&mut ctx);

        assert_eq!(moved, 1);
        assert_eq!(grid.particle(sand).unwrap().y(), 1);
        assert!(grid.is_processed(sand));
        assert!(grid.is_processed(below));
    }

    #[test]
    fn non_sand_particles_are_ignored() {
        let mut grid = Grid::new(3, 3, Arc::new(ParticleCatalog::builtin()), 1);
        let stone = grid.create_particle_at(1, 0, EL_STONE, false, false).unwrap();
        let mut rng = seeded(1);
        let mut moved = 0;

        let mut ctx = UpdateContext { grid: &mut grid, handle: stone, rng: &mut rng, jitter: false, moved: &mut moved };
        SandBehavior::new().update(&mut ctx);

        assert_eq!(moved, 0);
        assert_eq!(grid.particle(stone).unwrap().y(), 0);
    }
}

use super::*;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::repose::{DirectionGroup, Offset};

impl Grid {
    /// Exchange the particles stored at two cells, rewriting both positions.
    ///
    /// `mark_neighbors_dirty` only applies together with `mark_dirty`.
    /// `false` with no change for out-of-range or equal indices.
    pub fn swap_particles(
        &mut self,
        index_a: usize,
        index_b: usize,
        mark_dirty: bool,
        mark_neighbors_dirty: bool,
    ) -> bool {
        if index_a == index_b || index_a >= self.size || index_b >= self.size {
            return false;
        }

        self.cells.swap(index_a, index_b);
        self.relocate(index_a);
        self.relocate(index_b);

        if mark_dirty {
            for idx in [index_a, index_b] {
                self.mark_cell_dirty(idx, mark_neighbors_dirty);
            }
        }
        true
    }

    /// Sync the particle stored at `idx` with its new cell.
    #[inline]
    fn relocate(&mut self, idx: usize) {
        let (x, y) = self.coords(idx);
        let slot = self.cells[idx] as usize;
        let p = &mut self.particles[slot];
        p.position = Position::new(x, y);
        p.index = idx;
    }

    /// Movement resolver.
    ///
    /// Walks `groups` in order. Offsets inside a group are tried in random order; with
    /// `jitter_enabled` a lateral offset `(dx, dy)` is first tried as `(-2dx, dy)` with
    /// probability `jitter_chance`, falling back to the plain offset when that cell is
    /// taken. The first candidate that is in bounds, not yet processed this tick,
    /// movable and strictly less dense than the mover is swapped with it. Returns the
    /// displaced particle, or `None` when nothing moved.
    pub fn try_move_particle(
        &mut self,
        handle: ParticleHandle,
        groups: &[DirectionGroup],
        jitter_enabled: bool,
        mark_dirty: bool,
        mark_neighbors_dirty: bool,
        rng: &mut SimRng,
    ) -> Option<ParticleHandle> {
        let mover = self.particle(handle)?;
        let from = mover.index;
        let (x, y) = (mover.position.x as i32, mover.position.y as i32);
        let density = mover.density;

        let mut candidates: Vec<Offset> = Vec::with_capacity(4);
        for group in groups {
            candidates.clear();
            candidates.extend_from_slice(group);
            if candidates.len() > 1 {
                candidates.shuffle(rng);
            }

            for &off in &candidates {
                let jittered = jitter_enabled && off.dx != 0 && rng.gen::<f32>() < self.jitter_chance;
                let tries = if jittered {
                    [Some(Offset::new(-2 * off.dx, off.dy)), Some(off)]
                } else {
                    [Some(off), None]
                };

                for off in tries.into_iter().flatten() {
                    let Some(target) = self.checked_index(x + off.dx, y + off.dy) else {
                        continue;
                    };
                    if !self.can_displace(target, density) {
                        continue;
                    }

                    let displaced = self.handle_at_idx(target)?;
                    self.swap_particles(from, target, mark_dirty, mark_neighbors_dirty);
                    return Some(displaced);
                }
            }
        }
        None
    }

    #[inline]
    fn can_displace(&self, target: usize, density: f32) -> bool {
        if self.is_processed_idx(target) {
            return false;
        }
        self.particle_at_idx(target)
            .map_or(false, |other| other.movable && other.density < density)
    }
}

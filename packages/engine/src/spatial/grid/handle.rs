use super::*;

/// Generational reference to a particle.
///
/// `slot` addresses the arena, `generation` must match the slot's current one for the
/// handle to resolve. Equality is identity: two particles of the same type at the same
/// cell are still different handles if one replaced the other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticleHandle {
    pub slot: u32,
    pub generation: u32,
}

impl ParticleHandle {
    #[inline]
    pub const fn new(slot: u32, generation: u32) -> Self {
        Self { slot, generation }
    }
}

impl Grid {
    #[inline]
    pub fn is_live(&self, handle: ParticleHandle) -> bool {
        self.generations
            .get(handle.slot as usize)
            .map_or(false, |&g| g == handle.generation)
    }

    #[inline]
    pub(crate) fn handle_for_slot(&self, slot: u32) -> ParticleHandle {
        ParticleHandle::new(slot, self.generations[slot as usize])
    }

    /// Handle of whatever particle occupies `(x, y)`.
    pub fn handle_at(&self, x: i32, y: i32) -> Option<ParticleHandle> {
        let idx = self.checked_index(x, y)?;
        Some(self.handle_for_slot(self.cells[idx]))
    }

    pub fn handle_at_idx(&self, idx: usize) -> Option<ParticleHandle> {
        self.cells.get(idx).map(|&slot| self.handle_for_slot(slot))
    }

    /// `None` for stale handles.
    pub fn particle(&self, handle: ParticleHandle) -> Option<&Particle> {
        if self.is_live(handle) {
            self.particles.get(handle.slot as usize)
        } else {
            None
        }
    }

    pub(crate) fn particle_mut(&mut self, handle: ParticleHandle) -> Option<&mut Particle> {
        if self.is_live(handle) {
            self.particles.get_mut(handle.slot as usize)
        } else {
            None
        }
    }
}

use super::super::*;

impl Grid {
    /// Replace the occupant of `(x, y)` with a fresh `element` particle.
    ///
    /// The slot generation is bumped, so handles to the previous occupant go stale.
    /// Neighbours are only marked when `mark_dirty` is set as well.
    /// `None` when the cell is outside the grid or `element` is not in the catalog.
    pub fn create_particle_at(
        &mut self,
        x: i32,
        y: i32,
        element: ElementId,
        mark_dirty: bool,
        mark_neighbors_dirty: bool,
    ) -> Option<ParticleHandle> {
        let idx = self.checked_index(x, y)?;
        let handle = self.replace_cell(idx, element)?;

        if mark_dirty {
            self.mark_cell_dirty(idx, mark_neighbors_dirty);
        }
        Some(handle)
    }

    pub(crate) fn replace_cell(&mut self, idx: usize, element: ElementId) -> Option<ParticleHandle> {
        let catalog = Arc::clone(&self.catalog);
        let kind = catalog.get(element)?;
        let (x, y) = self.coords(idx);
        let slot = self.cells[idx] as usize;

        self.particles[slot] = Particle::spawn(kind, Position::new(x, y), idx, &mut self.rng);
        self.generations[slot] = self.generations[slot].wrapping_add(1);
        self.processed[slot] = 0;

        Some(self.handle_for_slot(slot as u32))
    }

    /// Overwrite every cell with `element`. Nothing is marked dirty.
    /// Returns `false` (grid untouched) for an unknown element.
    pub fn populate(&mut self, element: ElementId) -> bool {
        if !self.catalog.contains(element) {
            return false;
        }
        for idx in 0..self.size {
            self.replace_cell(idx, element);
        }
        true
    }

    /// Reset every cell to the empty particle and drop all dirty and processed state.
    pub fn clear(&mut self) {
        let empty = self.catalog.empty_kind().id;
        self.populate(empty);
        self.dirty.clear();
        self.reset_processed();
    }

    /// Set a liquid's concentration (see `Particle::set_concentration`).
    pub fn set_concentration(&mut self, handle: ParticleHandle, concentration: i32) -> bool {
        self.particle_mut(handle)
            .map_or(false, |p| p.set_concentration(concentration))
    }
}

use super::super::*;

use crate::domain::repose::Offset;

impl Grid {
    /// `None` only outside the grid; an empty cell yields its empty particle.
    pub fn get_particle_at(&self, x: i32, y: i32) -> Option<&Particle> {
        let idx = self.checked_index(x, y)?;
        self.particle_at_idx(idx)
    }

    #[inline]
    pub fn particle_at_idx(&self, idx: usize) -> Option<&Particle> {
        let slot = *self.cells.get(idx)?;
        self.particles.get(slot as usize)
    }

    pub fn get_neighbor_particle(&self, particle: &Particle, offset: Offset) -> Option<&Particle> {
        self.get_particle_at(
            particle.position.x as i32 + offset.dx,
            particle.position.y as i32 + offset.dy,
        )
    }

    /// In-bounds neighbours at `offsets` accepted by `filter`, in offset order.
    pub fn get_valid_neighbor_particles(
        &self,
        particle: &Particle,
        offsets: &[Offset],
        filter: NeighborFilter,
    ) -> Vec<&Particle> {
        offsets
            .iter()
            .filter_map(|&off| self.get_neighbor_particle(particle, off))
            .filter(|n| filter.accepts(n))
            .collect()
    }

    /// Element id at `(x, y)`, `None` outside the grid.
    pub fn element_at(&self, x: i32, y: i32) -> Option<ElementId> {
        self.get_particle_at(x, y).map(|p| p.element)
    }

    /// Number of non-empty cells.
    pub fn particle_count(&self) -> usize {
        self.particles.iter().filter(|p| !p.is_empty()).count()
    }
}

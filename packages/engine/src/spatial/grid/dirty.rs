use super::*;

use crate::domain::repose::MOORE_NEIGHBORS;

/// Set of particle handles that need attention next tick.
///
/// Membership is one marker per arena slot holding the generation that was inserted,
/// so re-adding a handle is O(1) and collapses to one entry. `order` keeps insertion
/// order for reproducible runs; entries whose slot has since been overwritten are
/// stale and get filtered out when read.
#[derive(Clone, Debug, Default)]
pub struct DirtySet {
    marked: Vec<Option<u32>>,
    order: Vec<ParticleHandle>,
}

impl DirtySet {
    pub fn new(slots: usize) -> Self {
        Self {
            marked: vec![None; slots],
            order: Vec::new(),
        }
    }

    /// Returns `false` when the handle was already present.
    pub fn insert(&mut self, handle: ParticleHandle) -> bool {
        let Some(mark) = self.marked.get_mut(handle.slot as usize) else {
            return false;
        };
        if *mark == Some(handle.generation) {
            return false;
        }
        *mark = Some(handle.generation);
        self.order.push(handle);
        true
    }

    #[inline]
    pub fn contains(&self, handle: ParticleHandle) -> bool {
        self.marked
            .get(handle.slot as usize)
            .map_or(false, |m| *m == Some(handle.generation))
    }

    /// Raw entry count, stale entries included.
    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ParticleHandle> + '_ {
        self.order.iter().copied()
    }

    /// Move every entry out, leaving the set empty.
    pub fn drain(&mut self) -> Vec<ParticleHandle> {
        let order = std::mem::take(&mut self.order);
        for h in &order {
            if let Some(mark) = self.marked.get_mut(h.slot as usize) {
                *mark = None;
            }
        }
        order
    }

    pub fn clear(&mut self) {
        self.drain();
    }
}

impl Grid {
    fn mark_slot_dirty(&mut self, slot: u32) {
        let handle = self.handle_for_slot(slot);
        self.dirty.insert(handle);
    }

    /// Mark the particle at cell `idx` and, optionally, its 8 in-bounds neighbours.
    pub(crate) fn mark_cell_dirty(&mut self, idx: usize, mark_neighbors_dirty: bool) {
        let Some(&slot) = self.cells.get(idx) else {
            return;
        };
        self.mark_slot_dirty(slot);

        if mark_neighbors_dirty {
            self.mark_neighbors_dirty(idx);
        }
    }

    /// Mark the in-bounds 8-connected neighbours of cell `idx`, not the cell itself.
    pub(crate) fn mark_neighbors_dirty(&mut self, idx: usize) {
        let (x, y) = self.coords(idx);
        for off in MOORE_NEIGHBORS {
            if let Some(n) = self.checked_index(x as i32 + off.dx, y as i32 + off.dy) {
                let slot = self.cells[n];
                self.mark_slot_dirty(slot);
            }
        }
    }

    /// No-op for stale handles.
    pub fn mark_particle_dirty(&mut self, handle: ParticleHandle, mark_neighbors_dirty: bool) {
        if let Some(idx) = self.particle(handle).map(|p| p.index) {
            self.mark_cell_dirty(idx, mark_neighbors_dirty);
        }
    }

    pub fn clear_dirty(&mut self) {
        self.dirty.clear();
    }

    pub fn is_dirty(&self, handle: ParticleHandle) -> bool {
        self.is_live(handle) && self.dirty.contains(handle)
    }

    /// Live dirty handles in insertion order.
    pub fn dirty_particles(&self) -> Vec<ParticleHandle> {
        self.dirty.iter().filter(|&h| self.is_live(h)).collect()
    }

    pub fn dirty_len(&self) -> usize {
        self.dirty.iter().filter(|&h| self.is_live(h)).count()
    }

    /// Snapshot the dirty set and empty the live one.
    pub fn take_dirty(&mut self) -> Vec<ParticleHandle> {
        let mut handles = self.dirty.drain();
        handles.retain(|&h| self.is_live(h));
        handles
    }
}

//! Grid - authoritative cell store
//!
//! Row-major, one particle per cell, `y` grows downward. Particles live in an arena
//! (`particles`) with one slot per cell; `cells` maps a cell index to the slot
//! currently stored there. A swap exchanges two `cells` entries, so a slot (and the
//! handle pointing at it) travels with its particle. Overwriting a cell bumps the
//! slot generation, which turns every outstanding handle into a stale one.
//!
//! Split across files the same way the accessors are grouped:
//! - `indexing.rs`  - dimensions, index <-> coords, bounds
//! - `handle.rs`    - generational handles
//! - `dirty.rs`     - insertion-ordered dirty set
//! - `accessors/`   - lookup, creation, processed markers
//! - `moves.rs`     - swap and the movement resolver
//! - `fill.rs`      - circular brush

use std::sync::Arc;

use crate::core::utils::random::{seeded, SimRng};
use crate::domain::catalog::ParticleCatalog;
use crate::domain::elements::{Category, ElementId};
use crate::domain::particle::{Particle, Position};

mod indexing;
mod handle;
mod dirty;
mod accessors;
mod moves;
mod fill;

pub use dirty::DirtySet;
pub use handle::ParticleHandle;

#[cfg(test)]
mod tests;

/// Neighbour query filter. `Category::Any` and `element: None` accept everything.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NeighborFilter {
    pub category: Category,
    pub element: Option<ElementId>,
}

impl NeighborFilter {
    pub const ANY: NeighborFilter = NeighborFilter {
        category: Category::Any,
        element: None,
    };

    #[inline]
    pub fn accepts(&self, particle: &Particle) -> bool {
        self.category.matches(particle.category)
            && self.element.map_or(true, |id| id == particle.element)
    }
}

impl Default for NeighborFilter {
    fn default() -> Self {
        Self::ANY
    }
}

pub const DEFAULT_JITTER_CHANCE: f32 = 0.5;

pub struct Grid {
    width: u32,
    height: u32,
    size: usize,

    catalog: Arc<ParticleCatalog>,

    /// cell index -> arena slot
    cells: Vec<u32>,
    /// arena, indexed by slot
    particles: Vec<Particle>,
    generations: Vec<u32>,
    /// per slot: 1 = consumed by a swap this tick
    processed: Vec<u8>,

    dirty: DirtySet,

    /// Probability that a lateral move candidate is jittered.
    jitter_chance: f32,

    /// Tint source for newly created particles.
    rng: SimRng,
}

impl Grid {
    /// A `width` x `height` grid filled with the catalog's empty particle. Nothing is dirty.
    pub fn new(width: u32, height: u32, catalog: Arc<ParticleCatalog>, seed: u64) -> Self {
        let size = (width as usize) * (height as usize);
        let mut rng = seeded(seed);

        let empty = catalog.empty_kind();
        let particles: Vec<Particle> = (0..size)
            .map(|idx| {
                let x = (idx % width.max(1) as usize) as u32;
                let y = (idx / width.max(1) as usize) as u32;
                Particle::spawn(empty, Position::new(x, y), idx, &mut rng)
            })
            .collect();

        Self {
            width,
            height,
            size,
            catalog,
            cells: (0..size as u32).collect(),
            particles,
            generations: vec![0; size],
            processed: vec![0; size],
            dirty: DirtySet::new(size),
            jitter_chance: DEFAULT_JITTER_CHANCE,
            rng,
        }
    }

    #[inline]
    pub fn catalog(&self) -> &Arc<ParticleCatalog> {
        &self.catalog
    }

    #[inline]
    pub fn jitter_chance(&self) -> f32 {
        self.jitter_chance
    }

    pub fn set_jitter_chance(&mut self, chance: f32) {
        self.jitter_chance = if chance.is_finite() { chance.clamp(0.0, 1.0) } else { 0.0 };
    }

    /// Swap the catalog and reset every cell to its empty particle.
    pub fn set_catalog(&mut self, catalog: Arc<ParticleCatalog>) {
        self.catalog = catalog;
        self.clear();
    }
}

//! Render extraction
//!
//! Keeps a packed ABGR pixel per cell (little-endian bytes are RGBA, so the host can
//! copy the buffer straight into an `ImageData`) plus the list of cell indices that
//! changed since the host last asked. Both are updated from the grid's dirty set.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::spatial::grid::Grid;

pub struct RenderBuffers {
    pixels: Vec<u32>,
    changed: Vec<u32>,
    /// 1 when the cell is already in `changed`
    changed_mark: Vec<u8>,
}

impl RenderBuffers {
    pub fn new(size: usize) -> Self {
        Self {
            pixels: vec![0; size],
            changed: Vec::with_capacity(1024),
            changed_mark: vec![0; size],
        }
    }

    #[inline]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    #[inline]
    pub fn pixels_ptr(&self) -> *const u32 {
        self.pixels.as_ptr()
    }

    #[inline]
    pub fn pixels_len(&self) -> usize {
        self.pixels.len()
    }

    /// Repaint every cell and report all of them as changed.
    pub fn refresh_all(&mut self, grid: &Grid) {
        if self.pixels.len() != grid.size() {
            *self = Self::new(grid.size());
        }

        #[cfg(feature = "parallel")]
        {
            self.pixels.par_iter_mut().enumerate().for_each(|(idx, px)| {
                *px = pixel_at(grid, idx);
            });
        }
        #[cfg(not(feature = "parallel"))]
        {
            for (idx, px) in self.pixels.iter_mut().enumerate() {
                *px = pixel_at(grid, idx);
            }
        }

        self.changed.clear();
        self.changed.extend(0..grid.size() as u32);
        self.changed_mark.fill(1);
    }

    /// Repaint the cells of every live dirty particle. Returns how many were written.
    pub fn sync_dirty(&mut self, grid: &Grid) -> usize {
        let mut written = 0;
        for handle in grid.dirty_particles() {
            let Some(idx) = grid.particle(handle).map(|p| p.index) else {
                continue;
            };
            self.write(grid, idx);
            written += 1;
        }
        written
    }

    #[inline]
    fn write(&mut self, grid: &Grid, idx: usize) {
        if idx >= self.pixels.len() {
            return;
        }
        self.pixels[idx] = pixel_at(grid, idx);
        if self.changed_mark[idx] == 0 {
            self.changed_mark[idx] = 1;
            self.changed.push(idx as u32);
        }
    }

    /// Drain the changed-cell list.
    pub fn take_changed(&mut self) -> Vec<u32> {
        let changed = std::mem::take(&mut self.changed);
        for &idx in &changed {
            self.changed_mark[idx as usize] = 0;
        }
        changed
    }
}

#[inline]
fn pixel_at(grid: &Grid, idx: usize) -> u32 {
    grid.particle_at_idx(idx)
        .map_or(0, |p| p.display_color().to_abgr())
}

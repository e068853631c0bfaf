use super::super::*;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

impl Grid {
    // === Processed flag ===
    // Per slot, so the flag follows the particle through swaps.
    #[inline]
    pub fn is_processed(&self, handle: ParticleHandle) -> bool {
        self.is_live(handle) && self.processed[handle.slot as usize] == 1
    }

    /// Whether the particle currently stored at cell `idx` was consumed this tick.
    #[inline]
    pub fn is_processed_idx(&self, idx: usize) -> bool {
        self.cells
            .get(idx)
            .map_or(false, |&slot| self.processed[slot as usize] == 1)
    }

    #[inline]
    pub fn set_processed(&mut self, handle: ParticleHandle, processed: bool) {
        if self.is_live(handle) {
            self.processed[handle.slot as usize] = if processed { 1 } else { 0 };
        }
    }

    /// Reset processed flags for all particles
    #[inline]
    pub fn reset_processed(&mut self) {
        #[cfg(feature = "parallel")]
        {
            self.processed.par_iter_mut().for_each(|v| *v = 0);
        }
        #[cfg(not(feature = "parallel"))]
        {
            self.processed.fill(0);
        }
    }
}

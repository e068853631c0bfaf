use super::*;

impl Grid {
    /// Circular brush centred on `(cx, cy)`.
    ///
    /// Writes `element` into every in-bounds cell with `dx² + dy² <= radius²` that is
    /// empty or already holds `element`; the empty element (eraser) overwrites anything.
    /// Written cells and their neighbours are marked dirty and liquids get
    /// `concentration`. Returns the number of cells written.
    pub fn fill_circle_at(
        &mut self,
        cx: i32,
        cy: i32,
        radius: i32,
        element: ElementId,
        concentration: i32,
    ) -> usize {
        if radius < 0 || !self.catalog.contains(element) {
            return 0;
        }
        let erasing = element == self.catalog.empty_kind().id;
        let r2 = (radius as i64) * (radius as i64);
        let mut written = 0;

        // Rows top to bottom, clipped to the grid. Bounds in i64: the centre may lie far outside.
        let (cx, cy, r) = (cx as i64, cy as i64, radius as i64);
        let y_start = (cy - r).max(0);
        let y_end = (cy + r).min(self.height as i64 - 1);
        let x_start = (cx - r).max(0);
        let x_end = (cx + r).min(self.width as i64 - 1);

        for y in y_start..=y_end {
            for x in x_start..=x_end {
                let dx = x - cx;
                let dy = y - cy;
                if dx * dx + dy * dy > r2 {
                    continue;
                }

                // In-grid, so both fit in i32.
                let (x, y) = (x as i32, y as i32);
                let Some(current) = self.get_particle_at(x, y) else {
                    continue;
                };
                if !(erasing || current.is_empty() || current.element == element) {
                    continue;
                }

                if let Some(handle) = self.create_particle_at(x, y, element, true, true) {
                    self.set_concentration(handle, concentration);
                    written += 1;
                }
            }
        }
        written
    }
}

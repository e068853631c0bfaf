use crate::domain::elements::ElementId;

use super::WorldCore;

/// Brush radius accepted from the input layer.
pub const MAX_BRUSH_RADIUS: i32 = 16;

pub(super) fn create_particle(world: &mut WorldCore, x: i32, y: i32, element: ElementId) -> bool {
    let created = world.grid.create_particle_at(x, y, element, true, true).is_some();
    if created {
        world.render.sync_dirty(&world.grid);
    }
    created
}

pub(super) fn fill_circle(
    world: &mut WorldCore,
    cx: i32,
    cy: i32,
    radius: i32,
    element: ElementId,
    concentration: i32,
) -> usize {
    let radius = radius.clamp(0, MAX_BRUSH_RADIUS);
    let written = world.grid.fill_circle_at(cx, cy, radius, element, concentration);
    if written > 0 {
        world.render.sync_dirty(&world.grid);
    }
    written
}

pub(super) fn erase_circle(world: &mut WorldCore, cx: i32, cy: i32, radius: i32) -> usize {
    let empty = world.grid.catalog().empty_kind().id;
    fill_circle(world, cx, cy, radius, empty, 1)
}

pub(super) fn clear(world: &mut WorldCore) {
    world.grid.clear();
    world.render.refresh_all(&world.grid);
}

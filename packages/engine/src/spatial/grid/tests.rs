use super::*;

use std::collections::HashSet;

use crate::core::utils::random::seeded;
use crate::domain::elements::{EL_EMPTY, EL_SAND, EL_STONE, EL_WALL, EL_WATER};
use crate::domain::repose::{Offset, MOORE_NEIGHBORS, VON_NEUMANN_NEIGHBORS};

fn grid(width: u32, height: u32) -> Grid {
    Grid::new(width, height, Arc::new(ParticleCatalog::builtin()), 1234)
}

fn down_only() -> Vec<Vec<Offset>> {
    vec![vec![Offset::new(0, 1)]]
}

fn assert_bijection(g: &Grid) {
    let mut seen = HashSet::new();
    for y in 0..g.height() {
        for x in 0..g.width() {
            let idx = g.index(x, y);
            let p = g.get_particle_at(x as i32, y as i32).unwrap();
            assert_eq!(p.index, idx);
            assert_eq!(p.position, Position::new(x, y));
            assert!(seen.insert(g.handle_at(x as i32, y as i32).unwrap()));
        }
    }
}

#[test]
fn new_grid_is_empty_and_clean() {
    let g = grid(8, 6);
    assert_eq!(g.size(), 48);
    assert_eq!(g.particle_count(), 0);
    assert_eq!(g.dirty_len(), 0);
    assert!(g.get_particle_at(3, 3).unwrap().is_empty());
    assert_bijection(&g);
}

#[test]
fn out_of_bounds_is_distinct_from_empty() {
    let g = grid(4, 4);
    assert!(g.get_particle_at(-1, 0).is_none());
    assert!(g.get_particle_at(0, 4).is_none());
    assert!(g.get_particle_at(4, 0).is_none());
    assert_eq!(g.element_at(0, 0), Some(EL_EMPTY));
}

#[test]
fn create_particle_rejects_bad_input() {
    let mut g = grid(4, 4);
    assert!(g.create_particle_at(-1, 0, EL_SAND, true, true).is_none());
    assert!(g.create_particle_at(0, 9, EL_SAND, true, true).is_none());
    assert!(g.create_particle_at(0, 0, 999, true, true).is_none());
    assert_eq!(g.dirty_len(), 0);
}

#[test]
fn create_particle_replaces_occupant_and_stales_old_handle() {
    let mut g = grid(4, 4);
    let old = g.handle_at(1, 1).unwrap();
    let sand = g.create_particle_at(1, 1, EL_SAND, false, false).unwrap();

    assert_ne!(old, sand);
    assert!(g.particle(old).is_none());
    assert_eq!(g.particle(sand).unwrap().element, EL_SAND);
    assert_eq!(g.handle_at(1, 1), Some(sand));
    assert_bijection(&g);
}

#[test]
fn create_particle_marks_dirty_as_requested() {
    let mut g = grid(5, 5);
    g.create_particle_at(2, 2, EL_SAND, true, false);
    assert_eq!(g.dirty_len(), 1);

    g.clear_dirty();
    g.create_particle_at(2, 2, EL_SAND, true, true);
    assert_eq!(g.dirty_len(), 9);

    g.clear_dirty();
    g.create_particle_at(0, 0, EL_SAND, true, true);
    assert_eq!(g.dirty_len(), 4);
}

#[test]
fn dirty_set_collapses_duplicates_and_drops_stale_entries() {
    let mut g = grid(4, 4);
    let h = g.create_particle_at(1, 1, EL_SAND, true, false).unwrap();
    g.mark_particle_dirty(h, false);
    g.mark_particle_dirty(h, false);
    assert_eq!(g.dirty_particles(), vec![h]);

    // Overwrite: old handle is stale, the new particle is a new entry.
    let replacement = g.create_particle_at(1, 1, EL_STONE, true, false).unwrap();
    assert_eq!(g.dirty_particles(), vec![replacement]);
    assert!(!g.is_dirty(h));

    let taken = g.take_dirty();
    assert_eq!(taken, vec![replacement]);
    assert_eq!(g.dirty_len(), 0);
}

#[test]
fn neighbor_queries_clip_and_filter() {
    let mut g = grid(3, 3);
    g.create_particle_at(1, 0, EL_WATER, false, false);
    g.create_particle_at(2, 1, EL_SAND, false, false);
    g.create_particle_at(0, 0, EL_STONE, false, false);

    let corner = g.get_particle_at(0, 0).unwrap().clone();
    assert!(g.get_neighbor_particle(&corner, Offset::new(-1, 0)).is_none());
    assert_eq!(
        g.get_neighbor_particle(&corner, Offset::new(1, 0)).map(|p| p.element),
        Some(EL_WATER)
    );

    let centre = g.get_particle_at(1, 1).unwrap().clone();
    assert_eq!(g.get_valid_neighbor_particles(&centre, &MOORE_NEIGHBORS, NeighborFilter::ANY).len(), 8);

    let liquids = NeighborFilter { category: Category::Liquid, element: None };
    let found = g.get_valid_neighbor_particles(&centre, &VON_NEUMANN_NEIGHBORS, liquids);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].element, EL_WATER);

    let sand_only = NeighborFilter { category: Category::Any, element: Some(EL_SAND) };
    assert_eq!(g.get_valid_neighbor_particles(&centre, &MOORE_NEIGHBORS, sand_only).len(), 1);

    let corner_neighbours = g.get_valid_neighbor_particles(&corner, &MOORE_NEIGHBORS, NeighborFilter::ANY);
    assert_eq!(corner_neighbours.len(), 3);
}

#[test]
fn fill_circle_only_touches_the_disc() {
    let mut g = grid(10, 10);
    let written = g.fill_circle_at(5, 5, 2, EL_WATER, 1);

    assert_eq!(written, 13);
    assert_eq!(g.element_at(5, 7), Some(EL_WATER));
    assert_eq!(g.element_at(7, 5), Some(EL_WATER));
    assert_eq!(g.element_at(6, 6), Some(EL_WATER));
    assert_eq!(g.element_at(7, 7), Some(EL_EMPTY));
    assert_eq!(g.element_at(5, 8), Some(EL_EMPTY));
    assert_eq!(g.particle_count(), 13);
}

#[test]
fn fill_circle_is_clipped_at_edges() {
    let mut g = grid(10, 10);
    assert_eq!(g.fill_circle_at(0, 0, 1, EL_SAND, 1), 3);
    assert_eq!(g.fill_circle_at(-5, -5, 1, EL_SAND, 1), 0);
    assert_bijection(&g);
}

#[test]
fn fill_circle_leaves_other_types_alone_but_erases_everything() {
    let mut g = grid(10, 10);
    g.create_particle_at(5, 5, EL_STONE, false, false);
    g.fill_circle_at(5, 5, 1, EL_SAND, 1);
    assert_eq!(g.element_at(5, 5), Some(EL_STONE));
    assert_eq!(g.element_at(5, 4), Some(EL_SAND));

    let erased = g.fill_circle_at(5, 5, 1, EL_EMPTY, 1);
    assert_eq!(erased, 5);
    assert_eq!(g.particle_count(), 0);
}

#[test]
fn fill_circle_sets_clamped_concentration() {
    let mut g = grid(10, 10);
    g.fill_circle_at(5, 5, 0, EL_WATER, 4);
    assert_eq!(g.get_particle_at(5, 5).unwrap().concentration(), Some(4));

    g.fill_circle_at(5, 5, 0, EL_WATER, 0);
    assert_eq!(g.get_particle_at(5, 5).unwrap().concentration(), Some(1));

    g.fill_circle_at(5, 5, 0, EL_WATER, 500);
    assert_eq!(g.get_particle_at(5, 5).unwrap().concentration(), Some(10));
}

#[test]
fn refilling_same_region_changes_only_identity() {
    let mut g = grid(10, 10);
    g.fill_circle_at(4, 4, 2, EL_WATER, 3);
    let before: Vec<(ElementId, Option<u8>)> = (0..g.size())
        .map(|i| {
            let p = g.particle_at_idx(i).unwrap();
            (p.element, p.concentration())
        })
        .collect();

    g.fill_circle_at(4, 4, 2, EL_WATER, 3);
    let after: Vec<(ElementId, Option<u8>)> = (0..g.size())
        .map(|i| {
            let p = g.particle_at_idx(i).unwrap();
            (p.element, p.concentration())
        })
        .collect();

    assert_eq!(before, after);
}

#[test]
fn self_swap_is_rejected() {
    let mut g = grid(4, 4);
    g.create_particle_at(1, 1, EL_SAND, false, false);
    let i = g.index(1, 1);
    let handle = g.handle_at(1, 1);

    assert!(!g.swap_particles(i, i, true, true));
    assert!(!g.swap_particles(i, 16, true, true));
    assert_eq!(g.handle_at(1, 1), handle);
    assert_eq!(g.dirty_len(), 0);
}

#[test]
fn swap_moves_handles_with_their_particles() {
    let mut g = grid(4, 4);
    let sand = g.create_particle_at(1, 1, EL_SAND, false, false).unwrap();
    let empty = g.handle_at(1, 2).unwrap();

    assert!(g.swap_particles(g.index(1, 1), g.index(1, 2), true, false));
    assert_eq!(g.handle_at(1, 2), Some(sand));
    assert_eq!(g.handle_at(1, 1), Some(empty));
    assert_eq!(g.particle(sand).unwrap().position, Position::new(1, 2));
    assert_eq!(g.dirty_len(), 2);
    assert_bijection(&g);
}

#[test]
fn resolver_moves_into_lighter_cells_only() {
    let mut g = grid(3, 3);
    let mut rng = seeded(9);
    let sand = g.create_particle_at(1, 0, EL_SAND, false, false).unwrap();

    let displaced = g.try_move_particle(sand, &down_only(), false, true, true, &mut rng);
    assert!(displaced.is_some());
    assert_eq!(g.particle(sand).unwrap().position, Position::new(1, 1));

    g.create_particle_at(1, 2, EL_STONE, false, false);
    assert!(g.try_move_particle(sand, &down_only(), false, true, true, &mut rng).is_none());
    assert_eq!(g.particle(sand).unwrap().position, Position::new(1, 1));
}

#[test]
fn denser_particle_sinks_through_liquid() {
    let mut g = grid(3, 3);
    let mut rng = seeded(2);
    let sand = g.create_particle_at(1, 0, EL_SAND, false, false).unwrap();
    let water = g.create_particle_at(1, 1, EL_WATER, false, false).unwrap();

    assert_eq!(g.try_move_particle(sand, &down_only(), false, true, false, &mut rng), Some(water));
    assert_eq!(g.element_at(1, 1), Some(EL_SAND));
    assert_eq!(g.element_at(1, 0), Some(EL_WATER));
}

#[test]
fn resolver_never_enters_immovable_or_processed_cells() {
    let mut g = grid(3, 3);
    let mut rng = seeded(4);
    let sand = g.create_particle_at(1, 0, EL_SAND, false, false).unwrap();

    let below = g.handle_at(1, 1).unwrap();
    g.set_processed(below, true);
    assert!(g.try_move_particle(sand, &down_only(), false, false, false, &mut rng).is_none());

    g.reset_processed();
    g.create_particle_at(1, 1, EL_WALL, false, false);
    assert!(g.try_move_particle(sand, &down_only(), false, false, false, &mut rng).is_none());
}

#[test]
fn resolver_falls_back_to_later_groups() {
    let mut g = grid(3, 3);
    let mut rng = seeded(11);
    let sand = g.create_particle_at(1, 1, EL_SAND, false, false).unwrap();
    g.create_particle_at(1, 2, EL_STONE, false, false);
    g.create_particle_at(0, 2, EL_STONE, false, false);

    let groups = vec![
        vec![Offset::new(0, 1)],
        vec![Offset::new(1, 1), Offset::new(-1, 1)],
    ];
    assert!(g.try_move_particle(sand, &groups, false, true, true, &mut rng).is_some());
    assert_eq!(g.particle(sand).unwrap().position, Position::new(2, 2));
}

#[test]
fn stale_handles_do_nothing() {
    let mut g = grid(3, 3);
    let mut rng = seeded(1);
    let sand = g.create_particle_at(1, 0, EL_SAND, false, false).unwrap();
    g.create_particle_at(1, 0, EL_STONE, false, false);

    assert!(g.try_move_particle(sand, &down_only(), false, true, true, &mut rng).is_none());
    g.mark_particle_dirty(sand, true);
    assert_eq!(g.dirty_len(), 0);
    assert!(!g.set_concentration(sand, 3));
}

#[test]
fn populate_and_clear_reset_every_cell() {
    let mut g = grid(4, 3);
    assert!(!g.populate(4242));
    assert!(g.populate(EL_SAND));
    assert_eq!(g.particle_count(), 12);
    assert_eq!(g.dirty_len(), 0);

    g.create_particle_at(0, 0, EL_STONE, true, true);
    g.clear();
    assert_eq!(g.particle_count(), 0);
    assert_eq!(g.dirty_len(), 0);
    assert_bijection(&g);
}

#[test]
fn random_swaps_keep_the_bijection() {
    use rand::Rng;

    let mut g = grid(7, 5);
    g.fill_circle_at(3, 2, 2, EL_SAND, 1);
    let mut rng = seeded(77);
    for _ in 0..200 {
        let a = rng.gen_range(0..g.size());
        let b = rng.gen_range(0..g.size());
        g.swap_particles(a, b, true, true);
    }
    assert_bijection(&g);
    assert_eq!(g.particle_count(), 13);
}

#[test]
fn neighbours_are_only_marked_along_with_the_cell() {
    let mut g = grid(5, 5);
    g.create_particle_at(2, 2, EL_SAND, false, true);
    assert_eq!(g.dirty_len(), 0);

    assert!(g.swap_particles(g.index(2, 2), g.index(2, 3), false, true));
    assert_eq!(g.dirty_len(), 0);
}

#[test]
fn far_off_brush_centre_is_clipped_without_overflow() {
    let mut g = grid(10, 10);
    assert_eq!(g.fill_circle_at(i32::MAX - 2, 3, 8, EL_SAND, 1), 0);
    assert_eq!(g.fill_circle_at(i32::MIN + 2, i32::MIN, 8, EL_SAND, 1), 0);
    assert_eq!(g.fill_circle_at(3, 3, i32::MAX, EL_SAND, 1), 100);
    assert_bijection(&g);
}

#[test]
fn jitter_flips_and_doubles_lateral_offsets() {
    let mut g = grid(5, 3);
    g.set_jitter_chance(1.0);
    let mut rng = seeded(6);
    let sand = g.create_particle_at(2, 0, EL_SAND, false, false).unwrap();

    let groups = vec![vec![Offset::new(1, 1)]];
    assert!(g.try_move_particle(sand, &groups, true, false, false, &mut rng).is_some());
    assert_eq!(g.particle(sand).unwrap().position, Position::new(0, 1));
}

#[test]
fn jitter_never_touches_vertical_offsets() {
    let mut g = grid(5, 3);
    g.set_jitter_chance(1.0);
    let mut rng = seeded(6);
    let sand = g.create_particle_at(2, 0, EL_SAND, false, false).unwrap();

    assert!(g.try_move_particle(sand, &down_only(), true, false, false, &mut rng).is_some());
    assert_eq!(g.particle(sand).unwrap().position, Position::new(2, 1));
}

/// Sand on a one-cell stone pillar, with stones two cells either side, so every
/// jittered diagonal is taken and only the plain diagonals are free.
fn pillar_grid(seed: u64) -> (Grid, ParticleHandle) {
    let mut g = Grid::new(11, 10, Arc::new(ParticleCatalog::builtin()), seed);
    g.set_jitter_chance(1.0);
    for x in [3, 5, 7] {
        g.create_particle_at(x, 4, EL_STONE, false, false);
    }
    let sand = g.create_particle_at(5, 3, EL_SAND, false, false).unwrap();
    (g, sand)
}

#[test]
fn blocked_jitter_target_falls_back_to_the_plain_offset() {
    let groups = vec![
        vec![Offset::new(0, 1)],
        vec![Offset::new(1, 1), Offset::new(-1, 1)],
    ];

    for seed in 0..32 {
        let (mut g, sand) = pillar_grid(seed);
        let mut rng = seeded(seed);
        assert!(g.try_move_particle(sand, &groups, true, false, false, &mut rng).is_some());

        let p = g.particle(sand).unwrap().position;
        assert!(p == Position::new(4, 4) || p == Position::new(6, 4), "seed {} ended at {:?}", seed, p);
    }
}

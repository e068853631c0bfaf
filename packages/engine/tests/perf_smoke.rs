use grainfall_engine::elements::EL_SAND;
use grainfall_engine::World;

#[test]
fn perf_smoke_step() {
    let mut world = World::new(128, 64);
    world.enable_perf_metrics(true);
    for x in (0..128).step_by(8) {
        world.fill_circle(x, 8, 6, EL_SAND, 1);
    }
    world.step();
    let stats = world.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert!(stats.worklist_size() > 0);
    assert!(stats.particles_moved() > 0);
    assert_eq!(stats.grid_size(), 128 * 64);
}

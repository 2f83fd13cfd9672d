use kp_algorithms::knapsack::{
    space_efficient,
    sweep::{collision_sweep, sweep_table_sizes},
};
use kp_challenges::knapsack::{Instance, Track};

#[test]
fn test_sweep_table_sizes() {
    assert_eq!(sweep_table_sizes(10, 100, 10), vec![100, 200, 300, 400, 500, 600, 700, 800, 900]);
    assert_eq!(sweep_table_sizes(3, 50, 1000), (1..150).collect::<Vec<_>>());
    assert_eq!(sweep_table_sizes(3, 50, 0), (150..150).collect::<Vec<_>>());
    assert!(sweep_table_sizes(0, 50, 1000).is_empty());
    assert!(sweep_table_sizes(1, 1, 1000).is_empty());
}

#[test]
fn test_sweep_matches_direct_solves() {
    let instance = Instance::generate_instance(&[9u8; 32], &Track { num_items: 12 }).unwrap();
    let report = collision_sweep(&instance, 40).unwrap();
    assert_eq!(report.num_items, 12);
    assert_eq!(report.capacity, instance.capacity());
    assert_eq!(
        report.samples.iter().map(|s| s.table_size).collect::<Vec<_>>(),
        sweep_table_sizes(12, instance.capacity(), 40)
    );
    for sample in &report.samples {
        let (_, stats) = space_efficient::solve_challenge(&instance, sample.table_size).unwrap();
        assert_eq!(sample.collisions, stats.collisions);
    }
}

#[test]
fn test_sweep_is_reproducible() {
    let instance = Instance::generate_instance(&[1u8; 32], &Track { num_items: 20 }).unwrap();
    let a = collision_sweep(&instance, 100).unwrap();
    let b = collision_sweep(&instance, 100).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.to_collision_lines().lines().count(), a.samples.len());
}

#![allow(dead_code)]

use kp_challenges::knapsack::Instance;
use rand::{rngs::SmallRng, Rng, SeedableRng};

/// Items `(60,10), (100,20), (120,30)` with capacity 50.
pub fn textbook() -> Instance {
    Instance::from_items(&[(60, 10), (100, 20), (120, 30)], 50)
}

/// Small random instances, `n <= 12` and `capacity <= 50`.
pub fn random_instances(seed: u64, count: usize) -> Vec<Instance> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let num_items = rng.gen_range(0..=12);
            let items: Vec<(u32, u32)> = (0..num_items)
                .map(|_| (rng.gen_range(0..=40), rng.gen_range(1..=20)))
                .collect();
            Instance::from_items(&items, rng.gen_range(0..=50))
        })
        .collect()
}

/// Optimum by enumerating every subset.
pub fn brute_force(instance: &Instance) -> u64 {
    let n = instance.num_items();
    let mut best = 0;
    for mask in 0u32..(1 << n) {
        let mut weight = 0u64;
        let mut value = 0u64;
        for k in 0..n {
            if mask & (1 << k) != 0 {
                weight += instance.weight(k + 1) as u64;
                value += instance.value(k + 1) as u64;
            }
        }
        if weight <= instance.capacity() as u64 {
            best = best.max(value);
        }
    }
    best
}

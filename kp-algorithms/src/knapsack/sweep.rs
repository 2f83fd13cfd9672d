//! Collision counts of the sparse store across a range of table sizes.
//!
//! The store never loses a value, so the order in which a memoized solve
//! inserts sub-problems does not depend on the table size. One solve records
//! that order and it is replayed into a fresh store per table size.

use super::{
    space_efficient::{mf_knapsack, Memo},
    store::{MemoKey, SparseStore},
};
use ahash::AHashMap;
use anyhow::Result;
use kp_challenges::knapsack::Instance;
use kp_structs::core::{CollisionSample, SweepReport};
use log::debug;

/// Unbounded memo that remembers insertion order.
#[derive(Debug, Default)]
pub struct RecordingMemo {
    values: AHashMap<MemoKey, u64>,
    order: Vec<(MemoKey, u64)>,
}

impl RecordingMemo {
    pub fn insertions(&self) -> &[(MemoKey, u64)] {
        &self.order
    }
}

impl Memo for RecordingMemo {
    fn lookup(&self, i: usize, j: u32) -> Option<u64> {
        self.values.get(&(i, j)).copied()
    }

    fn record(&mut self, i: usize, j: u32, value: u64) {
        self.values.insert((i, j), value);
        self.order.push(((i, j), value));
    }
}

/// `step, 2 * step, ...` below `n * capacity`, with
/// `step = max(1, n * capacity / granularity)`.
pub fn sweep_table_sizes(num_items: usize, capacity: u32, granularity: usize) -> Vec<usize> {
    let total = num_items * capacity as usize;
    let step = (total / granularity.max(1)).max(1);
    (step..total).step_by(step).collect()
}

pub fn collision_sweep(instance: &Instance, granularity: usize) -> Result<SweepReport> {
    let num_items = instance.num_items();
    let capacity = instance.capacity();

    let mut recording = RecordingMemo::default();
    mf_knapsack(instance, &mut recording, num_items, capacity);

    let mut samples = Vec::new();
    for table_size in sweep_table_sizes(num_items, capacity, granularity) {
        let mut store = SparseStore::new(num_items, capacity, table_size)?;
        for &((i, j), value) in recording.insertions() {
            store.insert(i, j, value);
        }
        debug!(
            "Size: {}, Collisions: {}, Overflows: {}",
            table_size,
            store.collisions(),
            store.overflows()
        );
        samples.push(CollisionSample {
            table_size,
            collisions: store.collisions(),
        });
    }

    Ok(SweepReport {
        num_items,
        capacity,
        samples,
    })
}

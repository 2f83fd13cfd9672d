//! Memory-function knapsack: top-down recursion that only visits the
//! sub-problems reachable from `(n, capacity)`, memoized in a
//! [`SparseStore`].

use super::{
    reconstruct::{reconstruct, BestValue},
    store::SparseStore,
    Solution,
};
use anyhow::Result;
use kp_challenges::knapsack::Instance;
use kp_structs::core::StoreStats;
use log::debug;

/// Cache consulted by [`mf_knapsack`].
pub trait Memo {
    fn lookup(&self, i: usize, j: u32) -> Option<u64>;
    fn record(&mut self, i: usize, j: u32, value: u64);
}

impl Memo for SparseStore {
    fn lookup(&self, i: usize, j: u32) -> Option<u64> {
        self.get(i, j)
    }

    fn record(&mut self, i: usize, j: u32, value: u64) {
        self.insert(i, j, value)
    }
}

/// Best value using items `1..=i` with residual capacity `j`.
///
/// `i == 0` is answered without touching the memo. Recursion depth is at
/// most `i`.
pub fn mf_knapsack<M: Memo>(instance: &Instance, memo: &mut M, i: usize, j: u32) -> u64 {
    if i == 0 {
        return 0;
    }
    if let Some(value) = memo.lookup(i, j) {
        return value;
    }
    let weight = instance.weight(i);
    let value = if j < weight {
        mf_knapsack(instance, memo, i - 1, j)
    } else {
        let without = mf_knapsack(instance, memo, i - 1, j);
        let with = instance.value(i) as u64 + mf_knapsack(instance, memo, i - 1, j - weight);
        without.max(with)
    };
    memo.record(i, j, value);
    value
}

/// Reads sub-problem values back out of a populated memo. A miss is solved
/// (and memoized) on demand.
pub struct MemoizedValues<'a, M: Memo> {
    pub instance: &'a Instance,
    pub memo: &'a mut M,
}

impl<'a, M: Memo> BestValue for MemoizedValues<'a, M> {
    fn best(&mut self, i: usize, j: u32) -> u64 {
        mf_knapsack(self.instance, self.memo, i, j)
    }
}

pub fn solve_challenge(instance: &Instance, table_size: usize) -> Result<(Solution, StoreStats)> {
    let num_items = instance.num_items();
    let capacity = instance.capacity();
    let mut store = SparseStore::new(num_items, capacity, table_size)?;

    let value = mf_knapsack(instance, &mut store, num_items, capacity);
    let items = reconstruct(
        instance,
        &mut MemoizedValues {
            instance,
            memo: &mut store,
        },
    );

    debug!(
        "sparse store: size={} occupied={} insertions={} collisions={} overflows={} probes={}",
        store.size(),
        store.occupied_slots(),
        store.insertions(),
        store.collisions(),
        store.overflows(),
        store.probes()
    );
    Ok((Solution { value, items }, store.stats()))
}

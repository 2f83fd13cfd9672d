pub mod greedy_heap;
pub mod greedy_sort;
pub mod heap;
pub mod reconstruct;
pub mod space_efficient;
pub mod store;
pub mod sweep;
pub mod traditional;

use anyhow::Result;
use kp_challenges::knapsack::Instance;
use kp_structs::{
    config::SolverConfig,
    core::{Approach, SolveReport},
};
use log::info;
use std::time::Instant;

/// Total value and ascending 1-based indices of the chosen items.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Solution {
    pub value: u64,
    pub items: Vec<usize>,
}

/// Running selection for the ratio-greedy approaches. An item is taken only
/// while the running weight stays strictly below capacity.
pub(crate) struct GreedyFill<'a> {
    instance: &'a Instance,
    weight: u64,
    solution: Solution,
}

impl<'a> GreedyFill<'a> {
    pub(crate) fn new(instance: &'a Instance) -> Self {
        Self {
            instance,
            weight: 0,
            solution: Solution::default(),
        }
    }

    /// Takes item `index` if it keeps the weight below capacity.
    pub(crate) fn try_take(&mut self, index: usize) -> bool {
        let weight = self.instance.weight(index) as u64;
        if self.weight + weight < self.instance.capacity() as u64 {
            self.weight += weight;
            self.solution.value += self.instance.value(index) as u64;
            self.solution.items.push(index);
            true
        } else {
            false
        }
    }

    pub(crate) fn finish(mut self) -> Solution {
        self.solution.items.sort();
        self.solution
    }
}

/// Runs one approach on `instance` and times it, reconstruction included.
pub fn solve(instance: &Instance, approach: Approach, config: &SolverConfig) -> Result<SolveReport> {
    let start = Instant::now();
    let (solution, store) = match approach {
        Approach::Traditional => (traditional::solve_challenge(instance)?, None),
        Approach::SpaceEfficient => {
            let table_size = config.table_size(instance.num_items(), instance.capacity());
            let (solution, stats) = space_efficient::solve_challenge(instance, table_size)?;
            (solution, Some(stats))
        }
        Approach::GreedySort => (greedy_sort::solve_challenge(instance)?, None),
        Approach::GreedyHeap => (greedy_heap::solve_challenge(instance)?, None),
    };
    let elapsed_micros = start.elapsed().as_micros() as u64;

    info!(
        "{}: value {} with {} items in {} microseconds",
        approach,
        solution.value,
        solution.items.len(),
        elapsed_micros
    );
    Ok(SolveReport {
        approach,
        optimal_value: solution.value,
        selected: solution.items,
        elapsed_micros,
        store,
    })
}

/// Runs every approach listed in `config`, in order.
pub fn solve_all(instance: &Instance, config: &SolverConfig) -> Result<Vec<SolveReport>> {
    config
        .approaches
        .iter()
        .map(|&approach| solve(instance, approach, config))
        .collect()
}

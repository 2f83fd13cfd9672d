use crate::serializable_struct_with_getters;
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Approach {
    /// Bottom-up dynamic programming over the full `(n+1) x (capacity+1)` table.
    Traditional,
    /// Top-down memoized recursion over a sparse hash store.
    SpaceEfficient,
    /// Greedy by value/weight ratio, ordered by sorting.
    GreedySort,
    /// Greedy by value/weight ratio, ordered by a binary max-heap.
    GreedyHeap,
}

impl Approach {
    pub const ALL: [Approach; 4] = [
        Approach::Traditional,
        Approach::SpaceEfficient,
        Approach::GreedySort,
        Approach::GreedyHeap,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Approach::Traditional => "traditional",
            Approach::SpaceEfficient => "space_efficient",
            Approach::GreedySort => "greedy_sort",
            Approach::GreedyHeap => "greedy_heap",
        }
    }

    pub fn is_exact(&self) -> bool {
        matches!(self, Approach::Traditional | Approach::SpaceEfficient)
    }
}

impl fmt::Display for Approach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Approach {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Approach::ALL
            .iter()
            .find(|a| a.as_str() == s)
            .copied()
            .ok_or_else(|| anyhow!("Unknown approach '{}'", s))
    }
}

serializable_struct_with_getters! {
    StoreStats {
        table_size: usize,
        insertions: u64,
        collisions: u64,
        overflows: u64,
    }
}

serializable_struct_with_getters! {
    SolveReport {
        approach: Approach,
        optimal_value: u64,
        selected: Vec<usize>,
        elapsed_micros: u64,
        store: Option<StoreStats>,
    }
}

serializable_struct_with_getters! {
    CollisionSample {
        table_size: usize,
        collisions: u64,
    }
}

serializable_struct_with_getters! {
    SweepReport {
        num_items: usize,
        capacity: u32,
        samples: Vec<CollisionSample>,
    }
}

impl SweepReport {
    /// One collision count per line, in sweep order.
    pub fn to_collision_lines(&self) -> String {
        let mut out = String::new();
        for sample in &self.samples {
            out.push_str(&sample.collisions.to_string());
            out.push('\n');
        }
        out
    }
}

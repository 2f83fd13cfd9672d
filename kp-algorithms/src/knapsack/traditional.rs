use super::{
    reconstruct::{reconstruct, BestValue},
    Solution,
};
use anyhow::Result;
use kp_challenges::knapsack::Instance;

/// Bottom-up table `F[i][j]` stored row-major in one buffer of
/// `(n + 1) * (capacity + 1)` cells. Row 0 stays zero; column 0 only picks
/// up weightless items.
#[derive(Debug, Clone)]
pub struct DpTable {
    rows: usize,
    width: usize,
    cells: Vec<u64>,
}

impl DpTable {
    pub fn build(instance: &Instance) -> Self {
        let rows = instance.num_items() + 1;
        let width = instance.capacity() as usize + 1;
        let mut cells = vec![0u64; rows * width];

        for i in 1..rows {
            let weight = instance.weight(i) as usize;
            let value = instance.value(i) as u64;
            let (done, row) = cells.split_at_mut(i * width);
            let prev = &done[(i - 1) * width..];
            let row = &mut row[..width];
            for j in 0..width {
                row[j] = if j < weight {
                    prev[j]
                } else {
                    prev[j].max(value + prev[j - weight])
                };
            }
        }

        DpTable { rows, width, cells }
    }

    pub fn get(&self, i: usize, j: u32) -> u64 {
        self.cells[i * self.width + j as usize]
    }

    pub fn optimal_value(&self) -> u64 {
        self.cells[self.rows * self.width - 1]
    }
}

impl BestValue for DpTable {
    fn best(&mut self, i: usize, j: u32) -> u64 {
        self.get(i, j)
    }
}

pub fn solve_challenge(instance: &Instance) -> Result<Solution> {
    let mut table = DpTable::build(instance);
    let items = reconstruct(instance, &mut table);
    Ok(Solution {
        value: table.optimal_value(),
        items,
    })
}

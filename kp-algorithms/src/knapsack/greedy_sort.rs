use super::{heap::ratio, GreedyFill, Solution};
use anyhow::Result;
use kp_challenges::knapsack::Instance;

pub fn solve_challenge(instance: &Instance) -> Result<Solution> {
    // Sort by ratio in descending order, lower index first on ties
    let mut ratios: Vec<(usize, f64)> = instance
        .items()
        .map(|item| (item.index, ratio(item.value, item.weight)))
        .collect();
    ratios.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));

    let mut fill = GreedyFill::new(instance);
    for (index, _) in ratios {
        if !fill.try_take(index) {
            break;
        }
    }
    Ok(fill.finish())
}

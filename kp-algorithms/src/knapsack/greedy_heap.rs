use super::{
    heap::{ratio, RatioHeap, RatioPair},
    GreedyFill, Solution,
};
use anyhow::Result;
use kp_challenges::knapsack::Instance;

pub fn solve_challenge(instance: &Instance) -> Result<Solution> {
    let pairs: Vec<RatioPair> = instance
        .items()
        .map(|item| RatioPair::new(ratio(item.value, item.weight), item.index))
        .collect();
    let mut heap = RatioHeap::build(pairs);

    let mut fill = GreedyFill::new(instance);
    while !heap.is_empty() {
        let best = heap.extract_max()?;
        if !fill.try_take(best.index) {
            break;
        }
    }
    Ok(fill.finish())
}

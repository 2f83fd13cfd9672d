use kp_challenges::knapsack::Instance;

/// Source of optimal sub-problem values `best(i, j)`; `best(0, j)` is 0.
pub trait BestValue {
    fn best(&mut self, i: usize, j: u32) -> u64;
}

/// Walks items from `n` down to 1, keeping item `i` only when it fits and
/// strictly improves on leaving it out. Ties therefore exclude the item.
/// Once the residual capacity hits 0 only weightless items can still be
/// taken, so the walk keeps going until `i` reaches 0.
/// Returns the selected indices in ascending order.
pub fn reconstruct<B: BestValue>(instance: &Instance, source: &mut B) -> Vec<usize> {
    let mut selected = Vec::new();
    let mut i = instance.num_items();
    let mut j = instance.capacity();
    while i > 0 {
        let weight = instance.weight(i);
        if weight <= j
            && instance.value(i) as u64 + source.best(i - 1, j - weight) > source.best(i - 1, j)
        {
            selected.push(i);
            j -= weight;
        }
        i -= 1;
    }
    selected.reverse();
    selected
}

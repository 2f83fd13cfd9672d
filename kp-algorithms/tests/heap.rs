use kp_algorithms::knapsack::heap::{ratio, HeapError, RatioHeap, RatioPair};
use rand::{rngs::SmallRng, Rng, SeedableRng};

fn pairs(ratios: &[f64]) -> Vec<RatioPair> {
    ratios
        .iter()
        .enumerate()
        .map(|(k, &r)| RatioPair::new(r, k + 1))
        .collect()
}

#[test]
fn test_ratio() {
    assert_eq!(ratio(60, 10), 6.0);
    assert_eq!(ratio(1, 4), 0.25);
    assert_eq!(ratio(0, 7), 0.0);
    assert_eq!(ratio(5, 0), f64::INFINITY);
    assert_eq!(ratio(0, 0), 0.0);
}

#[test]
fn test_build_and_extract() {
    let mut heap = RatioHeap::build(pairs(&[4.0, 6.0, 5.0]));
    assert!(heap.is_valid());
    assert_eq!(heap.len(), 3);
    assert_eq!(heap.peek(), Some(&RatioPair::new(6.0, 2)));

    assert_eq!(heap.extract_max().unwrap(), RatioPair::new(6.0, 2));
    assert_eq!(heap.extract_max().unwrap(), RatioPair::new(5.0, 3));
    assert_eq!(heap.extract_max().unwrap(), RatioPair::new(4.0, 1));
    assert!(heap.is_empty());
    assert_eq!(heap.extract_max(), Err(HeapError::Empty));
}

#[test]
fn test_empty_heap() {
    let mut heap = RatioHeap::build(Vec::new());
    assert!(heap.is_empty());
    assert!(heap.is_valid());
    assert_eq!(heap.peek(), None);
    assert_eq!(heap.extract_max(), Err(HeapError::Empty));
}

#[test]
fn test_ties_extract_by_lower_index() {
    let mut heap = RatioHeap::build(pairs(&[2.0, 3.0, 2.0, 3.0, 2.0]));
    let order: Vec<usize> = (0..5).map(|_| heap.extract_max().unwrap().index).collect();
    assert_eq!(order, vec![2, 4, 1, 3, 5]);
}

#[test]
fn test_random_sequences_drain_in_order() {
    let mut rng = SmallRng::seed_from_u64(42);
    for _ in 0..200 {
        let len = rng.gen_range(0..64);
        let ratios: Vec<f64> = (0..len)
            .map(|_| ratio(rng.gen_range(0..100), rng.gen_range(0..20)))
            .collect();
        let mut heap = RatioHeap::build(pairs(&ratios));
        assert!(heap.is_valid());

        let mut previous = f64::INFINITY;
        let mut seen = vec![false; len];
        for _ in 0..len {
            let top = heap.extract_max().unwrap();
            assert!(top.ratio <= previous);
            assert!(heap.is_valid());
            previous = top.ratio;
            seen[top.index - 1] = true;
        }
        assert!(seen.into_iter().all(|s| s));
        assert!(heap.is_empty());
        assert_eq!(heap.extract_max(), Err(HeapError::Empty));
    }
}

#[test]
fn test_same_input_same_order() {
    let ratios = [1.5, 1.5, 0.5, 9.0, 1.5, 0.0];
    let drain = || {
        let mut heap = RatioHeap::build(pairs(&ratios));
        (0..ratios.len())
            .map(|_| heap.extract_max().unwrap().index)
            .collect::<Vec<_>>()
    };
    assert_eq!(drain(), drain());
    assert_eq!(drain(), vec![4, 1, 2, 5, 3, 6]);
}

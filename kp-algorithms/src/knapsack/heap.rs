//! Array-backed binary max-heap over value/weight ratios.

use std::cmp::Ordering;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HeapError {
    #[error("extract_max called on an empty heap")]
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioPair {
    pub ratio: f64,
    pub index: usize,
}

impl RatioPair {
    pub fn new(ratio: f64, index: usize) -> Self {
        Self { ratio, index }
    }

    /// Higher ratio first; equal ratios favour the lower item index.
    fn outranks(&self, other: &RatioPair) -> bool {
        match self.ratio.total_cmp(&other.ratio) {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal => self.index < other.index,
        }
    }
}

/// Value per unit of weight. A weightless item is either free value
/// (`+inf`) or worthless (`0`), never NaN.
pub fn ratio(value: u32, weight: u32) -> f64 {
    match (value, weight) {
        (0, 0) => 0.0,
        (_, 0) => f64::INFINITY,
        (v, w) => v as f64 / w as f64,
    }
}

fn left(i: usize) -> usize {
    2 * i + 1
}
fn right(i: usize) -> usize {
    2 * i + 2
}
fn parent(i: usize) -> usize {
    (i - 1) / 2
}

#[derive(Debug, Clone, Default)]
pub struct RatioHeap {
    nodes: Vec<RatioPair>,
}

impl RatioHeap {
    /// Heapifies `pairs` in place, bottom-up.
    pub fn build(pairs: Vec<RatioPair>) -> Self {
        let mut heap = RatioHeap { nodes: pairs };
        for i in (0..heap.nodes.len() / 2).rev() {
            heap.sift_down(i);
        }
        heap
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn peek(&self) -> Option<&RatioPair> {
        self.nodes.first()
    }

    pub fn extract_max(&mut self) -> Result<RatioPair, HeapError> {
        if self.nodes.is_empty() {
            return Err(HeapError::Empty);
        }
        // swap_remove moves the last leaf into the root
        let top = self.nodes.swap_remove(0);
        if !self.nodes.is_empty() {
            self.sift_down(0);
        }
        Ok(top)
    }

    /// Whether every non-root node is outranked by (or equal to) its parent.
    pub fn is_valid(&self) -> bool {
        (1..self.nodes.len()).all(|i| !self.nodes[i].outranks(&self.nodes[parent(i)]))
    }

    fn sift_down(&mut self, mut i: usize) {
        let size = self.nodes.len();
        loop {
            let mut largest = i;
            for child in [left(i), right(i)] {
                if child < size && self.nodes[child].outranks(&self.nodes[largest]) {
                    largest = child;
                }
            }
            if largest == i {
                break;
            }
            self.nodes.swap(i, largest);
            i = largest;
        }
    }
}

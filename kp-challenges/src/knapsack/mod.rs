mod error;
pub use error::InstanceError;

use anyhow::{anyhow, Result};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub num_items: usize,
}

/// An item as seen by the solvers. `index` runs from 1 to `n`; 0 is the
/// "no item" base case and never names a real item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    pub index: usize,
    pub value: u32,
    pub weight: u32,
}

/// Unvalidated input as supplied by an item source.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RawInstance {
    pub values: Vec<i64>,
    pub weights: Vec<i64>,
    pub capacity: i64,
}

/// A validated, immutable knapsack instance.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(try_from = "RawInstance", into = "RawInstance")]
pub struct Instance {
    values: Vec<u32>,
    weights: Vec<u32>,
    capacity: u32,
}

impl TryFrom<RawInstance> for Instance {
    type Error = InstanceError;

    fn try_from(raw: RawInstance) -> Result<Self, Self::Error> {
        Instance::new(&raw.values, &raw.weights, raw.capacity)
    }
}

impl From<Instance> for RawInstance {
    fn from(instance: Instance) -> Self {
        RawInstance {
            values: instance.values.iter().map(|&v| v as i64).collect(),
            weights: instance.weights.iter().map(|&w| w as i64).collect(),
            capacity: instance.capacity as i64,
        }
    }
}

fn to_u32(what: &'static str, value: i64) -> Result<u32, InstanceError> {
    u32::try_from(value).map_err(|_| InstanceError::TooLarge { what, value })
}

impl Instance {
    /// `values[k]` and `weights[k]` describe item `k + 1`.
    pub fn new(values: &[i64], weights: &[i64], capacity: i64) -> Result<Self, InstanceError> {
        if values.len() != weights.len() {
            return Err(InstanceError::LengthMismatch {
                values: values.len(),
                weights: weights.len(),
            });
        }
        if capacity < 0 {
            return Err(InstanceError::NegativeCapacity(capacity));
        }
        let mut checked_values = Vec::with_capacity(values.len());
        let mut checked_weights = Vec::with_capacity(weights.len());
        for (k, (&value, &weight)) in values.iter().zip(weights).enumerate() {
            let index = k + 1;
            if value < 0 {
                return Err(InstanceError::NegativeValue { index, value });
            }
            if weight < 0 {
                return Err(InstanceError::NegativeWeight { index, weight });
            }
            checked_values.push(to_u32("value", value)?);
            checked_weights.push(to_u32("weight", weight)?);
        }
        Ok(Instance {
            values: checked_values,
            weights: checked_weights,
            capacity: to_u32("capacity", capacity)?,
        })
    }

    pub fn from_items(items: &[(u32, u32)], capacity: u32) -> Self {
        Instance {
            values: items.iter().map(|&(v, _)| v).collect(),
            weights: items.iter().map(|&(_, w)| w).collect(),
            capacity,
        }
    }

    pub fn generate_instance(seed: &[u8; 32], track: &Track) -> Result<Self> {
        let mut rng = SmallRng::from_seed(seed.clone());

        // Generate weights w_i in the range [1, 50]
        let weights: Vec<u32> = (0..track.num_items)
            .map(|_| rng.gen_range(1..=50))
            .collect();

        // Generate values v_i in the range [1, 100]
        let values: Vec<u32> = (0..track.num_items)
            .map(|_| rng.gen_range(1..=100))
            .collect();

        let capacity: u32 = weights.iter().sum::<u32>() / 2;

        Ok(Instance {
            values,
            weights,
            capacity,
        })
    }

    pub fn num_items(&self) -> usize {
        self.values.len()
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Value of item `index` (1-based).
    pub fn value(&self, index: usize) -> u32 {
        self.values[index - 1]
    }

    /// Weight of item `index` (1-based).
    pub fn weight(&self, index: usize) -> u32 {
        self.weights[index - 1]
    }

    pub fn item(&self, index: usize) -> Item {
        Item {
            index,
            value: self.value(index),
            weight: self.weight(index),
        }
    }

    pub fn items(&self) -> impl Iterator<Item = Item> + '_ {
        (1..=self.num_items()).map(move |index| self.item(index))
    }

    /// Checks a selection of 1-based item indices and returns its total value.
    pub fn evaluate(&self, selected: &[usize]) -> Result<u64> {
        let selected_items: HashSet<usize> = selected.iter().cloned().collect();
        if selected_items.len() != selected.len() {
            return Err(anyhow!("Duplicate items selected."));
        }

        let total_weight = selected_items
            .iter()
            .map(|&item| {
                if item == 0 || item > self.num_items() {
                    return Err(anyhow!("Item ({}) is out of bounds", item));
                }
                Ok(self.weight(item) as u64)
            })
            .collect::<Result<Vec<_>, _>>()?
            .iter()
            .sum::<u64>();

        if total_weight > self.capacity as u64 {
            return Err(anyhow!(
                "Total weight ({}) exceeded capacity ({})",
                total_weight,
                self.capacity
            ));
        }

        Ok(selected_items
            .iter()
            .map(|&item| self.value(item) as u64)
            .sum())
    }

    pub fn total_weight(&self, selected: &[usize]) -> u64 {
        selected.iter().map(|&item| self.weight(item) as u64).sum()
    }
}

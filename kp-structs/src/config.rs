use crate::core::Approach;
use anyhow::{anyhow, Result};
use kp_utils::dejsonify;
use serde::{Deserialize, Serialize};
use std::fs;

pub const DEFAULT_TABLE_SIZE_DIVISOR: usize = 10;
pub const DEFAULT_SWEEP_GRANULARITY: usize = 1000;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SolverConfig {
    /// Sparse store size is `n * capacity / table_size_divisor` (at least 1).
    pub table_size_divisor: usize,
    /// Number of table sizes visited by a collision sweep.
    pub sweep_granularity: usize,
    pub approaches: Vec<Approach>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            table_size_divisor: DEFAULT_TABLE_SIZE_DIVISOR,
            sweep_granularity: DEFAULT_SWEEP_GRANULARITY,
            approaches: Approach::ALL.to_vec(),
        }
    }
}

impl SolverConfig {
    /// Accepts either a json string or a path ending in `.json`.
    pub fn load(config: &str) -> Result<Self> {
        let config = if config.ends_with(".json") {
            fs::read_to_string(config)
                .map_err(|e| anyhow!("Failed to read config file {}: {}", config, e))?
        } else {
            config.to_string()
        };
        let config = dejsonify::<SolverConfig>(&config)
            .map_err(|e| anyhow!("Failed to parse config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.table_size_divisor == 0 {
            return Err(anyhow!("table_size_divisor must be positive"));
        }
        if self.sweep_granularity == 0 {
            return Err(anyhow!("sweep_granularity must be positive"));
        }
        Ok(())
    }

    pub fn table_size(&self, num_items: usize, capacity: u32) -> usize {
        (num_items * capacity as usize / self.table_size_divisor).max(1)
    }
}

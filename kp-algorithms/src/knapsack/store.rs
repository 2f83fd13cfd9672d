//! Fixed-size open-addressing table memoizing `(item, residual capacity)`
//! sub-problem values.
//!
//! The slot array never grows. Once every slot is taken, new keys go to a
//! spill area and are counted as overflows, so no computed value is ever
//! lost. Keys that own a slot are indexed by key, so lookups never walk the
//! probe sequence.

use ahash::AHashMap;
use kp_structs::core::StoreStats;
use thiserror::Error;

/// `(i, j)`: best value using items `1..=i` with residual capacity `j`.
pub type MemoKey = (usize, u32);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("table size must be positive (got {0})")]
    SizeInvalid(usize),
}

/// Slot visited on the given probe attempt (linear probing).
pub fn probe(hash: u128, table_size: usize, attempt: usize) -> usize {
    ((hash + attempt as u128) % table_size as u128) as usize
}

/// Row-major combination of a key; distinct keys never share a hash before
/// the modulo reduction.
pub fn combine(key: MemoKey, capacity: u32) -> u128 {
    key.0 as u128 * (capacity as u128 + 1) + key.1 as u128
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    key: MemoKey,
    value: u64,
}

#[derive(Debug, Clone)]
pub struct SparseStore {
    num_items: usize,
    capacity: u32,
    slots: Vec<Option<Entry>>,
    resident: AHashMap<MemoKey, usize>,
    spill: AHashMap<MemoKey, u64>,
    insertions: u64,
    collisions: u64,
    overflows: u64,
    probes: u64,
}

impl SparseStore {
    pub fn new(num_items: usize, capacity: u32, table_size: usize) -> Result<Self, StoreError> {
        if table_size == 0 {
            return Err(StoreError::SizeInvalid(table_size));
        }
        Ok(SparseStore {
            num_items,
            capacity,
            slots: vec![None; table_size],
            resident: AHashMap::new(),
            spill: AHashMap::new(),
            insertions: 0,
            collisions: 0,
            overflows: 0,
            probes: 0,
        })
    }

    fn hash(&self, key: MemoKey) -> u128 {
        debug_assert!(key.0 <= self.num_items && key.1 <= self.capacity);
        combine(key, self.capacity)
    }

    /// Constant time whether the key sits in a slot, in the spill area or
    /// nowhere.
    pub fn get(&self, i: usize, j: u32) -> Option<u64> {
        let key = (i, j);
        match self.resident.get(&key) {
            Some(&slot) => self.slots[slot].map(|entry| entry.value),
            None => self.spill.get(&key).copied(),
        }
    }

    /// Stores `value` under `(i, j)`, overwriting any previous value for the
    /// same key. A home slot held by another key counts as one collision.
    /// Only a new key walks the probe sequence; once every slot is taken new
    /// keys go straight to the spill area.
    pub fn insert(&mut self, i: usize, j: u32, value: u64) {
        let key = (i, j);
        let hash = self.hash(key);
        let size = self.slots.len();
        self.insertions += 1;

        if matches!(self.slots[probe(hash, size, 0)], Some(entry) if entry.key != key) {
            self.collisions += 1;
        }

        if let Some(&slot) = self.resident.get(&key) {
            self.slots[slot] = Some(Entry { key, value });
            return;
        }
        if self.resident.len() < size && !self.spill.contains_key(&key) {
            for attempt in 0..size {
                let slot = probe(hash, size, attempt);
                self.probes += 1;
                if self.slots[slot].is_none() {
                    self.slots[slot] = Some(Entry { key, value });
                    self.resident.insert(key, slot);
                    return;
                }
            }
        }
        if self.spill.insert(key, value).is_none() {
            self.overflows += 1;
        }
    }

    pub fn size(&self) -> usize {
        self.slots.len()
    }

    /// Number of stored keys, spilled ones included.
    pub fn len(&self) -> usize {
        self.resident.len() + self.spill.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn occupied_slots(&self) -> usize {
        self.resident.len()
    }

    pub fn insertions(&self) -> u64 {
        self.insertions
    }

    pub fn collisions(&self) -> u64 {
        self.collisions
    }

    pub fn overflows(&self) -> u64 {
        self.overflows
    }

    /// Slots inspected while placing new keys.
    pub fn probes(&self) -> u64 {
        self.probes
    }

    /// Occupied slots in slot order as `(slot, key, value)`; spilled keys are
    /// not listed.
    pub fn entries(&self) -> impl Iterator<Item = (usize, MemoKey, u64)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(slot, entry)| entry.map(|e| (slot, e.key, e.value)))
    }

    pub fn stats(&self) -> StoreStats {
        StoreStats {
            table_size: self.size(),
            insertions: self.insertions,
            collisions: self.collisions,
            overflows: self.overflows,
        }
    }
}

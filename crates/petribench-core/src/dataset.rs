//! Bounded in-memory datasets that give the workload its footprint.

use crate::constants::{ENTRY_COUNT, ENTRY_VALUES_LEN, LABEL_FACTOR, NESTED_COUNT, NESTED_LEN};

/// One record of the `records` variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataEntry {
    /// Position of the entry, `0..ENTRY_COUNT`.
    pub id: usize,
    /// Decimal rendering of `id * 42`.
    pub label: String,
    /// `0..ENTRY_VALUES_LEN`.
    pub values: Vec<usize>,
}

impl DataEntry {
    #[must_use]
    pub fn new(id: usize) -> Self {
        Self {
            id,
            label: (id * LABEL_FACTOR).to_string(),
            values: (0..ENTRY_VALUES_LEN).collect(),
        }
    }
}

/// Build the [`ENTRY_COUNT`] records of the `records` variant.
#[must_use]
pub fn build_records() -> Vec<DataEntry> {
    let mut records = Vec::with_capacity(ENTRY_COUNT);
    records.extend((0..ENTRY_COUNT).map(DataEntry::new));
    records
}

/// Build the [`ENTRY_COUNT`] flat labels of the `nested` variant: `Entry{i}:{i*42}`.
#[must_use]
pub fn build_labels() -> Vec<String> {
    (0..ENTRY_COUNT)
        .map(|i| format!("Entry{i}:{}", i * LABEL_FACTOR))
        .collect()
}

/// Build [`NESTED_COUNT`] lists where `nested[i][j] == i * j`.
#[must_use]
pub fn build_nested() -> Vec<Vec<usize>> {
    (0..NESTED_COUNT)
        .map(|i| (0..NESTED_LEN).map(|j| i * j).collect())
        .collect()
}

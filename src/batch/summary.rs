//! End-of-run counts per status.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use log::info;
use strum::IntoEnumIterator;

use super::record::{ExistenceRecord, Presence, RecordStatus, ResultRecord};

/// A status enum whose variants are counted in a summary.
pub trait StatusLabel: Copy + Eq + Hash + IntoEnumIterator + fmt::Display {}

impl StatusLabel for RecordStatus {}
impl StatusLabel for Presence {}

/// Number of records per status, with every status present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusSummary<S: StatusLabel> {
    total: usize,
    counts: HashMap<S, usize>,
}

/// Counts for a full run.
pub type BatchSummary = StatusSummary<RecordStatus>;
/// Counts for an existence check run.
pub type ExistenceSummary = StatusSummary<Presence>;

impl<S: StatusLabel> StatusSummary<S> {
    pub fn from_statuses(statuses: impl IntoIterator<Item = S>) -> Self {
        let mut counts: HashMap<S, usize> = S::iter().map(|s| (s, 0)).collect();
        let mut total = 0;
        for status in statuses {
            *counts.entry(status).or_insert(0) += 1;
            total += 1;
        }
        Self { total, counts }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn count(&self, status: S) -> usize {
        self.counts.get(&status).copied().unwrap_or(0)
    }

    /// Logs one line per status with a non-zero count.
    pub fn log_summary(&self) {
        info!("Records: {} total", self.total);
        for status in S::iter() {
            let count = self.count(status);
            if count > 0 {
                info!("   {}: {}", status, count);
            }
        }
    }
}

impl<S: StatusLabel> fmt::Display for StatusSummary<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} total", self.total)?;
        for status in S::iter() {
            write!(f, ", {}: {}", status, self.count(status))?;
        }
        Ok(())
    }
}

impl BatchSummary {
    pub fn from_records(records: &[ResultRecord]) -> Self {
        Self::from_statuses(records.iter().map(|r| r.status))
    }
}

impl ExistenceSummary {
    pub fn from_existence(records: &[ExistenceRecord]) -> Self {
        Self::from_statuses(records.iter().map(|r| r.found))
    }
}

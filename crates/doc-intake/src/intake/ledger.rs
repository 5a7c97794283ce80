use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// The validator's refusal of one submitted file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectionRecord {
    pub field_id: String,
    pub filename: String,
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_label: Option<String>,
}

impl RejectionRecord {
    pub fn new(
        field_id: impl Into<String>,
        filename: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            field_id: field_id.into(),
            filename: filename.into(),
            reason: reason.into(),
            field_label: None,
        }
    }

    fn matches(&self, field_id: &str, filename: &str) -> bool {
        self.field_id == field_id && self.filename == filename
    }
}

/// Rejections reported by the last submission, at most one per (field, filename).
#[derive(Debug, Clone, Default)]
pub struct RejectionLedger {
    records: Vec<RejectionRecord>,
}

impl RejectionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the ledger with the latest submission's rejections.
    ///
    /// Files absent from `rejected` are considered accepted.
    pub fn apply_outcome(&mut self, rejected: Vec<RejectionRecord>) {
        let mut seen = HashSet::new();
        self.records = rejected
            .into_iter()
            .filter(|record| seen.insert((record.field_id.clone(), record.filename.clone())))
            .collect();
    }

    /// Drop the record for a file the user just swapped out. Returns how many were removed.
    pub fn clear_for_replacement(&mut self, field_id: &str, filename: &str) -> usize {
        let before = self.records.len();
        self.records
            .retain(|record| !record.matches(field_id, filename));
        before - self.records.len()
    }

    pub fn has_rejections_for(&self, field_id: &str) -> bool {
        self.records.iter().any(|record| record.field_id == field_id)
    }

    pub fn find_for(&self, field_id: &str, filename: &str) -> Option<&RejectionRecord> {
        self.records
            .iter()
            .find(|record| record.matches(field_id, filename))
    }

    pub fn for_field<'a>(&'a self, field_id: &'a str) -> impl Iterator<Item = &'a RejectionRecord> {
        self.records
            .iter()
            .filter(move |record| record.field_id == field_id)
    }

    pub fn records(&self) -> &[RejectionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}

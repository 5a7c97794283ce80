use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::store::AttachmentStore;
use crate::catalog::ServiceDefinition;

/// Free-text values keyed by extra field id.
pub type ExtraValues = BTreeMap<String, String>;

/// Per-field summary sent with every submission.
pub type FieldStatusSnapshot = BTreeMap<String, FieldStatus>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldStatus {
    pub label: String,
    #[serde(rename = "uploadedCount")]
    pub uploaded_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl FieldStatus {
    pub fn has_uploads(&self) -> bool {
        self.uploaded_count > 0
    }
}

/// Derive the status of every field and extra field of `service`.
///
/// Extra fields never count uploads; their value defaults to an empty string.
pub fn project_field_status(
    service: &ServiceDefinition,
    store: &AttachmentStore,
    extras: &ExtraValues,
) -> FieldStatusSnapshot {
    let files = service.fields.iter().map(|field| {
        (
            field.id.clone(),
            FieldStatus {
                label: field.label.clone(),
                uploaded_count: store.len(&field.id),
                value: None,
            },
        )
    });

    let extra_fields = service.extra_fields.iter().map(|field| {
        (
            field.id.clone(),
            FieldStatus {
                label: field.label.clone(),
                uploaded_count: 0,
                value: Some(extras.get(&field.id).cloned().unwrap_or_default()),
            },
        )
    });

    files.chain(extra_fields).collect()
}

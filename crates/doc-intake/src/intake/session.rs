use std::sync::Arc;

use tracing::{debug, info};

use super::files::AttachedFile;
use super::ledger::{RejectionLedger, RejectionRecord};
use super::status::{project_field_status, ExtraValues, FieldStatusSnapshot};
use super::store::{AttachmentError, AttachmentStore};
use super::submission::SubmissionState;
use crate::catalog::{ServiceCatalog, ServiceDefinition};

/// One in-progress intake form.
///
/// Owns the attachment store, the rejection ledger, and the extra-field
/// values for the selected service. Everything is discarded when the service
/// changes or a submission is fully accepted.
#[derive(Debug)]
pub struct IntakeSession {
    pub(super) catalog: Arc<ServiceCatalog>,
    pub(super) service_id: Option<String>,
    pub(super) name: String,
    pub(super) phone: String,
    pub(super) attachments: AttachmentStore,
    pub(super) rejections: RejectionLedger,
    pub(super) extras: ExtraValues,
    pub(super) state: SubmissionState,
}

impl IntakeSession {
    pub fn new(catalog: Arc<ServiceCatalog>) -> Self {
        Self {
            catalog,
            service_id: None,
            name: String::new(),
            phone: String::new(),
            attachments: AttachmentStore::new(),
            rejections: RejectionLedger::new(),
            extras: ExtraValues::new(),
            state: SubmissionState::Idle,
        }
    }

    /// Switch the active service. Attachments, rejections and extra values are dropped.
    pub fn select_service(&mut self, service_id: Option<&str>) -> Result<(), SessionError> {
        if let Some(id) = service_id {
            if self.catalog.get(id).is_none() {
                return Err(SessionError::UnknownService(id.to_string()));
            }
        }

        self.service_id = service_id.map(str::to_string);
        self.attachments.clear_all();
        self.rejections.clear();
        self.extras.clear();
        info!(service = ?self.service_id, "service selected");
        Ok(())
    }

    pub fn active_service(&self) -> Option<&ServiceDefinition> {
        self.service_id
            .as_deref()
            .and_then(|id| self.catalog.get(id))
    }

    pub fn catalog(&self) -> &ServiceCatalog {
        &self.catalog
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) {
        self.phone = phone.into();
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn set_extra_value(
        &mut self,
        field_id: &str,
        value: impl Into<String>,
    ) -> Result<(), SessionError> {
        let service = self.require_service()?;
        if service.extra_field(field_id).is_none() {
            return Err(SessionError::UnknownField {
                service_id: service.id.clone(),
                field_id: field_id.to_string(),
            });
        }
        self.extras.insert(field_id.to_string(), value.into());
        Ok(())
    }

    pub fn extra_values(&self) -> &ExtraValues {
        &self.extras
    }

    /// Attach picked files: the first pick sets the field, later picks append.
    ///
    /// Returns how many of `files` were kept after deduplication.
    pub fn attach_files<I>(&mut self, field_id: &str, files: I) -> Result<usize, SessionError>
    where
        I: IntoIterator<Item = AttachedFile>,
    {
        self.require_file_field(field_id)?;
        Ok(self.attachments.attach(field_id, files))
    }

    pub fn set_files<I>(&mut self, field_id: &str, files: I) -> Result<usize, SessionError>
    where
        I: IntoIterator<Item = AttachedFile>,
    {
        self.require_file_field(field_id)?;
        Ok(self.attachments.set_files(field_id, files))
    }

    pub fn append_files<I>(&mut self, field_id: &str, files: I) -> Result<usize, SessionError>
    where
        I: IntoIterator<Item = AttachedFile>,
    {
        self.require_file_field(field_id)?;
        Ok(self.attachments.append_files(field_id, files))
    }

    /// Swap one file and clear the rejection recorded against the file it displaced.
    pub fn replace_file(
        &mut self,
        field_id: &str,
        index: usize,
        file: AttachedFile,
    ) -> Result<AttachedFile, SessionError> {
        self.require_file_field(field_id)?;
        let displaced = self.attachments.replace_at(field_id, index, file)?;
        let cleared = self
            .rejections
            .clear_for_replacement(field_id, displaced.name());
        debug!(
            field_id,
            index,
            displaced = displaced.name(),
            cleared,
            "attachment replaced"
        );
        Ok(displaced)
    }

    pub fn clear_field(&mut self, field_id: &str) -> Result<(), SessionError> {
        self.require_file_field(field_id)?;
        self.attachments.clear_field(field_id);
        Ok(())
    }

    pub fn attachments(&self) -> &AttachmentStore {
        &self.attachments
    }

    pub fn rejections(&self) -> &RejectionLedger {
        &self.rejections
    }

    pub fn has_rejections_for(&self, field_id: &str) -> bool {
        self.rejections.has_rejections_for(field_id)
    }

    pub fn rejection_for(&self, field_id: &str, filename: &str) -> Option<&RejectionRecord> {
        self.rejections.find_for(field_id, filename)
    }

    /// Status of every field of the active service, empty when none is selected.
    pub fn field_status(&self) -> FieldStatusSnapshot {
        match self.active_service() {
            Some(service) => project_field_status(service, &self.attachments, &self.extras),
            None => FieldStatusSnapshot::new(),
        }
    }

    /// Return the form to its blank state, service selection included.
    pub fn reset(&mut self) {
        self.service_id = None;
        self.name.clear();
        self.phone.clear();
        self.attachments.clear_all();
        self.rejections.clear();
        self.extras.clear();
    }

    fn require_service(&self) -> Result<&ServiceDefinition, SessionError> {
        self.active_service().ok_or(SessionError::NoServiceSelected)
    }

    fn require_file_field(&self, field_id: &str) -> Result<(), SessionError> {
        let service = self.require_service()?;
        if service.field(field_id).is_none() {
            return Err(SessionError::UnknownField {
                service_id: service.id.clone(),
                field_id: field_id.to_string(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("unknown service '{0}'")]
    UnknownService(String),
    #[error("no service selected")]
    NoServiceSelected,
    #[error("service '{service_id}' has no field '{field_id}'")]
    UnknownField { service_id: String, field_id: String },
    #[error(transparent)]
    Attachment(#[from] AttachmentError),
}

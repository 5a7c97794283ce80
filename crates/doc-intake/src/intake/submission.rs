//! Building the outbound request and reconciling the validator's answer.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::files::AttachedFile;
use super::ledger::RejectionRecord;
use super::session::IntakeSession;
use super::status::{project_field_status, ExtraValues, FieldStatusSnapshot};
use crate::transport::{TransportError, ValidatorTransport};

pub const GENERIC_FAILURE_MESSAGE: &str = "Erro ao enviar os documentos.";
pub const UNEXPECTED_FAILURE_MESSAGE: &str = "Falha inesperada.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
}

/// Field a submitted file came from, keyed by filename on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileFieldEntry {
    #[serde(rename = "fieldId")]
    pub field_id: String,
    #[serde(rename = "fieldLabel")]
    pub field_label: String,
}

/// Everything sent to the validator in one submission attempt.
#[derive(Debug, Clone)]
pub struct SubmissionRequest {
    pub name: String,
    pub phone: String,
    pub service_id: String,
    pub field_status: FieldStatusSnapshot,
    pub file_field_map: BTreeMap<String, FileFieldEntry>,
    pub extra_values: ExtraValues,
    pub documents: Vec<AttachedFile>,
}

impl SubmissionRequest {
    pub fn field_status_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.field_status)
    }

    pub fn file_field_map_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.file_field_map)
    }

    pub fn extra_values_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.extra_values)
    }
}

/// Successful validator response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionOutcome {
    #[serde(rename = "pasta")]
    pub created_folder_ref: String,
    #[serde(rename = "arquivos_rejeitados", default)]
    pub rejected_files: Vec<RejectionRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(
        rename = "arquivos_aprovados",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub approved_count: Option<usize>,
    #[serde(
        rename = "arquivos_enviados",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub uploaded_count: Option<usize>,
}

impl SubmissionOutcome {
    pub fn accepted(folder: impl Into<String>) -> Self {
        Self::with_rejections(folder, Vec::new())
    }

    pub fn with_rejections(folder: impl Into<String>, rejected_files: Vec<RejectionRecord>) -> Self {
        Self {
            created_folder_ref: folder.into(),
            rejected_files,
            message: None,
            approved_count: None,
            uploaded_count: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackLevel {
    Success,
    Warning,
    Error,
}

/// What the user is told once a submission settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionReport {
    Accepted { folder: String },
    PartiallyAccepted { folder: String, rejected: usize },
    Failed { message: String },
}

impl SubmissionReport {
    pub fn level(&self) -> FeedbackLevel {
        match self {
            Self::Accepted { .. } => FeedbackLevel::Success,
            Self::PartiallyAccepted { .. } => FeedbackLevel::Warning,
            Self::Failed { .. } => FeedbackLevel::Error,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

impl fmt::Display for SubmissionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accepted { .. } => {
                f.write_str("Arquivos enviados com sucesso! Todos os arquivos foram aceitos.")
            }
            Self::PartiallyAccepted { rejected, .. } => write!(
                f,
                "Arquivos enviados parcialmente! {rejected} arquivo(s) foram rejeitados - veja abaixo em vermelho."
            ),
            Self::Failed { message } => f.write_str(message),
        }
    }
}

/// Reasons a submission never leaves the client.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("Envio em andamento. Aguarde a resposta.")]
    InFlight,
    #[error("Selecione um serviço para continuar.")]
    NoServiceSelected,
    #[error("Adicione ao menos um documento antes de enviar.")]
    NoFilesAttached,
}

impl IntakeSession {
    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    /// Check the submission guards and snapshot the form into a request.
    ///
    /// On success the session is `Submitting` until [`IntakeSession::settle`] runs.
    pub fn begin_submission(&mut self) -> Result<SubmissionRequest, SubmitError> {
        if self.is_submitting() {
            return Err(SubmitError::InFlight);
        }
        let service = self.active_service().ok_or(SubmitError::NoServiceSelected)?;

        let attached = self
            .attachments
            .count_in(service.fields.iter().map(|field| field.id.as_str()));
        if attached == 0 {
            return Err(SubmitError::NoFilesAttached);
        }

        let mut file_field_map = BTreeMap::new();
        let mut documents = Vec::with_capacity(attached);
        for field in &service.fields {
            for file in self.attachments.files(&field.id) {
                file_field_map.insert(
                    file.name().to_string(),
                    FileFieldEntry {
                        field_id: field.id.clone(),
                        field_label: field.label.clone(),
                    },
                );
                documents.push(file.clone());
            }
        }

        let request = SubmissionRequest {
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            service_id: service.id.clone(),
            field_status: project_field_status(service, &self.attachments, &self.extras),
            file_field_map,
            extra_values: self.extras.clone(),
            documents,
        };

        self.state = SubmissionState::Submitting;
        info!(
            service = %request.service_id,
            documents = request.documents.len(),
            "submission started"
        );
        Ok(request)
    }

    /// Apply the validator's answer and return to `Idle`.
    pub fn settle(
        &mut self,
        result: Result<SubmissionOutcome, TransportError>,
    ) -> SubmissionReport {
        self.state = SubmissionState::Idle;

        match result {
            Err(err) => {
                let message = err.to_string();
                let message = if message.trim().is_empty() {
                    UNEXPECTED_FAILURE_MESSAGE.to_string()
                } else {
                    message
                };
                warn!(error = %message, "submission failed");
                SubmissionReport::Failed { message }
            }
            Ok(outcome) if !outcome.rejected_files.is_empty() => {
                let rejected = outcome.rejected_files.len();
                self.rejections.apply_outcome(outcome.rejected_files);
                info!(
                    folder = %outcome.created_folder_ref,
                    rejected,
                    "submission partially accepted"
                );
                SubmissionReport::PartiallyAccepted {
                    folder: outcome.created_folder_ref,
                    rejected,
                }
            }
            Ok(outcome) => {
                self.reset();
                info!(folder = %outcome.created_folder_ref, "submission accepted");
                SubmissionReport::Accepted {
                    folder: outcome.created_folder_ref,
                }
            }
        }
    }

    /// Run one full submission round trip through `transport`.
    pub async fn submit<T>(&mut self, transport: &T) -> Result<SubmissionReport, SubmitError>
    where
        T: ValidatorTransport + ?Sized,
    {
        let request = self.begin_submission()?;
        let guard = InFlightGuard { session: self };
        let result = transport.submit(&request).await;
        Ok(guard.session.settle(result))
    }
}

/// Puts the session back to `Idle` if a `submit` future is dropped before settling.
struct InFlightGuard<'a> {
    session: &'a mut IntakeSession,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        if self.session.state == SubmissionState::Submitting {
            warn!("submission abandoned before the validator answered");
            self.session.state = SubmissionState::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ServiceCatalog;
    use chrono::{TimeZone, Utc};
    use std::sync::Arc;

    fn trabalhista_session() -> IntakeSession {
        let mut session = IntakeSession::new(Arc::new(ServiceCatalog::standard()));
        session
            .select_service(Some("trabalhista"))
            .expect("service exists");
        session.set_name("  Maria da Silva ");
        session.set_phone(" (11) 91234-5678");
        session
    }

    fn file(name: &str) -> AttachedFile {
        let modified = Utc.with_ymd_and_hms(2025, 2, 20, 12, 0, 0).unwrap();
        AttachedFile::new(name, modified, name.as_bytes().to_vec())
    }

    #[test]
    fn guards_run_before_anything_is_built() {
        let mut session = IntakeSession::new(Arc::new(ServiceCatalog::standard()));
        assert_eq!(
            session.begin_submission().unwrap_err(),
            SubmitError::NoServiceSelected
        );

        session
            .select_service(Some("trabalhista"))
            .expect("service exists");
        assert_eq!(
            session.begin_submission().unwrap_err(),
            SubmitError::NoFilesAttached
        );
        assert_eq!(session.state(), SubmissionState::Idle);
    }

    #[test]
    fn second_begin_while_in_flight_is_refused() {
        let mut session = trabalhista_session();
        session
            .attach_files("trab-cpf", vec![file("cpf.jpg")])
            .expect("attach");

        session.begin_submission().expect("first submission starts");
        assert_eq!(session.begin_submission().unwrap_err(), SubmitError::InFlight);

        session.settle(Err(TransportError::Network("connection reset".to_string())));
        assert_eq!(session.state(), SubmissionState::Idle);
    }

    #[test]
    fn request_flattens_files_in_service_order() {
        let mut session = trabalhista_session();
        session
            .attach_files("trab-outros", vec![file("z.pdf")])
            .expect("attach");
        session
            .attach_files("trab-identidade", vec![file("rg-frente.jpg"), file("rg-verso.jpg")])
            .expect("attach");
        session
            .attach_files("trab-contracheques", vec![file("jan.pdf")])
            .expect("attach");

        let request = session.begin_submission().expect("request builds");

        let names: Vec<&str> = request.documents.iter().map(AttachedFile::name).collect();
        assert_eq!(names, vec!["rg-frente.jpg", "rg-verso.jpg", "jan.pdf", "z.pdf"]);
        assert_eq!(request.name, "Maria da Silva");
        assert_eq!(request.phone, "(11) 91234-5678");
        assert_eq!(request.service_id, "trabalhista");
        assert_eq!(request.field_status["trab-identidade"].uploaded_count, 2);
        assert_eq!(
            request.file_field_map["jan.pdf"],
            FileFieldEntry {
                field_id: "trab-contracheques".to_string(),
                field_label: "Contracheques".to_string(),
            }
        );
    }

    #[test]
    fn metadata_is_encoded_with_wire_keys() {
        let mut session = trabalhista_session();
        session
            .attach_files("trab-cpf", vec![file("cpf.jpg")])
            .expect("attach");
        let request = session.begin_submission().expect("request builds");

        let map: serde_json::Value =
            serde_json::from_str(&request.file_field_map_json().expect("encodes")).expect("json");
        assert_eq!(map["cpf.jpg"]["fieldId"], "trab-cpf");
        assert_eq!(map["cpf.jpg"]["fieldLabel"], "CPF");

        let status: serde_json::Value =
            serde_json::from_str(&request.field_status_json().expect("encodes")).expect("json");
        assert_eq!(status["trab-cpf"]["uploadedCount"], 1);
        assert_eq!(request.extra_values_json().expect("encodes"), "{}");
    }

    #[test]
    fn failure_leaves_state_untouched() {
        let mut session = trabalhista_session();
        session
            .attach_files("trab-cpf", vec![file("cpf.jpg")])
            .expect("attach");
        session.begin_submission().expect("request builds");

        let report = session.settle(Err(TransportError::Server {
            status: 400,
            message: "Telefone inválido. Deve conter pelo menos 10 dígitos.".to_string(),
        }));

        assert_eq!(report.level(), FeedbackLevel::Error);
        assert_eq!(
            report.to_string(),
            "Telefone inválido. Deve conter pelo menos 10 dígitos."
        );
        assert_eq!(session.attachments().len("trab-cpf"), 1);
        assert_eq!(session.name(), "  Maria da Silva ");
    }

    #[test]
    fn empty_failure_message_falls_back() {
        let mut session = trabalhista_session();
        session
            .attach_files("trab-cpf", vec![file("cpf.jpg")])
            .expect("attach");
        session.begin_submission().expect("request builds");

        let report = session.settle(Err(TransportError::Network(String::new())));
        assert_eq!(report.to_string(), UNEXPECTED_FAILURE_MESSAGE);
    }

    #[test]
    fn partial_report_counts_rejections() {
        let report = SubmissionReport::PartiallyAccepted {
            folder: "maria-11912345678".to_string(),
            rejected: 2,
        };
        assert_eq!(
            report.to_string(),
            "Arquivos enviados parcialmente! 2 arquivo(s) foram rejeitados - veja abaixo em vermelho."
        );
        assert_eq!(report.level(), FeedbackLevel::Warning);
    }

    #[test]
    fn outcome_decodes_full_validator_response() {
        let json = r#"{
            "message": "Arquivos enviados com sucesso.",
            "cliente": "Maria",
            "pasta": "maria-11912345678",
            "arquivos_aprovados": 1,
            "arquivos_enviados": 1,
            "arquivos_rejeitados": [
                {"filename": "rg.jpg", "reason": "borrada", "field_id": "trab-identidade", "field_label": "Identidade (RG)"}
            ]
        }"#;

        let outcome: SubmissionOutcome = serde_json::from_str(json).expect("outcome decodes");
        assert_eq!(outcome.created_folder_ref, "maria-11912345678");
        assert_eq!(outcome.approved_count, Some(1));
        assert_eq!(outcome.rejected_files.len(), 1);
        assert_eq!(outcome.rejected_files[0].reason, "borrada");
    }
}

use std::future::pending;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use doc_intake::intake::{
    AttachedFile, IntakeSession, RejectionRecord, SubmissionOutcome, SubmissionReport,
    SubmissionRequest, SubmissionState, SubmitError,
};
use doc_intake::{ServiceCatalog, TransportError, ValidatorTransport};

/// Validator double that replays canned answers and records what it was sent.
struct FakeValidator {
    answer: Mutex<Option<Result<SubmissionOutcome, TransportError>>>,
    received: Mutex<Vec<SubmissionRequest>>,
}

impl FakeValidator {
    fn answering(answer: Result<SubmissionOutcome, TransportError>) -> Self {
        Self {
            answer: Mutex::new(Some(answer)),
            received: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> usize {
        self.received.lock().expect("received mutex").len()
    }

    fn last_request(&self) -> SubmissionRequest {
        self.received
            .lock()
            .expect("received mutex")
            .last()
            .cloned()
            .expect("a request was sent")
    }
}

#[async_trait]
impl ValidatorTransport for FakeValidator {
    async fn submit(
        &self,
        request: &SubmissionRequest,
    ) -> Result<SubmissionOutcome, TransportError> {
        self.received
            .lock()
            .expect("received mutex")
            .push(request.clone());
        self.answer
            .lock()
            .expect("answer mutex")
            .take()
            .unwrap_or_else(|| Err(TransportError::Network("no answer scripted".to_string())))
    }
}

/// Validator that never answers.
struct SilentValidator;

#[async_trait]
impl ValidatorTransport for SilentValidator {
    async fn submit(
        &self,
        _request: &SubmissionRequest,
    ) -> Result<SubmissionOutcome, TransportError> {
        pending().await
    }
}

fn mtime() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 5, 12, 16, 45, 0).unwrap()
}

fn rg_jpg() -> AttachedFile {
    AttachedFile::new("rg.jpg", mtime(), vec![7_u8; 1024])
}

fn trabalhista_with_rg() -> IntakeSession {
    let mut session = IntakeSession::new(Arc::new(ServiceCatalog::standard()));
    session
        .select_service(Some("trabalhista"))
        .expect("trabalhista exists");
    session.set_name("João Pereira");
    session.set_phone("11987654321");
    session
        .attach_files("trab-identidade", vec![rg_jpg()])
        .expect("field exists");
    session
}

#[tokio::test]
async fn full_acceptance_resets_the_form() {
    let mut session = trabalhista_with_rg();
    let validator = FakeValidator::answering(Ok(SubmissionOutcome::accepted("x")));

    let report = session.submit(&validator).await.expect("guards pass");

    assert_eq!(
        report,
        SubmissionReport::Accepted {
            folder: "x".to_string()
        }
    );
    assert!(session.attachments().is_empty());
    assert!(session.rejections().is_empty());
    assert!(session.extra_values().is_empty());
    assert_eq!(session.name(), "");
    assert_eq!(session.phone(), "");
    assert_eq!(session.state(), SubmissionState::Idle);

    let request = validator.last_request();
    assert_eq!(request.documents.len(), 1);
    assert_eq!(request.documents[0].size(), 1024);
    assert_eq!(request.service_id, "trabalhista");
}

#[tokio::test]
async fn partial_acceptance_flags_the_rejected_file() {
    let mut session = trabalhista_with_rg();
    let rejection = RejectionRecord::new("trab-identidade", "rg.jpg", "borrada");
    let validator = FakeValidator::answering(Ok(SubmissionOutcome::with_rejections(
        "x",
        vec![rejection.clone()],
    )));

    let report = session.submit(&validator).await.expect("guards pass");

    assert_eq!(
        report,
        SubmissionReport::PartiallyAccepted {
            folder: "x".to_string(),
            rejected: 1
        }
    );
    assert_eq!(session.rejections().records(), &[rejection]);
    assert!(session.has_rejections_for("trab-identidade"));
    assert_eq!(
        session
            .rejection_for("trab-identidade", "rg.jpg")
            .map(|record| record.reason.as_str()),
        Some("borrada")
    );
    assert_eq!(session.attachments().len("trab-identidade"), 1);
    assert_eq!(session.name(), "João Pereira");
}

#[tokio::test]
async fn fixing_a_rejected_file_then_resubmitting() {
    let mut session = trabalhista_with_rg();
    let first = FakeValidator::answering(Ok(SubmissionOutcome::with_rejections(
        "x",
        vec![RejectionRecord::new("trab-identidade", "rg.jpg", "borrada")],
    )));
    session.submit(&first).await.expect("guards pass");

    session
        .replace_file(
            "trab-identidade",
            0,
            AttachedFile::new("rg-nitido.jpg", mtime(), vec![9_u8; 2048]),
        )
        .expect("index 0 exists");
    assert!(!session.has_rejections_for("trab-identidade"));

    let second = FakeValidator::answering(Ok(SubmissionOutcome::accepted("x")));
    let report = session.submit(&second).await.expect("guards pass");

    assert!(report.is_accepted());
    let resent = second.last_request();
    assert_eq!(resent.documents[0].name(), "rg-nitido.jpg");
    assert_eq!(
        resent.file_field_map["rg-nitido.jpg"].field_id,
        "trab-identidade"
    );
}

#[test]
fn duplicate_pick_is_dropped() {
    let mut session = trabalhista_with_rg();

    let kept = session
        .attach_files(
            "trab-identidade",
            vec![AttachedFile::new("rg.jpg", mtime(), vec![1_u8; 10])],
        )
        .expect("field exists");

    assert_eq!(kept, 0);
    assert_eq!(session.attachments().len("trab-identidade"), 1);
}

#[tokio::test]
async fn no_service_blocks_without_network_call() {
    let mut session = IntakeSession::new(Arc::new(ServiceCatalog::standard()));
    let validator = FakeValidator::answering(Ok(SubmissionOutcome::accepted("x")));

    let result = session.submit(&validator).await;

    assert_eq!(result.unwrap_err(), SubmitError::NoServiceSelected);
    assert_eq!(validator.calls(), 0);
}

#[tokio::test]
async fn extra_values_alone_do_not_count_as_files() {
    let mut session = IntakeSession::new(Arc::new(ServiceCatalog::standard()));
    session.select_service(Some("inss")).expect("inss exists");
    session
        .set_extra_value("inss-senha", "minha-senha")
        .expect("extra field exists");
    let validator = FakeValidator::answering(Ok(SubmissionOutcome::accepted("x")));

    let result = session.submit(&validator).await;

    assert_eq!(result.unwrap_err(), SubmitError::NoFilesAttached);
    assert_eq!(validator.calls(), 0);
    assert_eq!(session.state(), SubmissionState::Idle);
}

#[tokio::test]
async fn extra_values_travel_with_the_request() {
    let mut session = IntakeSession::new(Arc::new(ServiceCatalog::standard()));
    session.select_service(Some("inss")).expect("inss exists");
    session
        .set_extra_value("inss-senha", "minha-senha")
        .expect("extra field exists");
    session
        .attach_files(
            "inss-laudos",
            vec![AttachedFile::new("laudo.pdf", mtime(), vec![1_u8; 4])],
        )
        .expect("field exists");
    let validator = FakeValidator::answering(Ok(SubmissionOutcome::accepted("pasta")));

    session.submit(&validator).await.expect("guards pass");

    let request = validator.last_request();
    assert_eq!(
        request.extra_values.get("inss-senha").map(String::as_str),
        Some("minha-senha")
    );
    assert_eq!(
        request.field_status["inss-senha"].value.as_deref(),
        Some("minha-senha")
    );
    assert_eq!(request.field_status["inss-processo"].value.as_deref(), Some(""));
    assert_eq!(request.field_status["inss-laudos"].uploaded_count, 1);
}

#[tokio::test]
async fn transport_failure_keeps_everything_for_retry() {
    let mut session = trabalhista_with_rg();
    let earlier = FakeValidator::answering(Ok(SubmissionOutcome::with_rejections(
        "x",
        vec![RejectionRecord::new("trab-identidade", "rg.jpg", "borrada")],
    )));
    session.submit(&earlier).await.expect("guards pass");

    let failing = FakeValidator::answering(Err(TransportError::Server {
        status: 400,
        message: "Nome deve ter pelo menos 3 caracteres.".to_string(),
    }));
    let report = session.submit(&failing).await.expect("guards pass");

    assert_eq!(
        report,
        SubmissionReport::Failed {
            message: "Nome deve ter pelo menos 3 caracteres.".to_string()
        }
    );
    assert_eq!(session.attachments().len("trab-identidade"), 1);
    assert!(session.has_rejections_for("trab-identidade"));
    assert_eq!(session.state(), SubmissionState::Idle);
}

#[tokio::test]
async fn full_acceptance_after_partial_clears_rejections_and_extras() {
    let mut session = IntakeSession::new(Arc::new(ServiceCatalog::standard()));
    session.select_service(Some("inss")).expect("inss exists");
    session.set_name("Carla Mendes");
    session.set_phone("31988887777");
    session
        .set_extra_value("inss-senha", "minha-senha")
        .expect("extra field exists");
    session
        .attach_files(
            "inss-laudos",
            vec![AttachedFile::new("laudo.pdf", mtime(), vec![1_u8; 8])],
        )
        .expect("field exists");

    let partial = FakeValidator::answering(Ok(SubmissionOutcome::with_rejections(
        "carla",
        vec![RejectionRecord::new("inss-laudos", "laudo.pdf", "ilegível")],
    )));
    session.submit(&partial).await.expect("guards pass");
    assert!(session.has_rejections_for("inss-laudos"));
    assert_eq!(session.extra_values().len(), 1);

    let accepted = FakeValidator::answering(Ok(SubmissionOutcome::accepted("carla")));
    let report = session.submit(&accepted).await.expect("guards pass");

    assert!(report.is_accepted());
    assert!(session.rejections().is_empty());
    assert!(session.extra_values().is_empty());
    assert!(session.attachments().is_empty());
    assert!(session.active_service().is_none());
}

#[tokio::test]
async fn dropped_submission_returns_to_idle() {
    let mut session = trabalhista_with_rg();

    let timed_out =
        tokio::time::timeout(Duration::from_millis(10), session.submit(&SilentValidator)).await;

    assert!(timed_out.is_err());
    assert_eq!(session.state(), SubmissionState::Idle);
    assert_eq!(session.attachments().len("trab-identidade"), 1);

    let validator = FakeValidator::answering(Ok(SubmissionOutcome::accepted("x")));
    let report = session.submit(&validator).await.expect("no submission in flight");
    assert!(report.is_accepted());
    assert_eq!(validator.calls(), 1);
}

//! Client-side document intake.
//!
//! A form session lets a client attach files to the document slots of a
//! selected service, submit them to a remote validator, and reconcile the
//! validator's partial-acceptance answer against the attachments still on hand.

pub mod catalog;
pub mod config;
pub mod error;
pub mod intake;
pub mod telemetry;
pub mod transport;

pub use catalog::{ExtraFieldSpec, FieldSpec, InputKind, ServiceCatalog, ServiceDefinition};
pub use intake::{
    AttachedFile, AttachmentStore, IntakeSession, RejectionLedger, RejectionRecord,
    SubmissionOutcome, SubmissionReport, SubmissionRequest, SubmitError,
};
pub use transport::{HttpValidatorClient, TransportError, ValidatorTransport};

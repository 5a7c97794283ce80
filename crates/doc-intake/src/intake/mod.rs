//! Form-session state: attachments, rejections, field status, and submission.

mod files;
mod ledger;
mod session;
mod status;
mod store;
pub mod submission;

pub use files::{AttachedFile, IdentityKey};
pub use ledger::{RejectionLedger, RejectionRecord};
pub use session::{IntakeSession, SessionError};
pub use status::{project_field_status, ExtraValues, FieldStatus, FieldStatusSnapshot};
pub use store::{AttachmentError, AttachmentStore};
pub use submission::{
    FeedbackLevel, FileFieldEntry, SubmissionOutcome, SubmissionReport, SubmissionRequest,
    SubmissionState, SubmitError,
};

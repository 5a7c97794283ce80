//! Boundary to the remote validator that receives submissions.

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::multipart::{Form, Part};
use reqwest::Body;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::intake::submission::GENERIC_FAILURE_MESSAGE;
use crate::intake::{SubmissionOutcome, SubmissionRequest};

/// Sends one submission and waits for the single response.
#[async_trait]
pub trait ValidatorTransport: Send + Sync {
    async fn submit(
        &self,
        request: &SubmissionRequest,
    ) -> Result<SubmissionOutcome, TransportError>;
}

/// Whole-submission failure. `Display` yields the message shown to the user.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("{message}")]
    Server { status: u16, message: String },
    #[error("{0}")]
    Network(String),
    #[error("Resposta inválida do servidor: {0}")]
    Decode(String),
    #[error("Não foi possível preparar o envio: {0}")]
    Encode(String),
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

/// Multipart HTTP client for the validator's submit endpoint.
#[derive(Debug, Clone)]
pub struct HttpValidatorClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpValidatorClient {
    pub fn new(endpoint: Url) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    pub fn with_client(client: reqwest::Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn build_form(request: &SubmissionRequest) -> Result<Form, TransportError> {
        let encode = |err: serde_json::Error| TransportError::Encode(err.to_string());

        let mut form = Form::new()
            .text("nome", request.name.clone())
            .text("telefone", request.phone.clone())
            .text("servico", request.service_id.clone())
            .text("field_status", request.field_status_json().map_err(encode)?)
            .text("file_field_map", request.file_field_map_json().map_err(encode)?)
            .text("extra_values", request.extra_values_json().map_err(encode)?);

        for document in &request.documents {
            let body = Body::from(document.shared_contents());
            let part = Part::stream_with_length(body, document.size())
                .file_name(document.name().to_string())
                .mime_str(&document.content_type())
                .map_err(|err| TransportError::Encode(err.to_string()))?;
            form = form.part("documentos", part);
        }

        Ok(form)
    }
}

#[async_trait]
impl ValidatorTransport for HttpValidatorClient {
    async fn submit(
        &self,
        request: &SubmissionRequest,
    ) -> Result<SubmissionOutcome, TransportError> {
        let form = Self::build_form(request)?;
        debug!(endpoint = %self.endpoint, "posting submission");

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(ACCEPT, "*/*")
            .multipart(form)
            .send()
            .await
            .map_err(|err| TransportError::Network(err.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|err| TransportError::Network(err.to_string()))?;

        if !status.is_success() {
            return Err(TransportError::Server {
                status: status.as_u16(),
                message: failure_detail(&body),
            });
        }

        serde_json::from_slice(&body).map_err(|err| TransportError::Decode(err.to_string()))
    }
}

/// `detail` from an error body, or the generic message when it is missing or not text.
fn failure_detail(body: &[u8]) -> String {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.detail)
        .and_then(|detail| detail.as_str().map(str::to_string))
        .filter(|detail| !detail.trim().is_empty())
        .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string())
}

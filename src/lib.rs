pub mod constants;
pub mod error;
pub mod picker;
pub mod session;

use std::time::Duration;

use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};

use crate::{constants::*, picker::SelectedFile};

/// The decoded response payload from the analysis endpoint.
///
/// Only `answers` is contractual; a response without it decodes to an empty
/// string rather than failing, and any other fields the service sends along
/// are carried opaquely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    #[serde(default)]
    pub answers: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// --- Client Implementation ---

pub struct AnswerClient {
    client: reqwest::Client,
    endpoint: String,
}

impl AnswerClient {
    pub fn new() -> Self {
        Self::with_endpoint(UPLOAD_ENDPOINT)
    }

    /// Points the client somewhere other than the built-in endpoint. The
    /// binary never uses this; it exists so tests can stand in for the
    /// service.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();

        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// Issues the one multipart POST: a single part named `image` carrying
    /// the file bytes, declared MIME type and file name. Non-success
    /// statuses and undecodable bodies are failures; the request is atomic
    /// and never retried.
    pub async fn upload(&self, file: &SelectedFile) -> Result<Analysis, UploadError> {
        let part = Part::stream_with_length(
            reqwest::Body::from(file.bytes.clone()),
            file.bytes.len() as u64,
        )
        .file_name(file.name.clone())
        .mime_str(file.mime)?;
        let form = Form::new().part(IMAGE_FIELD, part);

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UploadError::Status { status, body });
        }

        let body = response.text().await?;
        let analysis = serde_json::from_str(&body)?;
        Ok(analysis)
    }
}

impl Default for AnswerClient {
    fn default() -> Self {
        Self::new()
    }
}

pub use error::UploadError;
pub use session::UploadSession;

use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong between triggering an upload and settling it.
///
/// The library never talks to the user directly; the front end maps each
/// variant to a notice via [`UploadError::notice`] and the full detail is
/// logged for diagnostics.
#[derive(Debug, Error)]
pub enum UploadError {
    /// Upload triggered with no file selected. No request is attempted.
    #[error("no image selected")]
    MissingInput,

    /// Upload triggered while a request is already in flight. The trigger
    /// is ignored; at most one request is ever outstanding.
    #[error("an upload is already in flight")]
    InFlight,

    /// Connection or transport failure before a response arrived.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("server returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// The response body was not the JSON shape we expect.
    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl UploadError {
    /// The user-facing notice for this error. Only two exist: everything
    /// past the missing-input precondition is reported as a failed upload,
    /// with the specifics left to the log.
    pub fn notice(&self) -> &'static str {
        match self {
            UploadError::MissingInput => "Please upload an image",
            _ => "Failed to upload image",
        }
    }
}

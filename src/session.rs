use crate::{Analysis, AnswerClient, error::UploadError, picker::SelectedFile};

/// The whole client-visible state of one page-equivalent session: the
/// selected file, the busy flag, and the last successful result.
///
/// All three fields are owned here and nowhere else; the front end reads
/// them through the accessors and mutates them only through [`select`] and
/// [`upload`].
///
/// [`select`]: UploadSession::select
/// [`upload`]: UploadSession::upload
#[derive(Debug, Default)]
pub struct UploadSession {
    selected: Option<SelectedFile>,
    busy: bool,
    result: Option<Analysis>,
}

impl UploadSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current selection. There is no way to deselect; a new
    /// pick overwrites the old one wholesale.
    pub fn select(&mut self, file: SelectedFile) {
        log::debug!("selected file {}", file.display_name());
        self.selected = Some(file);
    }

    pub fn selected(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }

    /// True strictly between request start and settlement.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn result(&self) -> Option<&Analysis> {
        self.result.as_ref()
    }

    /// What the result renderer shows: the verbatim `answers` text, but
    /// only while idle. While a request is in flight the renderer shows
    /// the loading indicator instead, never a stale result.
    pub fn display_text(&self) -> Option<&str> {
        if self.busy {
            return None;
        }
        self.result.as_ref().map(|r| r.answers.as_str())
    }

    /// The upload action. Preconditions first: a file must be selected and
    /// no request may already be in flight (a busy trigger is ignored, so
    /// at most one request is ever outstanding). Then exactly one POST.
    ///
    /// Success overwrites the stored result; any failure is logged and
    /// leaves the previous result intact. Either way the busy flag is
    /// cleared and the session is ready for another attempt.
    pub async fn upload(&mut self, client: &AnswerClient) -> Result<&Analysis, UploadError> {
        if self.busy {
            return Err(UploadError::InFlight);
        }
        let file = self.selected.as_ref().ok_or(UploadError::MissingInput)?;

        self.busy = true;
        let outcome = client.upload(file).await;
        self.busy = false;

        match outcome {
            Ok(analysis) => Ok(self.result.insert(analysis)),
            Err(err) => {
                log::error!("upload of {} failed: {err}", file.display_name());
                Err(err)
            }
        }
    }
}

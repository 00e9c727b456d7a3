//! Sentiment form controller.
//!
//! Owns the input text and the render status, and drives one
//! validate → submit → settle cycle per user submission. The controller is
//! front-end agnostic: the TUI drives it through [`FormController::begin_submit`]
//! and [`FormController::settle`] across its event loop, while one-shot
//! callers use [`FormController::submit`].

use crate::sentiment::{AnalyzeRequest, Analysis, RequestError, SentimentService};

/// Message shown when the trimmed input is empty.
pub const VALIDATION_MESSAGE: &str = "Please enter some text to analyze";

/// The four mutually exclusive render states.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FormStatus {
    #[default]
    Idle,
    Loading,
    Success(Analysis),
    Failure(String),
}

#[derive(Debug, Clone, Default)]
pub struct FormController {
    text: String,
    status: FormStatus,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the input text. Allowed while a request is in flight; the
    /// change only affects the next submission.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, FormStatus::Loading)
    }

    pub fn result(&self) -> Option<&Analysis> {
        match &self.status {
            FormStatus::Success(analysis) => Some(analysis),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            FormStatus::Failure(message) => Some(message),
            _ => None,
        }
    }

    /// Whether the submit trigger should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_loading() && !self.text.trim().is_empty()
    }

    /// Starts a submission.
    ///
    /// Returns the request to send when the input is valid, after moving to
    /// `Loading` (which clears any previous result or error). Blank input
    /// moves to `Failure` with [`VALIDATION_MESSAGE`] and returns `None`.
    /// Does nothing while a request is already in flight.
    pub fn begin_submit(&mut self) -> Option<AnalyzeRequest> {
        if self.is_loading() {
            return None;
        }

        if let Some(request) = AnalyzeRequest::from_input(&self.text) {
            self.status = FormStatus::Loading;
            Some(request)
        } else {
            tracing::debug!("Rejected blank sentiment input");
            self.status = FormStatus::Failure(VALIDATION_MESSAGE.to_string());
            None
        }
    }

    /// Applies the outcome of the in-flight request.
    ///
    /// Returns `false` (and changes nothing) if no request was in flight.
    pub fn settle(&mut self, outcome: Result<Analysis, RequestError>) -> bool {
        if !self.is_loading() {
            return false;
        }

        self.status = match outcome {
            Ok(analysis) => FormStatus::Success(analysis),
            Err(err) => {
                tracing::warn!(kind = %err.kind, error = %err, "Sentiment analysis failed");
                FormStatus::Failure(err.display_message().to_string())
            }
        };
        true
    }

    /// Runs a full submission against `service` and returns the final status.
    ///
    /// If the returned future is dropped before the request settles, the
    /// form still leaves `Loading` and shows the fallback error.
    pub async fn submit<S: SentimentService>(&mut self, service: &S) -> &FormStatus {
        let Some(request) = self.begin_submit() else {
            return &self.status;
        };

        let in_flight = InFlight::new(self);
        let outcome = service.analyze(&request).await;
        in_flight.settle(outcome);

        &self.status
    }
}

/// Holds the form in `Loading` until settled or dropped.
struct InFlight<'a> {
    form: &'a mut FormController,
    settled: bool,
}

impl<'a> InFlight<'a> {
    fn new(form: &'a mut FormController) -> Self {
        Self {
            form,
            settled: false,
        }
    }

    fn settle(mut self, outcome: Result<Analysis, RequestError>) {
        self.form.settle(outcome);
        self.settled = true;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.settled {
            self.form.settle(Err(RequestError::transport(None)));
        }
    }
}

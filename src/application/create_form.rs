//! The create form: a draft, its field errors and the submit round trip.

use std::time::Duration;

use blogfront_api_types::CreatePostRequest;
use tracing::{info, warn};

use crate::domain::draft::{Field, FieldErrors, PostDraft};
use crate::infra::api::{ApiError, BlogApi, ErrorKind};

use super::notifications::{Notice, TransientNotice};

pub const PUBLISHED_MESSAGE: &str = "Blog published successfully!";
pub const FIX_ERRORS_MESSAGE: &str = "Please fix the errors above";
pub const NETWORK_MESSAGE: &str =
    "Network error: Cannot connect to server. Make sure the backend is running.";

/// Why a submission did not create a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateFailure {
    /// Rejected locally; nothing was sent.
    Validation,
    /// The request could not reach the server.
    Network,
    /// Non-success status, `success: false`, or an undecodable body.
    Server,
}

impl CreateFailure {
    pub fn as_str(self) -> &'static str {
        match self {
            CreateFailure::Validation => "validation",
            CreateFailure::Network => "network",
            CreateFailure::Server => "server",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created,
    Failed(CreateFailure),
    /// A submission is already in flight.
    Busy,
}

#[derive(Debug)]
pub struct CreateForm {
    draft: PostDraft,
    errors: FieldErrors,
    message: TransientNotice,
    in_flight: bool,
}

impl CreateForm {
    pub fn new(message_ttl: Duration) -> Self {
        Self {
            draft: PostDraft::default(),
            errors: FieldErrors::default(),
            message: TransientNotice::new(message_ttl),
            in_flight: false,
        }
    }

    pub fn with_draft(draft: PostDraft, message_ttl: Duration) -> Self {
        Self {
            draft,
            ..Self::new(message_ttl)
        }
    }

    pub fn draft(&self) -> &PostDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn message(&self) -> Option<Notice> {
        self.message.current()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Editing a field clears that field's error and any form-level message.
    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        self.draft.set(field, value);
        self.errors.clear(field);
        if self.message.current().is_some() {
            self.message.dismiss();
        }
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        !self.in_flight && self.draft.has_required_fields()
    }

    /// Validate and mark the form busy, yielding the payload to send.
    pub fn begin_submit(&mut self) -> Result<CreatePostRequest, SubmitOutcome> {
        if self.in_flight {
            return Err(SubmitOutcome::Busy);
        }

        match self.draft.validate() {
            Ok(request) => {
                self.errors = FieldErrors::default();
                self.message.dismiss();
                self.in_flight = true;
                Ok(request)
            }
            Err(errors) => {
                info!(fields = errors.len(), "draft rejected before submission");
                self.errors = errors;
                self.message.show(Notice::error(FIX_ERRORS_MESSAGE));
                Err(SubmitOutcome::Failed(CreateFailure::Validation))
            }
        }
    }

    /// Apply the server's answer. The draft survives every failure.
    pub fn finish_submit(&mut self, result: Result<(), ApiError>) -> SubmitOutcome {
        self.in_flight = false;
        match result {
            Ok(()) => {
                info!("blog published");
                self.draft = PostDraft::default();
                self.errors = FieldErrors::default();
                self.message.show(Notice::success(PUBLISHED_MESSAGE));
                SubmitOutcome::Created
            }
            Err(err) => {
                warn!(error = %err, "publishing blog failed");
                let (failure, notice) = classify(&err);
                self.message.show(notice);
                SubmitOutcome::Failed(failure)
            }
        }
    }

    pub async fn submit<A>(&mut self, api: &A) -> SubmitOutcome
    where
        A: BlogApi + ?Sized,
    {
        let request = match self.begin_submit() {
            Ok(request) => request,
            Err(outcome) => return outcome,
        };
        let result = api.create_post(&request).await;
        self.finish_submit(result)
    }
}

fn classify(err: &ApiError) -> (CreateFailure, Notice) {
    match err.kind() {
        ErrorKind::Network => (CreateFailure::Network, Notice::warning(NETWORK_MESSAGE)),
        ErrorKind::Parse => (
            CreateFailure::Server,
            Notice::error(format!("Server error: {err}")),
        ),
        ErrorKind::Server => {
            let message = match (err.server_message(), err.status()) {
                (Some(message), _) => message.to_string(),
                (None, Some(status)) => format!(
                    "Error: {} {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or_default()
                )
                .trim_end()
                .to_string(),
                (None, None) => err.to_string(),
            };
            (CreateFailure::Server, Notice::error(message))
        }
    }
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;

    use super::*;
    use crate::application::notifications::Severity;
    use crate::application::testing::FakeApi;

    const TTL: Duration = Duration::from_secs(3);

    fn form(title: &str, author: &str, content: &str) -> CreateForm {
        CreateForm::with_draft(PostDraft::new(title, author, content), TTL)
    }

    #[tokio::test]
    async fn missing_author_is_rejected_without_a_request() {
        let api = FakeApi::default();
        let mut form = form("Hi", "", "1234567890");
        assert!(!form.can_submit());

        let outcome = form.submit(&api).await;
        assert_eq!(outcome, SubmitOutcome::Failed(CreateFailure::Validation));
        assert_eq!(
            form.errors().get(Field::Author),
            Some("Author name is required")
        );
        assert_eq!(form.message(), Some(Notice::error(FIX_ERRORS_MESSAGE)));
        assert!(api.created().is_empty());
        assert_eq!(form.draft().title, "Hi");
    }

    #[tokio::test(start_paused = true)]
    async fn valid_draft_is_sent_trimmed_and_cleared() {
        let api = FakeApi::default();
        let mut form = form(" Hi ", "Bob ", "1234567890");
        assert!(form.can_submit());

        let outcome = form.submit(&api).await;
        assert_eq!(outcome, SubmitOutcome::Created);
        assert_eq!(
            api.created(),
            vec![CreatePostRequest {
                title: "Hi".into(),
                author: "Bob".into(),
                content: "1234567890".into(),
            }]
        );
        assert!(form.draft().is_empty());
        assert!(form.errors().is_empty());
        assert_eq!(form.message(), Some(Notice::success(PUBLISHED_MESSAGE)));

        tokio::time::sleep(TTL + Duration::from_millis(1)).await;
        tokio::task::yield_now().await;
        assert_eq!(form.message(), None);
    }

    #[test]
    fn second_submit_is_blocked_while_in_flight() {
        let mut form = form("Hi", "Bob", "1234567890");
        let request = form.begin_submit().expect("valid");
        assert_eq!(request.title, "Hi");
        assert!(form.is_in_flight());
        assert!(!form.can_submit());
        assert_eq!(form.begin_submit(), Err(SubmitOutcome::Busy));

        let outcome = form.finish_submit(Ok(()));
        assert_eq!(outcome, SubmitOutcome::Created);
        assert!(!form.is_in_flight());
    }

    #[tokio::test]
    async fn server_message_is_shown_and_draft_kept() {
        let api = FakeApi::default();
        api.fail_create(ApiError::Status {
            status: StatusCode::CONFLICT,
            message: Some("Title already exists".into()),
        });
        let mut form = form("Hi", "Bob", "1234567890");

        let outcome = form.submit(&api).await;
        assert_eq!(outcome, SubmitOutcome::Failed(CreateFailure::Server));
        assert_eq!(form.message(), Some(Notice::error("Title already exists")));
        assert_eq!(form.draft(), &PostDraft::new("Hi", "Bob", "1234567890"));
        assert!(!form.is_in_flight());
    }

    #[tokio::test]
    async fn status_without_message_falls_back_to_reason() {
        let api = FakeApi::default();
        api.fail_create(ApiError::Rejected {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: None,
        });
        let mut form = form("Hi", "Bob", "1234567890");

        form.submit(&api).await;
        assert_eq!(
            form.message(),
            Some(Notice::error("Error: 500 Internal Server Error"))
        );
    }

    #[tokio::test]
    async fn non_json_reply_is_a_server_failure() {
        let api = FakeApi::default();
        api.fail_create(ApiError::Parse {
            status: StatusCode::BAD_GATEWAY,
            detail: "<html>bad gateway</html>".into(),
        });
        let mut form = form("Hi", "Bob", "1234567890");

        let outcome = form.submit(&api).await;
        assert_eq!(outcome, SubmitOutcome::Failed(CreateFailure::Server));
        assert_eq!(
            form.message(),
            Some(Notice::error(
                "Server error: Server returned 502: <html>bad gateway</html>"
            ))
        );
    }

    #[tokio::test]
    async fn network_failure_is_a_warning() {
        let api = FakeApi::default();
        api.fail_create(ApiError::InvalidBase("http://".into()));
        let mut form = form("Hi", "Bob", "1234567890");

        let outcome = form.submit(&api).await;
        assert_eq!(outcome, SubmitOutcome::Failed(CreateFailure::Network));
        let message = form.message().expect("message");
        assert_eq!(message.severity, Severity::Warning);
        assert_eq!(message.message, NETWORK_MESSAGE);
        assert!(!form.draft().is_empty());
    }

    #[tokio::test]
    async fn editing_clears_only_that_field_error() {
        let api = FakeApi::default();
        let mut form = form("", "", "short");
        form.submit(&api).await;
        assert_eq!(form.errors().len(), 3);

        form.edit(Field::Title, "Hello");
        assert!(!form.errors().contains(Field::Title));
        assert!(form.errors().contains(Field::Author));
        assert!(form.errors().contains(Field::Content));
        assert_eq!(form.message(), None);
    }
}

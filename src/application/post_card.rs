//! A single post summary with its read-more view and two-step delete.

use std::borrow::Cow;
use std::time::Duration;

use blogfront_api_types::{Post, PostId};
use tracing::{info, warn};

use crate::domain::posts::{self, DEFAULT_PREVIEW_CHARS};
use crate::infra::api::{ApiError, BlogApi};

use super::notifications::{Notice, TransientNotice};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteState {
    Idle,
    Confirming,
    Deleting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Failed,
    /// `confirm_delete` was called without an open prompt.
    NotConfirming,
}

#[derive(Debug)]
pub struct PostCard {
    post: Post,
    preview_chars: usize,
    expanded: bool,
    delete: DeleteState,
    notice: TransientNotice,
}

impl PostCard {
    pub fn new(post: Post, notice_ttl: Duration) -> Self {
        Self::with_preview_chars(post, DEFAULT_PREVIEW_CHARS, notice_ttl)
    }

    pub fn with_preview_chars(post: Post, preview_chars: usize, notice_ttl: Duration) -> Self {
        Self {
            post,
            preview_chars,
            expanded: false,
            delete: DeleteState::Idle,
            notice: TransientNotice::new(notice_ttl),
        }
    }

    pub fn post(&self) -> &Post {
        &self.post
    }

    pub fn id(&self) -> &PostId {
        &self.post.id
    }

    pub fn preview(&self) -> Cow<'_, str> {
        posts::preview(posts::display_content(&self.post), self.preview_chars)
    }

    pub fn full_content(&self) -> &str {
        posts::display_content(&self.post)
    }

    pub fn expand(&mut self) {
        self.expanded = true;
    }

    pub fn collapse(&mut self) {
        self.expanded = false;
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn delete_state(&self) -> DeleteState {
        self.delete
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notice.current()
    }

    /// Open the confirmation prompt.
    pub fn request_delete(&mut self) -> bool {
        if self.delete != DeleteState::Idle {
            return false;
        }
        self.delete = DeleteState::Confirming;
        true
    }

    /// Close the prompt; refused while the request is in flight.
    pub fn cancel_delete(&mut self) -> bool {
        if self.delete != DeleteState::Confirming {
            return false;
        }
        self.delete = DeleteState::Idle;
        true
    }

    /// Confirm the prompt and lock the card until [`PostCard::finish_delete`].
    pub fn begin_delete(&mut self) -> Option<PostId> {
        if self.delete != DeleteState::Confirming {
            return None;
        }
        self.delete = DeleteState::Deleting;
        Some(self.post.id.clone())
    }

    /// Apply the server's answer. `on_deleted` runs only after a confirmed delete.
    pub fn finish_delete<F>(&mut self, result: Result<(), ApiError>, on_deleted: F) -> DeleteOutcome
    where
        F: FnOnce(&PostId),
    {
        if self.delete != DeleteState::Deleting {
            return DeleteOutcome::NotConfirming;
        }
        self.delete = DeleteState::Idle;

        match result {
            Ok(()) => {
                info!(id = %self.post.id, "blog deleted");
                on_deleted(&self.post.id);
                DeleteOutcome::Deleted
            }
            Err(err) => {
                warn!(id = %self.post.id, error = %err, "deleting blog failed");
                self.notice
                    .show(Notice::error(format!("Failed to delete blog: {err}")));
                DeleteOutcome::Failed
            }
        }
    }

    pub async fn confirm_delete<A, F>(&mut self, api: &A, on_deleted: F) -> DeleteOutcome
    where
        A: BlogApi + ?Sized,
        F: FnOnce(&PostId),
    {
        let Some(id) = self.begin_delete() else {
            return DeleteOutcome::NotConfirming;
        };
        let result = api.delete_post(&id).await;
        self.finish_delete(result, on_deleted)
    }
}

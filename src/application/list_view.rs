//! The post list: one fetch per load, local removal after confirmed deletes.

use std::collections::HashSet;
use std::time::Duration;

use blogfront_api_types::{Post, PostId};
use tracing::{info, warn};

use crate::infra::api::{ApiError, BlogApi};

use super::notifications::{Notice, TransientNotice};

pub const DELETED_MESSAGE: &str = "Blog deleted successfully!";
pub const EMPTY_MESSAGE: &str = "No blogs found. Be the first to create one!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListState {
    Loading,
    Ready(Vec<Post>),
    Failed(String),
}

#[derive(Debug)]
pub struct ListView {
    state: ListState,
    notice: TransientNotice,
}

impl ListView {
    pub fn new(notice_ttl: Duration) -> Self {
        Self {
            state: ListState::Loading,
            notice: TransientNotice::new(notice_ttl),
        }
    }

    /// Fetch the full collection once. Failures are kept, never retried.
    pub async fn load<A>(&mut self, api: &A) -> &ListState
    where
        A: BlogApi + ?Sized,
    {
        self.state = ListState::Loading;
        self.state = match api.list_posts().await {
            Ok(posts) => {
                let posts = dedupe(posts);
                info!(count = posts.len(), "blogs loaded");
                ListState::Ready(posts)
            }
            Err(err) => ListState::Failed(load_failure_message(&err)),
        };
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ListState::Loading)
    }

    pub fn posts(&self) -> &[Post] {
        match &self.state {
            ListState::Ready(posts) => posts.as_slice(),
            ListState::Loading | ListState::Failed(_) => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            ListState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn find(&self, id: &PostId) -> Option<&Post> {
        self.posts().iter().find(|post| &post.id == id)
    }

    /// Drop `id` after the server confirmed its deletion.
    ///
    /// Returns whether an entry was removed; an unknown id leaves the list as is.
    pub fn remove(&mut self, id: &PostId) -> bool {
        let removed = match &mut self.state {
            ListState::Ready(posts) => {
                let before = posts.len();
                posts.retain(|post| &post.id != id);
                posts.len() < before
            }
            ListState::Loading | ListState::Failed(_) => false,
        };
        self.notice.show(Notice::success(DELETED_MESSAGE));
        removed
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notice.current()
    }
}

fn load_failure_message(err: &ApiError) -> String {
    match err {
        ApiError::Rejected { .. } => err
            .server_message()
            .unwrap_or("Failed to fetch blogs")
            .to_string(),
        _ => format!("Failed to load blogs: {err}"),
    }
}

/// Keep the first entry for each id.
fn dedupe(posts: Vec<Post>) -> Vec<Post> {
    let mut seen = HashSet::with_capacity(posts.len());
    let total = posts.len();
    let unique: Vec<Post> = posts
        .into_iter()
        .filter(|post| seen.insert(post.id.clone()))
        .collect();
    if unique.len() < total {
        warn!(
            dropped = total - unique.len(),
            "server returned duplicate blog ids"
        );
    }
    unique
}

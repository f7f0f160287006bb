//! In-memory [`BlogApi`] for component tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use blogfront_api_types::{CreatePostRequest, Post, PostId};

use crate::infra::api::{ApiError, BlogApi};

pub(crate) fn post(id: &str) -> Post {
    Post {
        id: PostId::new(id),
        title: format!("Post {id}"),
        author: "Ann".into(),
        content: format!("Body of post {id}"),
        created_at: Some("2024-03-05T10:00:00Z".into()),
    }
}

#[derive(Default)]
struct State {
    posts: Vec<Post>,
    list_failures: VecDeque<ApiError>,
    create_failures: VecDeque<ApiError>,
    delete_failures: VecDeque<ApiError>,
    list_calls: usize,
    created: Vec<CreatePostRequest>,
    deleted: Vec<PostId>,
}

/// Queued failures are consumed one per call; otherwise calls succeed.
#[derive(Default)]
pub(crate) struct FakeApi {
    state: Mutex<State>,
}

impl FakeApi {
    pub(crate) fn with_posts(posts: Vec<Post>) -> Self {
        let api = Self::default();
        api.state().posts = posts;
        api
    }

    pub(crate) fn fail_list(&self, err: ApiError) {
        self.state().list_failures.push_back(err);
    }

    pub(crate) fn fail_create(&self, err: ApiError) {
        self.state().create_failures.push_back(err);
    }

    pub(crate) fn fail_delete(&self, err: ApiError) {
        self.state().delete_failures.push_back(err);
    }

    pub(crate) fn list_calls(&self) -> usize {
        self.state().list_calls
    }

    pub(crate) fn created(&self) -> Vec<CreatePostRequest> {
        self.state().created.clone()
    }

    pub(crate) fn deleted(&self) -> Vec<PostId> {
        self.state().deleted.clone()
    }

    fn state(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().expect("fake api state")
    }
}

#[async_trait]
impl BlogApi for FakeApi {
    async fn list_posts(&self) -> Result<Vec<Post>, ApiError> {
        let mut state = self.state();
        state.list_calls += 1;
        match state.list_failures.pop_front() {
            Some(err) => Err(err),
            None => Ok(state.posts.clone()),
        }
    }

    async fn create_post(&self, request: &CreatePostRequest) -> Result<(), ApiError> {
        let mut state = self.state();
        state.created.push(request.clone());
        match state.create_failures.pop_front() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    async fn delete_post(&self, id: &PostId) -> Result<(), ApiError> {
        let mut state = self.state();
        state.deleted.push(id.clone());
        if let Some(err) = state.delete_failures.pop_front() {
            return Err(err);
        }
        state.posts.retain(|post| &post.id != id);
        Ok(())
    }
}

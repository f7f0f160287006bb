//! REST collaborator: the remote blog API and its HTTP client.

mod client;
mod error;

use async_trait::async_trait;
use blogfront_api_types::{CreatePostRequest, Post, PostId};

pub use client::HttpBlogApi;
pub use error::{ApiError, ErrorKind};

/// Collection endpoint, relative to the configured base URL.
pub const COLLECTION_PATH: &str = "api/blogs";

#[async_trait]
pub trait BlogApi: Send + Sync {
    /// `GET /api/blogs`; a successful response without `data` is an empty list.
    async fn list_posts(&self) -> Result<Vec<Post>, ApiError>;

    /// `POST /api/blogs` with an already trimmed payload.
    async fn create_post(&self, request: &CreatePostRequest) -> Result<(), ApiError>;

    /// `DELETE /api/blogs/{id}`.
    async fn delete_post(&self, id: &PostId) -> Result<(), ApiError>;
}

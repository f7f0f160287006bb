use async_trait::async_trait;
use blogfront_api_types::{AckResponse, ApiEnvelope, CreatePostRequest, Post, PostId, PostListResponse};
use metrics::counter;
use reqwest::{
    Client, Method, RequestBuilder, Response,
    header::{ACCEPT, CONTENT_TYPE},
};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::infra::telemetry::API_REQUESTS_TOTAL;

use super::error::body_snippet;
use super::{ApiError, BlogApi, COLLECTION_PATH};

/// `reqwest`-backed [`BlogApi`].
#[derive(Clone, Debug)]
pub struct HttpBlogApi {
    client: Client,
    base: Url,
}

impl HttpBlogApi {
    /// Build a client rooted at `base_url`. Any path on the base is kept as a prefix.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let mut base = Url::parse(base_url.trim())?;
        if base.cannot_be_a_base() || !matches!(base.scheme(), "http" | "https") {
            return Err(ApiError::InvalidBase(base_url.to_string()));
        }
        base.set_query(None);
        base.set_fragment(None);
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let client = Client::builder()
            .user_agent(Self::user_agent())
            .build()
            .map_err(ApiError::Network)?;
        Ok(Self { client, base })
    }

    pub fn user_agent() -> &'static str {
        concat!("blogfront/", env!("CARGO_PKG_VERSION"))
    }

    pub fn collection_url(&self) -> Result<Url, ApiError> {
        self.base.join(COLLECTION_PATH).map_err(ApiError::Url)
    }

    pub fn item_url(&self, id: &PostId) -> Result<Url, ApiError> {
        let mut url = self.collection_url()?;
        url.path_segments_mut()
            .map_err(|()| ApiError::InvalidBase(self.base.to_string()))?
            .pop_if_empty()
            .push(id.as_str());
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.client
            .request(method, url)
            .header(ACCEPT, "application/json")
    }

    async fn send<T: DeserializeOwned>(
        &self,
        op: &'static str,
        request: RequestBuilder,
    ) -> Result<ApiEnvelope<T>, ApiError> {
        let result = match request.send().await {
            Ok(resp) => Self::handle(resp).await,
            Err(err) => Err(ApiError::Network(err)),
        };

        let outcome = match &result {
            Ok(_) => "success",
            Err(err) => err.kind().as_str(),
        };
        counter!(API_REQUESTS_TOTAL, "op" => op, "outcome" => outcome).increment(1);

        match &result {
            Ok(_) => debug!(op, "blog API request succeeded"),
            Err(err) => warn!(op, error = %err, kind = err.kind().as_str(), "blog API request failed"),
        }
        result
    }

    /// Non-JSON bodies are rejected before anything is decoded.
    async fn handle<T: DeserializeOwned>(resp: Response) -> Result<ApiEnvelope<T>, ApiError> {
        let status = resp.status();
        let is_json = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.contains("application/json"));
        let bytes = resp.bytes().await.map_err(ApiError::Network)?;

        if !is_json {
            return Err(ApiError::Parse {
                status,
                detail: body_snippet(&bytes),
            });
        }

        if !status.is_success() {
            let message = serde_json::from_slice::<AckResponse>(&bytes)
                .ok()
                .and_then(|envelope| envelope.message);
            return Err(ApiError::Status { status, message });
        }

        let envelope: ApiEnvelope<T> =
            serde_json::from_slice(&bytes).map_err(|err| ApiError::Parse {
                status,
                detail: format!("failed to parse body: {err}"),
            })?;

        if !envelope.success {
            return Err(ApiError::Rejected {
                status,
                message: envelope.message,
            });
        }
        Ok(envelope)
    }
}

#[async_trait]
impl BlogApi for HttpBlogApi {
    async fn list_posts(&self) -> Result<Vec<Post>, ApiError> {
        let url = self.collection_url()?;
        debug!(%url, "fetching blog collection");
        let envelope: PostListResponse = self.send("list", self.request(Method::GET, url)).await?;
        Ok(envelope.data.unwrap_or_default())
    }

    async fn create_post(&self, request: &CreatePostRequest) -> Result<(), ApiError> {
        let url = self.collection_url()?;
        debug!(%url, title = %request.title, "publishing blog");
        let _: AckResponse = self
            .send("create", self.request(Method::POST, url).json(request))
            .await?;
        Ok(())
    }

    async fn delete_post(&self, id: &PostId) -> Result<(), ApiError> {
        let url = self.item_url(id)?;
        debug!(%url, %id, "deleting blog");
        let _: AckResponse = self.send("delete", self.request(Method::DELETE, url)).await?;
        Ok(())
    }
}

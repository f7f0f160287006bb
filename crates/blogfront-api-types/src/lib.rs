//! Request and response shapes for the blog REST API.
//!
//! The server wraps every response in `{ success, data?, message? }`. Posts are
//! keyed by a server-assigned `_id` which may arrive as a string or a number.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Opaque, server-assigned post identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(from = "RawPostId")]
pub struct PostId(String);

impl PostId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PostId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for PostId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Serialize for PostId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPostId {
    Text(String),
    Integer(i64),
}

impl From<RawPostId> for PostId {
    fn from(raw: RawPostId) -> Self {
        match raw {
            RawPostId::Text(text) => Self(text),
            RawPostId::Integer(number) => Self(number.to_string()),
        }
    }
}

/// A post as returned by `GET /api/blogs`.
///
/// Text fields tolerate `null` or absence and decode as empty strings;
/// `created_at` keeps the raw server value and is only parsed for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(rename = "_id", alias = "id")]
    pub id: PostId,
    #[serde(default, deserialize_with = "nullable_string")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub author: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Body of `POST /api/blogs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub author: String,
    pub content: String,
}

/// Envelope shared by every endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

pub type PostListResponse = ApiEnvelope<Vec<Post>>;

/// Create and delete responses carry no payload the client relies on.
pub type AckResponse = ApiEnvelope<serde_json::Value>;

fn nullable_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_response_decodes_mongo_style_posts() {
        let body = r#"{
            "success": true,
            "data": [
                {"_id": "65f0c1", "title": "Hello", "author": "Ann", "content": "First post body", "createdAt": "2024-03-05T10:00:00.000Z", "__v": 0},
                {"_id": 7, "title": null, "content": "numeric id"}
            ]
        }"#;

        let parsed: PostListResponse = serde_json::from_str(body).expect("decode list");
        assert!(parsed.success);
        let posts = parsed.data.expect("data present");
        assert_eq!(posts[0].id.as_str(), "65f0c1");
        assert_eq!(
            posts[0].created_at.as_deref(),
            Some("2024-03-05T10:00:00.000Z")
        );
        assert_eq!(posts[1].id, PostId::new("7"));
        assert_eq!(posts[1].title, "");
        assert_eq!(posts[1].author, "");
        assert_eq!(posts[1].created_at, None);
    }

    #[test]
    fn plain_id_key_is_accepted() {
        let post: Post = serde_json::from_str(r#"{"id": "abc", "title": "t"}"#).expect("decode");
        assert_eq!(post.id.as_str(), "abc");
    }

    #[test]
    fn post_without_id_is_rejected() {
        let result = serde_json::from_str::<Post>(r#"{"title": "orphan"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn missing_success_flag_reads_as_failure() {
        let parsed: AckResponse = serde_json::from_str(r#"{"message": "nope"}"#).expect("decode");
        assert!(!parsed.success);
        assert_eq!(parsed.message.as_deref(), Some("nope"));
    }

    #[test]
    fn post_serializes_with_wire_keys() {
        let post = Post {
            id: PostId::new("1"),
            title: "t".into(),
            author: "a".into(),
            content: "c".into(),
            created_at: Some("2024-01-01".into()),
        };
        let value = serde_json::to_value(&post).expect("encode");
        assert_eq!(value["_id"], "1");
        assert_eq!(value["createdAt"], "2024-01-01");
    }
}

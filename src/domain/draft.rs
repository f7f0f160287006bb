//! Unsaved post drafts and their local validation.

use std::collections::BTreeMap;
use std::fmt;

use blogfront_api_types::CreatePostRequest;
use thiserror::Error;

pub const TITLE_MAX_CHARS: usize = 200;
pub const AUTHOR_MAX_CHARS: usize = 100;
pub const CONTENT_MIN_CHARS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Title,
    Author,
    Content,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Title, Field::Author, Field::Content];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Author => "author",
            Field::Content => "content",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Title => "Blog Title",
            Field::Author => "Author Name",
            Field::Content => "Blog Content",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-field validation messages, ordered by [`Field`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{} field(s) failed validation", .0.len())]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    pub fn clear(&mut self, field: Field) {
        self.0.remove(&field);
    }

    fn insert(&mut self, field: Field, message: &str) {
        self.0.insert(field, message.to_string());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub author: String,
    pub content: String,
}

impl PostDraft {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            content: content.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Author => &self.author,
            Field::Content => &self.content,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Title => &mut self.title,
            Field::Author => &mut self.author,
            Field::Content => &mut self.content,
        };
        *slot = value.into();
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_empty())
    }

    /// True when every field is non-empty after trimming.
    pub fn has_required_fields(&self) -> bool {
        Field::ALL
            .iter()
            .all(|field| !self.get(*field).trim().is_empty())
    }

    /// Validate the draft and produce the trimmed creation payload.
    pub fn validate(&self) -> Result<CreatePostRequest, FieldErrors> {
        let title = self.title.trim();
        let author = self.author.trim();
        let content = self.content.trim();

        let mut errors = FieldErrors::default();

        if title.is_empty() {
            errors.insert(Field::Title, "Title is required");
        } else if title.chars().count() > TITLE_MAX_CHARS {
            errors.insert(Field::Title, "Title must be less than 200 characters");
        }

        if author.is_empty() {
            errors.insert(Field::Author, "Author name is required");
        } else if author.chars().count() > AUTHOR_MAX_CHARS {
            errors.insert(
                Field::Author,
                "Author name must be less than 100 characters",
            );
        }

        if content.is_empty() {
            errors.insert(Field::Content, "Blog content is required");
        } else if content.chars().count() < CONTENT_MIN_CHARS {
            errors.insert(
                Field::Content,
                "Content must be at least 10 characters long",
            );
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(CreatePostRequest {
            title: title.to_string(),
            author: author.to_string(),
            content: content.to_string(),
        })
    }

    /// Character counter shown under each input.
    pub fn counter(&self, field: Field) -> String {
        let count = self.get(field).chars().count();
        match field {
            Field::Title => format!("{count}/{TITLE_MAX_CHARS} characters"),
            Field::Author => format!("{count}/{AUTHOR_MAX_CHARS} characters"),
            Field::Content => format!("Minimum {CONTENT_MIN_CHARS} characters ({count} entered)"),
        }
    }
}

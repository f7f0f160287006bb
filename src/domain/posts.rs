//! Display rules for posts held in the client-side list.

use std::borrow::Cow;

use blogfront_api_types::Post;
use time::{
    Date, OffsetDateTime,
    format_description::{BorrowedFormatItem, well_known::Rfc3339},
    macros::format_description,
};

pub const HUMAN_DATE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[month repr:long] [day padding:none], [year]");
const BARE_DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

pub const DEFAULT_PREVIEW_CHARS: usize = 150;
pub const ELLIPSIS: &str = "...";

pub const MISSING_TITLE: &str = "No Title";
pub const MISSING_AUTHOR: &str = "Unknown Author";
pub const MISSING_CONTENT: &str = "No content available";
pub const MISSING_DATE: &str = "Unknown date";
pub const INVALID_DATE: &str = "Invalid date";

/// Cut `content` to at most `budget` characters, marking the cut with [`ELLIPSIS`].
pub fn preview(content: &str, budget: usize) -> Cow<'_, str> {
    match content.char_indices().nth(budget) {
        None => Cow::Borrowed(content),
        Some((cut, _)) => Cow::Owned(format!("{}{ELLIPSIS}", &content[..cut])),
    }
}

pub fn display_title(post: &Post) -> &str {
    non_empty_or(&post.title, MISSING_TITLE)
}

pub fn display_author(post: &Post) -> &str {
    non_empty_or(&post.author, MISSING_AUTHOR)
}

pub fn display_content(post: &Post) -> &str {
    non_empty_or(&post.content, MISSING_CONTENT)
}

/// `By <author> • <date>`
pub fn byline(post: &Post) -> String {
    format!(
        "By {} • {}",
        display_author(post),
        format_created_at(post.created_at.as_deref())
    )
}

pub fn format_created_at(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
        return MISSING_DATE.to_string();
    };

    parse_created_at(raw)
        .and_then(|date| date.format(HUMAN_DATE_FORMAT).ok())
        .unwrap_or_else(|| INVALID_DATE.to_string())
}

fn parse_created_at(raw: &str) -> Option<Date> {
    OffsetDateTime::parse(raw, &Rfc3339)
        .map(OffsetDateTime::date)
        .or_else(|_| Date::parse(raw, BARE_DATE_FORMAT))
        .ok()
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use blogfront_api_types::PostId;

    use super::*;

    fn post(content: &str) -> Post {
        Post {
            id: PostId::new("1"),
            title: String::new(),
            author: "   ".into(),
            content: content.into(),
            created_at: None,
        }
    }

    #[test]
    fn short_content_is_shown_verbatim() {
        let exact = "x".repeat(DEFAULT_PREVIEW_CHARS);
        assert!(matches!(
            preview(&exact, DEFAULT_PREVIEW_CHARS),
            Cow::Borrowed(_)
        ));
        assert_eq!(preview("short", DEFAULT_PREVIEW_CHARS), "short");
    }

    #[test]
    fn long_content_is_cut_at_budget_with_ellipsis() {
        let long = format!("{}{}", "a".repeat(150), "tail");
        let cut = preview(&long, DEFAULT_PREVIEW_CHARS);
        assert_eq!(cut.len(), 153);
        assert!(cut.starts_with(&"a".repeat(150)));
        assert!(cut.ends_with(ELLIPSIS));
    }

    #[test]
    fn preview_counts_characters_not_bytes() {
        let long = "é".repeat(151);
        let cut = preview(&long, DEFAULT_PREVIEW_CHARS);
        assert_eq!(cut.chars().count(), 153);
        assert_eq!(cut.chars().filter(|c| *c == 'é').count(), 150);
    }

    #[test]
    fn missing_fields_fall_back_to_placeholders() {
        let post = post("");
        assert_eq!(display_title(&post), MISSING_TITLE);
        assert_eq!(display_author(&post), MISSING_AUTHOR);
        assert_eq!(display_content(&post), MISSING_CONTENT);
        assert_eq!(byline(&post), "By Unknown Author • Unknown date");
    }

    #[test]
    fn created_at_formats_as_long_date() {
        assert_eq!(
            format_created_at(Some("2024-03-05T10:00:00.000Z")),
            "March 5, 2024"
        );
        assert_eq!(format_created_at(Some("2023-12-31")), "December 31, 2023");
    }

    #[test]
    fn created_at_reports_missing_and_invalid() {
        assert_eq!(format_created_at(None), MISSING_DATE);
        assert_eq!(format_created_at(Some("  ")), MISSING_DATE);
        assert_eq!(format_created_at(Some("yesterday")), INVALID_DATE);
    }
}

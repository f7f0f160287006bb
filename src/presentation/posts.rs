use askama::Template;
use blogfront_api_types::Post;

use crate::application::{
    create_form::CreateForm,
    list_view::{EMPTY_MESSAGE, ListView},
    post_card::PostCard,
};
use crate::domain::{draft::Field, posts};

use super::views::NoticeView;

#[derive(Clone, Debug)]
pub struct PostCardView {
    pub id: String,
    pub title: String,
    pub byline: String,
    pub preview: String,
}

impl PostCardView {
    pub fn from_card(card: &PostCard) -> Self {
        let post = card.post();
        Self {
            id: post.id.to_string(),
            title: posts::display_title(post).to_string(),
            byline: posts::byline(post),
            preview: card.preview().into_owned(),
        }
    }
}

#[derive(Template)]
#[template(path = "posts/list.txt")]
pub struct PostListView {
    pub error: Option<String>,
    pub cards: Vec<PostCardView>,
    pub empty_message: &'static str,
    pub notice: Option<NoticeView>,
}

impl PostListView {
    /// `cards` are the list's current entries rendered through their cards.
    pub fn new(list: &ListView, cards: &[PostCard], notice: Option<NoticeView>) -> Self {
        Self {
            error: list.error().map(str::to_string),
            cards: cards.iter().map(PostCardView::from_card).collect(),
            empty_message: EMPTY_MESSAGE,
            notice: notice.or_else(|| list.notice().map(NoticeView::from)),
        }
    }
}

#[derive(Template)]
#[template(path = "posts/detail.txt")]
pub struct PostDetailView {
    pub id: String,
    pub title: String,
    pub byline: String,
    pub content: String,
}

impl PostDetailView {
    pub fn from_card(card: &PostCard) -> Self {
        let post: &Post = card.post();
        Self {
            id: post.id.to_string(),
            title: posts::display_title(post).to_string(),
            byline: posts::byline(post),
            content: card.full_content().to_string(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct FieldView {
    pub label: &'static str,
    pub hint: String,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "posts/create.txt")]
pub struct CreateFormView {
    pub notice: Option<NoticeView>,
    pub fields: Vec<FieldView>,
}

impl CreateFormView {
    /// Field hints are only shown when something needs fixing.
    pub fn new(form: &CreateForm) -> Self {
        let fields = if form.errors().is_empty() {
            Vec::new()
        } else {
            Field::ALL
                .iter()
                .map(|field| FieldView {
                    label: field.label(),
                    hint: form.draft().counter(*field),
                    error: form.errors().get(*field).map(str::to_string),
                })
                .collect()
        };

        Self {
            notice: form.message().map(NoticeView::from),
            fields,
        }
    }
}

/// Confirmation question shown before a delete request is sent.
pub fn delete_prompt(card: &PostCard) -> String {
    format!(
        "Delete \"{}\"? This cannot be undone. [y/N] ",
        posts::display_title(card.post())
    )
}

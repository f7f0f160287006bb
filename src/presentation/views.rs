use askama::{Error as AskamaError, Template};
use thiserror::Error;

use crate::application::notifications::Notice;

#[derive(Debug, Error)]
#[error("{public_message}")]
pub struct TemplateRenderError {
    pub(crate) origin: &'static str,
    pub(crate) public_message: &'static str,
    #[source]
    pub(crate) error: AskamaError,
}

impl TemplateRenderError {
    pub fn new(origin: &'static str, public_message: &'static str, error: AskamaError) -> Self {
        Self {
            origin,
            public_message,
            error,
        }
    }

    pub fn origin(&self) -> &'static str {
        self.origin
    }
}

pub fn render_template<T: Template>(template: &T) -> Result<String, TemplateRenderError> {
    template.render().map_err(|err| {
        TemplateRenderError::new(
            "presentation::views::render_template",
            "Template rendering failed",
            err,
        )
    })
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoticeView {
    pub label: &'static str,
    pub message: String,
}

impl From<Notice> for NoticeView {
    fn from(notice: Notice) -> Self {
        Self {
            label: notice.severity.as_str(),
            message: notice.message,
        }
    }
}

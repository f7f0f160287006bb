//! Terminal views rendered from askama text templates.

pub mod posts;
pub mod views;

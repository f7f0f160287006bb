pub mod draft;
pub mod error;
pub mod posts;

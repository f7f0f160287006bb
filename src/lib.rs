//! blogfront: list, read, publish and delete posts of a simple blogging site
//! over its REST API.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
pub mod presentation;

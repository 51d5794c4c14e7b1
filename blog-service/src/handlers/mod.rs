//! HTTP handlers for the blog service.

pub mod content;
pub mod health;
pub mod ideas;

//! blog-service: turns a topic into blog post ideas and expands a chosen
//! idea into full article content, backed by an LLM completion API with
//! deterministic template fallbacks.
pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;

//! Domain models for the blog service.

use serde::{Deserialize, Serialize};

/// A generated blog post idea: a candidate title/description pair.
///
/// Ideas are never mutated after creation; persistence (if any) happens on
/// the client side and is not this service's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Idea {
    /// Generator-assigned id, unique within a response.
    pub id: String,
    pub title: String,
    pub description: String,
    /// The topic the caller asked for, verbatim.
    pub topic: String,
}

/// Expanded article content plus its estimated reading time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedContent {
    /// Markdown-flavored prose.
    pub content: String,
    /// E.g. "4 min read".
    #[serde(rename = "readTime")]
    pub read_time: String,
}

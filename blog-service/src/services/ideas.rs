//! Blog idea generation pipeline.
//!
//! Builds the idea prompt, calls the completion provider, parses the model
//! output as JSON, and normalizes it to exactly [`IDEAS_PER_REQUEST`] ideas.
//! Upstream failures never escape: network errors, non-2xx responses, and
//! unparseable output are all absorbed by deterministic template ideas.

use crate::models::Idea;
use crate::services::metrics;
use crate::services::providers::{CompletionProvider, GenerationParams};
use chrono::Utc;
use serde::Deserialize;

/// Every response carries exactly this many ideas.
pub const IDEAS_PER_REQUEST: usize = 5;

const SYSTEM_PROMPT: &str = "You are a creative content strategist who generates \
engaging blog post ideas. Always respond with valid JSON only.";

/// Partially-validated idea as produced by the model.
#[derive(Debug, Deserialize)]
struct IdeaDraft {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

/// The model is asked for an array but occasionally returns a single object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DraftPayload {
    Many(Vec<IdeaDraft>),
    One(IdeaDraft),
}

fn build_prompt(topic: &str) -> String {
    format!(
        "Generate 5 creative and engaging blog post ideas for the topic \"{topic}\".\n\
         For each idea, provide:\n\
         1. A compelling title (50-80 characters)\n\
         2. A detailed description (150-200 characters) that explains what the blog post would cover\n\
         \n\
         Make the ideas diverse, actionable, and valuable to readers interested in {topic}.\n\
         Return the response as a JSON array with objects containing \"title\" and \"description\" fields."
    )
}

/// Deterministic title/description templates used when the model call or
/// parse fails, or to pad a short model response.
fn template_ideas(topic: &str) -> [(String, String); IDEAS_PER_REQUEST] {
    [
        (
            format!("Ultimate Guide to {topic}"),
            format!("A comprehensive guide covering everything you need to know about {topic}, from basics to advanced techniques."),
        ),
        (
            format!("Top 10 {topic} Tips for Beginners"),
            format!("Essential tips and tricks to help newcomers get started with {topic} and avoid common mistakes."),
        ),
        (
            format!("{topic} Trends to Watch This Year"),
            format!("Stay ahead of the curve with the latest trends and developments in the {topic} industry."),
        ),
        (
            format!("Common {topic} Mistakes and How to Avoid Them"),
            format!("Learn from others' experiences and avoid these costly mistakes in your {topic} journey."),
        ),
        (
            format!("The Future of {topic}: What Experts Predict"),
            format!("Industry experts share their insights on where {topic} is heading and what it means for you."),
        ),
    ]
}

/// Parse the model text strictly as idea drafts.
///
/// A bare object is wrapped into a one-element list; anything else that is
/// not valid JSON in the requested shape is a parse failure, with no
/// partial recovery.
fn parse_drafts(text: &str) -> Result<Vec<IdeaDraft>, serde_json::Error> {
    let payload: DraftPayload = serde_json::from_str(text)?;

    Ok(match payload {
        DraftPayload::Many(drafts) => drafts,
        DraftPayload::One(draft) => vec![draft],
    })
}

/// Coerce drafts to exactly [`IDEAS_PER_REQUEST`] ideas: truncate extras,
/// pad missing positions from the template list, fill per-entry gaps, and
/// stamp each idea with a fresh id and the requested topic.
fn normalize(mut drafts: Vec<IdeaDraft>, topic: &str) -> Vec<Idea> {
    drafts.truncate(IDEAS_PER_REQUEST);

    let templates = template_ideas(topic);
    let millis = Utc::now().timestamp_millis();

    (0..IDEAS_PER_REQUEST)
        .map(|index| {
            let id = format!("generated_{}_{}", millis, index);

            match drafts.get(index) {
                Some(draft) => Idea {
                    id,
                    title: draft
                        .title
                        .clone()
                        .filter(|t| !t.is_empty())
                        .unwrap_or_else(|| format!("{} Blog Idea {}", topic, index + 1)),
                    description: draft
                        .description
                        .clone()
                        .filter(|d| !d.is_empty())
                        .unwrap_or_else(|| format!("An interesting blog post about {}.", topic)),
                    topic: topic.to_string(),
                },
                None => {
                    let (title, description) = &templates[index];
                    Idea {
                        id,
                        title: title.clone(),
                        description: description.clone(),
                        topic: topic.to_string(),
                    }
                }
            }
        })
        .collect()
}

/// Generate exactly five ideas for `topic`.
///
/// Input validation belongs to the caller; this function itself never
/// errors, falling back to template ideas on any upstream failure.
pub async fn generate(provider: &dyn CompletionProvider, topic: &str) -> Vec<Idea> {
    let params = GenerationParams {
        temperature: Some(0.8),
        max_tokens: Some(1000),
    };

    let started = std::time::Instant::now();
    let drafts = match provider
        .complete(SYSTEM_PROMPT, &build_prompt(topic), &params)
        .await
    {
        Ok(text) => {
            metrics::record_provider_latency(provider.name(), started.elapsed().as_secs_f64());

            match parse_drafts(&text) {
                Ok(drafts) => {
                    metrics::record_generation("ideas", "model");
                    drafts
                }
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        "Model output was not valid idea JSON, using template ideas"
                    );
                    metrics::record_generation("ideas", "fallback");
                    Vec::new()
                }
            }
        }
        Err(e) => {
            tracing::warn!(
                error = %e,
                kind = e.kind(),
                "Completion call failed, using template ideas"
            );
            metrics::record_provider_error(provider.name(), e.kind());
            metrics::record_generation("ideas", "fallback");
            Vec::new()
        }
    };

    normalize(drafts, topic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::providers::mock::MockCompletionProvider;
    use serde_json::json;

    #[test]
    fn parse_accepts_an_array_of_ideas() {
        let text = json!([
            {"title": "A", "description": "a"},
            {"title": "B", "description": "b"},
        ])
        .to_string();

        let drafts = parse_drafts(&text).unwrap();
        assert_eq!(drafts.len(), 2);
        assert_eq!(drafts[0].title.as_deref(), Some("A"));
    }

    #[test]
    fn parse_wraps_a_bare_object() {
        let text = json!({"title": "Solo", "description": "only one"}).to_string();

        let drafts = parse_drafts(&text).unwrap();
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].title.as_deref(), Some("Solo"));
    }

    #[test]
    fn parse_rejects_prose_and_non_object_json() {
        assert!(parse_drafts("Sure! Here are five ideas:").is_err());
        assert!(parse_drafts("[\"just\", \"strings\"]").is_err());
        assert!(parse_drafts("42").is_err());
    }

    #[test]
    fn normalize_truncates_to_five() {
        let drafts = (0..7)
            .map(|i| IdeaDraft {
                title: Some(format!("Idea {i}")),
                description: Some(format!("Description {i}")),
            })
            .collect();

        let ideas = normalize(drafts, "chess");
        assert_eq!(ideas.len(), IDEAS_PER_REQUEST);
        assert_eq!(ideas[4].title, "Idea 4");
    }

    #[test]
    fn normalize_pads_short_lists_from_templates() {
        let drafts = vec![IdeaDraft {
            title: Some("Only one".to_string()),
            description: Some("Just this".to_string()),
        }];

        let ideas = normalize(drafts, "chess");
        assert_eq!(ideas.len(), IDEAS_PER_REQUEST);
        assert_eq!(ideas[0].title, "Only one");
        assert_eq!(ideas[1].title, "Top 10 chess Tips for Beginners");
        assert_eq!(ideas[4].title, "The Future of chess: What Experts Predict");
    }

    #[test]
    fn normalize_fills_missing_fields_and_stamps_topic() {
        let drafts = vec![
            IdeaDraft {
                title: None,
                description: Some("desc".to_string()),
            },
            IdeaDraft {
                title: Some("t".to_string()),
                description: None,
            },
        ];

        let ideas = normalize(drafts, "chess");
        assert_eq!(ideas[0].title, "chess Blog Idea 1");
        assert_eq!(ideas[1].description, "An interesting blog post about chess.");
        assert!(ideas.iter().all(|i| i.topic == "chess"));
    }

    #[test]
    fn normalize_assigns_unique_ids() {
        let ideas = normalize(Vec::new(), "chess");
        let mut ids: Vec<_> = ideas.iter().map(|i| i.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), IDEAS_PER_REQUEST);
    }

    #[tokio::test]
    async fn failing_provider_yields_five_template_ideas() {
        let provider = MockCompletionProvider::failing();

        let ideas = generate(&provider, "knitting").await;
        assert_eq!(ideas.len(), IDEAS_PER_REQUEST);
        assert_eq!(ideas[0].title, "Ultimate Guide to knitting");
        assert!(ideas.iter().all(|i| i.topic == "knitting"));
    }

    #[tokio::test]
    async fn unparseable_model_output_yields_template_ideas() {
        let provider = MockCompletionProvider::respond_with("I'd be happy to help!");

        let ideas = generate(&provider, "knitting").await;
        assert_eq!(ideas.len(), IDEAS_PER_REQUEST);
        assert_eq!(ideas[0].title, "Ultimate Guide to knitting");
    }
}

//! Article content expansion pipeline.
//!
//! Classifies the topic once into a [`TopicCategory`], builds a long-form
//! prompt with category-specific guidance, and falls back to a
//! hand-authored template in the same category when the completion call
//! fails or returns nothing usable.

use crate::models::GeneratedContent;
use crate::services::metrics;
use crate::services::providers::{CompletionProvider, GenerationParams};

const SYSTEM_PROMPT: &str = "You are a professional content writer who creates \
engaging, informative blog posts. Write in a clear, accessible style that \
provides real value to readers.";

/// Reading speed used for the `readTime` estimate.
const WORDS_PER_MINUTE: usize = 200;

/// Fixed estimate attached to template fallback content.
const FALLBACK_READ_TIME: &str = "3 min read";

const TRAVEL_KEYWORDS: &[&str] = &["travel", "egypt", "destination"];
const TECHNICAL_KEYWORDS: &[&str] = &["tech", "programming", "software", "medicine", "computer"];

/// Three-way topic classification, computed once per request and threaded
/// through both prompt construction and fallback selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopicCategory {
    Travel,
    Technical,
    General,
}

impl TopicCategory {
    /// Case-insensitive substring classification of the request topic.
    pub fn classify(topic: Option<&str>) -> Self {
        let Some(topic) = topic else {
            return TopicCategory::General;
        };
        let lowered = topic.to_lowercase();

        if TRAVEL_KEYWORDS.iter().any(|k| lowered.contains(k)) {
            TopicCategory::Travel
        } else if TECHNICAL_KEYWORDS.iter().any(|k| lowered.contains(k)) {
            TopicCategory::Technical
        } else {
            TopicCategory::General
        }
    }
}

fn build_prompt(
    title: &str,
    description: &str,
    topic: Option<&str>,
    category: TopicCategory,
) -> String {
    let topic_label = topic.unwrap_or("General");

    let guidance = match category {
        TopicCategory::Travel => {
            "- Name specific landmarks, neighborhoods, and places worth visiting\n\
             - Cover local customs and etiquette travelers should know about\n\
             - Offer practical advice on transport, timing, and budgeting"
        }
        TopicCategory::Technical => {
            "- Include short code snippets or configuration examples where they help\n\
             - Name concrete tools, libraries, and studies rather than speaking generally\n\
             - Explain trade-offs and common pitfalls practitioners run into"
        }
        TopicCategory::General => {
            "- Reference named companies, statistics, and expert opinions\n\
             - Ground every recommendation in a concrete example\n\
             - Keep the advice actionable for a general audience"
        }
    };

    format!(
        "Write a comprehensive, engaging blog post based on the following:\n\
         \n\
         Title: \"{title}\"\n\
         Description: \"{description}\"\n\
         Topic: \"{topic_label}\"\n\
         \n\
         Requirements:\n\
         - Write a complete blog post of 400-800 words\n\
         - Use a professional, engaging tone\n\
         - Structure with clear headings and subheadings\n\
         - Use markdown formatting for headings (## for h2, ### for h3)\n\
         - Include an introduction, main content sections, and conclusion\n\
         {guidance}\n\
         \n\
         Write the blog post content only, without any meta information or explanations."
    )
}

/// `"{n} min read"` at 200 words per minute, rounded up. Callers guarantee
/// non-blank content, so the count is at least one word.
fn estimate_read_time(content: &str) -> String {
    let words = content.split_whitespace().count();
    let minutes = words.div_ceil(WORDS_PER_MINUTE);
    format!("{} min read", minutes)
}

/// Expand an idea into full article content.
///
/// Never errors: upstream failures select a category-matched template
/// instead. Fallback output is a pure function of (title, description,
/// topic), so identical failed requests produce identical content.
pub async fn expand(
    provider: &dyn CompletionProvider,
    title: &str,
    description: &str,
    topic: Option<&str>,
) -> GeneratedContent {
    let category = TopicCategory::classify(topic);
    let params = GenerationParams {
        temperature: Some(0.7),
        max_tokens: Some(1200),
    };
    let prompt = build_prompt(title, description, topic, category);

    let started = std::time::Instant::now();
    match provider.complete(SYSTEM_PROMPT, &prompt, &params).await {
        Ok(text) if !text.trim().is_empty() => {
            metrics::record_provider_latency(provider.name(), started.elapsed().as_secs_f64());
            metrics::record_generation("content", "model");

            let read_time = estimate_read_time(&text);
            GeneratedContent {
                content: text,
                read_time,
            }
        }
        Ok(_) => {
            tracing::warn!(category = ?category, "Model returned empty content, using template");
            metrics::record_generation("content", "fallback");
            fallback(category, title, description, topic)
        }
        Err(e) => {
            tracing::warn!(
                error = %e,
                kind = e.kind(),
                category = ?category,
                "Completion call failed, using template content"
            );
            metrics::record_provider_error(provider.name(), e.kind());
            metrics::record_generation("content", "fallback");
            fallback(category, title, description, topic)
        }
    }
}

fn fallback(
    category: TopicCategory,
    title: &str,
    description: &str,
    topic: Option<&str>,
) -> GeneratedContent {
    let content = match category {
        TopicCategory::Travel => travel_template(title, description, topic),
        TopicCategory::Technical => technical_template(title, description, topic),
        TopicCategory::General => general_template(title, description, topic),
    };

    GeneratedContent {
        content,
        read_time: FALLBACK_READ_TIME.to_string(),
    }
}

fn travel_template(title: &str, description: &str, topic: Option<&str>) -> String {
    let destination = topic.unwrap_or("your destination");

    format!(
        r"## Introduction

{description}

Few things compare with arriving somewhere new. This guide to {destination} walks through the planning that makes a trip work: the landmarks worth your time, the local customs that shape daily life, and the practical details that keep the days running smoothly.

## Planning Your Trip

### When to Go

Seasons change everything about {destination}: prices, crowds, and what is actually open. Check the shoulder seasons first, when the weather still cooperates but the main sights are not overrun.

### Landmarks Worth Your Time

Every destination has its headline attractions, and they are usually famous for good reason. Build your days around one or two major landmarks, then leave room for the smaller neighborhoods around them:

- Arrive at the most popular sites early, before the tour groups
- Book timed entries in advance where they exist
- Pair each big landmark with a nearby market, park, or cafe street
- Ask locals which viewpoints they actually use

## Local Customs and Etiquette

Understanding local customs is the difference between visiting a place and experiencing it. Learn the basic greetings, how tipping works, and what dress is expected at religious sites. Small gestures of respect open doors everywhere:

- Learn a handful of phrases in the local language
- Observe how locals queue, order, and pay before jumping in
- Ask before photographing people or private property
- Respect quiet hours and prayer times

## Getting Around

Research transport options before you land. Many destinations have day passes that beat single tickets, and ride apps are not always cheaper than a licensed taxi from the airport. Walking remains the best way to understand how a city fits together.

## Eating and Drinking

Skip the restaurants facing the main square and walk two streets back. Markets and street food are where the local food culture actually lives, and they are kinder to a travel budget. If the water is not safe to drink, stick to sealed bottles and skip the ice.

## Budgeting and Safety

Carry a mix of payment methods, keep copies of your documents separate from the originals, and know the location of your country's nearest consulate. Travel insurance feels optional until the day it is not.

## Conclusion

{title} starts long before the flight: the research, the route, and a little cultural homework are what turn a checklist of landmarks into a trip you will actually remember. Pack light, stay curious, and leave space in the itinerary for the unplanned.

Safe travels!"
    )
}

fn technical_template(title: &str, description: &str, topic: Option<&str>) -> String {
    let field = topic.unwrap_or("this technology");

    format!(
        r"## Introduction

{description}

This article takes a practical look at {field}: the core concepts, the tools practitioners actually reach for, and the pitfalls that studies and postmortems keep surfacing.

## Core Concepts

Before touching tools, get the fundamentals straight. Most problems in {field} trace back to a skipped basic, not a missing advanced technique. Work through the official documentation's getting-started path once, end to end, before customizing anything.

### A Minimal Working Example

Start from the smallest thing that runs and grow it:

```
# start small, verify each step
setup      # install the toolchain
run        # execute the minimal example
test       # confirm the expected output
```

The point of a minimal example is not the output, it is the feedback loop. Once the loop is fast, every later experiment gets cheaper.

## Tools of the Trade

Pick boring, well-maintained tools and learn them deeply:

- **Version control** for everything, including configuration and scripts
- **An editor or IDE** with language support for {field}
- **A test runner** wired into your build from day one
- **A formatter and linter** so style debates end at the repository

Industry surveys consistently show that teams standardizing on a small, shared toolchain ship faster than teams where every member maintains a bespoke setup.

## Common Pitfalls

### Skipping Tests

Untested code is unfinished code. Write the first test before the first refactor, not after the first incident.

### Premature Optimization

Measure first. Profilers disagree with intuition often enough that optimizing without data usually means optimizing the wrong thing.

### Ignoring Errors

Error paths are part of the interface. Handle them explicitly, log them with context, and make the failure mode obvious to the next person reading the code.

## Leveling Up

Read other people's code in {field}, especially well-regarded open source projects. Reproduce results from talks and papers instead of only reading them. Explaining a concept to someone else remains the fastest known test of whether you understand it.

## Conclusion

{title} is less about any single tool and more about the habits around it: small verified steps, honest measurement, and code the next reader can follow. Master the fundamentals, automate the boring parts, and the advanced material follows naturally.

Happy building!"
    )
}

fn general_template(title: &str, description: &str, topic: Option<&str>) -> String {
    let subject = topic.unwrap_or("this subject");
    let title_lower = title.to_lowercase();

    format!(
        r"## Introduction

{description}

In this comprehensive guide, we'll explore everything you need to know about this topic. Whether you're a beginner just starting out or an experienced professional looking to expand your knowledge, this article will provide valuable insights and practical tips.

## Understanding the Fundamentals

When it comes to {subject}, having a solid foundation is crucial for success. The fundamental principles are built on proven methodologies and best practices that have been refined over time. Understanding these principles will help you:

- Make informed decisions
- Avoid common pitfalls
- Build sustainable solutions
- Achieve better results

### Practical Applications

Theory is important, but real-world application is where the magic happens. Here are some ways you can apply these concepts in practice:

**Strategy 1: Start Small**
Begin with manageable projects that allow you to practice and refine your skills without overwhelming complexity.

**Strategy 2: Learn from Others**
Study successful examples in your field and analyze what makes them effective. Industry experts consistently point to imitation-then-iteration as the fastest route to competence.

**Strategy 3: Iterate and Improve**
Don't expect perfection from the start. Embrace the process of continuous improvement.

## Best Practices and Tips

Based on industry experience and research, here are some proven strategies that can help you achieve better results:

### Planning and Preparation

- Set clear, measurable goals
- Research thoroughly before starting
- Create a realistic timeline
- Prepare for potential challenges

### Execution and Implementation

- Focus on quality over quantity
- Test and validate your approach
- Gather feedback early and often
- Stay flexible and adapt as needed

## Common Challenges and Solutions

Every journey has its obstacles. Here are some common challenges you might face and how to overcome them:

**Challenge**: Information overload
**Solution**: Focus on one concept at a time and practice before moving on to the next topic.

**Challenge**: Lack of practical experience
**Solution**: Start with small projects and gradually take on more complex challenges.

**Challenge**: Staying motivated
**Solution**: Set small milestones and celebrate achievements along the way.

## Future Trends and Opportunities

The landscape of {subject} is constantly evolving. Staying ahead of trends can give you a competitive advantage:

- Emerging technologies and tools
- Changing user expectations
- New methodologies and frameworks
- Statistics and benchmarks published by companies in the space

## Conclusion

Mastering {title_lower} requires dedication, practice, and continuous learning. By following the strategies outlined in this guide and staying committed to your goals, you'll be well on your way to success.

Remember that everyone's journey is unique. What works for one person may not work for another, so don't be afraid to adapt these suggestions to fit your specific situation and learning style.

Keep experimenting, stay curious, and most importantly, enjoy the process of learning and growing in this exciting field."
    )
}

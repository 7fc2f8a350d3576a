//! Cache-then-generate-then-store pipeline for learning content and quizzes.
//!
//! Explanation and analogy for a topic are generated concurrently and joined;
//! if either fails the whole request fails. Two requests racing on the same
//! uncached key may both generate and both store. The last write wins and
//! both callers get a complete result.

use std::sync::Arc;
use tracing::debug;

use crate::cache::{cache_key, ResultCache};
use crate::error::Result;
use crate::providers::GenerationClient;
use crate::utils::markdown::{format_explanation, normalize_markdown};

use super::prompts::{analogy_prompt, explanation_prompt, quiz_prompt};
use super::quiz::extract_quiz;
use super::{LearningContent, QuizResponse};

/// Cache kind for explanation + analogy results.
pub const CONTENT_KIND: &str = "content";
/// Cache kind for quiz results.
pub const QUIZ_KIND: &str = "quiz";

/// Orchestrates generation, post-processing and caching.
pub struct ContentPipeline {
    client: GenerationClient,
    cache: Arc<ResultCache>,
}

impl ContentPipeline {
    pub fn new(client: GenerationClient, cache: Arc<ResultCache>) -> Self {
        Self { client, cache }
    }

    pub fn cache(&self) -> &Arc<ResultCache> {
        &self.cache
    }

    /// Explanation and analogy for `topic`, served from cache when fresh.
    pub async fn get_or_create_content(&self, topic: &str) -> Result<LearningContent> {
        let key = cache_key(topic, CONTENT_KIND);
        if let Some(content) = self.cached::<LearningContent>(&key) {
            return Ok(content);
        }

        debug!(topic = %topic, "Generating learning content");
        let (explanation, analogy) =
            tokio::try_join!(self.explanation(topic), self.analogy(topic))?;

        let content = LearningContent {
            topic: topic.to_string(),
            explanation: Some(explanation),
            analogy: Some(analogy),
        };
        self.cache.put(key, serde_json::to_value(&content)?);
        Ok(content)
    }

    /// Quiz for `topic` at `difficulty`, served from cache when fresh.
    pub async fn get_or_create_quiz(&self, topic: &str, difficulty: &str) -> Result<QuizResponse> {
        let key = cache_key(&format!("{topic}:{difficulty}"), QUIZ_KIND);
        if let Some(quiz) = self.cached::<QuizResponse>(&key) {
            return Ok(quiz);
        }

        debug!(topic = %topic, difficulty = %difficulty, "Generating quiz");
        let raw = self.client.generate(&quiz_prompt(topic, difficulty)).await?;
        let quiz = QuizResponse {
            questions: extract_quiz(&raw)?,
        };
        self.cache.put(key, serde_json::to_value(&quiz)?);
        Ok(quiz)
    }

    async fn explanation(&self, topic: &str) -> Result<String> {
        let raw = self.client.generate(&explanation_prompt(topic)).await?;
        Ok(format_explanation(topic, &raw))
    }

    async fn analogy(&self, topic: &str) -> Result<String> {
        let raw = self.client.generate(&analogy_prompt(topic)).await?;
        Ok(normalize_markdown(&raw))
    }

    /// Fresh cached payload decoded as `T`. Undecodable payloads count as a miss.
    fn cached<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.cache.get(key)?;
        serde_json::from_value(value).ok()
    }
}

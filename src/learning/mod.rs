//! Learning material: data model, prompts, quiz parsing and the pipeline
//! that ties generation and caching together.

pub mod pipeline;
pub mod prompts;
pub mod quiz;

use serde::{Deserialize, Serialize};

pub use pipeline::ContentPipeline;
pub use quiz::{extract_quiz, QuizQuestion};

/// Explanation + analogy for one topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningContent {
    pub topic: String,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub analogy: Option<String>,
}

/// Questions generated for a topic at a given difficulty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResponse {
    pub questions: Vec<QuizQuestion>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_learning_content_accepts_topic_only() {
        let content: LearningContent = serde_json::from_str(r#"{"topic": "gravity"}"#).unwrap();
        assert_eq!(content.topic, "gravity");
        assert!(content.explanation.is_none());
        assert!(content.analogy.is_none());
    }

    #[test]
    fn test_quiz_response_wire_format() {
        let resp = QuizResponse {
            questions: vec![QuizQuestion {
                question: "Q".into(),
                options: vec!["A".into(), "B".into(), "C".into(), "D".into()],
                correct_index: 2,
                explanation: "E".into(),
            }],
        };
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(value["questions"][0]["correct_index"], 2);
        assert_eq!(value["questions"][0]["options"][3], "D");
    }
}

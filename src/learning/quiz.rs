//! Quiz extraction from free-form model output.
//!
//! The model is asked for bare JSON but often wraps it in a fenced block.
//! Unwrapping order:
//! 1. a block opened with ```` ```json ```` (up to the next fence, or the end),
//! 2. otherwise the inside of the first ```` ``` ```` fence,
//! 3. otherwise the whole text.
//!
//! The result must decode to an array of question objects. Anything else is a
//! [`TutorlyError::QuizParse`]; no repair is attempted.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TutorlyError};

const JSON_FENCE: &str = "```json";
const FENCE: &str = "```";

/// One multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    /// Answer options, normally four.
    pub options: Vec<String>,
    /// Index into `options` of the correct answer.
    pub correct_index: usize,
    pub explanation: String,
}

/// Pick the JSON candidate out of raw model text.
pub fn json_candidate(raw: &str) -> &str {
    if let Some(start) = raw.find(JSON_FENCE) {
        let rest = &raw[start + JSON_FENCE.len()..];
        let end = rest.find(FENCE).unwrap_or(rest.len());
        return rest[..end].trim();
    }
    if let Some(start) = raw.find(FENCE) {
        let rest = &raw[start + FENCE.len()..];
        let end = rest.find(FENCE).unwrap_or(rest.len());
        return rest[..end].trim();
    }
    raw.trim()
}

/// Extract quiz questions from raw model text.
pub fn extract_quiz(raw: &str) -> Result<Vec<QuizQuestion>> {
    let candidate = json_candidate(raw);
    let questions: Vec<QuizQuestion> =
        serde_json::from_str(candidate).map_err(|e| TutorlyError::QuizParse(e.to_string()))?;

    for (i, q) in questions.iter().enumerate() {
        if q.correct_index >= q.options.len() {
            return Err(TutorlyError::QuizParse(format!(
                "question {} has correct_index {} but only {} options",
                i + 1,
                q.correct_index,
                q.options.len()
            )));
        }
    }

    Ok(questions)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_QUESTION: &str = r#"[{"question":"Q","options":["A","B","C","D"],"correct_index":1,"explanation":"E"}]"#;

    #[test]
    fn test_extract_from_json_fence() {
        let raw = format!("```json\n{ONE_QUESTION}\n```");
        let questions = extract_quiz(&raw).unwrap();
        assert_eq!(questions.len(), 1);
        let q = &questions[0];
        assert_eq!(q.question, "Q");
        assert_eq!(q.options, vec!["A", "B", "C", "D"]);
        assert_eq!(q.correct_index, 1);
        assert_eq!(q.explanation, "E");
    }

    #[test]
    fn test_extract_json_fence_with_surrounding_prose() {
        let raw = format!("Here you go:\n```json\n{ONE_QUESTION}\n```\nGood luck!");
        assert_eq!(extract_quiz(&raw).unwrap().len(), 1);
    }

    #[test]
    fn test_extract_json_fence_without_closing() {
        let raw = format!("```json\n{ONE_QUESTION}\n");
        assert_eq!(extract_quiz(&raw).unwrap().len(), 1);
    }

    #[test]
    fn test_extract_from_plain_fence() {
        let raw = format!("```\n{ONE_QUESTION}\n```");
        assert_eq!(extract_quiz(&raw).unwrap()[0].question, "Q");
    }

    #[test]
    fn test_extract_bare_json() {
        let raw = format!("  \n{ONE_QUESTION}\n ");
        assert_eq!(extract_quiz(&raw).unwrap().len(), 1);
    }

    #[test]
    fn test_json_candidate_prefers_json_fence() {
        let raw = "```text\nnot it\n```\n```json\n[1]\n```";
        assert_eq!(json_candidate(raw), "[1]");
    }

    #[test]
    fn test_json_candidate_plain_fence_keeps_inner_only() {
        assert_eq!(json_candidate("a ``` [] ``` b"), "[]");
    }

    #[test]
    fn test_multiple_questions_keep_order() {
        let raw = r#"[
            {"question":"first","options":["a","b","c","d"],"correct_index":0,"explanation":"x"},
            {"question":"second","options":["a","b","c","d"],"correct_index":3,"explanation":"y"},
            {"question":"third","options":["a","b","c","d"],"correct_index":2,"explanation":"z"}
        ]"#;
        let questions = extract_quiz(raw).unwrap();
        let names: Vec<&str> = questions.iter().map(|q| q.question.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_truncated_json_is_parse_error() {
        let raw = r#"```json
[{"question":"Q","options":["A","B"#;
        assert!(matches!(extract_quiz(raw), Err(TutorlyError::QuizParse(_))));
    }

    #[test]
    fn test_non_array_json_is_parse_error() {
        let raw = r#"{"question":"Q","options":["A","B","C","D"],"correct_index":1,"explanation":"E"}"#;
        assert!(matches!(extract_quiz(raw), Err(TutorlyError::QuizParse(_))));
    }

    #[test]
    fn test_missing_field_is_parse_error() {
        let raw = r#"[{"question":"Q","options":["A","B","C","D"],"explanation":"E"}]"#;
        assert!(matches!(extract_quiz(raw), Err(TutorlyError::QuizParse(_))));
    }

    #[test]
    fn test_negative_index_is_parse_error() {
        let raw = r#"[{"question":"Q","options":["A","B","C","D"],"correct_index":-1,"explanation":"E"}]"#;
        assert!(matches!(extract_quiz(raw), Err(TutorlyError::QuizParse(_))));
    }

    #[test]
    fn test_out_of_range_index_is_parse_error() {
        let raw = r#"[{"question":"Q","options":["A","B","C","D"],"correct_index":4,"explanation":"E"}]"#;
        match extract_quiz(raw) {
            Err(TutorlyError::QuizParse(msg)) => assert!(msg.contains("correct_index 4")),
            other => panic!("expected QuizParse, got {other:?}"),
        }
    }

    #[test]
    fn test_option_count_not_enforced() {
        let raw = r#"[{"question":"Q","options":["yes","no"],"correct_index":1,"explanation":"E"}]"#;
        assert_eq!(extract_quiz(raw).unwrap()[0].options.len(), 2);
    }

    #[test]
    fn test_prose_only_is_parse_error() {
        assert!(matches!(
            extract_quiz("Sorry, I cannot make a quiz about that."),
            Err(TutorlyError::QuizParse(_))
        ));
    }

    #[test]
    fn test_empty_array_is_accepted() {
        assert!(extract_quiz("[]").unwrap().is_empty());
    }
}

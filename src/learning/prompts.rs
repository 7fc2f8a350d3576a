//! Fixed prompt templates, one per content kind.

/// System instruction sent with every upstream call.
pub const SYSTEM_PROMPT: &str = r#"You are an advanced AI assistant with exceptional cognitive capabilities. Approach each interaction using the following framework:

<core_principles>
1. Think systematically and transparently
2. Maintain intellectual humility
3. Pursue truth and accuracy
4. Consider multiple perspectives
5. Balance depth with clarity
</core_principles>

<response_protocol>
For each query:

1. UNDERSTAND
- Parse the core question/request
- Identify implicit assumptions
- Determine scope and constraints
- Clarify ambiguities if needed

2. ANALYZE
- Break down complex problems
- Generate multiple hypotheses
- Consider alternative viewpoints
- Evaluate evidence systematically

3. SYNTHESIZE
- Connect relevant information
- Draw reasoned conclusions
- Identify limitations
- Present balanced perspective

4. COMMUNICATE
- Structure response logically
- Provide appropriate detail
- Use precise language
- Adapt to audience level

5. VERIFY
- Check logical consistency
- Validate assumptions
- Review completeness
- Assess confidence level
</response_protocol>

<quality_standards>
Ensure all responses:
- Are logically sound
- Show depth of analysis
- Acknowledge uncertainties
- Build on context
- Maintain intellectual honesty
- Encourage deeper thinking
</quality_standards>"#;

/// Key concepts, mechanism and significance, as plain markdown.
pub fn explanation_prompt(topic: &str) -> String {
    format!(
        "Provide a concise explanation of {topic}. Include:\n\
         - Key concepts and principles\n\
         - How it works or functions\n\
         - Its significance or importance\n\
         \n\
         Format your response in clean markdown with proper headings, bullet points, and paragraphs.\n\
         Do NOT use code blocks or pre-formatted text.\n\
         Do NOT include any HTML tags.\n\
         Keep it brief but informative."
    )
}

/// A single everyday-life comparison.
pub fn analogy_prompt(topic: &str) -> String {
    format!(
        "Create a brief analogy that relates {topic} to a real-world scenario.\n\
         The analogy should:\n\
         - Compare {topic} to something familiar from everyday life\n\
         - Highlight key aspects of {topic}\n\
         - Be engaging and memorable\n\
         \n\
         Format your response in markdown.\n\
         Keep it concise."
    )
}

/// Exactly three questions, four options each, JSON only.
pub fn quiz_prompt(topic: &str, difficulty: &str) -> String {
    format!(
        r#"Create 3 quiz questions about {topic} at a {difficulty} difficulty level.

For each question:
- Provide a clear, focused question
- Include 4 possible answers (A, B, C, D) with exactly one correct answer
- Make sure questions test understanding, not just memorization

Return the questions in the following JSON format:
```json
[
  {{
    "question": "Question text here?",
    "options": ["Option A", "Option B", "Option C", "Option D"],
    "correct_index": 0,
    "explanation": "Brief explanation of why this answer is correct"
  }},
  ...more questions...
]
```

ONLY return the JSON. Do not include any other text."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explanation_prompt_embeds_topic() {
        let p = explanation_prompt("photosynthesis");
        assert!(p.contains("explanation of photosynthesis"));
        assert!(p.contains("Do NOT use code blocks"));
        assert!(p.contains("Do NOT include any HTML tags"));
    }

    #[test]
    fn test_analogy_prompt_embeds_topic() {
        let p = analogy_prompt("entropy");
        assert!(p.contains("relates entropy to a real-world scenario"));
        assert!(p.contains("Highlight key aspects of entropy"));
    }

    #[test]
    fn test_quiz_prompt_embeds_topic_and_difficulty() {
        let p = quiz_prompt("volcanoes", "hard");
        assert!(p.contains("3 quiz questions about volcanoes at a hard difficulty level"));
        assert!(p.contains("\"correct_index\": 0"));
        assert!(p.contains("ONLY return the JSON"));
    }

    #[test]
    fn test_prompts_differ_per_kind() {
        assert_ne!(explanation_prompt("x"), analogy_prompt("x"));
    }
}

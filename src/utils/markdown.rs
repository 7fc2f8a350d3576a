//! Markdown cleanup for model output.
//!
//! Model text arrives with stray HTML, malformed headings, mixed list bullets
//! and empty code fences. [`normalize_markdown`] applies an ordered list of
//! regex rewrites, then trims. Each rule is a separate function so it can be
//! tested on its own.

use once_cell::sync::Lazy;
use regex::Regex;

/// Upper bound on full rule passes in [`normalize_markdown`].
const MAX_PASSES: usize = 8;

static HTML_TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());

static README_TITLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^#+\s*README\.md\s*$").unwrap());

static HEADING_SPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^(#+)([^#\s])").unwrap());

static LIST_ITEM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*[-*][ \t]*(\S)").unwrap());

static FENCE_OPEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"```(\w+)?\n").unwrap());

static EMPTY_FENCE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"```\s*```").unwrap());

static EXTRA_BLANKS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\n\n+").unwrap());

/// Remove anything that looks like an HTML tag.
pub fn strip_html_tags(text: &str) -> String {
    HTML_TAG_RE.replace_all(text, "").into_owned()
}

/// Drop heading lines that only say `README.md`.
pub fn strip_readme_title(text: &str) -> String {
    README_TITLE_RE.replace_all(text, "").into_owned()
}

/// `##Title` → `## Title`.
pub fn fix_heading_spacing(text: &str) -> String {
    HEADING_SPACE_RE.replace_all(text, "${1} ${2}").into_owned()
}

/// Rewrite `*item`, `  -  item` etc. to the canonical `- item`.
pub fn normalize_list_items(text: &str) -> String {
    LIST_ITEM_RE.replace_all(text, "- ${1}").into_owned()
}

/// Re-emit fenced code openers as backticks, optional language tag, newline.
pub fn normalize_fence_openers(text: &str) -> String {
    FENCE_OPEN_RE.replace_all(text, "```${1}\n").into_owned()
}

/// Remove fences that close immediately with nothing inside.
pub fn strip_empty_fences(text: &str) -> String {
    EMPTY_FENCE_RE.replace_all(text, "").into_owned()
}

/// Collapse runs of three or more newlines to a single blank line.
pub fn collapse_blank_lines(text: &str) -> String {
    EXTRA_BLANKS_RE.replace_all(text, "\n\n").into_owned()
}

fn apply_rules(text: &str) -> String {
    let out = strip_html_tags(text);
    let out = strip_readme_title(&out);
    let out = fix_heading_spacing(&out);
    let out = normalize_list_items(&out);
    let out = normalize_fence_openers(&out);
    let out = strip_empty_fences(&out);
    let out = collapse_blank_lines(&out);
    out.trim().to_string()
}

/// Clean raw model text into well-formed markdown.
///
/// Runs the rules in order until the output stops changing, so
/// `normalize_markdown(normalize_markdown(x)) == normalize_markdown(x)`
/// even when one pass exposes a new match (e.g. `<<b>i>`).
pub fn normalize_markdown(raw: &str) -> String {
    let mut current = apply_rules(raw);
    for _ in 1..MAX_PASSES {
        let next = apply_rules(&current);
        if next == current {
            break;
        }
        current = next;
    }
    current
}

/// Make sure an explanation opens with a top-level heading.
///
/// `content` is expected to be normalized already. Bodies that do not start
/// with `# ` get `# Understanding <topic>` and a blank line in front.
pub fn with_topic_heading(topic: &str, content: &str) -> String {
    let content = if content.trim_start().starts_with("# ") {
        content.to_string()
    } else {
        format!("# Understanding {topic}\n\n{content}")
    };
    collapse_blank_lines(&content)
}

/// Normalize an explanation and give it a heading.
pub fn format_explanation(topic: &str, raw: &str) -> String {
    with_topic_heading(topic, &normalize_markdown(raw))
}

use regex::Regex;
use std::sync::LazyLock;

// a run of non-terminators plus the terminators that close it ("Shake well.", "Enjoy!!")
static SENTENCE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^.!?]+[.!?]*").unwrap());

/// Split an instructions blob into steps: per line, then per sentence.
///
/// Punctuation stays with the sentence it ends; trailing text without a
/// terminator is still a step. A line with no sentence in it ("...") is kept
/// whole. Blank pieces are dropped.
#[must_use]
pub fn segment_instructions(text: Option<&str>) -> Vec<String> {
    let Some(text) = text else {
        return Vec::new();
    };

    text.lines().flat_map(line_steps).collect()
}

fn line_steps(line: &str) -> Vec<String> {
    let steps: Vec<String> = SENTENCE_RE
        .find_iter(line)
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    match line.trim() {
        whole if steps.is_empty() && !whole.is_empty() => vec![whole.to_string()],
        _ => steps,
    }
}

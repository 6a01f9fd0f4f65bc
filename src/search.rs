use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions, Strength};
use serde::Serialize;

use crate::models::{DrinkListItem, DrinkResponse};

/// Query used when the search box is empty, so the first page is not blank.
pub const DEFAULT_SEARCH_TERM: &str = "margarita";

#[must_use]
pub fn effective_query(query: &str) -> &str {
    match query.trim() {
        "" => DEFAULT_SEARCH_TERM,
        q => q,
    }
}

/// Root-locale collator ignoring case but not accents ("Élan" < "Fizz").
fn name_collator() -> Option<Collator> {
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Secondary);
    Collator::try_new(&Default::default(), options)
        .map_err(|e| tracing::warn!(error = %e, "no collation data, sorting by code point"))
        .ok()
}

fn compare_names(a: &str, b: &str, needle: &str, collator: Option<&Collator>) -> Ordering {
    let a_lower = a.to_lowercase();
    let b_lower = b.to_lowercase();

    match (a_lower.starts_with(needle), b_lower.starts_with(needle)) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => collator.map_or_else(|| a_lower.cmp(&b_lower), |c| c.compare(a, b)),
    }
}

/// Prefix matches first, then locale-aware case-insensitive name order. Stable.
#[must_use]
pub fn rank(mut items: Vec<DrinkListItem>, query: &str) -> Vec<DrinkListItem> {
    let needle = query.trim().to_lowercase();
    let collator = name_collator();
    items.sort_by(|a, b| compare_names(&a.name, &b.name, &needle, collator.as_ref()));
    items
}

/// List items for a search response, ranked against the effective query.
#[must_use]
pub fn search_results(response: &DrinkResponse, query: &str) -> Vec<DrinkListItem> {
    let items = response.drinks().iter().map(DrinkListItem::from).collect();
    rank(items, effective_query(query))
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct HighlightSegment {
    pub text: String,
    pub is_match: bool,
}

impl HighlightSegment {
    fn new(text: &str, is_match: bool) -> Self {
        Self {
            text: text.to_string(),
            is_match,
        }
    }
}

/// Byte length of the match of `needle` (already lower-cased) at the start of
/// `chars`, comparing one lower-cased char at a time.
fn match_len(chars: &[(usize, char)], text_len: usize, needle: &str) -> Option<usize> {
    let start = chars.first()?.0;
    let mut folded = String::new();
    for (i, (_, ch)) in chars.iter().enumerate() {
        folded.extend(ch.to_lowercase());
        if folded.len() >= needle.len() {
            if folded != needle {
                return None;
            }
            let end = chars.get(i + 1).map_or(text_len, |(b, _)| *b);
            return Some(end - start);
        }
        if !needle.starts_with(folded.as_str()) {
            return None;
        }
    }
    None
}

/// Split `text` into alternating matched/unmatched segments.
///
/// Matching is case-insensitive, left to right and non-overlapping; matched
/// segments keep the casing of `text`.
#[must_use]
pub fn highlight(text: &str, query: &str) -> Vec<HighlightSegment> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() || text.is_empty() {
        return vec![HighlightSegment::new(text, false)];
    }

    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut segments = Vec::new();
    let mut last = 0; // byte offset of the first unconsumed char
    let mut i = 0; // char index

    while i < chars.len() {
        let Some(len) = match_len(&chars[i..], text.len(), &needle) else {
            i += 1;
            continue;
        };
        let start = chars[i].0;
        if start > last {
            segments.push(HighlightSegment::new(&text[last..start], false));
        }
        segments.push(HighlightSegment::new(&text[start..start + len], true));
        last = start + len;
        while i < chars.len() && chars[i].0 < last {
            i += 1;
        }
    }

    if last < text.len() {
        segments.push(HighlightSegment::new(&text[last..], false));
    }
    segments
}

//! Plain-text views printed by the binary.

use std::fmt::Write;

use crate::colors::color_map_for;
use crate::ingredients::{UNSUPPORTED_COLOR, split_supported};
use crate::instructions::segment_instructions;
use crate::models::{Drink, DrinkListItem, NormalizedIngredient};
use crate::search::highlight;

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// `text` with every match of `query` emphasised: bold on a terminal,
/// `[brackets]` otherwise.
#[must_use]
pub fn highlighted(text: &str, query: &str, ansi: bool) -> String {
    let (open, close) = if ansi { (BOLD, RESET) } else { ("[", "]") };
    highlight(text, query)
        .into_iter()
        .map(|seg| {
            if seg.is_match {
                format!("{open}{}{close}", seg.text)
            } else {
                seg.text
            }
        })
        .collect()
}

#[must_use]
pub fn result_lines(items: &[DrinkListItem], query: &str, ansi: bool) -> Vec<String> {
    items
        .iter()
        .map(|d| format!("{:>7}  {}", d.id, highlighted(&d.name, query, ansi)))
        .collect()
}

fn measure_label(i: &NormalizedIngredient) -> String {
    i.original_measure.clone().unwrap_or_else(|| "-".into())
}

/// Detail view: header, charted legend with ratios, uncharted list, steps.
#[must_use]
pub fn drink_details(drink: &Drink) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} (#{})", drink.name, drink.id);

    let facts: Vec<&str> = [&drink.category, &drink.alcoholic, &drink.glass]
        .into_iter()
        .filter_map(|f| f.as_deref())
        .filter(|f| !f.trim().is_empty())
        .collect();
    if !facts.is_empty() {
        let _ = writeln!(out, "{}", facts.join(" · "));
    }

    let (charted, uncharted) = split_supported(&drink.ingredients);
    let total: f64 = charted.iter().filter_map(|i| i.amount).sum();
    let colors = color_map_for(charted.iter().map(|i| i.name.as_str()));

    if !charted.is_empty() {
        let _ = writeln!(out, "\nIngredients:");
        for i in &charted {
            let ml = i.amount.unwrap_or_default();
            let _ = writeln!(
                out,
                "  {} {:<24} {:<12} {:>7.1} ml {:>5.1}%",
                colors.get(&i.name).unwrap_or(UNSUPPORTED_COLOR),
                i.name,
                measure_label(i),
                ml,
                ml / total * 100.0
            );
        }
    }

    if !uncharted.is_empty() {
        let _ = writeln!(out, "\nNot charted:");
        for i in &uncharted {
            let _ = writeln!(
                out,
                "  {UNSUPPORTED_COLOR} {:<24} {}",
                i.name,
                measure_label(i)
            );
        }
    }

    let steps = segment_instructions(drink.instructions.as_deref());
    if !steps.is_empty() {
        let _ = writeln!(out, "\nInstructions:");
        for (n, step) in steps.iter().enumerate() {
            let _ = writeln!(out, "  {}. {step}", n + 1);
        }
    }
    out
}

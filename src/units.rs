use regex::Regex;
use std::sync::LazyLock;

pub const ML_PER_FL_OZ: f64 = 29.5735;
pub const ML_PER_CUP: f64 = 236.588;
pub const ML_PER_TSP: f64 = 4.92892;
pub const ML_PER_TBSP: f64 = 14.7868;
pub const ML_PER_CL: f64 = 10.0;

// quantity (mixed number | fraction | integer/decimal) + unit words
// examples: "1 2/3 oz", "3/4 cup", "1 / 2 tsp", "2.5 cl", "1 fl oz", "2 Cups"
pub static MEASURE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?ix)^
        (?:
            (?P<whole>\d+)\s+(?P<mnum>\d+)\s*/\s*(?P<mden>\d+)
          | (?P<num>\d+(?:\.\d+)?)\s*/\s*(?P<den>\d+(?:\.\d+)?)
          | (?P<dec>\d+(?:\.\d+)?)
        )
        \s*
        (?P<unit>[a-z]+(?:\s+[a-z]+)?)
        $",
    )
    .unwrap()
});

/// Millilitres per one `unit`, matching the singular spelling only.
#[inline]
#[must_use]
fn factor_exact(u: &str) -> Option<f64> {
    match u {
        "oz" | "fl oz" | "fluid ounce" => Some(ML_PER_FL_OZ),
        "cup" => Some(ML_PER_CUP),
        "tsp" | "teaspoon" => Some(ML_PER_TSP),
        "tbsp" | "tablespoon" => Some(ML_PER_TBSP),
        "cl" | "centiliter" => Some(ML_PER_CL),
        "ml" | "milliliter" => Some(1.0),
        _ => None,
    }
}

/// Millilitres per one `unit`; case-insensitive, a trailing plural `s` is accepted.
#[must_use]
pub fn ml_factor(unit: &str) -> Option<f64> {
    let u = norm_whitespace(&unit.to_lowercase());
    factor_exact(&u).or_else(|| u.strip_suffix('s').and_then(factor_exact))
}

#[must_use]
pub fn is_supported_unit(unit: &str) -> bool {
    ml_factor(unit).is_some()
}

fn num(c: &regex::Captures<'_>, name: &str) -> Option<f64> {
    c.name(name).and_then(|m| m.as_str().parse::<f64>().ok())
}

fn fraction(n: Option<f64>, d: Option<f64>) -> Option<f64> {
    match (n, d) {
        (Some(n), Some(d)) if d != 0.0 => Some(n / d),
        _ => None,
    }
}

/// Parse a free-form measurement ("1 2/3 oz", "3/4 cup") into millilitres.
///
/// Returns `None` for blank input, an unknown unit, a zero denominator or any
/// quantity that does not fit the grammar. Never returns a non-positive amount.
#[must_use]
pub fn parse_measure_ml(measure: &str) -> Option<f64> {
    let s = measure.trim();
    if s.is_empty() {
        return None;
    }
    let c = MEASURE_RE.captures(s)?;

    let qty = if c.name("whole").is_some() {
        let frac = fraction(num(&c, "mnum"), num(&c, "mden"))?;
        num(&c, "whole")? + frac
    } else if c.name("num").is_some() {
        fraction(num(&c, "num"), num(&c, "den"))?
    } else {
        num(&c, "dec")?
    };

    let factor = ml_factor(c.name("unit")?.as_str())?;
    let ml = qty * factor;
    (ml.is_finite() && ml > 0.0).then_some(ml)
}

#[must_use]
pub fn norm_whitespace(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut ws = false;
    for ch in s.trim().chars() {
        if ch.is_whitespace() {
            if !ws {
                out.push(' ');
                ws = true;
            }
        } else {
            ws = false;
            out.push(ch);
        }
    }
    out.trim().to_string()
}

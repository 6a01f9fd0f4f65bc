use std::collections::HashMap;

/// Pastel palette for the ingredient legend and pie chart.
pub const PASTEL: [&str; 25] = [
    "#ffb3ba", // pink
    "#ffdfba", // peach
    "#ffffba", // yellow
    "#baffc9", // green
    "#bae1ff", // blue
    "#e0bbff", // purple
    "#ffcccb", // light red
    "#ffd9b3", // light orange
    "#fff4a3", // light yellow
    "#c7f5d9", // mint
    "#b3e5fc", // sky blue
    "#d1c4e9", // lavender
    "#f8bbd0", // light pink
    "#ffe0b2", // amber
    "#fff9c4", // lemon
    "#c5e1a5", // lime
    "#b2ebf2", // cyan
    "#ce93d8", // violet
    "#f48fb1", // rose
    "#90caf9", // indigo
    "#a5d6a7", // light green
    "#ffccbc", // deep orange
    "#d7ccc8", // brown
    "#b0bec5", // blue grey
    "#e1bee7", // orchid
];

/// 32-bit `hash * 31 + unit` over UTF-16 code units, wrapping on overflow.
#[must_use]
pub fn name_hash(s: &str) -> i32 {
    s.encode_utf16()
        .fold(0i32, |h, u| h.wrapping_mul(31).wrapping_add(i32::from(u)))
}

/// Deterministic colour for an ingredient name (trimmed, case-insensitive).
#[must_use]
pub fn color_for(name: &str) -> &'static str {
    let normalized = name.trim().to_lowercase();
    if normalized.is_empty() {
        return PASTEL[0];
    }
    // i64 so that |i32::MIN| does not overflow
    let idx = i64::from(name_hash(&normalized)).unsigned_abs() % PASTEL.len() as u64;
    PASTEL[usize::try_from(idx).unwrap_or_default()]
}

/// Name (as given, case-sensitive) to colour.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColorMap {
    colors: HashMap<String, &'static str>,
}

impl ColorMap {
    /// First occurrence wins; re-inserting a name is a no-op.
    pub fn insert(&mut self, name: &str) -> &'static str {
        *self
            .colors
            .entry(name.to_string())
            .or_insert_with(|| color_for(name))
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'static str> {
        self.colors.get(name).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

#[must_use]
pub fn color_map_for<'a, I>(names: I) -> ColorMap
where
    I: IntoIterator<Item = &'a str>,
{
    let mut map = ColorMap::default();
    for name in names {
        map.insert(name);
    }
    map
}

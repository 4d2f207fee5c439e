//! Locating a color token inside a compound value such as
//! `box-shadow: 0 0 4px rgba(0, 0, 0, 0.5)`, so that a color picker can
//! replace it without disturbing the rest of the value.
//!
//! Colors are searched for in passes of decreasing priority: `rgb()`/`rgba()`,
//! then `hsl()`/`hsla()`, then hex colors, then named colors. Only the first
//! match of the first pass that finds anything is reported.
//!
//! Anything inside a `var(...)` call, fallback argument included, is never
//! reported. `var(--red-500)` does not contain the color `red`, and in
//! `var(--border, #ccc)` the `#ccc` belongs to the variable, not to the value.

use std::fmt;

use name::{COLOR_KEYWORDS, NAMED_COLOR_PRIORITY};

mod name;
mod scan;

/// A color found inside a larger value
///
/// `prefix + color + suffix` is always exactly the value it was extracted from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorExtraction {
    pub color: String,
    pub prefix: String,
    pub suffix: String,
}

impl ColorExtraction {
    fn new(value: &str, start: usize, end: usize) -> Self {
        Self {
            color: value[start..end].to_owned(),
            prefix: value[..start].to_owned(),
            suffix: value[end..].to_owned(),
        }
    }

    /// The original value with its color replaced by `color`
    pub fn replace_color(&self, color: &str) -> String {
        rebuild_value_with_color(&self.prefix, color, &self.suffix)
    }
}

impl fmt::Display for ColorExtraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.prefix, self.color, self.suffix)
    }
}

/// Find the color in a compound value
///
/// ```
/// # use stylekit_codec::extract_color;
/// let found = extract_color("0 0 4px rgba(0,0,0,0.5)").unwrap();
/// assert_eq!(found.prefix, "0 0 4px ");
/// assert_eq!(found.color, "rgba(0,0,0,0.5)");
/// assert_eq!(found.suffix, "");
///
/// assert_eq!(extract_color("var(--red-500)"), None);
/// ```
pub fn extract_color(value: &str) -> Option<ColorExtraction> {
    if is_bare_var(value.trim()) {
        return None;
    }

    let masked = scan::var_spans(value);
    let is_masked = |idx: usize| masked.iter().any(|&(start, end)| (start..end).contains(&idx));
    let bytes = value.as_bytes();

    let recognizers: [fn(&[u8]) -> Option<usize>; 3] = [scan::rgb_len, scan::hsl_len, scan::hex_len];

    for recognizer in recognizers {
        let found = (0..bytes.len())
            .filter(|&idx| !is_masked(idx))
            .find_map(|idx| recognizer(&bytes[idx..]).map(|len| (idx, idx + len)));

        if let Some((start, end)) = found {
            return Some(ColorExtraction::new(value, start, end));
        }
    }

    find_named_color(value, &is_masked).map(|(start, end)| ColorExtraction::new(value, start, end))
}

/// The whole-word named color with the highest priority, at its first occurrence
fn find_named_color(value: &str, is_masked: &dyn Fn(usize) -> bool) -> Option<(usize, usize)> {
    let bytes = value.as_bytes();
    let mut best: Option<(usize, usize, usize)> = None;
    let mut idx = 0;

    while idx < bytes.len() {
        if !scan::is_word_byte(bytes[idx]) {
            idx += 1;
            continue;
        }

        let start = idx;
        while idx < bytes.len() && scan::is_word_byte(bytes[idx]) {
            idx += 1;
        }

        if is_masked(start) {
            continue;
        }

        let word = value[start..idx].to_ascii_lowercase();
        if let Some(&priority) = NAMED_COLOR_PRIORITY.get(word.as_str()) {
            if best.map_or(true, |(best_priority, ..)| priority < best_priority) {
                best = Some((priority, start, idx));
            }
        }
    }

    best.map(|(_, start, end)| (start, end))
}

/// `var(--name)` or `var(--name, fallback)` and nothing else
fn is_bare_var(value: &str) -> bool {
    let bytes = value.as_bytes();

    if bytes.len() < 4 || !bytes[..4].eq_ignore_ascii_case(b"var(") {
        return false;
    }

    if scan::matching_paren(bytes, 3) != Some(bytes.len() - 1) {
        return false;
    }

    let inner = &value[4..value.len() - 1];
    match inner.strip_prefix("--") {
        Some(name) => name
            .chars()
            .next()
            .map_or(false, |c| c.is_alphanumeric() || c == '-' || c == '_'),
        None => false,
    }
}

/// Splice a new color between the prefix and suffix of a [`ColorExtraction`]
///
/// The color is not validated.
pub fn rebuild_value_with_color(prefix: &str, color: &str, suffix: &str) -> String {
    let mut value = String::with_capacity(prefix.len() + color.len() + suffix.len());
    value.push_str(prefix);
    value.push_str(color);
    value.push_str(suffix);
    value
}

/// A quick guess at whether a whole value is a color, used to decide when to
/// render a swatch
///
/// This recognizes hex colors, the color functions and a handful of keywords.
/// Valid colors outside that set, such as `rebeccapurple`, are not recognized.
pub fn is_color_value(value: &str) -> bool {
    let value = value.trim().to_ascii_lowercase();

    value.starts_with('#')
        || value.starts_with("rgb")
        || value.starts_with("hsl")
        || COLOR_KEYWORDS.contains(value.as_str())
}

//! Helpers for editing the custom properties declared on `:root`

use indexmap::IndexMap;

use crate::{ast::DeclarationBlock, utils::is_plain_number};

static SIZE_UNITS: phf::Set<&'static str> = phf::phf_set! {
    "px", "rem", "em", "%", "vh", "vw", "vmin", "vmax",
};

/// The sections theme variables are grouped into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ThemeCategory {
    Colors,
    Fonts,
    Spacing,
    Other,
}

impl ThemeCategory {
    pub const ALL: [ThemeCategory; 4] = [
        ThemeCategory::Colors,
        ThemeCategory::Fonts,
        ThemeCategory::Spacing,
        ThemeCategory::Other,
    ];

    /// Decide where a variable belongs from its name first and its value second.
    /// The checks run in the order of [`ThemeCategory::ALL`].
    pub fn classify(name: &str, value: &str) -> Self {
        if name.starts_with("--color-") || name.contains("color") || is_theme_color_value(value) {
            ThemeCategory::Colors
        } else if name.starts_with("--font-") || name.contains("font") {
            ThemeCategory::Fonts
        } else if ["--spacing-", "--gap-", "--margin-", "--padding-"]
            .iter()
            .any(|prefix| name.starts_with(prefix))
            || name.contains("size")
            || is_size_value(value)
        {
            ThemeCategory::Spacing
        } else {
            ThemeCategory::Other
        }
    }
}

/// Colors as far as the theme editor is concerned, which also counts
/// references to other color variables
pub fn is_theme_color_value(value: &str) -> bool {
    let value = value.trim().to_ascii_lowercase();

    value.starts_with('#')
        || value.starts_with("rgb")
        || value.starts_with("hsl")
        || value.starts_with("var(--color")
}

/// A single unsigned length or percentage, such as `16px` or `1.5rem`
pub fn is_size_value(value: &str) -> bool {
    let value = value.trim();
    let unit_start = value
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(value.len());
    let (number, unit) = value.split_at(unit_start);

    is_plain_number(number) && SIZE_UNITS.contains(unit)
}

/// `--color-primary` → `Color Primary`
pub fn format_variable_name(name: &str) -> String {
    name.strip_prefix("--")
        .unwrap_or(name)
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Group variables by [`ThemeCategory`]. Every category is present, in the
/// order of [`ThemeCategory::ALL`], even when it has no variables.
pub fn categorize(variables: &DeclarationBlock) -> IndexMap<ThemeCategory, DeclarationBlock> {
    let mut categories: IndexMap<ThemeCategory, DeclarationBlock> = ThemeCategory::ALL
        .iter()
        .map(|&category| (category, DeclarationBlock::new()))
        .collect();

    for (name, value) in variables.iter() {
        categories
            .entry(ThemeCategory::classify(name, value))
            .or_default()
            .insert(name, value);
    }

    categories
}

/// A `:root` rule declaring only the variables of `current` whose value
/// differs from `original`, one per line
pub fn root_preview_block(current: &DeclarationBlock, original: &DeclarationBlock) -> String {
    let modified = current
        .iter()
        .filter(|&(name, value)| original.get(name) != Some(value))
        .map(|(name, value)| format!("{}: {};", name, value))
        .collect::<Vec<String>>()
        .join("\n");

    format!(":root {{\n{}\n}}", modified)
}

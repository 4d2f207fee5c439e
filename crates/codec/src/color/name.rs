//! The small vocabulary of color keywords the editor recognizes

/// Named colors looked for inside compound values, keyed by lowercase name.
/// When a value mentions several of them, the smallest number wins.
pub(crate) static NAMED_COLOR_PRIORITY: phf::Map<&'static str, usize> = phf::phf_map! {
    "red" => 0,
    "blue" => 1,
    "green" => 2,
    "yellow" => 3,
    "orange" => 4,
    "purple" => 5,
    "pink" => 6,
    "white" => 7,
    "black" => 8,
    "gray" => 9,
    "grey" => 10,
    "cyan" => 11,
    "magenta" => 12,
    "lime" => 13,
    "navy" => 14,
    "teal" => 15,
    "maroon" => 16,
    "olive" => 17,
    "silver" => 18,
    "aqua" => 19,
    "fuchsia" => 20,
    "transparent" => 21,
};

/// Whole values that [`crate::is_color_value`] treats as colors
pub(crate) static COLOR_KEYWORDS: phf::Set<&'static str> = phf::phf_set! {
    "red",
    "blue",
    "green",
    "yellow",
    "orange",
    "purple",
    "pink",
    "white",
    "black",
    "gray",
    "grey",
    "transparent",
    "inherit",
    "currentcolor",
};

use stylekit::{
    categorize, format_variable_name, is_size_value, root_preview_block, DeclarationBlock,
    ThemeCategory,
};

#[test]
fn classify_by_name() {
    assert_eq!(ThemeCategory::Colors, ThemeCategory::classify("--color-primary", "blue"));
    assert_eq!(ThemeCategory::Colors, ThemeCategory::classify("--bg-color", "white"));
    assert_eq!(ThemeCategory::Fonts, ThemeCategory::classify("--font-body", "Inter, sans-serif"));
    assert_eq!(ThemeCategory::Fonts, ThemeCategory::classify("--heading-font", "Georgia"));
    assert_eq!(ThemeCategory::Spacing, ThemeCategory::classify("--gap-lg", "2rem"));
    assert_eq!(ThemeCategory::Spacing, ThemeCategory::classify("--padding-x", "calc(1rem + 2px)"));
    assert_eq!(ThemeCategory::Spacing, ThemeCategory::classify("--text-size", "large"));
}

#[test]
fn classify_by_value() {
    assert_eq!(ThemeCategory::Colors, ThemeCategory::classify("--accent", "#ff0"));
    assert_eq!(ThemeCategory::Colors, ThemeCategory::classify("--shade", "rgba(0,0,0,.1)"));
    assert_eq!(ThemeCategory::Colors, ThemeCategory::classify("--link", "var(--color-primary)"));
    assert_eq!(ThemeCategory::Spacing, ThemeCategory::classify("--radius", "4px"));
    assert_eq!(ThemeCategory::Other, ThemeCategory::classify("--shadow", "0 1px 2px black"));
    assert_eq!(ThemeCategory::Other, ThemeCategory::classify("--z-modal", "100"));
}

#[test]
fn size_values() {
    for value in ["0px", "1.25rem", "2em", "100%", "50vh", "10vw", "5vmin", "5vmax"] {
        assert!(is_size_value(value), "{}", value);
    }

    for value in ["", "px", "1.px", "4pt", "1px 2px", "auto"] {
        assert!(!is_size_value(value), "{}", value);
    }
}

#[test]
fn variable_names() {
    assert_eq!("Color Primary", format_variable_name("--color-primary"));
    assert_eq!("Spacing 2xl", format_variable_name("--spacing-2xl"));
    assert_eq!("Radius", format_variable_name("radius"));
}

#[test]
fn categories_are_all_present_and_ordered() {
    let variables = DeclarationBlock::parse(
        "--color-primary: #3b82f6; --spacing-md: 1rem; --font-sans: Inter; --color-text: #111",
    );
    let categories = categorize(&variables);

    assert_eq!(
        ThemeCategory::ALL.to_vec(),
        categories.keys().copied().collect::<Vec<ThemeCategory>>()
    );
    assert_eq!(2, categories[&ThemeCategory::Colors].len());
    assert_eq!(Some("Inter"), categories[&ThemeCategory::Fonts].get("--font-sans"));
    assert_eq!(Some("1rem"), categories[&ThemeCategory::Spacing].get("--spacing-md"));
    assert!(categories[&ThemeCategory::Other].is_empty());
}

#[test]
fn preview_contains_only_changed_variables() {
    let original = DeclarationBlock::parse("--color-primary: #3b82f6; --spacing-md: 1rem");
    let mut current = original.clone();
    current.insert("--spacing-md", "1.5rem");
    current.insert("--radius", "4px");

    assert_eq!(
        ":root {\n--spacing-md: 1.5rem;\n--radius: 4px;\n}",
        root_preview_block(&current, &original)
    );
}

#[test]
fn preview_without_changes() {
    let original = DeclarationBlock::parse("--a: 1");

    assert_eq!(":root {\n\n}", root_preview_block(&original, &original));
}

#[macro_use]
mod macros;

use stylekit::{DeclarationBlock, Options, OutputStyle};

test!(empty_input, "", "");
test!(only_separators_and_whitespace, "  ; ;;\n\t", "");
test!(
    two_declarations,
    "color: red; margin: 0;",
    "color: red;\n    margin: 0;"
);
test!(
    missing_trailing_semicolon,
    "color: red; margin: 0",
    "color: red;\n    margin: 0;"
);
test!(values_and_properties_are_trimmed, "   color :   red   ;", "color: red;");
test!(
    one_declaration_per_line,
    "color: red;\n  margin: 0;\n",
    "color: red;\n    margin: 0;"
);
test!(duplicate_property_last_wins, "color: red; color: blue;", "color: blue;");
test!(
    duplicate_property_keeps_first_position,
    "color: red; margin: 0; color: blue",
    "color: blue;\n    margin: 0;"
);
test!(
    colon_inside_value,
    "background: url(http://x.com/a.png);",
    "background: url(http://x.com/a.png);"
);
test!(
    semicolon_inside_quotes,
    "content: \"a;b\"; color: red",
    "content: \"a;b\";\n    color: red;"
);
test!(
    semicolon_inside_parens,
    "background: url(data:image/png;base64,AAAA); color: red",
    "background: url(data:image/png;base64,AAAA);\n    color: red;"
);
test!(
    unclosed_paren_ends_at_next_semicolon,
    "color: rgb(0,0; margin: 0;",
    "color: rgb(0,0;\n    margin: 0;"
);
test!(
    unclosed_double_quote_ends_at_next_semicolon,
    "font-family: \"Arial; color: red;",
    "font-family: \"Arial;\n    color: red;"
);
test!(
    unclosed_single_quote_ends_at_next_semicolon,
    "content: 'a; color: red",
    "content: 'a;\n    color: red;"
);
test!(
    unclosed_bracket_ends_at_next_semicolon,
    "grid-template-columns: [full-start; gap: 4px",
    "grid-template-columns: [full-start;\n    gap: 4px;"
);
test!(
    balanced_value_after_unclosed_one,
    "a: f(1; b: url(data:image/png;base64,AAAA); c: 3",
    "a: f(1;\n    b: url(data:image/png;base64,AAAA);\n    c: 3;"
);
test!(
    declaration_without_colon_is_dropped,
    "color red; margin: 0",
    "margin: 0;"
);
test!(empty_property_is_dropped, ": red; margin: 0", "margin: 0;");
test!(empty_value_is_dropped, "color: ; margin: 0", "margin: 0;");
test!(leading_comment_is_skipped, "/* brand */ color: red", "color: red;");
test!(
    custom_property,
    "--brand-color: #ff0000; color: var(--brand-color)",
    "--brand-color: #ff0000;\n    color: var(--brand-color);"
);
test!(important_is_part_of_value, "color: red !important", "color: red !important;");
test!(crlf_line_endings, "color: red;\r\nmargin: 0;\r\n", "color: red;\n    margin: 0;");
test!(
    compressed,
    "color: red; margin: 0;",
    "color:red;margin:0",
    Options::default().style(OutputStyle::Compressed)
);
test!(
    compressed_empty,
    "",
    "",
    Options::default().style(OutputStyle::Compressed)
);

#[test]
fn pairs_are_parsed_exactly() {
    let cases = [
        ("color", "red", "margin", "0 auto"),
        ("font-family", "\"Helvetica Neue\", sans-serif", "line-height", "1.5"),
        ("box-shadow", "0 0 4px rgba(0, 0, 0, 0.5)", "z-index", "10"),
    ];

    for (p1, v1, p2, v2) in cases {
        let block = stylekit::parse_declarations(
            &format!("{}:  {} ;{}:{};", p1, v1, p2, v2),
            &Options::default(),
        );

        assert_eq!(
            vec![(p1, v1), (p2, v2)],
            block.iter().collect::<Vec<(&str, &str)>>()
        );
    }
}

#[test]
fn parse_serialize_round_trip() {
    let block: DeclarationBlock = [
        ("color", "red"),
        ("background", "url(http://x.com/a.png) no-repeat"),
        ("transition", "opacity 0.3s ease, transform 0.3s ease"),
        ("--gap", "16px"),
    ]
    .into_iter()
    .collect();

    for style in [OutputStyle::Expanded, OutputStyle::Compressed] {
        let options = Options::default().style(style);
        let css = stylekit::serialize_declarations(&block, &options);
        assert_eq!(block, stylekit::parse_declarations(&css, &options));
    }
}

#[test]
fn unbalanced_values_survive_round_trip() {
    let mut block = DeclarationBlock::new();
    block.insert("a", "rgb(");
    block.insert("b", "1");
    block.insert("content", "\"x;y\"");
    block.insert("font-family", "\"Arial");

    for style in [OutputStyle::Expanded, OutputStyle::Compressed] {
        let options = Options::default().style(style);
        let css = stylekit::serialize_declarations(&block, &options);
        assert_eq!(block, stylekit::parse_declarations(&css, &options), "{}", css);
    }
}

#[test]
fn unclosed_paren_keeps_later_pairs() {
    let block = stylekit::parse_declarations("color: rgb(0,0; margin: 0;", &Options::default());

    assert_eq!(
        vec![("color", "rgb(0,0"), ("margin", "0")],
        block.iter().collect::<Vec<(&str, &str)>>()
    );
}

#[test]
fn reparsing_serialized_output_is_stable() {
    let options = Options::default();
    let first = stylekit::parse_declarations("a: 1; b: ; c: 3; a: 4; d", &options);
    let second =
        stylekit::parse_declarations(&stylekit::serialize_declarations(&first, &options), &options);

    assert_eq!(first, second);
    assert_eq!(
        vec![("a", "4"), ("c", "3")],
        second.iter().collect::<Vec<(&str, &str)>>()
    );
}

#[test]
fn display_matches_expanded_serialization() {
    let block = DeclarationBlock::parse("color: red; margin: 0");
    assert_eq!("color: red;\n    margin: 0;", block.to_string());
    assert_eq!(block.to_css(), block.to_string());
}

#[macro_use]
mod macros;

use macros::TestLogger;
use stylekit::Options;

#[test]
fn dropped_declarations_are_reported() {
    let logger = TestLogger::default();
    let options = Options::default().logger(&logger);

    let block = stylekit::parse_declarations("color red; : blue; margin: ; padding: 0", &options);

    assert_eq!(1, block.len());
    assert_eq!(
        vec![
            "Expected \":\" in declaration, ignoring \"color red\".".to_owned(),
            "Expected a property name, ignoring declaration.".to_owned(),
            "Expected a value for \"margin\", ignoring declaration.".to_owned(),
        ],
        logger.warning_messages()
    );
    assert!(logger.debug_messages().is_empty());
}

#[test]
fn duplicate_property_is_a_debug_message() {
    let logger = TestLogger::default();
    let options = Options::default().logger(&logger);

    stylekit::parse_declarations("color: red; color: blue", &options);

    assert_eq!(
        vec!["\"color\" was declared more than once, \"blue\" replaces \"red\".".to_owned()],
        logger.debug_messages()
    );
    assert!(logger.warning_messages().is_empty());
}

#[test]
fn warnings_point_at_their_line() {
    let logger = TestLogger::default();
    let options = Options::default().logger(&logger);

    stylekit::parse_declarations("color: red;\nmargin: 0;\nbroken;\n", &options);

    assert_eq!(vec![3], logger.warning_lines());
}

#[test]
fn dropped_keyframes_are_reported() {
    let logger = TestLogger::default();
    let options = Options::default().logger(&logger);

    let frames = stylekit::parse_keyframes("0% { opacity: 0 }\n150% { opacity: 1 }", &options);

    assert_eq!(1, frames.len());
    assert_eq!(
        vec![
            "Expected \"to\", \"from\" or a percentage between 0% and 100%, dropping keyframe \"150%\"."
                .to_owned()
        ],
        logger.warning_messages()
    );
    assert_eq!(vec![2], logger.warning_lines());
}

#[test]
fn dropped_frame_map_entries_are_reported() {
    let logger = TestLogger::default();
    let options = Options::default().logger(&logger);

    let frames = stylekit::parse_keyframes(vec![("half", "opacity: 0.5")], &options);

    assert!(frames.is_empty());
    assert_eq!(1, logger.warning_messages().len());
}

#[test]
fn unterminated_keyframe_is_reported() {
    let logger = TestLogger::default();
    let options = Options::default().logger(&logger);

    stylekit::parse_keyframes("0% { opacity: 0", &options);

    assert_eq!(
        vec!["Expected \"}\", dropping unterminated keyframe.".to_owned()],
        logger.warning_messages()
    );
}

#[test]
fn quiet_silences_everything() {
    let logger = TestLogger::default();
    let options = Options::default().logger(&logger).quiet(true);

    stylekit::parse_declarations("broken; a: 1; a: 2", &options);
    stylekit::parse_keyframes("nope { a: 1 }", &options);

    assert!(logger.warning_messages().is_empty());
    assert!(logger.debug_messages().is_empty());
}

#[test]
fn convenience_parsers_never_log() {
    let block = stylekit::DeclarationBlock::parse("broken");
    let frames = stylekit::KeyframeSet::parse("nope { a: 1 }");

    assert!(block.is_empty());
    assert!(frames.is_empty());
}

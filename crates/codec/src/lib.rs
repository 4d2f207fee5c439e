/*!
This crate provides the text processing behind a visual style editor: parsing
and serializing CSS declaration blocks, parsing and serializing `@keyframes`
frames, and locating a color inside a compound value so it can be swapped.

None of the parsing entry points fail. Fragments that cannot be understood are
dropped and reported to the configured [`Logger`].

## Use as library
```
# use stylekit_codec as stylekit;
let options = stylekit::Options::default().style(stylekit::OutputStyle::Compressed);
let block = stylekit::parse_declarations("color: red;; font-size: 16px", &options);
assert_eq!(
    stylekit::serialize_declarations(&block, &options),
    "color:red;font-size:16px"
);
```

## Use as binary
```bash
cargo install stylekit
echo "color: red; margin: 0" | stylekit --stdin
```
*/

#![cfg_attr(doc_cfg, feature(doc_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::dbg_macro)]
#![deny(missing_debug_implementations)]
#![allow(
    clippy::use_self,
    // filter isn't fallible
    clippy::manual_filter_map,
    renamed_and_removed_lints,
    clippy::unknown_clippy_lints,
    clippy::single_match,
    clippy::new_without_default,
    clippy::single_match_else,
    clippy::multiple_crate_versions,
    clippy::wrong_self_convention,
    clippy::comparison_chain,
    clippy::unwrap_or_default,
    clippy::manual_unwrap_or_default,
    clippy::float_cmp,

    unknown_lints,
)]

use std::path::Path;

use codemap::CodeMap;
#[cfg(feature = "wasm-exports")]
use wasm_bindgen::prelude::*;

pub use crate::ast::{
    is_valid_keyframes_name, DeclarationBlock, Keyframe, KeyframeSelector, KeyframeSet,
    KeyframesSource,
};
pub use crate::color::{extract_color, is_color_value, rebuild_value_with_color, ColorExtraction};
pub use crate::error::{
    CodecError as Error, CodecResult as Result, PublicCodecErrorKind as ErrorKind,
};
pub use crate::fs::{Fs, NullFs, StdFs};
pub use crate::logger::{Logger, NullLogger, StdLogger};
pub use crate::options::{Options, OutputStyle};
pub use crate::theme::{
    categorize, format_variable_name, is_size_value, is_theme_color_value, root_preview_block,
    ThemeCategory,
};
pub use crate::value::{
    build_transition_list, AnimationShorthand, Time, TimeUnit, TimingFunction,
    TransitionShorthand,
};
pub(crate) use crate::lexer::Token;
use crate::{lexer::Lexer, parse::KeyframesParser, serializer::Serializer};

pub use codemap;

mod ast;
mod color;
mod error;
mod fs;
mod lexer;
mod logger;
mod options;
mod parse;
mod serializer;
mod theme;
mod utils;
mod value;

/// Parse the body of a rule, such as `color: red; font-size: 16px`, into a
/// [`DeclarationBlock`]
///
/// Declarations without a `:` or with an empty property or value are dropped
/// and reported. When a property is declared twice the last value wins.
///
/// ```
/// # use stylekit_codec as stylekit;
/// let block = stylekit::parse_declarations(
///     "background: url(http://x.test/a.png); color: red; color: blue",
///     &stylekit::Options::default(),
/// );
/// assert_eq!(block.get("background"), Some("url(http://x.test/a.png)"));
/// assert_eq!(block.get("color"), Some("blue"));
/// ```
#[inline]
pub fn parse_declarations(text: &str, options: &Options) -> DeclarationBlock {
    DeclarationBlock::parse_with(text, "stdin", options)
}

/// Write a [`DeclarationBlock`] back out in the configured [`OutputStyle`]
///
/// ```
/// # use stylekit_codec as stylekit;
/// let options = stylekit::Options::default();
/// let block = stylekit::parse_declarations("color:red;margin:0", &options);
/// assert_eq!(
///     stylekit::serialize_declarations(&block, &options),
///     "color: red;\n    margin: 0;"
/// );
/// ```
#[inline]
pub fn serialize_declarations(block: &DeclarationBlock, options: &Options) -> String {
    let mut serializer = Serializer::new(options);
    serializer.visit_declarations(block);
    serializer.finish()
}

/// Parse keyframes from either CSS text or a map of selector to declarations
///
/// Frames whose selector is not `from`, `to` or a percentage in `[0, 100]` are
/// dropped. The result is sorted by selector, keeping frames that share a
/// selector in their original order.
///
/// ```
/// # use stylekit_codec as stylekit;
/// let options = stylekit::Options::default();
///
/// let from_css = stylekit::parse_keyframes("to { opacity: 1 } from { opacity: 0 }", &options);
/// let from_map = stylekit::parse_keyframes(vec![("100%", "opacity: 1"), ("0%", "opacity: 0")], &options);
///
/// assert_eq!(from_css, from_map);
/// ```
pub fn parse_keyframes<'a, S: Into<KeyframesSource<'a>>>(
    source: S,
    options: &Options,
) -> KeyframeSet {
    match source.into() {
        KeyframesSource::Css(css) => {
            let mut map = CodeMap::new();
            let file = map.add_file("stdin".to_owned(), css.to_owned());
            let lexer = Lexer::new_from_file(&file);

            let (_, frames) = KeyframesParser::new(lexer, &map, options).parse_keyframes();

            KeyframeSet::from_frames(frames)
        }
        KeyframesSource::Frames(entries) => {
            let mut map = CodeMap::new();
            let files: Vec<_> = entries
                .iter()
                .map(|&(selector, declarations)| {
                    let selector = map.add_file(selector.to_owned(), selector.to_owned());
                    let declarations =
                        map.add_file(selector.name().to_owned(), declarations.to_owned());
                    (selector, declarations)
                })
                .collect();

            KeyframeSet::from_frames(files.iter().flat_map(|(selector, declarations)| {
                KeyframesParser::new(Lexer::new_from_file(selector), &map, options)
                    .parse_frame_entry(Lexer::new_from_file(declarations))
            }))
        }
    }
}

/// Parse a complete `@keyframes <name> { ... }` rule, returning its name
/// alongside the frames. Returns `None` if `text` does not start with a
/// keyframes rule.
///
/// ```
/// # use stylekit_codec as stylekit;
/// let (name, frames) = stylekit::parse_keyframes_rule(
///     "@keyframes fade { from { opacity: 0 } to { opacity: 1 } }",
///     &stylekit::Options::default(),
/// ).unwrap();
/// assert_eq!(name, "fade");
/// assert_eq!(frames.len(), 2);
/// ```
pub fn parse_keyframes_rule(text: &str, options: &Options) -> Option<(String, KeyframeSet)> {
    let mut map = CodeMap::new();
    let file = map.add_file("stdin".to_owned(), text.to_owned());
    let lexer = Lexer::new_from_file(&file);

    let (name, frames) = KeyframesParser::new(lexer, &map, options).parse_keyframes();

    name.map(|name| (name, KeyframeSet::from_frames(frames)))
}

/// Write `frames` as a `@keyframes <name>` rule in the configured [`OutputStyle`]
///
/// ```
/// # use stylekit_codec as stylekit;
/// let options = stylekit::Options::default();
/// let frames = stylekit::parse_keyframes("from { opacity: 0 }", &options);
/// assert_eq!(
///     stylekit::serialize_keyframes("fade", &frames, &options),
///     "@keyframes fade {\n  0% {\n    opacity: 0;\n  }\n}"
/// );
/// ```
#[inline]
pub fn serialize_keyframes(name: &str, frames: &KeyframeSet, options: &Options) -> String {
    let mut serializer = Serializer::new(options);
    serializer.visit_keyframes(name, frames);
    serializer.finish()
}

fn read_to_string(path: &Path, options: &Options) -> Result<String> {
    if !options.fs.is_file(path) {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("{}: file not found", path.display()),
        )
        .into());
    }

    Ok(String::from_utf8(options.fs.read(path)?)?)
}

/// Parse a declaration block from a file, read through [`Options::fs`]
///
/// n.b. `stylekit` does not currently support files or paths that are not valid UTF-8
///
/// ```no_run
/// # use stylekit_codec as stylekit;
/// fn main() -> Result<(), Box<stylekit::Error>> {
///     let block = stylekit::declarations_from_path("button.css", &stylekit::Options::default())?;
///     Ok(())
/// }
/// ```
#[inline]
pub fn declarations_from_path<P: AsRef<Path>>(
    path: P,
    options: &Options,
) -> Result<DeclarationBlock> {
    let path = path.as_ref();
    let text = read_to_string(path, options)?;

    Ok(DeclarationBlock::parse_with(
        &text,
        &path.to_string_lossy(),
        options,
    ))
}

/// Parse keyframes from a file containing either a keyframes body or a
/// complete `@keyframes` rule
#[inline]
pub fn keyframes_from_path<P: AsRef<Path>>(path: P, options: &Options) -> Result<KeyframeSet> {
    let path = path.as_ref();
    let text = read_to_string(path, options)?;

    let mut map = CodeMap::new();
    let file = map.add_file(path.to_string_lossy().into_owned(), text);
    let lexer = Lexer::new_from_file(&file);

    let (_, frames) = KeyframesParser::new(lexer, &map, options).parse_keyframes();

    Ok(KeyframeSet::from_frames(frames))
}

#[cfg(feature = "wasm-exports")]
#[wasm_bindgen(js_name = normalizeDeclarations)]
pub fn normalize_declarations_js(text: String, compressed: bool) -> String {
    let style = if compressed {
        OutputStyle::Compressed
    } else {
        OutputStyle::Expanded
    };
    let options = Options::default().logger(&NullLogger).style(style);

    serialize_declarations(&parse_declarations(&text, &options), &options)
}

#[cfg(feature = "wasm-exports")]
#[wasm_bindgen(js_name = formatKeyframes)]
pub fn format_keyframes_js(name: String, css: String) -> String {
    let options = Options::default().logger(&NullLogger);

    serialize_keyframes(&name, &parse_keyframes(css.as_str(), &options), &options)
}

/// Returns `[prefix, color, suffix]`
#[cfg(feature = "wasm-exports")]
#[wasm_bindgen(js_name = extractColor)]
pub fn extract_color_js(value: String) -> Option<Box<[JsValue]>> {
    extract_color(&value).map(|extraction| {
        vec![
            JsValue::from_str(&extraction.prefix),
            JsValue::from_str(&extraction.color),
            JsValue::from_str(&extraction.suffix),
        ]
        .into_boxed_slice()
    })
}

#[cfg(feature = "wasm-exports")]
#[wasm_bindgen(js_name = isColorValue)]
pub fn is_color_value_js(value: String) -> bool {
    is_color_value(&value)
}

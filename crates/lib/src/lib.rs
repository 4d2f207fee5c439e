/*!
This crate provides the text processing behind a visual style editor: parsing
and serializing CSS declaration blocks and `@keyframes` frames, and locating a
color inside a compound value such as `1px solid #ccc` so it can be replaced.

Every parsing entry point is total. Input that cannot be understood is dropped
and reported to the configured [`Logger`] rather than returned as an error.

## Use as library
```
let options = stylekit::Options::default();

let block = stylekit::parse_declarations("color: red; border: 1px solid #ccc", &options);
let border = stylekit::extract_color(block.get("border").unwrap()).unwrap();
assert_eq!(border.replace_color("blue"), "1px solid blue");

let frames = stylekit::parse_keyframes("to { opacity: 1 } from { opacity: 0 }", &options);
assert_eq!(
    stylekit::serialize_keyframes("fade", &frames, &options.style(stylekit::OutputStyle::Compressed)),
    "@keyframes fade{0%{opacity:0}100%{opacity:1}}"
);
```

## Use as binary
```bash
cargo install stylekit
stylekit --keyframes fade frames.css
```
*/

#![cfg_attr(doc_cfg, feature(doc_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::dbg_macro)]
#![deny(missing_debug_implementations)]
#![allow(
    clippy::use_self,
    clippy::missing_docs_in_private_items,
    clippy::module_name_repetitions,
    renamed_and_removed_lints,
    clippy::unknown_clippy_lints,
    clippy::single_match,
    clippy::option_if_let_else,
    clippy::derive_partial_eq_without_eq,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::multiple_crate_versions,
    clippy::uninlined_format_args,
    clippy::float_cmp,
    unknown_lints,
)]

pub use stylekit_codec::*;

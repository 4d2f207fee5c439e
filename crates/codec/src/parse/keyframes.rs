use codemap::CodeMap;

use crate::{
    ast::{Keyframe, KeyframeSelector},
    lexer::Lexer,
    Options,
};

use super::{BaseParser, DeclarationParser};

/// Parses the frames of a `@keyframes` rule
///
/// Frames look like `<selector>[, <selector>]* { <declarations> }`. A frame
/// whose selector is not `from`, `to` or a percentage in `[0, 100]` is
/// dropped rather than defaulted, along with its declarations.
pub(crate) struct KeyframesParser<'a> {
    toks: Lexer,
    map: &'a CodeMap,
    options: &'a Options<'a>,
}

impl BaseParser for KeyframesParser<'_> {
    fn toks(&self) -> &Lexer {
        &self.toks
    }

    fn toks_mut(&mut self) -> &mut Lexer {
        &mut self.toks
    }

    fn options(&self) -> &Options<'_> {
        self.options
    }

    fn map(&self) -> &CodeMap {
        self.map
    }
}

impl<'a> KeyframesParser<'a> {
    pub fn new(toks: Lexer, map: &'a CodeMap, options: &'a Options<'a>) -> Self {
        KeyframesParser { toks, map, options }
    }

    /// Parses either a keyframes body or a complete `@keyframes` rule. The name
    /// of the rule is returned if there was one.
    pub fn parse_keyframes(mut self) -> (Option<String>, Vec<Keyframe>) {
        self.whitespace();

        let name = if self.toks.next_char_is('@') {
            match self.parse_rule_prelude() {
                Some(name) => Some(name),
                None => return (None, Vec::new()),
            }
        } else {
            None
        };

        let frames = self.parse_frames(name.is_some());

        (name, frames)
    }

    /// Consumes `@keyframes <name> {`, also accepting vendor prefixed rules
    fn parse_rule_prelude(&mut self) -> Option<String> {
        let start = self.toks.cursor();
        self.toks.next();

        let keyword_start = self.toks.cursor();
        while matches!(self.toks.peek(), Some(tok) if tok.kind.is_ascii_alphanumeric() || tok.kind == '-')
        {
            self.toks.next();
        }
        let keyword = self.toks.raw_text(keyword_start).to_ascii_lowercase();

        if !keyword.ends_with("keyframes") {
            self.warn(
                &format!("Expected \"@keyframes\", found \"@{}\".", keyword),
                self.toks.span_from(start),
            );
            return None;
        }

        let name_start = self.toks.cursor();
        if !self.consume_until_unnested(&['{']) {
            self.warn("Expected \"{\".", self.toks.span_from(start));
            return None;
        }

        let name = self.toks.raw_text(name_start).trim().to_owned();
        self.scan_char('{');

        Some(name)
    }

    fn parse_frames(&mut self, inside_rule: bool) -> Vec<Keyframe> {
        let mut frames = Vec::new();

        loop {
            self.whitespace();

            let Some(next) = self.toks.peek() else {
                if inside_rule {
                    self.warn("Expected \"}\".", self.toks.current_span());
                }
                break;
            };

            if next.kind == '}' {
                self.toks.next();
                if !inside_rule {
                    self.warn("Unexpected \"}\".", self.toks.span_from(self.toks.cursor() - 1));
                    continue;
                }
                break;
            }

            if next.kind == ';' {
                self.toks.next();
                continue;
            }

            let selector_start = self.toks.cursor();
            if !self.consume_until_unnested(&['{', '}']) || !self.toks.next_char_is('{') {
                self.warn(
                    "Expected \"{\" after keyframe selector.",
                    self.toks.span_from(selector_start),
                );
                continue;
            }
            let selector_end = self.toks.cursor();
            self.toks.next();

            let body_start = self.toks.cursor();
            if !self.consume_until_unnested(&['}']) {
                self.warn(
                    "Expected \"}\", dropping unterminated keyframe.",
                    self.toks.span_from(selector_start),
                );
                break;
            }
            let body_end = self.toks.cursor();
            self.toks.next();

            let selectors = self.parse_selector_list(selector_start, selector_end, true);
            if selectors.is_empty() {
                continue;
            }

            let declarations = DeclarationParser::new(
                self.toks.slice(body_start, body_end),
                self.map,
                self.options,
            )
            .parse_declarations();

            for selector in selectors {
                frames.push(Keyframe::new(selector, declarations.clone()));
            }
        }

        frames
    }

    /// Parses one entry of a frame map such as `("50%", "opacity: 0.5;")`.
    /// `self` covers the selector, `declarations` the body. A missing `%` is
    /// tolerated here since the backend keys frames however they were saved.
    pub fn parse_frame_entry(self, declarations: Lexer) -> Vec<Keyframe> {
        let selectors = self.parse_selector_list(0, self.toks.len(), false);
        if selectors.is_empty() {
            return Vec::new();
        }

        let declarations =
            DeclarationParser::new(declarations, self.map, self.options).parse_declarations();

        selectors
            .into_iter()
            .map(|selector| Keyframe::new(selector, declarations.clone()))
            .collect()
    }

    /// Parses `0%, 50%, to`. Invalid members of the list are reported and left out.
    fn parse_selector_list(
        &self,
        start: usize,
        end: usize,
        require_percent_sign: bool,
    ) -> Vec<KeyframeSelector> {
        let text = self.toks.raw_text_between(start, end);
        let span = self.toks.span_between(start, end);

        text.split(',')
            .filter_map(|selector| {
                let parsed = KeyframeSelector::parse(selector, require_percent_sign);
                if parsed.is_none() {
                    self.warn(
                        &format!(
                            "Expected \"to\", \"from\" or a percentage between 0% and 100%, dropping keyframe \"{}\".",
                            selector.trim()
                        ),
                        span,
                    );
                }
                parsed
            })
            .collect()
    }
}

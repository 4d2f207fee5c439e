use codemap::CodeMap;

use crate::{ast::DeclarationBlock, lexer::Lexer, Options};

use super::BaseParser;

/// Parses the body of a style rule, or an inline `style` attribute
pub(crate) struct DeclarationParser<'a> {
    toks: Lexer,
    map: &'a CodeMap,
    options: &'a Options<'a>,
}

impl BaseParser for DeclarationParser<'_> {
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

impl<'a> DeclarationParser<'a> {
    pub fn new(toks: Lexer, map: &'a CodeMap, options: &'a Options<'a>) -> Self {
        DeclarationParser { toks, map, options }
    }

    pub fn parse_declarations(mut self) -> DeclarationBlock {
        let mut block = DeclarationBlock::new();

        loop {
            self.whitespace();

            if self.toks.peek().is_none() {
                break;
            }

            if self.scan_char(';') {
                continue;
            }

            let start = self.toks.cursor();
            self.consume_until_unnested(&[';']);
            let end = self.toks.cursor();

            self.parse_declaration(start, end, &mut block);

            self.scan_char(';');
        }

        block
    }

    fn parse_declaration(&self, start: usize, end: usize, block: &mut DeclarationBlock) {
        let text = self.toks.raw_text_between(start, end);
        let span = self.toks.span_between(start, end);

        let (property, value) = match text.split_once(':') {
            Some((property, value)) => (property.trim(), value.trim()),
            None => {
                self.warn(
                    &format!("Expected \":\" in declaration, ignoring \"{}\".", text.trim()),
                    span,
                );
                return;
            }
        };

        if property.is_empty() {
            self.warn("Expected a property name, ignoring declaration.", span);
            return;
        }

        if value.is_empty() {
            self.warn(
                &format!("Expected a value for \"{}\", ignoring declaration.", property),
                span,
            );
            return;
        }

        if let Some(previous) = block.insert(property, value) {
            self.debug(
                &format!(
                    "\"{}\" was declared more than once, \"{}\" replaces \"{}\".",
                    property, value, previous
                ),
                span,
            );
        }
    }
}

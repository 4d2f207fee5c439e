use codemap::{CodeMap, Span};

use crate::{lexer::Lexer, Options, Token};

pub(crate) trait BaseParser {
    fn toks(&self) -> &Lexer;
    fn toks_mut(&mut self) -> &mut Lexer;
    fn options(&self) -> &Options<'_>;
    fn map(&self) -> &CodeMap;

    /// Report a fragment that was dropped from the output
    fn warn(&self, message: &str, span: Span) {
        if self.options().quiet {
            return;
        }

        self.options()
            .logger
            .warning(self.map().look_up_span(span), message);
    }

    fn debug(&self, message: &str, span: Span) {
        if self.options().quiet {
            return;
        }

        self.options()
            .logger
            .debug(self.map().look_up_span(span), message);
    }

    fn whitespace_without_comments(&mut self) {
        while matches!(
            self.toks().peek(),
            Some(Token {
                kind: ' ' | '\t' | '\n',
                ..
            })
        ) {
            self.toks_mut().next();
        }
    }

    fn whitespace(&mut self) {
        loop {
            self.whitespace_without_comments();

            if !self.scan_comment() {
                break;
            }
        }
    }

    fn scan_comment(&mut self) -> bool {
        if !self.next_matches("/*") {
            return false;
        }

        self.skip_loud_comment();
        true
    }

    fn next_matches(&mut self, s: &str) -> bool {
        for (idx, c) in s.chars().enumerate() {
            match self.toks().peek_n(idx) {
                Some(Token { kind, .. }) if kind == c => {}
                _ => return false,
            }
        }

        true
    }

    /// An unterminated comment runs to the end of the input
    fn skip_loud_comment(&mut self) {
        debug_assert!(self.next_matches("/*"));
        self.toks_mut().next();
        self.toks_mut().next();

        while let Some(next) = self.toks_mut().next() {
            if next.kind != '*' {
                continue;
            }

            while self.scan_char('*') {}

            if self.scan_char('/') {
                return;
            }
        }
    }

    fn scan_char(&mut self, c: char) -> bool {
        if let Some(Token { kind, .. }) = self.toks().peek() {
            if kind == c {
                self.toks_mut().next();
                return true;
            }
        }

        false
    }

    /// Consumes tokens until one of `terminators` is found outside of any
    /// parentheses, brackets or quoted string. The terminator itself is not
    /// consumed. Returns `false` if the input ran out first.
    ///
    /// If a paren or quote is still open at the end of input, the scan is
    /// restarted and stops at the first terminator regardless of nesting.
    fn consume_until_unnested(&mut self, terminators: &[char]) -> bool {
        let start = self.toks().cursor();
        let mut depth = 0_usize;
        let mut quote: Option<char> = None;

        while let Some(tok) = self.toks().peek() {
            match (quote, tok.kind) {
                (Some(..), '\\') => {
                    self.toks_mut().next();
                }
                (Some(q), c) if c == q => quote = None,
                (Some(..), _) => {}
                (None, '"' | '\'') => quote = Some(tok.kind),
                (None, '(' | '[') => depth += 1,
                (None, ')' | ']') => depth = depth.saturating_sub(1),
                (None, c) if depth == 0 && terminators.contains(&c) => return true,
                (None, _) => {}
            }

            self.toks_mut().next();
        }

        if depth == 0 && quote.is_none() {
            return false;
        }

        self.toks_mut().set_cursor(start);

        while let Some(tok) = self.toks().peek() {
            if terminators.contains(&tok.kind) {
                return true;
            }

            self.toks_mut().next();
        }

        false
    }
}

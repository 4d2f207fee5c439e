use std::{iter::Peekable, str::Chars, sync::Arc};

use codemap::{File, Span};

const FORM_FEED: char = '\x0C';

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Token {
    pub kind: char,
    pos: u32,
}

/// A cursor over the characters of a single file
///
/// Every token remembers its byte offset into the file, so a lexer created
/// with [`Lexer::slice`] still produces spans relative to the whole file.
#[derive(Debug, Clone)]
pub(crate) struct Lexer {
    buf: Vec<Token>,
    entire_span: Span,
    cursor: usize,
}

impl Lexer {
    pub fn raw_text(&self, start: usize) -> String {
        self.raw_text_between(start, self.cursor)
    }

    pub fn raw_text_between(&self, start: usize, end: usize) -> String {
        self.buf[start..end].iter().map(|t| t.kind).collect()
    }

    pub fn next_char_is(&self, c: char) -> bool {
        matches!(self.peek(), Some(Token { kind, .. }) if kind == c)
    }

    /// Gets the span of the character at the given index. If the index is out of
    /// bounds, it returns the span of the last character. If the input is empty,
    /// it returns an empty span
    fn span_at_index(&self, idx: usize) -> Span {
        let (start, len) = match self.buf.get(idx) {
            Some(tok) => (tok.pos, tok.kind.len_utf8()),
            None => match self.buf.last() {
                Some(tok) => (tok.pos, tok.kind.len_utf8()),
                None => (0, 0),
            },
        };

        self.entire_span
            .subspan(start as u64, start as u64 + len as u64)
    }

    /// The span covering the tokens in `start..end`
    pub fn span_between(&self, start: usize, end: usize) -> Span {
        let start_span = self.span_at_index(start);
        let end_span = self.span_at_index(end.saturating_sub(1).max(start));

        start_span.merge(end_span)
    }

    pub fn span_from(&self, start: usize) -> Span {
        self.span_between(start, self.cursor)
    }

    pub fn current_span(&self) -> Span {
        self.span_at_index(self.cursor)
    }

    pub fn peek(&self) -> Option<Token> {
        self.buf.get(self.cursor).copied()
    }

    /// Peeks `n` from current peeked position without modifying cursor
    pub fn peek_n(&self, n: usize) -> Option<Token> {
        self.buf.get(self.cursor + n).copied()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor;
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// A new lexer over the tokens in `start..end`, with its cursor at the beginning
    pub fn slice(&self, start: usize, end: usize) -> Lexer {
        Lexer::new(self.buf[start..end].to_vec(), self.entire_span)
    }
}

impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.get(self.cursor).copied().map(|tok| {
            self.cursor += 1;
            tok
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.buf.len() - self.cursor;
        (remaining, Some(remaining))
    }
}

/// Lex a string into a series of tokens
pub(crate) struct TokenLexer<'a> {
    buf: Peekable<Chars<'a>>,
    cursor: u32,
}

impl<'a> TokenLexer<'a> {
    pub fn new(buf: Peekable<Chars<'a>>) -> TokenLexer<'a> {
        Self { buf, cursor: 0 }
    }
}

impl<'a> Iterator for TokenLexer<'a> {
    type Item = Token;
    fn next(&mut self) -> Option<Self::Item> {
        let kind = match self.buf.next()? {
            FORM_FEED => '\n',
            '\r' => {
                if self.buf.peek() == Some(&'\n') {
                    self.cursor += 1;
                    self.buf.next();
                }
                '\n'
            }
            c => c,
        };
        let len = kind.len_utf8() as u32;
        let pos = self.cursor;
        self.cursor += len;
        Some(Token { pos, kind })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.buf.size_hint()
    }
}

impl Lexer {
    pub fn new_from_file(file: &Arc<File>) -> Self {
        let buf = TokenLexer::new(file.source().chars().peekable()).collect();
        Self::new(buf, file.span)
    }

    fn new(buf: Vec<Token>, entire_span: Span) -> Self {
        Lexer {
            buf,
            cursor: 0,
            entire_span,
        }
    }
}

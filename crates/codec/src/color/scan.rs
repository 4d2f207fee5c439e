//! Byte level recognizers for the color functions and hex colors that can
//! appear inside a compound value
//!
//! Every recognizer works on ASCII bytes only, so the offsets they produce are
//! always `char` boundaries of the original string.

pub(super) const fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

struct Scanner<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn scan_byte(&mut self, b: u8) -> bool {
        if self.peek() == Some(b) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn scan_ignore_case(&mut self, s: &str) -> bool {
        let end = self.pos + s.len();
        match self.bytes.get(self.pos..end) {
            Some(window) if window.eq_ignore_ascii_case(s.as_bytes()) => {
                self.pos = end;
                true
            }
            _ => false,
        }
    }

    fn whitespace(&mut self) {
        while matches!(self.peek(), Some(b) if b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    fn digits(&mut self) -> usize {
        let start = self.pos;
        while matches!(self.peek(), Some(b'0'..=b'9')) {
            self.pos += 1;
        }
        self.pos - start
    }

    /// `12`, `12.5` or `.5`
    fn number(&mut self) -> bool {
        let start = self.pos;
        let whole = self.digits();

        if self.peek() == Some(b'.') {
            self.pos += 1;
            if self.digits() == 0 {
                if whole == 0 {
                    self.pos = start;
                    return false;
                }
                // `12.` is not a number, but `12` is
                self.pos -= 1;
            }
            return true;
        }

        whole > 0
    }

    fn comma(&mut self) -> bool {
        self.whitespace();
        let found = self.scan_byte(b',');
        self.whitespace();
        found
    }

    /// `, <alpha>` where alpha is a number or percentage
    fn optional_alpha(&mut self) -> bool {
        let start = self.pos;
        if !self.comma() {
            self.pos = start;
            return true;
        }

        if !self.number() {
            return false;
        }
        self.scan_byte(b'%');

        true
    }

    fn close_paren(&mut self) -> bool {
        self.whitespace();
        self.scan_byte(b')')
    }
}

/// Length of an `rgb(r, g, b)` or `rgba(r, g, b, a)` call at the start of `bytes`
pub(super) fn rgb_len(bytes: &[u8]) -> Option<usize> {
    let mut scanner = Scanner::new(bytes);

    if !scanner.scan_ignore_case("rgb") {
        return None;
    }
    scanner.scan_ignore_case("a");

    if !scanner.scan_byte(b'(') {
        return None;
    }
    scanner.whitespace();

    let matched = scanner.number()
        && scanner.comma()
        && scanner.number()
        && scanner.comma()
        && scanner.number()
        && scanner.optional_alpha()
        && scanner.close_paren();

    matched.then_some(scanner.pos)
}

/// Length of an `hsl(h, s%, l%)` or `hsla(h, s%, l%, a)` call at the start of `bytes`
pub(super) fn hsl_len(bytes: &[u8]) -> Option<usize> {
    let mut scanner = Scanner::new(bytes);

    if !scanner.scan_ignore_case("hsl") {
        return None;
    }
    scanner.scan_ignore_case("a");

    if !scanner.scan_byte(b'(') {
        return None;
    }
    scanner.whitespace();

    let hue = scanner.number() && {
        scanner.scan_ignore_case("deg");
        true
    };

    let matched = hue
        && scanner.comma()
        && scanner.number()
        && scanner.scan_byte(b'%')
        && scanner.comma()
        && scanner.number()
        && scanner.scan_byte(b'%')
        && scanner.optional_alpha()
        && scanner.close_paren();

    matched.then_some(scanner.pos)
}

/// Length of a `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa` color at the start of
/// `bytes`. The color must not run into further word characters.
pub(super) fn hex_len(bytes: &[u8]) -> Option<usize> {
    if bytes.first() != Some(&b'#') {
        return None;
    }

    let digits = bytes[1..]
        .iter()
        .take_while(|b| b.is_ascii_hexdigit())
        .count();

    if !matches!(digits, 3 | 4 | 6 | 8) {
        return None;
    }

    let len = digits + 1;
    match bytes.get(len) {
        Some(&b) if is_word_byte(b) => None,
        _ => Some(len),
    }
}

/// Byte ranges of every `var(...)` call in `value`, fallback included.
/// An unterminated call extends to the end of the value.
pub(super) fn var_spans(value: &str) -> Vec<(usize, usize)> {
    let bytes = value.as_bytes();
    let mut spans = Vec::new();
    let mut idx = 0;

    while idx < bytes.len() {
        let is_call_start = bytes[idx..].len() >= 4
            && bytes[idx..idx + 4].eq_ignore_ascii_case(b"var(")
            && (idx == 0 || !(is_word_byte(bytes[idx - 1]) || bytes[idx - 1] == b'-'));

        if !is_call_start {
            idx += 1;
            continue;
        }

        let end = matching_paren(bytes, idx + 3).map_or(bytes.len(), |close| close + 1);
        spans.push((idx, end));
        idx = end;
    }

    spans
}

/// Index of the `)` closing the `(` at `open`
pub(super) fn matching_paren(bytes: &[u8], open: usize) -> Option<usize> {
    let mut depth = 0_usize;

    for (idx, &b) in bytes.iter().enumerate().skip(open) {
        match b {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(idx);
                }
            }
            _ => {}
        }
    }

    None
}

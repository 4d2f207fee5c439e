use crate::{
    ast::{DeclarationBlock, KeyframeSet},
    Options,
};

/// Indentation of every declaration after the first when a block is
/// serialized on its own, so that it lines up inside a rule body
const BLOCK_INDENT: usize = 4;

pub(crate) struct Serializer<'a> {
    indentation: usize,
    options: &'a Options<'a>,
    indent_width: usize,
    buffer: String,
}

impl<'a> Serializer<'a> {
    pub fn new(options: &'a Options<'a>) -> Self {
        Self {
            indentation: 0,
            indent_width: 2,
            options,
            buffer: String::new(),
        }
    }

    /// Expanded: `color: red;\n    font-size: 16px;`, every declaration
    /// terminated by a semicolon. Compressed: `color:red;font-size:16px`.
    pub fn visit_declarations(&mut self, block: &DeclarationBlock) {
        self.write_declarations(block, BLOCK_INDENT);
    }

    /// Frames without declarations are skipped, and selectors are always
    /// written as percentages.
    pub fn visit_keyframes(&mut self, name: &str, frames: &KeyframeSet) {
        self.buffer.push_str("@keyframes ");
        self.buffer.push_str(name);
        self.write_open_curly_brace();

        self.indentation += self.indent_width;

        for frame in frames.iter().filter(|frame| !frame.declarations.is_empty()) {
            self.write_optional_newline();
            self.write_indentation();
            self.buffer.push_str(&frame.selector.to_string());
            self.write_open_curly_brace();

            self.indentation += self.indent_width;
            self.write_optional_newline();
            self.write_indentation();
            self.write_declarations(&frame.declarations, self.indentation);
            self.indentation -= self.indent_width;

            self.write_optional_newline();
            self.write_indentation();
            self.buffer.push('}');
        }

        self.indentation -= self.indent_width;

        self.write_optional_newline();
        self.buffer.push('}');
    }

    fn write_declarations(&mut self, block: &DeclarationBlock, indent: usize) {
        let is_compressed = self.options.is_compressed();

        for (idx, (property, value)) in block.iter().enumerate() {
            if idx != 0 {
                if is_compressed {
                    self.buffer.push(';');
                } else {
                    self.buffer.push('\n');
                    self.buffer.extend(std::iter::repeat(' ').take(indent));
                }
            }

            self.buffer.push_str(property);
            self.buffer.push(':');
            if !is_compressed {
                self.buffer.push(' ');
            }
            self.buffer.push_str(value);

            if !is_compressed {
                self.buffer.push(';');
            }
        }
    }

    fn write_open_curly_brace(&mut self) {
        if !self.options.is_compressed() {
            self.buffer.push(' ');
        }
        self.buffer.push('{');
    }

    fn write_optional_newline(&mut self) {
        if !self.options.is_compressed() {
            self.buffer.push('\n');
        }
    }

    fn write_indentation(&mut self) {
        if self.options.is_compressed() {
            return;
        }

        self.buffer.reserve(self.indentation);
        for _ in 0..self.indentation {
            self.buffer.push(' ');
        }
    }

    pub fn finish(self) -> String {
        self.buffer
    }
}

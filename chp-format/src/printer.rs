//! Listing output buffer
//!
//! Chip bodies are indented one level per nesting depth; the indent unit
//! comes from [`RenderConfig::indent_style`]. Blank lines (after a help card)
//! carry no indentation.

use crate::config::RenderConfig;

/// Accumulates listing lines at the current chip depth
pub struct Printer {
    config: RenderConfig,
    buffer: String,
    indent_level: usize,
    at_line_start: bool,
}

impl Printer {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            config,
            buffer: String::new(),
            indent_level: 0,
            at_line_start: true,
        }
    }

    /// The finished listing, always newline-terminated
    pub fn finish(mut self) -> String {
        if !self.buffer.is_empty() && !self.buffer.ends_with('\n') {
            self.buffer.push('\n');
        }
        self.buffer
    }

    /// Append to the current line, indenting it if it is new
    pub fn write(&mut self, s: &str) {
        if self.at_line_start && !s.is_empty() {
            self.write_indent();
            self.at_line_start = false;
        }
        self.buffer.push_str(s);
    }

    /// One complete listing line (`PIN ...`, `AND ...`, `}`)
    pub fn writeln(&mut self, s: &str) {
        self.write(s);
        self.newline();
    }

    pub fn newline(&mut self) {
        self.buffer.push('\n');
        self.at_line_start = true;
    }

    /// Enter a chip body
    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    /// Leave a chip body
    pub fn dedent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    /// Print a chip body one level deeper than its header
    pub fn indented<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Self),
    {
        self.indent();
        f(self);
        self.dedent();
    }

    fn write_indent(&mut self) {
        let indent = self.config.indent_str().repeat(self.indent_level);
        self.buffer.push_str(&indent);
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }
}

// Fri Oct 16 2026 - Alex

/// Line-oriented source emitter that tracks the current indentation level.
#[derive(Debug, Clone)]
pub struct CodeWriter {
    buffer: String,
    indent_unit: String,
    level: usize,
}

impl CodeWriter {
    pub fn new(indent_width: usize) -> Self {
        Self {
            buffer: String::new(),
            indent_unit: " ".repeat(indent_width),
            level: 0,
        }
    }

    pub fn indent(&mut self) -> &mut Self {
        self.level += 1;
        self
    }

    pub fn dedent(&mut self) -> &mut Self {
        self.level = self.level.saturating_sub(1);
        self
    }

    pub fn level(&self) -> usize {
        self.level
    }

    /// Writes one line at the current level. Empty lines carry no indentation.
    pub fn line(&mut self, text: &str) -> &mut Self {
        if !text.is_empty() {
            for _ in 0..self.level {
                self.buffer.push_str(&self.indent_unit);
            }
            self.buffer.push_str(text);
        }
        self.buffer.push('\n');
        self
    }

    pub fn blank_line(&mut self) -> &mut Self {
        self.line("")
    }

    /// Writes pre-rendered text, shifting every line to the current level.
    pub fn block(&mut self, text: &str) -> &mut Self {
        for line in text.lines() {
            self.line(line);
        }
        self
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn finish(self) -> String {
        self.buffer
    }
}

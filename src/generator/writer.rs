use crate::config::GenOptions;

/// Append-only code buffer with an indentation-depth counter.
///
/// The only mutable state threaded through emission: emitters push a level on
/// block entry, pop it on block exit and append lines in between. Text passed
/// to [`write_line`](CodeWriter::write_line) is prefixed with the current
/// indentation once per call; embedded newlines are written through verbatim.
#[derive(Debug)]
pub struct CodeWriter {
    data: String,
    indent_unit: String,
    depth: usize,
}

impl CodeWriter {
    /// Create a writer using the indent unit configured in `options`.
    pub fn new(options: &GenOptions) -> Self {
        CodeWriter {
            data: String::new(),
            indent_unit: options.indent_string(),
            depth: 0,
        }
    }

    pub fn indent(&mut self) {
        self.depth += 1;
    }

    pub fn outdent(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Append one line at the current indentation depth.
    pub fn write_line(&mut self, line: &str) {
        if line.is_empty() {
            self.data.push('\n');
            return;
        }
        for _ in 0..self.depth {
            self.data.push_str(&self.indent_unit);
        }
        self.data.push_str(line);
        self.data.push('\n');
    }

    /// Append an empty line (no trailing indentation).
    pub fn newline(&mut self) {
        self.data.push('\n');
    }

    /// The accumulated text.
    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn into_data(self) -> String {
        self.data
    }
}

/// Write a PHPDoc block for `text`, one ` * ` line per input line.
///
/// No-op when doc emission is disabled. Annotation metadata is carried inside
/// doc blocks, so the `php_doc` toggle suppresses it as well.
pub fn write_doc(writer: &mut CodeWriter, text: &str, options: &GenOptions) {
    if !options.php_doc {
        return;
    }
    writer.write_line("/**");
    for line in text.trim().split('\n') {
        writer.write_line(&format!(" * {}", line));
    }
    writer.write_line(" */");
}

/// Write a literal specification body, one line per input line.
pub fn write_specification(writer: &mut CodeWriter, text: &str) {
    for line in text.trim().split('\n') {
        writer.write_line(line);
    }
}

//! Line-oriented source builder shared by the renderers.

/// Accumulates generated source text one line at a time.
#[derive(Debug, Default)]
pub struct SourceFile {
    /// Raw buffer; renderers may `writeln!` into it directly.
    pub buf: String,
}

impl SourceFile {
    /// Creates an empty file.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a file that opens with a `// @generated` marker naming `tool`.
    #[must_use]
    pub fn generated_by(tool: &str) -> Self {
        let mut f = Self::new();
        f.line(&format!("// @generated by {tool}. Do not edit by hand."));
        f.blank();
        f
    }

    /// Appends `text` and a newline.
    pub fn line(&mut self, text: &str) {
        self.buf.push_str(text);
        self.buf.push('\n');
    }

    /// Appends an empty line.
    pub fn blank(&mut self) {
        self.buf.push('\n');
    }

    /// Appends a `///` doc comment line at column zero.
    pub fn doc_comment(&mut self, text: &str) {
        self.comment_line("", "///", text);
    }

    /// Appends a `///` doc comment line indented for an item body.
    pub fn indented_doc_comment(&mut self, text: &str) {
        self.comment_line("    ", "///", text);
    }

    fn comment_line(&mut self, indent: &str, marker: &str, text: &str) {
        self.buf.push_str(indent);
        self.buf.push_str(marker);
        if !text.is_empty() {
            self.buf.push(' ');
            self.buf.push_str(text);
        }
        self.buf.push('\n');
    }

    /// Consumes the builder and returns the text.
    #[must_use]
    pub fn finish(self) -> String {
        self.buf
    }
}

use tracing::{debug, trace};

use crate::bang::{self, BangForm};
use crate::document::Document;
use crate::format::Formatter;
use crate::parser::error::ConvertError;
use crate::parser::inline::scan_inline;

const LIST_MARKER: &str = " * ";
const COMMENT_MARKER: &str = "%%";
const SUBTITLE_MARKER: &str = "==";
const TITLE_MARKER: char = '=';

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Convert every line of `document`, returning the concatenated output.
pub fn convert_lines(
    document: &Document,
    formatter: &dyn Formatter,
    file_id: usize,
) -> Result<String, ConvertError> {
    BlockConverter::new(document, formatter, file_id).run()
}

// ---------------------------------------------------------------------------
// Conversion state
// ---------------------------------------------------------------------------

/// The container block currently open. At most one is open at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Container {
    None,
    Paragraph,
    List,
}

struct ConvertState<'a> {
    /// Index of the next unconsumed line.
    position: usize,
    container: Container,
    /// Raw note bodies in declaration order; note `n` is `notes[n - 1]`.
    notes: Vec<&'a str>,
}

struct BlockConverter<'a, 'f> {
    document: &'a Document,
    formatter: &'f dyn Formatter,
    file_id: usize,
    state: ConvertState<'a>,
    output: String,
}

impl<'a, 'f> BlockConverter<'a, 'f> {
    fn new(document: &'a Document, formatter: &'f dyn Formatter, file_id: usize) -> Self {
        BlockConverter {
            document,
            formatter,
            file_id,
            state: ConvertState {
                position: 0,
                container: Container::None,
                notes: Vec::new(),
            },
            output: String::new(),
        }
    }

    fn run(mut self) -> Result<String, ConvertError> {
        let document = self.document;
        self.output.push_str(&self.formatter.header());

        while let Some(line) = document.line(self.state.position) {
            self.process_line(line)?;
        }

        self.close_list();
        self.close_paragraph();
        self.output.push_str(&self.formatter.footer());

        debug!(
            lines = document.len(),
            notes = self.state.notes.len(),
            "conversion finished"
        );
        Ok(self.output)
    }

    /// Handle the line at the current position and advance past it (and past
    /// any body lines it consumes).
    fn process_line(&mut self, line: &'a str) -> Result<(), ConvertError> {
        if self.state.container == Container::List && !is_list_item(line) {
            self.close_list();
        }
        if self.state.container == Container::Paragraph
            && !bang::is_note_line(line)
            && ends_paragraph(line)
        {
            self.close_paragraph();
        }

        if bang::is_bang_line(line) {
            return self.dispatch_bang();
        }

        if line.starts_with(COMMENT_MARKER) {
            // Comment, nothing to emit.
        } else if let Some(text) = line.strip_prefix(SUBTITLE_MARKER) {
            self.output.push_str(&self.formatter.subtitle(text.trim()));
        } else if let Some(text) = line.strip_prefix(TITLE_MARKER) {
            self.output.push_str(&self.formatter.title(text.trim()));
        } else if let Some(text) = line.strip_prefix(LIST_MARKER) {
            self.open_list();
            let rendered = scan_inline(text.trim(), self.formatter);
            self.output.push_str(&self.formatter.list_item(&rendered));
        } else {
            self.open_paragraph();
            self.output.push_str(&scan_inline(line.trim(), self.formatter));
        }

        self.state.position += 1;
        Ok(())
    }

    fn dispatch_bang(&mut self) -> Result<(), ConvertError> {
        let parsed = bang::parse(self.document, self.state.position, self.file_id)?;
        debug!(
            form = parsed.kind.name(),
            line = self.state.position + 1,
            "bang form"
        );

        match parsed.form {
            BangForm::Book { title, author } => {
                self.output.push_str(&self.formatter.frontpage(title, author));
            }
            BangForm::Image { path, description } => {
                self.output.push_str(&self.formatter.image(path, description));
            }
            BangForm::Code { lines } => {
                self.output.push_str(&self.formatter.code(&lines));
            }
            BangForm::Citation { quote, author } => {
                self.output.push_str(&self.formatter.citation(quote, author));
            }
            BangForm::Note { body } => {
                self.state.notes.push(body);
                let index = self.state.notes.len();
                self.output.push_str(&self.formatter.note_reference(index));
            }
            BangForm::ShowNotes { title } => self.show_notes(title),
        }

        self.state.position += parsed.consumed;
        Ok(())
    }

    fn show_notes(&mut self, title: &str) {
        if self.state.notes.is_empty() {
            return;
        }

        let formatter = self.formatter;
        self.output.push_str(&formatter.title(title));
        self.output.push_str(&formatter.start_notes());
        for (i, note) in self.state.notes.iter().enumerate() {
            let rendered = scan_inline(note.trim(), formatter);
            self.output.push_str(&formatter.notes_item(i + 1, &rendered));
        }
        self.output.push_str(&formatter.end_notes());
    }

    // -----------------------------------------------------------------------
    // Container transitions
    // -----------------------------------------------------------------------

    fn open_paragraph(&mut self) {
        if self.state.container != Container::Paragraph {
            trace!(line = self.state.position + 1, "open paragraph");
            self.output.push_str(&self.formatter.start_paragraph());
            self.state.container = Container::Paragraph;
        }
    }

    fn close_paragraph(&mut self) {
        if self.state.container == Container::Paragraph {
            trace!(line = self.state.position + 1, "close paragraph");
            self.output.push_str(&self.formatter.end_paragraph());
            self.state.container = Container::None;
        }
    }

    fn open_list(&mut self) {
        if self.state.container != Container::List {
            trace!(line = self.state.position + 1, "open list");
            self.output.push_str(&self.formatter.start_list());
            self.state.container = Container::List;
        }
    }

    fn close_list(&mut self) {
        if self.state.container == Container::List {
            trace!(line = self.state.position + 1, "close list");
            self.output.push_str(&self.formatter.end_list());
            self.state.container = Container::None;
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn is_list_item(line: &str) -> bool {
    line.starts_with(LIST_MARKER)
}

/// Lines that cannot continue a paragraph: list items, bang forms, headings
/// and blank lines.
fn ends_paragraph(line: &str) -> bool {
    is_list_item(line)
        || bang::is_bang_line(line)
        || line.starts_with(TITLE_MARKER)
        || line.trim().is_empty()
}

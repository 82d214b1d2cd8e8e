//! The capability interface the converter renders through.

/// An output target for siboom documents.
///
/// The converter never produces markup itself: every construct it recognises
/// is turned into a call on a `Formatter`, and the returned fragments are
/// concatenated in input order. Implementations are expected to be pure
/// functions of their arguments.
pub trait Formatter {
    /// Emitted once, before the first line is processed.
    fn header(&self) -> String;

    /// Emitted once, after every open container has been closed.
    fn footer(&self) -> String;

    /// Front page from a `!book` form.
    fn frontpage(&self, title: &str, author: &str) -> String;

    fn title(&self, text: &str) -> String;

    fn subtitle(&self, text: &str) -> String;

    fn image(&self, path: &str, description: &str) -> String;

    /// Preformatted block. `lines` are passed verbatim, terminators included,
    /// and have not been through inline scanning.
    fn code(&self, lines: &[&str]) -> String;

    fn citation(&self, quote: &str, author: &str) -> String;

    /// Reference to the note with the given 1-based index.
    fn note_reference(&self, index: usize) -> String;

    fn start_paragraph(&self) -> String;

    fn end_paragraph(&self) -> String;

    /// Plain text that carries no markup of its own. This is the only place
    /// raw document text reaches the output during inline scanning, so
    /// escaping belongs here.
    fn emit_text(&self, text: &str) -> String;

    fn start_list(&self) -> String;

    fn end_list(&self) -> String;

    /// A list item whose text has already been rendered by the inline scanner.
    fn list_item(&self, rendered: &str) -> String;

    fn start_notes(&self) -> String;

    fn end_notes(&self) -> String;

    /// An entry of the notes list, with pre-rendered text.
    fn notes_item(&self, index: usize, rendered: &str) -> String;

    fn start_bold(&self) -> String;

    fn end_bold(&self) -> String;

    fn start_italic(&self) -> String;

    fn end_italic(&self) -> String;
}

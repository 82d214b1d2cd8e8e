//! A formatter that records each call as a short bracketed tag, so tests can
//! check emission order without caring about any real output format.

use crate::format::Formatter;

pub struct Recorder;

impl Formatter for Recorder {
    fn header(&self) -> String {
        "[doc]".into()
    }

    fn footer(&self) -> String {
        "[/doc]".into()
    }

    fn frontpage(&self, title: &str, author: &str) -> String {
        format!("[front {}|{}]", title, author)
    }

    fn title(&self, text: &str) -> String {
        format!("[title {}]", text)
    }

    fn subtitle(&self, text: &str) -> String {
        format!("[sub {}]", text)
    }

    fn image(&self, path: &str, description: &str) -> String {
        format!("[img {}|{}]", path, description)
    }

    fn code(&self, lines: &[&str]) -> String {
        format!("[code]{}[/code]", lines.concat())
    }

    fn citation(&self, quote: &str, author: &str) -> String {
        format!("[cit {}|{}]", quote, author)
    }

    fn note_reference(&self, index: usize) -> String {
        format!("[ref {}]", index)
    }

    fn start_paragraph(&self) -> String {
        "[p]".into()
    }

    fn end_paragraph(&self) -> String {
        "[/p]".into()
    }

    fn emit_text(&self, text: &str) -> String {
        text.to_string()
    }

    fn start_list(&self) -> String {
        "[ul]".into()
    }

    fn end_list(&self) -> String {
        "[/ul]".into()
    }

    fn list_item(&self, rendered: &str) -> String {
        format!("[li {}]", rendered)
    }

    fn start_notes(&self) -> String {
        "[notes]".into()
    }

    fn end_notes(&self) -> String {
        "[/notes]".into()
    }

    fn notes_item(&self, index: usize, rendered: &str) -> String {
        format!("[n {} {}]", index, rendered)
    }

    fn start_bold(&self) -> String {
        "[b]".into()
    }

    fn end_bold(&self) -> String {
        "[/b]".into()
    }

    fn start_italic(&self) -> String {
        "[i]".into()
    }

    fn end_italic(&self) -> String {
        "[/i]".into()
    }
}

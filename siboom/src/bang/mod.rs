//! Bang forms: multi-line directives introduced by a line starting with `!`.
//!
//! ```text
//! !image
//! figures/cat.png
//! A cat, sitting
//! !
//! ```
//!
//! The name is the rest of the directive line. The body runs up to the next
//! line starting with `!`, which closes the form and is consumed with it.

use crate::document::Document;
use crate::parser::error::{ConvertError, ConvertErrorKind};

/// A decoded directive, borrowing its arguments from the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BangForm<'a> {
    Book { title: &'a str, author: &'a str },
    Image { path: &'a str, description: &'a str },
    Code { lines: Vec<&'a str> },
    Citation { quote: &'a str, author: &'a str },
    /// The raw body line; trimmed only when the notes are rendered.
    Note { body: &'a str },
    ShowNotes { title: &'a str },
}

/// The closed set of directive names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BangKind {
    Book,
    Image,
    Code,
    Citation,
    Note,
    ShowNotes,
}

impl BangKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "book" => Some(BangKind::Book),
            "image" => Some(BangKind::Image),
            "code" => Some(BangKind::Code),
            "cit" => Some(BangKind::Citation),
            "note" => Some(BangKind::Note),
            "shownotes" => Some(BangKind::ShowNotes),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BangKind::Book => "book",
            BangKind::Image => "image",
            BangKind::Code => "code",
            BangKind::Citation => "cit",
            BangKind::Note => "note",
            BangKind::ShowNotes => "shownotes",
        }
    }

    /// Number of body lines the directive takes, or `None` when any count
    /// is accepted.
    pub fn arity(self) -> Option<usize> {
        match self {
            BangKind::Book | BangKind::Image | BangKind::Citation => Some(2),
            BangKind::Note | BangKind::ShowNotes => Some(1),
            BangKind::Code => None,
        }
    }
}

/// A bang form together with the number of document lines it spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedBang<'a> {
    pub kind: BangKind,
    pub form: BangForm<'a>,
    /// Directive line, body and closing `!` line.
    pub consumed: usize,
}

pub fn is_bang_line(line: &str) -> bool {
    line.starts_with('!')
}

/// The trimmed directive name of a `!` line.
pub fn bang_name(line: &str) -> Option<&str> {
    line.strip_prefix('!').map(str::trim)
}

/// Whether the line opens a `!note` form. Notes are inline references, so
/// they do not interrupt an open paragraph.
pub fn is_note_line(line: &str) -> bool {
    bang_name(line) == Some(BangKind::Note.name())
}

/// Parse the bang form whose directive line is at `index`.
pub fn parse<'a>(
    document: &'a Document,
    index: usize,
    file_id: usize,
) -> Result<ParsedBang<'a>, ConvertError> {
    let error = |kind| ConvertError::new(kind, index, document.span(index), file_id);

    let name = document.line(index).and_then(bang_name).unwrap_or_default();
    let kind = BangKind::from_name(name)
        .ok_or_else(|| error(ConvertErrorKind::UnknownBangForm(name.to_string())))?;

    let mut body = Vec::new();
    let mut cursor = index + 1;
    loop {
        match document.line(cursor) {
            Some(line) if is_bang_line(line) => break,
            Some(line) => body.push(line),
            None => {
                return Err(error(ConvertErrorKind::UnterminatedBangForm(
                    name.to_string(),
                ))
                .with_note("close the form with a line starting with `!`"));
            }
        }
        cursor += 1;
    }

    if let Some(expected) = kind.arity() {
        if body.len() != expected {
            return Err(error(ConvertErrorKind::MalformedBangForm {
                name: name.to_string(),
                expected,
                found: body.len(),
            }));
        }
    }

    let consumed = body.len() + 2;
    let form = match kind {
        BangKind::Book => BangForm::Book {
            title: body[0].trim(),
            author: body[1].trim(),
        },
        BangKind::Image => BangForm::Image {
            path: body[0].trim(),
            description: body[1].trim(),
        },
        BangKind::Code => BangForm::Code { lines: body },
        BangKind::Citation => BangForm::Citation {
            quote: body[0].trim(),
            author: body[1].trim(),
        },
        BangKind::Note => BangForm::Note { body: body[0] },
        BangKind::ShowNotes => BangForm::ShowNotes {
            title: body[0].trim(),
        },
    };

    Ok(ParsedBang {
        kind,
        form,
        consumed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(lines: &[&str]) -> Document {
        Document::from_lines(lines.iter().copied())
    }

    #[test]
    fn name_is_trimmed() {
        let document = doc(&["!  image  \n", " cat.png \n", "A cat\n", "!\n"]);
        let parsed = parse(&document, 0, 0).unwrap();
        assert_eq!(parsed.kind, BangKind::Image);
        assert_eq!(
            parsed.form,
            BangForm::Image {
                path: "cat.png",
                description: "A cat"
            }
        );
        assert_eq!(parsed.consumed, 4);
    }

    #[test]
    fn code_keeps_lines_verbatim() {
        let document = doc(&["!code", "  a\n", "b\n", "!", "after"]);
        let parsed = parse(&document, 0, 0).unwrap();
        assert_eq!(parsed.form, BangForm::Code { lines: vec!["  a\n", "b\n"] });
        assert_eq!(parsed.consumed, 4);
    }

    #[test]
    fn code_may_be_empty() {
        let document = doc(&["!code", "!end"]);
        let parsed = parse(&document, 0, 0).unwrap();
        assert_eq!(parsed.form, BangForm::Code { lines: vec![] });
        assert_eq!(parsed.consumed, 2);
    }

    #[test]
    fn note_body_is_raw() {
        let document = doc(&["intro", "!note", "  see here \n", "!"]);
        let parsed = parse(&document, 1, 0).unwrap();
        assert_eq!(parsed.form, BangForm::Note { body: "  see here \n" });
    }

    #[test]
    fn unknown_name_is_reported_before_body() {
        let document = doc(&["text", "!bogus"]);
        let err = parse(&document, 1, 7).unwrap_err();
        assert_eq!(err.kind, ConvertErrorKind::UnknownBangForm("bogus".into()));
        assert_eq!(err.line_index, 1);
        assert_eq!(err.file_id, 7);
    }

    #[test]
    fn missing_terminator_is_fatal() {
        let document = doc(&["!cit", "quote", "author"]);
        let err = parse(&document, 0, 0).unwrap_err();
        assert_eq!(err.kind, ConvertErrorKind::UnterminatedBangForm("cit".into()));
        assert_eq!(err.notes.len(), 1);
    }

    #[test]
    fn wrong_arity_is_fatal() {
        let document = doc(&["!book", "Title only", "!"]);
        let err = parse(&document, 0, 0).unwrap_err();
        assert_eq!(
            err.kind,
            ConvertErrorKind::MalformedBangForm {
                name: "book".into(),
                expected: 2,
                found: 1
            }
        );

        let document = doc(&["!shownotes", "Notes", "extra", "!"]);
        assert!(parse(&document, 0, 0).is_err());
    }

    #[test]
    fn note_lines() {
        assert!(is_note_line("!note\n"));
        assert!(is_note_line("! note "));
        assert!(!is_note_line("!notes"));
        assert!(!is_note_line("note"));
    }
}

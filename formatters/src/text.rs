use siboom::Formatter;

const CODE_INDENT: &str = "    ";

/// Renders plain text: upper-cased headings, `*bold*` and `_italic_` markers.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextFormatter;

impl Formatter for TextFormatter {
    fn header(&self) -> String {
        String::new()
    }

    fn footer(&self) -> String {
        "\nEOF\n".into()
    }

    fn frontpage(&self, title: &str, author: &str) -> String {
        format!("{}\n{}\n\n", title.to_uppercase(), author)
    }

    fn title(&self, text: &str) -> String {
        format!("\n{}\n\n", text.to_uppercase())
    }

    fn subtitle(&self, text: &str) -> String {
        format!("\n{}\n\n", text)
    }

    fn image(&self, _path: &str, description: &str) -> String {
        format!("\n  (image: {})\n\n", description)
    }

    fn code(&self, lines: &[&str]) -> String {
        let mut out = String::from("\n");
        for line in lines {
            out.push_str(CODE_INDENT);
            out.push_str(line);
        }
        out.push('\n');
        out
    }

    fn citation(&self, quote: &str, author: &str) -> String {
        format!("\n  {}\n  -- {}\n\n", quote, author)
    }

    fn note_reference(&self, index: usize) -> String {
        format!("[{}] ", index)
    }

    fn start_paragraph(&self) -> String {
        String::new()
    }

    fn end_paragraph(&self) -> String {
        "\n".into()
    }

    fn emit_text(&self, text: &str) -> String {
        if text.trim().is_empty() {
            String::new()
        } else {
            text.to_string()
        }
    }

    fn start_list(&self) -> String {
        "\n".into()
    }

    fn end_list(&self) -> String {
        "\n".into()
    }

    fn list_item(&self, rendered: &str) -> String {
        format!(" * {}\n", rendered)
    }

    fn start_notes(&self) -> String {
        "\n".into()
    }

    fn end_notes(&self) -> String {
        "\n".into()
    }

    fn notes_item(&self, index: usize, rendered: &str) -> String {
        format!(" [{}] {}\n", index, rendered)
    }

    fn start_bold(&self) -> String {
        "*".into()
    }

    fn end_bold(&self) -> String {
        "*".into()
    }

    fn start_italic(&self) -> String {
        "_".into()
    }

    fn end_italic(&self) -> String {
        "_".into()
    }
}

use siboom::Formatter;

const DOCTYPE: &str =
    r#"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 4.01//EN" "http://www.w3.org/TR/html4/strict.dtd">"#;
const STYLESHEET: &str = "style.css";

/// Renders a standalone HTML 4.01 page.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlFormatter;

impl Formatter for HtmlFormatter {
    fn header(&self) -> String {
        format!(
            r#"{}<html><head><link href="{}" rel="stylesheet" type="text/css"></head><body>"#,
            DOCTYPE, STYLESHEET
        ) + "\n"
    }

    fn footer(&self) -> String {
        "</body></html>\n".into()
    }

    fn frontpage(&self, title: &str, author: &str) -> String {
        format!(
            "<h1>{}</h1>\n<address>{}</address>\n",
            escape_html(title),
            escape_html(author)
        )
    }

    fn title(&self, text: &str) -> String {
        format!("<h1>{}</h1>\n", escape_html(text))
    }

    fn subtitle(&self, text: &str) -> String {
        format!("<h2>{}</h2>\n", escape_html(text))
    }

    fn image(&self, path: &str, description: &str) -> String {
        format!(
            r#"<div class="image"><img src="{}"><br>{}</div>"#,
            escape_html(path),
            escape_html(description)
        ) + "\n"
    }

    fn code(&self, lines: &[&str]) -> String {
        format!(
            "<pre class=\"code\">\n{}</pre>\n",
            escape_html(&lines.concat())
        )
    }

    fn citation(&self, quote: &str, author: &str) -> String {
        format!(
            r#"<div class="citation">{}<br><address>-- {}</address></div>"#,
            escape_html(quote),
            escape_html(author)
        ) + "\n"
    }

    fn note_reference(&self, index: usize) -> String {
        format!(r##"<a class="noteref" href="#note{0}"><sup>{0}</sup></a> "##, index)
    }

    fn start_paragraph(&self) -> String {
        "\n<p>".into()
    }

    fn end_paragraph(&self) -> String {
        "</p>\n".into()
    }

    fn emit_text(&self, text: &str) -> String {
        escape_html(text)
    }

    fn start_list(&self) -> String {
        "\n<ul>\n".into()
    }

    fn end_list(&self) -> String {
        "\n</ul>\n".into()
    }

    fn list_item(&self, rendered: &str) -> String {
        format!("<li>{}</li>\n", rendered)
    }

    fn start_notes(&self) -> String {
        "\n<ul>\n".into()
    }

    fn end_notes(&self) -> String {
        "\n</ul>\n".into()
    }

    fn notes_item(&self, index: usize, rendered: &str) -> String {
        format!(r#"<li><a name="note{0}">{0}</a> {1}</li>"#, index, rendered) + "\n"
    }

    fn start_bold(&self) -> String {
        "<b>".into()
    }

    fn end_bold(&self) -> String {
        "</b>".into()
    }

    fn start_italic(&self) -> String {
        "<i>".into()
    }

    fn end_italic(&self) -> String {
        "</i>".into()
    }
}

/// Escape the characters that are significant in HTML text and
/// double-quoted attributes.
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '"' => result.push_str("&quot;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    result
}

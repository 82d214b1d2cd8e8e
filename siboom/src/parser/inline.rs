use crate::format::Formatter;

const DELIMITER: u8 = b'*';
const ESCAPE: u8 = b'\\';

/// Emphasis spans open on the current line.
#[derive(Debug, Default, Clone, Copy)]
struct InlineState {
    bold_open: bool,
    italic_open: bool,
}

/// Render one line of text, turning `**` into bold and `*` into italic.
///
/// A backslash right before a `*` makes it literal: the backslash is dropped
/// and the star is kept as text. Spans never leak past the end of the line,
/// whatever is left open is closed there, bold before italic.
pub fn scan_inline(line: &str, formatter: &dyn Formatter) -> String {
    let bytes = line.as_bytes();
    let mut state = InlineState::default();
    let mut output = String::new();
    // Text collected since the last delimiter, with escapes resolved.
    let mut pending = String::new();
    // Start of the part of `line` not yet copied into `pending`.
    let mut boundary = 0;
    let mut cursor = 0;

    while let Some(offset) = line[cursor..].find(DELIMITER as char) {
        let pos = cursor + offset;

        if pos > 0 && bytes[pos - 1] == ESCAPE {
            pending.push_str(&line[boundary..pos - 1]);
            pending.push(DELIMITER as char);
            cursor = pos + 1;
            boundary = cursor;
            continue;
        }

        pending.push_str(&line[boundary..pos]);
        output.push_str(&formatter.emit_text(&pending));
        pending.clear();

        let toggle = if bytes.get(pos + 1) == Some(&DELIMITER) {
            cursor = pos + 2;
            state.bold_open = !state.bold_open;
            if state.bold_open {
                formatter.start_bold()
            } else {
                formatter.end_bold()
            }
        } else {
            cursor = pos + 1;
            state.italic_open = !state.italic_open;
            if state.italic_open {
                formatter.start_italic()
            } else {
                formatter.end_italic()
            }
        };
        output.push_str(&toggle);
        boundary = cursor;
    }

    pending.push_str(&line[boundary..]);
    output.push_str(&formatter.emit_text(&pending));

    if state.bold_open {
        output.push_str(&formatter.end_bold());
    }
    if state.italic_open {
        output.push_str(&formatter.end_italic());
    }
    output
}

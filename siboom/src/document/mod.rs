use std::ops::Range;

/// A siboom source document: the ordered sequence of raw lines a conversion
/// runs over.
///
/// Lines keep their terminators (`\n` / `\r\n`) so that verbatim blocks
/// reproduce their body exactly. Every other construct trims the line before
/// looking at its text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    lines: Vec<String>,
    /// Byte offset of each line in the concatenated source.
    offsets: Vec<usize>,
}

impl Document {
    /// Split source text into lines, keeping line terminators.
    pub fn from_source(source: &str) -> Self {
        Self::from_lines(source.split_inclusive('\n'))
    }

    /// Build a document from lines that were already split by the caller.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut offset = 0;
        let mut offsets = Vec::new();
        let lines: Vec<String> = lines
            .into_iter()
            .map(|line| {
                let line = line.into();
                offsets.push(offset);
                offset += line.len();
                line
            })
            .collect();
        Document { lines, offsets }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Byte span of a line within [`Document::source`], excluding its
    /// terminator. Indices past the end yield an empty span at the end of
    /// the source.
    pub fn span(&self, index: usize) -> Range<usize> {
        match (self.offsets.get(index), self.lines.get(index)) {
            (Some(&start), Some(line)) => {
                let content = line.trim_end_matches(['\n', '\r']);
                start..start + content.len()
            }
            _ => {
                let end = self.source_len();
                end..end
            }
        }
    }

    /// The concatenated source text, as handed to diagnostic reporting.
    pub fn source(&self) -> String {
        self.lines.concat()
    }

    fn source_len(&self) -> usize {
        match (self.offsets.last(), self.lines.last()) {
            (Some(start), Some(line)) => start + line.len(),
            _ => 0,
        }
    }
}

pub mod error;
pub mod html;
pub mod text;

use std::fmt;
use std::str::FromStr;

use siboom::Formatter;

pub use error::UnknownFormat;
pub use html::HtmlFormatter;
pub use text::TextFormatter;

/// The closed set of output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Html,
    Txt,
}

impl Format {
    pub const ALL: [Format; 2] = [Format::Html, Format::Txt];

    pub fn name(self) -> &'static str {
        match self {
            Format::Html => "html",
            Format::Txt => "txt",
        }
    }

    pub fn formatter(self) -> Box<dyn Formatter> {
        match self {
            Format::Html => Box::new(HtmlFormatter),
            Format::Txt => Box::new(TextFormatter),
        }
    }
}

impl FromStr for Format {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Format::ALL
            .into_iter()
            .find(|format| format.name() == s)
            .ok_or_else(|| UnknownFormat(s.to_string()))
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

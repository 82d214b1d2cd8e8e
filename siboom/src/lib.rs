pub mod bang;
pub mod document;
pub mod format;
pub mod parser;

#[cfg(test)]
mod testing;

pub use document::Document;
pub use format::Formatter;
pub use parser::{ConvertError, ConvertErrorKind, Converter, convert};

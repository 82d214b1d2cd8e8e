pub mod error;
pub mod inline;
mod structural;

pub use error::{ConvertError, ConvertErrorKind};
pub use inline::scan_inline;

use crate::document::Document;
use crate::format::Formatter;

/// Converter entry point: renders documents through one formatter.
///
/// Each call to [`Converter::convert`] starts from a fresh state, so a
/// converter can be reused for any number of documents.
pub struct Converter<'f> {
    formatter: &'f dyn Formatter,
    file_id: usize,
}

impl<'f> Converter<'f> {
    pub fn new(formatter: &'f dyn Formatter, file_id: usize) -> Self {
        Converter { formatter, file_id }
    }

    /// Convert a whole document. The first error aborts the run.
    pub fn convert(&self, document: &Document) -> Result<String, ConvertError> {
        structural::convert_lines(document, self.formatter, self.file_id)
    }
}

/// Convert `document` with `formatter`, labelling errors with file id 0.
pub fn convert(document: &Document, formatter: &dyn Formatter) -> Result<String, ConvertError> {
    Converter::new(formatter, 0).convert(document)
}

use std::fmt;

use crate::Format;

/// A format selector outside the known set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFormat(pub String);

impl fmt::Display for UnknownFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let known: Vec<&str> = Format::ALL.iter().map(|format| format.name()).collect();
        write!(
            f,
            "unknown output format: {} (expected {})",
            self.0,
            known.join(" or ")
        )
    }
}

impl std::error::Error for UnknownFormat {}

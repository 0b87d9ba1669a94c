//! Grid sizing error types.

use thiserror::Error;

/// Invalid responsive column sizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum GridError {
    #[error("column span must occupy at least one grid unit")]
    EmptySpan,

    #[error("column offset {offset} plus span {span} exceeds the {columns}-unit grid")]
    Overflow { offset: u16, span: u16, columns: u16 },
}

impl GridError {
    /// Returns whether the error came from the offset pushing the span out of the row.
    #[must_use]
    pub const fn is_overflow(&self) -> bool {
        matches!(self, Self::Overflow { .. })
    }
}

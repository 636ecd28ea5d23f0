// src/error.rs

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ExtractError>;

/// Extraction failures surfaced to the caller.
///
/// `Malformed` means the page does not have the shape the extractor
/// expects: a label, table, row or column is gone, or a field's text
/// no longer matches its pattern. The portal markup has changed;
/// whether to refetch or give up is the caller's decision.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("malformed page: {0}")]
    Malformed(String),

    #[error("not implemented: {0}")]
    Unimplemented(&'static str),
}

impl ExtractError {
    /// The common case: an expected element is missing.
    pub fn missing(what: impl std::fmt::Display) -> Self {
        ExtractError::Malformed(format!("{what} not found"))
    }
}

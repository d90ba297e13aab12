use thiserror::Error;

/// Errors returned when constructing filters or updating the process-wide
/// default all-files description.
///
/// All variants are reported synchronously by the call that received the bad
/// argument; no partially constructed filter is ever observable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// A required string argument was empty (extension text, or the argument
    /// to [`set_default_all_files_description`](crate::set_default_all_files_description)).
    #[error("empty input where a non-empty string is required")]
    EmptyInput,
    /// The extension text did not match any accepted spelling
    /// (`ext`, `.ext` or `*.ext`, with a single word-character token).
    #[error("invalid extension format: `{0}`")]
    InvalidFormat(String),
}

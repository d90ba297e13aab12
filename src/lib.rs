#![deny(missing_docs)]
//! File-dialog filter strings: canonical extension patterns and
//! deduplicating filter collections.
//!
//! Native file-dialog widgets restrict the selectable files with a
//! pipe-delimited string alternating description and wildcard pattern
//! (`Text files|*.txt|All files|*.*`). This crate models the two pieces of
//! that contract:
//!
//! - [`FileFilter`] — one `(pattern, description)` pair. The extension text
//!   is normalized at construction (`"txt"`, `".txt"` and `"*.txt"` all
//!   canonicalize to `"*.txt"`), and equality is defined by the pattern
//!   alone.
//! - [`FilterCollection`] — an insertion-ordered set of filters,
//!   deduplicated by pattern, whose `Display` form is the final dialog
//!   string.
//!
//! ```
//! use dialog_filters::{FileFilter, FilterCollection};
//!
//! # fn main() -> Result<(), dialog_filters::FilterError> {
//! let mut filters = FilterCollection::new();
//! filters.insert(FileFilter::new("txt", "Text files")?);
//! filters.insert(FileFilter::new(".md", "Markdown")?);
//! filters.insert(FileFilter::all_files());
//!
//! assert_eq!(
//!     filters.to_string(),
//!     "Text files|*.txt|Markdown|*.md|All files|*.*",
//! );
//! # Ok(())
//! # }
//! ```
//!
//! The crate only produces and manages the descriptive string: it never
//! touches the filesystem and does not test file names against patterns.
//! Note the `|` separator cannot be escaped, so descriptions must not
//! contain it.

mod collection;
mod error;
mod filter;

pub use collection::FilterCollection;
pub use error::FilterError;
pub use filter::{
    ALL_FILES_PATTERN, DEFAULT_ALL_FILES_DESCRIPTION, FileFilter, default_all_files_description,
    normalize_extension, set_default_all_files_description,
};

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{LazyLock, RwLock};

use regex::Regex;

use crate::collection::FilterCollection;
use crate::error::FilterError;

/// Fixed pattern of the all-files filter.
pub const ALL_FILES_PATTERN: &str = "*.*";

/// Built-in label used by [`FileFilter::all_files`] until
/// [`set_default_all_files_description`] replaces it.
pub const DEFAULT_ALL_FILES_DESCRIPTION: &str = "All files";

// A `*` spelling must carry the dot: `*txt` is malformed, `*.txt` is not.
static EXTENSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\*?\.)?(\w+)$").expect("extension regex compiles"));

// `None` means "use the built-in label". A plain reference swap under the
// lock; concurrent readers observe either the old or the new label, never a
// torn value.
static ALL_FILES_DESCRIPTION: RwLock<Option<String>> = RwLock::new(None);

/// Normalizes caller-supplied extension text into the canonical wildcard
/// pattern `*.<token>`.
///
/// Three equivalent spellings are accepted: `"txt"`, `".txt"` and `"*.txt"`
/// all canonicalize to `"*.txt"`. The token must be one or more word
/// characters (letters, digits, underscore); anything else is rejected.
///
/// # Errors
///
/// [`FilterError::EmptyInput`] for an empty string,
/// [`FilterError::InvalidFormat`] for anything the pattern grammar does not
/// accept (embedded spaces, multi-part extensions such as `tar.gz`, stray
/// wildcards).
pub fn normalize_extension(extension: &str) -> Result<String, FilterError> {
    if extension.is_empty() {
        return Err(FilterError::EmptyInput);
    }
    let caps = EXTENSION_RE
        .captures(extension)
        .ok_or_else(|| FilterError::InvalidFormat(extension.to_string()))?;
    Ok(format!("*.{}", &caps[1]))
}

/// Returns the current process-wide description used by
/// [`FileFilter::all_files`].
pub fn default_all_files_description() -> String {
    let guard = ALL_FILES_DESCRIPTION
        .read()
        .unwrap_or_else(|e| e.into_inner());
    guard
        .clone()
        .unwrap_or_else(|| DEFAULT_ALL_FILES_DESCRIPTION.to_string())
}

/// Replaces the process-wide description used by subsequently constructed
/// [`FileFilter::all_files`] values.
///
/// Filters constructed before the call keep the description they captured at
/// construction time.
///
/// # Errors
///
/// [`FilterError::EmptyInput`] if `description` is empty.
pub fn set_default_all_files_description(description: &str) -> Result<(), FilterError> {
    if description.is_empty() {
        return Err(FilterError::EmptyInput);
    }
    let mut guard = ALL_FILES_DESCRIPTION
        .write()
        .unwrap_or_else(|e| e.into_inner());
    *guard = Some(description.to_string());
    drop(guard);
    trace_default_description_replaced(description);
    Ok(())
}

/// One file-dialog filter: a canonical wildcard pattern paired with a
/// human-readable description.
///
/// Equality, ordering within collections and hashing are defined by the
/// pattern alone; two filters with the same pattern and different
/// descriptions are equal. Values are immutable after construction.
///
/// The string projection is `description|pattern`, the element shape of the
/// pipe-delimited string consumed by native file-dialog widgets:
///
/// ```
/// use dialog_filters::FileFilter;
///
/// let f = FileFilter::new("txt", "Text files")?;
/// assert_eq!(f.pattern(), "*.txt");
/// assert_eq!(f.to_string(), "Text files|*.txt");
/// # Ok::<(), dialog_filters::FilterError>(())
/// ```
#[derive(Clone, Debug)]
pub struct FileFilter {
    pattern: String,
    description: String,
}

impl FileFilter {
    /// Creates a filter from extension text and a description.
    ///
    /// The extension is normalized via [`normalize_extension`]. An empty
    /// description falls back to the canonical pattern; a non-empty one is
    /// stored verbatim (note the `|` separator of the serialized form cannot
    /// be escaped, so descriptions must not contain it).
    ///
    /// # Errors
    ///
    /// Propagates [`normalize_extension`] failures.
    pub fn new(extension: &str, description: impl Into<String>) -> Result<Self, FilterError> {
        let pattern = normalize_extension(extension)?;
        let description = description.into();
        let description = if description.is_empty() {
            pattern.clone()
        } else {
            description
        };
        Ok(Self {
            pattern,
            description,
        })
    }

    /// Creates a filter whose description defaults to its canonical pattern.
    ///
    /// # Errors
    ///
    /// Propagates [`normalize_extension`] failures.
    pub fn from_extension(extension: &str) -> Result<Self, FilterError> {
        Self::new(extension, "")
    }

    /// Creates the all-files filter (`*.*`) labelled with the current
    /// process-wide default description.
    pub fn all_files() -> Self {
        Self::all_files_with_description(default_all_files_description())
    }

    /// Creates the all-files filter (`*.*`) with an explicit description.
    ///
    /// An empty description falls back to the pattern.
    pub fn all_files_with_description(description: impl Into<String>) -> Self {
        let description = description.into();
        let description = if description.is_empty() {
            ALL_FILES_PATTERN.to_string()
        } else {
            description
        };
        Self {
            pattern: ALL_FILES_PATTERN.to_string(),
            description,
        }
    }

    /// Canonical wildcard pattern, `*.<token>` (or `*.*` for all-files).
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Human-readable label shown by the file picker. Never empty.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns `true` if this is the all-files filter.
    pub fn is_all_files(&self) -> bool {
        self.pattern == ALL_FILES_PATTERN
    }

    /// Merges two filters into a collection.
    ///
    /// Yields two elements, or one when the patterns are equal (`a` wins and
    /// keeps its description).
    pub fn merge(a: FileFilter, b: FileFilter) -> FilterCollection {
        let mut filters = FilterCollection::new();
        filters.insert(a);
        filters.insert(b);
        filters
    }
}

impl PartialEq for FileFilter {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern
    }
}

impl Eq for FileFilter {}

impl Hash for FileFilter {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pattern.hash(state);
    }
}

impl PartialEq<str> for FileFilter {
    fn eq(&self, other: &str) -> bool {
        self.pattern == other
    }
}

impl PartialEq<&str> for FileFilter {
    fn eq(&self, other: &&str) -> bool {
        self.pattern == *other
    }
}

impl fmt::Display for FileFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.description, self.pattern)
    }
}

impl std::ops::Add for FileFilter {
    type Output = FilterCollection;

    fn add(self, rhs: FileFilter) -> FilterCollection {
        FileFilter::merge(self, rhs)
    }
}

#[cfg(feature = "tracing")]
fn trace_default_description_replaced(description: &str) {
    tracing::debug!(description, "default all-files description replaced");
}

#[cfg(not(feature = "tracing"))]
fn trace_default_description_replaced(_description: &str) {}

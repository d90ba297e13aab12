use std::fmt;
use std::ops::Add;

use indexmap::IndexSet;

use crate::error::FilterError;
use crate::filter::FileFilter;

/// A deduplicating, insertion-ordered collection of [`FileFilter`] values.
///
/// Membership is keyed by the filter equality contract (pattern only):
/// inserting a second filter with a pattern already present is a no-op that
/// keeps the first-inserted description. Iteration and serialization follow
/// insertion order, so the dialog string is deterministic for a given
/// construction sequence.
///
/// The string projection joins each member's `description|pattern` form with
/// `|`, the format consumed by native file-dialog widgets:
///
/// ```
/// use dialog_filters::{FileFilter, FilterCollection};
///
/// let mut filters = FilterCollection::new();
/// filters.insert(FileFilter::new("txt", "Text files")?);
/// filters.insert(FileFilter::all_files_with_description("All files"));
/// assert_eq!(filters.to_string(), "Text files|*.txt|All files|*.*");
/// # Ok::<(), dialog_filters::FilterError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct FilterCollection {
    filters: IndexSet<FileFilter>,
}

impl FilterCollection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a collection from raw extension strings, one default-description
    /// filter per extension.
    ///
    /// Duplicate patterns collapse to the first occurrence.
    ///
    /// # Errors
    ///
    /// Fails on the first extension rejected by
    /// [`normalize_extension`](crate::normalize_extension); no collection is
    /// produced in that case.
    pub fn from_extensions<I, S>(extensions: I) -> Result<Self, FilterError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut filters = Self::new();
        for extension in extensions {
            filters.insert(FileFilter::from_extension(extension.as_ref())?);
        }
        trace_built_from_extensions(filters.len());
        Ok(filters)
    }

    /// Number of distinct patterns currently held.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Returns `true` if the collection holds no filters.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Inserts a filter.
    ///
    /// Returns `true` if its pattern was not already present; `false` for a
    /// no-op duplicate (the existing member, including its description, is
    /// kept).
    pub fn insert(&mut self, filter: FileFilter) -> bool {
        self.filters.insert(filter)
    }

    /// Removes the filter with the given pattern.
    ///
    /// Returns `true` if it was present. The relative order of the remaining
    /// members is preserved.
    pub fn remove(&mut self, filter: &FileFilter) -> bool {
        self.filters.shift_remove(filter)
    }

    /// Returns `true` if a filter with the given pattern is present.
    pub fn contains(&self, filter: &FileFilter) -> bool {
        self.filters.contains(filter)
    }

    /// Returns the stored member equal to `filter`, if any.
    ///
    /// Useful to recover the description retained for a pattern.
    pub fn get(&self, filter: &FileFilter) -> Option<&FileFilter> {
        self.filters.get(filter)
    }

    /// Removes all filters.
    pub fn clear(&mut self) {
        self.filters.clear();
    }

    /// Iterates over the members in insertion order.
    pub fn iter(&self) -> indexmap::set::Iter<'_, FileFilter> {
        self.filters.iter()
    }

    /// Adds every filter of `other` that is not already present.
    ///
    /// New members are appended in `other`'s iteration order.
    pub fn union_with(&mut self, other: &FilterCollection) {
        for filter in &other.filters {
            self.filters.insert(filter.clone());
        }
    }

    /// Keeps only the filters whose pattern is also present in `other`.
    pub fn intersect_with(&mut self, other: &FilterCollection) {
        self.filters.retain(|filter| other.contains(filter));
    }

    /// Removes every filter whose pattern is present in `other`.
    pub fn difference_with(&mut self, other: &FilterCollection) {
        self.filters.retain(|filter| !other.contains(filter));
    }

    /// Keeps the filters present in exactly one of the two collections.
    ///
    /// Members of `other` missing from `self` are appended with their own
    /// descriptions.
    pub fn symmetric_difference_with(&mut self, other: &FilterCollection) {
        for filter in &other.filters {
            if !self.filters.shift_remove(filter) {
                self.filters.insert(filter.clone());
            }
        }
    }

    /// Returns `true` if every pattern of `self` is present in `other`.
    pub fn is_subset(&self, other: &FilterCollection) -> bool {
        self.filters.is_subset(&other.filters)
    }

    /// Returns `true` if every pattern of `other` is present in `self`.
    pub fn is_superset(&self, other: &FilterCollection) -> bool {
        self.filters.is_superset(&other.filters)
    }

    /// Returns `true` if `self` is a subset of `other` and strictly smaller.
    pub fn is_proper_subset(&self, other: &FilterCollection) -> bool {
        self.len() < other.len() && self.is_subset(other)
    }

    /// Returns `true` if `self` is a superset of `other` and strictly larger.
    pub fn is_proper_superset(&self, other: &FilterCollection) -> bool {
        self.len() > other.len() && self.is_superset(other)
    }

    /// Returns `true` if the two collections share at least one pattern.
    pub fn overlaps(&self, other: &FilterCollection) -> bool {
        !self.filters.is_disjoint(&other.filters)
    }

    /// Returns a new collection equal to `self` plus `filter`, leaving `self`
    /// untouched.
    pub fn with(&self, filter: FileFilter) -> FilterCollection {
        let mut out = self.clone();
        out.insert(filter);
        out
    }
}

/// Set equality: same patterns, regardless of insertion order or
/// descriptions.
impl PartialEq for FilterCollection {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }
}

impl Eq for FilterCollection {}

impl fmt::Display for FilterCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, filter) in self.filters.iter().enumerate() {
            if i > 0 {
                f.write_str("|")?;
            }
            write!(f, "{filter}")?;
        }
        Ok(())
    }
}

impl FromIterator<FileFilter> for FilterCollection {
    fn from_iter<I: IntoIterator<Item = FileFilter>>(iter: I) -> Self {
        let mut filters = Self::new();
        filters.extend(iter);
        filters
    }
}

impl Extend<FileFilter> for FilterCollection {
    fn extend<I: IntoIterator<Item = FileFilter>>(&mut self, iter: I) {
        for filter in iter {
            self.insert(filter);
        }
    }
}

impl IntoIterator for FilterCollection {
    type Item = FileFilter;
    type IntoIter = indexmap::set::IntoIter<FileFilter>;

    fn into_iter(self) -> Self::IntoIter {
        self.filters.into_iter()
    }
}

impl<'a> IntoIterator for &'a FilterCollection {
    type Item = &'a FileFilter;
    type IntoIter = indexmap::set::Iter<'a, FileFilter>;

    fn into_iter(self) -> Self::IntoIter {
        self.filters.iter()
    }
}

impl Add<FileFilter> for FilterCollection {
    type Output = FilterCollection;

    fn add(mut self, rhs: FileFilter) -> FilterCollection {
        self.insert(rhs);
        self
    }
}

impl Add<FileFilter> for &FilterCollection {
    type Output = FilterCollection;

    fn add(self, rhs: FileFilter) -> FilterCollection {
        self.with(rhs)
    }
}

#[cfg(feature = "tracing")]
fn trace_built_from_extensions(count: usize) {
    tracing::trace!(count, "filter collection built from raw extensions");
}

#[cfg(not(feature = "tracing"))]
fn trace_built_from_extensions(_count: usize) {}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(ext: &str, desc: &str) -> FileFilter {
        FileFilter::new(ext, desc).unwrap()
    }

    #[test]
    fn insert_deduplicates_by_pattern_and_keeps_first_description() {
        let mut filters = FilterCollection::new();
        assert!(filters.insert(filter("txt", "Text files")));
        assert!(!filters.insert(filter("txt", "Other label")));
        assert_eq!(filters.len(), 1);
        let probe = FileFilter::from_extension("txt").unwrap();
        assert_eq!(filters.get(&probe).unwrap().description(), "Text files");
    }

    #[test]
    fn empty_collection_renders_empty_string() {
        assert_eq!(FilterCollection::new().to_string(), "");
    }

    #[test]
    fn display_joins_members_with_pipes_in_insertion_order() {
        let mut filters = FilterCollection::new();
        filters.insert(filter("txt", "Text files"));
        filters.insert(FileFilter::all_files_with_description("All files"));
        assert_eq!(filters.to_string(), "Text files|*.txt|All files|*.*");
    }

    #[test]
    fn remove_preserves_relative_order() {
        let mut filters = FilterCollection::from_extensions(["a", "b", "c"]).unwrap();
        assert!(filters.remove(&FileFilter::from_extension("b").unwrap()));
        assert!(!filters.remove(&FileFilter::from_extension("b").unwrap()));
        // Default descriptions equal the pattern, hence the doubled tokens.
        assert_eq!(filters.to_string(), "*.a|*.a|*.c|*.c");
    }

    #[test]
    fn from_extensions_rejects_invalid_input() {
        let err = FilterCollection::from_extensions(["txt", "no good"]).unwrap_err();
        assert_eq!(err, FilterError::InvalidFormat("no good".to_string()));
    }

    #[test]
    fn from_extensions_collapses_duplicates() {
        let filters = FilterCollection::from_extensions(["txt", ".txt", "*.txt"]).unwrap();
        assert_eq!(filters.len(), 1);
    }

    #[test]
    fn case_differing_extensions_stay_distinct() {
        let filters = FilterCollection::from_extensions(["txt", "TXT"]).unwrap();
        assert_eq!(filters.len(), 2);
    }

    #[test]
    fn union_with_appends_missing_members() {
        let mut a = FilterCollection::from_extensions(["a", "b"]).unwrap();
        let b = FilterCollection::from_extensions(["b", "c"]).unwrap();
        a.union_with(&b);
        assert_eq!(a.to_string(), "*.a|*.a|*.b|*.b|*.c|*.c");
    }

    #[test]
    fn intersect_with_keeps_shared_patterns() {
        let mut a = FilterCollection::from_extensions(["a", "b"]).unwrap();
        let b = FilterCollection::from_extensions(["b", "c"]).unwrap();
        a.intersect_with(&b);
        assert_eq!(a.len(), 1);
        assert!(a.contains(&FileFilter::from_extension("b").unwrap()));
    }

    #[test]
    fn difference_with_drops_shared_patterns() {
        let mut a = FilterCollection::from_extensions(["a", "b"]).unwrap();
        let b = FilterCollection::from_extensions(["b", "c"]).unwrap();
        a.difference_with(&b);
        assert_eq!(a.len(), 1);
        assert!(a.contains(&FileFilter::from_extension("a").unwrap()));
    }

    #[test]
    fn symmetric_difference_keeps_unshared_patterns() {
        let mut a = FilterCollection::from_extensions(["a", "b"]).unwrap();
        let b = FilterCollection::from_extensions(["b", "c"]).unwrap();
        a.symmetric_difference_with(&b);
        assert_eq!(a.len(), 2);
        assert!(a.contains(&FileFilter::from_extension("a").unwrap()));
        assert!(a.contains(&FileFilter::from_extension("c").unwrap()));
        assert!(!a.contains(&FileFilter::from_extension("b").unwrap()));
    }

    #[test]
    fn subset_and_superset_predicates() {
        let a = FilterCollection::from_extensions(["a", "b"]).unwrap();
        let mut ab_c = a.clone();
        ab_c.union_with(&FilterCollection::from_extensions(["c"]).unwrap());

        assert!(a.is_subset(&ab_c));
        assert!(a.is_proper_subset(&ab_c));
        assert!(ab_c.is_superset(&a));
        assert!(ab_c.is_proper_superset(&a));
        assert!(a.is_subset(&a));
        assert!(!a.is_proper_subset(&a));
    }

    #[test]
    fn overlaps_and_set_equality() {
        let a = FilterCollection::from_extensions(["a", "b"]).unwrap();
        let b = FilterCollection::from_extensions(["b", "c"]).unwrap();
        let c = FilterCollection::from_extensions(["c"]).unwrap();
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));

        // Set equality ignores insertion order and descriptions.
        let reversed: FilterCollection =
            [filter("b", "Bee"), filter("a", "Ay")].into_iter().collect();
        assert_eq!(a, reversed);
        assert_ne!(a, b);
    }

    #[test]
    fn with_and_add_do_not_mutate_the_receiver() {
        let a = FilterCollection::from_extensions(["a"]).unwrap();
        let widened = a.with(filter("b", "Bee"));
        assert_eq!(a.len(), 1);
        assert_eq!(widened.len(), 2);

        let widened = &a + filter("c", "Sea");
        assert_eq!(a.len(), 1);
        assert_eq!(widened.to_string(), "*.a|*.a|Sea|*.c");
    }

    #[test]
    fn collects_from_iterator_with_dedup() {
        let filters: FilterCollection = [
            filter("txt", "Text files"),
            filter("log", "Logs"),
            filter(".txt", "Duplicate"),
        ]
        .into_iter()
        .collect();
        assert_eq!(filters.len(), 2);
        assert_eq!(filters.to_string(), "Text files|*.txt|Logs|*.log");
    }
}

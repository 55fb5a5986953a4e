//! Sort entry points.
//!
//! Every entry point borrows its input and returns a freshly allocated
//! `Vec`; nothing is sorted in place and no state survives a call.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::Result;
use crate::merge;
use crate::ordering::{compare_records, SortSpec};
use crate::record::Fields;

/// Merge strategy used by [`sort_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Recursive divide-and-merge, call depth `log2(n)`.
    TopDown,
    /// Iterative merging of doubling runs, constant call depth.
    #[default]
    BottomUp,
}

impl Strategy {
    /// Returns the kebab-case name used in logs and serialized options.
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::TopDown => "top-down",
            Strategy::BottomUp => "bottom-up",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options controlling a sort call.
///
/// ```
/// use multisort::{SortOptions, Strategy};
///
/// let options: SortOptions = serde_json::from_str(r#"{"strategy": "top-down"}"#).unwrap();
/// assert_eq!(options.strategy, Strategy::TopDown);
/// assert_eq!(SortOptions::default().strategy, Strategy::BottomUp);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortOptions {
    /// Merge strategy, `BottomUp` unless set.
    pub strategy: Strategy,
}

impl SortOptions {
    /// Creates default options.
    pub fn new() -> Self {
        SortOptions::default()
    }

    /// Sets the merge strategy.
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }
}

/// Sorts `records` by `spec`, returning references in sorted order.
///
/// Stable: records that compare equal under every key keep their input order.
/// Missing fields sort before present ones for ascending keys and after them
/// for descending keys.
pub fn sort_refs<'a, T: Fields>(records: &'a [T], spec: &SortSpec) -> Vec<&'a T> {
    sort_refs_with(records, spec, &SortOptions::default())
}

/// [`sort_refs`] with explicit options.
pub fn sort_refs_with<'a, T: Fields>(
    records: &'a [T],
    spec: &SortSpec,
    options: &SortOptions,
) -> Vec<&'a T> {
    let handles: Vec<&T> = records.iter().collect();
    if handles.len() <= 1 || spec.is_empty() {
        trace!(records = handles.len(), "nothing to order");
        return handles;
    }

    let mut comparisons = 0usize;
    let mut compare = |a: &&T, b: &&T| -> Ordering {
        comparisons += 1;
        compare_records(*a, *b, spec)
    };

    let sorted = match options.strategy {
        Strategy::TopDown => merge::top_down(&handles, &mut compare),
        Strategy::BottomUp => merge::bottom_up(&handles, &mut compare),
    };

    debug!(
        records = sorted.len(),
        keys = spec.len(),
        strategy = %options.strategy,
        comparisons,
        %spec,
        "sorted records"
    );
    sorted
}

/// Sorts `records` by `spec`, returning clones in sorted order.
///
/// The input slice is left untouched.
///
/// ```
/// use multisort::{Record, SortSpec};
///
/// let people = vec![
///     Record::new().with("name", "Bob").with("age", 30),
///     Record::new().with("name", "Eve").with("age", 22),
///     Record::new().with("name", "Nobody"),
/// ];
///
/// let sorted = multisort::sort(&people, &SortSpec::new().asc("age"));
/// let names: Vec<_> = sorted.iter().map(|r| r.get("name").unwrap().to_string()).collect();
/// assert_eq!(names, [r#""Nobody""#, r#""Eve""#, r#""Bob""#]);
/// ```
pub fn sort<T: Fields + Clone>(records: &[T], spec: &SortSpec) -> Vec<T> {
    sort_with(records, spec, &SortOptions::default())
}

/// [`sort`] with explicit options.
pub fn sort_with<T: Fields + Clone>(
    records: &[T],
    spec: &SortSpec,
    options: &SortOptions,
) -> Vec<T> {
    sort_refs_with(records, spec, options)
        .into_iter()
        .cloned()
        .collect()
}

/// Sorts like [`sort`] after checking that every key's values are mutually
/// comparable.
///
/// Returns [`SortError::Incomparable`](crate::SortError::Incomparable)
/// instead of sorting when a key mixes value kinds (for example text and
/// numbers) or holds a NaN.
pub fn try_sort<T: Fields + Clone>(records: &[T], spec: &SortSpec) -> Result<Vec<T>> {
    try_sort_with(records, spec, &SortOptions::default())
}

/// [`try_sort`] with explicit options.
pub fn try_sort_with<T: Fields + Clone>(
    records: &[T],
    spec: &SortSpec,
    options: &SortOptions,
) -> Result<Vec<T>> {
    if let Err(err) = spec.validate(records) {
        debug!(error = %err, "rejected records");
        return Err(err);
    }
    Ok(sort_with(records, spec, options))
}

/// Returns `true` if no adjacent pair in `records` is out of order under `spec`.
pub fn is_sorted<T: Fields>(records: &[T], spec: &SortSpec) -> bool {
    records
        .windows(2)
        .all(|pair| compare_records(&pair[0], &pair[1], spec) != Ordering::Greater)
}

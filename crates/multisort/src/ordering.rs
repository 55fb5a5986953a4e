//! Sort keys and the record comparator.
//!
//! Provides [`Dir`] for sort direction, [`SortKey`] for a single field-based
//! ordering and [`SortSpec`] for the prioritized list of keys a sort runs with.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SortError};
use crate::record::Fields;
use crate::value::{compare_values, Value};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dir {
    /// Ascending order (smallest first, missing values first).
    #[default]
    Asc,
    /// Descending order (largest first, missing values last).
    Desc,
}

impl Dir {
    /// Returns the direction matching an `ascending` flag.
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending {
            Dir::Asc
        } else {
            Dir::Desc
        }
    }

    /// Returns `true` if this is ascending order.
    pub fn is_asc(self) -> bool {
        matches!(self, Dir::Asc)
    }

    /// Returns `true` if this is descending order.
    pub fn is_desc(self) -> bool {
        matches!(self, Dir::Desc)
    }

    /// Applies this direction to an ordering.
    ///
    /// For `Asc`, returns the ordering unchanged.
    /// For `Desc`, reverses the ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    /// Returns the display name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl fmt::Display for Dir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Dir {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Dir::Asc),
            "desc" | "descending" => Ok(Dir::Desc),
            _ => Err(SortError::InvalidDirection(s.to_string())),
        }
    }
}

/// A single sort key: a field and a direction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortKey {
    /// The field to sort by.
    pub field: String,
    /// The sort direction.
    #[serde(default)]
    pub dir: Dir,
}

impl SortKey {
    /// Creates a new ascending key for the given field.
    pub fn asc(field: impl Into<String>) -> Self {
        SortKey::new(field, Dir::Asc)
    }

    /// Creates a new descending key for the given field.
    pub fn desc(field: impl Into<String>) -> Self {
        SortKey::new(field, Dir::Desc)
    }

    /// Creates a new key with the given direction.
    pub fn new(field: impl Into<String>, dir: Dir) -> Self {
        SortKey {
            field: field.into(),
            dir,
        }
    }

    /// Compares two looked-up field values according to this key.
    ///
    /// A missing value is less than any present value before the direction is
    /// applied, so it sorts first ascending and last descending. Returns
    /// `None` if both values are present but cannot be compared.
    pub fn compare(&self, a: Option<&Value>, b: Option<&Value>) -> Option<Ordering> {
        let base = match (a, b) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a), Some(b)) => compare_values(a, b)?,
        };
        Some(self.dir.apply(base))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.field, self.dir)
    }
}

impl FromStr for SortKey {
    type Err = SortError;

    /// Parses `field`, `field:asc` or `field:desc`.
    ///
    /// The text after the last `:` is always read as the direction, so a
    /// field name containing `:` needs an explicit suffix: `ns:field:asc`.
    fn from_str(s: &str) -> Result<Self> {
        let (field, dir) = match s.rsplit_once(':') {
            Some((field, dir)) => (field.trim(), dir.parse()?),
            None => (s.trim(), Dir::Asc),
        };
        if field.is_empty() {
            return Err(SortError::InvalidSortKey(s.to_string()));
        }
        Ok(SortKey::new(field, dir))
    }
}

impl From<(&str, bool)> for SortKey {
    fn from((field, ascending): (&str, bool)) -> Self {
        SortKey::new(field, Dir::from_ascending(ascending))
    }
}

impl From<(&str, Dir)> for SortKey {
    fn from((field, dir): (&str, Dir)) -> Self {
        SortKey::new(field, dir)
    }
}

/// Ordered list of sort keys. The first key is primary, each later key breaks
/// ties left by the ones before it.
///
/// ```
/// use multisort::{Dir, SortSpec};
///
/// let spec = SortSpec::new().asc("age").desc("score");
/// assert_eq!(spec.to_string(), "age:asc,score:desc");
///
/// let parsed: SortSpec = "age, score:desc".parse().unwrap();
/// assert_eq!(parsed, spec);
///
/// let from_pairs: SortSpec = [("age", true), ("score", false)].into_iter().collect();
/// assert_eq!(from_pairs.keys()[1].dir, Dir::Desc);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SortSpec {
    keys: Vec<SortKey>,
}

impl SortSpec {
    /// Creates an empty spec. Sorting with it keeps input order.
    pub fn new() -> Self {
        SortSpec::default()
    }

    /// Appends an ascending key.
    pub fn asc(self, field: impl Into<String>) -> Self {
        self.then(SortKey::asc(field))
    }

    /// Appends a descending key.
    pub fn desc(self, field: impl Into<String>) -> Self {
        self.then(SortKey::desc(field))
    }

    /// Appends `key` as the lowest-priority key.
    pub fn then(mut self, key: SortKey) -> Self {
        self.keys.push(key);
        self
    }

    /// The keys in priority order.
    pub fn keys(&self) -> &[SortKey] {
        &self.keys
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if the spec has no keys.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Checks that every present value under each key is comparable with the
    /// others, returning the first offending pair as an error.
    ///
    /// Kinds are compared against the first present value seen for the key,
    /// and NaN numbers are reported against themselves.
    pub fn validate<T: Fields>(&self, records: &[T]) -> Result<()> {
        for key in &self.keys {
            let mut first: Option<&Value> = None;
            for value in records.iter().filter_map(|r| r.field(&key.field)) {
                match first {
                    None => first = Some(value),
                    Some(seen) => check_comparable(&key.field, seen, value)?,
                }
                check_comparable(&key.field, value, value)?;
            }
        }
        Ok(())
    }
}

fn check_comparable(field: &str, a: &Value, b: &Value) -> Result<()> {
    match compare_values(a, b) {
        Some(_) => Ok(()),
        None => Err(incomparable(field, a, b)),
    }
}

fn incomparable(field: &str, a: &Value, b: &Value) -> SortError {
    SortError::Incomparable {
        field: field.to_string(),
        left: a.kind(),
        right: b.kind(),
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, key) in self.keys.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", key)?;
        }
        Ok(())
    }
}

impl FromStr for SortSpec {
    type Err = SortError;

    /// Parses a comma separated list of keys. An empty string is an empty spec.
    fn from_str(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            return Ok(SortSpec::new());
        }
        s.split(',').map(str::parse::<SortKey>).collect()
    }
}

impl From<Vec<SortKey>> for SortSpec {
    fn from(keys: Vec<SortKey>) -> Self {
        SortSpec { keys }
    }
}

impl<K: Into<SortKey>> FromIterator<K> for SortSpec {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        SortSpec {
            keys: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a SortSpec {
    type Item = &'a SortKey;
    type IntoIter = std::slice::Iter<'a, SortKey>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}

/// Compares two records using a sort spec.
///
/// Uses the first key as the primary sort key, the second to break ties, etc.
/// If all keys compare equal, returns `Equal`. A key whose values cannot be
/// compared does not decide and evaluation moves on to the next key.
pub fn compare_records<T: Fields>(a: &T, b: &T, spec: &SortSpec) -> Ordering {
    for key in spec {
        let ordering = key.compare(a.field(&key.field), b.field(&key.field));
        if let Some(ordering @ (Ordering::Less | Ordering::Greater)) = ordering {
            return ordering;
        }
    }
    Ordering::Equal
}

/// Like [`compare_records`], but reports incomparable values instead of
/// skipping them.
pub fn try_compare_records<T: Fields>(a: &T, b: &T, spec: &SortSpec) -> Result<Ordering> {
    for key in spec {
        let (va, vb) = (a.field(&key.field), b.field(&key.field));
        match key.compare(va, vb) {
            Some(Ordering::Equal) => continue,
            Some(ordering) => return Ok(ordering),
            None => {
                // Both present, otherwise compare would have succeeded.
                if let (Some(va), Some(vb)) = (va, vb) {
                    return Err(incomparable(&key.field, va, vb));
                }
            }
        }
    }
    Ok(Ordering::Equal)
}

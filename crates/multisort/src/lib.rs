//! Multisort - Stable multi-key sorting for schemaless record collections.
//!
//! Multisort orders a slice of records by a prioritized list of fields, each
//! ascending or descending. It supports:
//!
//! - Schemaless [`Record`]s, or any type implementing [`Fields`]
//! - Field values of several kinds: strings, numbers, timestamps, booleans
//! - Missing fields, which sort as the lowest possible value
//! - Stable merge sort, top-down or bottom-up
//! - Sort specs built fluently or parsed from `"age:asc,score:desc"`
//!
//! # Quick Start
//!
//! ```rust
//! use multisort::{Record, SortSpec, Value};
//!
//! let people = vec![
//!     Record::new().with("name", "Alice").with("age", 25).with("score", 90),
//!     Record::new().with("name", "Bob").with("age", 30).with("score", 85),
//!     Record::new().with("name", "Charlie").with("age", 25).with("score", 95),
//! ];
//!
//! let spec = SortSpec::new().asc("age").desc("score");
//! let sorted = multisort::sort(&people, &spec);
//!
//! assert_eq!(sorted[0].get("name"), Some(&Value::from("Charlie")));
//! assert_eq!(sorted[2].get("name"), Some(&Value::from("Bob")));
//! ```
//!
//! # Ordering Semantics
//!
//! Keys are evaluated in order until one decides:
//!
//! ```text
//! both missing         -> next key
//! one missing          -> missing < present, then direction applied
//! both present, equal  -> next key
//! both present, differ -> natural order, then direction applied
//! all keys exhausted   -> Equal (input order is kept)
//! ```
//!
//! Values of different kinds under one key (say a string and a number) have
//! no order. [`sort`] lets such a key fall through to the next one;
//! [`try_sort`] rejects the input with [`SortError::Incomparable`].

mod error;
mod merge;
mod ordering;
mod record;
mod sort;
mod value;

// Re-export public API
pub use error::{Result, SortError};
pub use ordering::{compare_records, try_compare_records, Dir, SortKey, SortSpec};
pub use record::{Fields, Record};
pub use sort::{
    is_sorted, sort, sort_refs, sort_refs_with, sort_with, try_sort, try_sort_with, SortOptions,
    Strategy,
};
pub use value::{compare_values, Number, Timestamp, Value};

//! The fixed sample dataset the binary sorts.

use multisort::{Record, SortSpec};

/// Five people with `name`, `age` and `score` fields.
pub fn people() -> Vec<Record> {
    [
        ("Alice", 25, 90),
        ("Bob", 30, 85),
        ("Charlie", 25, 95),
        ("David", 30, 80),
        ("Eve", 22, 88),
    ]
    .into_iter()
    .map(|(name, age, score)| {
        Record::new()
            .with("name", name)
            .with("age", age)
            .with("score", score)
    })
    .collect()
}

/// `age` ascending, then `score` descending.
pub fn default_spec() -> SortSpec {
    SortSpec::new().asc("age").desc("score")
}

//! Property-based tests for multisort using proptest.

use std::cmp::Ordering;

use multisort::{
    compare_records, is_sorted, sort, sort_with, Dir, Number, Record, SortKey, SortOptions, SortSpec,
    Strategy as MergeStrategy, Value,
};
use proptest::prelude::*;

// ============================================================================
// Test helpers
// ============================================================================

// Every record carries a unique "id" equal to its input position; sort keys
// never use it, so it tracks where each record came from.
fn id(record: &Record) -> i64 {
    match record.get("id") {
        Some(Value::Number(Number::I64(id))) => *id,
        other => panic!("record without id: {:?}", other),
    }
}

fn ids(records: &[Record]) -> Vec<i64> {
    records.iter().map(id).collect()
}

// Small value ranges so ties and missing fields are common.
fn records_strategy() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(
        (
            prop::option::of(0i64..4),
            prop::option::of("[a-c]"),
            prop::option::of(any::<bool>()),
        ),
        0..60,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (num, text, flag))| {
                let mut record = Record::new().with("id", i as i64);
                if let Some(num) = num {
                    record.insert("num", num);
                }
                if let Some(text) = text {
                    record.insert("text", text);
                }
                if let Some(flag) = flag {
                    record.insert("flag", flag);
                }
                record
            })
            .collect()
    })
}

// "absent" never appears in a record.
fn spec_strategy() -> impl Strategy<Value = SortSpec> {
    prop::collection::vec(
        (
            prop::sample::select(vec!["num", "text", "flag", "absent"]),
            any::<bool>(),
        ),
        0..4,
    )
    .prop_map(|keys| {
        keys.into_iter()
            .map(|(field, ascending)| SortKey::from((field, ascending)))
            .collect()
    })
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Output holds every input record exactly once.
    #[test]
    fn output_is_a_permutation(records in records_strategy(), spec in spec_strategy()) {
        let sorted = sort(&records, &spec);
        let mut got = ids(&sorted);
        got.sort_unstable();
        prop_assert_eq!(got, ids(&records));
    }

    /// No adjacent pair compares Greater.
    #[test]
    fn output_is_ordered(records in records_strategy(), spec in spec_strategy()) {
        let sorted = sort(&records, &spec);
        prop_assert!(is_sorted(&sorted, &spec));
    }

    /// Fully tied neighbours keep their input order.
    #[test]
    fn ties_keep_input_order(records in records_strategy(), spec in spec_strategy()) {
        let sorted = sort(&records, &spec);
        for pair in sorted.windows(2) {
            if compare_records(&pair[0], &pair[1], &spec) == Ordering::Equal {
                prop_assert!(id(&pair[0]) < id(&pair[1]));
            }
        }
    }

    /// Sorting sorted output changes nothing.
    #[test]
    fn sorting_is_idempotent(records in records_strategy(), spec in spec_strategy()) {
        let once = sort(&records, &spec);
        let twice = sort(&once, &spec);
        prop_assert_eq!(once, twice);
    }

    /// Both merge strategies agree with each other and with std's stable sort.
    #[test]
    fn strategies_agree(records in records_strategy(), spec in spec_strategy()) {
        let top_down = sort_with(&records, &spec, &SortOptions::new().strategy(MergeStrategy::TopDown));
        let bottom_up = sort_with(&records, &spec, &SortOptions::new().strategy(MergeStrategy::BottomUp));

        let mut reference = records.clone();
        reference.sort_by(|a, b| compare_records(a, b, &spec));

        prop_assert_eq!(&top_down, &bottom_up);
        prop_assert_eq!(&top_down, &reference);
    }

    /// An empty spec is the identity.
    #[test]
    fn empty_spec_is_identity(records in records_strategy()) {
        prop_assert_eq!(sort(&records, &SortSpec::new()), records);
    }

    /// The input slice is untouched.
    #[test]
    fn input_is_not_mutated(records in records_strategy(), spec in spec_strategy()) {
        let snapshot = records.clone();
        let _ = sort(&records, &spec);
        prop_assert_eq!(records, snapshot);
    }

    /// Reversing every direction reverses the order of distinct groups.
    #[test]
    fn reversed_directions_reverse_order(records in records_strategy(), spec in spec_strategy()) {
        let reversed: SortSpec = spec
            .keys()
            .iter()
            .map(|key| {
                let dir = match key.dir {
                    Dir::Asc => Dir::Desc,
                    Dir::Desc => Dir::Asc,
                };
                SortKey::new(key.field.clone(), dir)
            })
            .collect::<Vec<_>>()
            .into();

        let sorted = sort(&records, &reversed);
        for pair in sorted.windows(2) {
            prop_assert_ne!(compare_records(&pair[0], &pair[1], &spec), Ordering::Less);
        }
    }

    /// Printing a spec and parsing it back gives the same spec.
    #[test]
    fn printed_spec_parses_back(spec in spec_strategy()) {
        let parsed: SortSpec = spec.to_string().parse().unwrap();
        prop_assert_eq!(parsed, spec);
    }
}

//! Records and the [`Fields`] trait.
//!
//! A [`Record`] is a schemaless mapping from field name to [`Value`]. The sort
//! itself only needs [`Fields`], so any type that can look up a value by name
//! can be sorted without converting it into a `Record` first.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Result, SortError};
use crate::value::{Number, Value};

/// Trait for types whose fields can be looked up by name.
///
/// # Example
///
/// ```
/// use multisort::{Fields, SortSpec, Value};
///
/// struct Task {
///     name: Value,
///     priority: Option<Value>,
/// }
///
/// impl Fields for Task {
///     fn field(&self, name: &str) -> Option<&Value> {
///         match name {
///             "name" => Some(&self.name),
///             "priority" => self.priority.as_ref(),
///             _ => None,
///         }
///     }
/// }
///
/// let tasks = vec![
///     Task { name: "b".into(), priority: Some(2.into()) },
///     Task { name: "a".into(), priority: None },
/// ];
///
/// let sorted = multisort::sort_refs(&tasks, &SortSpec::new().asc("priority"));
/// assert_eq!(sorted[0].name, Value::from("a"));
/// ```
pub trait Fields {
    /// Returns the value stored under `name`, or `None` if the field is absent.
    ///
    /// Names match exactly; no case folding is applied.
    fn field(&self, name: &str) -> Option<&Value>;
}

impl<T: Fields + ?Sized> Fields for &T {
    fn field(&self, name: &str) -> Option<&Value> {
        (**self).field(name)
    }
}

/// A schemaless record: field names mapped to values.
///
/// Different records may carry different field sets. Iteration and display
/// walk fields in name order.
///
/// ```
/// use multisort::{Record, Value};
///
/// let alice = Record::new().with("name", "Alice").with("age", 25);
/// assert_eq!(alice.get("age"), Some(&Value::from(25)));
/// assert_eq!(alice.get("score"), None);
/// assert_eq!(alice.to_string(), r#"{age: 25, name: "Alice"}"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, Value>,
}

impl Record {
    /// Creates an empty record.
    pub fn new() -> Self {
        Record::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    /// Sets `field` to `value`, returning the previous value if any.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(field.into(), value.into())
    }

    /// Removes `field`, returning its value if it was present.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.fields.remove(field)
    }

    /// Returns the value of `field`, if present.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns `true` if `field` is present.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Number of fields in this record.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates fields in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl Fields for Record {
    fn field(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Record {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", name, value)?;
        }
        f.write_str("}")
    }
}

impl TryFrom<serde_json::Value> for Record {
    type Error = SortError;

    /// Converts a JSON object into a record.
    ///
    /// `null` fields are dropped so they read as missing. Arrays and nested
    /// objects have no ordering and are rejected.
    fn try_from(json: serde_json::Value) -> Result<Self> {
        let map = match json {
            serde_json::Value::Object(map) => map,
            other => {
                return Err(SortError::UnsupportedJson {
                    kind: json_kind(&other),
                    context: "a record must be a JSON object".to_string(),
                })
            }
        };

        let mut record = Record::new();
        for (name, value) in map {
            if let Some(value) = json_to_value(&name, value)? {
                record.insert(name, value);
            }
        }
        Ok(record)
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let json = serde_json::Value::deserialize(deserializer)?;
        Record::try_from(json).map_err(serde::de::Error::custom)
    }
}

fn json_to_value(field: &str, json: serde_json::Value) -> Result<Option<Value>> {
    let value = match json {
        serde_json::Value::Null => return Ok(None),
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Number(Number::I64(i))
            } else if let Some(u) = n.as_u64() {
                Value::Number(Number::U64(u))
            } else {
                Value::Number(Number::F64(n.as_f64().unwrap_or(f64::NAN)))
            }
        }
        other => {
            return Err(SortError::UnsupportedJson {
                kind: json_kind(&other),
                context: format!("field '{}'", field),
            })
        }
    };
    Ok(Some(value))
}

fn json_kind(json: &serde_json::Value) -> &'static str {
    match json {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

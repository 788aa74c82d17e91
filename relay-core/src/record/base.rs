use crate::error::RelayError;
use chrono::prelude::{DateTime, Local};
use std::{
    collections::{
        hash_map::{IntoIter, Iter, Keys},
        HashMap,
    },
    convert::Into,
    iter::IntoIterator,
};

#[derive(Debug, Clone)]
/// The types of values a [`Record`] can hold.
pub enum RecordValue {
    /// A scalar, e.g., an episode length or a reward.
    Scalar(f32),

    /// A point in time, e.g., the start of an evaluation run.
    DateTime(DateTime<Local>),

    /// A 1-dimensional array.
    Array1(Vec<f32>),

    /// A string, e.g., a task name.
    String(String),
}

#[derive(Debug, Clone)]
/// A map from string keys to [`RecordValue`]s.
///
/// Environments emit a record at every step; recorders collect them.
pub struct Record(HashMap<String, RecordValue>);

impl Record {
    /// Constructs an empty record.
    pub fn empty() -> Self {
        Self(HashMap::new())
    }

    /// Constructs a record holding a single scalar value.
    pub fn from_scalar(name: impl Into<String>, value: f32) -> Self {
        Self(HashMap::from([(name.into(), RecordValue::Scalar(value))]))
    }

    /// Constructs a record from a slice of key-value pairs.
    pub fn from_slice<K: Into<String> + Clone>(s: &[(K, RecordValue)]) -> Self {
        Self(
            s.iter()
                .map(|(k, v)| (k.clone().into(), v.clone()))
                .collect(),
        )
    }

    /// Returns the keys of the record.
    pub fn keys(&self) -> Keys<String, RecordValue> {
        self.0.keys()
    }

    /// Inserts a key-value pair.
    pub fn insert(&mut self, k: impl Into<String>, v: RecordValue) {
        self.0.insert(k.into(), v);
    }

    /// Returns an iterator over the entries of the record.
    pub fn iter(&self) -> Iter<'_, String, RecordValue> {
        self.0.iter()
    }

    /// Returns a consuming iterator over the entries.
    pub fn into_iter_in_record(self) -> IntoIter<String, RecordValue> {
        self.0.into_iter()
    }

    /// Returns the value with the given key, if present.
    pub fn get(&self, k: &str) -> Option<&RecordValue> {
        self.0.get(k)
    }

    /// Merges records, the right-hand side taking precedence on key collisions.
    pub fn merge(self, record: Record) -> Self {
        Record(self.0.into_iter().chain(record.0).collect())
    }

    /// Merges the entries of `record` into this record, overwriting on key collisions.
    pub fn merge_inplace(&mut self, record: Record) {
        for (k, v) in record.iter() {
            self.0.insert(k.clone(), v.clone());
        }
    }

    /// Returns the scalar with the given key.
    pub fn get_scalar(&self, k: &str) -> Result<f32, RelayError> {
        if let Some(v) = self.0.get(k) {
            match v {
                RecordValue::Scalar(v) => Ok(*v as _),
                _ => Err(RelayError::RecordValueTypeError("Scalar".to_string())),
            }
        } else {
            Err(RelayError::RecordKeyError(k.to_string()))
        }
    }

    /// Returns the 1-dimensional array with the given key.
    pub fn get_array1(&self, k: &str) -> Result<Vec<f32>, RelayError> {
        if let Some(v) = self.0.get(k) {
            match v {
                RecordValue::Array1(v) => Ok(v.clone()),
                _ => Err(RelayError::RecordValueTypeError("Array1".to_string())),
            }
        } else {
            Err(RelayError::RecordKeyError(k.to_string()))
        }
    }

    /// Returns the string with the given key.
    pub fn get_string(&self, k: &str) -> Result<String, RelayError> {
        if let Some(v) = self.0.get(k) {
            match v {
                RecordValue::String(s) => Ok(s.clone()),
                _ => Err(RelayError::RecordValueTypeError("String".to_string())),
            }
        } else {
            Err(RelayError::RecordKeyError(k.to_string()))
        }
    }

    /// Returns `true` if the record has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.len() == 0
    }
}

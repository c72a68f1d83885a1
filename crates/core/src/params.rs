//! Parameter sets: the name -> primitive value mapping handed to analyzers.
//!
//! A `ParameterSet` keeps two maps:
//! - tracked parameters, which define the configuration and feed its id
//! - untracked parameters (output file names and the like), which do not
//!
//! A given name lives in at most one of the two maps; deserializing a set
//! that lists a name in both is an error.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// A single typed parameter value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum ParamValue {
    String(String),
    Int32(i32),
    UInt32(u32),
    Double(f64),
    Bool(bool),
    VString(Vec<String>),
}

impl ParamValue {
    /// Short type name used in error messages and in the canonical encoding.
    pub fn type_name(&self) -> &'static str {
        match self {
            ParamValue::String(_) => "string",
            ParamValue::Int32(_) => "int32",
            ParamValue::UInt32(_) => "uint32",
            ParamValue::Double(_) => "double",
            ParamValue::Bool(_) => "bool",
            ParamValue::VString(_) => "vstring",
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::String(s) => write!(f, "{s}"),
            ParamValue::Int32(v) => write!(f, "{v}"),
            ParamValue::UInt32(v) => write!(f, "{v}"),
            ParamValue::Double(v) => write!(f, "{v}"),
            ParamValue::Bool(v) => write!(f, "{v}"),
            ParamValue::VString(items) => write!(f, "{}", items.join(",")),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::String(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::String(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Int32(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::UInt32(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Double(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(value: Vec<String>) -> Self {
        ParamValue::VString(value)
    }
}

/// Rust types that can be read back out of a `ParamValue`.
pub trait ParamType: Sized {
    const TYPE_NAME: &'static str;

    fn from_value(value: &ParamValue) -> Option<Self>;
}

impl ParamType for String {
    const TYPE_NAME: &'static str = "string";

    fn from_value(value: &ParamValue) -> Option<Self> {
        match value {
            ParamValue::String(s) => Some(s.clone()),
            _ => None,
        }
    }
}

impl ParamType for i32 {
    const TYPE_NAME: &'static str = "int32";

    fn from_value(value: &ParamValue) -> Option<Self> {
        match value {
            ParamValue::Int32(v) => Some(*v),
            _ => None,
        }
    }
}

impl ParamType for u32 {
    const TYPE_NAME: &'static str = "uint32";

    fn from_value(value: &ParamValue) -> Option<Self> {
        match value {
            ParamValue::UInt32(v) => Some(*v),
            _ => None,
        }
    }
}

impl ParamType for f64 {
    const TYPE_NAME: &'static str = "double";

    fn from_value(value: &ParamValue) -> Option<Self> {
        match value {
            ParamValue::Double(v) => Some(*v),
            _ => None,
        }
    }
}

impl ParamType for bool {
    const TYPE_NAME: &'static str = "bool";

    fn from_value(value: &ParamValue) -> Option<Self> {
        match value {
            ParamValue::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

impl ParamType for Vec<String> {
    const TYPE_NAME: &'static str = "vstring";

    fn from_value(value: &ParamValue) -> Option<Self> {
        match value {
            ParamValue::VString(items) => Some(items.clone()),
            _ => None,
        }
    }
}

/// Error type for typed parameter lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    #[error("Missing parameter '{name}'")]
    Missing { name: String },

    #[error("Parameter '{name}' has type {found}, expected {expected}")]
    WrongType { name: String, expected: &'static str, found: &'static str },

    #[error("Parameter '{name}' is both tracked and untracked")]
    TrackedAndUntracked { name: String },
}

pub type ParamResult<T> = Result<T, ParamError>;

/// Named, typed parameters consumed by an analyzer at construction time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawParameterSet")]
pub struct ParameterSet {
    #[serde(default)]
    tracked: BTreeMap<String, ParamValue>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    untracked: BTreeMap<String, ParamValue>,
}

/// Unchecked shape of a serialized `ParameterSet`.
#[derive(Deserialize)]
struct RawParameterSet {
    #[serde(default)]
    tracked: BTreeMap<String, ParamValue>,
    #[serde(default)]
    untracked: BTreeMap<String, ParamValue>,
}

impl TryFrom<RawParameterSet> for ParameterSet {
    type Error = ParamError;

    fn try_from(raw: RawParameterSet) -> Result<Self, Self::Error> {
        if let Some(name) = raw.tracked.keys().find(|name| raw.untracked.contains_key(*name)) {
            return Err(ParamError::TrackedAndUntracked { name: name.clone() });
        }
        Ok(Self { tracked: raw.tracked, untracked: raw.untracked })
    }
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert (or replace) a tracked parameter.
    pub fn insert_tracked(
        &mut self,
        name: impl Into<String>,
        value: impl Into<ParamValue>,
    ) -> &mut Self {
        let name = name.into();
        self.untracked.remove(&name);
        self.tracked.insert(name, value.into());
        self
    }

    /// Insert (or replace) an untracked parameter.
    pub fn insert_untracked(
        &mut self,
        name: impl Into<String>,
        value: impl Into<ParamValue>,
    ) -> &mut Self {
        let name = name.into();
        self.tracked.remove(&name);
        self.untracked.insert(name, value.into());
        self
    }

    pub fn get_tracked<T: ParamType>(&self, name: &str) -> ParamResult<T> {
        lookup(&self.tracked, name)
    }

    pub fn get_untracked<T: ParamType>(&self, name: &str) -> ParamResult<T> {
        lookup(&self.untracked, name)
    }

    /// Raw access to a parameter regardless of whether it is tracked.
    pub fn value(&self, name: &str) -> Option<&ParamValue> {
        self.tracked.get(name).or_else(|| self.untracked.get(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tracked.contains_key(name) || self.untracked.contains_key(name)
    }

    pub fn is_tracked(&self, name: &str) -> bool {
        self.tracked.contains_key(name)
    }

    /// Sorted names of the tracked parameters.
    pub fn tracked_names(&self) -> Vec<String> {
        self.tracked.keys().cloned().collect()
    }

    /// Sorted names of the untracked parameters.
    pub fn untracked_names(&self) -> Vec<String> {
        self.untracked.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.tracked.len() + self.untracked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracked.is_empty() && self.untracked.is_empty()
    }

    /// Canonical text encoding of the tracked parameters.
    ///
    /// Entries are sorted by name. Each entry is the name, the type name and
    /// the value, every token written as `<byte length>:<text>`, followed by
    /// `;`. A string vector is written as `<item count>#` followed by its
    /// length-prefixed items, so no value can be mistaken for another entry.
    pub fn canonical_string(&self) -> String {
        let mut out = String::new();
        for (name, value) in &self.tracked {
            push_token(&mut out, name);
            push_token(&mut out, value.type_name());
            match value {
                ParamValue::VString(items) => {
                    out.push_str(&format!("{}#", items.len()));
                    for item in items {
                        push_token(&mut out, item);
                    }
                }
                other => push_token(&mut out, &other.to_string()),
            }
            out.push(';');
        }
        out
    }

    /// Content id of this set: SHA-256 of the canonical tracked encoding, as hex.
    ///
    /// Untracked parameters and insertion order do not affect the id.
    pub fn id(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.canonical_string().as_bytes());
        format!("{:x}", hasher.finalize())
    }
}

fn push_token(out: &mut String, token: &str) {
    out.push_str(&format!("{}:{}", token.len(), token));
}

fn lookup<T: ParamType>(map: &BTreeMap<String, ParamValue>, name: &str) -> ParamResult<T> {
    let value = map.get(name).ok_or_else(|| ParamError::Missing { name: name.to_string() })?;
    T::from_value(value).ok_or_else(|| ParamError::WrongType {
        name: name.to_string(),
        expected: T::TYPE_NAME,
        found: value.type_name(),
    })
}

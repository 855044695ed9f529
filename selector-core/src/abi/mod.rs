//! ABI document model.
//!
//! Entries are decoded into a tagged enum at load time so that malformed
//! declarations are rejected before any selector is computed.

mod loader;

pub use loader::{load_abi, AbiFormat};

use crate::error::InputError;
use serde::Deserialize;
use serde_json::Value;

/// A single declared parameter. Only the `type` string takes part in
/// signature reconstruction; tuple types are kept as declared.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Param {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub ty: String,
}

impl Param {
    pub fn new(ty: impl Into<String>) -> Self {
        Self {
            name: None,
            ty: ty.into(),
        }
    }
}

/// A custom error declaration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AbiError {
    pub name: String,
    pub inputs: Vec<Param>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AbiEntry {
    Function {
        name: String,
        inputs: Vec<Param>,
    },
    Event {
        name: String,
        inputs: Vec<Param>,
        #[serde(default)]
        anonymous: bool,
    },
    Error(AbiError),
    Constructor {
        #[serde(default)]
        inputs: Vec<Param>,
    },
    Fallback,
    Receive,
}

impl AbiEntry {
    pub fn as_error(&self) -> Option<&AbiError> {
        match self {
            AbiEntry::Error(error) => Some(error),
            _ => None,
        }
    }
}

/// Ordered ABI entries, immutable once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AbiDocument {
    entries: Vec<AbiEntry>,
}

impl AbiDocument {
    pub fn new(entries: Vec<AbiEntry>) -> Self {
        Self { entries }
    }

    /// Parse a JSON array of ABI entries.
    ///
    /// The whole document is rejected if any entry fails to decode; the
    /// index of the first bad entry is reported.
    pub fn from_json_str(text: &str) -> Result<Self, InputError> {
        let value: Value =
            serde_json::from_str(text).map_err(|source| InputError::InvalidJson { source })?;

        let items = match value {
            Value::Array(items) => items,
            other => {
                return Err(InputError::NotAnArray {
                    found: json_kind(&other),
                })
            }
        };

        let entries = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                serde_json::from_value::<AbiEntry>(item)
                    .map_err(|source| InputError::MalformedEntry { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[AbiEntry] {
        &self.entries
    }

    /// Error declarations in document order.
    pub fn errors(&self) -> impl Iterator<Item = &AbiError> + '_ {
        self.entries.iter().filter_map(AbiEntry::as_error)
    }

    pub fn count_errors(&self) -> usize {
        self.errors().count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

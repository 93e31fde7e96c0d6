//! Pony — a named record of string fields, the fixture's only data type.
//!
//! Apart from `name`, fields are neither typed nor validated. The `name`
//! doubles as the pony's key in the store when it is created.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{CorralError, ValidationError};

/// Field that every pony must carry.
pub const NAME_FIELD: &str = "name";

/// A validated pony.
///
/// Serialized as a flat JSON object of its fields. The only way to obtain one
/// is through [`PonyDraft::build`] (or deserialization, which runs the same
/// check), so [`Pony::name`] is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pony {
    #[serde(deserialize_with = "deserialize_fields")]
    fields: BTreeMap<String, String>,
}

impl Pony {
    /// Start a draft for constructing a [`Pony`].
    #[must_use]
    pub fn builder() -> PonyDraft {
        PonyDraft::default()
    }

    /// The pony's `name` field.
    #[must_use]
    pub fn name(&self) -> &str {
        self.fields.get(NAME_FIELD).map_or("", String::as_str)
    }

    /// Value of an arbitrary field.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// All fields, ordered by field name.
    #[must_use]
    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingName`] or [`ValidationError::EmptyName`].
    fn check(fields: &BTreeMap<String, String>) -> Result<(), ValidationError> {
        match fields.get(NAME_FIELD) {
            None => Err(ValidationError::MissingName),
            Some(name) if name.is_empty() => Err(ValidationError::EmptyName),
            Some(_) => Ok(()),
        }
    }
}

fn deserialize_fields<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let fields = BTreeMap::<String, String>::deserialize(deserializer)?;
    Pony::check(&fields).map_err(serde::de::Error::custom)?;
    Ok(fields)
}

/// Unvalidated fields submitted by a client.
///
/// When the same field is given twice the last value wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PonyDraft {
    fields: BTreeMap<String, String>,
}

impl PonyDraft {
    #[must_use]
    pub fn field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn name(self, name: impl Into<String>) -> Self {
        self.field(NAME_FIELD, name)
    }

    /// Consume the draft, validate, and return a [`Pony`].
    ///
    /// # Errors
    ///
    /// Returns [`CorralError::Validation`] if `name` is missing or empty.
    pub fn build(self) -> Result<Pony, CorralError> {
        Pony::check(&self.fields)?;
        Ok(Pony {
            fields: self.fields,
        })
    }
}

impl<K, V> FromIterator<(K, V)> for PonyDraft
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::default(), |draft, (key, value)| draft.field(key, value))
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identity assigned by the store. Positive, strictly increasing within a
/// store's lifetime, never reused after deletion.
pub type ResourceId = u64;

/// The stored resource record. Serializes to camelCase JSON with dates as
/// RFC 3339 strings, matching what browser clients expect on the wire.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: ResourceId,
    pub name: String,
    pub age: u32,
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joined_date: Option<DateTime<Utc>>,
}

/// Create payload: everything but the id, which the store assigns.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersonInput {
    pub name: String,
    pub age: u32,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub joined_date: Option<DateTime<Utc>>,
}

/// Partial update: absent fields keep their stored values. The record id is
/// not part of a patch and cannot be overwritten by one.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersonPatch {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub is_active: Option<bool>,
    pub joined_date: Option<DateTime<Utc>>,
}

impl Person {
    pub fn from_input(id: ResourceId, input: PersonInput) -> Self {
        Self {
            id,
            name: input.name,
            age: input.age,
            is_active: input.is_active,
            joined_date: input.joined_date,
        }
    }
}

impl PersonPatch {
    /// Shallow merge onto an existing record; the id is untouched.
    pub fn apply(&self, target: &mut Person) {
        if let Some(name) = &self.name {
            target.name = name.clone();
        }
        if let Some(age) = self.age {
            target.age = age;
        }
        if let Some(is_active) = self.is_active {
            target.is_active = is_active;
        }
        if let Some(joined_date) = self.joined_date {
            target.joined_date = Some(joined_date);
        }
    }
}

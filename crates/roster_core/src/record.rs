use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned record identity.
///
/// The backend is free to hand out numbers or strings; the id is echoed back
/// in whatever shape it arrived in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{n}"),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        RecordId::Number(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        RecordId::Text(value.to_owned())
    }
}

/// A stored user record as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: RecordId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub hobbies: String,
}

impl Record {
    /// The record's fields without its id.
    pub fn payload(&self) -> NewRecord {
        NewRecord {
            name: self.name.clone(),
            phone_number: self.phone_number.clone(),
            email: self.email.clone(),
            hobbies: self.hobbies.clone(),
        }
    }
}

/// Create payload: a record the server has not assigned an id to yet.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRecord {
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub hobbies: String,
}

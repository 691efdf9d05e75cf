use serde::{Deserialize, Serialize};
use std::fmt;

// ────────────────────────────────────────────────────────────────────────────
// RecordId
// ────────────────────────────────────────────────────────────────────────────

/// A record identifier as it appears in the input files: either a JSON
/// integer or a string.
///
/// Ids are compared and hashed by value, so the integer `1` and the string
/// `"1"` are distinct ids. [`fmt::Display`] renders the decimal text form of
/// integer ids and the raw text of string ids, which is also how ids are
/// written as XML attributes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Int(n) => write!(f, "{}", n),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RecordId {
    fn from(n: i64) -> Self {
        RecordId::Int(n)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        RecordId::Text(s.to_string())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Input records
// ────────────────────────────────────────────────────────────────────────────

/// A room as read from the rooms input file.
///
/// Unknown extra keys in the input object are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: RecordId,
    pub name: String,
}

/// A student as read from the students input file. `room` is a foreign key
/// referencing [`Room::id`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: RecordId,
    pub name: String,
    pub room: RecordId,
}

// ────────────────────────────────────────────────────────────────────────────
// Output documents
// ────────────────────────────────────────────────────────────────────────────

/// A room enriched with its member students; the sole output artifact.
///
/// Field order fixes the JSON key order (`id`, `name`, `students`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedRoom {
    pub id: RecordId,
    pub name: String,
    pub students: Vec<RoomStudent>,
}

/// A student entry inside a [`CombinedRoom`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomStudent {
    pub id: RecordId,
    pub name: String,
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-assigned identifier of a member or assignment row.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    sqlx::Type,
)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct RecordId(i64);

impl RecordId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }
}

impl AsRef<i64> for RecordId {
    fn as_ref(&self) -> &i64 {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[test]
fn test_record_ids_order_numerically() {
    let mut ids = vec![RecordId::new(10), RecordId::new(2), RecordId::new(7)];
    ids.sort();
    assert_eq!(ids, vec![RecordId::new(2), RecordId::new(7), RecordId::new(10)]);
}

#[test]
fn test_record_id_serializes_as_bare_integer() {
    let json = serde_json::to_string(&RecordId::new(42)).unwrap();
    assert_eq!(json, "42");
    let parsed: RecordId = serde_json::from_str("42").unwrap();
    assert_eq!(parsed, RecordId::new(42));
}

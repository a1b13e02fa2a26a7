use super::ValidationError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifies one browser's page session. Carried in the session cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn parse(id: &str) -> Result<Self, ValidationError> {
        let parsed = Uuid::try_parse(id).map_err(|e| {
            ValidationError::new(format!("Invalid session ID: {e}"))
        })?;
        Ok(Self(parsed))
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self(Uuid::new_v4())
    }
}

impl AsRef<Uuid> for SessionId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

#[test]
fn test_valid_ids() {
    let valid_id = "5e90ca28-e1ad-4795-a190-089959c16e0b";
    let parsed = SessionId::parse(valid_id).expect(valid_id);
    assert_eq!(
        parsed.as_ref().to_string(),
        valid_id,
        "ID does not match expected value"
    );
}

#[test]
fn test_invalid_ids() {
    let invalid_id = "5b5b32e3a66cc-45bc-82d1-d41582139f1e";
    let result = SessionId::parse(invalid_id);
    let error = result.expect_err(invalid_id);
    assert_eq!(error.as_ref(), "Invalid session ID: failed to parse a UUID");
}

#[test]
fn test_default_ids_are_unique() {
    assert_ne!(SessionId::default(), SessionId::default());
}

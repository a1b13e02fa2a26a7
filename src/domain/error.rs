use color_eyre::eyre::Report;
use thiserror::Error;

use super::RecordId;

#[derive(Debug, Error)]
pub enum StudyGroupAPIError {
    #[error("Record with ID not found: {0}")]
    RecordNotFound(RecordId),
    #[error("Unexpected error")]
    UnexpectedError(#[source] Report),
}

#[derive(Debug, Error)]
#[error("Validation error: {0}")]
pub struct ValidationError(String);

impl ValidationError {
    pub fn new(message: String) -> Self {
        Self(message)
    }

    pub fn as_ref(&self) -> &String {
        &self.0
    }
}

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::models::domain::Person;

/// Request to rank candidate mentors for a seeker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindMentorsRequest {
    pub seeker: Person,
    #[serde(default)]
    pub candidates: Vec<Person>,
    #[serde(default)]
    pub limit: Option<usize>,
}

/// A record rejected at the boundary
#[derive(Debug)]
pub struct InvalidRecord {
    /// Position in `candidates`, `None` for the seeker
    pub index: Option<usize>,
    pub errors: ValidationErrors,
}

impl FindMentorsRequest {
    /// Validate the seeker and every candidate, stopping at the first failure
    pub fn validate_records(&self) -> Result<(), InvalidRecord> {
        self.seeker
            .validate()
            .map_err(|errors| InvalidRecord { index: None, errors })?;

        for (index, candidate) in self.candidates.iter().enumerate() {
            candidate.validate().map_err(|errors| InvalidRecord {
                index: Some(index),
                errors,
            })?;
        }

        Ok(())
    }
}

use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};
use validator::{Validate, ValidationErrors};

use crate::core::{MatchResult, Matcher};
use crate::models::Person;

/// Errors that can occur while loading or querying a user directory
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Malformed users document: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Malformed user record at index {index}: {source}")]
    RecordError {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Users document must be an array or an object with a \"users\" array")]
    UnexpectedShape,

    #[error("Invalid user record at index {index} (id {id:?}): {source}")]
    ValidationError {
        index: usize,
        id: String,
        #[source]
        source: ValidationErrors,
    },

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Directory contains no users")]
    Empty,
}

/// Split a users document into its records
///
/// Accepts either `{ "users": [...] }` or a bare array.
fn into_records(document: Value) -> Result<Vec<Value>, DirectoryError> {
    match document {
        Value::Array(records) => Ok(records),
        Value::Object(mut fields) => match fields.remove("users") {
            Some(Value::Array(records)) => Ok(records),
            _ => Err(DirectoryError::UnexpectedShape),
        },
        _ => Err(DirectoryError::UnexpectedShape),
    }
}

/// Parse each record on its own so a failure names its position
fn parse_records(document: Value) -> Result<Vec<Person>, DirectoryError> {
    into_records(document)?
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            serde_json::from_value(record)
                .map_err(|source| DirectoryError::RecordError { index, source })
        })
        .collect()
}

/// In-memory view of an already-fetched users collection
///
/// Every record is validated on load, so anything handed to the matcher
/// carries a usable id.
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    users: Vec<Person>,
}

impl UserDirectory {
    /// Build a directory from records, rejecting the first invalid one
    pub fn new(users: Vec<Person>) -> Result<Self, DirectoryError> {
        for (index, user) in users.iter().enumerate() {
            user.validate().map_err(|source| DirectoryError::ValidationError {
                index,
                id: user.id.clone(),
                source,
            })?;
        }

        debug!("Loaded {} user records", users.len());
        Ok(Self { users })
    }

    pub fn from_json_str(json: &str) -> Result<Self, DirectoryError> {
        let document: Value = serde_json::from_str(json)?;
        Self::new(parse_records(document)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DirectoryError> {
        let document: Value = serde_json::from_reader(reader)?;
        Self::new(parse_records(document)?)
    }

    /// Load a users export from disk
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DirectoryError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let directory = Self::from_reader(BufReader::new(file))?;
        info!("Loaded {} users from {}", directory.len(), path.display());
        Ok(directory)
    }

    pub fn users(&self) -> &[Person] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Person> {
        self.users.iter().find(|user| user.id == id)
    }

    /// The first user in the collection, used when no seeker is named
    pub fn default_seeker(&self) -> Result<&Person, DirectoryError> {
        self.users.first().ok_or(DirectoryError::Empty)
    }

    /// Resolve a seeker by id, or fall back to the first user
    pub fn seeker(&self, id: Option<&str>) -> Result<&Person, DirectoryError> {
        match id {
            Some(id) => self
                .get(id)
                .ok_or_else(|| DirectoryError::UserNotFound(id.to_string())),
            None => self.default_seeker(),
        }
    }

    /// Rank the rest of the directory as mentors for one of its users
    pub fn find_matches_for(
        &self,
        seeker_id: &str,
        matcher: &Matcher,
        limit: Option<usize>,
    ) -> Result<MatchResult, DirectoryError> {
        let seeker = self.seeker(Some(seeker_id))?;
        Ok(matcher.find_matches(seeker, &self.users, limit))
    }
}

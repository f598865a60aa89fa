//! Persisted record shapes for items and stores.
//!
//! # Responsibility
//! - Define the row-level structures repositories read and write.
//! - Validate field constraints before any write reaches SQLite.
//!
//! # Invariants
//! - Every record is identified by a store-generated integer id.
//! - Names are unique per table; uniqueness is enforced by SQLite.
//! - Deletion is a hard delete; store deletion cascades to its items.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod item;
pub mod store;

/// Maximum length of item and store names, in characters.
pub const NAME_MAX_CHARS: usize = 80;
/// Maximum length of item descriptions, in characters.
pub const DESCRIPTION_MAX_CHARS: usize = 200;

/// Field-level validation failure raised before persistence.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    EmptyName,
    NameTooLong { chars: usize },
    DescriptionTooLong { chars: usize },
    NonFinitePrice(f64),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name cannot be empty"),
            Self::NameTooLong { chars } => write!(
                f,
                "name has {chars} characters; at most {NAME_MAX_CHARS} are allowed"
            ),
            Self::DescriptionTooLong { chars } => write!(
                f,
                "description has {chars} characters; at most {DESCRIPTION_MAX_CHARS} are allowed"
            ),
            Self::NonFinitePrice(value) => write!(f, "price must be a finite number, got {value}"),
        }
    }
}

impl Error for ValidationError {}

pub(crate) fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    let chars = name.chars().count();
    if chars > NAME_MAX_CHARS {
        return Err(ValidationError::NameTooLong { chars });
    }
    Ok(())
}

//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into endpoint-level use cases.
//! - Apply existence checks before mutations and report them as explicit
//!   error kinds.
//!
//! # Invariants
//! - Service APIs never bypass repository validation/persistence contracts.
//! - Service layer remains storage-agnostic.

use crate::repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod item_service;
pub mod store_service;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Entity kind named in user-facing error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Item,
    Store,
}

impl Display for Entity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Item => write!(f, "Item"),
            Self::Store => write!(f, "Store"),
        }
    }
}

/// Service error for item/store use cases.
#[derive(Debug)]
pub enum ServiceError {
    /// Lookup by id found nothing.
    NotFound { entity: Entity, id: i64 },
    /// Create was refused because the name is taken.
    Conflict { entity: Entity },
    /// Persistence-layer failure, including constraint violations.
    Repo(RepoError),
}

impl ServiceError {
    /// Client-facing message for the expected error kinds.
    pub fn detail(&self) -> String {
        match self {
            Self::NotFound { entity, .. } => format!("{entity} not found with the given ID"),
            Self::Conflict { entity } => format!("{entity} already exists!"),
            Self::Repo(err) => err.to_string(),
        }
    }
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { entity, id } => write!(f, "{entity} {id} not found"),
            Self::Conflict { entity } => write!(f, "{entity} already exists"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Confirmation message returned after a successful delete.
pub fn deleted_message(entity: Entity) -> String {
    format!("{entity} deleted successfully!")
}

//! # Error Module
//!
//! Domain errors for the patterns core, built with thiserror.

use crate::mediator::Role;
use thiserror::Error;

/// Core domain errors.
///
/// Only coordinator wiring can fail; routing and visitation are total.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Role mismatch: {slot} slot received a {actual} participant")]
    RoleMismatch { slot: Role, actual: Role },

    #[error("Participant already wired into another slot: {0}")]
    DuplicateParticipant(Role),
}

/// Result type alias with CoreError
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Create role mismatch error
    pub fn role_mismatch(slot: Role, actual: Role) -> Self {
        Self::RoleMismatch { slot, actual }
    }
}

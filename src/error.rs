//! @acp:module "Errors"
//! @acp:summary "Recoverable error types for the generation engine"
//! @acp:domain cli
//! @acp:layer types
//!
//! Only two error kinds exist: invalid setup input and entitlement denial.
//! Both are normal outcomes the caller handles; neither aborts the session.

use thiserror::Error;

use crate::entitlement::Denial;

/// Errors surfaced by the forge library
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ForgeError {
    /// Setup incomplete or malformed input to `apply_setup`
    #[error("invalid setup: {0}")]
    Validation(String),

    /// Quota exhausted or tier insufficient for the requested feature.
    /// Carries the current tier and the unlock requirement so the caller
    /// can render an upgrade prompt.
    #[error("generation locked: {0}")]
    Entitlement(#[from] Denial),
}

/// Library-wide result type
pub type Result<T> = std::result::Result<T, ForgeError>;

impl ForgeError {
    /// Entitlement denial details, if this is a denial
    pub fn denial(&self) -> Option<&Denial> {
        match self {
            ForgeError::Entitlement(denial) => Some(denial),
            ForgeError::Validation(_) => None,
        }
    }
}

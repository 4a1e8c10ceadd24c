//! Error taxonomy for the host ABI boundary.
//!
//! Mirrors the `vcmpError` enum the game server returns from its function
//! table (`include/vcmp.h` in the upstream SDK): one variant per host error
//! code, nothing added. Every fallible operation in the core threads this
//! type through `?` rather than swallowing it.

use thiserror::Error;

/// One of the error codes the host's `vcmpError` enum can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EntityError {
    #[error("no entity occupies this handle")]
    NoSuchEntity,
    #[error("output buffer too small for the result")]
    BufferTooSmall,
    #[error("input string or blob exceeds the host's limit")]
    TooLargeInput,
    #[error("argument outside the accepted range")]
    ArgumentOutOfBounds,
    #[error("a required argument was null")]
    NullArgument,
    #[error("no free slot in the target pool")]
    PoolExhausted,
    #[error("name rejected by the host's naming policy")]
    InvalidName,
    #[error("the host refused the request")]
    RequestDenied,
}

impl EntityError {
    /// Maps the host's `vcmpError` wire value to the typed variant.
    /// `vcmpErrorNone` (0) has no corresponding variant; callers check it
    /// before converting.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Self::NoSuchEntity),
            2 => Some(Self::BufferTooSmall),
            3 => Some(Self::TooLargeInput),
            4 => Some(Self::ArgumentOutOfBounds),
            5 => Some(Self::NullArgument),
            6 => Some(Self::PoolExhausted),
            7 => Some(Self::InvalidName),
            8 => Some(Self::RequestDenied),
            _ => None,
        }
    }
}

/// An adapter-level failure, carrying the host function name that failed
/// so the caller can log useful context without every call site repeating
/// `tracing::warn!("GetPlayerWorld failed: {e}")` boilerplate.
#[derive(Debug, Error)]
#[error("{function} failed: {source}")]
pub struct HostCallError {
    pub function: &'static str,
    #[source]
    pub source: EntityError,
}

impl HostCallError {
    pub fn new(function: &'static str, source: EntityError) -> Self {
        Self { function, source }
    }
}

pub type HostResult<T> = Result<T, EntityError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_code_round_trips_known_values() {
        assert_eq!(EntityError::from_code(1), Some(EntityError::NoSuchEntity));
        assert_eq!(EntityError::from_code(8), Some(EntityError::RequestDenied));
        assert_eq!(EntityError::from_code(0), None);
        assert_eq!(EntityError::from_code(99), None);
    }
}

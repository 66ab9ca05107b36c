// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/// Result type for codec operations
pub type MortonResult<T> = Result<T, MortonError>;

/// Errors raised by the interleaver and the geographic codec.
///
/// Every failure is reported synchronously, before any output is produced.
///
/// # Examples
/// ```
/// use zorder_codec::{interleave, MortonError};
///
/// let err = interleave(&[74]).unwrap_err();
/// assert!(matches!(err, MortonError::InvalidArgument(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MortonError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl MortonError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        MortonError::InvalidArgument(msg.into())
    }
}

use std::fmt::Display;

use anyhow::Error;
use thiserror::Error;

use crate::error::WrapError;

/// A general error, consisting of only a message.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct GeneralError {
    message: String,
}

impl GeneralError {
    /// Constructs a new general error.
    pub fn new<M>(message: M) -> Self
    where
        M: Display,
    {
        Self {
            message: message.to_string(),
        }
    }
}

/// A not found error.
#[derive(Error, Debug)]
#[error("{target} not found")]
pub struct NotFoundError {
    target: String,
}

impl NotFoundError {
    /// Constructs a new not found error.
    pub fn new<M>(target: M) -> Self
    where
        M: Display,
    {
        Self {
            target: target.to_string(),
        }
    }
}

/// The format asks for something the generator cannot honor, such as custom bans.
///
/// Raised before any random numbers are consumed.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct UnsupportedFormatError {
    message: String,
}

impl UnsupportedFormatError {
    /// Constructs a new unsupported format error.
    pub fn new<M>(message: M) -> Self
    where
        M: Display,
    {
        Self {
            message: message.to_string(),
        }
    }
}

/// A legal pool is too small for what the format requires.
#[derive(Error, Debug)]
#[error("Legal {kind} count is insufficient to support {explanation} ({have} / {need}).")]
pub struct InsufficientPoolError {
    pub kind: String,
    pub explanation: String,
    pub have: usize,
    pub need: usize,
}

/// The generator ran out of candidates before completing a team.
///
/// The seed is included so the failure can be reproduced.
#[derive(Error, Debug)]
#[error("Could not build a random team for {format} (seed={seed})")]
pub struct GenerationExhaustedError {
    pub format: String,
    pub seed: u64,
}

/// Helper for an [`struct@Error`] wrapping a [`GeneralError`].
#[track_caller]
pub fn general_error<M>(message: M) -> Error
where
    M: Display,
{
    GeneralError::new(message).wrap_error()
}

/// Helper for an [`struct@Error`] wrapping a [`NotFoundError`].
#[track_caller]
pub fn not_found_error<M>(target: M) -> Error
where
    M: Display,
{
    NotFoundError::new(target).wrap_error()
}

/// Helper for an [`struct@Error`] wrapping an [`UnsupportedFormatError`].
#[track_caller]
pub fn unsupported_format_error<M>(message: M) -> Error
where
    M: Display,
{
    UnsupportedFormatError::new(message).wrap_error()
}

/// Helper for an [`struct@Error`] wrapping an [`InsufficientPoolError`].
#[track_caller]
pub fn insufficient_pool_error<K, X>(kind: K, explanation: X, have: usize, need: usize) -> Error
where
    K: Display,
    X: Display,
{
    InsufficientPoolError {
        kind: kind.to_string(),
        explanation: explanation.to_string(),
        have,
        need,
    }
    .wrap_error()
}

/// Helper for an [`struct@Error`] wrapping a [`GenerationExhaustedError`].
#[track_caller]
pub fn generation_exhausted_error<F>(format: F, seed: u64) -> Error
where
    F: Display,
{
    GenerationExhaustedError {
        format: format.to_string(),
        seed,
    }
    .wrap_error()
}

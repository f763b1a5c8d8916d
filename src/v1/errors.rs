/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use crate::v1::LimitName;
use std::io;
use thiserror::Error;

/// Error conditions that can be returned
#[derive(Error, Debug)]
pub enum TwitterError {
    #[error("I/O error")]
    Io(#[from] io::Error),

    #[error("Request network error")]
    Request(#[from] reqwest::Error),

    #[error("URL Parse error")]
    UrlParsing(#[from] url::ParseError),

    #[error("Request signing error: {0}")]
    Signing(String),

    #[error("Missing argument: {0}")]
    MissingArgument(String),

    #[error("Invalid argument {field}: {reason}")]
    InvalidArgument { field: String, reason: String },

    #[error("{field} {description} ({value}) exceeds {limit_name} ({limit})")]
    ArgumentLimit {
        field: String,
        value: u64,
        limit_name: LimitName,
        limit: u32,
        description: String,
    },

    #[error("{0} was used before being initialized with a client session")]
    SessionNotInitialized(&'static str),

    #[error("Client not found")]
    ClientNotFound(),

    #[error("Expected response missing")]
    ResponseMissing(),

    #[error("API Response was error: {0}, msg: {1}")]
    ApiResponse(u16, String),

    #[error("API Response is a too many requests error. Rate limit resets at {0}")]
    ApiResponseTooManyRequests(u64),

    #[error("API Response is malformed: {0:?}")]
    ApiResponseMalformed(serde_json::Error),
}

/// Broad classification of a [`TwitterError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad arguments supplied by the caller
    Argument,
    /// A component was used before it was bound to a session. Not recoverable.
    Uninitialized,
    /// Network, protocol or local I/O failure
    Transport,
    /// The remote service rejected the operation or answered with something unusable
    Operation,
}

impl TwitterError {
    pub fn kind(&self) -> ErrorKind {
        use TwitterError as E;
        match self {
            E::MissingArgument(_) | E::InvalidArgument { .. } | E::ArgumentLimit { .. } => {
                ErrorKind::Argument
            }
            E::SessionNotInitialized(_) | E::ClientNotFound() => ErrorKind::Uninitialized,
            E::Io(_) | E::Request(_) | E::UrlParsing(_) | E::Signing(_) => ErrorKind::Transport,
            E::ResponseMissing()
            | E::ApiResponse(..)
            | E::ApiResponseTooManyRequests(_)
            | E::ApiResponseMalformed(_) => ErrorKind::Operation,
        }
    }

    pub(crate) fn invalid_argument(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

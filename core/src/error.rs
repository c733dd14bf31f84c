// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::fmt;
use thiserror::Error;

/// The error type for rdsquery operations.
///
/// Every failure of a query, whether it happened before the request left the
/// process, on the wire, or inside the remote service, is reported through this
/// single value.
///
/// ## Display
///
/// - `"<code>: <message>"` if the service returned an error code.
/// - `"<status>: <message>"` if only an HTTP status is known.
/// - `"<message>"` otherwise.
#[derive(Error, Debug)]
pub struct Error {
    kind: ErrorKind,
    status: u16,
    code: String,
    message: String,
    #[source]
    source: Option<anyhow::Error>,
}

/// The kind of error that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The endpoint URL could not be parsed or is not usable for a query.
    MalformedEndpoint,

    /// The request never got a response (connection, DNS, timeout).
    Transport,

    /// The service answered with a non-success status.
    Api,

    /// A success response body did not match the expected structure.
    Decode,

    /// Configuration error (missing fields, invalid values)
    ConfigInvalid,

    /// Unexpected errors
    Unexpected,
}

impl Error {
    /// Create a new error with the given kind and message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            status: 0,
            code: String::new(),
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Set the HTTP status code this error was built from.
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    /// Set the error code returned by the service.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// HTTP status code, `0` if the error did not come from an HTTP response.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Error code returned by the service, empty if none.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Message without the code or status prefix.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Check if this error was returned by the remote service.
    pub fn is_api_error(&self) -> bool {
        self.kind == ErrorKind::Api
    }
}

// Convenience constructors
impl Error {
    /// Create a malformed endpoint error
    pub fn malformed_endpoint(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedEndpoint, message)
    }

    /// Create a transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Transport, message)
    }

    /// Create an api error from a response status.
    ///
    /// An empty message is replaced by `status_line`, so an api error always
    /// carries something readable.
    pub fn api(
        status: u16,
        code: impl Into<String>,
        message: impl Into<String>,
        status_line: &str,
    ) -> Self {
        let mut message = message.into();
        if message.is_empty() {
            message = status_line.to_string();
        }

        Self::new(ErrorKind::Api, message)
            .with_status(status)
            .with_code(code)
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Decode, message)
    }

    /// Create a config invalid error
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigInvalid, message)
    }

    /// Create an unexpected error
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.code.is_empty() {
            write!(f, "{}: ", self.code)?;
        } else if self.status > 0 {
            write!(f, "{}: ", self.status)?;
        }
        f.write_str(&self.message)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::MalformedEndpoint => write!(f, "malformed endpoint"),
            ErrorKind::Transport => write!(f, "transport error"),
            ErrorKind::Api => write!(f, "api error"),
            ErrorKind::Decode => write!(f, "decode error"),
            ErrorKind::ConfigInvalid => write!(f, "invalid configuration"),
            ErrorKind::Unexpected => write!(f, "unexpected error"),
        }
    }
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, Error>;

// Common From implementations
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(err)
    }
}

impl From<http::Error> for Error {
    fn from(err: http::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

// SPDX-FileCopyrightText: 2022 Hewlett-Packard Development Company, L.P.
//
// SPDX-License-Identifier: MPL-2.0

use std::fmt;

/// The `error` member of a JSON-RPC response. Odoo puts a code, a message and
/// a nested `data` object with the server traceback in here; it is kept as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteError(pub serde_json::Value);

impl RemoteError {
    pub fn message(&self) -> Option<&str> {
        self.0.get("message").and_then(|x| x.as_str())
    }
}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for RemoteError {}

#[derive(Debug)]
pub enum Error {
    MissingVar(&'static str),
    Reqwest(reqwest::Error),
    Status {
        endpoint: String,
        code: u16,
        canonical_reason: Option<String>,
    },
    SerdeJson(serde_json::Error),
    Remote(RemoteError),
    UnexpectedResult(&'static str),
}

impl Error {
    /// The request never produced a usable HTTP response.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Reqwest(_) | Self::Status { .. })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::MissingVar(name) => write!(f, "{} is missing", name),
            Self::Reqwest(err) => write!(f, "{}", err),
            Self::Status {
                endpoint,
                code,
                canonical_reason: Some(reason),
            } => write!(f, "'{} {}' from '{}'", code, reason, endpoint),
            Self::Status { endpoint, code, .. } => write!(f, "'{}' from '{}'", code, endpoint),
            Self::SerdeJson(err) => write!(f, "{}", err),
            Self::Remote(err) => write!(f, "{}", err),
            Self::UnexpectedResult(expected) => write!(f, "result is not {}", expected),
        }
    }
}

impl std::error::Error for Error {}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Reqwest(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::SerdeJson(err)
    }
}

impl From<RemoteError> for Error {
    fn from(err: RemoteError) -> Self {
        Self::Remote(err)
    }
}

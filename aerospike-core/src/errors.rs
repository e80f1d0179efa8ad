// Copyright 2015-2020 Aerospike, Inc.
//
// Portions may be licensed to Aerospike, Inc. under one or more contributor
// license agreements.
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not
// use this file except in compliance with the License. You may obtain a copy of
// the License at http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied. See the
// License for the specific language governing permissions and limitations under
// the License.

//! Error and Result types for the Aerospike client.
//!
//! # Examples
//!
//! Handling an error returned by the client.
//!
//! ```rust,edition2018
//! use aerospike::*;
//!
//! let hosts = std::env::var("AEROSPIKE_HOSTS").unwrap();
//! let policy = ClientPolicy::default();
//! let client = Client::new(&policy, &hosts).expect("Failed to connect to cluster").await;
//! let key = as_key!("test", "test", "someKey");
//! match client.get(&ReadPolicy::default(), &key, Bins::None).await {
//!     Ok(record) => {
//!         match record.time_to_live() {
//!             None => println!("record never expires"),
//!             Some(duration) => println!("ttl: {} secs", duration.as_secs()),
//!         }
//!     },
//!     Err(Error::ServerError(ResultCode::KeyNotFoundError)) => {
//!         println!("No such record: {}", key);
//!     },
//!     Err(err) => {
//!         println!("Error fetching record: {}", err);
//!         let mut source = std::error::Error::source(&err);
//!         while let Some(cause) = source {
//!             println!("Caused by: {}", cause);
//!             source = cause.source();
//!         }
//!     }
//! }
//! ```

#![allow(missing_docs)]

use crate::ResultCode;

/// Result type alias used throughout the client.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type returned by all fallible client operations.
///
/// Each variant corresponds to one of the error kinds described by the client's error
/// taxonomy: transport failures, timeouts, protocol violations, server result codes, and
/// client-side state errors (cluster empty, no node for a partition, pool exhausted).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The client received a server response that it was not able to process.
    #[error("Bad Server Response: {0}")]
    BadResponse(String),

    /// The client was not able to communicate with the cluster due to some issue with the
    /// network connection.
    #[error("Unable to communicate with server cluster: {0}")]
    Connection(String),

    /// One or more of the arguments passed to the client are invalid.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Cluster node is invalid.
    #[error("Invalid cluster node: {0}")]
    InvalidNode(String),

    /// Exceeded max. number of connections per node.
    #[error("Too many connections")]
    NoMoreConnections,

    /// Server responded with a response code indicating an error condition.
    #[error("Server error: {0}")]
    ServerError(ResultCode),

    /// Error returned when executing a User-Defined Function (UDF) resulted in an error.
    #[error("UDF Bad Response: {0}")]
    UdfBadResponse(String),

    /// Error returned when a command timed out before it could be completed.
    #[error("Timeout: {0}")]
    Timeout(String),

    /// A consumer-initiated cancellation of an in-flight or queued command.
    #[error("Cancelled: {0}")]
    Cancelled(String),

    /// An error with added context, wrapping the error that caused it.
    #[error("{0}: {1}")]
    Chained(String, Box<Error>),

    /// Catch-all for ad-hoc error messages (equivalent to `bail!("...")`).
    #[error("{0}")]
    Other(String),

    /// Error decoding Base64 encoded value.
    #[error(transparent)]
    Base64(#[from] base64::DecodeError),

    /// Error interpreting a sequence of u8 as a UTF-8 encoded string.
    #[error(transparent)]
    InvalidUtf8(#[from] std::str::Utf8Error),

    /// Error during an I/O operation.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Error returned from the `recv` function on an MPSC `Receiver`.
    #[error(transparent)]
    MpscRecv(#[from] std::sync::mpsc::RecvError),

    /// Error parsing an IP or socket address.
    #[error(transparent)]
    ParseAddr(#[from] std::net::AddrParseError),

    /// Error parsing an integer.
    #[error(transparent)]
    ParseInt(#[from] std::num::ParseIntError),

    /// Error returned while hashing a password for user authentication.
    #[error(transparent)]
    PwHash(#[from] pwhash::error::Error),
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Other(s.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Other(s)
    }
}

/// Adds `chain_err`, attaching a human-readable context message to the error as it
/// propagates, similar to `anyhow::Context`.
pub trait ResultExt<T> {
    /// Wrap the error (if any) with a context message produced lazily by `f`.
    fn chain_err<F, S>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> ResultExt<T> for Result<T> {
    fn chain_err<F, S>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| Error::Chained(f().into(), Box::new(e)))
    }
}

/// Construct and return an `Error` early, analogous to `anyhow::bail!`.
macro_rules! bail {
    ($e:expr) => {
        return Err($crate::errors::Error::from($e))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::errors::Error::Other(format!($fmt, $($arg)*)))
    };
}

macro_rules! log_error_chain {
    ($err:expr, $($arg:tt)*) => {
        error!($($arg)*);
        error!("Error: {}", $err);
        let mut source = std::error::Error::source(&$err);
        while let Some(cause) = source {
            error!("caused by: {}", cause);
            source = cause.source();
        }
    };
}

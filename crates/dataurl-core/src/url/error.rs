// Copyright (c) 2024 Zensical <contributors@zensical.org>

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to
// deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NON-INFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
// FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS
// IN THE SOFTWARE.

// ----------------------------------------------------------------------------

//! Data URL error.

use std::fmt;
use std::result;

use thiserror::Error;

// ----------------------------------------------------------------------------
// Enums
// ----------------------------------------------------------------------------

/// Error kind.
///
/// Every [`Error`] carries one of these kinds, which allows callers to branch
/// on the failing rule without matching on the variant and its context.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input does not begin with `data:`.
    MalformedPrefix,
    /// Media type, attribute or value fails its grammar after unescaping.
    InvalidToken,
    /// Mandatory `,` before the payload is absent.
    MissingSeparator,
    /// Payload contains disallowed characters, or input remains unconsumed.
    InvalidPayload,
    /// A `%` is not followed by two hexadecimal digits.
    MalformedPercentEscape,
    /// Payload marked as base64 does not decode.
    MalformedBase64,
}

/// Data URL error.
#[derive(Debug, Error)]
pub enum Error {
    /// Grammar or escaping error.
    #[error("cannot parse at position {position} in {input}: {kind}")]
    Parse {
        /// Kind of error.
        kind: ErrorKind,
        /// Byte offset of the failing rule.
        position: usize,
        /// Original input.
        input: String,
    },

    /// Base64 decoding error.
    #[error("cannot parse at position {position} in {input}: {source}")]
    Base64 {
        /// Byte offset of the payload.
        position: usize,
        /// Original input.
        input: String,
        /// Underlying decoding error.
        #[source]
        source: base64::DecodeError,
    },
}

// ----------------------------------------------------------------------------
// Implementations
// ----------------------------------------------------------------------------

impl Error {
    /// Creates a parse error.
    #[must_use]
    pub fn parse<S>(kind: ErrorKind, position: usize, input: S) -> Self
    where
        S: Into<String>,
    {
        Error::Parse {
            kind,
            position,
            input: input.into(),
        }
    }
}

#[allow(clippy::must_use_candidate)]
impl Error {
    /// Returns the kind of error.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Parse { kind, .. } => *kind,
            Error::Base64 { .. } => ErrorKind::MalformedBase64,
        }
    }

    /// Returns the byte offset at which the failing rule was attempted.
    #[inline]
    pub fn position(&self) -> usize {
        match self {
            Error::Parse { position, .. } | Error::Base64 { position, .. } => {
                *position
            }
        }
    }

    /// Returns the original input.
    #[inline]
    pub fn input(&self) -> &str {
        match self {
            Error::Parse { input, .. } | Error::Base64 { input, .. } => input,
        }
    }
}

// ----------------------------------------------------------------------------
// Trait implementations
// ----------------------------------------------------------------------------

impl fmt::Display for ErrorKind {
    /// Formats the error kind for display.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            ErrorKind::MalformedPrefix => "expected `data:` prefix",
            ErrorKind::InvalidToken => "invalid token",
            ErrorKind::MissingSeparator => "expected `,` before payload",
            ErrorKind::InvalidPayload => "invalid payload",
            ErrorKind::MalformedPercentEscape => "malformed percent escape",
            ErrorKind::MalformedBase64 => "malformed base64 payload",
        })
    }
}

// ----------------------------------------------------------------------------
// Type aliases
// ----------------------------------------------------------------------------

/// Data URL result.
pub type Result<T = ()> = result::Result<T, Error>;

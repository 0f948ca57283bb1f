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

//! Token grammar.
//!
//! Media types and parameters follow the token grammar of [RFC 2045]. Values
//! and payloads use a relaxed variant which admits `tspecials`, as they often
//! contain characters like `/` or `:`.
//!
//! [RFC 2045]: https://www.rfc-editor.org/rfc/rfc2045#section-5.1

// ----------------------------------------------------------------------------
// Constants
// ----------------------------------------------------------------------------

/// Special characters excluded from tokens.
const TSPECIALS: &[u8] = b"()<>@,;:\\\"/[]?=";

// ----------------------------------------------------------------------------
// Functions
// ----------------------------------------------------------------------------

/// Returns whether the byte may appear in a relaxed token.
///
/// This is printable ASCII without space, i.e., `0x21` to `0x7E`.
///
/// # Examples
///
/// ```
/// use dataurl_core::token::is_relaxed_byte;
///
/// // Check relaxed bytes
/// assert!(is_relaxed_byte(b'/'));
/// assert!(!is_relaxed_byte(b' '));
/// ```
#[inline]
#[must_use]
pub const fn is_relaxed_byte(byte: u8) -> bool {
    byte.is_ascii_graphic()
}

/// Returns whether the byte may appear in a token.
///
/// # Examples
///
/// ```
/// use dataurl_core::token::is_token_byte;
///
/// // Check token bytes
/// assert!(is_token_byte(b'+'));
/// assert!(!is_token_byte(b'/'));
/// ```
#[inline]
#[must_use]
pub fn is_token_byte(byte: u8) -> bool {
    is_relaxed_byte(byte) && !TSPECIALS.contains(&byte)
}

/// Returns whether the value is a token.
///
/// # Examples
///
/// ```
/// use dataurl_core::token::is_token;
///
/// // Check tokens
/// assert!(is_token(b"charset"));
/// assert!(!is_token(b"text/plain"));
/// assert!(!is_token(b""));
/// ```
#[inline]
#[must_use]
pub fn is_token(value: &[u8]) -> bool {
    !value.is_empty() && value.iter().copied().all(is_token_byte)
}

/// Returns whether the value is a relaxed token.
///
/// # Examples
///
/// ```
/// use dataurl_core::token::is_relaxed_token;
///
/// // Check relaxed tokens
/// assert!(is_relaxed_token(b"http://example.com"));
/// assert!(!is_relaxed_token(b"two words"));
/// ```
#[inline]
#[must_use]
pub fn is_relaxed_token(value: &[u8]) -> bool {
    !value.is_empty() && value.iter().copied().all(is_relaxed_byte)
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

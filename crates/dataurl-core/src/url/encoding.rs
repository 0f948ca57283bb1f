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

//! Encoding.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use percent_encoding::{
    percent_decode, percent_encode, AsciiSet, NON_ALPHANUMERIC,
};
use std::borrow::Cow;

use super::error::{Error, ErrorKind, Result};

// ----------------------------------------------------------------------------
// Constants
// ----------------------------------------------------------------------------

/// Character set to be percent-encoded.
///
/// Everything except ASCII letters, digits and `-_.!~*'()` is escaped, which
/// notably includes `+`, so base64 payloads are never read as spaces.
const SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Base64 engine.
///
/// Uses the standard alphabet and pads on encoding, but accepts payloads with
/// or without padding on decoding, since both are common in the wild.
pub(crate) const ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

// ----------------------------------------------------------------------------
// Functions
// ----------------------------------------------------------------------------

/// Percent-encodes a byte slice.
///
/// Bytes are treated as raw octets, so no charset is interpreted. Escapes use
/// uppercase hexadecimal digits.
///
/// # Examples
///
/// ```
/// use dataurl_core::encoding::escape;
///
/// // Escape bytes
/// assert_eq!(escape(b"a+b c"), "a%2Bb%20c");
/// assert_eq!(escape(&[0x09, 0xFF]), "%09%FF");
/// ```
#[inline]
#[must_use]
pub fn escape(value: &[u8]) -> Cow<str> {
    percent_encode(value, SET).into()
}

/// Percent-decodes a string.
///
/// Every `%` must be followed by two hexadecimal digits, in any case. If the
/// string contains no escapes, the bytes are borrowed.
///
/// # Errors
///
/// If a `%` isn't followed by two hexadecimal digits, [`Error::Parse`] with
/// [`ErrorKind::MalformedPercentEscape`] is returned, positioned at the `%`.
///
/// # Examples
///
/// ```
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// use dataurl_core::encoding::unescape;
///
/// // Unescape string
/// let bytes = unescape("A%20brief%20note")?;
/// assert_eq!(bytes.as_ref(), b"A brief note");
/// # Ok(())
/// # }
/// ```
#[inline]
pub fn unescape(value: &str) -> Result<Cow<[u8]>> {
    unescape_within(value, 0, value)
}

/// Percent-decodes a segment of an enclosing input.
///
/// The segment starts at the given offset into the input, which is used to
/// position errors relative to the input instead of the segment.
pub(crate) fn unescape_within<'a>(
    value: &'a str,
    offset: usize,
    input: &str,
) -> Result<Cow<'a, [u8]>> {
    let bytes = value.as_bytes();

    // The decoder passes malformed escapes through verbatim, so we need to
    // check every `%` up front to report the first offending one
    for (i, _) in value.match_indices('%') {
        match bytes.get(i + 1..i + 3) {
            Some(&[b1, b2])
                if b1.is_ascii_hexdigit() && b2.is_ascii_hexdigit() => {}
            _ => {
                return Err(Error::parse(
                    ErrorKind::MalformedPercentEscape,
                    offset + i,
                    input,
                ))
            }
        }
    }

    // All escapes are valid
    Ok(percent_decode(bytes).into())
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

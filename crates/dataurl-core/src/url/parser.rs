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

//! Parser.

use base64::Engine;
use std::borrow::Cow;
use std::ops::Range;

use super::cursor::Cursor;
use super::encoding::{unescape_within, ENGINE};
use super::error::{Error, ErrorKind, Result};
use super::token::{is_relaxed_byte, is_relaxed_token, is_token};
use super::{DataUrl, Parameters};

// ----------------------------------------------------------------------------
// Functions
// ----------------------------------------------------------------------------

/// Parses a data URL.
///
/// The grammar is consumed strictly left to right, segment by segment, while
/// each segment either matches as a whole or is skipped, if it's optional:
///
/// ``` text
/// data:[<type>/<subtype>][;<attribute>=<value>]*[;base64],<payload>
/// ```
///
/// Every captured piece is percent-decoded before it is validated, so escapes
/// can't be used to smuggle separators or control characters into tokens.
///
/// # Errors
///
/// This function returns [`Error::Parse`] when the input violates the grammar,
/// or [`Error::Base64`] when the payload is marked as base64, but can't be
/// decoded. Both are positioned at the offset of the failing rule.
///
/// # Examples
///
/// ```
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// use dataurl_core::parse;
///
/// // Parse data URL
/// let url = parse("data:text/plain;charset=US-ASCII,hello")?;
/// assert_eq!(url.content_type(), Some("text/plain"));
/// assert_eq!(url.data(), b"hello");
/// # Ok(())
/// # }
/// ```
pub fn parse(input: &str) -> Result<DataUrl> {
    let result = scan(input);
    #[cfg(feature = "tracing")]
    trace(input, &result);
    result
}

/// Scans the input into a data URL.
fn scan(input: &str) -> Result<DataUrl> {
    let mut cursor = Cursor::new(input);
    if !cursor.eat("data:") {
        return Err(Error::parse(ErrorKind::MalformedPrefix, 0, input));
    }

    // Media type is optional, and left absent if omitted, as we don't want to
    // synthesize the default, which would break round-trips
    let content_type = media_type(&mut cursor)?;

    // Collect parameters - repeated attributes overwrite the previous value,
    // but keep the position of the first occurrence
    let mut parameters = Parameters::new();
    while let Some((attribute, value)) = parameter(&mut cursor)? {
        parameters.insert(attribute, value);
    }

    // Base64 marker must come after all parameters
    let is_base64 = cursor.eat(";base64");
    if !cursor.eat(",") {
        return Err(Error::parse(
            ErrorKind::MissingSeparator,
            cursor.position(),
            input,
        ));
    }

    // Payload may be empty, but must extend to the end of the input
    let range = cursor.take_while(is_relaxed_byte);
    if !cursor.is_empty() {
        return Err(Error::parse(
            ErrorKind::InvalidPayload,
            cursor.position(),
            input,
        ));
    }

    // Decode payload, which is only base64-decoded after unescaping
    let start = range.start;
    let payload = decode(&cursor, range)?;
    let data = if is_base64 {
        ENGINE.decode(payload).map_err(|source| Error::Base64 {
            position: start,
            input: input.to_owned(),
            source,
        })?
    } else {
        payload.into_owned()
    };

    // No errors occurred
    Ok(DataUrl::from_parts(data, content_type, parameters, is_base64))
}

/// Parses the optional `<type>/<subtype>` segment.
fn media_type(cursor: &mut Cursor) -> Result<Option<String>> {
    let start = cursor.position();

    // Both halves must be present, or the segment is considered absent
    let kind = cursor.take_while(|byte| !matches!(byte, b'/' | b';' | b','));
    if kind.is_empty() || !cursor.eat("/") {
        cursor.reset(start);
        return Ok(None);
    }
    let subtype = cursor.take_while(|byte| !matches!(byte, b';' | b','));
    if subtype.is_empty() {
        cursor.reset(start);
        return Ok(None);
    }

    // Validate both halves independently
    let kind = token(cursor, kind, is_token)?;
    let subtype = token(cursor, subtype, is_token)?;
    Ok(Some(format!("{kind}/{subtype}")))
}

/// Parses an optional `;<attribute>=<value>` segment.
fn parameter(cursor: &mut Cursor) -> Result<Option<(String, String)>> {
    let start = cursor.position();
    if !cursor.eat(";") {
        return Ok(None);
    }

    // A segment without `=`, like the base64 marker, isn't a parameter
    let attribute =
        cursor.take_while(|byte| !matches!(byte, b'=' | b';' | b','));
    if attribute.is_empty() || !cursor.eat("=") {
        cursor.reset(start);
        return Ok(None);
    }
    let value = cursor.take_while(|byte| !matches!(byte, b';' | b','));
    if value.is_empty() {
        cursor.reset(start);
        return Ok(None);
    }

    // Attributes are strict tokens, while values may contain tspecials
    let attribute = token(cursor, attribute, is_token)?;
    let value = token(cursor, value, is_relaxed_token)?;
    Ok(Some((attribute, value)))
}

/// Decodes and validates a token in the given range.
fn token<F>(cursor: &Cursor, range: Range<usize>, f: F) -> Result<String>
where
    F: FnOnce(&[u8]) -> bool,
{
    let start = range.start;
    let bytes = decode(cursor, range)?;
    if f(bytes.as_ref()) {
        // Tokens are ASCII, so every byte maps onto a character
        Ok(bytes.iter().copied().map(char::from).collect())
    } else {
        Err(Error::parse(ErrorKind::InvalidToken, start, cursor.input()))
    }
}

/// Percent-decodes the given range.
fn decode<'a>(
    cursor: &Cursor<'a>,
    range: Range<usize>,
) -> Result<Cow<'a, [u8]>> {
    let start = range.start;
    unescape_within(cursor.slice(range), start, cursor.input())
}

/// Emits a diagnostic event for the parse result.
#[cfg(feature = "tracing")]
fn trace(input: &str, result: &Result<DataUrl>) {
    match result {
        Ok(url) => tracing::trace!(
            len = input.len(),
            base64 = url.is_base64(),
            "parsed data URL"
        ),
        Err(err) => tracing::debug!(
            len = input.len(),
            position = err.position(),
            kind = ?err.kind(),
            "cannot parse data URL"
        ),
    }
}

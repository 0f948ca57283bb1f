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

//! Serializer.

use base64::Engine;
use std::fmt::{self, Write};

use super::encoding::{escape, ENGINE};
use super::DataUrl;

// ----------------------------------------------------------------------------
// Functions
// ----------------------------------------------------------------------------

/// Writes the string representation of a data URL.
///
/// Each half of the media type and every attribute and value is escaped on
/// its own, so separators inside them can never be mistaken for structure.
/// The payload is either escaped as raw bytes or base64-encoded with padding.
pub(crate) fn write<W>(url: &DataUrl, f: &mut W) -> fmt::Result
where
    W: Write,
{
    f.write_str("data:")?;

    // Split media type on the first slash only, since the subtype may contain
    // further slashes, which must be escaped
    if let Some(content_type) = url.content_type() {
        match content_type.split_once('/') {
            Some((kind, subtype)) => {
                f.write_str(&escape(kind.as_bytes()))?;
                f.write_char('/')?;
                f.write_str(&escape(subtype.as_bytes()))?;
            }
            None => f.write_str(&escape(content_type.as_bytes()))?,
        }
    }

    // Write parameters in insertion order
    for (attribute, value) in url.parameters() {
        f.write_char(';')?;
        f.write_str(&escape(attribute.as_bytes()))?;
        f.write_char('=')?;
        f.write_str(&escape(value.as_bytes()))?;
    }

    // Write payload
    if url.is_base64() {
        f.write_str(";base64,")?;
        f.write_str(&ENGINE.encode(url.data()))
    } else {
        f.write_char(',')?;
        f.write_str(&escape(url.data()))
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use crate::{DataUrl, Parameters};

    #[test]
    fn media_type_halves_are_escaped() {
        let url = DataUrl::builder("x")
            .content_type("text/x;y/z")
            .base64(false)
            .build();
        assert_eq!(url.to_text(), "data:text/x%3By%2Fz,x");
    }

    #[test]
    fn parameters_keep_insertion_order() {
        let mut parameters = Parameters::new();
        parameters.insert("b".into(), "2".into());
        parameters.insert("a".into(), "1".into());
        parameters.insert("b".into(), "3".into());
        let url = DataUrl::from_parts("", None, parameters, false);
        assert_eq!(url.to_text(), "data:;b=3;a=1,");
    }

    #[test]
    fn base64_payload_is_padded() {
        let url = DataUrl::new([0xFB_u8, 0xFF]);
        assert_eq!(url.to_text(), "data:;base64,+/8=");
    }

    #[test]
    fn raw_payload_is_escaped() {
        let url = DataUrl::builder([0_u8, 1, 2, 255]).base64(false).build();
        assert_eq!(url.to_text(), "data:,%00%01%02%FF");
    }
}

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

//! Data URL.

use indexmap::IndexMap;
use std::fmt;
use std::str::FromStr;

mod builder;
pub mod cursor;
pub mod encoding;
mod error;
mod parser;
mod serializer;
pub mod token;

pub use builder::Builder;
pub use error::{Error, ErrorKind, Result};
pub use parser::parse;

// ----------------------------------------------------------------------------
// Structs
// ----------------------------------------------------------------------------

/// Data URL.
///
/// Data URLs as defined in [RFC 2397] embed a payload, together with a media
/// type and parameters, directly inside a URL. The textual representation is
/// defined as follows, where the payload is percent-encoded or base64-encoded:
///
/// ``` text
/// data:[<type>/<subtype>][;<attribute>=<value>]*[;base64],<payload>
/// ```
///
/// Values hold the decoded payload, and are immutable after construction. The
/// media type is recorded as absent if omitted, and is not defaulted, so that
/// conversion into a string reproduces the same structure. Parameters retain
/// the order in which they were first inserted.
///
/// Validation is the job of the parser. Values created via [`DataUrl::new`] or
/// [`DataUrl::builder`] are trusted to contain valid tokens for media types and
/// parameters, or serialization will yield a string that doesn't parse.
///
/// [RFC 2397]: https://www.rfc-editor.org/rfc/rfc2397
///
/// # Examples
///
/// Create a data URL:
///
/// ```
/// use dataurl_core::DataUrl;
///
/// // Create data URL
/// let url = DataUrl::builder("hello")
///     .content_type("text/plain")
///     .base64(false)
///     .build();
/// assert_eq!(url.to_text(), "data:text/plain,hello");
/// ```
///
/// Create a data URL from a string:
///
/// ```
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// use dataurl_core::DataUrl;
///
/// // Create data URL from string
/// let url: DataUrl = "data:text/plain;base64,aGVsbG8=".parse()?;
/// assert_eq!(url.data(), b"hello");
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct DataUrl {
    /// Decoded payload.
    data: Vec<u8>,
    /// Media type in `type/subtype` form, if any.
    content_type: Option<String>,
    /// Parameters in insertion order.
    parameters: Parameters,
    /// Whether the payload is base64-encoded.
    is_base64: bool,
}

// ----------------------------------------------------------------------------
// Implementations
// ----------------------------------------------------------------------------

impl DataUrl {
    /// Creates a data URL with a base64-encoded payload.
    ///
    /// The data URL has no media type and no parameters, which are set with
    /// [`DataUrl::builder`] or [`DataUrl::from_parts`].
    ///
    /// # Examples
    ///
    /// ```
    /// use dataurl_core::DataUrl;
    ///
    /// // Create data URL
    /// let url = DataUrl::new("hello");
    /// assert_eq!(url.to_text(), "data:;base64,aGVsbG8=");
    /// ```
    #[inline]
    #[must_use]
    pub fn new<D>(data: D) -> Self
    where
        D: Into<Vec<u8>>,
    {
        Self::from_parts(data, None, Parameters::new(), true)
    }

    /// Creates a data URL from its parts.
    ///
    /// # Examples
    ///
    /// ```
    /// use dataurl_core::{DataUrl, Parameters};
    ///
    /// // Create parameters
    /// let mut parameters = Parameters::new();
    /// parameters.insert("charset".into(), "utf-8".into());
    ///
    /// // Create data URL from parts
    /// let url = DataUrl::from_parts(
    ///     "hi", Some("text/plain".into()), parameters, false
    /// );
    /// assert_eq!(url.to_text(), "data:text/plain;charset=utf-8,hi");
    /// ```
    #[must_use]
    pub fn from_parts<D>(
        data: D,
        content_type: Option<String>,
        parameters: Parameters,
        is_base64: bool,
    ) -> Self
    where
        D: Into<Vec<u8>>,
    {
        Self {
            data: data.into(),
            content_type,
            parameters,
            is_base64,
        }
    }

    /// Creates a data URL builder.
    ///
    /// # Examples
    ///
    /// ```
    /// use dataurl_core::DataUrl;
    ///
    /// // Create data URL builder
    /// let url = DataUrl::builder([0_u8, 1, 2, 255]).build();
    /// assert_eq!(url.data(), [0, 1, 2, 255]);
    /// ```
    #[inline]
    #[must_use]
    pub fn builder<D>(data: D) -> Builder
    where
        D: Into<Vec<u8>>,
    {
        Builder::new(data)
    }

    /// Returns the string representation.
    ///
    /// This is the same as [`ToString::to_string`], which is provided through
    /// the [`fmt::Display`] implementation.
    ///
    /// # Examples
    ///
    /// ```
    /// use dataurl_core::DataUrl;
    ///
    /// // Create data URL and obtain string representation
    /// let url = DataUrl::builder(" ").base64(false).build();
    /// assert_eq!(url.to_text(), "data:,%20");
    /// ```
    #[inline]
    #[must_use]
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    /// Consumes the data URL and returns the decoded payload.
    #[inline]
    #[must_use]
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}

#[allow(clippy::must_use_candidate)]
impl DataUrl {
    /// Returns the decoded payload.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns the media type, if any.
    #[inline]
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Returns the parameters.
    #[inline]
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Returns whether the payload is base64-encoded.
    #[inline]
    pub fn is_base64(&self) -> bool {
        self.is_base64
    }

    /// Returns the media type, or `text/plain` if absent.
    ///
    /// # Examples
    ///
    /// ```
    /// # use std::error::Error;
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// use dataurl_core::DataUrl;
    ///
    /// // Obtain defaulted media type
    /// let url: DataUrl = "data:,hello".parse()?;
    /// assert_eq!(url.content_type(), None);
    /// assert_eq!(url.media_type(), "text/plain");
    /// # Ok(())
    /// # }
    /// ```
    #[inline]
    pub fn media_type(&self) -> &str {
        self.content_type().unwrap_or("text/plain")
    }

    /// Returns the `charset` parameter, if any.
    ///
    /// If neither a media type nor a `charset` parameter is given, the charset
    /// defaults to `US-ASCII`, mirroring the default of the media type.
    ///
    /// # Examples
    ///
    /// ```
    /// # use std::error::Error;
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// use dataurl_core::DataUrl;
    ///
    /// // Obtain charset
    /// let url: DataUrl = "data:text/html;charset=utf-8,<p>".parse()?;
    /// assert_eq!(url.charset(), Some("utf-8"));
    ///
    /// // Obtain defaulted charset
    /// let url: DataUrl = "data:,hello".parse()?;
    /// assert_eq!(url.charset(), Some("US-ASCII"));
    /// # Ok(())
    /// # }
    /// ```
    pub fn charset(&self) -> Option<&str> {
        match self.parameters.get("charset") {
            Some(charset) => Some(charset.as_str()),
            None if self.content_type.is_none() => Some("US-ASCII"),
            None => None,
        }
    }
}

// ----------------------------------------------------------------------------
// Trait implementations
// ----------------------------------------------------------------------------

impl FromStr for DataUrl {
    type Err = Error;

    /// Attempts to create a data URL from a string.
    ///
    /// # Errors
    ///
    /// This method returns [`Error::Parse`], if the string is not a valid data
    /// URL, or [`Error::Base64`], if the payload can't be base64-decoded.
    ///
    /// # Examples
    ///
    /// ```
    /// # use std::error::Error;
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// use dataurl_core::DataUrl;
    ///
    /// // Create data URL from string
    /// let url: DataUrl = "data:,A%20brief%20note".parse()?;
    /// assert_eq!(url.data(), b"A brief note");
    /// # Ok(())
    /// # }
    /// ```
    #[inline]
    fn from_str(value: &str) -> Result<Self> {
        parse(value)
    }
}

impl TryFrom<&str> for DataUrl {
    type Error = Error;

    /// Attempts to create a data URL from a string.
    #[inline]
    fn try_from(value: &str) -> Result<Self> {
        parse(value)
    }
}

// ----------------------------------------------------------------------------

impl PartialEq for DataUrl {
    /// Compares two data URLs for equality.
    ///
    /// Parameters are compared in order, as [`IndexMap`] equality on its own
    /// would ignore it, and order is significant for the string representation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use std::error::Error;
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// use dataurl_core::DataUrl;
    ///
    /// // Create and compare data URLs
    /// let a: DataUrl = "data:;a=1;b=2,x".parse()?;
    /// let b: DataUrl = "data:;b=2;a=1,x".parse()?;
    /// assert_ne!(a, b);
    /// # Ok(())
    /// # }
    /// ```
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
            && self.content_type == other.content_type
            && self.is_base64 == other.is_base64
            && self.parameters.iter().eq(other.parameters.iter())
    }
}

impl Eq for DataUrl {}

// ----------------------------------------------------------------------------

impl fmt::Display for DataUrl {
    /// Formats the data URL for display.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        serializer::write(self, f)
    }
}

impl fmt::Debug for DataUrl {
    /// Formats the data URL for debugging.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("DataUrl")
            .field("data", &self.data)
            .field("content_type", &self.content_type)
            .field("parameters", &self.parameters)
            .field("is_base64", &self.is_base64)
            .finish()
    }
}

// ----------------------------------------------------------------------------
// Type aliases
// ----------------------------------------------------------------------------

/// Parameters of a data URL in insertion order.
pub type Parameters = IndexMap<String, String>;

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

//! Data URL builder.

use super::{DataUrl, Parameters};

// ----------------------------------------------------------------------------
// Structs
// ----------------------------------------------------------------------------

/// Data URL builder.
#[derive(Clone, Debug)]
pub struct Builder {
    /// Decoded payload.
    data: Vec<u8>,
    /// Media type, if any.
    content_type: Option<String>,
    /// Parameters in insertion order.
    parameters: Parameters,
    /// Whether the payload is base64-encoded.
    is_base64: bool,
}

// ----------------------------------------------------------------------------
// Implementations
// ----------------------------------------------------------------------------

impl Builder {
    /// Creates a data URL builder.
    ///
    /// Note that the canonical way to create a [`DataUrl`] is to invoke the
    /// [`DataUrl::builder`] method, which creates an instance of [`Builder`].
    /// The defaults match [`DataUrl::new`], so the payload is base64-encoded.
    ///
    /// # Examples
    ///
    /// ```
    /// use dataurl_core::DataUrl;
    ///
    /// // Create data URL builder
    /// let builder = DataUrl::builder("hello");
    /// ```
    #[must_use]
    pub fn new<D>(data: D) -> Self
    where
        D: Into<Vec<u8>>,
    {
        Self {
            data: data.into(),
            content_type: None,
            parameters: Parameters::new(),
            is_base64: true,
        }
    }

    /// Sets the media type in `type/subtype` form.
    ///
    /// # Examples
    ///
    /// ```
    /// use dataurl_core::DataUrl;
    ///
    /// // Create data URL builder and set media type
    /// let url = DataUrl::builder("{}")
    ///     .content_type("application/json")
    ///     .build();
    /// assert_eq!(url.content_type(), Some("application/json"));
    /// ```
    #[must_use]
    pub fn content_type<S>(mut self, content_type: S) -> Self
    where
        S: Into<String>,
    {
        self.content_type = Some(content_type.into());
        self
    }

    /// Adds a parameter.
    ///
    /// If the attribute was already added, its value is replaced, but it keeps
    /// its original position, which is consistent with parsing.
    ///
    /// # Examples
    ///
    /// ```
    /// use dataurl_core::DataUrl;
    ///
    /// // Create data URL builder and add parameters
    /// let url = DataUrl::builder("hi")
    ///     .parameter("charset", "utf-8")
    ///     .parameter("lang", "en")
    ///     .parameter("charset", "US-ASCII")
    ///     .base64(false)
    ///     .build();
    /// assert_eq!(url.to_text(), "data:;charset=US-ASCII;lang=en,hi");
    /// ```
    #[must_use]
    pub fn parameter<K, V>(mut self, attribute: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.parameters.insert(attribute.into(), value.into());
        self
    }

    /// Sets whether the payload is base64-encoded.
    #[must_use]
    pub fn base64(mut self, is_base64: bool) -> Self {
        self.is_base64 = is_base64;
        self
    }

    /// Builds the data URL.
    #[must_use]
    pub fn build(self) -> DataUrl {
        DataUrl::from_parts(
            self.data,
            self.content_type,
            self.parameters,
            self.is_base64,
        )
    }
}

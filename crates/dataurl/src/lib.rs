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

//! Data URLs as defined in [RFC 2397].
//!
//! This crate parses data URLs into a structured [`DataUrl`] and serializes
//! them back into strings, escaping arbitrary bytes along the way.
//!
//! [RFC 2397]: https://www.rfc-editor.org/rfc/rfc2397
//!
//! # Examples
//!
//! ```
//! # use std::error::Error;
//! # fn main() -> Result<(), Box<dyn Error>> {
//! use dataurl::DataUrl;
//!
//! // Parse data URL and convert it back into a string
//! let url: DataUrl = "data:text/plain;charset=US-ASCII,hello".parse()?;
//! assert_eq!(url.parameters()["charset"], "US-ASCII");
//! assert_eq!(url.to_text(), "data:text/plain;charset=US-ASCII,hello");
//! # Ok(())
//! # }
//! ```

pub use dataurl_core::encoding;
pub use dataurl_core::{
    parse, Builder, DataUrl, Error, ErrorKind, Parameters, Result,
};

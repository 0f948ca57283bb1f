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

//! Cursor.

use std::ops::Range;

// ----------------------------------------------------------------------------
// Structs
// ----------------------------------------------------------------------------

/// Cursor.
///
/// Cursors scan an input left to right over byte offsets, which are used for
/// precise error positions. All primitives only ever advance the cursor, and
/// never beyond a byte that doesn't satisfy them, so scanning is linear. The
/// only way back is [`Cursor::reset`], which the parser uses to abandon an
/// optional segment that didn't match as a whole.
///
/// Predicates operate on bytes, and must treat all non-ASCII bytes alike, so
/// that runs always end on a character boundary and slicing stays sound.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Input.
    input: &'a str,
    /// Current byte offset.
    position: usize,
}

// ----------------------------------------------------------------------------
// Implementations
// ----------------------------------------------------------------------------

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of the input.
    ///
    /// # Examples
    ///
    /// ```
    /// use dataurl_core::cursor::Cursor;
    ///
    /// // Create cursor
    /// let cursor = Cursor::new("data:,");
    /// assert_eq!(cursor.position(), 0);
    /// ```
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    /// Consumes the literal, if the remaining input starts with it.
    ///
    /// # Examples
    ///
    /// ```
    /// use dataurl_core::cursor::Cursor;
    ///
    /// // Create cursor and consume literal
    /// let mut cursor = Cursor::new("data:,");
    /// assert!(cursor.eat("data:"));
    /// assert!(!cursor.eat("data:"));
    /// assert_eq!(cursor.position(), 5);
    /// ```
    pub fn eat(&mut self, literal: &str) -> bool {
        let found = self.rest().starts_with(literal);
        if found {
            self.position += literal.len();
        }
        found
    }

    /// Consumes the maximal run of bytes satisfying the predicate.
    ///
    /// The returned range may be empty, in which case nothing is consumed.
    ///
    /// # Examples
    ///
    /// ```
    /// use dataurl_core::cursor::Cursor;
    ///
    /// // Create cursor and consume run
    /// let mut cursor = Cursor::new("text/plain");
    /// let range = cursor.take_while(|byte| byte != b'/');
    /// assert_eq!(range, 0..4);
    /// ```
    pub fn take_while<F>(&mut self, mut f: F) -> Range<usize>
    where
        F: FnMut(u8) -> bool,
    {
        let start = self.position;
        let len = self
            .rest()
            .bytes()
            .position(|byte| !f(byte))
            .unwrap_or(self.input.len() - start);

        // Advance past run
        self.position += len;
        start..self.position
    }

    /// Moves the cursor back to a previously obtained position.
    #[inline]
    pub fn reset(&mut self, position: usize) {
        debug_assert!(position <= self.position);
        self.position = position;
    }
}

#[allow(clippy::must_use_candidate)]
impl<'a> Cursor<'a> {
    /// Returns the input.
    #[inline]
    pub fn input(&self) -> &'a str {
        self.input
    }

    /// Returns the current byte offset.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the remaining input.
    #[inline]
    pub fn rest(&self) -> &'a str {
        &self.input[self.position..]
    }

    /// Returns the slice of the input for the given range.
    #[inline]
    pub fn slice(&self, range: Range<usize>) -> &'a str {
        &self.input[range]
    }

    /// Returns whether the input is exhausted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.position == self.input.len()
    }
}

// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Pluggable tokenization over a byte buffer.
//!
//! The SimHash reducer only needs successive token spans; the alphabet
//! policy deciding what counts as a token is a collaborator, not core
//! content. [`AsciiAlphaTokenizer`] is the reference policy: skip anything
//! outside `[A-Za-z]`, then return the maximal run of `[A-Za-z]` bytes. A
//! `NUL` byte terminates the stream.
//!
//! # Examples
//!
//! ```
//! use simdex::tokenizer::AsciiAlphaTokenizer;
//! use simdex::tokenizer::Tokenizer;
//!
//! let tokenizer = AsciiAlphaTokenizer;
//! let mut pos = 0;
//! let mut spans = Vec::new();
//! while let Some((start, end)) = tokenizer.next_token(b"what's new", pos) {
//!     pos = end.max(pos + 1);
//!     if end > start {
//!         spans.push(end - start);
//!     }
//! }
//! assert_eq!(spans, vec![4, 1, 3]);
//! ```

/// Produces successive token spans from a byte buffer.
///
/// `next_token(buf, pos)` returns the `[start, end)` byte range of the next
/// token at or after `pos`, or `None` once the stream ends. An empty run
/// (`start == end`) at a non-terminal position signals an inter-token gap:
/// callers advance past it and resume. Tokens of length 0 are never fed to
/// the hasher by [`crate::fingerprint`].
pub trait Tokenizer {
    /// Returns the next token span at or after `pos`, or `None` at end of
    /// stream.
    fn next_token(&self, buf: &[u8], pos: usize) -> Option<(usize, usize)>;
}

/// The reference tokenizer: maximal runs of ASCII letters, `NUL`-terminated.
#[derive(Debug, Default, Clone, Copy)]
pub struct AsciiAlphaTokenizer;

impl Tokenizer for AsciiAlphaTokenizer {
    fn next_token(&self, buf: &[u8], pos: usize) -> Option<(usize, usize)> {
        if pos >= buf.len() || buf[pos] == 0 {
            return None;
        }
        let end = buf[pos..]
            .iter()
            .position(|&b| !b.is_ascii_alphabetic())
            .map_or(buf.len(), |offset| pos + offset);
        Some((pos, end))
    }
}

/// Iterates the non-empty tokens of `buf` under `tokenizer`, yielding their
/// byte spans in order.
///
/// This is the loop shape the reference C++ driver uses: advance to `next +
/// 1` after each token (or gap), so a `NUL`/end-of-buffer stops the stream
/// and zero-length runs are skipped without being re-visited.
pub fn token_spans<'t, T: Tokenizer>(
    tokenizer: &'t T,
    buf: &'t [u8],
) -> impl Iterator<Item = (usize, usize)> + 't {
    let mut pos = 0usize;
    std::iter::from_fn(move || loop {
        let (start, end) = tokenizer.next_token(buf, pos)?;
        pos = end + 1;
        if end > start {
            return Some((start, end));
        }
        if end >= buf.len() {
            return None;
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_next_token_spot_values() {
        // Mirrors the reference tokenizer loop: advance to `end + 1` after
        // every call, including over zero-length inter-token gaps, and
        // check the exact span-length sequence the spec calls out.
        let buf = b"what's new?How5is _ the ^# stuff\0";
        let tokenizer = AsciiAlphaTokenizer;
        let mut pos = 0usize;
        let mut lengths = Vec::new();
        while let Some((start, end)) = tokenizer.next_token(buf, pos) {
            lengths.push(end - start);
            pos = end + 1;
        }
        assert_eq!(lengths, vec![4, 1, 3, 3, 2, 0, 0, 3, 0, 0, 0, 5]);
        assert_eq!(tokenizer.next_token(buf, pos), None);
    }

    #[test]
    fn spot_values_from_reference_string() {
        let buf = b"what's new?How5is _ the ^# stuff";
        let tokenizer = AsciiAlphaTokenizer;
        let lengths: Vec<usize> = token_spans(&tokenizer, buf)
            .map(|(start, end)| end - start)
            .collect();
        assert_eq!(lengths, vec![4, 1, 3, 3, 2, 3, 5]);
    }

    #[test]
    fn nul_terminates_stream() {
        let buf = b"abc\0def";
        let tokenizer = AsciiAlphaTokenizer;
        let spans: Vec<(usize, usize)> = token_spans(&tokenizer, buf).collect();
        assert_eq!(spans, vec![(0, 3)]);
    }

    #[test]
    fn empty_buffer_yields_nothing() {
        let tokenizer = AsciiAlphaTokenizer;
        assert_eq!(token_spans(&tokenizer, b"").count(), 0);
    }
}

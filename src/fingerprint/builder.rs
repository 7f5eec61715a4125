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

use crate::fingerprint::reducer::reduce;
use crate::hash::DEFAULT_SEED;
use crate::tokenizer::AsciiAlphaTokenizer;
use crate::tokenizer::Tokenizer;

const DEFAULT_WINDOW: usize = 4;

/// Builder for configuring a SimHash reduction: the rolling-hash window
/// size, the token-hash seed, and the tokenizer.
///
/// # Examples
///
/// ```
/// use simdex::fingerprint::SimHasher;
///
/// let fp = SimHasher::default().window(6).hash(b"some document text");
/// assert_ne!(fp, 0);
/// ```
#[derive(Debug, Clone)]
pub struct SimHasher<T = AsciiAlphaTokenizer> {
    window: usize,
    seed: u64,
    tokenizer: T,
}

impl Default for SimHasher<AsciiAlphaTokenizer> {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            seed: DEFAULT_SEED,
            tokenizer: AsciiAlphaTokenizer,
        }
    }
}

impl<T: Tokenizer> SimHasher<T> {
    /// Sets the rolling-hash window size (number of tokens per window).
    ///
    /// # Panics
    ///
    /// Panics if `window` is 0.
    pub fn window(mut self, window: usize) -> Self {
        assert!(window > 0, "window must be at least 1");
        self.window = window;
        self
    }

    /// Sets the seed used to hash each token's bytes.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Replaces the tokenizer used to split the input into tokens.
    ///
    /// # Examples
    ///
    /// ```
    /// use simdex::fingerprint::SimHasher;
    /// use simdex::tokenizer::AsciiAlphaTokenizer;
    ///
    /// let fp = SimHasher::default()
    ///     .tokenizer(AsciiAlphaTokenizer)
    ///     .hash(b"plug in a different tokenizer");
    /// assert_ne!(fp, 0);
    /// ```
    pub fn tokenizer<U: Tokenizer>(self, tokenizer: U) -> SimHasher<U> {
        SimHasher {
            window: self.window,
            seed: self.seed,
            tokenizer,
        }
    }

    /// Computes the SimHash fingerprint of `bytes` under this configuration.
    pub fn hash(&self, bytes: &[u8]) -> u64 {
        reduce(bytes, self.window, self.seed, &self.tokenizer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_window_is_four() {
        assert_eq!(SimHasher::default().window, 4);
    }

    #[test]
    fn custom_window_changes_output() {
        let buf = b"the quick brown fox jumps over the lazy dog repeatedly and again";
        let default_fp = SimHasher::default().hash(buf);
        let wide_fp = SimHasher::default().window(8).hash(buf);
        assert_ne!(default_fp, wide_fp);
    }

    #[test]
    #[should_panic(expected = "window must be at least 1")]
    fn zero_window_panics() {
        let _ = SimHasher::default().window(0);
    }
}

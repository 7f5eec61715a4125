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

use crate::cyclic::Cyclic;
use crate::hash::hash_bytes;
use crate::tokenizer::token_spans;
use crate::tokenizer::Tokenizer;

/// Computes the SimHash of `bytes` using the default window size (4) and
/// tokenizer ([`crate::tokenizer::AsciiAlphaTokenizer`]).
///
/// Returns fingerprint `0` if `bytes` contains no tokens at all — this is a
/// valid fingerprint value, not an error.
///
/// # Examples
///
/// ```
/// use simdex::fingerprint::simhash;
///
/// assert_eq!(simhash(b""), 0);
/// assert_ne!(simhash(b"hello world"), 0);
/// ```
pub fn simhash(bytes: &[u8]) -> u64 {
    crate::fingerprint::SimHasher::default().hash(bytes)
}

/// Reduces a stream of per-window rolling hashes into a single 64-bit
/// SimHash fingerprint by bitwise vote counting.
///
/// For every window-hash `r` produced by the cyclic hash, each of the 64
/// bits of `r` increments its counter if set, decrements it if clear. The
/// output fingerprint has bit `j` set iff counter `j`'s final tally is
/// strictly positive.
pub(crate) fn reduce<T: Tokenizer>(bytes: &[u8], window: usize, seed: u64, tokenizer: &T) -> u64 {
    let mut votes = [0i64; 64];
    let mut cyclic = Cyclic::new(window);

    for (start, end) in token_spans(tokenizer, bytes) {
        let token_hash = hash_bytes(&bytes[start..end], seed);
        let r = cyclic.push(token_hash);
        for (j, vote) in votes.iter_mut().enumerate() {
            *vote += if (r >> j) & 1 == 1 { 1 } else { -1 };
        }
    }

    let mut fingerprint: u64 = 0;
    for (j, &vote) in votes.iter().enumerate() {
        if vote > 0 {
            fingerprint |= 1u64 << j;
        }
    }
    fingerprint
}

/// Returns the number of bits that differ between `a` and `b`
/// (`popcount(a XOR b)`).
///
/// # Examples
///
/// ```
/// use simdex::fingerprint::num_differing_bits;
///
/// assert_eq!(num_differing_bits(0b0011, 0b0101), 2);
/// assert_eq!(num_differing_bits(7, 7), 0);
/// ```
pub fn num_differing_bits(a: u64, b: u64) -> u32 {
    (a ^ b).count_ones()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::AsciiAlphaTokenizer;

    #[test]
    fn empty_input_yields_zero() {
        assert_eq!(reduce(b"", 4, 0, &AsciiAlphaTokenizer), 0);
    }

    #[test]
    fn is_deterministic() {
        let buf = b"the quick brown fox jumps over the lazy dog";
        assert_eq!(
            reduce(buf, 4, 0, &AsciiAlphaTokenizer),
            reduce(buf, 4, 0, &AsciiAlphaTokenizer)
        );
    }

}

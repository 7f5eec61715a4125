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

//! The 64-bit byte-hasher used to turn a token's bytes into a single hash
//! fed into the cyclic (rolling) hash.
//!
//! Any mixing function that avalanches well is a conforming choice here —
//! the fingerprinting pipeline never interprets a hash's numeric value, only
//! its bits. [`XxHash64`] is used as the default because it is fast,
//! allocation-free, and deterministic within a process.

mod xxhash;

pub use self::xxhash::XxHash64;

/// The default seed used when a caller does not care to pick their own.
pub const DEFAULT_SEED: u64 = 0;

/// Hashes `bytes` with `seed` into a single 64-bit, well-avalanching value.
///
/// # Examples
///
/// ```
/// use simdex::hash::hash_bytes;
///
/// let a = hash_bytes(b"hello", 0);
/// let b = hash_bytes(b"hello", 0);
/// let c = hash_bytes(b"world", 0);
/// assert_eq!(a, b);
/// assert_ne!(a, c);
/// ```
pub fn hash_bytes(bytes: &[u8], seed: u64) -> u64 {
    use std::hash::Hasher;

    let mut hasher = XxHash64::with_seed(seed);
    hasher.write(bytes);
    hasher.finish64()
}

/// Reads a little-endian integer from `buf`, zero-extended to `u64`.
///
/// `buf` must be exactly 4 or 8 bytes — the two widths XxHash64 ever reads.
#[inline]
pub(crate) fn read_u64_le(buf: &[u8]) -> u64 {
    match buf.len() {
        8 => {
            let mut arr = [0u8; 8];
            arr.copy_from_slice(buf);
            u64::from_le_bytes(arr)
        }
        4 => {
            let mut arr = [0u8; 4];
            arr.copy_from_slice(buf);
            u32::from_le_bytes(arr) as u64
        }
        n => unreachable!("read_u64_le called with unsupported width {n}"),
    }
}

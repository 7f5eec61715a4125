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

//! `simdex` provides near-duplicate detection for textual documents using
//! 64-bit SimHash fingerprints and a permutation-based index that answers
//! "is there any stored fingerprint within `k` bits of this query?" in time
//! sublinear in the corpus size.
//!
//! Two pieces do the work:
//!
//! - [`fingerprint`]: tokenize a byte string, feed tokens through a rolling
//!   hash over sliding windows, and reduce the resulting stream into a
//!   single 64-bit SimHash by bitwise vote counting.
//! - [`table`]: given a family of disjoint bitmask blocks partitioning the
//!   64 bits of a fingerprint, permute stored fingerprints so that a k-bit
//!   Hamming-distance query becomes a single prefix range scan plus a
//!   per-candidate popcount check.
//!
//! # Example
//!
//! ```rust
//! use simdex::fingerprint::simhash;
//! use simdex::fingerprint::num_differing_bits;
//! use simdex::table::Table;
//!
//! let masks = [
//!     0xFFE0000000000000,
//!     0x001FFC0000000000,
//!     0x000003FF80000000,
//!     0x00000000_7FF00000,
//!     0x00000000_000FFE00,
//!     0x00000000_000001FF,
//! ];
//! let mut table = Table::new(3, &masks).unwrap();
//!
//! let original = simhash(b"the quick brown fox jumps over the lazy dog");
//! let edited = simhash(b"the quick brown fox jumped over the lazy dog");
//! assert!(num_differing_bits(original, edited) <= 8);
//!
//! table.insert(original);
//! assert!(table.find_any(original).is_some());
//! ```

pub mod cyclic;
pub mod error;
pub mod fingerprint;
pub mod hash;
mod store;
pub mod table;
pub mod tokenizer;

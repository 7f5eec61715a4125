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

//! A permutation-based index answering k-bit Hamming-distance queries over
//! 64-bit fingerprints via a single prefix range scan.
//!
//! # Usage
//!
//! ```rust
//! use simdex::fingerprint::simhash;
//! use simdex::table::Table;
//!
//! // Six disjoint 64-bit blocks, widths 11,11,11,11,11,9, covering all 64 bits.
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
//! let fp = simhash(b"the quick brown fox jumps over the lazy dog");
//! table.insert(fp);
//! assert!(table.find_any(fp).is_some());
//! ```
//!
//! # Notes
//!
//! - A single table only catches near-duplicates whose differing bits land
//!   in at most `k` of the `B` blocks *and* leave the leading `B - k` blocks
//!   untouched. Coordinating several tables over rotated block orders (so
//!   every error pattern is caught by at least one of them) is the caller's
//!   responsibility.
//! - Query results are returned in ascending *permuted* key order; do not
//!   assume any ordering over the original fingerprints.

mod permutation;
mod sketch;

pub use self::sketch::Table;

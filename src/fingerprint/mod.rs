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

//! SimHash fingerprinting: reduce a byte buffer to a single 64-bit
//! locality-sensitive hash by vote-counting the bits of a rolling hash over
//! sliding windows of tokens.
//!
//! # Usage
//!
//! ```rust
//! use simdex::fingerprint::simhash;
//! use simdex::fingerprint::num_differing_bits;
//!
//! let a = simhash(b"the quick brown fox jumps over the lazy dog");
//! let b = simhash(b"the quick brown fox jumps over a lazy dog");
//! assert!(num_differing_bits(a, b) <= 8);
//! ```

mod builder;
mod reducer;

pub use self::builder::SimHasher;
pub use self::reducer::num_differing_bits;
pub use self::reducer::simhash;

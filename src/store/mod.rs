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

//! The ordered 64-bit key store a [`crate::table::Table`] keeps its
//! permuted fingerprints in.
//!
//! The core only needs `insert`, `remove`, `first_at_or_after`, and
//! `next_greater` in logarithmic time; a `BTreeSet<u64>` satisfies that
//! exactly and is the idiomatic Rust stand-in for the dense bit-array
//! structure the original implementation used.

use std::collections::BTreeSet;
use std::ops::Bound;

/// An ordered set of 64-bit keys supporting the handful of operations a
/// permuted-index prefix scan needs.
#[derive(Debug, Default, Clone)]
pub(crate) struct SortedU64Set {
    inner: BTreeSet<u64>,
}

impl SortedU64Set {
    pub(crate) fn new() -> Self {
        Self {
            inner: BTreeSet::new(),
        }
    }

    /// Inserts `key`. Returns `true` if it was not already present.
    pub(crate) fn insert(&mut self, key: u64) -> bool {
        self.inner.insert(key)
    }

    /// Removes `key`. Returns `true` if it was present.
    pub(crate) fn remove(&mut self, key: u64) -> bool {
        self.inner.remove(&key)
    }

    pub(crate) fn contains(&self, key: u64) -> bool {
        self.inner.contains(&key)
    }

    /// The smallest stored key that is `>= key`, if any.
    pub(crate) fn first_at_or_after(&self, key: u64) -> Option<u64> {
        self.inner.range(key..).next().copied()
    }

    /// The smallest stored key strictly greater than `key`, if any.
    pub(crate) fn next_greater(&self, key: u64) -> Option<u64> {
        self.inner
            .range((Bound::Excluded(key), Bound::Unbounded))
            .next()
            .copied()
    }

    pub(crate) fn len(&self) -> usize {
        self.inner.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.inner.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_is_idempotent() {
        let mut set = SortedU64Set::new();
        assert!(set.insert(5));
        assert!(!set.insert(5));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn remove_absent_is_a_no_op() {
        let mut set = SortedU64Set::new();
        assert!(!set.remove(5));
        assert!(set.is_empty());
    }

    #[test]
    fn first_at_or_after_and_next_greater() {
        let mut set = SortedU64Set::new();
        for v in [10u64, 20, 30] {
            set.insert(v);
        }
        assert_eq!(set.first_at_or_after(15), Some(20));
        assert_eq!(set.first_at_or_after(20), Some(20));
        assert_eq!(set.next_greater(20), Some(30));
        assert_eq!(set.next_greater(30), None);
        assert_eq!(set.first_at_or_after(31), None);
    }
}

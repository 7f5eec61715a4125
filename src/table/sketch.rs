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

use crate::error::Error;
use crate::fingerprint::num_differing_bits;
use crate::store::SortedU64Set;
use crate::table::permutation::Descriptor;

/// A permuted-index table answering "is there a stored fingerprint within
/// `k` bits of this query?" in time sublinear in the number of stored
/// fingerprints.
///
/// Built from a family of disjoint bitmasks (`masks`) that together cover
/// all 64 bits — the *block family* — and a tolerance `k`. Fingerprints are
/// stored permuted so that the first `B - k` blocks form a shared prefix;
/// queries perform one prefix range scan over that ordering plus a
/// per-candidate popcount check.
///
/// A single table is a one-sided filter: it only catches near-duplicates
/// whose differing bits fall in at most `k` of the `B` blocks *and* leave
/// the leading `B - k` blocks identical. Catching every possible `k`-bit
/// error pattern requires several tables built from rotations of the block
/// order — that coordination is the caller's responsibility.
///
/// # Examples
///
/// ```
/// use simdex::table::Table;
///
/// let masks = [
///     0xFFE0000000000000,
///     0x001FFC0000000000,
///     0x000003FF80000000,
///     0x00000000_7FF00000,
///     0x00000000_000FFE00,
///     0x00000000_000001FF,
/// ];
/// let mut table = Table::new(3, &masks).unwrap();
///
/// table.insert(1u64 << 28);
/// assert!(table.find_any((1u64 << 28) | 0x03).is_some());
/// assert!(table.find_any((1u64 << 28) | 0x0F).is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Table {
    k: usize,
    descriptor: Descriptor,
    store: SortedU64Set,
}

impl Table {
    /// Builds a table for tolerance `k` and block family `masks`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidBlockFamily`](crate::error::ErrorKind::InvalidBlockFamily)
    /// if `masks` is empty, any block is empty or non-contiguous, blocks
    /// overlap or don't cover all 64 bits, or `k >= masks.len()`.
    pub fn new(k: usize, masks: &[u64]) -> Result<Self, Error> {
        let descriptor = Descriptor::new(k, masks)?;
        Ok(Self {
            k,
            descriptor,
            store: SortedU64Set::new(),
        })
    }

    /// The Hamming-distance tolerance this table was built with.
    pub fn tolerance(&self) -> usize {
        self.k
    }

    /// The number of fingerprints currently stored.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns `true` if the table holds no fingerprints.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Permutes `h` into the table's internal key space. Exposed for tests
    /// and diagnostics; callers do not need to call this themselves.
    pub fn permute(&self, h: u64) -> u64 {
        self.descriptor.permute(h)
    }

    /// The exact inverse of [`Table::permute`].
    pub fn unpermute(&self, permuted: u64) -> u64 {
        self.descriptor.unpermute(permuted)
    }

    /// Permutes `h` and inserts it. Returns `true` if it was newly added.
    ///
    /// Idempotent: inserting the same fingerprint twice leaves the table in
    /// the same state as inserting it once.
    pub fn insert(&mut self, h: u64) -> bool {
        self.store.insert(self.descriptor.permute(h))
    }

    /// Permutes `h` and removes it. A no-op if it was absent.
    pub fn remove(&mut self, h: u64) -> bool {
        self.store.remove(self.descriptor.permute(h))
    }

    /// Returns the first stored fingerprint within `k` bits of `h`, in
    /// ascending permuted order, or `None` if there is no such match.
    pub fn find_any(&self, h: u64) -> Option<u64> {
        self.scan(h).next()
    }

    /// Returns every stored fingerprint within `k` bits of `h`, in ascending
    /// permuted order.
    pub fn find_all(&self, h: u64) -> Vec<u64> {
        self.scan(h).collect()
    }

    /// Returns `true` if `h` itself (exact match, independent of `k`) was
    /// inserted.
    ///
    /// This is membership, not a `k`-bit query: `find_any(h)` can succeed on
    /// a near-duplicate of `h` even when `contains(h)` is `false`.
    pub fn contains(&self, h: u64) -> bool {
        self.store.contains(self.descriptor.permute(h))
    }

    fn scan(&self, h: u64) -> impl Iterator<Item = u64> + '_ {
        let query = self.descriptor.permute(h);
        let search_mask = self.descriptor.search_mask();
        let low = query & search_mask;
        let high = query | !search_mask;
        let k = self.k;
        let descriptor = &self.descriptor;
        let store = &self.store;

        let mut cursor = store.first_at_or_after(low);
        std::iter::from_fn(move || loop {
            let cur = cursor?;
            if cur > high {
                return None;
            }
            cursor = store.next_greater(cur);
            if num_differing_bits(cur, query) as usize <= k {
                return Some(descriptor.unpermute(cur));
            }
        })
    }

    /// Iterates all stored fingerprints in ascending *permuted* key order.
    ///
    /// Callers that need the original fingerprints must call
    /// [`Table::unpermute`] themselves — iteration order is only meaningful
    /// in the permuted domain (see `DESIGN.md`).
    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.store.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DRIVER_MASKS: [u64; 6] = [
        0xFFE0000000000000,
        0x001FFC0000000000,
        0x000003FF80000000,
        0x00000000_7FF00000,
        0x00000000_000FFE00,
        0x00000000_000001FF,
    ];

    #[test]
    fn new_rejects_invalid_block_family() {
        assert!(Table::new(0, &[]).is_err());
        assert!(Table::new(6, &DRIVER_MASKS).is_err());
    }

    #[test]
    fn boundary_k_zero_is_exact_membership() {
        let mut table = Table::new(0, &DRIVER_MASKS).unwrap();
        table.insert(42);
        assert!(table.find_any(42).is_some());
        assert!(table.find_any(43).is_none());
    }

    #[test]
    fn distance_exceeding_k_is_rejected() {
        let mut table = Table::new(3, &DRIVER_MASKS).unwrap();
        table.insert(0x0000000100000000);
        assert!(table.find_any(0x000000010000000F).is_none());
    }

    #[test]
    fn idempotent_insert_and_noop_remove() {
        let mut table = Table::new(3, &DRIVER_MASKS).unwrap();
        assert!(table.insert(7));
        assert!(!table.insert(7));
        assert_eq!(table.len(), 1);

        assert!(!table.remove(999));
        assert!(table.remove(7));
        assert!(table.is_empty());
    }

    #[test]
    fn contains_is_exact_unlike_find_any() {
        let mut table = Table::new(3, &DRIVER_MASKS).unwrap();
        table.insert(7u64 << 28);

        assert!(table.contains(7u64 << 28));
        assert!(!table.contains((7u64 << 28) | 0x03));
        assert!(table.find_any((7u64 << 28) | 0x03).is_some());
    }

    #[test]
    fn find_all_matches_are_all_within_tolerance() {
        let mut table = Table::new(3, &DRIVER_MASKS).unwrap();
        for i in 1u64..50 {
            table.insert(i << 28);
        }
        let query = (7u64 << 28) | 0x03;
        for hit in table.find_all(query) {
            assert!(num_differing_bits(hit, query) <= 3);
        }
        assert!(table.find_any(query).is_some());
    }

    #[test]
    fn driver_scenario_small_scale() {
        // The reference CLI driver's four-query-per-key pattern, scaled
        // down from 100_000 to keep the unit test fast.
        let mut table = Table::new(3, &DRIVER_MASKS).unwrap();
        let limit = 2_000u64;
        for i in 1..limit {
            table.insert(i << 28);
        }

        let mut errors = 0u64;
        for i in 1..limit {
            if table.find_any((i << 28) | 0x03).is_none() {
                errors += 1;
            }
            if table.find_any((i << 28) | 0x09).is_none() {
                errors += 1;
            }
            if table.find_any((i << 28) | 0x41).is_none() {
                errors += 1;
            }
            if table.find_any((i << 28) | 0x0F).is_some() {
                errors += 1;
            }
        }
        assert_eq!(errors, 0);
    }
}

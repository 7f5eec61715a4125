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

/// The permutation descriptor derived once from a block family and a
/// tolerance `k`.
///
/// Reorders the blocks of a 64-bit fingerprint so that the first `B - k`
/// blocks land in the most-significant positions of the permuted word. Built
/// with per-block signed shifts (`offset`) rather than width-accumulating
/// shifts, so it exposes an exact inverse (see the module's Open Question in
/// `DESIGN.md`).
#[derive(Debug, Clone)]
pub(crate) struct Descriptor {
    /// Original block masks, in caller order.
    masks: Vec<u64>,
    /// Mask of each block as it appears in the *permuted* word.
    reverse_masks: Vec<u64>,
    /// Signed shift moving block `i` from its source position to its
    /// permuted position. Positive is a left shift, negative a right shift.
    offsets: Vec<i32>,
    /// Mask of the first `B - k` blocks in the permuted word.
    search_mask: u64,
}

impl Descriptor {
    /// Validates `masks` against the block-family invariants and builds the
    /// permutation descriptor for tolerance `k`.
    pub(crate) fn new(k: usize, masks: &[u64]) -> Result<Self, Error> {
        let num_blocks = masks.len();
        if num_blocks == 0 {
            return Err(Error::invalid_block_family("block family must not be empty"));
        }
        if k >= num_blocks {
            return Err(Error::invalid_block_family(format!(
                "k ({k}) must be less than the number of blocks ({num_blocks})"
            ))
            .with_context("k", k)
            .with_context("num_blocks", num_blocks));
        }

        let mut union: u64 = 0;
        for (i, &mask) in masks.iter().enumerate() {
            if mask == 0 {
                return Err(Error::invalid_block_family(format!("block {i} is empty")));
            }
            if !is_contiguous_run(mask) {
                return Err(Error::invalid_block_family(format!(
                    "block {i} (0x{mask:016X}) is not a contiguous run of 1-bits"
                )));
            }
            if union & mask != 0 {
                return Err(Error::invalid_block_family(format!(
                    "block {i} overlaps an earlier block"
                )));
            }
            union |= mask;
        }
        if union != u64::MAX {
            return Err(Error::invalid_block_family(
                "blocks do not cover all 64 bits",
            ));
        }

        let widths: Vec<u32> = masks.iter().map(|m| m.count_ones()).collect();
        let rightmost: Vec<u32> = masks.iter().map(|m| m.trailing_zeros()).collect();

        let mut offsets = Vec::with_capacity(num_blocks);
        let mut reverse_masks = Vec::with_capacity(num_blocks);
        let mut placed_width: u32 = 0;
        for i in 0..num_blocks {
            placed_width += widths[i];
            let target_rightmost = 64 - placed_width as i64;
            let offset = (target_rightmost - rightmost[i] as i64) as i32;
            offsets.push(offset);
            reverse_masks.push(shift_by_offset(masks[i], offset));
        }

        let top_width: u32 = widths[..num_blocks - k].iter().sum();
        let search_mask = top_bits_mask(top_width);

        Ok(Self {
            masks: masks.to_vec(),
            reverse_masks,
            offsets,
            search_mask,
        })
    }

    pub(crate) fn search_mask(&self) -> u64 {
        self.search_mask
    }

    /// Moves every block of `h` into its permuted position.
    pub(crate) fn permute(&self, h: u64) -> u64 {
        let mut result = 0u64;
        for i in 0..self.masks.len() {
            let blk = h & self.masks[i];
            result |= shift_by_offset(blk, self.offsets[i]);
        }
        result
    }

    /// The exact inverse of [`Descriptor::permute`].
    pub(crate) fn unpermute(&self, permuted: u64) -> u64 {
        let mut result = 0u64;
        for i in 0..self.masks.len() {
            let blk = permuted & self.reverse_masks[i];
            result |= shift_by_offset(blk, -self.offsets[i]);
        }
        result
    }
}

#[inline]
fn shift_by_offset(v: u64, offset: i32) -> u64 {
    match offset.cmp(&0) {
        std::cmp::Ordering::Equal => v,
        std::cmp::Ordering::Greater => v << (offset as u32),
        std::cmp::Ordering::Less => v >> ((-offset) as u32),
    }
}

/// A mask whose top `w` bits are 1 and the rest are 0.
fn top_bits_mask(w: u32) -> u64 {
    if w == 0 {
        0
    } else if w >= 64 {
        u64::MAX
    } else {
        u64::MAX << (64 - w)
    }
}

/// True if `mask`'s set bits form a single contiguous run (no internal gap).
fn is_contiguous_run(mask: u64) -> bool {
    let trailing = mask.trailing_zeros();
    let shifted = mask >> trailing;
    // A contiguous run shifted down to the origin looks like 0b0...011...1:
    // `shifted + 1` then clears every one of those bits, leaving zero.
    (shifted & shifted.wrapping_add(1)) == 0
}

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

use googletest::assert_that;
use googletest::prelude::*;
use simdex::table::Table;

const DRIVER_MASKS: [u64; 6] = [
    0xFFE0000000000000,
    0x001FFC0000000000,
    0x000003FF80000000,
    0x00000000_7FF00000,
    0x00000000_000FFE00,
    0x00000000_000001FF,
];

/// Reproduces the reference CLI driver: insert `i << 28` for every `i` in
/// `1..limit`, then probe each inserted key with three small perturbations
/// that must still match within `k = 3` bits and one that must not.
#[test]
fn driver_scenario_matches_and_rejects_as_expected() {
    let mut table = Table::new(3, &DRIVER_MASKS).unwrap();
    let limit = 20_000u64;

    for i in 1..limit {
        table.insert(i << 28);
    }
    assert_that!(table.len(), eq((limit - 1) as usize));

    let mut errors = 0u64;
    for i in 1..limit {
        let base = i << 28;
        if table.find_any(base | 0x03).is_none() {
            errors += 1;
        }
        if table.find_any(base | 0x09).is_none() {
            errors += 1;
        }
        if table.find_any(base | 0x41).is_none() {
            errors += 1;
        }
        if table.find_any(base | 0x0F).is_some() {
            errors += 1;
        }
    }

    assert_that!(errors, eq(0));
}

#[test]
fn permute_is_a_bijection_on_random_samples() {
    let table = Table::new(3, &DRIVER_MASKS).unwrap();
    let samples: [u64; 5] = [
        0,
        u64::MAX,
        0x0123_4567_89AB_CDEF,
        0xFFFF_0000_FFFF_0000,
        1u64 << 37,
    ];
    for &h in &samples {
        assert_that!(table.unpermute(table.permute(h)), eq(h));
    }
}

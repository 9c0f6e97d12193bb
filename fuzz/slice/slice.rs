/*
 * // Copyright 2026 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
#![no_main]

use libfuzzer_sys::fuzz_target;
use moxdelta::{DeltaEMethod, DeltaEOptions, delta_e_slice};

fuzz_target!(|data: (Vec<f32>, Vec<f32>, u8, u8)| {
    let method = DeltaEMethod::ALL[data.2 as usize % DeltaEMethod::ALL.len()];
    let mut dst = vec![0f32; data.3 as usize];
    let result = delta_e_slice(
        &data.0,
        &data.1,
        &mut dst,
        method.name(),
        &DeltaEOptions::default(),
    );
    let valid = data.0.len() == data.1.len()
        && data.0.len() % 3 == 0
        && dst.len() == data.0.len() / 3;
    assert_eq!(result.is_ok(), valid);
});

/*
 * // Copyright 2026 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
#![no_main]

use libfuzzer_sys::fuzz_target;
use moxdelta::{DeltaEMethod, DeltaEOptions};

fuzz_target!(|data: ([u64; 3], [u64; 3], bool, f64, f64)| {
    let a = data.0.map(f64::from_bits);
    let b = data.1.map(f64::from_bits);
    let options = DeltaEOptions {
        textiles: Some(data.2),
        l: Some(data.3),
        c: Some(data.4),
    };

    for method in DeltaEMethod::ALL {
        let formula = method.configure(&options);
        let d = formula.compute(a, b);
        if a.iter().chain(b.iter()).all(|v| v.is_finite()) && !d.is_nan() {
            assert!(d >= 0., "{method}: {a:?} {b:?} produced {d}");
        }
        _ = formula.compute(a, a);
    }
});

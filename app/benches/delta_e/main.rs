/*
 * // Copyright 2026 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use moxdelta::{
    Cie2000Options, DeltaEMethod, DeltaEOptions, Lab, delta_e_cie2000, delta_e_nd, delta_e_slice,
};
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_lab(rng: &mut StdRng, count: usize) -> Vec<f64> {
    let mut lab = vec![0f64; count * 3];
    for dst in lab.chunks_exact_mut(3) {
        dst[0] = rng.random_range(0f64..100f64);
        dst[1] = rng.random_range(-128f64..128f64);
        dst[2] = rng.random_range(-128f64..128f64);
    }
    lab
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let a = random_lab(&mut rng, 1920 * 1080);
    let b = random_lab(&mut rng, 1920 * 1080);
    let mut dst = vec![0f64; 1920 * 1080];
    let options = DeltaEOptions::default();

    c.bench_function("moxdelta: CIE 2000 single pair", |bencher| {
        let lab1 = Lab::new(50., 2.6772, -79.7751);
        let lab2 = Lab::new(50., 0., -82.7485);
        bencher.iter(|| {
            black_box(delta_e_cie2000(
                black_box(lab1),
                black_box(lab2),
                Cie2000Options::default(),
            ));
        })
    });

    for method in DeltaEMethod::ALL {
        c.bench_function(&format!("moxdelta: {} slice FHD", method.name()), |bencher| {
            bencher.iter(|| {
                delta_e_slice(&a, &b, &mut dst, method.name(), &options).unwrap();
            })
        });
    }

    let a_f32 = a.iter().map(|&v| v as f32).collect::<Vec<_>>();
    let b_f32 = b.iter().map(|&v| v as f32).collect::<Vec<_>>();
    let mut dst_f32 = vec![0f32; 1920 * 1080];
    c.bench_function("moxdelta: CIE 2000 slice FHD f32", |bencher| {
        bencher.iter(|| {
            delta_e_slice(&a_f32, &b_f32, &mut dst_f32, "CIE 2000", &options).unwrap();
        })
    });

    let nd_a = Array2::from_shape_vec((1920 * 1080, 3), a.clone()).unwrap();
    let reference = ndarray::arr1(&[50f64, 0., 0.]);
    c.bench_function("moxdelta: CIE 2000 nd broadcast FHD", |bencher| {
        bencher.iter(|| {
            black_box(delta_e_nd(&reference, &nd_a, "CIE 2000", &options).unwrap());
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

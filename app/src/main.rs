/*
 * // Copyright (c) Radzivon Bartoshyk 10/2026. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use moxdelta::{DeltaEMethod, DeltaEOptions, Jab, Jmh, UcsSpace, delta_e, delta_e_nd};
use ndarray::{Array2, Axis};
use rand::Rng;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let reference = [100.00000000, 21.57210357, 272.22819350];
    let sample = [100.00000000, 426.67945353, 72.39590835];
    let options = DeltaEOptions::textiles(true);

    for method in DeltaEMethod::ALL {
        let d = delta_e(reference, sample, method.name(), &options).unwrap();
        println!("{:>10}: {d:.8}", method.name());
    }

    let jmh = Jmh::new(41.73109113, 0.10873867, 219.04843202);
    let coefficients = UcsSpace::Cam16Ucs.coefficients();
    let jab = Jab::from_jmh(jmh, coefficients);
    let shifted = Jab::from_jmh(Jmh::new(jmh.j + 1., jmh.m, jmh.h + 5.), coefficients);
    let d = delta_e(jab, shifted, "CAM16-UCS", &DeltaEOptions::default()).unwrap();
    println!("CAM16-UCS JMh shift: {d:.8}");

    let mut rng = rand::rng();
    let swatches = Array2::from_shape_fn((8, 3), |(_, k)| match k {
        0 => rng.random_range(0f64..100f64),
        _ => rng.random_range(-100f64..100f64),
    });
    let pairwise = delta_e_nd(
        &swatches.view().insert_axis(Axis(1)),
        &swatches.view().insert_axis(Axis(0)),
        "CIE 2000",
        &DeltaEOptions::default(),
    )
    .unwrap();
    tracing::info!(
        swatches = swatches.nrows(),
        max = pairwise.iter().cloned().fold(0f64, f64::max),
        "pairwise CIE 2000 differences computed"
    );
    println!("{pairwise:.2}");
}

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
use crate::math::hue_difference_sq;
use crate::{Cie1994Options, Lab};

/// CIE 1994 colour difference ΔE\*94.
///
/// The reference colour is `lab1`, its chroma drives the weighting functions,
/// so the metric is not symmetric.
pub fn delta_e_cie1994(lab1: Lab, lab2: Lab, options: Cie1994Options) -> f64 {
    let (k_l, k_1, k_2) = if options.textiles {
        (2., 0.048, 0.014)
    } else {
        (1., 0.045, 0.015)
    };
    const K_C: f64 = 1.;
    const K_H: f64 = 1.;

    let c1 = lab1.chroma();
    let c2 = lab2.chroma();

    let delta_l = lab1.l - lab2.l;
    let delta_c = c1 - c2;
    let delta_h_sq = hue_difference_sq(lab1.a, lab1.b, lab2.a, lab2.b, delta_c);

    const S_L: f64 = 1.;
    let s_c = 1. + k_1 * c1;
    let s_h = 1. + k_2 * c1;

    let v_l = delta_l / (k_l * S_L);
    let v_c = delta_c / (K_C * s_c);
    let k_s_h = K_H * s_h;

    (v_l * v_l + v_c * v_c + delta_h_sq / (k_s_h * k_s_h)).sqrt()
}

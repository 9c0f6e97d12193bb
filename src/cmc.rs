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
use crate::math::{cos_deg, hue_difference_sq};
use crate::{CmcOptions, Lab};

/// Hue weighting `T` of the CMC formula, `h` in degrees in `[0, 360)`
#[inline]
fn hue_weight(h: f64) -> f64 {
    if (164. ..=345.).contains(&h) {
        0.56 + (0.2 * cos_deg(h + 168.)).abs()
    } else {
        0.36 + (0.4 * cos_deg(h + 35.)).abs()
    }
}

/// CMC l:c colour difference, `lab1` is the reference (standard) colour.
pub fn delta_e_cmc(lab1: Lab, lab2: Lab, options: CmcOptions) -> f64 {
    let c1 = lab1.chroma();
    let c2 = lab2.chroma();

    let s_l = if lab1.l < 16. {
        0.511
    } else {
        0.040975 * lab1.l / (1. + 0.01765 * lab1.l)
    };
    let s_c = 0.0638 * c1 / (1. + 0.0131 * c1) + 0.638;

    let t = hue_weight(lab1.hue());
    let c1_4 = c1 * c1 * c1 * c1;
    let f = (c1_4 / (c1_4 + 1900.)).sqrt();
    let s_h = s_c * (f * t + 1. - f);

    let delta_l = lab1.l - lab2.l;
    let delta_c = c1 - c2;
    let delta_h_sq = hue_difference_sq(lab1.a, lab1.b, lab2.a, lab2.b, delta_c);

    let v_l = delta_l / (options.l * s_l);
    let v_c = delta_c / (options.c * s_c);

    (v_l * v_l + v_c * v_c + delta_h_sq / (s_h * s_h)).sqrt()
}

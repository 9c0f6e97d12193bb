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
//! # CIEDE2000
//!
//! Sharma, Wu and Dalal, "The CIEDE2000 Color-Difference Formula:
//! Implementation Notes, Supplementary Test Data, and Mathematical
//! Observations", Color Research & Application 30(1), 2005.
//!
//! All hue angles are kept in degrees, conversion to radians happens only
//! inside the trigonometric helpers.
use crate::math::{chroma_seventh_ratio, cos_deg, exp, hue_angle, sin_deg};
use crate::{Cie2000Options, Lab};

/// Hue difference Δh′ in degrees, wrapped into `(-180, 180]`.
///
/// Zero when either colour is achromatic, whatever the raw angles are.
#[inline]
pub(crate) fn hue_difference(h1: f64, h2: f64, chroma_product: f64) -> f64 {
    if chroma_product == 0. {
        return 0.;
    }
    let d = h2 - h1;
    if d <= -180. {
        d + 360.
    } else if d > 180. {
        d - 360.
    } else {
        d
    }
}

/// Mean hue H̄′ in degrees.
///
/// When either colour is achromatic the sum of hues is returned unchanged.
/// Hues straddling 0°/360° are averaged on the short arc.
#[inline]
pub(crate) fn mean_hue(h1: f64, h2: f64, chroma_product: f64) -> f64 {
    let sum = h1 + h2;
    if chroma_product == 0. {
        sum
    } else if (h1 - h2).abs() <= 180. {
        sum * 0.5
    } else if sum < 360. {
        (sum + 360.) * 0.5
    } else {
        (sum - 360.) * 0.5
    }
}

/// CIE 2000 colour difference ΔE00.
///
/// `k_C = k_H = 1`, textiles application uses `k_L = 2`.
/// Caller weights `l` and `c` multiply the lightness and chroma denominators.
pub fn delta_e_cie2000(lab1: Lab, lab2: Lab, options: Cie2000Options) -> f64 {
    let k_l = if options.textiles { 2. } else { 1. };
    const K_C: f64 = 1.;
    const K_H: f64 = 1.;

    let c_bar = (lab1.chroma() + lab2.chroma()) * 0.5;
    let g = 0.5 * (1. - chroma_seventh_ratio(c_bar));

    let a1_prime = (1. + g) * lab1.a;
    let a2_prime = (1. + g) * lab2.a;

    let c1_prime = a1_prime.hypot(lab1.b);
    let c2_prime = a2_prime.hypot(lab2.b);

    let h1_prime = hue_angle(a1_prime, lab1.b);
    let h2_prime = hue_angle(a2_prime, lab2.b);

    let delta_l_prime = lab2.l - lab1.l;
    let delta_c_prime = c2_prime - c1_prime;

    let chroma_product = c1_prime * c2_prime;
    let delta_h_prime = hue_difference(h1_prime, h2_prime, chroma_product);
    let delta_big_h_prime = 2. * chroma_product.sqrt() * sin_deg(delta_h_prime * 0.5);

    let l_bar_prime = (lab1.l + lab2.l) * 0.5;
    let c_bar_prime = (c1_prime + c2_prime) * 0.5;
    let h_bar_prime = mean_hue(h1_prime, h2_prime, chroma_product);

    let t = 1. - 0.17 * cos_deg(h_bar_prime - 30.)
        + 0.24 * cos_deg(2. * h_bar_prime)
        + 0.32 * cos_deg(3. * h_bar_prime + 6.)
        - 0.20 * cos_deg(4. * h_bar_prime - 63.);

    let l_50_sq = (l_bar_prime - 50.) * (l_bar_prime - 50.);
    let s_l = 1. + 0.015 * l_50_sq / (20. + l_50_sq).sqrt();
    let s_c = 1. + 0.045 * c_bar_prime;
    let s_h = 1. + 0.015 * c_bar_prime * t;

    let h_275 = (h_bar_prime - 275.) / 25.;
    let delta_theta = 30. * exp(-(h_275 * h_275));
    let r_t = -sin_deg(2. * delta_theta) * 2. * chroma_seventh_ratio(c_bar_prime);

    let v_l = delta_l_prime / (k_l * options.l * s_l);
    let v_c = delta_c_prime / (K_C * options.c * s_c);
    let v_h = delta_big_h_prime / (K_H * s_h);

    (v_l * v_l + v_c * v_c + v_h * v_h + r_t * v_c * v_h).sqrt()
}

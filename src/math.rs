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
use pxfm::{f_atan2, f_cos, f_exp, f_expm1, f_log1p, f_sin};

/// Cosine of an angle given in degrees
#[inline(always)]
pub(crate) fn cos_deg(degrees: f64) -> f64 {
    f_cos(degrees.to_radians())
}

/// Sine of an angle given in degrees
#[inline(always)]
pub(crate) fn sin_deg(degrees: f64) -> f64 {
    f_sin(degrees.to_radians())
}

#[inline(always)]
pub(crate) fn exp(x: f64) -> f64 {
    f_exp(x)
}

/// `ln(1 + x)`
#[inline(always)]
pub(crate) fn log1p(x: f64) -> f64 {
    f_log1p(x)
}

/// `e^x - 1`
#[inline(always)]
pub(crate) fn expm1(x: f64) -> f64 {
    f_expm1(x)
}

/// Hue angle of `(a, b)` in degrees, normalized to `[0, 360)`.
///
/// Achromatic points, where both components are zero, have hue 0.
#[inline]
pub(crate) fn hue_angle(a: f64, b: f64) -> f64 {
    if a == 0. && b == 0. {
        return 0.;
    }
    let h = f_atan2(b, a).to_degrees();
    let h = if h < 0. { h + 360. } else { h };
    // -tiny + 360 rounds up to exactly 360
    if h >= 360. { h - 360. } else { h }
}

/// Squared metric hue difference `Δa² + Δb² - ΔC²`.
///
/// Cancellation can push the expression slightly below zero, it is clamped.
/// NaN is passed through.
#[inline]
pub(crate) fn hue_difference_sq(a1: f64, b1: f64, a2: f64, b2: f64, delta_c: f64) -> f64 {
    let da = a1 - a2;
    let db = b1 - b2;
    let v = da * da + db * db - delta_c * delta_c;
    if v < 0. { 0. } else { v }
}

/// `sqrt(x^7 / (x^7 + 25^7))`, shared by the CIE 2000 `G` and `R_C` terms
#[inline]
pub(crate) fn chroma_seventh_ratio(c: f64) -> f64 {
    const POW25_7: f64 = 6103515625.;
    let c7 = c.powi(7);
    (c7 / (c7 + POW25_7)).sqrt()
}

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
use crate::{Jab, UcsCoefficients, UcsSpace};

/// Colour difference ΔE′ in one of the Luo et al. (2006) uniform colour spaces.
///
/// Inputs must already be J′a′b′ coordinates of the space `coefficients`
/// belongs to. Only `K_L` enters the distance, `c1` and `c2` are consumed
/// when the coordinates are produced, see [Jab::from_jmh].
pub fn delta_e_luo2006(jab1: Jab, jab2: Jab, coefficients: UcsCoefficients) -> f64 {
    let m1 = jab1.colorfulness();
    let m2 = jab2.colorfulness();

    let delta_j = (jab1.j - jab2.j) / coefficients.k_l;
    let delta_m = m1 - m2;
    let delta_h_sq = hue_difference_sq(jab1.a, jab1.b, jab2.a, jab2.b, delta_m);

    (delta_j * delta_j + delta_m * delta_m + delta_h_sq).sqrt()
}

#[inline]
pub(crate) fn delta_e_ucs(jab1: Jab, jab2: Jab, space: UcsSpace) -> f64 {
    delta_e_luo2006(jab1, jab2, space.coefficients())
}

/// ΔE′ in *CAM02-LCD*, large colour differences
pub fn delta_e_cam02_lcd(jab1: Jab, jab2: Jab) -> f64 {
    delta_e_ucs(jab1, jab2, UcsSpace::Cam02Lcd)
}

/// ΔE′ in *CAM02-SCD*, small colour differences
pub fn delta_e_cam02_scd(jab1: Jab, jab2: Jab) -> f64 {
    delta_e_ucs(jab1, jab2, UcsSpace::Cam02Scd)
}

/// ΔE′ in *CAM02-UCS*
pub fn delta_e_cam02_ucs(jab1: Jab, jab2: Jab) -> f64 {
    delta_e_ucs(jab1, jab2, UcsSpace::Cam02Ucs)
}

/// ΔE′ in *CAM16-LCD*, large colour differences
pub fn delta_e_cam16_lcd(jab1: Jab, jab2: Jab) -> f64 {
    delta_e_ucs(jab1, jab2, UcsSpace::Cam16Lcd)
}

/// ΔE′ in *CAM16-SCD*, small colour differences
pub fn delta_e_cam16_scd(jab1: Jab, jab2: Jab) -> f64 {
    delta_e_ucs(jab1, jab2, UcsSpace::Cam16Scd)
}

/// ΔE′ in *CAM16-UCS*
pub fn delta_e_cam16_ucs(jab1: Jab, jab2: Jab) -> f64 {
    delta_e_ucs(jab1, jab2, UcsSpace::Cam16Ucs)
}

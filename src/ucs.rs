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
//! # Uniform colour spaces derived from CAM02 and CAM16
//!
//! Luo, Cui and Li (2006) define three uniform spaces on top of the CIECAM02
//! correlates, each fitted to a different set of colour difference data:
//! large differences (LCD), small differences (SCD) and a compromise (UCS).
//! Li et al. (2017) reuse the same constants for CAM16.
use crate::math::{cos_deg, expm1, hue_angle, log1p, sin_deg};

/// Coefficients of one of the Luo et al. (2006) uniform colour spaces
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UcsCoefficients {
    /// Lightness weight used by the colour difference
    pub k_l: f64,
    /// Lightness compression
    pub c1: f64,
    /// Colourfulness compression
    pub c2: f64,
}

impl UcsCoefficients {
    /// Large colour differences
    pub const LCD: UcsCoefficients = UcsCoefficients::new(0.77, 0.007, 0.0053);
    /// Small colour differences
    pub const SCD: UcsCoefficients = UcsCoefficients::new(1.24, 0.007, 0.0363);
    /// Uniform colour space, fitted to both data sets
    pub const UCS: UcsCoefficients = UcsCoefficients::new(1.00, 0.007, 0.0228);

    #[inline]
    pub const fn new(k_l: f64, c1: f64, c2: f64) -> UcsCoefficients {
        UcsCoefficients { k_l, c1, c2 }
    }
}

/// Named uniform colour space.
///
/// CAM16 spaces use the CAM02 constants, they differ only by the appearance
/// model that produced the JMh correlates.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UcsSpace {
    Cam02Lcd,
    Cam02Scd,
    Cam02Ucs,
    Cam16Lcd,
    Cam16Scd,
    Cam16Ucs,
}

impl UcsSpace {
    #[inline]
    pub const fn coefficients(self) -> UcsCoefficients {
        match self {
            UcsSpace::Cam02Lcd | UcsSpace::Cam16Lcd => UcsCoefficients::LCD,
            UcsSpace::Cam02Scd | UcsSpace::Cam16Scd => UcsCoefficients::SCD,
            UcsSpace::Cam02Ucs | UcsSpace::Cam16Ucs => UcsCoefficients::UCS,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            UcsSpace::Cam02Lcd => "CAM02-LCD",
            UcsSpace::Cam02Scd => "CAM02-SCD",
            UcsSpace::Cam02Ucs => "CAM02-UCS",
            UcsSpace::Cam16Lcd => "CAM16-LCD",
            UcsSpace::Cam16Scd => "CAM16-SCD",
            UcsSpace::Cam16Ucs => "CAM16-UCS",
        }
    }
}

/// Lightness, colourfulness and hue correlates of CAM02 or CAM16
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Jmh {
    /// Lightness J
    pub j: f64,
    /// Colourfulness M
    pub m: f64,
    /// Hue angle h in degrees
    pub h: f64,
}

impl Jmh {
    #[inline]
    pub const fn new(j: f64, m: f64, h: f64) -> Jmh {
        Jmh { j, m, h }
    }
}

/// Coordinates J′a′b′ in one of the uniform colour spaces
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Jab {
    /// Lightness J′
    pub j: f64,
    /// Red-green component a′
    pub a: f64,
    /// Yellow-blue component b′
    pub b: f64,
}

impl Jab {
    #[inline]
    pub const fn new(j: f64, a: f64, b: f64) -> Jab {
        Jab { j, a, b }
    }

    /// Colourfulness M′ of the point
    #[inline]
    pub fn colorfulness(&self) -> f64 {
        self.a.hypot(self.b)
    }

    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.j, self.a, self.b]
    }

    /// Scales appearance correlates into the uniform space
    pub fn from_jmh(jmh: Jmh, coefficients: UcsCoefficients) -> Jab {
        let UcsCoefficients { c1, c2, .. } = coefficients;
        let j = (1. + 100. * c1) * jmh.j / (1. + c1 * jmh.j);
        let m = log1p(c2 * jmh.m) / c2;
        Jab::new(j, m * cos_deg(jmh.h), m * sin_deg(jmh.h))
    }

    /// Inverse of [Jab::from_jmh]
    pub fn to_jmh(&self, coefficients: UcsCoefficients) -> Jmh {
        let UcsCoefficients { c1, c2, .. } = coefficients;
        let j = -self.j / (c1 * self.j - 1. - 100. * c1);
        let m = expm1(c2 * self.colorfulness()) / c2;
        Jmh::new(j, m, hue_angle(self.a, self.b))
    }
}

impl From<[f64; 3]> for Jab {
    #[inline]
    fn from(value: [f64; 3]) -> Self {
        Jab::new(value[0], value[1], value[2])
    }
}

impl From<Jab> for [f64; 3] {
    #[inline]
    fn from(value: Jab) -> Self {
        value.to_array()
    }
}

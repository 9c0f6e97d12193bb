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
/// Parametric factors of the CIE 1994 colour difference
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Cie1994Options {
    /// Textiles weights `k_L = 2, k_1 = 0.048, k_2 = 0.014` instead of the
    /// graphic arts `k_L = 1, k_1 = 0.045, k_2 = 0.015`.
    pub textiles: bool,
}

/// Parametric factors of the CIE 2000 colour difference
#[derive(Debug, Copy, Clone, PartialOrd, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Cie2000Options {
    /// Uses `k_L = 2` instead of `k_L = 1`.
    /// Unlike CIE 1994 no other constant changes.
    pub textiles: bool,
    /// Lightness weight, multiplies the lightness denominator
    pub l: f64,
    /// Chroma weight, multiplies the chroma denominator
    pub c: f64,
}

impl Default for Cie2000Options {
    fn default() -> Self {
        Self {
            textiles: false,
            l: 1.,
            c: 1.,
        }
    }
}

/// Weights of the CMC l:c colour difference.
///
/// Defaults to the 2:1 acceptability ratio,
/// 1:1 is commonly used for perceptibility.
#[derive(Debug, Copy, Clone, PartialOrd, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CmcOptions {
    /// Lightness weight
    pub l: f64,
    /// Chroma weight
    pub c: f64,
}

impl Default for CmcOptions {
    fn default() -> Self {
        Self { l: 2., c: 1. }
    }
}

/// Options accepted by the method dispatcher.
///
/// Every field is optional, unset fields keep the selected method's default.
/// Fields the selected method does not understand are ignored, so a single
/// value can be reused across methods:
///
/// | field      | CIE 1994 | CIE 2000 | CMC |
/// |------------|----------|----------|-----|
/// | `textiles` | yes      | yes      |     |
/// | `l`        |          | yes      | yes |
/// | `c`        |          | yes      | yes |
///
/// `l` and `c` carry different meanings and defaults for CIE 2000 and CMC.
#[derive(Debug, Copy, Clone, PartialOrd, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DeltaEOptions {
    pub textiles: Option<bool>,
    pub l: Option<f64>,
    pub c: Option<f64>,
}

impl DeltaEOptions {
    pub const fn textiles(textiles: bool) -> DeltaEOptions {
        DeltaEOptions {
            textiles: Some(textiles),
            l: None,
            c: None,
        }
    }

    pub const fn weights(l: f64, c: f64) -> DeltaEOptions {
        DeltaEOptions {
            textiles: None,
            l: Some(l),
            c: Some(c),
        }
    }

    pub(crate) fn cie1994(&self) -> Cie1994Options {
        let mut options = Cie1994Options::default();
        if let Some(textiles) = self.textiles {
            options.textiles = textiles;
        }
        options
    }

    pub(crate) fn cie2000(&self) -> Cie2000Options {
        let mut options = Cie2000Options::default();
        if let Some(textiles) = self.textiles {
            options.textiles = textiles;
        }
        if let Some(l) = self.l {
            options.l = l;
        }
        if let Some(c) = self.c {
            options.c = c;
        }
        options
    }

    pub(crate) fn cmc(&self) -> CmcOptions {
        let mut options = CmcOptions::default();
        if let Some(l) = self.l {
            options.l = l;
        }
        if let Some(c) = self.c {
            options.c = c;
        }
        options
    }

    /// Names of set fields, in declaration order
    pub(crate) fn set_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::with_capacity(3);
        if self.textiles.is_some() {
            fields.push("textiles");
        }
        if self.l.is_some() {
            fields.push("l");
        }
        if self.c.is_some() {
            fields.push("c");
        }
        fields
    }
}

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
#![allow(clippy::manual_clamp, clippy::excessive_precision)]
#![deny(unreachable_pub)]
#![forbid(unsafe_code)]
mod cie1976;
mod cie1994;
mod cie2000;
mod cmc;
mod difference;
mod err;
mod lab;
mod luo2006;
/// Degree based trigonometry and the hue helpers shared by the formulas
mod math;
mod method;
mod options;
mod ucs;

pub use cie1976::delta_e_cie1976;
pub use cie1994::delta_e_cie1994;
pub use cie2000::delta_e_cie2000;
pub use cmc::delta_e_cmc;
pub use difference::{DeltaEFormula, delta_e, delta_e_nd, delta_e_slice};
pub use err::DeltaEError;
pub use lab::Lab;
pub use luo2006::{
    delta_e_cam02_lcd, delta_e_cam02_scd, delta_e_cam02_ucs, delta_e_cam16_lcd,
    delta_e_cam16_scd, delta_e_cam16_ucs, delta_e_luo2006,
};
pub use method::DeltaEMethod;
pub use options::{Cie1994Options, Cie2000Options, CmcOptions, DeltaEOptions};
pub use ucs::{Jab, Jmh, UcsCoefficients, UcsSpace};

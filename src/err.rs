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
use std::error::Error;
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub enum DeltaEError {
    /// Method name did not match any registered method or alias
    UnknownMethod(String),
    /// Operand or destination lanes have different lengths
    LaneSizeMismatch,
    /// Lane length is not a multiple of the triplet size
    LaneMultipleOfChannels,
    /// Last axis of an array operand is not a triplet, holds the axis length
    InvalidTripletAxis(usize),
    /// Array operands can't be broadcast to a common shape
    IncompatibleShapes(Vec<usize>, Vec<usize>),
}

impl Display for DeltaEError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeltaEError::UnknownMethod(name) => {
                f.write_fmt(format_args!("Unknown colour difference method '{name}'"))
            }
            DeltaEError::LaneSizeMismatch => f.write_str("Lanes length must match"),
            DeltaEError::LaneMultipleOfChannels => {
                f.write_str("Lane length must be multiple of 3")
            }
            DeltaEError::InvalidTripletAxis(len) => f.write_fmt(format_args!(
                "Last axis must hold a colour triplet, got length {len}"
            )),
            DeltaEError::IncompatibleShapes(a, b) => f.write_fmt(format_args!(
                "Shapes {a:?} and {b:?} can't be broadcast together"
            )),
        }
    }
}

impl Error for DeltaEError {}

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
use crate::err::DeltaEError;
use crate::UcsSpace;
use std::fmt::Display;
use std::str::FromStr;

/// Colour difference methods known to the dispatcher
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Default)]
pub enum DeltaEMethod {
    Cie1976,
    Cie1994,
    #[default]
    Cie2000,
    Cmc,
    Cam02Lcd,
    Cam02Scd,
    Cam02Ucs,
    Cam16Lcd,
    Cam16Scd,
    Cam16Ucs,
}

/// Canonical names followed by aliases. Lookups ignore ASCII case.
static METHOD_REGISTRY: [(&str, DeltaEMethod); 13] = [
    ("CIE 1976", DeltaEMethod::Cie1976),
    ("CIE 1994", DeltaEMethod::Cie1994),
    ("CIE 2000", DeltaEMethod::Cie2000),
    ("CMC", DeltaEMethod::Cmc),
    ("CAM02-LCD", DeltaEMethod::Cam02Lcd),
    ("CAM02-SCD", DeltaEMethod::Cam02Scd),
    ("CAM02-UCS", DeltaEMethod::Cam02Ucs),
    ("CAM16-LCD", DeltaEMethod::Cam16Lcd),
    ("CAM16-SCD", DeltaEMethod::Cam16Scd),
    ("CAM16-UCS", DeltaEMethod::Cam16Ucs),
    ("cie1976", DeltaEMethod::Cie1976),
    ("cie1994", DeltaEMethod::Cie1994),
    ("cie2000", DeltaEMethod::Cie2000),
];

impl DeltaEMethod {
    pub const ALL: [DeltaEMethod; 10] = [
        DeltaEMethod::Cie1976,
        DeltaEMethod::Cie1994,
        DeltaEMethod::Cie2000,
        DeltaEMethod::Cmc,
        DeltaEMethod::Cam02Lcd,
        DeltaEMethod::Cam02Scd,
        DeltaEMethod::Cam02Ucs,
        DeltaEMethod::Cam16Lcd,
        DeltaEMethod::Cam16Scd,
        DeltaEMethod::Cam16Ucs,
    ];

    /// Resolves a canonical name or alias, ignoring case
    pub fn from_name(name: &str) -> Result<DeltaEMethod, DeltaEError> {
        let method = METHOD_REGISTRY
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|&(_, method)| method)
            .ok_or_else(|| DeltaEError::UnknownMethod(name.to_string()))?;
        tracing::trace!(name, method = method.name(), "resolved colour difference method");
        Ok(method)
    }

    /// Canonical registry name
    pub const fn name(self) -> &'static str {
        match self {
            DeltaEMethod::Cie1976 => "CIE 1976",
            DeltaEMethod::Cie1994 => "CIE 1994",
            DeltaEMethod::Cie2000 => "CIE 2000",
            DeltaEMethod::Cmc => "CMC",
            DeltaEMethod::Cam02Lcd => UcsSpace::Cam02Lcd.name(),
            DeltaEMethod::Cam02Scd => UcsSpace::Cam02Scd.name(),
            DeltaEMethod::Cam02Ucs => UcsSpace::Cam02Ucs.name(),
            DeltaEMethod::Cam16Lcd => UcsSpace::Cam16Lcd.name(),
            DeltaEMethod::Cam16Scd => UcsSpace::Cam16Scd.name(),
            DeltaEMethod::Cam16Ucs => UcsSpace::Cam16Ucs.name(),
        }
    }

    /// Uniform colour space the method operates in, `None` for L\*a\*b\* methods
    pub const fn ucs_space(self) -> Option<UcsSpace> {
        match self {
            DeltaEMethod::Cie1976
            | DeltaEMethod::Cie1994
            | DeltaEMethod::Cie2000
            | DeltaEMethod::Cmc => None,
            DeltaEMethod::Cam02Lcd => Some(UcsSpace::Cam02Lcd),
            DeltaEMethod::Cam02Scd => Some(UcsSpace::Cam02Scd),
            DeltaEMethod::Cam02Ucs => Some(UcsSpace::Cam02Ucs),
            DeltaEMethod::Cam16Lcd => Some(UcsSpace::Cam16Lcd),
            DeltaEMethod::Cam16Scd => Some(UcsSpace::Cam16Scd),
            DeltaEMethod::Cam16Ucs => Some(UcsSpace::Cam16Ucs),
        }
    }

    /// Option fields the method reads from [crate::DeltaEOptions]
    pub const fn accepted_options(self) -> &'static [&'static str] {
        match self {
            DeltaEMethod::Cie1994 => &["textiles"],
            DeltaEMethod::Cie2000 => &["textiles", "l", "c"],
            DeltaEMethod::Cmc => &["l", "c"],
            _ => &[],
        }
    }
}

impl FromStr for DeltaEMethod {
    type Err = DeltaEError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DeltaEMethod::from_name(s)
    }
}

impl TryFrom<&str> for DeltaEMethod {
    type Error = DeltaEError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        DeltaEMethod::from_name(value)
    }
}

impl Display for DeltaEMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for DeltaEMethod {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for DeltaEMethod {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name =
            <std::borrow::Cow<'de, str> as serde::Deserialize<'de>>::deserialize(deserializer)?;
        DeltaEMethod::from_name(&name).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_names_round_trip() {
        for method in DeltaEMethod::ALL {
            assert_eq!(DeltaEMethod::from_name(method.name()), Ok(method));
            assert_eq!(method.to_string(), method.name());
        }
    }

    #[test]
    fn test_case_insensitive_lookup() {
        assert_eq!("cie 2000".parse::<DeltaEMethod>(), Ok(DeltaEMethod::Cie2000));
        assert_eq!("cmc".parse::<DeltaEMethod>(), Ok(DeltaEMethod::Cmc));
        assert_eq!(
            "cam16-ucs".parse::<DeltaEMethod>(),
            Ok(DeltaEMethod::Cam16Ucs)
        );
        assert_eq!(
            DeltaEMethod::try_from("Cam02-Scd"),
            Ok(DeltaEMethod::Cam02Scd)
        );
    }

    #[test]
    fn test_aliases() {
        assert_eq!(DeltaEMethod::from_name("cie1976"), Ok(DeltaEMethod::Cie1976));
        assert_eq!(DeltaEMethod::from_name("CIE1994"), Ok(DeltaEMethod::Cie1994));
        assert_eq!(DeltaEMethod::from_name("cie2000"), Ok(DeltaEMethod::Cie2000));
        // No short aliases outside of the CIE family
        assert!(DeltaEMethod::from_name("cam02ucs").is_err());
    }

    #[test]
    fn test_unknown_method() {
        assert_eq!(
            DeltaEMethod::from_name("CIE 2001"),
            Err(DeltaEError::UnknownMethod("CIE 2001".to_string()))
        );
        assert!(DeltaEMethod::from_name("").is_err());
        assert!(DeltaEMethod::from_name(" CIE 2000").is_err());
    }

    #[test]
    fn test_default_is_cie2000() {
        assert_eq!(DeltaEMethod::default(), DeltaEMethod::Cie2000);
    }

    #[test]
    fn test_ucs_space() {
        assert_eq!(DeltaEMethod::Cmc.ucs_space(), None);
        assert_eq!(
            DeltaEMethod::Cam16Lcd.ucs_space(),
            Some(UcsSpace::Cam16Lcd)
        );
        for method in DeltaEMethod::ALL {
            if let Some(space) = method.ucs_space() {
                assert_eq!(space.name(), method.name());
            }
        }
    }
}

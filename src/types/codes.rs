//! Code tables of the EPC QR Code standard: version, character set and identification code.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::ParseCodeError;

/// Version of the EPC QR Code record.
///
/// ```
/// use epc_qr::types::Version;
///
/// assert_eq!(Version::V1.as_str(), "001");
/// assert_eq!("002".parse::<Version>().unwrap(), Version::V2);
/// assert_eq!(serde_json::to_value(Version::V1).unwrap(), serde_json::json!("001"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Version {
    /// Version 001. The BIC of the beneficiary bank is mandatory.
    #[serde(rename = "001")]
    V1,
    /// Version 002. The BIC is optional inside the EEA.
    #[serde(rename = "002")]
    V2,
}

impl Version {
    pub fn as_str(&self) -> &'static str {
        match self {
            Version::V1 => "001",
            Version::V2 => "002",
        }
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Version {
    type Err = ParseCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "001" => Ok(Version::V1),
            "002" => Ok(Version::V2),
            _ => Err(ParseCodeError {
                kind: "version",
                value: s.to_string(),
            }),
        }
    }
}

/// Character set the payload is encoded with. Serialized as its numeric code `1..=8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterSet {
    /// UTF-8
    Utf8,
    /// Latin-1, Western European
    Iso8859_1,
    /// Latin-2, Central European
    Iso8859_2,
    /// Latin-4, Northern European
    Iso8859_4,
    /// Cyrillic
    Iso8859_5,
    /// Greek
    Iso8859_7,
    /// Latin-6, Nordic
    Iso8859_10,
    /// Latin-9, Western European
    Iso8859_15,
}

impl CharacterSet {
    const ALL: [CharacterSet; 8] = [
        CharacterSet::Utf8,
        CharacterSet::Iso8859_1,
        CharacterSet::Iso8859_2,
        CharacterSet::Iso8859_4,
        CharacterSet::Iso8859_5,
        CharacterSet::Iso8859_7,
        CharacterSet::Iso8859_10,
        CharacterSet::Iso8859_15,
    ];

    /// The numeric code written to the payload.
    pub fn code(&self) -> u8 {
        match self {
            CharacterSet::Utf8 => 1,
            CharacterSet::Iso8859_1 => 2,
            CharacterSet::Iso8859_2 => 3,
            CharacterSet::Iso8859_4 => 4,
            CharacterSet::Iso8859_5 => 5,
            CharacterSet::Iso8859_7 => 6,
            CharacterSet::Iso8859_10 => 7,
            CharacterSet::Iso8859_15 => 8,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|cs| cs.code() == code)
    }
}

impl Display for CharacterSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for CharacterSet {
    type Err = ParseCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u8>()
            .ok()
            .and_then(CharacterSet::from_code)
            .ok_or_else(|| ParseCodeError {
                kind: "character set",
                value: s.to_string(),
            })
    }
}

impl Serialize for CharacterSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for CharacterSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let v = u8::deserialize(deserializer)?;
        CharacterSet::from_code(v).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "Unsupported character set {}; expected 1 to 8",
                v
            ))
        })
    }
}

/// Kind of SEPA transfer the payload requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdentificationCode {
    /// SEPA Credit Transfer
    #[serde(rename = "SCT")]
    Sct,
    /// SEPA Instant Credit Transfer
    #[serde(rename = "INST")]
    Inst,
}

impl IdentificationCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdentificationCode::Sct => "SCT",
            IdentificationCode::Inst => "INST",
        }
    }
}

impl Display for IdentificationCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdentificationCode {
    type Err = ParseCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SCT" => Ok(IdentificationCode::Sct),
            "INST" => Ok(IdentificationCode::Inst),
            _ => Err(ParseCodeError {
                kind: "identification code",
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn character_set_codes() {
        for code in 1..=8u8 {
            let cs = CharacterSet::from_code(code).unwrap();
            assert_eq!(cs.code(), code);
            assert_eq!(cs.to_string(), code.to_string());
        }
        assert_eq!(CharacterSet::from_code(0), None);
        assert_eq!(CharacterSet::from_code(9), None);
        assert!("9".parse::<CharacterSet>().is_err());
        assert!("utf8".parse::<CharacterSet>().is_err());
    }

    #[test]
    fn character_set_serde() {
        assert_eq!(
            serde_json::to_value(CharacterSet::Iso8859_15).unwrap(),
            json!(8)
        );
        let cs: CharacterSet = serde_json::from_value(json!(2)).unwrap();
        assert_eq!(cs, CharacterSet::Iso8859_1);
        assert!(serde_json::from_value::<CharacterSet>(json!(9)).is_err());
    }

    #[test]
    fn identification_code_round_trip() {
        assert_eq!("INST".parse::<IdentificationCode>().unwrap(), IdentificationCode::Inst);
        assert_eq!(IdentificationCode::Sct.to_string(), "SCT");
        assert_eq!(
            serde_json::to_value(IdentificationCode::Inst).unwrap(),
            json!("INST")
        );

        let err = "sct".parse::<IdentificationCode>().unwrap_err();
        assert_eq!(err.kind, "identification code");
        assert_eq!(err.value, "sct");
    }

    #[test]
    fn unknown_version_is_rejected() {
        assert!("003".parse::<Version>().is_err());
        assert!(serde_json::from_value::<Version>(json!("1")).is_err());
    }
}

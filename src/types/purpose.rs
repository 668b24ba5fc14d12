//! [`Purpose`] carries the optional purpose code of a transfer.

use std::{
    convert::Infallible,
    fmt::Display,
    hash::{Hash, Hasher},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

/// Purpose code of a transfer (four letters, ISO 20022 `ExternalPurpose1Code`).
///
/// The common codes have their own variants; anything else is kept verbatim in
/// [`Purpose::Other`]. Parsing never fails. Purposes compare by their code,
/// so `Other("GDDS")` equals [`Purpose::Gdds`].
///
/// ```
/// use epc_qr::types::Purpose;
///
/// assert_eq!("GDDS".parse::<Purpose>().unwrap(), Purpose::Gdds);
/// assert_eq!(Purpose::from("CHAR"), Purpose::Other("CHAR".to_string()));
/// assert_eq!(Purpose::Other("CHAR".to_string()).as_str(), "CHAR");
/// assert_eq!(Purpose::Other("GDDS".to_string()), Purpose::Gdds);
/// ```
#[derive(Debug, Clone)]
pub enum Purpose {
    /// Beneficiary payment
    Bene,
    /// Departmental payment
    Dept,
    /// Purchase or sale of goods
    Gdds,
    /// Mobile top-up
    Mtup,
    /// Pension payment
    Pens,
    /// Salary payment
    Sala,
    /// Trade payment
    Trad,
    /// A code without a variant of its own. Prefer [`Purpose::from`], which
    /// maps known codes to their variant.
    Other(String),
}

impl Purpose {
    pub fn as_str(&self) -> &str {
        match self {
            Purpose::Bene => "BENE",
            Purpose::Dept => "DEPT",
            Purpose::Gdds => "GDDS",
            Purpose::Mtup => "MTUP",
            Purpose::Pens => "PENS",
            Purpose::Sala => "SALA",
            Purpose::Trad => "TRAD",
            Purpose::Other(code) => code,
        }
    }
}

impl PartialEq for Purpose {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Purpose {}

impl Hash for Purpose {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl From<&str> for Purpose {
    fn from(value: &str) -> Self {
        match value {
            "BENE" => Purpose::Bene,
            "DEPT" => Purpose::Dept,
            "GDDS" => Purpose::Gdds,
            "MTUP" => Purpose::Mtup,
            "PENS" => Purpose::Pens,
            "SALA" => Purpose::Sala,
            "TRAD" => Purpose::Trad,
            other => Purpose::Other(other.to_string()),
        }
    }
}

impl From<String> for Purpose {
    fn from(value: String) -> Self {
        Purpose::from(value.as_str())
    }
}

impl FromStr for Purpose {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Purpose::from(s))
    }
}

impl Display for Purpose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Purpose {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Purpose {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Purpose::from(s))
    }
}

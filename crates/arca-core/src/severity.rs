//! Risk severity as reported by the analysis service.
//!
//! The service documents `HIGH`, `MEDIUM` and `LOW`, but the value is free
//! text on the wire. Anything else is kept verbatim in [`Severity::Other`] so
//! it survives classification and export unchanged.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Open severity enum. Parsing never fails.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Severity {
    High,
    Medium,
    Low,
    /// Any value outside the documented three, kept exactly as received.
    Other(String),
}

impl Severity {
    /// Parse a wire value. Matching is exact (`"high"` is `Other`), mirroring
    /// how the service emits the field.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "HIGH" => Severity::High,
            "MEDIUM" => Severity::Medium,
            "LOW" => Severity::Low,
            other => Severity::Other(other.to_string()),
        }
    }

    /// The wire representation.
    pub fn as_str(&self) -> &str {
        match self {
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
            Severity::Low => "LOW",
            Severity::Other(raw) => raw,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Severity::Other(_))
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Severity {
    fn from(raw: &str) -> Self {
        Severity::parse(raw)
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Severity::parse(&raw))
    }
}

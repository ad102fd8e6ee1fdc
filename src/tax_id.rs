use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::checksum::{Checksum, CifChecksum, DniChecksum, NieChecksum};
use crate::classification::{classify, TaxIdKind};
use crate::normalization::normalize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseTaxIdError {
    #[error("candidate does not match any Spanish tax identifier shape")]
    UnrecognizedShape,

    #[error("control character does not match the {0} checksum")]
    ChecksumMismatch(TaxIdKind),
}

/// A validated Spanish tax identifier, held in normalized form.
///
/// Construction goes through `FromStr`, so `"b-63520670".parse::<TaxId>()`
/// normalizes, classifies and checksums in one step and only hands back a
/// value when all three passed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaxId {
    normalized: String,
    kind: TaxIdKind,
}

impl TaxId {
    /// The normalized identifier: 9 characters, uppercase, zero-padded.
    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    pub fn kind(&self) -> TaxIdKind {
        self.kind
    }
}

impl FromStr for TaxId {
    type Err = ParseTaxIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize(s);
        let kind = classify(&normalized);
        let checksum: &dyn Checksum = match kind {
            TaxIdKind::Dni => &DniChecksum,
            TaxIdKind::Nie => &NieChecksum,
            TaxIdKind::Cif => &CifChecksum,
            TaxIdKind::Unrecognized => return Err(ParseTaxIdError::UnrecognizedShape),
        };
        if !checksum.is_valid(&normalized) {
            return Err(ParseTaxIdError::ChecksumMismatch(kind));
        }
        Ok(TaxId { normalized, kind })
    }
}

impl fmt::Display for TaxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized)
    }
}

impl Serialize for TaxId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.normalized)
    }
}

impl<'de> Deserialize<'de> for TaxId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref DNI_SHAPE: regex::Regex = regex::Regex::new(r"^[0-9]{8}[A-Z]$").unwrap();
    static ref NIE_SHAPE: regex::Regex = regex::Regex::new(r"^[XYZ][0-9]{7}[A-Z]$").unwrap();
    // I, O and T are never used as CIF organization class letters. The
    // control position admits either a digit or a letter from A-J.
    static ref CIF_SHAPE: regex::Regex =
        regex::Regex::new(r"^[ABCDEFGHJKLMNPQRSUVW][0-9]{7}[0-9A-J]$").unwrap();
}

/// Subtype of a Spanish tax identifier, derived from the shape of a
/// normalized candidate. The three shapes have disjoint leading-character
/// sets (digits vs. X/Y/Z vs. other letters), so at most one matches.
#[derive(Serialize, Deserialize, strum::Display, Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum TaxIdKind {
    Dni,
    Nie,
    Cif,
    Unrecognized,
}

/// Returns true if the candidate has the DNI shape: 8 digits followed by a
/// control letter. The candidate is expected to already be normalized.
pub fn is_dni(candidate: &str) -> bool {
    DNI_SHAPE.is_match(candidate)
}

/// Returns true if the candidate has the NIE shape: X, Y or Z followed by
/// 7 digits and a control letter. The candidate is expected to already be
/// normalized.
pub fn is_nie(candidate: &str) -> bool {
    NIE_SHAPE.is_match(candidate)
}

/// Returns true if the candidate has the CIF shape: an organization class
/// letter followed by 7 digits and a control character. The candidate is
/// expected to already be normalized.
pub fn is_cif(candidate: &str) -> bool {
    CIF_SHAPE.is_match(candidate)
}

/// Classifies a normalized candidate by shape alone; the checksum is not
/// verified here.
pub fn classify(candidate: &str) -> TaxIdKind {
    if is_dni(candidate) {
        TaxIdKind::Dni
    } else if is_nie(candidate) {
        TaxIdKind::Nie
    } else if is_cif(candidate) {
        TaxIdKind::Cif
    } else {
        TaxIdKind::Unrecognized
    }
}

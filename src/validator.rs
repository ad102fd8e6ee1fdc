use std::borrow::Cow;

use crate::checksum::{Checksum, CifChecksum, DniChecksum, NieChecksum};
use crate::classification::{classify, is_cif, is_dni, is_nie, TaxIdKind};
use crate::normalization;

const VALIDATOR_NAME: &str = "Spanish VAT Number Validator";
const VALIDATOR_DESCRIPTION: &str =
    "Validates Spanish tax identification numbers: DNI, NIE and CIF";

// Every valid identifier is exactly this long once normalized.
const NORMALIZED_LENGTH: usize = 9;

/// Generic VAT-number validation capability: callers that treat identifiers
/// as opaque need nothing beyond normalization and a pass/fail verdict.
pub trait VatNumberValidator: Send + Sync {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn normalize(&self, input: &str) -> String;
    fn validate(&self, input: &str, normalize: bool) -> bool;
}

/// Spanish-specific capability on top of the generic contract: subtype shape
/// predicates and per-subtype checksum validation.
pub trait SpanishVatNumberValidator: VatNumberValidator {
    fn is_dni(&self, candidate: &str) -> bool;
    fn is_nie(&self, candidate: &str) -> bool;
    fn is_cif(&self, candidate: &str) -> bool;
    fn validate_dni(&self, input: &str, normalize: bool) -> bool;
    fn validate_nie(&self, input: &str, normalize: bool) -> bool;
    fn validate_cif(&self, input: &str, normalize: bool) -> bool;
}

/// The one implementation of both capabilities. Stateless, so a single
/// instance can be shared freely across threads.
pub struct SpanishVatValidator;

fn candidate_of(input: &str, normalize: bool) -> Cow<'_, str> {
    if normalize {
        Cow::Owned(normalization::normalize(input))
    } else {
        Cow::Borrowed(input)
    }
}

/// Validates a candidate of any subtype. The subtype is determined by shape
/// and the matching checksum applied; unrecognized shapes are plain `false`,
/// never an error. Pass `normalize = false` when the input has already been
/// normalized.
pub fn validate(input: &str, normalize: bool) -> bool {
    let candidate = candidate_of(input, normalize);
    if candidate.chars().count() != NORMALIZED_LENGTH {
        return false;
    }
    match classify(&candidate) {
        TaxIdKind::Dni => DniChecksum.is_valid(&candidate),
        TaxIdKind::Nie => NieChecksum.is_valid(&candidate),
        TaxIdKind::Cif => CifChecksum.is_valid(&candidate),
        TaxIdKind::Unrecognized => false,
    }
}

/// Validates a candidate strictly as a DNI.
pub fn validate_dni(input: &str, normalize: bool) -> bool {
    DniChecksum.is_valid(&candidate_of(input, normalize))
}

/// Validates a candidate strictly as a NIE.
pub fn validate_nie(input: &str, normalize: bool) -> bool {
    NieChecksum.is_valid(&candidate_of(input, normalize))
}

/// Validates a candidate strictly as a CIF.
pub fn validate_cif(input: &str, normalize: bool) -> bool {
    CifChecksum.is_valid(&candidate_of(input, normalize))
}

impl VatNumberValidator for SpanishVatValidator {
    fn name(&self) -> &'static str {
        VALIDATOR_NAME
    }

    fn description(&self) -> &'static str {
        VALIDATOR_DESCRIPTION
    }

    fn normalize(&self, input: &str) -> String {
        normalization::normalize(input)
    }

    fn validate(&self, input: &str, normalize: bool) -> bool {
        validate(input, normalize)
    }
}

impl SpanishVatNumberValidator for SpanishVatValidator {
    fn is_dni(&self, candidate: &str) -> bool {
        is_dni(candidate)
    }

    fn is_nie(&self, candidate: &str) -> bool {
        is_nie(candidate)
    }

    fn is_cif(&self, candidate: &str) -> bool {
        is_cif(candidate)
    }

    fn validate_dni(&self, input: &str, normalize: bool) -> bool {
        validate_dni(input, normalize)
    }

    fn validate_nie(&self, input: &str, normalize: bool) -> bool {
        validate_nie(input, normalize)
    }

    fn validate_cif(&self, input: &str, normalize: bool) -> bool {
        validate_cif(input, normalize)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn dispatches_each_subtype() {
        assert!(validate("90275465M", true));
        assert!(validate("X3675428M", true));
        assert!(validate("B63520670", true));
        assert!(validate("A30339220", true));
    }

    #[test]
    fn rejects_corrupted_and_unrecognized_candidates() {
        assert!(!validate("90275464M", true));
        assert!(!validate("", true));
        assert!(!validate("NOTANID", true));
        assert!(!validate("123", true));
    }

    #[test]
    fn formatting_and_case_do_not_matter() {
        assert_eq!(validate("90275465M", true), validate("90275465m", true));
        assert_eq!(validate("90275465M", true), validate("90.275465-M", true));
        assert!(validate("x-3675428-m", true));
        assert!(validate("b.63520670", true));
    }

    #[test]
    fn skipping_normalization_takes_the_input_verbatim() {
        assert!(validate("90275465M", false));
        assert!(!validate("90.275465-M", false));
        assert!(!validate("90275465m", false));
        // short DNIs only pass once padded
        assert!(validate("6752999S", true));
        assert!(!validate("6752999S", false));
    }

    #[test]
    fn subtype_validators_reject_other_subtypes() {
        assert!(validate_dni("90275465M", true));
        assert!(!validate_dni("X3675428M", true));
        assert!(!validate_dni("B63520670", true));

        assert!(validate_nie("X3675428M", true));
        assert!(!validate_nie("90275465M", true));

        assert!(validate_cif("B63520670", true));
        assert!(!validate_cif("90275465M", true));
    }

    #[test]
    fn trait_objects_expose_both_capability_sets() {
        let validator: &dyn SpanishVatNumberValidator = &SpanishVatValidator;
        assert!(validator.validate("90275465M", true));
        assert!(validator.validate_cif("B63520670", true));
        assert!(validator.is_nie("X3675428M"));
        assert_eq!(validator.normalize("90.275465-m"), "90275465M");

        let generic: &dyn VatNumberValidator = &SpanishVatValidator;
        assert!(generic.validate("X3675428M", true));
        assert!(!generic.name().is_empty());
        assert!(!generic.description().is_empty());
    }
}

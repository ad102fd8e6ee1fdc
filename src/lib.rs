// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod checksum;
mod classification;
mod normalization;
mod tax_id;
mod validator;

// This is the public API of the Spanish VAT validation library
pub use checksum::{Checksum, CifChecksum, DniChecksum, NieChecksum};
pub use classification::{classify, is_cif, is_dni, is_nie, TaxIdKind};
pub use normalization::normalize;
pub use tax_id::{ParseTaxIdError, TaxId};
pub use validator::{
    validate, validate_cif, validate_dni, validate_nie, SpanishVatNumberValidator,
    SpanishVatValidator, VatNumberValidator,
};

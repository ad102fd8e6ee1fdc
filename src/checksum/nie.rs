use crate::checksum::{Checksum, DniChecksum};
use crate::classification::is_nie;

pub struct NieChecksum;

const NIE_PREFIXES: &str = "XYZ";

impl Checksum for NieChecksum {
    fn is_valid(&self, candidate: &str) -> bool {
        /*
         * NIE format: X, Y or Z followed by 7 digits and a control letter.
         * The prefix letter stands for its index in "XYZ"; substituting it
         * yields a regular DNI whose control-letter rule applies unchanged.
         */
        if !is_nie(candidate) {
            return false;
        }

        let prefix_digit = match candidate.chars().next().and_then(|c| NIE_PREFIXES.find(c)) {
            Some(index) => index,
            None => return false,
        };

        DniChecksum.is_valid(&format!("{prefix_digit}{}", &candidate[1..]))
    }
}

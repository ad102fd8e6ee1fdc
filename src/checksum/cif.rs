use crate::checksum::{sum_all_digits, Checksum};
use crate::classification::is_cif;

pub struct CifChecksum;

const CONTROL_LETTERS: &str = "JABCDEFGHI";

// Organizations with these class letters must use a letter control
// character; a digit in the control position is rejected outright.
const LETTER_CONTROL_CLASSES: &str = "PQRSW";

impl Checksum for CifChecksum {
    fn is_valid(&self, candidate: &str) -> bool {
        /*
         * CIF format: organization class letter, 7 digits, control character.
         * The control is derived from a Luhn-style weighted sum of the
         * digits: even 0-based positions are doubled and reduced to a single
         * digit, odd positions count as-is. Outside the letter-only classes
         * (and the digit-only classes A, B, E and H) real-world usage mixes
         * both representations, so whichever kind of control character is
         * supplied is checked against the same expected value.
         */
        if !is_cif(candidate) {
            return false;
        }

        // The shape check guarantees 9 ASCII characters with a 7-digit payload.
        let class = candidate.as_bytes()[0] as char;
        let control = candidate.as_bytes()[8] as char;

        let total_sum: u32 = candidate[1..8]
            .chars()
            .filter_map(|c| c.to_digit(10))
            .enumerate()
            .map(|(i, digit)| {
                if i % 2 == 0 {
                    sum_all_digits(digit * 2)
                } else {
                    digit
                }
            })
            .sum();

        let mut check_pos = total_sum % 10;
        if check_pos != 0 {
            check_pos = 10 - check_pos;
        }

        if let Some(control_digit) = control.to_digit(10) {
            return !LETTER_CONTROL_CLASSES.contains(class) && control_digit == check_pos;
        }
        control == CONTROL_LETTERS.as_bytes()[check_pos as usize] as char
    }
}

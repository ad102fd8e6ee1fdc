use crate::checksum::Checksum;
use crate::classification::is_dni;

pub struct DniChecksum;

const CONTROL_LETTERS: &str = "TRWAGMYFPDXBNJZSQVHLCKE";

const NUMBER_LENGTH: usize = 8;

impl Checksum for DniChecksum {
    fn is_valid(&self, candidate: &str) -> bool {
        /*
         * Spanish DNI format:
         * 8 digits followed by a control letter. The letter is found by
         * taking the number modulo 23 and using it as an index into
         * CONTROL_LETTERS.
         */
        if !is_dni(candidate) {
            return false;
        }

        // The shape check guarantees an 8-digit ASCII prefix.
        let number: u32 = match candidate[..NUMBER_LENGTH].parse() {
            Ok(x) => x,
            Err(_) => return false,
        };

        let expected = CONTROL_LETTERS.as_bytes()[(number % 23) as usize] as char;
        candidate.chars().next_back() == Some(expected)
    }
}

#[cfg(test)]
mod test {
    use super::CONTROL_LETTERS;
    use crate::checksum::*;

    #[test]
    fn valid_dni_control_letters() {
        let valid_ids = vec![
            "12345678Z", // 12345678 % 23 = 15 -> Z
            "00000000T", // 0 % 23 = 0 -> T
            "99999999R", // 99999999 % 23 = 1 -> R
            "90275465M",
            "06752999S",
        ];
        for id in valid_ids {
            assert!(DniChecksum.is_valid(id), "expected {id} to be valid");
        }
    }

    #[test]
    fn invalid_dni_candidates() {
        let invalid_ids = vec![
            // wrong control letter
            "12345678A",
            "00000000R",
            "90275464M",
            // wrong length
            "123456789",
            "1234567",
            // not normalized: short DNIs must be padded first
            "6752999S",
            // non-digit payload
            "1234567A9",
            "ABCDEFGHR",
        ];
        for id in invalid_ids {
            assert!(!DniChecksum.is_valid(id), "expected {id} to be invalid");
        }
    }

    #[test]
    fn every_control_letter_is_reachable() {
        for number in 0u32..23 {
            let id = format!("{number:0>8}");
            let hits = CONTROL_LETTERS
                .chars()
                .filter(|&letter| DniChecksum.is_valid(&format!("{id}{letter}")))
                .count();
            assert_eq!(hits, 1);
        }
    }
}

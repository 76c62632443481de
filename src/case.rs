use std::{fmt, str::FromStr};

use crate::Error;

/// Lower-case for `A-Z`, every other 7-bit byte maps to itself.
const TO_LOWER: [u8; 128] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, //
    16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, //
    32, 33, 34, 35, 36, 37, 38, 39, 40, 41, 42, 43, 44, 45, 46, 47, //
    48, 49, 50, 51, 52, 53, 54, 55, 56, 57, 58, 59, 60, 61, 62, 63, //
    64, 97, 98, 99, 100, 101, 102, 103, 104, 105, 106, 107, 108, 109, 110, 111, //
    112, 113, 114, 115, 116, 117, 118, 119, 120, 121, 122, 91, 92, 93, 94, 95, //
    96, 97, 98, 99, 100, 101, 102, 103, 104, 105, 106, 107, 108, 109, 110, 111, //
    112, 113, 114, 115, 116, 117, 118, 119, 120, 121, 122, 123, 124, 125, 126, 127, //
];

/// Upper-case for `a-z`, every other 7-bit byte maps to itself.
const TO_UPPER: [u8; 128] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, //
    16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, //
    32, 33, 34, 35, 36, 37, 38, 39, 40, 41, 42, 43, 44, 45, 46, 47, //
    48, 49, 50, 51, 52, 53, 54, 55, 56, 57, 58, 59, 60, 61, 62, 63, //
    64, 65, 66, 67, 68, 69, 70, 71, 72, 73, 74, 75, 76, 77, 78, 79, //
    80, 81, 82, 83, 84, 85, 86, 87, 88, 89, 90, 91, 92, 93, 94, 95, //
    96, 65, 66, 67, 68, 69, 70, 71, 72, 73, 74, 75, 76, 77, 78, 79, //
    80, 81, 82, 83, 84, 85, 86, 87, 88, 89, 90, 123, 124, 125, 126, 127, //
];

/// Case applied to every sequence while a FASTA file is parsed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Lower,
    Upper,
    #[default]
    Keep,
}

impl Case {
    /// Rewrites the sequence in place.
    ///
    /// Bytes outside the 7-bit range are left untouched.
    pub fn apply(self, seq: &mut [u8]) {
        let table = match self {
            Self::Lower => &TO_LOWER,
            Self::Upper => &TO_UPPER,
            Self::Keep => return,
        };
        for byte in seq.iter_mut() {
            if let Some(&mapped) = table.get(*byte as usize) {
                *byte = mapped;
            }
        }
    }

    pub fn flag(self) -> char {
        match self {
            Self::Lower => 'L',
            Self::Upper => 'U',
            Self::Keep => 'K',
        }
    }
}

impl FromStr for Case {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "l" | "lower" => Ok(Self::Lower),
            "u" | "upper" => Ok(Self::Upper),
            "k" | "keep" => Ok(Self::Keep),
            _ => Err(Error::InvalidCase(s.to_string())),
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.flag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn applied(case: Case, input: &[u8]) -> Vec<u8> {
        let mut seq = input.to_vec();
        case.apply(&mut seq);
        seq
    }

    #[test]
    fn test_lower() {
        assert_eq!(applied(Case::Lower, b"ACGTNacgtn-*"), b"acgtnacgtn-*");
    }

    #[test]
    fn test_upper() {
        assert_eq!(applied(Case::Upper, b"acgtnACGTN.-"), b"ACGTNACGTN.-");
    }

    #[test]
    fn test_keep_is_noop() {
        assert_eq!(applied(Case::Keep, b"AcGt"), b"AcGt");
    }

    #[test]
    fn test_tables_only_touch_letters() {
        for byte in 0u8..128 {
            let lower = applied(Case::Lower, &[byte])[0];
            let upper = applied(Case::Upper, &[byte])[0];
            assert_eq!(lower, byte.to_ascii_lowercase());
            assert_eq!(upper, byte.to_ascii_uppercase());
        }
    }

    #[test]
    fn test_high_bytes_untouched() {
        let input = [b'a', 0x80, 0xC3, 0xFF, b'Z'];
        assert_eq!(applied(Case::Upper, &input), [b'A', 0x80, 0xC3, 0xFF, b'Z']);
        assert_eq!(applied(Case::Lower, &input), [b'a', 0x80, 0xC3, 0xFF, b'z']);
    }

    #[test]
    fn test_idempotent() {
        let input = b"AcGtNnRy;[]`{}@";
        for case in [Case::Lower, Case::Upper, Case::Keep] {
            let once = applied(case, input);
            assert_eq!(applied(case, &once), once);
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("L".parse::<Case>().unwrap(), Case::Lower);
        assert_eq!("u".parse::<Case>().unwrap(), Case::Upper);
        assert_eq!("Keep".parse::<Case>().unwrap(), Case::Keep);
        assert!(matches!("X".parse::<Case>(), Err(Error::InvalidCase(_))));
        assert_eq!(Case::default(), Case::Keep);
    }

    #[test]
    fn test_display_round_trips_flag() {
        for case in [Case::Lower, Case::Upper, Case::Keep] {
            let shown = case.to_string();
            assert_eq!(shown, case.flag().to_string());
            assert_eq!(shown.parse::<Case>().unwrap(), case);
        }
        assert_eq!(Case::Lower.to_string(), "L");
    }
}

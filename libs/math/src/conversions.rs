//! Conversions between types.

use crate::errors::ConversionError;
use num_bigint::BigUint;
use num_traits::Zero;

/// Encodes a string as a positive integer.
///
/// The UTF-8 bytes of the string are read as an unsigned big-endian magnitude. This is the same integer a
/// signed reading would produce after prepending a zero byte whenever the first byte has its top bit set,
/// so the result is always positive. Leading NUL characters don't survive the round trip, and strings
/// made only of them encode to zero and are rejected.
pub fn encode_string_to_integer(value: &str) -> Result<BigUint, ConversionError> {
    let integer = BigUint::from_bytes_be(value.as_bytes());
    if integer.is_zero() {
        return Err(ConversionError::EmptySecret);
    }
    Ok(integer)
}

/// Decodes an integer produced by [encode_string_to_integer] back into a string.
pub fn decode_integer_to_string(value: &BigUint) -> Result<String, ConversionError> {
    let bytes = value.to_bytes_be();
    let start = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len());
    let trimmed = bytes.get(start..).unwrap_or_default().to_vec();
    Ok(String::from_utf8(trimmed)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod test {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Hello World!")]
    #[case("a")]
    #[case("ünïcödé 🔑 секрет")]
    #[case("\u{80}")]
    fn round_trip(#[case] value: &str) {
        let integer = encode_string_to_integer(value).unwrap();
        assert!(!integer.is_zero());
        assert_eq!(decode_integer_to_string(&integer).unwrap(), value);
    }

    #[test]
    fn known_encoding() {
        assert_eq!(encode_string_to_integer("AB").unwrap(), BigUint::from(0x4142u32));
        // The top bit of the first byte is set, the value stays positive.
        assert_eq!(encode_string_to_integer("é").unwrap(), BigUint::from(0xc3a9u32));
    }

    #[rstest]
    #[case("")]
    #[case("\0")]
    #[case("\0\0\0")]
    fn zero_strings_rejected(#[case] value: &str) {
        assert_eq!(encode_string_to_integer(value), Err(ConversionError::EmptySecret));
    }

    #[test]
    fn leading_nul_is_dropped() {
        let integer = encode_string_to_integer("\0abc").unwrap();
        assert_eq!(decode_integer_to_string(&integer).unwrap(), "abc");
    }

    #[test]
    fn zero_decodes_to_empty_string() {
        assert_eq!(decode_integer_to_string(&BigUint::zero()).unwrap(), "");
    }

    #[test]
    fn invalid_utf8() {
        let result = decode_integer_to_string(&BigUint::from(0xffu32));
        assert!(matches!(result, Err(ConversionError::InvalidUtf8(_))));
    }
}

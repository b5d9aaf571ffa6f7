//! Binary share codec.
//!
//! A share is encoded as:
//!
//! | size        | field                                  |
//! |-------------|----------------------------------------|
//! | 2           | signature, ASCII `SS`                  |
//! | 1           | index                                  |
//! | 4           | value length, big endian               |
//! | value len   | value, two's complement big endian     |
//! | 4           | prime length, big endian               |
//! | prime len   | prime, two's complement big endian     |
//!
//! Integers use their minimal two's complement encoding, so a positive integer whose most significant
//! bit is set carries an extra leading `0x00`.

use crate::share::SecretShare;
use num_bigint::{BigInt, BigUint, Sign};
use thiserror::Error;

/// The signature every encoded share starts with.
pub const SIGNATURE: &[u8; 2] = b"SS";

/// The largest index that fits in an encoded share.
pub const MAX_INDEX: u32 = u8::MAX as u32;

/// An error during the encoding of a share.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EncodeError {
    /// The index doesn't fit in a single byte.
    #[error("share index {0} out of range, must be at most 255")]
    IndexOutOfRange(u32),

    /// An integer's encoding is longer than a length prefix can represent.
    #[error("{0} too long to encode")]
    FieldTooLong(&'static str),
}

/// A malformed share message.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// The message ends before the named field does.
    #[error("malformed message: truncated {field}")]
    Truncated {
        /// The field being read.
        field: &'static str,
    },

    /// The message doesn't start with [SIGNATURE].
    #[error("malformed message: invalid signature")]
    InvalidSignature,

    /// The encoded value is zero or negative.
    #[error("malformed message: value must be positive")]
    NonPositiveValue,

    /// The encoded prime is zero or negative.
    #[error("malformed message: prime must be positive")]
    NonPositivePrime,
}

/// Encodes a share.
pub fn encode(share: &SecretShare) -> Result<Vec<u8>, EncodeError> {
    let index = u8::try_from(share.index()).map_err(|_| EncodeError::IndexOutOfRange(share.index()))?;
    let value = BigInt::from(share.value().clone()).to_signed_bytes_be();
    let prime = BigInt::from(share.prime().clone()).to_signed_bytes_be();

    let mut bytes = Vec::with_capacity(SIGNATURE.len() + 1 + 4 + value.len() + 4 + prime.len());
    bytes.extend_from_slice(SIGNATURE);
    bytes.push(index);
    write_field(&mut bytes, &value, "value")?;
    write_field(&mut bytes, &prime, "prime")?;
    Ok(bytes)
}

/// Decodes a share.
///
/// Bytes following the prime are ignored.
pub fn decode(bytes: &[u8]) -> Result<SecretShare, DecodeError> {
    let mut reader = Reader { bytes };
    let signature = reader.take(SIGNATURE.len(), "signature")?;
    if signature != SIGNATURE {
        return Err(DecodeError::InvalidSignature);
    }
    let index = reader.take(1, "index")?.first().copied().ok_or(DecodeError::Truncated { field: "index" })?;
    let value = reader.read_field("value")?;
    let prime = reader.read_field("prime")?;

    let value = positive(value).ok_or(DecodeError::NonPositiveValue)?;
    let prime = positive(prime).ok_or(DecodeError::NonPositivePrime)?;
    Ok(SecretShare::new(u32::from(index), value, prime))
}

fn write_field(bytes: &mut Vec<u8>, field: &[u8], name: &'static str) -> Result<(), EncodeError> {
    let len = u32::try_from(field.len()).map_err(|_| EncodeError::FieldTooLong(name))?;
    bytes.extend_from_slice(&len.to_be_bytes());
    bytes.extend_from_slice(field);
    Ok(())
}

fn positive(value: BigInt) -> Option<BigUint> {
    match value.sign() {
        Sign::Plus => value.to_biguint(),
        Sign::Minus | Sign::NoSign => None,
    }
}

struct Reader<'a> {
    bytes: &'a [u8],
}

impl<'a> Reader<'a> {
    fn take(&mut self, len: usize, field: &'static str) -> Result<&'a [u8], DecodeError> {
        if self.bytes.len() < len {
            return Err(DecodeError::Truncated { field });
        }
        let (head, tail) = self.bytes.split_at(len);
        self.bytes = tail;
        Ok(head)
    }

    fn read_u32(&mut self, field: &'static str) -> Result<u32, DecodeError> {
        let bytes: [u8; 4] = self.take(4, field)?.try_into().map_err(|_| DecodeError::Truncated { field })?;
        Ok(u32::from_be_bytes(bytes))
    }

    fn read_field(&mut self, field: &'static str) -> Result<BigInt, DecodeError> {
        let len = self.read_u32(field)?;
        let len = usize::try_from(len).map_err(|_| DecodeError::Truncated { field })?;
        Ok(BigInt::from_signed_bytes_be(self.take(len, field)?))
    }
}

impl SecretShare {
    /// Encodes this share, see [encode].
    pub fn to_bytes(&self) -> Result<Vec<u8>, EncodeError> {
        encode(self)
    }
}

impl TryFrom<&[u8]> for SecretShare {
    type Error = DecodeError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        decode(bytes)
    }
}

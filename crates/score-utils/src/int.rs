//!
//! Signed big-endian integer codec.
//!
//! Lengths follow `(bit_length + 8) / 8`, which always leaves room for a sign
//! bit. For some negative values this is one byte longer than the tightest
//! two's-complement form (`-128` encodes as `ff 80`, not `80`); encoders and
//! decoders on the other side of the wire depend on that exact length.
//!

use num_bigint::BigInt;
use num_traits::Signed;
use thiserror::Error as ThisError;

///
/// IntError
///

#[derive(Debug, ThisError)]
pub enum IntError {
    #[error("integer {value} does not fit in {length} bytes")]
    Overflow { value: BigInt, length: usize },
}

/// Number of bytes `int_to_bytes` produces for `n`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn byte_length_of_int(n: &BigInt) -> usize {
    ((n.bits() + 8) / 8) as usize
}

/// Encode `n` as big-endian two's complement in `byte_length_of_int(n)` bytes.
pub fn int_to_bytes(n: &BigInt) -> Result<Vec<u8>, IntError> {
    let length = byte_length_of_int(n);
    let raw = n.to_signed_bytes_be();

    if raw.len() > length {
        log::warn!("int_to_bytes: {n} needs {} bytes, computed {length}", raw.len());

        return Err(IntError::Overflow {
            value: n.clone(),
            length,
        });
    }

    // sign-extend up to the computed length
    let fill = if n.is_negative() { 0xff } else { 0x00 };
    let mut out = vec![fill; length - raw.len()];
    out.extend_from_slice(&raw);

    Ok(out)
}

/// Decode a big-endian two's-complement buffer. Empty input decodes to zero.
#[must_use]
pub fn int_from_bytes(bytes: &[u8]) -> BigInt {
    BigInt::from_signed_bytes_be(bytes)
}

///
/// TESTS
///

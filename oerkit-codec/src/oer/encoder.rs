//! OER encoder for INTEGER values
//!
//! # Usage Example
//!
//! ```rust
//! use oerkit_codec::oer::OerEncoder;
//! use oerkit_core::IntegerConstraint;
//!
//! let mut encoder = OerEncoder::new();
//! encoder.encode_i64(&IntegerConstraint::range(-128, 127), -1)?;
//! encoder.encode_u64(&IntegerConstraint::range(0, 65535), 255)?;
//! assert_eq!(encoder.as_bytes(), &[0xFF, 0x00, 0xFF]);
//! # Ok::<(), oerkit_core::CodecError>(())
//! ```

use bytes::{Bytes, BytesMut};
use oerkit_core::{BigInteger, CodecResult, IntegerConstraint};

use crate::oer::integer::encode_integer;
use crate::oer::length::{LengthCodec, OerLength};

/// OER encoder accumulating canonical encodings in a buffer
///
/// # Memory Management
///
/// The encoder uses a `BytesMut` buffer. For many small values, consider
/// using `with_capacity()` to pre-allocate buffer space.
///
/// # Error Handling
///
/// A failed call leaves the buffer exactly as it was before the call.
pub struct OerEncoder<L = OerLength> {
    buffer: BytesMut,
    length_codec: L,
}

impl OerEncoder {
    /// Create a new OER encoder
    pub fn new() -> Self {
        Self::with_length_codec(OerLength::new())
    }

    /// Create a new OER encoder with initial capacity
    ///
    /// # Arguments
    /// * `capacity` - Initial buffer capacity in bytes
    ///
    /// # Why Pre-allocate?
    /// A fixed-width INTEGER never needs more than 8 bytes, so the total size
    /// of a known sequence of values is easy to bound up front.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: BytesMut::with_capacity(capacity),
            length_codec: OerLength::new(),
        }
    }
}

impl<L: LengthCodec> OerEncoder<L> {
    /// Create an encoder writing length determinants with `length_codec`
    pub fn with_length_codec(length_codec: L) -> Self {
        Self {
            buffer: BytesMut::new(),
            length_codec,
        }
    }

    /// Encode an INTEGER of a type constrained by `constraint`
    ///
    /// # Returns
    /// Number of bytes appended, length determinant included.
    pub fn encode_integer(
        &mut self,
        constraint: &IntegerConstraint,
        value: &BigInteger,
    ) -> CodecResult<usize> {
        encode_integer(&self.length_codec, constraint, value, &mut self.buffer)
    }

    /// Encode a signed 64-bit value
    pub fn encode_i64(&mut self, constraint: &IntegerConstraint, value: i64) -> CodecResult<usize> {
        self.encode_integer(constraint, &BigInteger::from(value))
    }

    /// Encode an unsigned 64-bit value
    pub fn encode_u64(&mut self, constraint: &IntegerConstraint, value: u64) -> CodecResult<usize> {
        self.encode_integer(constraint, &BigInteger::from(value))
    }

    /// Encode a bare length determinant
    ///
    /// # Why This Method?
    /// OER prefixes SEQUENCE OF counts and open types with the same
    /// determinant as INTEGER contents, so callers building those can reuse
    /// the encoder's length codec.
    pub fn encode_length(&mut self, length: usize) -> CodecResult<usize> {
        let mut prefix = Vec::new();
        let written = self.length_codec.serialize_length(length, &mut prefix)?;
        self.buffer.extend_from_slice(&prefix);
        Ok(written)
    }

    /// Get the encoded bytes
    pub fn into_bytes(self) -> Bytes {
        self.buffer.freeze()
    }

    /// Get a reference to the encoded bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Clear the encoder buffer
    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

impl Default for OerEncoder {
    fn default() -> Self {
        Self::new()
    }
}

//! OER decoder for INTEGER values
//!
//! # Usage Example
//!
//! ```rust
//! use oerkit_codec::oer::OerDecoder;
//! use oerkit_core::IntegerConstraint;
//!
//! let data = [0xFF, 0x02, 0x01, 0x2C];
//! let mut decoder = OerDecoder::new(&data);
//! assert_eq!(decoder.decode_i64(&IntegerConstraint::range(-128, 127))?, -1);
//! assert_eq!(decoder.decode_i64(&IntegerConstraint::unconstrained())?, 300);
//! assert!(!decoder.has_remaining());
//! # Ok::<(), oerkit_core::CodecError>(())
//! ```

use oerkit_core::{BigInteger, CodecConfig, CodecResult, IntegerConstraint};

use crate::oer::integer::decode_integer;
use crate::oer::length::{LengthCodec, OerLength};

/// OER decoder reading INTEGER values from a byte buffer
///
/// # Position Tracking
///
/// The decoder maintains a position that advances only when a value has been
/// decoded completely. After a `Starved` error the position still points at
/// the start of the value, so decoding can resume there once more input is
/// available.
pub struct OerDecoder<'a, L = OerLength> {
    buffer: &'a [u8],
    position: usize,
    length_codec: L,
}

impl<'a> OerDecoder<'a> {
    /// Create a new OER decoder
    ///
    /// # Arguments
    /// * `buffer` - Buffer containing OER-encoded data
    pub fn new(buffer: &'a [u8]) -> Self {
        Self::with_length_codec(buffer, OerLength::new())
    }

    /// Create a decoder applying the limits of `config`
    pub fn with_config(buffer: &'a [u8], config: &CodecConfig) -> CodecResult<Self> {
        config.validate()?;
        Ok(Self::with_length_codec(buffer, OerLength::with_config(config)))
    }
}

impl<'a, L: LengthCodec> OerDecoder<'a, L> {
    /// Create a decoder reading length determinants with `length_codec`
    pub fn with_length_codec(buffer: &'a [u8], length_codec: L) -> Self {
        Self {
            buffer,
            position: 0,
            length_codec,
        }
    }

    /// Get current position in buffer
    pub fn position(&self) -> usize {
        self.position
    }

    /// Get remaining bytes
    pub fn remaining(&self) -> usize {
        self.buffer.len().saturating_sub(self.position)
    }

    /// Check if there is more data to decode
    pub fn has_remaining(&self) -> bool {
        self.position < self.buffer.len()
    }

    fn rest(&self) -> &'a [u8] {
        &self.buffer[self.position.min(self.buffer.len())..]
    }

    /// Decode an INTEGER of a type constrained by `constraint`
    pub fn decode_integer(&mut self, constraint: &IntegerConstraint) -> CodecResult<BigInteger> {
        let (value, consumed) = decode_integer(&self.length_codec, constraint, self.rest())?;
        self.position += consumed;
        Ok(value)
    }

    /// Decode an INTEGER into `target`, replacing whatever it held
    ///
    /// `target` is cleared before decoding starts and stays `None` if the
    /// call fails, so a partially decoded value is never observable.
    ///
    /// # Returns
    /// Number of bytes consumed.
    pub fn decode_integer_into(
        &mut self,
        constraint: &IntegerConstraint,
        target: &mut Option<BigInteger>,
    ) -> CodecResult<usize> {
        *target = None;
        let (value, consumed) = decode_integer(&self.length_codec, constraint, self.rest())?;
        *target = Some(value);
        self.position += consumed;
        Ok(consumed)
    }

    /// Decode an INTEGER that must fit `i64`
    pub fn decode_i64(&mut self, constraint: &IntegerConstraint) -> CodecResult<i64> {
        let (value, consumed) = decode_integer(&self.length_codec, constraint, self.rest())?;
        let value = value.to_i64()?;
        self.position += consumed;
        Ok(value)
    }

    /// Decode an INTEGER that must fit `u64`
    pub fn decode_u64(&mut self, constraint: &IntegerConstraint) -> CodecResult<u64> {
        let (value, consumed) = decode_integer(&self.length_codec, constraint, self.rest())?;
        let value = value.to_u64()?;
        self.position += consumed;
        Ok(value)
    }

    /// Decode a bare length determinant
    pub fn decode_length(&mut self) -> CodecResult<usize> {
        let (consumed, length) = self.length_codec.fetch_length(self.rest())?;
        self.position += consumed;
        Ok(length)
    }
}

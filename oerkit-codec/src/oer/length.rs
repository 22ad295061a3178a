//! OER length determinant (X.696 #8.6)
//!
//! A length determinant prefixes every encoding whose size is not fixed by
//! its constraints. It comes in two forms:
//!
//! Short form, for lengths 0-127:
//! ```text
//! Byte: 0 L L L L L L L
//! ```
//!
//! Long form, for lengths > 127:
//! ```text
//! First byte:      1 N N N N N N N  (N = number of length bytes)
//! Following bytes: L L L L L L L L  (big-endian length value)
//! ```
//!
//! Canonical OER requires the minimal number of length bytes, which is what
//! [`OerLength`] writes. On the read side leading zero bytes are tolerated.

use oerkit_core::{CodecConfig, CodecError, CodecResult};

/// Reads and writes the count prefix of length-determined encodings
///
/// The INTEGER codec only talks to this trait, so an alternative determinant
/// format (or a test double) can be plugged in.
#[cfg_attr(test, mockall::automock)]
pub trait LengthCodec {
    /// Read a length determinant from the start of `bytes`
    ///
    /// Returns `(bytes_consumed, length)`. Fails with `Starved` when `bytes`
    /// does not yet hold the complete determinant.
    fn fetch_length(&self, bytes: &[u8]) -> CodecResult<(usize, usize)>;

    /// Append the determinant for `length` to `out`, returning the bytes written
    fn serialize_length(&self, length: usize, out: &mut Vec<u8>) -> CodecResult<usize>;
}

/// Length determinant as defined by X.696
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OerLength {
    max_length: usize,
}

impl OerLength {
    /// Create a length codec with the default limits
    pub fn new() -> Self {
        Self::with_config(&CodecConfig::default())
    }

    /// Create a length codec honouring `config.max_length`
    pub fn with_config(config: &CodecConfig) -> Self {
        Self {
            max_length: config.max_length,
        }
    }

    /// Largest length accepted by `fetch_length`
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    fn check_limit(&self, length: usize) -> CodecResult<usize> {
        if length > self.max_length {
            log::debug!(
                "Rejecting length determinant {} above limit {}",
                length,
                self.max_length
            );
            return Err(CodecError::InvalidLength(format!(
                "length {} exceeds limit {}",
                length, self.max_length
            )));
        }
        Ok(length)
    }
}

impl Default for OerLength {
    fn default() -> Self {
        Self::new()
    }
}

impl LengthCodec for OerLength {
    /// # Why Tolerate Leading Zeros?
    /// X.696 asks encoders for the minimal form but other encoders pad the
    /// long form anyway. The length value is the same either way, and only
    /// the count of significant bytes can overflow `usize`.
    fn fetch_length(&self, bytes: &[u8]) -> CodecResult<(usize, usize)> {
        let Some(&first_byte) = bytes.first() else {
            return Err(CodecError::Starved {
                needed: 1,
                available: 0,
            });
        };

        if first_byte & 0x80 == 0 {
            // Short form: length is in bits 6-0
            let length = self.check_limit(first_byte as usize)?;
            return Ok((1, length));
        }

        // Long form: bits 6-0 indicate number of length bytes
        let num_bytes = (first_byte & 0x7F) as usize;
        if bytes.len() < 1 + num_bytes {
            return Err(CodecError::Starved {
                needed: 1 + num_bytes,
                available: bytes.len(),
            });
        }

        let length_bytes = &bytes[1..1 + num_bytes];
        let significant = match length_bytes.iter().position(|&b| b != 0) {
            Some(start) => &length_bytes[start..],
            None => &[],
        };
        if significant.len() > size_of::<usize>() {
            return Err(CodecError::InvalidLength(format!(
                "{}-byte length does not fit the platform size",
                significant.len()
            )));
        }

        let length = significant
            .iter()
            .fold(0usize, |acc, &b| (acc << 8) | b as usize);
        let length = self.check_limit(length)?;
        log::trace!("Fetched long-form length {} from {} bytes", length, 1 + num_bytes);
        Ok((1 + num_bytes, length))
    }

    /// # Why Minimal Form?
    /// Canonical OER allows exactly one encoding per length, so the long form
    /// carries no leading zero bytes.
    fn serialize_length(&self, length: usize, out: &mut Vec<u8>) -> CodecResult<usize> {
        if length <= 127 {
            out.push(length as u8);
            return Ok(1);
        }

        let bytes = length.to_be_bytes();
        let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len() - 1);
        let num_bytes = bytes.len() - start;

        out.push(0x80 | num_bytes as u8);
        out.extend_from_slice(&bytes[start..]);
        Ok(1 + num_bytes)
    }
}

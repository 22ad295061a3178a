use crate::error::{CodecError, CodecResult};
use serde::{Deserialize, Serialize};
use serde_bytes::ByteBuf;
use std::fmt;

/// Arbitrary-precision INTEGER value held as a big-endian byte buffer
///
/// Signed values are stored in two's complement. Non-negative values decoded
/// from an unsigned encoding whose top bit is set carry an explicit leading
/// `0x00`, so the buffer is never mistaken for a negative number.
///
/// A `BigInteger` always holds at least one byte.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ByteBuf", into = "ByteBuf")]
pub struct BigInteger {
    bytes: Vec<u8>,
}

impl BigInteger {
    /// Create a value from its raw big-endian representation
    ///
    /// # Errors
    ///
    /// Returns an error if `bytes` is empty: every INTEGER occupies at least one byte.
    pub fn from_bytes(bytes: Vec<u8>) -> CodecResult<Self> {
        if bytes.is_empty() {
            return Err(CodecError::InvalidData(
                "INTEGER buffer must hold at least one byte".to_string(),
            ));
        }
        Ok(Self { bytes })
    }

    /// Get the raw big-endian representation
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the value and return its raw representation
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Number of bytes in the buffer, including any padding byte
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the top bit of the first byte is set
    pub fn is_negative(&self) -> bool {
        self.bytes[0] & 0x80 != 0
    }

    /// View of the buffer without redundant two's-complement sign bytes
    ///
    /// A leading `0x00` is redundant when the next byte's sign bit is clear,
    /// a leading `0xFF` when the next byte's sign bit is set. At least one
    /// byte always remains.
    pub fn canonical_signed(&self) -> &[u8] {
        let bytes = &self.bytes;
        let mut start = 0;
        while start + 1 < bytes.len() {
            let next_negative = bytes[start + 1] & 0x80 != 0;
            match bytes[start] {
                0x00 if !next_negative => start += 1,
                0xFF if next_negative => start += 1,
                _ => break,
            }
        }
        &bytes[start..]
    }

    /// View of the buffer without leading zero bytes, at least one byte kept
    pub fn canonical_unsigned(&self) -> &[u8] {
        let bytes = &self.bytes;
        let mut start = 0;
        while start + 1 < bytes.len() && bytes[start] == 0x00 {
            start += 1;
        }
        &bytes[start..]
    }

    /// Interpret the buffer as a two's-complement signed integer
    ///
    /// # Errors
    ///
    /// Returns an overflow error if more than 8 significant bytes remain.
    pub fn to_i64(&self) -> CodecResult<i64> {
        let view = self.canonical_signed();
        if view.len() > 8 {
            return Err(CodecError::Overflow(format!(
                "{} significant bytes do not fit i64",
                view.len()
            )));
        }

        // Sign extend into a full-width buffer
        let fill = if view[0] & 0x80 != 0 { 0xFF } else { 0x00 };
        let mut buf = [fill; 8];
        buf[8 - view.len()..].copy_from_slice(view);
        Ok(i64::from_be_bytes(buf))
    }

    /// Interpret the buffer as a non-negative integer
    ///
    /// # Errors
    ///
    /// Returns an overflow error if the value is negative or needs more than 8 bytes.
    pub fn to_u64(&self) -> CodecResult<u64> {
        if self.is_negative() {
            return Err(CodecError::Overflow(
                "negative INTEGER does not fit u64".to_string(),
            ));
        }
        let view = self.canonical_unsigned();
        if view.len() > 8 {
            return Err(CodecError::Overflow(format!(
                "{} significant bytes do not fit u64",
                view.len()
            )));
        }

        let mut buf = [0u8; 8];
        buf[8 - view.len()..].copy_from_slice(view);
        Ok(u64::from_be_bytes(buf))
    }
}

impl From<i64> for BigInteger {
    fn from(value: i64) -> Self {
        let full = Self {
            bytes: value.to_be_bytes().to_vec(),
        };
        Self {
            bytes: full.canonical_signed().to_vec(),
        }
    }
}

impl From<u64> for BigInteger {
    fn from(value: u64) -> Self {
        let full = value.to_be_bytes();
        let start = full.iter().position(|&b| b != 0).unwrap_or(full.len() - 1);

        let mut bytes = Vec::with_capacity(full.len() - start + 1);
        if full[start] & 0x80 != 0 {
            bytes.push(0x00);
        }
        bytes.extend_from_slice(&full[start..]);
        Self { bytes }
    }
}

impl TryFrom<ByteBuf> for BigInteger {
    type Error = CodecError;

    fn try_from(buf: ByteBuf) -> CodecResult<Self> {
        Self::from_bytes(buf.into_vec())
    }
}

impl From<BigInteger> for ByteBuf {
    fn from(value: BigInteger) -> Self {
        ByteBuf::from(value.bytes)
    }
}

impl fmt::Display for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Ok(v) = self.to_i64() {
            return write!(f, "{}", v);
        }
        if let Ok(v) = self.to_u64() {
            return write!(f, "{}", v);
        }
        write!(f, "0x")?;
        for byte in &self.bytes {
            write!(f, "{:02X}", byte)?;
        }
        Ok(())
    }
}

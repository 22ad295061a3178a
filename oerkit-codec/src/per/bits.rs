//! Bit-level output accumulator and input cursor for PER

use bitvec::prelude::*;
use oerkit_core::{CodecError, CodecResult};

/// Bit sink accumulating PER output, most significant bit first
///
/// The writer counts the bits it holds and, when created with a limit,
/// refuses to grow past it.
#[derive(Debug, Clone, Default)]
pub struct BitWriter {
    bits: BitVec<u8, Msb0>,
    limit: Option<usize>,
}

impl BitWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer that holds at most `limit` bits
    ///
    /// The limit is only a bound; storage still grows as bits are written.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            bits: BitVec::new(),
            limit: Some(limit),
        }
    }

    /// Number of bits written so far
    pub fn bit_len(&self) -> usize {
        self.bits.len()
    }

    fn reserve(&self, nbits: usize) -> CodecResult<()> {
        if let Some(limit) = self.limit {
            let available = limit - self.bits.len();
            if nbits > available {
                return Err(CodecError::BufferOverflow {
                    needed: nbits,
                    available,
                });
            }
        }
        Ok(())
    }

    /// Write a single bit
    pub fn put_bit(&mut self, bit: bool) -> CodecResult<()> {
        self.reserve(1)?;
        self.bits.push(bit);
        Ok(())
    }

    /// Write the low `nbits` bits of `value`, `nbits` at most 32
    pub fn put_few_bits(&mut self, value: u32, nbits: u32) -> CodecResult<()> {
        if nbits > 32 {
            return Err(CodecError::InvalidData(format!(
                "cannot put {} bits at once, at most 32",
                nbits
            )));
        }
        self.put_bits(u64::from(value), nbits)
    }

    /// Write the low `nbits` bits of `value` (MSB first), `nbits` at most 64
    pub fn put_bits(&mut self, value: u64, nbits: u32) -> CodecResult<()> {
        if nbits > 64 {
            return Err(CodecError::InvalidData(format!(
                "cannot put {} bits at once, at most 64",
                nbits
            )));
        }
        self.reserve(nbits as usize)?;
        for i in (0..nbits).rev() {
            self.bits.push((value >> i) & 1 == 1);
        }
        Ok(())
    }

    /// Pad with zero bits up to the next octet boundary
    pub fn align(&mut self) -> CodecResult<()> {
        let remainder = self.bits.len() % 8;
        if remainder != 0 {
            self.put_bits(0, (8 - remainder) as u32)?;
        }
        Ok(())
    }

    /// Written bits, the last octet possibly partial
    pub fn as_bitslice(&self) -> &BitSlice<u8, Msb0> {
        &self.bits
    }

    /// Get the encoded bytes, unused bits of the last octet set to zero
    pub fn into_bytes(mut self) -> Vec<u8> {
        self.bits.set_uninitialized(false);
        self.bits.into_vec()
    }
}

/// Bit source over a byte buffer with absolute bit addressing
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    bits: &'a BitSlice<u8, Msb0>,
    position: usize,
}

impl<'a> BitReader<'a> {
    /// Read all bits of `data`
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            bits: BitSlice::from_slice(data),
            position: 0,
        }
    }

    /// Read only the first `nbits` bits of `data`
    pub fn with_bit_len(data: &'a [u8], nbits: usize) -> CodecResult<Self> {
        let all = BitSlice::<u8, Msb0>::from_slice(data);
        if nbits > all.len() {
            return Err(CodecError::InvalidLength(format!(
                "{} bits requested from {} bytes",
                nbits,
                data.len()
            )));
        }
        Ok(Self {
            bits: &all[..nbits],
            position: 0,
        })
    }

    /// Get current bit position
    pub fn position(&self) -> usize {
        self.position
    }

    /// Move to an absolute bit position
    pub fn set_position(&mut self, position: usize) -> CodecResult<()> {
        if position > self.bits.len() {
            return Err(CodecError::InvalidLength(format!(
                "bit position {} beyond {} bits",
                position,
                self.bits.len()
            )));
        }
        self.position = position;
        Ok(())
    }

    /// Get remaining bits
    pub fn remaining(&self) -> usize {
        self.bits.len().saturating_sub(self.position)
    }

    /// Return to a position obtained from `position()` earlier
    pub(crate) fn rewind(&mut self, position: usize) {
        self.position = position.min(self.bits.len());
    }

    /// Read a single bit
    pub fn get_bit(&mut self) -> CodecResult<bool> {
        Ok(self.get_bits(1)? == 1)
    }

    /// Read `nbits` bits, at most 32
    pub fn get_few_bits(&mut self, nbits: u32) -> CodecResult<u32> {
        if nbits > 32 {
            return Err(CodecError::InvalidData(format!(
                "cannot get {} bits at once, at most 32",
                nbits
            )));
        }
        Ok(self.get_bits(nbits)? as u32)
    }

    /// Read `nbits` bits as a value (MSB first), at most 64
    pub fn get_bits(&mut self, nbits: u32) -> CodecResult<u64> {
        if nbits > 64 {
            return Err(CodecError::InvalidData(format!(
                "cannot get {} bits at once, at most 64",
                nbits
            )));
        }
        let nbits = nbits as usize;
        if nbits > self.remaining() {
            return Err(CodecError::Truncated {
                needed: nbits,
                available: self.remaining(),
            });
        }

        let value = self.bits[self.position..self.position + nbits]
            .iter()
            .by_vals()
            .fold(0u64, |acc, bit| (acc << 1) | u64::from(bit));
        self.position += nbits;
        Ok(value)
    }
}

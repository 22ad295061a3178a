//! Canonical OER encoding of INTEGER values (X.696 #10)
//!
//! # Wire Layout
//!
//! The constraint picks one of two layouts (see [`integer_layout`]):
//! - **Fixed width**: exactly 1, 2, 4 or 8 big-endian bytes, padded on the
//!   left with the sign byte
//! - **Length prefixed**: a length determinant followed by the minimal
//!   big-endian representation
//!
//! Types with a non-negative lower bound are encoded as magnitudes, all others
//! in two's complement.
//!
//! # Unsigned Values In Memory
//!
//! A magnitude such as `0xFF` would read as -1 if stored as is. Decoding an
//! unsigned encoding whose top bit is set therefore prepends `0x00` to the
//! buffer. The padding byte exists only in memory; the encoder strips it
//! again.

use bytes::BufMut;
use oerkit_core::{BigInteger, CodecError, CodecResult, IntegerConstraint};

use crate::oer::length::LengthCodec;
use crate::oer::width::{integer_layout, IntegerWidth};

/// Decode one INTEGER from the start of `bytes`
///
/// Returns the value and the number of bytes consumed (length determinant
/// included).
///
/// # Errors
///
/// - `Starved` if `bytes` ends before the determinant or the content does;
///   retrying with more input from the same offset may succeed
/// - `InvalidLength` for a zero-length content or a determinant the length
///   codec rejects
pub fn decode_integer<L>(
    length_codec: &L,
    constraint: &IntegerConstraint,
    bytes: &[u8],
) -> CodecResult<(BigInteger, usize)>
where
    L: LengthCodec + ?Sized,
{
    let layout = integer_layout(constraint);
    let mut consumed = 0;

    let req_bytes = match layout.width {
        IntegerWidth::Fixed(width) => width,
        IntegerWidth::LengthPrefixed => {
            let (length_bytes, length) = length_codec.fetch_length(bytes)?;
            if length == 0 {
                return Err(CodecError::InvalidLength(
                    "INTEGER content must hold at least one byte".to_string(),
                ));
            }
            consumed += length_bytes;
            length
        }
    };

    let content = bytes.get(consumed..).ok_or_else(|| {
        CodecError::InvalidLength(format!(
            "length determinant claims {} bytes of {}",
            consumed,
            bytes.len()
        ))
    })?;
    if content.len() < req_bytes {
        let needed = consumed.checked_add(req_bytes).ok_or_else(|| {
            CodecError::InvalidLength(format!(
                "INTEGER of {} bytes after {}-byte determinant overflows",
                req_bytes, consumed
            ))
        })?;
        return Err(CodecError::Starved {
            needed,
            available: bytes.len(),
        });
    }
    let content = &content[..req_bytes];

    let buf = if layout.unsigned && content[0] & 0x80 != 0 {
        let mut buf = Vec::with_capacity(req_bytes + 1);
        buf.push(0x00);
        buf.extend_from_slice(content);
        buf
    } else {
        content.to_vec()
    };

    consumed += req_bytes;
    Ok((BigInteger::from_bytes(buf)?, consumed))
}

/// Encode `value` as canonical OER into `sink`
///
/// Returns the number of bytes emitted (length determinant included). The
/// encoding is assembled before anything is written, so `sink` is left
/// untouched when the call fails.
///
/// # Why Check Before Writing?
/// `BufMut` has no way to take back bytes once they are put. Checking the
/// width and `remaining_mut()` up front means a rejected value never leaves a
/// half-written INTEGER in a shared output buffer.
///
/// # Errors
///
/// - `ConstraintViolation` if a negative value is given for an unsigned type,
///   or the value does not fit the fixed width of its type
/// - `BufferOverflow` if `sink` has less room than the encoding needs
pub fn encode_integer<L, B>(
    length_codec: &L,
    constraint: &IntegerConstraint,
    value: &BigInteger,
    sink: &mut B,
) -> CodecResult<usize>
where
    L: LengthCodec + ?Sized,
    B: BufMut,
{
    let layout = integer_layout(constraint);
    let negative = value.is_negative();

    if layout.unsigned && negative {
        log::debug!("Refusing to encode negative {} as unsigned {}", value, constraint);
        return Err(CodecError::ConstraintViolation(format!(
            "negative value {} for unsigned type {}",
            value, constraint
        )));
    }

    let useful = if layout.unsigned {
        value.canonical_unsigned()
    } else {
        value.canonical_signed()
    };

    let mut prefix = Vec::new();
    let width = match layout.width {
        IntegerWidth::LengthPrefixed => {
            length_codec.serialize_length(useful.len(), &mut prefix)?;
            useful.len()
        }
        IntegerWidth::Fixed(width) if width < useful.len() => {
            log::debug!(
                "{} needs {} bytes, {} allows {}",
                value,
                useful.len(),
                constraint,
                width
            );
            return Err(CodecError::ConstraintViolation(format!(
                "value {} does not fit {} bytes of type {}",
                value, width, constraint
            )));
        }
        IntegerWidth::Fixed(width) => width,
    };

    let total = prefix.len() + width;
    if sink.remaining_mut() < total {
        return Err(CodecError::BufferOverflow {
            needed: total,
            available: sink.remaining_mut(),
        });
    }

    let sign_byte = if negative { 0xFF } else { 0x00 };
    sink.put_slice(&prefix);
    sink.put_bytes(sign_byte, width - useful.len());
    sink.put_slice(useful);
    Ok(total)
}

//! PER constrained whole numbers (X.691 #11.5.7)
//!
//! A value of a type constrained to `lower..=upper` is written as its
//! distance from `lower` in the minimum number of bits able to hold the whole
//! span. A single-value range takes no bits at all.

use oerkit_core::{range_span, rebase, span_bits, unrebase, CodecResult};

use crate::per::bits::{BitReader, BitWriter};

/// Write `value` constrained to `lower..=upper`
///
/// # Returns
/// Number of bits written.
pub fn put_constrained_whole_number(
    writer: &mut BitWriter,
    value: i64,
    lower: i64,
    upper: i64,
) -> CodecResult<u32> {
    let wire = rebase(value, lower, upper).inspect_err(|e| {
        log::debug!("Rejected constrained whole number: {}", e);
    })?;
    let nbits = span_bits(range_span(lower, upper)?);
    writer.put_bits(wire, nbits)?;
    Ok(nbits)
}

/// Read a value constrained to `lower..=upper`
///
/// A wire value beyond the span of the range is malformed. The reader
/// position is left where it was on failure.
pub fn get_constrained_whole_number(
    reader: &mut BitReader<'_>,
    lower: i64,
    upper: i64,
) -> CodecResult<i64> {
    let nbits = span_bits(range_span(lower, upper)?);
    let start = reader.position();
    let wire = reader.get_bits(nbits)?;
    unrebase(wire, lower, upper).inspect_err(|e| {
        log::debug!("Rejected constrained whole number: {}", e);
        reader.rewind(start);
    })
}

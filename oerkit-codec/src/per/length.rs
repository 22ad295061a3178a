//! PER length determinant with fragmentation (X.691 #11.9)
//!
//! Unconstrained lengths take one of three forms:
//!
//! ```text
//! 0LLLLLLL                  0 ..= 127
//! 10LLLLLL LLLLLLLL         128 ..= 16383
//! 11MMMMMM                  fragment of M * 16K units, 1 <= M <= 4
//! ```
//!
//! A fragment header only announces a chunk; more length determinants follow
//! it. When the last fragment uses up the whole length exactly, nothing would
//! tell the reader to stop, so the writer appends a zero length as an
//! end-of-message marker.

use oerkit_core::{CodecError, CodecResult};

use crate::per::bits::{BitReader, BitWriter};

/// Size of one fragmentation unit
pub const FRAGMENT_UNIT: usize = 16384;

/// Largest number of units a single fragment header may announce
pub const MAX_FRAGMENT_UNITS: usize = 4;

/// Write the length determinant for (the next chunk of) `length`
///
/// # Returns
/// `(written, needs_eom)`: the number of units the determinant covers, which
/// may be less than `length`, and whether a zero-length end-of-message
/// determinant must follow once those units have been written. The caller
/// repeats with the remaining length until nothing is left.
pub fn put_length(writer: &mut BitWriter, length: usize) -> CodecResult<(usize, bool)> {
    if length <= 127 {
        // #11.9.3.6
        writer.put_few_bits(length as u32, 8)?;
        return Ok((length, false));
    }
    if length < FRAGMENT_UNIT {
        // #11.9.3.7
        writer.put_few_bits(0x8000 | length as u32, 16)?;
        return Ok((length, false));
    }

    // #11.9.3.8
    let mut units = length / FRAGMENT_UNIT;
    let mut needs_eom = length % FRAGMENT_UNIT == 0;
    if units > MAX_FRAGMENT_UNITS {
        units = MAX_FRAGMENT_UNITS;
        needs_eom = false;
    }

    writer.put_few_bits(0xC0 | units as u32, 8)?;
    log::trace!("PER fragment of {} units (EOM needed: {})", units, needs_eom);
    Ok((units * FRAGMENT_UNIT, needs_eom))
}

/// Read a length determinant
///
/// With `ebits` of at most 16 the length is constrained: exactly `ebits`
/// bits hold the distance from `lower_bound`. Otherwise the unconstrained
/// forms are read.
///
/// # Returns
/// `(length, repeat)`. `repeat` is set after a fragment header, telling the
/// caller to read another determinant once the fragment's units are consumed.
///
/// # Errors
/// Fails on truncated input and on a fragment header announcing 0 or more
/// than 4 units. The reader position is left where it was on failure.
pub fn get_length(
    reader: &mut BitReader<'_>,
    ebits: Option<u32>,
    lower_bound: usize,
) -> CodecResult<(usize, bool)> {
    let start = reader.position();
    let result = match ebits {
        // #11.9.4.1
        Some(bits) if bits <= 16 => get_constrained_length(reader, bits, lower_bound),
        _ => get_unconstrained_length(reader),
    };
    if result.is_err() {
        reader.rewind(start);
    }
    result
}

fn get_constrained_length(
    reader: &mut BitReader<'_>,
    bits: u32,
    lower_bound: usize,
) -> CodecResult<(usize, bool)> {
    let value = reader.get_few_bits(bits)? as usize;
    let length = value.checked_add(lower_bound).ok_or_else(|| {
        CodecError::InvalidLength(format!("length {} + {} overflows", value, lower_bound))
    })?;
    Ok((length, false))
}

fn get_unconstrained_length(reader: &mut BitReader<'_>) -> CodecResult<(usize, bool)> {
    let first = reader.get_few_bits(8)? as usize;
    if first & 0x80 == 0 {
        return Ok((first & 0x7F, false));
    }
    if first & 0x40 == 0 {
        let second = reader.get_few_bits(8)? as usize;
        return Ok((((first & 0x3F) << 8) | second, false));
    }

    let units = first & 0x3F;
    if !(1..=MAX_FRAGMENT_UNITS).contains(&units) {
        log::debug!("Prohibited PER fragment multiplier {}", units);
        return Err(CodecError::InvalidLength(format!(
            "fragment of {} units, expected 1 to {}",
            units, MAX_FRAGMENT_UNITS
        )));
    }
    Ok((units * FRAGMENT_UNIT, true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// Write all determinants for `length`, EOM marker included
    fn put(writer: &mut BitWriter, mut length: usize) {
        loop {
            let (written, needs_eom) = put_length(writer, length).unwrap();
            assert!(written <= length);
            length -= written;
            if needs_eom {
                assert_eq!(length, 0);
                assert_eq!(put_length(writer, 0).unwrap(), (0, false));
            }
            if length == 0 {
                break;
            }
        }
        assert!(writer.bit_len() != 0);
    }

    /// Sum determinants until one comes without the repeat flag
    fn get(reader: &mut BitReader<'_>) -> usize {
        let mut length = 0;
        loop {
            let (chunk, repeat) = get_length(reader, None, 0).unwrap();
            length += chunk;
            if !repeat {
                return length;
            }
        }
    }

    fn encoded(length: usize) -> Vec<u8> {
        let mut writer = BitWriter::new();
        put(&mut writer, length);
        writer.into_bytes()
    }

    fn check_round_trip(length: usize) {
        let mut writer = BitWriter::new();
        put(&mut writer, length);
        let bit_len = writer.bit_len();
        let bytes = writer.into_bytes();

        let mut reader = BitReader::with_bit_len(&bytes, bit_len).unwrap();
        assert_eq!(get(&mut reader), length, "round trip of {}", length);
        assert_eq!(reader.remaining(), 0, "leftover bits after {}", length);
    }

    #[test]
    fn test_round_trips() {
        for length in [0, 1, 127, 128, 129, 255, 256, 65534, 65535, 65536, 65538, 128000] {
            check_round_trip(length);
        }
        for k in 1..10 {
            check_round_trip(k * FRAGMENT_UNIT - 1);
            check_round_trip(k * FRAGMENT_UNIT);
            check_round_trip(k * FRAGMENT_UNIT + 1);
        }
    }

    #[test]
    fn test_short_and_two_octet_forms() {
        assert_eq!(encoded(0), vec![0x00]);
        assert_eq!(encoded(127), vec![0x7F]);
        assert_eq!(encoded(128), vec![0x80, 0x80]);
        assert_eq!(encoded(16383), vec![0xBF, 0xFF]);
    }

    #[test]
    fn test_eom_only_on_exact_multiples() {
        assert_eq!(encoded(16384), vec![0xC1, 0x00]);
        assert_eq!(encoded(16385), vec![0xC1, 0x01]);
        assert_eq!(encoded(65536), vec![0xC4, 0x00]);
        // The first fragment is capped, so only the second ends exactly
        assert_eq!(encoded(131072), vec![0xC4, 0xC4, 0x00]);
        assert_eq!(encoded(81920), vec![0xC4, 0xC1, 0x00]);
        assert_eq!(encoded(81921), vec![0xC4, 0xC1, 0x01]);
    }

    #[test]
    fn test_put_length_reports_chunk() {
        let mut writer = BitWriter::new();
        assert_eq!(put_length(&mut writer, 100_000).unwrap(), (65536, false));
        assert_eq!(put_length(&mut writer, 32768).unwrap(), (32768, true));
        assert_eq!(put_length(&mut writer, 200).unwrap(), (200, false));
    }

    #[test]
    fn test_prohibited_fragment_multipliers() {
        for header in [0xC0u8, 0xC5, 0xFF] {
            let data = [header];
            let mut reader = BitReader::new(&data);
            assert!(matches!(
                get_length(&mut reader, None, 0),
                Err(CodecError::InvalidLength(_))
            ));
            assert_eq!(reader.position(), 0);
        }
    }

    #[test]
    fn test_truncated_input() {
        let data = [0x81];
        let mut reader = BitReader::new(&data);
        assert!(matches!(
            get_length(&mut reader, None, 0),
            Err(CodecError::Truncated { .. })
        ));
        assert_eq!(reader.position(), 0);

        let mut reader = BitReader::new(&[]);
        assert!(get_length(&mut reader, None, 0).is_err());
    }

    #[test]
    fn test_constrained_length() {
        let data = [0b1010_0000];
        let mut reader = BitReader::new(&data);
        assert_eq!(get_length(&mut reader, Some(3), 10).unwrap(), (15, false));
        assert_eq!(reader.position(), 3);
        assert_eq!(get_length(&mut reader, Some(0), 7).unwrap(), (7, false));
        assert_eq!(reader.position(), 3);
    }

    #[test]
    fn test_overflowing_writer() {
        let mut writer = BitWriter::with_limit(8);
        assert!(put_length(&mut writer, 200).is_err());
        assert_eq!(writer.bit_len(), 0);
        assert_eq!(put_length(&mut writer, 5).unwrap(), (5, false));
    }

    #[test]
    fn test_random_round_trips() {
        let mut rng = StdRng::seed_from_u64(16384);
        for _ in 0..1_000 {
            check_round_trip(rng.gen_range(0..10 * FRAGMENT_UNIT));
        }
    }
}

//! Range rebasing between signed values and zero-based wire values
//!
//! PER encodes a value constrained to `lower..=upper` as the distance from
//! the lower bound. That distance always fits `u64`, but computing it with
//! signed arithmetic overflows as soon as the bounds straddle zero far enough
//! (the extreme case being `i64::MIN..=i64::MAX`).
//!
//! Both directions work on the two's-complement bit patterns reinterpreted as
//! `u64` with wrapping arithmetic. Modulo 2^64 the subtraction is exact, and
//! since the true result lies in `0..=u64::MAX` it is also the correct value.

use crate::error::{CodecError, CodecResult};

/// Span of the range `lower..=upper`, i.e. `upper - lower` as an unsigned value
///
/// # Errors
///
/// Returns an error if the range is inverted (`lower > upper`).
pub fn range_span(lower: i64, upper: i64) -> CodecResult<u64> {
    if lower > upper {
        return Err(CodecError::ConstraintViolation(format!(
            "inverted range {}..{}",
            lower, upper
        )));
    }
    Ok((upper as u64).wrapping_sub(lower as u64))
}

/// Number of bits needed to hold every wire value in `0..=span`
///
/// A single-value range (`span == 0`) needs no bits at all.
pub fn span_bits(span: u64) -> u32 {
    u64::BITS - span.leading_zeros()
}

/// Map `value` within `lower..=upper` onto the zero-based wire value
///
/// # Errors
///
/// Returns an error if the range is inverted or `value` lies outside it.
pub fn rebase(value: i64, lower: i64, upper: i64) -> CodecResult<u64> {
    range_span(lower, upper)?;
    if value < lower || value > upper {
        return Err(CodecError::ConstraintViolation(format!(
            "value {} outside range {}..{}",
            value, lower, upper
        )));
    }
    Ok((value as u64).wrapping_sub(lower as u64))
}

/// Recover the value a wire value stands for within `lower..=upper`
///
/// # Errors
///
/// Returns an error if the range is inverted or `wire` exceeds the span.
pub fn unrebase(wire: u64, lower: i64, upper: i64) -> CodecResult<i64> {
    let span = range_span(lower, upper)?;
    if wire > span {
        return Err(CodecError::ConstraintViolation(format!(
            "wire value {} exceeds span {} of range {}..{}",
            wire, span, lower, upper
        )));
    }
    Ok((lower as u64).wrapping_add(wire) as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const MIN: i64 = i64::MIN;
    const MAX: i64 = i64::MAX;
    const I32_MIN: i64 = i32::MIN as i64;
    const I32_MAX: i64 = i32::MAX as i64;

    fn round_trips(value: i64, lower: i64, upper: i64) {
        let wire = rebase(value, lower, upper)
            .unwrap_or_else(|e| panic!("{} in {}..{} failed to rebase: {}", value, lower, upper, e));
        let recovered = unrebase(wire, lower, upper)
            .unwrap_or_else(|e| panic!("{} in {}..{} failed to unrebase: {}", wire, lower, upper, e));
        assert_eq!(recovered, value, "range {}..{}", lower, upper);
    }

    fn rejected(value: i64, lower: i64, upper: i64) {
        assert!(
            rebase(value, lower, upper).is_err(),
            "{} should not rebase into {}..{}",
            value,
            lower,
            upper
        );
    }

    #[test]
    fn test_unrebase_single_value_ranges() {
        assert_eq!(unrebase(0, 0, 0).unwrap(), 0);
        assert!(unrebase(1, 0, 0).is_err());
        assert_eq!(unrebase(0, MAX, MAX).unwrap(), MAX);
        assert!(unrebase(1, MAX, MAX).is_err());
        assert_eq!(unrebase(0, MAX - 1, MAX - 1).unwrap(), MAX - 1);
        assert!(unrebase(1, MAX - 1, MAX - 1).is_err());
        assert_eq!(unrebase(0, MIN, MIN).unwrap(), MIN);
        assert!(unrebase(1, MIN, MIN).is_err());
    }

    #[test]
    fn test_small_ranges() {
        round_trips(0, 0, 0);
        round_trips(0, 0, 1);
        round_trips(1, 0, 1);
        rejected(-1, 0, 0);
        rejected(1, 0, 0);
        rejected(MIN, 0, 0);
        rejected(MAX, 0, 0);

        round_trips(-2, -2, -1);
        round_trips(-1, -2, -1);
        rejected(-3, -2, -1);
        rejected(0, -2, -1);

        round_trips(-1, -1, 1);
        round_trips(0, -1, 1);
        round_trips(1, -1, 1);
        rejected(-2, -1, 1);
        rejected(2, -1, 1);
        rejected(MIN, -1, 1);
        rejected(MAX, -1, 1);
    }

    #[test]
    fn test_ranges_at_upper_extreme() {
        round_trips(MAX, MAX, MAX);
        rejected(MAX - 1, MAX, MAX);
        rejected(0, MAX, MAX);
        rejected(MIN, MAX, MAX);
        rejected(MIN + 1, MAX, MAX);

        round_trips(MAX - 10, MAX - 10, MAX - 5);
        round_trips(MAX - 5, MAX - 10, MAX - 5);
        round_trips(MAX - 7, MAX - 10, MAX - 5);
        rejected(MAX - 4, MAX - 10, MAX - 5);
    }

    #[test]
    fn test_ranges_at_lower_extreme() {
        round_trips(MIN, MIN, MIN);
        rejected(MIN + 1, MIN, MIN);
        rejected(0, MIN, MIN);
        rejected(MAX - 1, MIN, MIN);
        rejected(MAX, MIN, MIN);

        rejected(MIN, MIN + 1, MIN + 2);
        round_trips(MIN + 1, MIN + 1, MIN + 2);
        round_trips(MIN + 2, MIN + 1, MIN + 2);
        rejected(MIN + 3, MIN + 1, MIN + 2);
        round_trips(MIN, MIN, MIN + 1);
        round_trips(MIN + 1, MIN, 0);
        round_trips(MIN + 1, MIN, MIN + 1);
        rejected(MIN + 2, MIN, MIN + 1);
    }

    #[test]
    fn test_full_domain() {
        for value in [-1, 0, 1, MIN, MAX] {
            round_trips(value, MIN, MAX);
        }
        assert_eq!(rebase(MIN, MIN, MAX).unwrap(), 0);
        assert_eq!(rebase(MAX, MIN, MAX).unwrap(), u64::MAX);
        assert_eq!(rebase(0, MIN, MAX).unwrap(), 1u64 << 63);
        assert_eq!(range_span(MIN, MAX).unwrap(), u64::MAX);

        round_trips(-1, MIN + 1, MAX - 1);
        round_trips(0, MIN + 1, MAX - 1);
        round_trips(MIN + 1, MIN + 1, MAX - 1);
        round_trips(MAX - 1, MIN + 1, MAX - 1);
        rejected(MIN, MIN + 1, MAX - 1);
        rejected(MAX, MIN + 1, MAX - 1);
    }

    #[test]
    fn test_ranges_wider_than_u32() {
        round_trips(I32_MIN, I32_MIN - 1, I32_MAX + 1);
        round_trips(I32_MAX, I32_MIN - 1, I32_MAX + 1);
        round_trips(I32_MIN - 1, I32_MIN - 1, I32_MAX + 1);
        round_trips(I32_MAX + 1, I32_MIN - 1, I32_MAX + 1);
        rejected(MIN, I32_MIN - 1, I32_MAX + 1);
        rejected(MAX, I32_MIN - 1, I32_MAX + 1);

        rejected(I32_MIN - 1, I32_MIN, I32_MAX);
        rejected(I32_MAX + 1, I32_MIN, I32_MAX);
        rejected(MIN, I32_MIN, I32_MAX);
        rejected(MAX, I32_MIN, I32_MAX);
        rejected(MIN, I32_MIN + 1, I32_MAX - 1);
        rejected(MAX, I32_MIN + 1, I32_MAX - 1);
    }

    #[test]
    fn test_inverted_range() {
        assert!(rebase(0, 1, -1).is_err());
        assert!(unrebase(0, 1, -1).is_err());
        assert!(range_span(MAX, MIN).is_err());
    }

    #[test]
    fn test_unrebase_rejects_beyond_span() {
        assert_eq!(unrebase(u64::MAX, MIN, MAX).unwrap(), MAX);
        assert!(unrebase(u64::MAX, MIN, MAX - 1).is_err());
        assert!(unrebase(1u64 << 63, MIN + 1, 0).is_err());
        assert_eq!(unrebase((1u64 << 63) - 1, MIN + 1, 0).unwrap(), 0);
    }

    #[test]
    fn test_span_bits() {
        assert_eq!(span_bits(0), 0);
        assert_eq!(span_bits(1), 1);
        assert_eq!(span_bits(255), 8);
        assert_eq!(span_bits(256), 9);
        assert_eq!(span_bits(u64::MAX), 64);
    }

    #[test]
    fn test_random_round_trips() {
        let mut rng = StdRng::seed_from_u64(0x5EED);
        for _ in 0..10_000 {
            let a = rng.gen_range(MIN..=MAX);
            let b = rng.gen_range(MIN..=MAX);
            let (lower, upper) = if a <= b { (a, b) } else { (b, a) };
            let value = rng.gen_range(lower..=upper);
            round_trips(value, lower, upper);
        }
    }
}

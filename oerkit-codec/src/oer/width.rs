//! Fixed-width selection for constrained INTEGER types (X.969 10.2)
//!
//! OER only ever uses the four canonical widths 1, 2, 4 and 8 bytes. The
//! first table entry covering the declared range wins; ranges that no entry
//! covers, or types without the needed bounds, fall back to a length
//! determinant.

use oerkit_core::IntegerConstraint;

/// Width and largest value of each unsigned canonical width
const UNSIGNED_WIDTHS: [(usize, u64); 4] = [
    (1, u8::MAX as u64),
    (2, u16::MAX as u64),
    (4, u32::MAX as u64),
    (8, u64::MAX),
];

/// Width and value range of each signed canonical width
const SIGNED_WIDTHS: [(usize, i64, i64); 4] = [
    (1, i8::MIN as i64, i8::MAX as i64),
    (2, i16::MIN as i64, i16::MAX as i64),
    (4, i32::MIN as i64, i32::MAX as i64),
    (8, i64::MIN, i64::MAX),
];

/// How many content bytes an INTEGER occupies on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegerWidth {
    /// Exactly this many bytes, no length determinant
    Fixed(usize),
    /// A length determinant gives the byte count
    LengthPrefixed,
}

/// Wire layout of an INTEGER type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegerLayout {
    /// Magnitude encoding instead of two's complement
    pub unsigned: bool,
    pub width: IntegerWidth,
}

/// Smallest unsigned canonical width covering `0..=upper`
pub fn unsigned_width(upper: i64) -> Option<usize> {
    UNSIGNED_WIDTHS
        .iter()
        .find(|(_, max)| i128::from(upper) <= i128::from(*max))
        .map(|(width, _)| *width)
}

/// Smallest signed canonical width covering `lower..=upper`
pub fn signed_width(lower: i64, upper: i64) -> Option<usize> {
    SIGNED_WIDTHS
        .iter()
        .find(|(_, min, max)| lower >= *min && upper <= *max)
        .map(|(width, _, _)| *width)
}

/// Work out the wire layout for values of a type with `constraint`
pub fn integer_layout(constraint: &IntegerConstraint) -> IntegerLayout {
    let unsigned = constraint.is_unsigned();
    let fixed = if unsigned {
        // 10.2(a): without an upper bound the width is open
        constraint.upper_bound.and_then(unsigned_width)
    } else {
        match (constraint.lower_bound, constraint.upper_bound) {
            (Some(lb), Some(ub)) => signed_width(lb, ub),
            _ => None,
        }
    };

    let width = fixed.map_or(IntegerWidth::LengthPrefixed, IntegerWidth::Fixed);
    log::trace!("INTEGER {} uses {:?} (unsigned: {})", constraint, width, unsigned);
    IntegerLayout { unsigned, width }
}

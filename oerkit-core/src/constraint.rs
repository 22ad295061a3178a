//! Value-range constraints attached to INTEGER types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared value range of an INTEGER type
///
/// Either bound may be absent. The codecs only read this descriptor; it is
/// owned by whatever describes the type being encoded.
///
/// Three shapes drive OER encoding:
/// - lower bound present and non-negative: unsigned semantics
/// - both bounds present: signed fixed width, if one of the canonical widths covers the range
/// - anything else: unconstrained, a length determinant precedes the value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IntegerConstraint {
    /// Lower bound, if declared
    pub lower_bound: Option<i64>,
    /// Upper bound, if declared
    pub upper_bound: Option<i64>,
}

impl IntegerConstraint {
    /// Create a constraint from optional bounds
    pub const fn new(lower_bound: Option<i64>, upper_bound: Option<i64>) -> Self {
        Self {
            lower_bound,
            upper_bound,
        }
    }

    /// No bounds at all
    pub const fn unconstrained() -> Self {
        Self::new(None, None)
    }

    /// Both bounds declared, `INTEGER (lower..upper)`
    pub const fn range(lower: i64, upper: i64) -> Self {
        Self::new(Some(lower), Some(upper))
    }

    /// Only a lower bound, `INTEGER (lower..MAX)`
    pub const fn lower_bounded(lower: i64) -> Self {
        Self::new(Some(lower), None)
    }

    /// Only an upper bound, `INTEGER (MIN..upper)`
    pub const fn upper_bounded(upper: i64) -> Self {
        Self::new(None, Some(upper))
    }

    pub fn has_lower_bound(&self) -> bool {
        self.lower_bound.is_some()
    }

    pub fn has_upper_bound(&self) -> bool {
        self.upper_bound.is_some()
    }

    /// Whether values of this type are encoded without a sign
    ///
    /// X.969 10.2(a): a non-negative lower bound selects the unsigned forms,
    /// regardless of the upper bound.
    pub fn is_unsigned(&self) -> bool {
        matches!(self.lower_bound, Some(lb) if lb >= 0)
    }

    /// Whether both bounds are declared
    pub fn is_fully_bounded(&self) -> bool {
        self.lower_bound.is_some() && self.upper_bound.is_some()
    }
}

impl fmt::Display for IntegerConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.lower_bound, self.upper_bound) {
            (Some(lb), Some(ub)) => write!(f, "({}..{})", lb, ub),
            (Some(lb), None) => write!(f, "({}..MAX)", lb),
            (None, Some(ub)) => write!(f, "(MIN..{})", ub),
            (None, None) => write!(f, "(MIN..MAX)"),
        }
    }
}

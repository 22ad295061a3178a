//! Unaligned PER (Packed Encoding Rules) primitives
//!
//! PER works on bits rather than octets. This module provides the bit-level
//! sink and source plus the two building blocks every PER encoder needs:
//! length determinants with fragmentation, and constrained whole numbers.

pub mod bits;
pub mod length;
pub mod whole_number;

pub use bits::{BitReader, BitWriter};
pub use length::{get_length, put_length, FRAGMENT_UNIT, MAX_FRAGMENT_UNITS};
pub use whole_number::{get_constrained_whole_number, put_constrained_whole_number};

//! oerkit - canonical OER INTEGER codec and PER length/range primitives
//!
//! # Architecture
//!
//! This library is organized as a workspace with multiple crates:
//!
//! - `oerkit-core`: Arbitrary-precision integers, constraints, range rebasing,
//!   configuration and error handling
//! - `oerkit-codec`: OER INTEGER codec, OER length determinants, PER bit I/O,
//!   PER length determinants and constrained whole numbers
//!
//! # Usage
//!
//! ```rust
//! use oerkit::{IntegerConstraint, OerDecoder, OerEncoder};
//!
//! let constraint = IntegerConstraint::range(0, 65535);
//! let mut encoder = OerEncoder::new();
//! encoder.encode_u64(&constraint, 255)?;
//! let bytes = encoder.into_bytes();
//! assert_eq!(&bytes[..], &[0x00, 0xFF]);
//!
//! let mut decoder = OerDecoder::new(&bytes);
//! assert_eq!(decoder.decode_u64(&constraint)?, 255);
//! # Ok::<(), oerkit::CodecError>(())
//! ```

// Re-export core types
pub use oerkit_core::{
    range_span, rebase, span_bits, unrebase, BigInteger, CodecConfig, CodecError, CodecResult,
    IntegerConstraint,
};

// Re-export OER API
pub use oerkit_codec::oer::{LengthCodec, OerDecoder, OerEncoder, OerLength};

pub mod oer {
    pub use oerkit_codec::oer::*;
}

pub mod per {
    pub use oerkit_codec::per::*;
}

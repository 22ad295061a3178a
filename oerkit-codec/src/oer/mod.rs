//! OER (Octet Encoding Rules) encoder and decoder for ASN.1 INTEGER
//!
//! This module provides canonical OER encoding/decoding of INTEGER values as
//! specified by ITU-T X.696, with the width selection rules of X.969.
//!
//! # OER INTEGER Encoding Overview
//!
//! OER is byte aligned and, unlike BER, carries no tag. How an INTEGER is
//! laid out depends only on the constraint of its type:
//!
//! ```text
//! INTEGER (0..255)          [V]                     1 byte, unsigned
//! INTEGER (0..65535)        [V V]                   2 bytes, unsigned
//! INTEGER (-128..127)       [V]                     1 byte, two's complement
//! INTEGER (0..MAX)          [L] [V ...]             length + magnitude
//! INTEGER                   [L] [V ...]             length + two's complement
//! ```
//!
//! ## Fixed Widths
//!
//! Only the widths 1, 2, 4 and 8 exist. The smallest one whose range covers
//! the whole constraint is used, and the value is padded on the left with its
//! sign byte.
//!
//! ## Length Determinant
//!
//! When no fixed width applies, a length determinant (short form below 128,
//! long form otherwise) precedes the minimal representation of the value.
//!
//! # Implementation Notes
//!
//! 1. **Canonical Form**: The encoder always writes the canonical encoding,
//!    whatever redundant padding the in-memory value carries.
//! 2. **Starvation**: Running out of input while decoding is reported as
//!    `CodecError::Starved`, which callers treat as "retry with more data".
//! 3. **Pluggable Lengths**: The INTEGER codec reads and writes length
//!    determinants through the [`LengthCodec`] trait.

pub mod decoder;
pub mod encoder;
pub mod integer;
pub mod length;
pub mod width;

pub use decoder::OerDecoder;
pub use encoder::OerEncoder;
pub use integer::{decode_integer, encode_integer};
pub use length::{LengthCodec, OerLength};
pub use width::{integer_layout, IntegerLayout, IntegerWidth};

//! ASN.1 encoding rules for INTEGER values and length determinants
//!
//! This crate provides the OER INTEGER codec (X.696 with X.969 width
//! selection) and the unaligned PER length and whole-number primitives
//! (X.691) built on top of `oerkit-core`.
//!
//! # TODO
//!
//! ## OER
//! - [x] 长度编码（短格式/长格式）
//! - [x] INTEGER 编码/解码（固定宽度、长度前缀）
//! - [x] 流式编码器/解码器
//!
//! ## PER
//! - [x] 位级读写
//! - [x] 长度编码（分片、EOM）
//! - [x] 约束整数
//! - [ ] 对齐变体（ALIGNED PER）

pub mod oer;
pub mod per;

pub use oer::{decode_integer, encode_integer, LengthCodec, OerDecoder, OerEncoder, OerLength};
pub use per::{
    get_constrained_whole_number, get_length, put_constrained_whole_number, put_length,
    BitReader, BitWriter,
};

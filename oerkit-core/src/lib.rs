//! Core types and utilities for OER/PER integer codecs
//!
//! This crate provides the error type, the INTEGER value buffer, constraint
//! descriptors, range rebasing and configuration shared by the codecs.

pub mod config;
pub mod constraint;
pub mod error;
pub mod integer;
pub mod range;

pub use config::CodecConfig;
pub use constraint::IntegerConstraint;
pub use error::{CodecError, CodecResult};
pub use integer::BigInteger;
pub use range::{range_span, rebase, span_bits, unrebase};

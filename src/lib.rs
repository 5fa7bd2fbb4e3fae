//! Order-preserving fixed-width key codecs for scalar types.
//!
//! Each codec in this crate is a pure `(encode, decode)` function pair bound
//! to one source type, such that unsigned lexicographic comparison of the
//! encoded bytes matches the natural ordering of the typed value. This is
//! the building block an ordered key-value store needs wherever its
//! underlying storage compares raw byte strings: B-tree indexes, LSM trees,
//! embedded databases, external-merge sort keys, prefix-scan range
//! indexes.
//!
//! # Examples
//!
//! ```
//! use sortkey::{Codec, I32Codec};
//!
//! let mut neg = Vec::new();
//! I32Codec.encode(&mut neg, -1).unwrap();
//! let mut zero = Vec::new();
//! I32Codec.encode(&mut zero, 0).unwrap();
//! assert!(neg < zero);
//! ```
//!
//! Composite keys are built from [`KeyPart`] values and concatenated in
//! declared order:
//!
//! ```
//! use sortkey::{encode_key, KeyPart};
//!
//! let mut buf = Vec::new();
//! encode_key(&mut buf, &[KeyPart::Bool(true), KeyPart::U32(7)]).unwrap();
//! ```
#![warn(missing_docs)]

mod bool_codec;
mod codec;
mod error;
mod float;
mod ordinal;
mod raw;
mod signed;
mod unsigned;

pub use bool_codec::BoolCodec;
pub use codec::{encode_key, Codec, KeyPart};
pub use error::{DecodeError, EncodeError};
pub use float::{F32Codec, F64Codec};
pub use ordinal::{Ordinal, OrdinalCodec};
pub use signed::{I32Codec, I64Codec};
pub use unsigned::{U32Codec, U64Codec};

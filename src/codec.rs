//! Codec trait and the `KeyPart` dispatch surface (C7).

use std::io::{Read, Write};

use crate::bool_codec::BoolCodec;
use crate::error::{DecodeError, EncodeError};
use crate::float::{F32Codec, F64Codec};
use crate::signed::{I32Codec, I64Codec};
use crate::unsigned::{U32Codec, U64Codec};

/// Uniform encode/decode capability shared by every scalar codec in this
/// crate.
///
/// A `Codec` is stateless and may be a process-wide constant; nothing about
/// a call depends on prior calls.
pub trait Codec {
    /// The typed value this codec encodes and decodes.
    type Value;

    /// Number of bytes every encoding of this codec occupies.
    const WIDTH: usize;

    /// Appends the encoded form of `value` to `w`.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError`] if `w` rejects the write.
    fn encode<W: Write>(&self, w: &mut W, value: Self::Value) -> Result<(), EncodeError>;

    /// Consumes exactly `WIDTH` bytes from `r` and reconstructs the value.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] if fewer than `WIDTH` bytes remain in `r`.
    fn decode<R: Read>(&self, r: &mut R) -> Result<Self::Value, DecodeError>;
}

/// A closed tagged variant over the scalar codecs, for composing
/// heterogeneous keys whose shape is only known at run time.
///
/// Concatenating the `encode` output of a slice of `KeyPart`s in order
/// preserves the order of the typed tuple they represent (P5), since each
/// component is fixed-width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyPart {
    /// A boolean component, encoded with [`BoolCodec`].
    Bool(bool),
    /// A `u32` component, encoded with [`U32Codec`].
    U32(u32),
    /// A `u64` component, encoded with [`U64Codec`].
    U64(u64),
    /// An `i32` component, encoded with [`I32Codec`].
    I32(i32),
    /// An `i64` component, encoded with [`I64Codec`].
    I64(i64),
    /// An `f32` component, encoded with [`F32Codec`].
    F32(f32),
    /// An `f64` component, encoded with [`F64Codec`].
    F64(f64),
}

impl KeyPart {
    /// Appends this part's encoded bytes to `w`.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError`] if `w` rejects the write.
    pub fn encode<W: Write>(&self, w: &mut W) -> Result<(), EncodeError> {
        match *self {
            KeyPart::Bool(v) => BoolCodec.encode(w, v),
            KeyPart::U32(v) => U32Codec.encode(w, v),
            KeyPart::U64(v) => U64Codec.encode(w, v),
            KeyPart::I32(v) => I32Codec.encode(w, v),
            KeyPart::I64(v) => I64Codec.encode(w, v),
            KeyPart::F32(v) => F32Codec.encode(w, v),
            KeyPart::F64(v) => F64Codec.encode(w, v),
        }
    }

    /// The fixed width this part will occupy once encoded.
    pub fn width(&self) -> usize {
        match self {
            KeyPart::Bool(_) => 1,
            KeyPart::U32(_) | KeyPart::I32(_) | KeyPart::F32(_) => 4,
            KeyPart::U64(_) | KeyPart::I64(_) | KeyPart::F64(_) => 8,
        }
    }
}

/// Encodes a composite key by concatenating each part's encoding in order.
///
/// # Errors
///
/// Returns [`EncodeError`] if `w` rejects the write.
pub fn encode_key<W: Write>(w: &mut W, parts: &[KeyPart]) -> Result<(), EncodeError> {
    for part in parts {
        part.encode(w)?;
    }
    Ok(())
}

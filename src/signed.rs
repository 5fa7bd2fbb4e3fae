//! Signed fixed-width integer codecs (C4).
//!
//! Flipping the sign bit of a two's-complement integer is exactly adding
//! `2^(W-1)` modulo `2^W`; it maps `[i_min, i_max]` monotonically onto
//! `[0, 2^W-1]` so unsigned byte order matches signed order.

use std::io::{Read, Write};

use crate::codec::Codec;
use crate::error::{DecodeError, EncodeError};
use crate::raw::{read_be_uint, write_be_uint};

const SIGN32: u32 = 1 << 31;
const SIGN64: u64 = 1 << 63;

/// `i32` codec, 4 bytes, big-endian with sign bit flipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct I32Codec;

impl Codec for I32Codec {
    type Value = i32;
    const WIDTH: usize = 4;

    /// # Errors
    ///
    /// Returns [`EncodeError`] if `w` rejects the write.
    fn encode<W: Write>(&self, w: &mut W, value: i32) -> Result<(), EncodeError> {
        let biased = (value as u32) ^ SIGN32;
        write_be_uint(w, biased as u64, Self::WIDTH)
    }

    /// # Errors
    ///
    /// Returns [`DecodeError`] if fewer than 4 bytes remain in `r`.
    fn decode<R: Read>(&self, r: &mut R) -> Result<i32, DecodeError> {
        let raw = read_be_uint(r, Self::WIDTH)? as u32;
        Ok((raw ^ SIGN32) as i32)
    }
}

/// `i64` codec, 8 bytes, big-endian with sign bit flipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct I64Codec;

impl Codec for I64Codec {
    type Value = i64;
    const WIDTH: usize = 8;

    /// # Errors
    ///
    /// Returns [`EncodeError`] if `w` rejects the write.
    fn encode<W: Write>(&self, w: &mut W, value: i64) -> Result<(), EncodeError> {
        let biased = (value as u64) ^ SIGN64;
        write_be_uint(w, biased, Self::WIDTH)
    }

    /// # Errors
    ///
    /// Returns [`DecodeError`] if fewer than 8 bytes remain in `r`.
    fn decode<R: Read>(&self, r: &mut R) -> Result<i64, DecodeError> {
        let raw = read_be_uint(r, Self::WIDTH)?;
        Ok((raw ^ SIGN64) as i64)
    }
}

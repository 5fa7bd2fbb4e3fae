//! Unsigned fixed-width integer codecs (C3).
//!
//! Identity mapping to big-endian bytes: unsigned natural order is already
//! unsigned lexicographic byte order.

use std::io::{Read, Write};

use crate::codec::Codec;
use crate::error::{DecodeError, EncodeError};
use crate::raw::{read_be_uint, write_be_uint};

/// `u32` codec, 4 bytes, big-endian, no transform.
#[derive(Debug, Clone, Copy, Default)]
pub struct U32Codec;

impl Codec for U32Codec {
    type Value = u32;
    const WIDTH: usize = 4;

    /// # Errors
    ///
    /// Returns [`EncodeError`] if `w` rejects the write.
    fn encode<W: Write>(&self, w: &mut W, value: u32) -> Result<(), EncodeError> {
        write_be_uint(w, value as u64, Self::WIDTH)
    }

    /// # Errors
    ///
    /// Returns [`DecodeError`] if fewer than 4 bytes remain in `r`.
    fn decode<R: Read>(&self, r: &mut R) -> Result<u32, DecodeError> {
        Ok(read_be_uint(r, Self::WIDTH)? as u32)
    }
}

/// `u64` codec, 8 bytes, big-endian, no transform.
#[derive(Debug, Clone, Copy, Default)]
pub struct U64Codec;

impl Codec for U64Codec {
    type Value = u64;
    const WIDTH: usize = 8;

    /// # Errors
    ///
    /// Returns [`EncodeError`] if `w` rejects the write.
    fn encode<W: Write>(&self, w: &mut W, value: u64) -> Result<(), EncodeError> {
        write_be_uint(w, value, Self::WIDTH)
    }

    /// # Errors
    ///
    /// Returns [`DecodeError`] if fewer than 8 bytes remain in `r`.
    fn decode<R: Read>(&self, r: &mut R) -> Result<u64, DecodeError> {
        read_be_uint(r, Self::WIDTH)
    }
}

//! Boolean codec (C2).

use std::io::{Read, Write};

use crate::codec::Codec;
use crate::error::{DecodeError, EncodeError};
use crate::raw::{read_be_uint, write_be_uint};

/// Encodes `false` as `0x00` and `true` as `0x01`.
///
/// Decode accepts any nonzero byte as `true` — round-trip holds, but two
/// distinct byte strings can decode to the same boolean. Callers that need
/// canonical encodings must check for that themselves.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoolCodec;

impl Codec for BoolCodec {
    type Value = bool;
    const WIDTH: usize = 1;

    /// # Errors
    ///
    /// Returns [`EncodeError`] if `w` rejects the write.
    fn encode<W: Write>(&self, w: &mut W, value: bool) -> Result<(), EncodeError> {
        write_be_uint(w, if value { 1 } else { 0 }, Self::WIDTH)
    }

    /// # Errors
    ///
    /// Returns [`DecodeError`] if no byte remains in `r`.
    fn decode<R: Read>(&self, r: &mut R) -> Result<bool, DecodeError> {
        Ok(read_be_uint(r, Self::WIDTH)? != 0)
    }
}

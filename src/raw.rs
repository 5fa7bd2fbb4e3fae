//! Raw big-endian fixed-width stream operations (C1).
//!
//! Every scalar codec bottoms out here: append or consume the low `width`
//! bytes of a 64-bit unsigned accumulator, most-significant byte first.

use std::io::{Read, Write};

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

use crate::error::{DecodeError, EncodeError};

/// Appends the low `width` bytes of `value`, MSB first.
///
/// `width` must be in `1..=8`; this module is only ever called with the
/// widths the scalar codecs declare (1, 2, 4, 8).
///
/// # Errors
///
/// Returns [`EncodeError`] if `w` rejects the write.
pub(crate) fn write_be_uint<W: Write>(w: &mut W, value: u64, width: usize) -> Result<(), EncodeError> {
    w.write_uint::<BigEndian>(value, width)?;
    Ok(())
}

/// Reads `width` bytes MSB-first into the low bits of a `u64`, zero-extending.
///
/// # Errors
///
/// Returns [`DecodeError`] if fewer than `width` bytes remain in `r`.
pub(crate) fn read_be_uint<R: Read>(r: &mut R, width: usize) -> Result<u64, DecodeError> {
    let value = r.read_uint::<BigEndian>(width)?;
    Ok(value)
}

//! Ordinal codec (C6) — 2-byte big-endian index into a declared variant
//! table.

use std::io::{Read, Write};

use crate::error::{DecodeError, EncodeError};
use crate::raw::{read_be_uint, write_be_uint};

const WIDTH: usize = 2;

/// Implemented by enumerations that can be encoded as a 2-byte ordinal.
///
/// Unlike the scalar `Codec`s, this trait is implemented by the caller's
/// own type rather than by a codec provided here, since the variant table
/// and its declared order is application-specific.
pub trait Ordinal {
    /// The 0-based index of this value within its declared variant order.
    fn ordinal(&self) -> u16;
}

/// Codec for a user-declared variant table `V = [v_0, ..., v_{n-1}]`,
/// `n < 2^16`.
///
/// Encode never searches the table or fails: it writes `value.ordinal()`
/// directly. Decode looks the index up in the table and reports
/// `DecodeError::CorruptKey` if it falls outside `0..n`.
pub struct OrdinalCodec<T> {
    variants: Vec<T>,
}

impl<T: Clone> OrdinalCodec<T> {
    /// Builds a codec over `variants`, in the order their ordinals refer to.
    pub fn new(variants: Vec<T>) -> Self {
        OrdinalCodec { variants }
    }

    /// Number of declared variants.
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// Returns `true` when no variants are declared.
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Appends the 2-byte big-endian ordinal of `value`.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError`] if `w` rejects the write.
    pub fn encode<W: Write>(&self, w: &mut W, value: &T) -> Result<(), EncodeError>
    where
        T: Ordinal,
    {
        write_be_uint(w, value.ordinal() as u64, WIDTH)
    }

    /// Reads a 2-byte ordinal and returns the corresponding variant.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::ShortRead`] if fewer than 2 bytes remain in
    /// `r`, or [`DecodeError::CorruptKey`] if the decoded index falls
    /// outside the declared variant table.
    pub fn decode<R: Read>(&self, r: &mut R) -> Result<T, DecodeError> {
        let index = read_be_uint(r, WIDTH)? as u16;
        self.variants
            .get(index as usize)
            .cloned()
            .ok_or(DecodeError::CorruptKey {
                index,
                len: self.variants.len(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Color {
        Red,
        Green,
        Blue,
    }

    impl Ordinal for Color {
        fn ordinal(&self) -> u16 {
            match self {
                Color::Red => 0,
                Color::Green => 1,
                Color::Blue => 2,
            }
        }
    }

    fn codec() -> OrdinalCodec<Color> {
        OrdinalCodec::new(vec![Color::Red, Color::Green, Color::Blue])
    }

    #[test]
    fn encode_green_golden_vector() {
        let mut buf = Vec::new();
        codec().encode(&mut buf, &Color::Green).unwrap();
        assert_eq!(buf, [0x00, 0x01]);
    }

    #[test]
    fn decode_out_of_range_is_corrupt_key() {
        let codec = codec();
        let mut cursor = &[0x00u8, 0x03][..];
        let err = codec.decode(&mut cursor).unwrap_err();
        match err {
            DecodeError::CorruptKey { index, len } => {
                assert_eq!(index, 3);
                assert_eq!(len, 3);
            }
            _ => panic!("expected CorruptKey"),
        }
    }

    #[test]
    fn roundtrip_all_variants() {
        let codec = codec();
        for variant in [Color::Red, Color::Green, Color::Blue] {
            let mut buf = Vec::new();
            codec.encode(&mut buf, &variant).unwrap();
            let mut cursor = &buf[..];
            assert_eq!(codec.decode(&mut cursor).unwrap(), variant);
        }
    }

    #[test]
    fn order_matches_declared_variant_order() {
        let codec = codec();
        let mut red = Vec::new();
        codec.encode(&mut red, &Color::Red).unwrap();
        let mut blue = Vec::new();
        codec.encode(&mut blue, &Color::Blue).unwrap();
        assert!(red < blue);
    }
}

use std::io;

/// Failure while appending an encoded key to a writer.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    /// The writer rejected the bytes (e.g. out of space).
    #[error("failed to write encoded key bytes")]
    WriterFailure(#[from] io::Error),
}

/// Failure while reconstructing a typed value from an encoded key.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// Fewer bytes remained in the reader than the codec's fixed width.
    #[error("short read while decoding a fixed-width key")]
    ShortRead(#[from] io::Error),

    /// An ordinal codec read an index outside its declared variant table.
    #[error("ordinal index {index} is out of range for {len} declared variants")]
    CorruptKey { index: u16, len: usize },
}

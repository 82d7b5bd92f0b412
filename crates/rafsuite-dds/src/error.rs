//! Error types for DDS decoding.

use thiserror::Error;

/// Fatal errors that abort decoding of a DDS buffer.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The buffer does not start with `"DDS "`.
    #[error("invalid DDS magic: expected 'DDS ', got {0:?}")]
    BadMagic([u8; 4]),

    /// The pixel format block does not declare a size of 32.
    #[error("invalid pixel format size: expected 32, got {0}")]
    BadPixelFormatSize(u32),

    /// The caps field lacks the TEXTURE bit.
    #[error("only textures supported (caps {0:#010x})")]
    UnsupportedCaps(u32),

    /// The buffer ended inside the fixed header layout.
    #[error("buffer too short: needed {needed} bytes but only {available} available")]
    BufferTooShort { needed: usize, available: usize },

    /// The data after the header is smaller than the level-0 block grid.
    #[error("block data too short: needed {needed} bytes but only {available} available")]
    BlockDataTooShort { needed: usize, available: usize },

    /// Common library error other than a short read.
    ///
    /// The header holds only fixed-width fields, so [`decode`](crate::decode)
    /// never returns this; it keeps the conversion from the reader error total.
    #[error("{0}")]
    Common(rafsuite_common::Error),
}

impl From<rafsuite_common::Error> for FormatError {
    fn from(err: rafsuite_common::Error) -> Self {
        match err {
            rafsuite_common::Error::UnexpectedEof { needed, available } => {
                Self::BufferTooShort { needed, available }
            }
            other => Self::Common(other),
        }
    }
}

/// Result type for DDS operations.
pub type Result<T> = std::result::Result<T, FormatError>;

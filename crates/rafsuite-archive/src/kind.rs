//! File kinds and per-kind decoding.

use std::path::Path;

use rafsuite_dds::DecodedTexture;

use crate::entry::CacheEntryRecord;
use crate::Result;

/// How an entry's payload is interpreted, chosen from its path extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// Opaque bytes.
    Raw,
    /// A DDS texture.
    DdsTexture,
}

impl EntryKind {
    /// Pick the kind for a path by its extension, case-insensitively.
    pub fn from_path(path: &str) -> Self {
        // Archive paths may use either separator.
        let normalized = path.replace('\\', "/");
        match Path::new(&normalized)
            .extension()
            .and_then(|ext| ext.to_str())
        {
            Some(ext) if ext.eq_ignore_ascii_case("dds") => Self::DdsTexture,
            _ => Self::Raw,
        }
    }
}

/// A cache entry tagged with its kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Raw(CacheEntryRecord),
    DdsTexture(CacheEntryRecord),
}

/// The result of decoding an [`Entry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedEntry<'a> {
    /// Raw entries decode to their bytes unchanged.
    Raw(&'a [u8]),
    /// DDS entries decode to a header and optional image.
    Texture(Box<DecodedTexture>),
}

impl Entry {
    /// Tag a record with an explicit kind.
    pub fn new(kind: EntryKind, record: CacheEntryRecord) -> Self {
        match kind {
            EntryKind::Raw => Self::Raw(record),
            EntryKind::DdsTexture => Self::DdsTexture(record),
        }
    }

    /// Tag a record with the kind implied by its path.
    pub fn for_path(path: &str, record: CacheEntryRecord) -> Self {
        Self::new(EntryKind::from_path(path), record)
    }

    /// The entry's kind.
    pub fn kind(&self) -> EntryKind {
        match self {
            Self::Raw(_) => EntryKind::Raw,
            Self::DdsTexture(_) => EntryKind::DdsTexture,
        }
    }

    /// The underlying record.
    pub fn record(&self) -> &CacheEntryRecord {
        match self {
            Self::Raw(record) | Self::DdsTexture(record) => record,
        }
    }

    /// Unwrap the underlying record.
    pub fn into_record(self) -> CacheEntryRecord {
        match self {
            Self::Raw(record) | Self::DdsTexture(record) => record,
        }
    }

    /// Decode the payload according to the entry's kind.
    pub fn decode(&self) -> Result<DecodedEntry<'_>> {
        match self {
            Self::Raw(record) => Ok(DecodedEntry::Raw(record.file_data())),
            Self::DdsTexture(record) => {
                tracing::debug!(hash = record.hash(), size = record.data_size(), "decoding DDS entry");
                let texture = rafsuite_dds::decode(record.file_data())?;
                Ok(DecodedEntry::Texture(Box::new(texture)))
            }
        }
    }
}

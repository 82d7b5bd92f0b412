//! RAF cache entry record.

use rafsuite_common::BinaryReader;
use zerocopy::little_endian::U32;
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

use crate::{Error, Result};

/// The 16-byte on-disk form of an entry in a container's file table.
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C)]
pub struct RawEntryRecord {
    /// Hash of the entry's path.
    pub hash: U32,
    /// Offset into the data file.
    pub data_offset: U32,
    /// Stored length in the data file.
    pub data_size: U32,
    /// Index into the path list.
    pub path_list_index: U32,
}

impl RawEntryRecord {
    /// Size of one record in bytes.
    pub const SIZE: usize = 16;
}

/// One logical file inside a RAF cache container.
///
/// The four index fields are fixed at construction. The payload buffer
/// starts as `data_size` zero bytes and is filled once by the container
/// reader through [`populate`](Self::populate).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntryRecord {
    /// Hash of the path, the container's lookup key.
    hash: u32,
    /// Offset into the container's data section.
    data_offset: u32,
    /// Length of the stored payload.
    data_size: u32,
    /// Index into the container's path list.
    path_list_index: u32,
    /// Payload bytes.
    file_data: Vec<u8>,
    /// Whether `populate` has installed real data.
    populated: bool,
}

impl CacheEntryRecord {
    /// Create a record with a zero-filled payload of `data_size` bytes.
    pub fn new(hash: u32, data_offset: u32, data_size: u32, path_list_index: u32) -> Self {
        Self {
            hash,
            data_offset,
            data_size,
            path_list_index,
            file_data: vec![0; data_size as usize],
            populated: false,
        }
    }

    /// Read one 16-byte little-endian table record.
    pub fn read_from(reader: &mut BinaryReader<'_>) -> Result<Self> {
        let raw: RawEntryRecord = reader.read_struct()?;
        Ok(Self::from(raw))
    }

    /// Read `count` consecutive table records.
    pub fn read_table(reader: &mut BinaryReader<'_>, count: usize) -> Result<Vec<Self>> {
        (0..count).map(|_| Self::read_from(reader)).collect()
    }

    /// Get the path hash.
    #[inline]
    pub fn hash(&self) -> u32 {
        self.hash
    }

    /// Get the offset into the data section.
    #[inline]
    pub fn data_offset(&self) -> u32 {
        self.data_offset
    }

    /// Get the stored payload length.
    #[inline]
    pub fn data_size(&self) -> u32 {
        self.data_size
    }

    /// Get the path list index.
    #[inline]
    pub fn path_list_index(&self) -> u32 {
        self.path_list_index
    }

    /// Get the payload bytes, suitable for writing out verbatim.
    #[inline]
    pub fn file_data(&self) -> &[u8] {
        &self.file_data
    }

    /// Check if real data has been installed.
    #[inline]
    pub fn is_populated(&self) -> bool {
        self.populated
    }

    /// Install the payload read by the container reader.
    ///
    /// The length must equal [`data_size`](Self::data_size).
    pub fn populate(&mut self, data: Vec<u8>) -> Result<()> {
        if data.len() != self.data_size as usize {
            return Err(Error::DataSizeMismatch {
                expected: self.data_size,
                actual: data.len(),
            });
        }
        self.file_data = data;
        self.populated = true;
        Ok(())
    }

    /// Take ownership of the payload bytes.
    pub fn into_file_data(self) -> Vec<u8> {
        self.file_data
    }
}

impl From<RawEntryRecord> for CacheEntryRecord {
    fn from(raw: RawEntryRecord) -> Self {
        Self::new(
            raw.hash.get(),
            raw.data_offset.get(),
            raw.data_size.get(),
            raw.path_list_index.get(),
        )
    }
}

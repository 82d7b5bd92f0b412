//! Ordered path strings shared by the entries of one container.

use rafsuite_common::BinaryReader;

use crate::entry::CacheEntryRecord;
use crate::{Error, Result};

/// The path list of one container generation.
///
/// Entries refer to their path by position, see
/// [`CacheEntryRecord::path_list_index`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathList {
    paths: Vec<String>,
}

impl PathList {
    /// Wrap an already ordered list of paths.
    pub fn new(paths: Vec<String>) -> Self {
        Self { paths }
    }

    /// Read `count` consecutive NUL-terminated paths.
    pub fn parse(data: &[u8], count: usize) -> Result<Self> {
        let mut reader = BinaryReader::new(data);
        let paths = (0..count)
            .map(|_| reader.read_cstring().map(str::to_owned))
            .collect::<rafsuite_common::Result<Vec<_>>>()?;
        Ok(Self { paths })
    }

    /// Number of paths.
    #[inline]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Check if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Get a path by index.
    pub fn get(&self, index: u32) -> Result<&str> {
        self.paths
            .get(index as usize)
            .map(String::as_str)
            .ok_or(Error::PathIndexOutOfRange {
                index,
                count: self.paths.len(),
            })
    }

    /// Resolve the path of a record.
    pub fn resolve(&self, record: &CacheEntryRecord) -> Result<&str> {
        self.get(record.path_list_index())
    }

    /// Iterate over the paths in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }
}

//! Versions of one logical file across release archives.

use crate::entry::CacheEntryRecord;

/// The records of one path, keyed by the archive that holds them.
///
/// Archives are kept in insertion order; the last one inserted is treated
/// as the current release.
#[derive(Debug, Clone, Default)]
pub struct EntryHistory {
    versions: Vec<(String, CacheEntryRecord)>,
}

impl EntryHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the record held by `archive`.
    ///
    /// Replacing keeps the archive's original position.
    pub fn insert(&mut self, archive: impl Into<String>, record: CacheEntryRecord) {
        let archive = archive.into();
        match self.versions.iter_mut().find(|(name, _)| *name == archive) {
            Some((_, existing)) => *existing = record,
            None => self.versions.push((archive, record)),
        }
    }

    /// The record from the most recently added archive.
    pub fn latest(&self) -> Option<(&str, &CacheEntryRecord)> {
        self.versions
            .last()
            .map(|(name, record)| (name.as_str(), record))
    }

    /// The record held by a specific archive.
    pub fn get(&self, archive: &str) -> Option<&CacheEntryRecord> {
        self.versions
            .iter()
            .find(|(name, _)| name == archive)
            .map(|(_, record)| record)
    }

    /// Archive names in insertion order.
    pub fn archives(&self) -> impl Iterator<Item = &str> {
        self.versions.iter().map(|(name, _)| name.as_str())
    }

    /// Number of archives holding this file.
    #[inline]
    pub fn len(&self) -> usize {
        self.versions.len()
    }

    /// Check if no archive holds this file.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }
}

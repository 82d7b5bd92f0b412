//! RAF cache entries.
//!
//! A RAF container indexes its files with fixed 16-byte records (path hash,
//! data offset, data size, path list index). Locating and reading the data
//! is the container reader's job; this crate models what it hands over:
//!
//! - [`CacheEntryRecord`] - index fields plus the owned payload
//! - [`PathList`] - the ordered paths records point into
//! - [`EntryHistory`] - one file's records across release archives
//! - [`Entry`] - a record tagged with its kind, decoded by pattern matching
//!
//! # Example
//!
//! ```no_run
//! use rafsuite_archive::{CacheEntryRecord, DecodedEntry, Entry, PathList};
//!
//! # fn read_payload(_: &CacheEntryRecord) -> Vec<u8> { Vec::new() }
//! let paths = PathList::new(vec!["DATA/Characters/Annie/Annie.dds".into()]);
//! let mut record = CacheEntryRecord::new(0x0A1B2C3D, 0, 4224, 0);
//! record.populate(read_payload(&record))?;
//!
//! let entry = Entry::for_path(paths.resolve(&record)?, record);
//! if let DecodedEntry::Texture(texture) = entry.decode()? {
//!     println!("{} {}x{}", texture.format, texture.header.width, texture.header.height);
//! }
//! # Ok::<(), rafsuite_archive::Error>(())
//! ```

mod entry;
mod error;
mod history;
mod kind;
mod path_list;

pub use entry::{CacheEntryRecord, RawEntryRecord};
pub use error::{Error, Result};
pub use history::EntryHistory;
pub use kind::{DecodedEntry, Entry, EntryKind};
pub use path_list::PathList;

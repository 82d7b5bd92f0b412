//! Common utilities for RAF Suite.
//!
//! This crate provides the foundational pieces shared by the archive and
//! texture crates:
//!
//! - [`BinaryReader`] - Bounds-checked little-endian reading from byte slices
//! - [`Error`] - Errors raised while reading fixed binary layouts

mod error;
mod reader;

pub use error::{Error, Result};
pub use reader::BinaryReader;

//! Minimal ZIP archive writer for Office document packages.
//!
//! This crate produces uncompressed ("stored", method 0) ZIP archives with
//! the exact record layout OOXML consumers expect: local file records,
//! a central directory, and an end-of-central-directory record. Storing
//! entries verbatim trades file size for byte-level determinism, which is
//! what a document generator wants — the same inputs and timestamp always
//! produce the same archive.
//!
//! # Quick Start
//!
//! ```rust
//! use marula_zip::ArchiveWriter;
//!
//! let mut writer = ArchiveWriter::new();
//! writer.write_stored("word/document.xml", b"<w:document/>")?;
//! let bytes = writer.finish_to_bytes()?;
//! assert_eq!(&bytes[0..4], &[0x50, 0x4b, 0x03, 0x04]);
//! # Ok::<(), marula_zip::Error>(())
//! ```
#![forbid(unsafe_code)]

mod crc;
mod errors;
mod headers;
mod time;
mod writer;

pub use crc::crc32;
pub use errors::{Error, ErrorKind};
pub use time::DosDateTime;
pub use writer::ArchiveWriter;

//! Stored-only ZIP archive writer.

use crate::crc::crc32;
use crate::errors::{Error, ErrorKind};
use crate::headers::{
    CENTRAL_FILE_HEADER_LEN, CENTRAL_FILE_HEADER_SIGNATURE, END_OF_CENTRAL_DIR_LEN,
    END_OF_CENTRAL_DIR_SIGNATURE, LOCAL_FILE_HEADER_LEN, LOCAL_FILE_HEADER_SIGNATURE,
    METHOD_STORED, VERSION_MADE_BY, VERSION_NEEDED,
};
use crate::time::DosDateTime;
use std::io::Write;

/// In-memory writer that serializes named byte buffers into a single
/// stored-only ZIP archive.
///
/// Entries are emitted in insertion order: all local file records first,
/// then a central directory record per entry in the same order, then the
/// end-of-central-directory record. Every entry shares one DOS timestamp,
/// sampled when the writer is created (or supplied via
/// [`ArchiveWriter::with_timestamp`]).
///
/// # Examples
///
/// ```rust
/// use marula_zip::ArchiveWriter;
///
/// let mut writer = ArchiveWriter::new();
/// writer.write_stored("[Content_Types].xml", b"<Types/>")?;
/// writer.write_stored("word/document.xml", b"<w:document/>")?;
/// let bytes = writer.finish_to_bytes()?;
/// # Ok::<(), marula_zip::Error>(())
/// ```
pub struct ArchiveWriter {
    entries: Vec<Entry>,
    timestamp: DosDateTime,
}

struct Entry {
    name: String,
    data: Vec<u8>,
    crc: u32,
}

impl ArchiveWriter {
    /// Create a writer stamped with the current wall-clock time.
    pub fn new() -> Self {
        Self::with_timestamp(DosDateTime::now())
    }

    /// Create a writer with an explicit shared timestamp.
    ///
    /// Useful when the archive is one artifact of a larger build that
    /// samples the clock once, and in tests that need reproducible bytes.
    pub fn with_timestamp(timestamp: DosDateTime) -> Self {
        Self {
            entries: Vec::new(),
            timestamp,
        }
    }

    /// Number of entries added so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether any entries have been added.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append an entry without compression.
    ///
    /// Names must be non-empty, unique, and use `/` as the path separator.
    /// Violations are programmer errors (the entry set of a document
    /// package is fixed by its generator, not by end users) and fail
    /// loudly rather than truncating the archive.
    pub fn write_stored(&mut self, name: &str, data: &[u8]) -> Result<(), Error> {
        if name.is_empty() {
            return Err(ErrorKind::EmptyFileName.into());
        }
        if name.contains('\0') || name.contains('\\') {
            return Err(ErrorKind::InvalidFileName(name.to_string()).into());
        }
        if self.entries.iter().any(|entry| entry.name == name) {
            return Err(ErrorKind::DuplicateFileName(name.to_string()).into());
        }
        if self.entries.len() >= u16::MAX as usize {
            return Err(ErrorKind::TooManyEntries(self.entries.len() + 1).into());
        }
        if data.len() as u64 > u32::MAX as u64 {
            return Err(ErrorKind::EntryTooLarge {
                name: name.to_string(),
                size: data.len() as u64,
            }
            .into());
        }

        self.entries.push(Entry {
            name: name.to_string(),
            data: data.to_vec(),
            crc: crc32(data),
        });
        Ok(())
    }

    /// Serialize the archive and return its bytes.
    pub fn finish_to_bytes(self) -> Result<Vec<u8>, Error> {
        let capacity: usize = self
            .entries
            .iter()
            .map(|entry| {
                LOCAL_FILE_HEADER_LEN
                    + CENTRAL_FILE_HEADER_LEN
                    + 2 * entry.name.len()
                    + entry.data.len()
            })
            .sum::<usize>()
            + END_OF_CENTRAL_DIR_LEN;
        let mut out = Vec::with_capacity(capacity);

        // Local file records, tracking each record's offset from the
        // start of the archive for the central directory.
        let mut offsets = Vec::with_capacity(self.entries.len());
        for entry in &self.entries {
            offsets.push(checked_offset(out.len())?);

            put_u32(&mut out, LOCAL_FILE_HEADER_SIGNATURE);
            put_u16(&mut out, VERSION_NEEDED);
            put_u16(&mut out, 0); // general purpose flags
            put_u16(&mut out, METHOD_STORED);
            put_u16(&mut out, self.timestamp.time);
            put_u16(&mut out, self.timestamp.date);
            put_u32(&mut out, entry.crc);
            put_u32(&mut out, entry.data.len() as u32); // compressed size
            put_u32(&mut out, entry.data.len() as u32); // uncompressed size
            put_u16(&mut out, entry.name.len() as u16);
            put_u16(&mut out, 0); // extra field length
            out.extend_from_slice(entry.name.as_bytes());
            out.extend_from_slice(&entry.data);
        }

        // Central directory, one record per entry in the same order.
        let central_start = checked_offset(out.len())?;
        for (entry, offset) in self.entries.iter().zip(&offsets) {
            put_u32(&mut out, CENTRAL_FILE_HEADER_SIGNATURE);
            put_u16(&mut out, VERSION_MADE_BY);
            put_u16(&mut out, VERSION_NEEDED);
            put_u16(&mut out, 0); // general purpose flags
            put_u16(&mut out, METHOD_STORED);
            put_u16(&mut out, self.timestamp.time);
            put_u16(&mut out, self.timestamp.date);
            put_u32(&mut out, entry.crc);
            put_u32(&mut out, entry.data.len() as u32);
            put_u32(&mut out, entry.data.len() as u32);
            put_u16(&mut out, entry.name.len() as u16);
            put_u16(&mut out, 0); // extra field length
            put_u16(&mut out, 0); // comment length
            put_u16(&mut out, 0); // disk number start
            put_u16(&mut out, 0); // internal attributes
            put_u32(&mut out, 0); // external attributes
            put_u32(&mut out, *offset);
            out.extend_from_slice(entry.name.as_bytes());
        }
        let central_size = checked_offset(out.len())? - central_start;

        // End of central directory record (single-disk archive).
        let entry_count = self.entries.len() as u16;
        put_u32(&mut out, END_OF_CENTRAL_DIR_SIGNATURE);
        put_u16(&mut out, 0); // this disk
        put_u16(&mut out, 0); // disk where the central directory starts
        put_u16(&mut out, entry_count);
        put_u16(&mut out, entry_count);
        put_u32(&mut out, central_size);
        put_u32(&mut out, central_start);
        put_u16(&mut out, 0); // comment length

        Ok(out)
    }

    /// Serialize the archive into any writer.
    pub fn finish_to<W: Write>(self, mut writer: W) -> Result<(), Error> {
        let bytes = self.finish_to_bytes()?;
        writer.write_all(&bytes)?;
        Ok(())
    }
}

impl Default for ArchiveWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
fn put_u16(out: &mut Vec<u8>, value: u16) {
    out.extend_from_slice(&value.to_le_bytes());
}

#[inline]
fn put_u32(out: &mut Vec<u8>, value: u32) {
    out.extend_from_slice(&value.to_le_bytes());
}

#[inline]
fn checked_offset(position: usize) -> Result<u32, Error> {
    u32::try_from(position).map_err(|_| ErrorKind::ArchiveTooLarge(position as u64).into())
}

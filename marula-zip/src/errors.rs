use std::fmt;

/// Error type for archive writing.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
}

impl Error {
    /// The kind of failure this error represents.
    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

/// The set of ways writing an archive can fail.
///
/// Every variant is a caller-side invariant violation or an I/O failure;
/// the writer itself never degrades an archive silently.
#[derive(Debug)]
pub enum ErrorKind {
    /// An entry was added with an empty file name.
    EmptyFileName,
    /// An entry file name contains a byte the ZIP format forbids.
    InvalidFileName(String),
    /// Two entries were added under the same name.
    DuplicateFileName(String),
    /// More entries than the 16-bit EOCD count fields can record.
    TooManyEntries(usize),
    /// An entry's data exceeds the 32-bit size fields (no ZIP64 support).
    EntryTooLarge { name: String, size: u64 },
    /// The archive as a whole outgrew the 32-bit offset fields.
    ArchiveTooLarge(u64),
    /// An underlying I/O failure while writing out the archive.
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::EmptyFileName => write!(f, "entry file name is empty"),
            ErrorKind::InvalidFileName(name) => {
                write!(f, "entry file name {:?} contains forbidden bytes", name)
            }
            ErrorKind::DuplicateFileName(name) => {
                write!(f, "duplicate entry file name {:?}", name)
            }
            ErrorKind::TooManyEntries(count) => {
                write!(f, "{} entries exceed the 16-bit entry count", count)
            }
            ErrorKind::EntryTooLarge { name, size } => {
                write!(f, "entry {:?} is {} bytes, beyond 32-bit sizes", name, size)
            }
            ErrorKind::ArchiveTooLarge(size) => {
                write!(f, "archive grew to {} bytes, beyond 32-bit offsets", size)
            }
            ErrorKind::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ErrorKind::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self { kind }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self {
            kind: ErrorKind::Io(err),
        }
    }
}

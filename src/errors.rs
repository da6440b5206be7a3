//! Various MP4-related errors.

use std::fmt;

/// Broad classification of an `Mp4Error`,
/// so that callers can tell a missing atom apart
/// from a corrupt buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Requested atom has no occurrence in the buffer.
    NotFound,
    /// Atom size, bounds, or table geometry does not add up.
    Malformed,
    /// Recognised atom without a decoder.
    Unsupported,
}

/// Various atom locate/read/decode errors.
#[derive(Debug)]
pub enum Mp4Error {
    /// Converted `BinResult` error,
    /// e.g. a field layout running past the atom's end.
    BinReadError(binrw::Error),
    /// No such atom.
    NoSuchAtom(String),
    /// Atom mismatch.
    AtomMismatch{got: String, expected: String},
    /// Declared atom size is negative, not larger than the 8 byte header,
    /// or otherwise unusable.
    UnexpectedAtomSize{len: i64, offset: usize},
    /// Out of bounds. Tried to read `got` with buffer length `max`.
    BoundsError((usize, usize)),
    /// Entry count and table byte size do not divide
    /// into whole, fixed-width records.
    TableMismatch{name: String, entries: u32, table_size: usize},
    /// Invalid FourCC, e.g. not exactly four single byte characters.
    InvalidFourCC(String),
    /// Recognised atom that is not decoded by this crate.
    Unsupported(String),
}

impl Mp4Error {
    /// Returns the error category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Mp4Error::NoSuchAtom(_) => ErrorKind::NotFound,
            Mp4Error::Unsupported(_) => ErrorKind::Unsupported,
            Mp4Error::BinReadError(_)
            | Mp4Error::AtomMismatch{..}
            | Mp4Error::UnexpectedAtomSize{..}
            | Mp4Error::BoundsError(_)
            | Mp4Error::TableMismatch{..}
            | Mp4Error::InvalidFourCC(_) => ErrorKind::Malformed,
        }
    }
}

impl std::error::Error for Mp4Error {}

impl fmt::Display for Mp4Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mp4Error::BinReadError(err) => write!(f, "{err}"),
            Mp4Error::NoSuchAtom(name) => write!(f, "No such atom {name}."),
            Mp4Error::AtomMismatch{got, expected} => write!(f, "Atom mismatch. Expected '{expected}', got '{got}'"),
            Mp4Error::UnexpectedAtomSize{len, offset} => write!(f, "Unexpected MP4 atom size of {len} bytes @ offset {offset}."),
            Mp4Error::BoundsError((got, max)) => write!(f, "Bounds error: tried to read buffer at {got} with max {max}."),
            Mp4Error::TableMismatch{name, entries, table_size} => write!(f, "Table in '{name}' does not divide into {entries} entries over {table_size} bytes."),
            Mp4Error::InvalidFourCC(fourcc) => write!(f, "Invalid FourCC '{fourcc}'"),
            Mp4Error::Unsupported(name) => write!(f, "Atom '{name}' is not supported."),
        }
    }
}

/// Converts Mp4Error to std::io::Error
impl From<Mp4Error> for std::io::Error {
    fn from(err: Mp4Error) -> Self {
        std::io::Error::new(std::io::ErrorKind::Other, err)
    }
}

/// Converts binrw::Error to Mp4Error
impl From<binrw::Error> for Mp4Error {
    fn from(err: binrw::Error) -> Mp4Error {
        Mp4Error::BinReadError(err)
    }
}

use std::ops::Range;

use crate::{FourCC, Mp4Error, CONTAINER, support::ReadBe};

/// Atom header, 8 bytes.
///
/// ```ignore
/// | [X X X X] [Y Y Y Y] |
///    |         |
///    |         FourCC
///    32bit size
/// ```
///
/// 64-bit sized atoms (size field `1`) and atoms extending
/// to the end of the file (size field `0`) are not supported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AtomHeader {
    /// Total atom size in bytes including 8 byte header.
    pub(crate) atom_size: u32,
    /// FourCC
    pub(crate) name: FourCC,
    /// Byte offset for start of atom in the buffer it was read from,
    /// i.e. byte offset for its header,
    /// starting with 32-bit size.
    pub(crate) offset: usize,
}

impl AtomHeader {
    /// Header size in bytes.
    pub const SIZE: usize = 8;

    /// Reads the header whose FourCC starts at `tag_offset`,
    /// with the 32-bit size in the four bytes preceding it.
    ///
    /// Fails if the size precedes the buffer, if the size
    /// is not larger than the header itself, or if the atom
    /// extends past the end of the buffer.
    pub fn read(data: &[u8], tag_offset: usize) -> Result<Self, Mp4Error> {
        let offset = tag_offset.checked_sub(4)
            .ok_or(Mp4Error::BoundsError((tag_offset, data.len())))?;

        let size = data.be_i32(offset)?;
        let name = FourCC::from_slice(&data.be_bytes::<4>(tag_offset)?);

        if size <= Self::SIZE as i32 {
            return Err(Mp4Error::UnexpectedAtomSize{len: size as i64, offset})
        }

        let end = offset + size as usize;
        if end > data.len() {
            return Err(Mp4Error::BoundsError((end, data.len())))
        }

        Ok(Self {
            atom_size: size as u32,
            name,
            offset,
        })
    }

    /// Convenience method to check whether atom
    /// is a container or not.
    pub fn is_container(&self) -> bool {
        CONTAINER.contains(&self.name.to_str())
    }

    pub fn start(&self) -> usize {
        self.offset
    }

    pub fn end(&self) -> usize {
        self.offset + self.atom_size as usize
    }

    pub fn atom_size(&self) -> u32 {
        self.atom_size
    }

    pub fn name(&self) -> &FourCC {
        &self.name
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Byte offset for the FourCC,
    /// i.e. the offset the locator reports.
    pub fn tag_offset(&self) -> usize {
        self.offset + 4
    }

    /// Data load offset,
    /// i.e. position after header.
    pub fn data_offset(&self) -> usize {
        self.offset + Self::SIZE
    }

    /// Size of data load
    /// (excludes header size).
    pub fn data_size(&self) -> usize {
        (self.atom_size as usize).saturating_sub(Self::SIZE)
    }

    /// Returns start, end offset range for atom.
    pub fn bounds(&self) -> Range<usize> {
        self.start() .. self.end()
    }

    /// Returns `true` is offset `pos`
    /// is contained within atom span.
    ///
    /// Inclusive lower bound, exclusive upper bound.
    pub fn contains(&self, pos: usize) -> bool {
        self.bounds().contains(&pos)
    }
}

/// Depth-first walk over the atom tree in a buffer.
/// Descends into atoms listed in `CONTAINER`, steps over all others.
///
/// Yields an error and stops at the first header
/// that can not be read, e.g. 64-bit sized atoms.
#[derive(Debug)]
pub struct Headers<'a> {
    data: &'a [u8],
    pos: usize,
    done: bool,
}

impl<'a> Headers<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            done: false,
        }
    }
}

impl<'a> Iterator for Headers<'a> {
    type Item = Result<AtomHeader, Mp4Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.pos + AtomHeader::SIZE > self.data.len() {
            return None
        }

        let header = match self.data.be_u32(self.pos) {
            Ok(0) => Err(Mp4Error::Unsupported("atom size 0 (extends to end of file)".to_owned())),
            Ok(1) => Err(Mp4Error::Unsupported("64-bit atom size".to_owned())),
            Ok(_) => AtomHeader::read(self.data, self.pos + 4),
            Err(err) => Err(err),
        };

        match &header {
            Ok(hdr) => {
                self.pos = match hdr.is_container() {
                    true => hdr.data_offset(),
                    false => hdr.end(),
                };
            },
            Err(_) => self.done = true,
        }

        Some(header)
    }
}

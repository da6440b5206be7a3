//! MP4 atom.

use std::io::Cursor;

use binrw::{BinRead, BinReaderExt};

use crate::{errors::Mp4Error, fourcc::FourCC, locate::find_fourcc, AtomDecode, Mp4};

use super::AtomHeader;

/// MP4 atom, as a view over its full extent
/// (8 byte header included) in the buffer it was located in.
#[derive(Debug, Clone)]
pub struct Atom<'a> {
    /// Header
    pub header: AtomHeader,
    /// Atom bytes, starting with the 32-bit size.
    data: &'a [u8],
}

impl<'a> Atom<'a> {
    /// Reads the atom whose FourCC starts at `tag_offset` in `data`
    /// (as reported by `find_tag_offsets()`).
    pub fn read(data: &'a [u8], tag_offset: usize) -> Result<Self, Mp4Error> {
        let header = AtomHeader::read(data, tag_offset)?;
        let data = &data[header.bounds()];
        Ok(Self { header, data })
    }

    /// First atom with specified name in `data`.
    pub fn find(name: &str, data: &'a [u8]) -> Result<Self, Mp4Error> {
        let fourcc = FourCC::from_str(name);
        let offset = find_fourcc(&fourcc, data)
            .first()
            .copied()
            .ok_or_else(|| Mp4Error::NoSuchAtom(name.to_owned()))?;
        Self::read(data, offset)
    }

    /// Total size of the atom in bytes.
    pub fn size(&self) -> u32 {
        self.header.atom_size
    }

    pub fn name(&self) -> &FourCC {
        &self.header.name
    }

    /// Atom bytes including header.
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Atom data load, excluding header.
    pub fn data_load(&self) -> &'a [u8] {
        &self.data[AtomHeader::SIZE ..]
    }

    /// A new view scoped to this atom,
    /// e.g. to search only inside a single `trak`.
    pub fn view(&self) -> Mp4<'a> {
        Mp4::new(self.data)
    }

    /// Ensures user specified name (Four CC),
    /// matches that of current `Atom`.
    pub(crate) fn match_name(&self, name: &str) -> Result<(), Mp4Error> {
        if self.header.name.to_str() != name {
            Err(Mp4Error::AtomMismatch{
                got: self.header.name.to_str().to_owned(),
                expected: name.to_owned()
            })
        } else {
            Ok(())
        }
    }

    /// Reader over the atom, positioned at `pos`
    /// relative to the start of the atom.
    pub(crate) fn cursor(&self, pos: usize) -> Cursor<&'a [u8]> {
        let mut cursor = Cursor::new(self.data);
        cursor.set_position(pos as u64);
        cursor
    }

    /// Read single Big Endian value at `pos`
    /// relative to the start of the atom.
    pub(crate) fn read_at<T>(&self, pos: usize) -> Result<T, Mp4Error>
        where
            T: BinRead,
            <T as BinRead>::Args<'static>: Sized + Clone + Default
    {
        self.cursor(pos).read_be::<T>().map_err(|e| e.into())
    }

    /// Decode the atom into `T` if `Atom.name` matches `T::NAME`.
    pub fn decode<T: AtomDecode>(&self) -> Result<T, Mp4Error> {
        self.match_name(T::NAME)?;
        T::from_atom(self)
    }
}

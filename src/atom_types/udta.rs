//! Custom user data atom (`udta`). Fields are borrowed from the
//! buffer as raw bytes.
//!
//! Fields are found by scanning the `udta` atom for each
//! known user data FourCC (see `consts::USER_DATA`), not by walking it.
//!
//! See: <https://developer.apple.com/library/archive/documentation/QuickTime/QTFF/QTFFChap2/qtff2.html#//apple_ref/doc/uid/TP40000939-CH204-SW1>

use std::io::Cursor;

use binrw::{BinRead, BinReaderExt, BinResult, Endian};

use crate::{consts::USER_DATA, fourcc::FourCC, locate::find_many, Atom, Mp4Error};

const NAME: &str = "udta";

/// User data atom.
/// Field content differs between recording devices or encoders.
#[derive(Debug, Clone, Default)]
pub struct Udta<'a> {
    pub fields: Vec<UdtaField<'a>>
}

impl<'a> Udta<'a> {
    /// Collects user data fields inside `atom`, ordered by offset.
    /// Tag hits that do not read as an atom inside
    /// the `udta` extent are skipped.
    pub fn from_atom(atom: &Atom<'a>) -> Result<Self, Mp4Error> {
        atom.match_name(NAME)?;

        let data = atom.data();
        let mut fields: Vec<UdtaField<'a>> = find_many(&USER_DATA, data).into_iter()
            .flat_map(|(name, offsets)| offsets.into_iter().map(move |o| (name.clone(), o)))
            .filter_map(|(name, offset)| match Atom::read(data, offset) {
                Ok(field) => Some(UdtaField {
                    name,
                    size: field.size(),
                    offset: field.header.offset(),
                    data: field.data_load(),
                }),
                Err(err) => {
                    log::debug!("Skipping '{name}' @ {offset} in 'udta': {err}");
                    None
                }
            })
            .collect();

        fields.sort_by_key(|f| f.offset);

        Ok(Self{fields})
    }

    /// Decodes the first `udta` atom in `data`.
    pub fn decode(data: &'a [u8]) -> Result<Self, Mp4Error> {
        Self::from_atom(&Atom::find(NAME, data)?)
    }

    pub fn iter(&self) -> impl Iterator<Item = &UdtaField<'a>> {
        self.fields.iter()
    }

    pub fn find(&self, fourcc: &str) -> Option<&UdtaField<'a>> {
        let fcc = FourCC::from_str(fourcc);
        self.fields.iter().find(|f| f.name == fcc)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// User data (`udta`) field.
/// Each field is formatted as an atom.
/// Data content types differ between recording devices or encoders.
/// E.g. GoPro cameras mix "normal" MP4 atom structure with
/// device information embedded as GPMF.
#[derive(Debug, Clone)]
pub struct UdtaField<'a> {
    /// Four CC
    pub name: FourCC,
    /// Total size in bytes
    pub size: u32,
    /// Offset for the field relative to the start of the `udta` atom.
    pub offset: usize,
    /// Data, excluding 8 byte header
    pub data: &'a [u8],
}

impl UdtaField<'_> {
    /// Number of data bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Check if the field's FourCC matches
    /// specified FourCC.
    pub fn matches(&self, fourcc: &str) -> bool {
        self.name == FourCC::from_str(fourcc)
    }

    /// Returns data as a string. Note that `udta` fields,
    /// may contain values of more than one type, in which
    /// case this method will fail.
    ///
    /// E.g. GoPro `FIRM` (firmware version, model identifier):
    /// "H22.01.02.01.00", "LENS" (lens info/serial?): "LAJ8052832102184".
    pub fn to_string(&self) -> Option<String> {
        std::str::from_utf8(self.data).ok()
            .map(|s| s.to_owned())
    }

    /// Returns data as `Vec<T>`. Note that `udta` fields,
    /// may contain values of more than one type, in which
    /// case this method will fail.
    pub fn to_type<T>(&self, endian: Endian) -> BinResult<Vec<T>>
        where
        T: BinRead,
        <T as BinRead>::Args<'static>: Sized + Clone + Default
    {
        let n = self.len() / std::mem::size_of::<T>();
        let mut cursor = Cursor::new(self.data);
        (0..n)
            .map(|_| match endian {
                Endian::Big => cursor.read_be::<T>(),
                Endian::Little => cursor.read_le::<T>(),
            })
            .collect()
    }
}

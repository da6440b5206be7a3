//! Sample group description atom (`sgpd`).
//!
//! Only the header and the first payload field are decoded.
//!
//! See: <https://developer.apple.com/documentation/quicktime-file-format/sample_group_description_atom>

use binrw::BinRead;

use crate::{support::tag_from_i32, Atom, AtomDecode, Mp4Error};

use super::VersionFlags;

/// Sample group description atom (`sgpd`).
#[derive(Debug, Clone, Default, PartialEq, Eq, BinRead)]
#[br(big)]
pub struct Sgpd {
    #[br(ignore)]
    pub(crate) atom_size: u32,
    pub(crate) version_flags: VersionFlags,
    #[br(map = tag_from_i32)]
    pub(crate) grouping_type: Option<String>,
    /// Byte size for each group description,
    /// `0` if sizes vary.
    pub(crate) default_length: u32,
    pub(crate) no_of_entries: u32,
    /// First 32 bits of the first group description.
    pub(crate) payload_data: u32,
}

impl AtomDecode for Sgpd {
    const NAME: &'static str = "sgpd";

    fn from_atom(atom: &Atom) -> Result<Self, Mp4Error> {
        let mut sgpd = atom.read_at::<Self>(8)?;
        sgpd.atom_size = atom.size();
        Ok(sgpd)
    }
}

impl Sgpd {
    pub fn atom_size(&self) -> u32 {
        self.atom_size
    }

    pub fn version(&self) -> u8 {
        self.version_flags.version
    }

    pub fn grouping_type(&self) -> Option<&str> {
        self.grouping_type.as_deref()
    }

    pub fn default_length(&self) -> u32 {
        self.default_length
    }

    pub fn no_of_entries(&self) -> u32 {
        self.no_of_entries
    }

    pub fn payload_data(&self) -> u32 {
        self.payload_data
    }
}

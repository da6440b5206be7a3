//! Sample description atom (`stsd`).
//!
//! Only the general description fields are decoded,
//! media specific data following these is left as is.
//!
//! Location: `moov/trak[multiple]/mdia/minf/stbl/stsd`
//!
//! See: <https://developer.apple.com/documentation/quicktime-file-format/sample_description_atom>

use binrw::BinRead;

use crate::{
    support::{tag_from_i32, u48_from_be},
    Atom,
    AtomDecode,
    Mp4Error
};

use super::{table::{read_table, TableEntry}, JointVersionFlags};

/// Sample description atom (`stsd`).
#[derive(Debug, Clone, Default, BinRead)]
#[br(big)]
pub struct Stsd {
    #[br(ignore)]
    pub(crate) atom_size: u32,
    pub(crate) version_flags: JointVersionFlags,
    pub(crate) no_of_entries: u32,
    #[br(ignore)]
    pub(crate) descriptions: Vec<SampleDescription>,
}

impl AtomDecode for Stsd {
    const NAME: &'static str = "stsd";

    fn from_atom(atom: &Atom) -> Result<Self, Mp4Error> {
        let mut stsd = atom.read_at::<Self>(8)?;
        stsd.atom_size = atom.size();
        stsd.descriptions = read_table::<SampleDescription>(atom, 16, stsd.no_of_entries)?;
        Ok(stsd)
    }
}

impl Stsd {
    pub fn atom_size(&self) -> u32 {
        self.atom_size
    }

    pub fn version(&self) -> i32 {
        self.version_flags.version
    }

    pub fn flags(&self) -> i16 {
        self.version_flags.flags
    }

    pub fn no_of_entries(&self) -> u32 {
        self.no_of_entries
    }

    pub fn descriptions(&self) -> &[SampleDescription] {
        &self.descriptions
    }

    /// Data format for the first description,
    /// e.g. `avc1` for H.264 video.
    pub fn codec(&self) -> Option<&str> {
        self.descriptions.first()?.data_format()
    }
}

/// General sample description fields.
#[derive(Debug, Clone, PartialEq, Eq, BinRead)]
#[br(big)]
pub struct SampleDescription {
    /// Size of the sample description in bytes.
    pub(crate) size: u32,
    /// Data format, e.g. `avc1`, `mp4a`.
    #[br(map = tag_from_i32)]
    pub(crate) data_format: Option<String>,
    #[br(map = u48_from_be)]
    pub(crate) reserved: u64,
    pub(crate) data_reference_index: u16,
}

impl TableEntry for SampleDescription {
    const WIDTH: usize = 16;
}

impl SampleDescription {
    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn data_format(&self) -> Option<&str> {
        self.data_format.as_deref()
    }

    pub fn data_reference_index(&self) -> u16 {
        self.data_reference_index
    }
}

//! Sample-to-group atom (`sbgp`).
//!
//! Location: `moov/trak[multiple]/mdia/minf/stbl/sbgp`
//!
//! See: <https://developer.apple.com/documentation/quicktime-file-format/sample-to-group_atom>

use binrw::BinRead;

use crate::{support::tag_from_i32, Atom, AtomDecode, Mp4Error};

use super::{table::{read_table, TableEntry}, VersionFlags};

/// Sample-to-group atom (`sbgp`).
#[derive(Debug, Clone, Default, BinRead)]
#[br(big)]
pub struct Sbgp {
    #[br(ignore)]
    pub(crate) atom_size: u32,
    pub(crate) version_flags: VersionFlags,
    /// Links to the `sgpd` with the same grouping type.
    #[br(map = tag_from_i32)]
    pub(crate) grouping_type: Option<String>,
    /// Only present in version 1.
    #[br(if(version_flags.version == 1))]
    pub(crate) grouping_type_parameter: Option<u32>,
    pub(crate) no_of_entries: u32,
    #[br(ignore)]
    pub(crate) table: Vec<SampleToGroup>,
}

impl AtomDecode for Sbgp {
    const NAME: &'static str = "sbgp";

    fn from_atom(atom: &Atom) -> Result<Self, Mp4Error> {
        let mut sbgp = atom.read_at::<Self>(8)?;
        sbgp.atom_size = atom.size();
        let table_start = match sbgp.grouping_type_parameter {
            Some(_) => 24,
            None => 20,
        };
        sbgp.table = read_table::<SampleToGroup>(atom, table_start, sbgp.no_of_entries)?;
        Ok(sbgp)
    }
}

impl Sbgp {
    pub fn atom_size(&self) -> u32 {
        self.atom_size
    }

    pub fn version(&self) -> u8 {
        self.version_flags.version
    }

    pub fn grouping_type(&self) -> Option<&str> {
        self.grouping_type.as_deref()
    }

    pub fn grouping_type_parameter(&self) -> Option<u32> {
        self.grouping_type_parameter
    }

    pub fn no_of_entries(&self) -> u32 {
        self.no_of_entries
    }

    pub fn table(&self) -> &[SampleToGroup] {
        &self.table
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, BinRead)]
#[br(big)]
pub struct SampleToGroup {
    /// Number of consecutive samples in the same group.
    pub(crate) sample_count: u32,
    /// 1-based index into the `sgpd` entries,
    /// `0` if the samples are not in a group of this type.
    pub(crate) group_description_index: u32,
}

impl TableEntry for SampleToGroup {
    const WIDTH: usize = 8;
}

impl SampleToGroup {
    pub fn sample_count(&self) -> u32 {
        self.sample_count
    }

    pub fn group_description_index(&self) -> u32 {
        self.group_description_index
    }
}

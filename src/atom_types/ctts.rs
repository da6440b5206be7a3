//! Composition offset atom (`ctts`).
//!
//! Location: `moov/trak[multiple]/mdia/minf/stbl/ctts`
//!
//! See: <https://developer.apple.com/documentation/quicktime-file-format/composition_offset_atom>

use binrw::BinRead;

use crate::{Atom, AtomDecode, Mp4Error};

use super::{table::{read_table, TableEntry}, VersionFlags};

/// Composition offset atom (`ctts`).
#[derive(Debug, Clone, Default, BinRead)]
#[br(big)]
pub struct Ctts {
    #[br(ignore)]
    pub(crate) atom_size: u32,
    pub(crate) version_flags: VersionFlags,
    pub(crate) no_of_entries: u32,
    #[br(ignore)]
    pub(crate) table: Vec<CompositionOffset>,
}

impl AtomDecode for Ctts {
    const NAME: &'static str = "ctts";

    fn from_atom(atom: &Atom) -> Result<Self, Mp4Error> {
        let mut ctts = atom.read_at::<Self>(8)?;
        ctts.atom_size = atom.size();
        ctts.table = read_table::<CompositionOffset>(atom, 16, ctts.no_of_entries)?;
        Ok(ctts)
    }
}

impl Ctts {
    pub fn atom_size(&self) -> u32 {
        self.atom_size
    }

    pub fn version(&self) -> u8 {
        self.version_flags.version
    }

    pub fn no_of_entries(&self) -> u32 {
        self.no_of_entries
    }

    pub fn table(&self) -> &[CompositionOffset] {
        &self.table
    }

    /// Discrete composition offsets, one per sample.
    pub fn offsets(&self) -> impl Iterator<Item = i32> + '_ {
        self.table.iter()
            .flat_map(|c| std::iter::repeat(c.composition_offset).take(c.sample_count as usize))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, BinRead)]
#[br(big)]
pub struct CompositionOffset {
    /// Number of consecutive samples with the same offset.
    pub(crate) sample_count: u32,
    /// Decode to presentation time offset.
    pub(crate) composition_offset: i32,
}

impl TableEntry for CompositionOffset {
    const WIDTH: usize = 8;
}

impl CompositionOffset {
    pub fn sample_count(&self) -> u32 {
        self.sample_count
    }

    pub fn composition_offset(&self) -> i32 {
        self.composition_offset
    }
}

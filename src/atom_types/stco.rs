//! Chunk offset atom (`stco`).
//!
//! Location: `moov/trak[multiple]/mdia/minf/stbl/stco`
//!
//! See: <https://developer.apple.com/documentation/quicktime-file-format/chunk_offset_atom>

use binrw::BinRead;

use crate::{Atom, AtomDecode, Mp4Error};

use super::{table::read_table, JointVersionFlags};

/// Chunk offset atom (`stco`).
///
/// Offsets are absolute byte positions in the file.
#[derive(Debug, Clone, Default, BinRead)]
#[br(big)]
pub struct Stco {
    #[br(ignore)]
    pub(crate) atom_size: u32,
    pub(crate) version_flags: JointVersionFlags,
    pub(crate) no_of_entries: u32,
    #[br(ignore)]
    pub(crate) offsets: Vec<u32>,
}

impl AtomDecode for Stco {
    const NAME: &'static str = "stco";

    fn from_atom(atom: &Atom) -> Result<Self, Mp4Error> {
        let mut stco = atom.read_at::<Self>(8)?;
        stco.atom_size = atom.size();
        stco.offsets = read_table::<u32>(atom, 16, stco.no_of_entries)?;
        Ok(stco)
    }
}

impl Stco {
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

    /// Chunk offset table.
    pub fn offsets(&self) -> &[u32] {
        &self.offsets
    }

    /// Offset for chunk at `index` (0-based).
    pub fn get(&self, index: usize) -> Option<u32> {
        self.offsets.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

//! Partial sync sample atom (`stps`).
//!
//! Location: `moov/trak[multiple]/mdia/minf/stbl/stps`
//!
//! See: <https://developer.apple.com/documentation/quicktime-file-format/partial_sync_sample_atom>

use binrw::BinRead;

use crate::{Atom, AtomDecode, Mp4Error};

use super::{table::read_table, VersionFlags};

/// Partial sync sample atom (`stps`),
/// e.g. open GOP intra frames.
#[derive(Debug, Clone, Default, BinRead)]
#[br(big)]
pub struct Stps {
    #[br(ignore)]
    pub(crate) atom_size: u32,
    pub(crate) version_flags: VersionFlags,
    pub(crate) no_of_entries: u32,
    #[br(ignore)]
    pub(crate) partial_sync_samples: Vec<u32>,
}

impl AtomDecode for Stps {
    const NAME: &'static str = "stps";

    fn from_atom(atom: &Atom) -> Result<Self, Mp4Error> {
        let mut stps = atom.read_at::<Self>(8)?;
        stps.atom_size = atom.size();
        stps.partial_sync_samples = read_table::<u32>(atom, 16, stps.no_of_entries)?;
        Ok(stps)
    }
}

impl Stps {
    pub fn atom_size(&self) -> u32 {
        self.atom_size
    }

    pub fn version(&self) -> u8 {
        self.version_flags.version
    }

    pub fn flags(&self) -> u32 {
        self.version_flags.flags
    }

    pub fn no_of_entries(&self) -> u32 {
        self.no_of_entries
    }

    /// 1-based sample numbers.
    pub fn partial_sync_samples(&self) -> &[u32] {
        &self.partial_sync_samples
    }
}

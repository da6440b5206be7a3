//! Sync sample atom (`stss`).
//!
//! Location: `moov/trak[multiple]/mdia/minf/stbl/stss`
//!
//! See: <https://developer.apple.com/documentation/quicktime-file-format/sync_sample_atom>

use binrw::BinRead;

use crate::{Atom, AtomDecode, Mp4Error};

use super::{table::read_table, VersionFlags};

/// Sync sample atom (`stss`). Lists key frames.
/// If absent, every sample is a sync sample.
#[derive(Debug, Clone, Default, BinRead)]
#[br(big)]
pub struct Stss {
    #[br(ignore)]
    pub(crate) atom_size: u32,
    pub(crate) version_flags: VersionFlags,
    pub(crate) no_of_entries: u32,
    /// 1-based sample numbers.
    #[br(ignore)]
    pub(crate) sync_samples: Vec<u32>,
}

impl AtomDecode for Stss {
    const NAME: &'static str = "stss";

    fn from_atom(atom: &Atom) -> Result<Self, Mp4Error> {
        let mut stss = atom.read_at::<Self>(8)?;
        stss.atom_size = atom.size();
        stss.sync_samples = read_table::<u32>(atom, 16, stss.no_of_entries)?;
        Ok(stss)
    }
}

impl Stss {
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

    pub fn sync_samples(&self) -> &[u32] {
        &self.sync_samples
    }

    /// Whether 1-based `sample_number` is a sync sample.
    pub fn is_sync(&self, sample_number: u32) -> bool {
        self.sync_samples.binary_search(&sample_number).is_ok()
    }
}

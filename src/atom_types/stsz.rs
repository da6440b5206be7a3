//! Sample size atom (`stsz`).
//!
//! Location: `moov/trak[multiple]/mdia/minf/stbl/stsz`
//!
//! See: <https://developer.apple.com/documentation/quicktime-file-format/sample_size_atom>

use binrw::BinRead;

use crate::{Atom, AtomDecode, Mp4Error};

use super::{table::{read_table, table_size}, JointVersionFlags};

const TABLE_START: usize = 20;

/// Sample size atom (`stsz`).
///
/// Location: `moov/trak[multiple]/mdia/minf/stbl/stsz`
///
/// See: <https://developer.apple.com/documentation/quicktime-file-format/sample_size_atom>
#[derive(Debug, Clone, Default, BinRead)]
#[br(big)]
pub struct Stsz {
    #[br(ignore)]
    pub(crate) atom_size: u32,
    pub(crate) version_flags: JointVersionFlags,
    /// Constant size for all samples, if non-zero.
    /// The table is then usually empty.
    pub(crate) sample_size: u32,
    pub(crate) no_of_entries: u32,
    /// Sample size table.
    #[br(ignore)]
    pub(crate) sizes: Vec<u32>,
}

impl AtomDecode for Stsz {
    const NAME: &'static str = "stsz";

    fn from_atom(atom: &Atom) -> Result<Self, Mp4Error> {
        let mut stsz = atom.read_at::<Self>(8)?;
        stsz.atom_size = atom.size();

        // constant size, no table
        if stsz.sample_size != 0 && table_size(atom, TABLE_START)? == 0 {
            return Ok(stsz)
        }

        stsz.sizes = read_table::<u32>(atom, TABLE_START, stsz.no_of_entries)?;

        Ok(stsz)
    }
}

impl Stsz {
    pub fn atom_size(&self) -> u32 {
        self.atom_size
    }

    pub fn version(&self) -> i32 {
        self.version_flags.version
    }

    pub fn flags(&self) -> i16 {
        self.version_flags.flags
    }

    /// Constant sample size. `0` if sizes vary
    /// and are listed in the table.
    pub fn sample_size(&self) -> u32 {
        self.sample_size
    }

    /// Number of samples in the track.
    pub fn no_of_entries(&self) -> u32 {
        self.no_of_entries
    }

    /// Sample size table as stored in the atom.
    /// Empty if all samples share `sample_size()`.
    pub fn table(&self) -> &[u32] {
        &self.sizes
    }

    /// Returns size in bytes for each sample.
    /// Constant sample sizes are expanded to one value per sample
    /// as the iterator advances.
    pub fn sizes(&self) -> impl Iterator<Item = u32> + '_ {
        let constant = match self.sizes.is_empty() {
            true => self.no_of_entries as usize,
            false => 0,
        };
        self.sizes.iter().copied()
            .chain(std::iter::repeat(self.sample_size).take(constant))
    }

    /// Size for the sample at `index` (0-based).
    pub fn size(&self, index: usize) -> Option<u32> {
        if self.sizes.is_empty() {
            return (index < self.no_of_entries as usize).then_some(self.sample_size)
        }
        self.sizes.get(index).copied()
    }

    /// Total size in bytes for all samples.
    pub fn sum(&self) -> u64 {
        match self.sizes.is_empty() {
            true => self.sample_size as u64 * self.no_of_entries as u64,
            false => self.sizes.iter().map(|s| *s as u64).sum(),
        }
    }
}

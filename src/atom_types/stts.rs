//! Time-to-sample atom (`stts`).
//!
//! Location: `moov/trak[multiple]/mdia/minf/stbl/stts`
//!
//! See <https://developer.apple.com/documentation/quicktime-file-format/time-to-sample_atom>

use binrw::BinRead;

use crate::{Atom, AtomDecode, Mp4Error};

use super::{table::{read_table, TableEntry}, JointVersionFlags};

#[derive(Debug, Clone, Copy, PartialEq, Eq, BinRead)]
#[br(big)]
pub struct TimeToSample {
    pub(crate) sample_count: u32,
    pub(crate) sample_duration: u32,
}

impl TableEntry for TimeToSample {
    const WIDTH: usize = 8;
}

impl TimeToSample {
    pub fn sample_count(&self) -> u32 {
        self.sample_count
    }

    pub fn sample_duration(&self) -> u32 {
        self.sample_duration
    }
}

/// Time to sample atom (`stts`).
///
/// Path: `moov/trak[multiple]/mdia/minf/stbl/stts`
///
/// See <https://developer.apple.com/documentation/quicktime-file-format/time-to-sample_atom>
#[derive(Debug, Clone, Default, BinRead)]
#[br(big)]
pub struct Stts {
    #[br(ignore)]
    pub(crate) atom_size: u32,
    pub(crate) version_flags: JointVersionFlags,
    pub(crate) no_of_entries: u32,
    #[br(ignore)]
    pub(crate) table: Vec<TimeToSample>
}

impl AtomDecode for Stts {
    const NAME: &'static str = "stts";

    fn from_atom(atom: &Atom) -> Result<Self, Mp4Error> {
        let mut stts = atom.read_at::<Self>(8)?;
        stts.atom_size = atom.size();
        stts.table = read_table::<TimeToSample>(atom, 16, stts.no_of_entries)?;
        Ok(stts)
    }
}

impl Stts {
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

    /// Returns total number of samples.
    ///
    /// If an entry lists a duration for four samples,
    /// it counts as four entries towards the total.
    pub fn len(&self) -> usize {
        self.table.iter()
            .map(|t| t.sample_count as usize)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the time to sample table as tuples,
    /// `(SAMPLE_COUNT, SAMPLE_DURATION)`.
    pub fn table(&self) -> Vec<(u32, u32)> {
        self.table.iter()
            .map(|t| (t.sample_count, t.sample_duration))
            .collect()
    }

    /// Returns discrete list of unscaled duration values.
    pub fn durations(&self) -> impl Iterator<Item = u32> + '_ {
        self.table.iter()
            .flat_map(|t| std::iter::repeat(t.sample_duration).take(t.sample_count as usize))
    }

    /// Returns unscaled sample duration, when the time to sample
    /// table only has a single entry. Returns `None` if it is empty,
    /// or contains multiple entries.
    pub fn duration(&self) -> Option<u32> {
        if self.table.len() == 1 {
            return Some(self.table.first()?.sample_duration)
        }
        None
    }

    /// Unscaled duration for all samples.
    pub fn duration_sum(&self) -> u64 {
        self.table.iter()
            .map(|t| t.sample_duration as u64 * t.sample_count as u64)
            .sum()
    }

    pub fn sample_sum(&self) -> u64 {
        self.table.iter()
            .map(|t| t.sample_count as u64)
            .sum()
    }
}

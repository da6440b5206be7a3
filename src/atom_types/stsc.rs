//! Sample to chunk atom (`stsc`)
//!
//! Location: `moov/trak[multiple]/mdia/minf/stbl/stsc`
//!
//! See:
//! - Sample to chunk atom: <https://developer.apple.com/documentation/quicktime-file-format/sample-to-chunk_atom>
//! - Sample to chunk table: <https://developer.apple.com/documentation/quicktime-file-format/sample-to-chunk_atom/sample-to-chunk_table>
//! - <https://github.com/essential61/mp4analyser/wiki/Understanding-The-Sample-Tables:-An-Example>

use binrw::BinRead;

use crate::{Atom, AtomDecode, Mp4Error};

use super::{table::{read_table, TableEntry}, JointVersionFlags};

/// Sample to chunk atom (`stsc`)
#[derive(Debug, Clone, Default, BinRead)]
#[br(big)]
pub struct Stsc {
    #[br(ignore)]
    pub(crate) atom_size: u32,
    pub(crate) version_flags: JointVersionFlags,
    pub(crate) no_of_entries: u32,
    #[br(ignore)]
    pub(crate) sample_to_chunk_table: Vec<SampleToChunk>,
}

impl AtomDecode for Stsc {
    const NAME: &'static str = "stsc";

    fn from_atom(atom: &Atom) -> Result<Self, Mp4Error> {
        let mut stsc = atom.read_at::<Self>(8)?;
        stsc.atom_size = atom.size();
        stsc.sample_to_chunk_table = read_table::<SampleToChunk>(atom, 16, stsc.no_of_entries)?;
        Ok(stsc)
    }
}

impl Stsc {
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

    pub fn table(&self) -> &[SampleToChunk] {
        &self.sample_to_chunk_table
    }

    /// Returns number of samples for specified chunk,
    /// counting from start of MP4.
    ///
    /// > Important: The `first_chunk` field in an `stsc`
    /// > atom starts on 1,
    /// > so `chunk_index` is also a 1-based index,
    /// > exactly as the MP4 specification states.
    pub fn no_of_samples(&self, chunk_index: usize) -> Option<u32> {
        if chunk_index == 0 {
            return None
        }

        // A single entry is true for the entire track
        if self.sample_to_chunk_table.len() == 1 {
            return self.sample_to_chunk_table.first()
                .map(|stc| stc.samples_per_chunk)
        }

        // Check if 'chunk_index' is within range of
        // 'first_chunk' in entry 2 and 'first_chunk' in entry 1.
        // This only checks up until the second to last entry.
        for s2chunks in self.sample_to_chunk_table.windows(2) {
            let s2c1 = &s2chunks[0];
            let s2c2 = &s2chunks[1];

            if (s2c1.first_chunk as usize .. s2c2.first_chunk as usize).contains(&chunk_index) {
                return Some(s2c1.samples_per_chunk);
            }
        }

        // All remaining chunks for the track have the number
        // of samples listed in the last entry
        self.sample_to_chunk_table.last()
            .filter(|last| chunk_index >= last.first_chunk as usize)
            .map(|last| last.samples_per_chunk)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, BinRead)]
#[br(big)]
pub struct SampleToChunk {
    /// 1-based index of first chunk
    /// that contains the number of
    /// samples specified in `samples_per_chunk`.
    /// The following chunks will all contain the
    /// same number of samples until the next
    /// sample to chunk entry.
    pub(crate) first_chunk: u32,
    /// Number of samples for chunk number
    /// specified by `first_chunk` and on,
    /// until the next sample to chunk entry.
    pub(crate) samples_per_chunk: u32,
    pub(crate) sample_description_id: u32,
}

impl TableEntry for SampleToChunk {
    const WIDTH: usize = 12;
}

impl SampleToChunk {
    pub fn first_chunk(&self) -> u32 {
        self.first_chunk
    }

    pub fn samples_per_chunk(&self) -> u32 {
        self.samples_per_chunk
    }

    pub fn sample_description_id(&self) -> u32 {
        self.sample_description_id
    }
}

//! Sample dependency flags atom (`sdtp`)
//!
//! Location: `moov/trak[multiple]/mdia/minf/stbl/sdtp`
//!
//! See: <https://developer.apple.com/documentation/quicktime-file-format/sample_dependency_flags_atom>

use binrw::BinRead;

use crate::{locate::find_tag_offsets, Atom, AtomDecode, Mp4Error, Stsz};

use super::{table::{read_table, TableEntry}, VersionFlags};

const NAME: &str = "sdtp";

/// Sample dependency flags atom (`sdtp`).
///
/// The atom has no entry count of its own.
/// The number of entries is the number of samples
/// in the sample size atom (`stsz`) of the same track (`trak`).
///
/// See: <https://developer.apple.com/documentation/quicktime-file-format/sample_dependency_flags_atom>
#[derive(Debug, Clone, Default, BinRead)]
#[br(big)]
pub struct Sdtp {
    #[br(ignore)]
    pub(crate) atom_size: u32,
    pub(crate) version_flags: VersionFlags,
    /// Sample dependency flags table.
    /// A table of 8-bit values indicating the sample flag settings.
    #[br(ignore)]
    pub(crate) sample_flags_table: Vec<SampleDependency>
}

impl Sdtp {
    /// Decodes `atom` with `sample_count` entries,
    /// usually `Stsz::no_of_entries()` for the same track.
    pub fn from_atom(atom: &Atom, sample_count: u32) -> Result<Self, Mp4Error> {
        atom.match_name(NAME)?;
        let mut sdtp = atom.read_at::<Self>(8)?;
        sdtp.atom_size = atom.size();
        sdtp.sample_flags_table = read_table::<SampleDependency>(atom, 12, sample_count)?;
        Ok(sdtp)
    }

    /// Decodes the `sdtp` atom whose FourCC starts at `tag_offset` in `data`,
    /// with `sample_count` entries.
    pub fn decode_at(data: &[u8], tag_offset: usize, sample_count: u32) -> Result<Self, Mp4Error> {
        Self::from_atom(&Atom::read(data, tag_offset)?, sample_count)
    }

    /// Decodes the first `sdtp` in `data`, borrowing the
    /// sample count from the `stsz` of the same sample table
    /// (see `Sdtp::sample_count()`).
    pub fn decode(data: &[u8]) -> Result<Self, Mp4Error> {
        let atom = Atom::find(NAME, data)?;
        let sample_count = Self::sample_count(data, atom.header.tag_offset())?;
        Self::from_atom(&atom, sample_count)
    }

    /// Number of samples for the `sdtp` atom whose FourCC starts
    /// at `tag_offset` in `data`, read from the `stsz` in the
    /// innermost sample table atom (`stbl`) containing it.
    ///
    /// If no `stbl` in `data` contains the `sdtp` atom,
    /// e.g. for a buffer holding only the sample table children,
    /// the first `stsz` in `data` is used.
    pub fn sample_count(data: &[u8], tag_offset: usize) -> Result<u32, Mp4Error> {
        let stbl = find_tag_offsets("stbl", data).into_iter()
            .filter_map(|offset| Atom::read(data, offset).ok())
            .filter(|stbl| stbl.header.contains(tag_offset))
            .max_by_key(|stbl| stbl.header.offset());

        let stsz = match stbl {
            Some(stbl) => Stsz::decode(stbl.data())?,
            None => {
                log::debug!("No 'stbl' contains 'sdtp' @ {tag_offset}, using first 'stsz'");
                Stsz::decode(data)?
            }
        };

        Ok(stsz.no_of_entries())
    }

    pub fn atom_size(&self) -> u32 {
        self.atom_size
    }

    pub fn version(&self) -> u8 {
        self.version_flags.version
    }

    pub fn sample_flags_table(&self) -> &[SampleDependency] {
        &self.sample_flags_table
    }

    pub fn len(&self) -> usize {
        self.sample_flags_table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sample_flags_table.is_empty()
    }
}

/// Dependency flags for a single sample,
/// four 2-bit values:
/// `is_leading`, `sample_depends_on`,
/// `sample_is_depended_on`, `sample_has_redundancy`.
///
/// For each, `0` means unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, BinRead)]
pub struct SampleDependency(pub(crate) u8);

impl TableEntry for SampleDependency {
    const WIDTH: usize = 1;
}

impl SampleDependency {
    /// Raw flags byte.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// `1`: leading sample with a dependency before the referenced I-frame,
    /// `2`: not a leading sample,
    /// `3`: leading sample without such dependency.
    pub fn is_leading(&self) -> u8 {
        (self.0 >> 6) & 0b11
    }

    /// `1`: depends on others (not an I-frame),
    /// `2`: does not depend on others (I-frame).
    pub fn depends_on(&self) -> u8 {
        (self.0 >> 4) & 0b11
    }

    /// `1`: others may depend on this sample,
    /// `2`: disposable.
    pub fn is_depended_on(&self) -> u8 {
        (self.0 >> 2) & 0b11
    }

    /// `1`: redundant coding in this sample,
    /// `2`: no redundant coding.
    pub fn has_redundancy(&self) -> u8 {
        self.0 & 0b11
    }
}

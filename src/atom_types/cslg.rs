//! Composition shift least greatest atom (`cslg`).
//!
//! Location: `moov/trak[multiple]/mdia/minf/stbl/cslg`
//!
//! See: <https://developer.apple.com/documentation/quicktime-file-format/composition_shift_least_greatest_atom>

use binrw::BinRead;

use crate::{Atom, AtomDecode, Mp4Error};

use super::VersionFlags;

/// Composition shift least greatest atom (`cslg`).
/// Summarizes the composition offsets in `ctts`.
#[derive(Debug, Clone, Default, PartialEq, Eq, BinRead)]
#[br(big)]
pub struct Cslg {
    #[br(ignore)]
    pub(crate) atom_size: u32,
    pub(crate) version_flags: VersionFlags,
    pub(crate) composition_offset_to_display_offset_shift: i32,
    pub(crate) least_display_offset: i32,
    pub(crate) greatest_display_offset: i32,
    pub(crate) display_start_time: i32,
    pub(crate) display_end_time: i32,
}

impl AtomDecode for Cslg {
    const NAME: &'static str = "cslg";

    fn from_atom(atom: &Atom) -> Result<Self, Mp4Error> {
        let mut cslg = atom.read_at::<Self>(8)?;
        cslg.atom_size = atom.size();
        Ok(cslg)
    }
}

impl Cslg {
    pub fn atom_size(&self) -> u32 {
        self.atom_size
    }

    pub fn composition_offset_to_display_offset_shift(&self) -> i32 {
        self.composition_offset_to_display_offset_shift
    }

    pub fn least_display_offset(&self) -> i32 {
        self.least_display_offset
    }

    pub fn greatest_display_offset(&self) -> i32 {
        self.greatest_display_offset
    }

    pub fn display_start_time(&self) -> i32 {
        self.display_start_time
    }

    pub fn display_end_time(&self) -> i32 {
        self.display_end_time
    }
}

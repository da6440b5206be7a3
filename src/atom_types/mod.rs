//! Decoders for movie, track, media, and sample table atoms.

mod cslg;
mod ctts;
mod hdlr;
mod mdhd;
mod mvhd;
mod sbgp;
mod sdtp;
mod sgpd;
mod stco;
mod stps;
mod stsc;
mod stsd;
mod stss;
mod stsz;
mod stts;
mod tkhd;
mod types;
mod udta;
pub(crate) mod table;
mod version;

pub use cslg::Cslg;
pub use ctts::{Ctts, CompositionOffset};
pub use hdlr::{Hdlr, ComponentType};
pub use mdhd::Mdhd;
pub use mvhd::Mvhd;
pub use sbgp::{Sbgp, SampleToGroup};
pub use sdtp::{Sdtp, SampleDependency};
pub use sgpd::Sgpd;
pub use stco::Stco;
pub use stps::Stps;
pub use stsc::{Stsc, SampleToChunk};
pub use stsd::{Stsd, SampleDescription};
pub use stss::Stss;
pub use stsz::Stsz;
pub use stts::{Stts, TimeToSample};
pub use tkhd::Tkhd;
pub use types::AtomType;
pub use udta::{Udta, UdtaField};
pub use table::TableEntry;
pub use version::{VersionFlags, SignedVersionFlags, JointVersionFlags};

use crate::{locate::find_tag_offsets, Atom, Mp4Error};

/// Decoding of a single atom type.
///
/// Only `from_atom()` needs implementing. The provided methods locate
/// the atom (`decode()` uses the first occurrence of `NAME` in the buffer),
/// verify the name, then decode.
pub trait AtomDecode: Sized {
    /// FourCC for the atom.
    const NAME: &'static str;

    /// Decodes `atom`, assumed to be named `NAME`.
    fn from_atom(atom: &Atom) -> Result<Self, Mp4Error>;

    /// Decodes the atom whose FourCC starts at `tag_offset` in `data`.
    fn decode_at(data: &[u8], tag_offset: usize) -> Result<Self, Mp4Error> {
        Atom::read(data, tag_offset)?.decode::<Self>()
    }

    /// Decodes the first atom named `NAME` in `data`.
    /// Returns `Mp4Error::NoSuchAtom` if there is none.
    fn decode(data: &[u8]) -> Result<Self, Mp4Error> {
        Atom::find(Self::NAME, data)?.decode::<Self>()
    }

    /// Decodes every occurrence of `NAME` in `data`, in byte order.
    /// False positives from the locator show up as errors.
    fn decode_all(data: &[u8]) -> Vec<Result<Self, Mp4Error>> {
        find_tag_offsets(Self::NAME, data).into_iter()
            .map(|offset| Self::decode_at(data, offset))
            .collect()
    }
}

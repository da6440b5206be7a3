//! Decode results for all supported atoms as a single type.

use crate::{
    consts::{SAMPLE_TABLE, UNSUPPORTED},
    fourcc::FourCC,
    Atom,
    AtomDecode,
    AtomHeader,
    Mp4Error,
};

use super::{Cslg, Ctts, Hdlr, Mdhd, Mvhd, Sbgp, Sdtp, Sgpd, Stco, Stps, Stsc, Stsd, Stss, Stsz, Stts, Tkhd, Udta};

/// Decoded atom.
/// Container atoms only have their header decoded.
///
/// See atom types in <https://developer.apple.com/documentation/quicktime-file-format/atoms>.
#[derive(Debug, Clone)]
pub enum AtomType<'a> {
    /// Movie header atom
    Mvhd(Mvhd),
    /// Track header atom
    Tkhd(Tkhd),
    /// Media header atom
    Mdhd(Mdhd),
    /// Handler reference atom
    Hdlr(Hdlr),
    /// Sample description atom
    Stsd(Stsd),
    /// Time-to-sample atom
    Stts(Stts),
    /// Composition offset atom
    Ctts(Ctts),
    /// Composition shift least greatest atom
    Cslg(Cslg),
    /// Sync sample atom
    Stss(Stss),
    /// Partial sync sample atom
    Stps(Stps),
    /// Sample-to-chunk atom
    Stsc(Stsc),
    /// Sample size atom
    Stsz(Stsz),
    /// Chunk offset, 32-bit values
    Stco(Stco),
    /// Sample group description atom
    Sgpd(Sgpd),
    /// Sample-to-group atom
    Sbgp(Sbgp),
    /// Sample dependency flags atom
    Sdtp(Sdtp),
    /// User data atom
    Udta(Udta<'a>),
    /// `moov`, `trak`, `mdia`, `minf`, `dinf`, `stbl`
    Container(AtomHeader),
}

impl<'a> AtomType<'a> {
    /// Decodes the atom whose FourCC starts at `tag_offset` in `data`.
    ///
    /// `sdtp` borrows its sample count from the `stsz` in the same
    /// sample table, see `Sdtp::sample_count()`.
    ///
    /// Returns `Mp4Error::Unsupported` for atoms without a decoder.
    pub fn decode(data: &'a [u8], tag_offset: usize) -> Result<Self, Mp4Error> {
        let atom = Atom::read(data, tag_offset)?;

        if UNSUPPORTED.contains(&atom.name().to_str()) {
            return Err(Mp4Error::Unsupported(atom.name().to_string()))
        }

        let atom_type = match atom.name() {
            FourCC::Mvhd => Self::Mvhd(Mvhd::from_atom(&atom)?),
            FourCC::Tkhd => Self::Tkhd(Tkhd::from_atom(&atom)?),
            FourCC::Mdhd => Self::Mdhd(Mdhd::from_atom(&atom)?),
            FourCC::Hdlr => Self::Hdlr(Hdlr::from_atom(&atom)?),
            FourCC::Stsd => Self::Stsd(Stsd::from_atom(&atom)?),
            FourCC::Stts => Self::Stts(Stts::from_atom(&atom)?),
            FourCC::Ctts => Self::Ctts(Ctts::from_atom(&atom)?),
            FourCC::Cslg => Self::Cslg(Cslg::from_atom(&atom)?),
            FourCC::Stss => Self::Stss(Stss::from_atom(&atom)?),
            FourCC::Stps => Self::Stps(Stps::from_atom(&atom)?),
            FourCC::Stsc => Self::Stsc(Stsc::from_atom(&atom)?),
            FourCC::Stsz => Self::Stsz(Stsz::from_atom(&atom)?),
            FourCC::Stco => Self::Stco(Stco::from_atom(&atom)?),
            FourCC::Sgpd => Self::Sgpd(Sgpd::from_atom(&atom)?),
            FourCC::Sbgp => Self::Sbgp(Sbgp::from_atom(&atom)?),
            FourCC::Sdtp => {
                let sample_count = Sdtp::sample_count(data, tag_offset)?;
                Self::Sdtp(Sdtp::from_atom(&atom, sample_count)?)
            },
            FourCC::Udta => Self::Udta(Udta::from_atom(&atom)?),
            _ if atom.header.is_container() => Self::Container(atom.header.clone()),
            name => return Err(Mp4Error::Unsupported(name.to_string())),
        };

        Ok(atom_type)
    }

    /// FourCC for the decoded atom.
    pub fn name(&self) -> FourCC {
        match self {
            Self::Mvhd(_) => FourCC::Mvhd,
            Self::Tkhd(_) => FourCC::Tkhd,
            Self::Mdhd(_) => FourCC::Mdhd,
            Self::Hdlr(_) => FourCC::Hdlr,
            Self::Stsd(_) => FourCC::Stsd,
            Self::Stts(_) => FourCC::Stts,
            Self::Ctts(_) => FourCC::Ctts,
            Self::Cslg(_) => FourCC::Cslg,
            Self::Stss(_) => FourCC::Stss,
            Self::Stps(_) => FourCC::Stps,
            Self::Stsc(_) => FourCC::Stsc,
            Self::Stsz(_) => FourCC::Stsz,
            Self::Stco(_) => FourCC::Stco,
            Self::Sgpd(_) => FourCC::Sgpd,
            Self::Sbgp(_) => FourCC::Sbgp,
            Self::Sdtp(_) => FourCC::Sdtp,
            Self::Udta(_) => FourCC::Udta,
            Self::Container(hdr) => hdr.name().to_owned(),
        }
    }

    /// Returns `true` for atoms that index a track's samples,
    /// i.e. those inside `stbl`.
    pub fn is_sample_table(&self) -> bool {
        SAMPLE_TABLE.contains(&self.name().to_str())
    }

    pub fn is_container(&self) -> bool {
        matches!(self, Self::Container(_))
    }
}

//! MP4 atom FourCC.
//! See https://developer.apple.com/library/archive/documentation/QuickTime/QTFF/QTFFChap2/qtff2.html#//apple_ref/doc/uid/TP40000939-CH204-56313.
//!
//! Tags are matched byte for byte. Text is mapped to bytes as ISO 8859-1,
//! i.e. characters `U+0000..=U+00FF` become a single byte each,
//! so that user data tags such as `©nam` (`0xA9` + `nam`) can be located.

use std::fmt;

use crate::Mp4Error;

/// MP4 atom Four CC.
/// See https://developer.apple.com/library/archive/documentation/QuickTime/QTFF/QTFFChap2/qtff2.html#//apple_ref/doc/uid/TP40000939-CH204-56313.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FourCC {
    /// Clipping atom
    Clip,
    /// Compressed movie atom
    Cmov,
    /// Clipping region atom
    Crgn,
    /// Composition shift least greatest atom
    Cslg,
    /// Color table atom
    Ctab,
    /// Composition offset atom
    Ctts,
    Dinf,
    Edts,
    /// Extended language tag atom
    Elng,
    /// Handler reference atom
    Hdlr,
    Imap,
    Load,
    Matt,
    Mdhd,
    Mdia,
    Minf,
    /// Movie Atom
    Moov,
    /// Movie Header Atom
    Mvhd,
    /// Reference movie atom
    Rmra,
    /// Sample to group atom
    Sbgp,
    /// Sample dependency flags atom
    Sdtp,
    /// Sample group description atom
    Sgpd,
    Stbl,
    /// Chunk offset, 32-bit values
    Stco,
    /// Partial sync sample atom
    Stps,
    Stsc,
    Stsd,
    /// Shadow sync atom
    Stsh,
    Stss,
    Stsz,
    Stts,
    /// Track aperture mode dimensions atom
    Tapt,
    Tkhd,
    /// Track description
    Trak,
    Tref,
    /// User data
    Udta,

    Custom(String)
}

impl FourCC {
    pub fn from_slice(fourcc: &[u8]) -> Self {
        match fourcc {
            b"clip" => Self::Clip,
            b"cmov" => Self::Cmov,
            b"crgn" => Self::Crgn,
            b"cslg" => Self::Cslg,
            b"ctab" => Self::Ctab,
            b"ctts" => Self::Ctts,
            b"dinf" => Self::Dinf,
            b"edts" => Self::Edts,
            b"elng" => Self::Elng,
            b"hdlr" => Self::Hdlr,
            b"imap" => Self::Imap,
            b"load" => Self::Load,
            b"matt" => Self::Matt,
            b"mdhd" => Self::Mdhd,
            b"mdia" => Self::Mdia,
            b"minf" => Self::Minf,
            b"moov" => Self::Moov,
            b"mvhd" => Self::Mvhd,
            b"rmra" => Self::Rmra,
            b"sbgp" => Self::Sbgp,
            b"sdtp" => Self::Sdtp,
            b"sgpd" => Self::Sgpd,
            b"stbl" => Self::Stbl,
            b"stco" => Self::Stco,
            b"stps" => Self::Stps,
            b"stsc" => Self::Stsc,
            b"stsd" => Self::Stsd,
            b"stsh" => Self::Stsh,
            b"stss" => Self::Stss,
            b"stsz" => Self::Stsz,
            b"stts" => Self::Stts,
            b"tapt" => Self::Tapt,
            b"tkhd" => Self::Tkhd,
            b"trak" => Self::Trak,
            b"tref" => Self::Tref,
            b"udta" => Self::Udta,

            // UTF-8 does not work for single-byte char above 127
            // but ISO8859-1 mapping works for range 128-255
            _ => Self::Custom(
                fourcc
                    .iter()
                    .map(|n| *n as char)
                    .collect::<String>()
                ),
        }
    }

    pub fn from_u32(value: u32) -> Self {
        Self::from_slice(&value.to_be_bytes())
    }

    /// FourCC from text. Characters above `U+00FF`
    /// can not be represented as a single byte and
    /// result in a `Custom` FourCC that never matches
    /// (`to_bytes()` fails for these).
    pub fn from_str(fourcc: &str) -> Self {
        match latin1(fourcc) {
            Some(bytes) => Self::from_slice(&bytes),
            None => Self::Custom(fourcc.to_owned()),
        }
    }

    pub fn to_str(&self) -> &str {
        match self {
            Self::Clip => "clip",
            Self::Cmov => "cmov",
            Self::Crgn => "crgn",
            Self::Cslg => "cslg",
            Self::Ctab => "ctab",
            Self::Ctts => "ctts",
            Self::Dinf => "dinf",
            Self::Edts => "edts",
            Self::Elng => "elng",
            Self::Hdlr => "hdlr",
            Self::Imap => "imap",
            Self::Load => "load",
            Self::Matt => "matt",
            Self::Mdhd => "mdhd",
            Self::Mdia => "mdia",
            Self::Minf => "minf",
            Self::Moov => "moov",
            Self::Mvhd => "mvhd",
            Self::Rmra => "rmra",
            Self::Sbgp => "sbgp",
            Self::Sdtp => "sdtp",
            Self::Sgpd => "sgpd",
            Self::Stbl => "stbl",
            Self::Stco => "stco",
            Self::Stps => "stps",
            Self::Stsc => "stsc",
            Self::Stsd => "stsd",
            Self::Stsh => "stsh",
            Self::Stss => "stss",
            Self::Stsz => "stsz",
            Self::Stts => "stts",
            Self::Tapt => "tapt",
            Self::Tkhd => "tkhd",
            Self::Trak => "trak",
            Self::Tref => "tref",
            Self::Udta => "udta",
            Self::Custom(s) => s.as_str()
        }
    }

    /// The four bytes to match in a buffer.
    pub fn to_bytes(&self) -> Result<[u8; 4], Mp4Error> {
        latin1(self.to_str())
            .ok_or_else(|| Mp4Error::InvalidFourCC(self.to_str().to_owned()))
    }
}

impl fmt::Display for FourCC {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl Default for FourCC {
    fn default() -> Self {
        Self::Custom("None".to_owned())
    }
}

/// Maps exactly four characters in the range `U+0000..=U+00FF`
/// to single bytes.
fn latin1(fourcc: &str) -> Option<[u8; 4]> {
    let mut bytes = [0_u8; 4];
    let mut chars = fourcc.chars();
    for byte in bytes.iter_mut() {
        *byte = u8::try_from(u32::from(chars.next()?)).ok()?;
    }
    match chars.next() {
        Some(_) => None,
        None => Some(bytes),
    }
}

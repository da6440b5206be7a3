//! Media header atom (`mdhd`).
//!
//! Similar to `mvhd`,
//! but only describes a single track (`trak`).
//! Specifies the characteristics of a media (`mdia`),
//! including time scale and duration.
//!
//! Location: `moov/trak/mdia/mdhd`
//!
//! See: <https://developer.apple.com/documentation/quicktime-file-format/media_header_atom>

use binrw::BinRead;
use time::{ext::NumericalDuration, Duration, PrimitiveDateTime};

use crate::{mp4_time_zero, Atom, AtomDecode, Mp4Error};

use super::VersionFlags;

/// Media header atom ('mdhd'). One per track (`trak`).
/// Specifies the characteristics of a media (`mdia`), including time scale and duration.
///
/// Path: `moov/trak/mdia/mdhd`
///
/// See: <https://developer.apple.com/documentation/quicktime-file-format/media_header_atom>
#[derive(Debug, Clone, Default, BinRead)]
#[br(big)]
pub struct Mdhd {
    #[br(ignore)]
    pub(crate) atom_size: u32,
    pub(crate) version_flags: VersionFlags,
    pub(crate) creation_time: u32,
    pub(crate) modification_time: u32,
    pub(crate) time_scale: u32,
    /// Unscaled duration. I.e. "ticks"
    /// that require dividing by time scale
    /// to derive a value in seconds.
    pub(crate) duration: u32,
    /// 1 bit pad 0 then [u5; 3]
    #[br(map = derive_language_code)]
    pub(crate) language: String,
    pub(crate) quality: u16,
}

impl AtomDecode for Mdhd {
    const NAME: &'static str = "mdhd";

    fn from_atom(atom: &Atom) -> Result<Self, Mp4Error> {
        let mut mdhd = atom.read_at::<Self>(8)?;
        mdhd.atom_size = atom.size();
        Ok(mdhd)
    }
}

impl Mdhd {
    pub fn atom_size(&self) -> u32 {
        self.atom_size
    }

    pub fn version(&self) -> u8 {
        self.version_flags.version
    }

    pub fn flags(&self) -> u32 {
        self.version_flags.flags
    }

    pub fn creation_time(&self) -> PrimitiveDateTime {
        mp4_time_zero() + Duration::seconds(self.creation_time as i64)
    }

    pub fn modification_time(&self) -> PrimitiveDateTime {
        mp4_time_zero() + Duration::seconds(self.modification_time as i64)
    }

    pub fn time_scale(&self) -> u32 {
        self.time_scale
    }

    pub fn duration_unscaled(&self) -> u32 {
        self.duration
    }

    /// ISO-639-2/T language code
    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn quality(&self) -> u16 {
        self.quality
    }

    /// Duration of the media.
    /// Zero if time scale is not set.
    pub fn duration(&self) -> Duration {
        if self.time_scale == 0 {
            return Duration::ZERO
        }
        (self.duration as f64 / self.time_scale as f64).seconds()
    }
}

/// Derive three letter ISO639-2/T language code.
///
/// Packed in 16 bits `X u5 u5 u5`:
/// - most significant bit is padding (BE so left most)
/// - 1 `u5` + `0x60`
/// - 1 `u5` + `0x60`
/// - 1 `u5` + `0x60`
fn derive_language_code(data: u16) -> String {
    [
        // value between 0-31 + 96 = ascii range so casting to u8 is ok
        (((0b0111_1100_0000_0000 & data) >> 10) as u8 + 0x60) as char,
        (((0b0000_0011_1110_0000 & data) >> 5) as u8 + 0x60) as char,
        ((0b0000_0000_0001_1111 & data) as u8 + 0x60) as char
    ]
    .iter()
    .collect()
}

//! Core MP4 struct and methods.
//!
//! `Mp4` is a view over an in-memory buffer, either a complete MP4 file
//! or a part of one (see `Atom::view()`). Atoms are located by scanning
//! for their FourCC (see `locate`), so the first match for e.g. `stsz`
//! belongs to the first track in the buffer.
//!
//! Note on `hdlr` atom and finding "component name"
//! (e.g. GoPro MP4 files):
//! - The component name is a counted string:
//!     - first byte specifies number of bytes, e.g. "0x0b" = 11, followed by the string.
//!     - For e.g. GoPro the component name for GPMF data "GoPro MET": starts after 8 32-bit fields.
//!     - All GoPro component names end in 0x20 so far: ' ', which is trimmed.
//!
//! ```rs
//! use mp4scan::Mp4;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let bytes = std::fs::read("VIDEO.MP4")?;
//!     let mp4 = Mp4::new(&bytes);
//!
//!     // Walk the atom tree.
//!     for header in mp4.headers() {
//!         println!("{:?}", header?)
//!     }
//!
//!     println!("{:?}", mp4.duration()?);
//!
//!     // Sample sizes for the GoPro GPMF track.
//!     let track = mp4.track("GoPro MET")?;
//!     println!("{:?}", track.view().stsz()?.sizes().collect::<Vec<_>>());
//!
//!     Ok(())
//! }
//! ```

use crate::{
    atom::{Atom, Headers},
    errors::Mp4Error,
    locate::find_tag_offsets,
    AtomDecode,
    AtomType,
    Cslg,
    Ctts,
    Hdlr,
    Mdhd,
    Mvhd,
    RotationMatrix,
    Sbgp,
    Sdtp,
    Sgpd,
    Stco,
    Stps,
    Stsc,
    Stsd,
    Stss,
    Stsz,
    Stts,
    Tkhd,
    Udta,
};

/// MP4 buffer.
#[derive(Debug, Clone, Copy)]
pub struct Mp4<'a> {
    data: &'a [u8],
}

impl<'a> Mp4<'a> {
    /// New view over `data`. Nothing is read.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    /// Buffer size in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Depth-first iterator over atom headers,
    /// starting at the first byte of the buffer.
    pub fn headers(&self) -> Headers<'a> {
        Headers::new(self.data)
    }

    /// Byte offsets for all FourCC matches for `name`.
    /// These are the offsets for the FourCC, not the atom start.
    pub fn find(&self, name: &str) -> Vec<usize> {
        find_tag_offsets(name, self.data)
    }

    /// First atom with specified name (FourCC).
    pub fn atom(&self, name: &str) -> Result<Atom<'a>, Mp4Error> {
        Atom::find(name, self.data)
    }

    /// All atoms with specified name (FourCC).
    /// Matches that can not be read as atoms,
    /// e.g. the FourCC occurring in sample data, are skipped.
    pub fn atoms(&self, name: &str) -> Vec<Atom<'a>> {
        self.find(name).into_iter()
            .filter_map(|offset| match Atom::read(self.data, offset) {
                Ok(atom) => Some(atom),
                Err(err) => {
                    log::debug!("Skipping '{name}' @ {offset}: {err}");
                    None
                }
            })
            .collect()
    }

    /// Decodes the atom whose FourCC starts at `tag_offset`.
    pub fn decode(&self, tag_offset: usize) -> Result<AtomType<'a>, Mp4Error> {
        AtomType::decode(self.data, tag_offset)
    }

    /// Track atoms (`trak`).
    ///
    /// Path: `moov/trak<multiple>`
    pub fn tracks(&self) -> Vec<Atom<'a>> {
        self.atoms("trak")
    }

    /// First track (`trak`) with the specified handler name
    /// (`hdlr` component name), e.g. "GoPro MET".
    pub fn track(&self, handler_name: &str) -> Result<Atom<'a>, Mp4Error> {
        self.tracks().into_iter()
            .find(|trak| trak.view()
                .hdlr()
                .map(|hdlr| hdlr.component_name() == handler_name)
                .unwrap_or(false)
            )
            .ok_or_else(|| Mp4Error::NoSuchAtom(format!("trak with handler name '{handler_name}'")))
    }

    /// Movie header (`mvhd` atom).
    ///
    /// Path: `moov/mvhd`
    pub fn mvhd(&self) -> Result<Mvhd, Mp4Error> {
        Mvhd::decode(self.data)
    }

    /// Track header (`tkhd` atom - one for each `trak`).
    ///
    /// Path: `moov/trak<multiple>/tkhd`
    pub fn tkhd(&self) -> Result<Tkhd, Mp4Error> {
        Tkhd::decode(self.data)
    }

    /// Media header (`mdhd` atom - one for each `trak`).
    ///
    /// Path: `moov/trak<multiple>/mdia/mdhd`
    pub fn mdhd(&self) -> Result<Mdhd, Mp4Error> {
        Mdhd::decode(self.data)
    }

    /// Extract media handler values (`hdlr` atom).
    ///
    /// Path: `moov/trak<multiple>/mdia/hdlr`
    pub fn hdlr(&self) -> Result<Hdlr, Mp4Error> {
        Hdlr::decode(self.data)
    }

    /// Sample descriptions (`stsd` atom - one for each `trak`).
    ///
    /// Path: `moov/trak<multiple>/mdia/minf/stbl/stsd`
    pub fn stsd(&self) -> Result<Stsd, Mp4Error> {
        Stsd::decode(self.data)
    }

    /// Extract time to sample values (`stts` atom - one for each `trak`).
    ///
    /// Path: `moov/trak<multiple>/mdia/minf/stbl/stts`
    pub fn stts(&self) -> Result<Stts, Mp4Error> {
        Stts::decode(self.data)
    }

    /// Composition offsets (`ctts` atom).
    ///
    /// Path: `moov/trak<multiple>/mdia/minf/stbl/ctts`
    pub fn ctts(&self) -> Result<Ctts, Mp4Error> {
        Ctts::decode(self.data)
    }

    pub fn cslg(&self) -> Result<Cslg, Mp4Error> {
        Cslg::decode(self.data)
    }

    /// Sync samples, i.e. key frames (`stss` atom).
    pub fn stss(&self) -> Result<Stss, Mp4Error> {
        Stss::decode(self.data)
    }

    pub fn stps(&self) -> Result<Stps, Mp4Error> {
        Stps::decode(self.data)
    }

    /// Sample to chunk values (`stsc` atom - one for each `trak`).
    ///
    /// Path: `moov/trak<multiple>/mdia/minf/stbl/stsc`
    pub fn stsc(&self) -> Result<Stsc, Mp4Error> {
        Stsc::decode(self.data)
    }

    /// Extract sample to size values (`stsz` atom - one for each `trak`).
    ///
    /// Path: `moov/trak<multiple>/mdia/minf/stbl/stsz`
    pub fn stsz(&self) -> Result<Stsz, Mp4Error> {
        Stsz::decode(self.data)
    }

    /// Extract chunk offset values for files below 32bit limit
    /// (`stco` atom - one for each `trak`).
    ///
    /// Path: `moov/trak<multiple>/mdia/minf/stbl/stco`
    pub fn stco(&self) -> Result<Stco, Mp4Error> {
        Stco::decode(self.data)
    }

    pub fn sgpd(&self) -> Result<Sgpd, Mp4Error> {
        Sgpd::decode(self.data)
    }

    pub fn sbgp(&self) -> Result<Sbgp, Mp4Error> {
        Sbgp::decode(self.data)
    }

    /// Sample dependency flags (`sdtp` atom) for the first track that has one.
    /// The number of entries is taken from the `stsz` in the same
    /// sample table (`stbl`).
    pub fn sdtp(&self) -> Result<Sdtp, Mp4Error> {
        Sdtp::decode(self.data)
    }

    /// Extract user data atom (`udta`).
    /// Some vendors embed data such as device info,
    /// unique identifiers (Garmin VIRB UUID),
    /// or even data in vendor specific formats
    /// (GoPro undocumented GPMF data, separate from
    /// the main GPMF telemetry interleaved in the `mdat` atom).
    ///
    /// Path: `moov/udta`
    pub fn udta(&self) -> Result<Udta<'a>, Mp4Error> {
        Udta::decode(self.data)
    }

    /// Returns duration of MP4.
    /// Derived from `mvhd` atom (inside `moov` atom),
    /// which lists duration for whichever track is the longest.
    pub fn duration(&self) -> Result<time::Duration, Mp4Error> {
        Ok(self.mvhd()?.duration())
    }

    /// Rotation matrices for all movie (`mvhd`) and
    /// track (`tkhd`) headers that have one.
    /// Headers that fail to decode are skipped.
    pub fn rotations(&self) -> Vec<RotationMatrix> {
        let mvhd = Mvhd::decode_all(self.data).into_iter()
            .filter_map(|m| m.ok()?.rotation().copied());
        let tkhd = Tkhd::decode_all(self.data).into_iter()
            .filter_map(|t| t.ok()?.rotation().copied());

        mvhd.chain(tkhd).collect()
    }
}

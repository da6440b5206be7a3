//! Track header atom (`tkhd`).
//!
//! Location: `moov/trak[multiple]/tkhd`
//!
//! See: <https://developer.apple.com/documentation/quicktime-file-format/track_header_atom>

use binrw::BinRead;
use time::{Duration, PrimitiveDateTime};

use crate::{Atom, AtomDecode, Matrix, Mp4Error, RotationMatrix};

use super::JointVersionFlags;

/// Track header atom (`tkhd`).
///
/// Location: `moov/trak[multiple]/tkhd`
///
/// See: <https://developer.apple.com/documentation/quicktime-file-format/track_header_atom>
#[derive(Debug, Clone, BinRead)]
#[br(big)]
pub struct Tkhd {
    #[br(ignore)]
    pub(crate) atom_size: u32,
    pub(crate) version_flags: JointVersionFlags,
    /// Indicates the creation calendar date and time for the track header.
    /// Represents the calendar date and time in seconds since midnight,
    /// January 1, 1904, preferably using coordinated universal time (UTC).
    pub(crate) creation_time: u32,
    /// Indicates the last change date for the track header.
    /// Represents the calendar date and time in seconds since midnight,
    /// January 1, 1904, preferably using coordinated universal time (UTC).
    pub(crate) modification_time: u32,
    /// Uniquely identifies the track.
    /// Value 0 cannot be used.
    pub(crate) track_id: u32,
    /// Reserved. Should be set to 0.
    pub(crate) reserved1: u32,
    /// Indicates the duration of this track,
    /// in the movie’s time coordinate system.
    pub(crate) duration: u32,
    pub(crate) reserved2: u64,
    /// This track’s spatial priority in its movie.
    pub(crate) layer: u16,
    /// Identifies a collection of movie tracks that contain alternate data for one another.
    pub(crate) alternate_group: u16,
    /// 8.8 fixed-point value that indicates how loudly to play this track’s sound.
    /// 1.0 indicates normal volume.
    pub(crate) volume: u16,
    /// Reserved. Should be set to 0.
    pub(crate) reserved3: u16,
    /// The matrix structure associated with this track.
    pub(crate) matrix: [i32; 9],
    /// 32-bit fixed-point number
    /// that specifies the width of this track in pixels.
    pub(crate) track_width: u32,
    /// 32-bit fixed-point number
    /// that specifies the height of this track in pixels.
    pub(crate) track_height: u32,
    #[br(ignore)]
    pub(crate) rotation: Option<RotationMatrix>,
}

impl AtomDecode for Tkhd {
    const NAME: &'static str = "tkhd";

    fn from_atom(atom: &Atom) -> Result<Self, Mp4Error> {
        let mut tkhd = atom.read_at::<Self>(8)?;
        tkhd.atom_size = atom.size();
        tkhd.rotation = RotationMatrix::from_raw(&tkhd.matrix);
        Ok(tkhd)
    }
}

impl Tkhd {
    pub fn atom_size(&self) -> u32 {
        self.atom_size
    }

    /// 24-bit version, read jointly with flags.
    pub fn version(&self) -> i32 {
        self.version_flags.version
    }

    pub fn flags(&self) -> i16 {
        self.version_flags.flags
    }

    pub fn track_id(&self) -> u32 {
        self.track_id
    }

    /// Track width in pixels (video tracks only).
    pub fn width(&self) -> f64 {
        self.track_width as f64 / 2_u32.pow(16) as f64
    }

    /// Track height in pixels (video tracks only).
    pub fn height(&self) -> f64 {
        self.track_height as f64 / 2_u32.pow(16) as f64
    }

    pub fn layer(&self) -> u16 {
        self.layer
    }

    pub fn alternate_group(&self) -> u16 {
        self.alternate_group
    }

    /// Volume "level", indicating if adjustments to volume
    /// is suggested. 1.0 is normal volume.
    pub fn volume(&self) -> f64 {
        self.volume as f64 / 2_u16.pow(8) as f64
    }

    /// This track's unscaled duration.
    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// This track's duration in seconds.
    pub fn duration_sec(&self, time_scale: u32) -> f64 {
        self.duration as f64 / time_scale as f64
    }

    pub fn matrix_values(&self) -> &[i32; 9] {
        &self.matrix
    }

    pub fn matrix(&self) -> Matrix {
        Matrix::from_raw(&self.matrix)
    }

    /// Per-cell rotation degrees, `None` if the matrix
    /// holds no rotation of interest.
    pub fn rotation(&self) -> Option<&RotationMatrix> {
        self.rotation.as_ref()
    }

    /// Creation datetime for this track.
    pub fn creation_time(&self) -> PrimitiveDateTime {
        crate::consts::mp4_time_zero() + Duration::seconds(self.creation_time as i64)
    }

    /// Modification datetime for this track.
    pub fn modification_time(&self) -> PrimitiveDateTime {
        crate::consts::mp4_time_zero() + Duration::seconds(self.modification_time as i64)
    }
}

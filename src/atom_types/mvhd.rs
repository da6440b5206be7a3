//! Movie header atom (`mvhd`).
//!
//! Location: `moov/mvhd`
//!
//! See: <https://developer.apple.com/documentation/quicktime-file-format/movie_header_atom>

use binrw::BinRead;
use time::{Duration, ext::NumericalDuration};

use crate::{mp4_time_zero, Atom, AtomDecode, Matrix, Mp4Error, RotationMatrix};

use super::SignedVersionFlags;

/// Movie header atom (`mvhd`).
///
/// Location: `moov/mvhd`
///
/// See: <https://developer.apple.com/documentation/quicktime-file-format/movie_header_atom>
#[derive(Debug, Clone, BinRead)]
#[br(big)]
pub struct Mvhd {
    /// Total atom size in bytes.
    #[br(ignore)]
    pub(crate) atom_size: u32,
    pub(crate) version_flags: SignedVersionFlags,
    /// Seconds since midnight, 1904-01-01 UTC
    pub(crate) creation_time: u32,
    /// Seconds since midnight, 1904-01-01 UTC
    pub(crate) modification_time: u32,
    /// Number of time units that pass in one second
    pub(crate) time_scale: u32,
    /// Unscaled duration. I.e. "time units"
    /// that require dividing by time scale
    /// to derive a value in seconds.
    ///
    /// Corresponds to the longest track.
    pub(crate) duration: u32,
    /// Fixed point number (16.16)
    /// representing preferred play rate
    /// (1.0 = normal playback).
    pub(crate) preferred_rate: u32,
    /// Fixed point number (8.8)
    /// representing preferred volume
    /// (1.0 = full volume).
    pub(crate) preferred_volume: u16,
    pub(crate) reserved: [u8; 10],
    /// Row-major matrix values.
    pub(crate) matrix: [i32; 9],
    pub(crate) preview_time: u32,
    pub(crate) preview_duration: u32,
    pub(crate) poster_time: u32,
    pub(crate) selection_time: u32,
    pub(crate) selection_duration: u32,
    pub(crate) current_time: u32,
    pub(crate) next_track_id: u32,
    #[br(ignore)]
    pub(crate) rotation: Option<RotationMatrix>,
}

impl AtomDecode for Mvhd {
    const NAME: &'static str = "mvhd";

    fn from_atom(atom: &Atom) -> Result<Self, Mp4Error> {
        let mut mvhd = atom.read_at::<Self>(8)?;
        mvhd.atom_size = atom.size();
        mvhd.rotation = RotationMatrix::from_raw(&mvhd.matrix);
        Ok(mvhd)
    }
}

impl Mvhd {
    pub fn atom_size(&self) -> u32 {
        self.atom_size
    }

    pub fn version(&self) -> i8 {
        self.version_flags.version
    }

    pub fn flags(&self) -> i32 {
        self.version_flags.flags
    }

    pub fn time_scale(&self) -> u32 {
        self.time_scale
    }

    pub fn duration_unscaled(&self) -> u32 {
        self.duration
    }

    /// Preferred play rate, 1.0 is normal playback.
    pub fn preferred_rate(&self) -> f64 {
        self.preferred_rate as f64 / 2_u32.pow(16) as f64
    }

    /// Preferred volume, 1.0 is full volume.
    pub fn preferred_volume(&self) -> f64 {
        self.preferred_volume as f64 / 2_u16.pow(8) as f64
    }

    /// Raw, row-major matrix values.
    pub fn matrix_values(&self) -> &[i32; 9] {
        &self.matrix
    }

    /// Matrix as fixed-point values.
    pub fn matrix(&self) -> Matrix {
        Matrix::from_raw(&self.matrix)
    }

    /// Per-cell rotation degrees, `None` if the matrix
    /// holds no rotation of interest.
    pub fn rotation(&self) -> Option<&RotationMatrix> {
        self.rotation.as_ref()
    }

    pub fn preview_time(&self) -> u32 {
        self.preview_time
    }

    pub fn preview_duration(&self) -> u32 {
        self.preview_duration
    }

    pub fn poster_time(&self) -> u32 {
        self.poster_time
    }

    pub fn selection_time(&self) -> u32 {
        self.selection_time
    }

    pub fn selection_duration(&self) -> u32 {
        self.selection_duration
    }

    pub fn current_time(&self) -> u32 {
        self.current_time
    }

    pub fn next_track_id(&self) -> u32 {
        self.next_track_id
    }

    /// Creation time as UTC datetime.
    /// May default to MP4 default time
    /// `1904-01-01 00:00:00` depending on device and settings.
    pub fn creation_time(&self) -> time::PrimitiveDateTime {
        mp4_time_zero() + Duration::seconds(self.creation_time as i64)
    }

    /// Modification time as UTC datetime.
    pub fn modification_time(&self) -> time::PrimitiveDateTime {
        mp4_time_zero() + Duration::seconds(self.modification_time as i64)
    }

    /// Duration of the longest track.
    /// Zero if time scale is not set.
    pub fn duration(&self) -> Duration {
        if self.time_scale == 0 {
            return Duration::ZERO
        }
        (self.duration as f64 / self.time_scale as f64).seconds()
    }
}

//! Locate and decode atoms in QuickTime/MP4 files held in memory.
//! Does not and will not support any kind of video de/encoding.
//!
//! Atoms are found by scanning the buffer for their FourCC
//! (`find_tag_offsets()`), then read and decoded at the reported offset.
//! The scan has no notion of atom structure, so a FourCC occurring in
//! e.g. sample data is also reported. Decoding such a hit usually fails
//! with a size or table error. For structural guarantees, walk the atom
//! tree with `Mp4::headers()` instead.
//!
//! The implementation was mostly done with help from
//! <https://developer.apple.com/library/archive/documentation/QuickTime/QTFF/QTFFPreface/qtffPreface.html>
//! (despite the warning on the front page above).
//!
//! ```rs
//! use mp4scan::{AtomDecode, Mp4, Stco, find_tag_offsets};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let bytes = std::fs::read("VIDEO.MP4")?;
//!
//!     // One offset per track
//!     for offset in find_tag_offsets("stco", &bytes) {
//!         let stco = Stco::decode_at(&bytes, offset)?;
//!         println!("{:?}", stco.offsets());
//!     }
//!
//!     let mp4 = Mp4::new(&bytes);
//!
//!     // Derives duration for MP4 for longest track.
//!     println!("{:?}", mp4.duration()?);
//!
//!     // Rotation for movie and track headers
//!     println!("{:?}", mp4.rotations());
//!
//!     Ok(())
//! }
//! ```

pub mod mp4;
pub mod fourcc;
pub mod locate;
pub mod atom;
pub mod atom_types;
pub mod consts;
pub mod matrix;
pub mod support;
pub mod errors;
#[cfg(test)]
mod tests;

pub use mp4::Mp4;
pub use fourcc::FourCC;
pub use locate::{find_tag_offsets, find_fourcc, find_many};
pub use atom::{Atom, AtomHeader, Headers};
pub use atom_types::{
    AtomDecode,
    AtomType,
    Cslg,
    Ctts,
    Hdlr,
    Mdhd,
    Mvhd,
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
    UdtaField,
    CompositionOffset, // ctts component
    ComponentType, // hdlr component
    SampleDependency, // sdtp component
    SampleDescription, // stsd component
    SampleToChunk, // stsc component
    SampleToGroup, // sbgp component
    TimeToSample, // stts component
};
pub use matrix::{decode_rotation_matrix, Matrix, RotationMatrix};
pub use consts::{CONTAINER, USER_DATA, mp4_time_zero};
pub use errors::{ErrorKind, Mp4Error};

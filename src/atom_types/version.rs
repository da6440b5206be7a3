//! Version and flags fields, present in most atoms
//! directly after the header.
//!
//! Two packings are in use:
//! - `VersionFlags`: 8-bit version, 24-bit flags.
//! - `JointVersionFlags`: version and flags read jointly as an
//!   overlapping 24-bit version (bytes 0-2) and 16-bit flags
//!   (bytes 1-2). Byte 3 is skipped. Used for the track header
//!   and the `stsz`, `stco`, `stsc`, `stsd`, `stts` sample tables.
//!
//! Both occupy four bytes.

use binrw::BinRead;

use crate::support::{i24_from_be, u24_from_be};

/// 8-bit version, 24-bit flags.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, BinRead)]
#[br(big)]
pub struct VersionFlags {
    pub version: u8,
    #[br(map = u24_from_be)]
    pub flags: u32,
}

/// Signed 8-bit version, signed 24-bit flags.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, BinRead)]
#[br(big)]
pub struct SignedVersionFlags {
    pub version: i8,
    #[br(map = i24_from_be)]
    pub flags: i32,
}

/// Overlapping 24-bit version and 16-bit flags.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, BinRead)]
#[br(big)]
pub struct JointVersionFlags {
    #[br(restore_position, map = i24_from_be)]
    pub version: i32,
    #[br(pad_before = 1, pad_after = 1)]
    pub flags: i16,
}

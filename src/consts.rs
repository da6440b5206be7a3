use time::{macros::datetime, PrimitiveDateTime};

/// FourCC:s for known "container" atoms.
/// These are nested and contains more atoms,
/// within its specified, total size.
///
/// Only container atoms in the main MP4 tree are listed.
///
/// - `moov`: offset tables, timing, metadata, telemetry
/// - `trak`: moov.trak (multiple)
/// - `tref`: moov.trak.tref
/// - `edts`: moov.trak.edts
/// - `mdia`: moov.trak.mdia
/// - `minf`: moov.trak.mdia.minf
/// - `dinf`: moov.trak.mdia.minf.dinf
/// - `stbl`: moov.trak.mdia.minf.stbl, contains timing (stts), offsets (stco)
/// - `udta`: moov.udta, may contain custom data, specific to the device
pub const CONTAINER: [&str; 9] = [
    "moov",
    "trak",
    "tref",
    "edts",
    "mdia",
    "minf",
    "dinf",
    "stbl",
    "udta",
];

/// Atoms inside the sample table atom (`moov/trak/mdia/minf/stbl`)
/// that index a track's samples.
pub const SAMPLE_TABLE: [&str; 13] = [
    "stsd",
    "stts",
    "ctts",
    "cslg",
    "stss",
    "stps",
    "stsc",
    "stsz",
    "stco",
    "stsh",
    "sgpd",
    "sbgp",
    "sdtp",
];

/// Recognised atoms without a decoder.
/// Decoding one of these returns `Mp4Error::Unsupported`.
pub const UNSUPPORTED: [&str; 13] = [
    "stsh",
    "clip",
    "crgn",
    "matt",
    "tapt",
    "edts",
    "tref",
    "load",
    "imap",
    "elng",
    "ctab",
    "cmov",
    "rmra",
];

/// User data list tags (`moov/udta/*`, `moov/trak/udta/*`).
/// `©` is matched as the single byte `0xA9`.
///
/// See: <https://developer.apple.com/documentation/quicktime-file-format/user_data_atoms>
pub const USER_DATA: [&str; 49] = [
    "©arg", "©ark", "©cok", "©com", "©cpy", "©day", "©dir",
    "©ed1", "©ed2", "©ed3", "©ed4", "©ed5", "©ed6", "©ed7",
    "©ed8", "©ed9", "©fmt", "©inf", "©isr", "©lab", "©lal",
    "©mak", "©mal", "©nak", "©nam", "©pdk", "©phg", "©prd",
    "©prf", "©prk", "©prl", "©req", "©snk", "©snm", "©src",
    "©swf", "©swk", "©swr", "©wrt", "AllF", "hinf", "hnti",
    "name", "tnam", "tagc", "LOOP", "ptv ", "SelO", "WLOC",
];

/// Time zero for MP4 containers. Midnight January 1, 1904.
pub fn mp4_time_zero() -> PrimitiveDateTime {
    datetime!(1904-01-01 0:00)
}

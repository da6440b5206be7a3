//! Locate atoms by scanning a buffer for their FourCC.
//!
//! The scan has no notion of atom structure: any occurrence
//! of the four bytes is reported, including those that happen
//! to be part of e.g. raw sample data in `mdat`.
//! Use `Atom::read()` on each offset to verify that a hit
//! reads as a well-formed atom, or walk the atom tree with
//! `Mp4::headers()` when structural guarantees are needed.

use rayon::prelude::*;

use crate::FourCC;

/// Returns the byte offset for every occurrence of `tag`
/// (i.e. the offset of the FourCC's first byte,
/// not that of the preceding atom size),
/// in ascending order.
///
/// Returns an empty `Vec` if there are no matches,
/// or if `tag` is not a four byte FourCC.
pub fn find_tag_offsets(tag: &str, data: &[u8]) -> Vec<usize> {
    find_fourcc(&FourCC::from_str(tag), data)
}

/// Same as `find_tag_offsets()` for a `FourCC`.
pub fn find_fourcc(fourcc: &FourCC, data: &[u8]) -> Vec<usize> {
    let needle = match fourcc.to_bytes() {
        Ok(b) => b,
        Err(err) => {
            log::warn!("{err}, nothing to locate");
            return Vec::new()
        }
    };

    let offsets: Vec<usize> = data.windows(needle.len())
        .enumerate()
        .filter_map(|(i, w)| if w == needle.as_slice() {Some(i)} else {None})
        .collect();

    log::debug!("located {} x '{fourcc}' in {} bytes", offsets.len(), data.len());

    offsets
}

/// Scans `data` for several tags in parallel.
/// Returns `(FourCC, OFFSETS)` in the same order as `tags`,
/// including tags without matches.
pub fn find_many(tags: &[&str], data: &[u8]) -> Vec<(FourCC, Vec<usize>)> {
    tags.par_iter()
        .map(|tag| {
            let fourcc = FourCC::from_str(tag);
            let offsets = find_fourcc(&fourcc, data);
            (fourcc, offsets)
        })
        .collect()
}

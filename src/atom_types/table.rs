//! Entry tables in sample table atoms.
//!
//! All entries in a table have the same byte width,
//! derived from the bytes remaining in the atom after the entry count
//! and the declared number of entries.
//! Each entry is read at `table_start + index * width`.

use binrw::BinRead;

use crate::{Atom, Mp4Error};

/// Fixed-width table entry.
pub trait TableEntry: BinRead {
    /// Minimum number of bytes for the entry's fields.
    const WIDTH: usize;
}

impl TableEntry for u8 {
    const WIDTH: usize = 1;
}

impl TableEntry for u32 {
    const WIDTH: usize = 4;
}

/// Number of table bytes from `table_start` (relative to atom start)
/// until the end of the atom.
pub(crate) fn table_size(atom: &Atom, table_start: usize) -> Result<usize, Mp4Error> {
    atom.data().len().checked_sub(table_start)
        .ok_or(Mp4Error::BoundsError((table_start, atom.data().len())))
}

/// Reads `no_of_entries` entries starting at `table_start`
/// (relative to atom start).
///
/// Fails if entry count and table size do not divide
/// into whole records of at least `T::WIDTH` bytes.
pub(crate) fn read_table<T>(
    atom: &Atom,
    table_start: usize,
    no_of_entries: u32
) -> Result<Vec<T>, Mp4Error>
where
    T: TableEntry,
    <T as BinRead>::Args<'static>: Sized + Clone + Default
{
    let size = table_size(atom, table_start)?;

    let mismatch = || Mp4Error::TableMismatch{
        name: atom.name().to_str().to_owned(),
        entries: no_of_entries,
        table_size: size
    };

    if no_of_entries == 0 {
        return match size {
            0 => Ok(Vec::new()),
            _ => Err(mismatch()),
        }
    }

    let n = no_of_entries as usize;
    if size == 0 || size % n != 0 {
        return Err(mismatch())
    }

    let width = size / n;
    if width < T::WIDTH {
        return Err(mismatch())
    }

    log::debug!("'{}' table: {n} entries x {width} bytes @ {table_start}", atom.name());

    (0..n)
        .map(|i| atom.read_at::<T>(table_start + i * width))
        .collect()
}

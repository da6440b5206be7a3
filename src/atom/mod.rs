//! Atom views and headers over a byte buffer.

mod atom;
mod atom_header;

pub use atom::Atom;
pub use atom_header::{AtomHeader, Headers};

//! Handler reference atom (`hdlr`).
//!
//! > Note: Distinguish from 'Metadata handler atom' with the same FourCC.
//!
//! See: <https://developer.apple.com/documentation/quicktime-file-format/handler_reference_atom>

use binrw::BinRead;

use crate::{
    support::{handler_name, number_to_hex, tag_from_i32},
    Atom,
    AtomDecode,
    Mp4Error
};

use super::SignedVersionFlags;

/// Byte offset, relative to atom start, for the component name.
const COMPONENT_NAME: usize = 32;

fn hex_field(value: i32) -> String {
    number_to_hex(value as i64)
}

/// Handler reference atom (`hdlr`)
///
/// See: <https://developer.apple.com/documentation/quicktime-file-format/handler_reference_atom>
#[derive(Debug, Clone, Default, BinRead)]
#[br(big)]
pub struct Hdlr {
    #[br(ignore)]
    pub(crate) atom_size: u32,
    pub(crate) version_flags: SignedVersionFlags,
    /// Possible values:
    /// - `mhlr`: media handler
    /// - `dhlr`: data handler
    /// - `None` if `[0, 0, 0, 0]` (DJI Osmo)
    #[br(map = tag_from_i32)]
    pub(crate) component_type: Option<String>,
    /// Four CC for the type of media or data handler
    #[br(map = tag_from_i32)]
    pub(crate) component_sub_type: Option<String>,
    /// Reserved, should be set to 0.
    #[br(map = hex_field)]
    pub(crate) component_manufacturer: String,
    /// Reserved, should be set to 0.
    #[br(map = hex_field)]
    pub(crate) component_flags: String,
    /// Reserved, should be set to 0.
    #[br(map = hex_field)]
    pub(crate) component_flags_mask: String,
    /// First four bytes of the component name, as a tag.
    #[br(ignore)]
    pub(crate) component_name_tag: Option<String>,
    /// May be a counted string (first byte specifies size),
    /// null terminated string, or neither.
    #[br(ignore)]
    pub(crate) component_name: String,
}

impl AtomDecode for Hdlr {
    const NAME: &'static str = "hdlr";

    fn from_atom(atom: &Atom) -> Result<Self, Mp4Error> {
        let mut hdlr = atom.read_at::<Self>(8)?;
        hdlr.atom_size = atom.size();

        let name = atom.data().get(COMPONENT_NAME ..).unwrap_or_default();
        if name.len() >= 4 {
            hdlr.component_name_tag = tag_from_i32(atom.read_at::<i32>(COMPONENT_NAME)?);
        }
        hdlr.component_name = handler_name(name);

        Ok(hdlr)
    }
}

impl Hdlr {
    pub fn atom_size(&self) -> u32 {
        self.atom_size
    }

    pub fn version(&self) -> i8 {
        self.version_flags.version
    }

    pub fn flags(&self) -> i32 {
        self.version_flags.flags
    }

    /// Returns component type.
    /// Should be either `mhlr` (media handler),
    /// or `dhlr` (data handler).
    ///
    /// See: <https://developer.apple.com/library/archive/documentation/QuickTime/QTFF/QTFFChap2/qtff2.html#//apple_ref/doc/uid/TP40000939-CH204-BBCGFGJG>
    pub fn component_type(&self) -> Option<&str> {
        self.component_type.as_deref()
    }

    /// Returns component sub type,
    /// e.g. `vide` for video, `soun` for sound.
    pub fn component_sub_type(&self) -> Option<&str> {
        self.component_sub_type.as_deref()
    }

    /// Media type derived from component sub type.
    pub fn media_type(&self) -> ComponentType {
        ComponentType::from(self.component_sub_type())
    }

    pub fn component_manufacturer(&self) -> &str {
        &self.component_manufacturer
    }

    pub fn component_flags(&self) -> &str {
        &self.component_flags
    }

    pub fn component_flags_mask(&self) -> &str {
        &self.component_flags_mask
    }

    pub fn component_name_tag(&self) -> Option<&str> {
        self.component_name_tag.as_deref()
    }

    pub fn component_name(&self) -> &str {
        self.component_name.as_str()
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ComponentType {
    Video,
    Sound,
    TimeCode,
    Meta,
    #[default]
    Unknown
}

impl From<Option<&str>> for ComponentType {
    fn from(value: Option<&str>) -> Self {
        match value {
            Some("vide") => Self::Video,
            Some("soun") => Self::Sound,
            Some("tmcd") => Self::TimeCode,
            Some("meta") => Self::Meta,
            _ => Self::Unknown,
        }
    }
}

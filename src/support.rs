//! Hex/text conversions for type tags and numeric fields,
//! and big endian reads of odd widths (24 and 48 bits)
//! over plain byte slices.

use crate::Mp4Error;

/// Upper case hexadecimal representation of `number`, without padding.
/// Negative values are first reinterpreted as the unsigned
/// 32-bit two's complement value.
///
/// ```
/// use mp4scan::support::number_to_hex;
/// assert_eq!(number_to_hex(255), "FF");
/// assert_eq!(number_to_hex(-1), "FFFFFFFF");
/// ```
pub fn number_to_hex(number: i64) -> String {
    let number = match number < 0 {
        true => 0xFFFF_FFFF + number + 1,
        false => number,
    };
    format!("{number:X}")
}

/// Lower case hexadecimal code point for each character
/// in `string`, without padding, concatenated.
/// Turns e.g. `"tkhd"` into `"746b6864"`.
pub fn string_to_hex(string: &str) -> String {
    string.chars()
        .map(|c| format!("{:x}", u32::from(c)))
        .collect()
}

/// Pairs hex digits into bytes and maps each byte to a `char`
/// (ISO 8859-1). A trailing, unpaired digit is read on its own.
/// Pairs that are not hexadecimal map to `U+0000`.
///
/// Returns `None` for `"0"`, i.e. an all-zero field.
pub fn hex_to_ascii(hex: &str) -> Option<String> {
    if hex == "0" {
        return None
    }

    let string = hex.as_bytes()
        .chunks(2)
        .map(|pair| {
            std::str::from_utf8(pair).ok()
                .and_then(|p| u8::from_str_radix(p, 16).ok())
                .map(char::from)
                .unwrap_or('\0')
        })
        .collect();

    Some(string)
}

/// Four character tag from a 32-bit field,
/// via `hex_to_ascii(number_to_hex(value))`.
/// Leading zero bytes are dropped by the hex step,
/// and an all-zero field yields `None`.
pub(crate) fn tag_from_i32(value: i32) -> Option<String> {
    hex_to_ascii(&number_to_hex(value as i64))
}

/// Signed 24-bit big endian value.
pub(crate) fn i24_from_be(bytes: [u8; 3]) -> i32 {
    // sign extend via the top byte
    i32::from_be_bytes([bytes[0], bytes[1], bytes[2], 0]) >> 8
}

/// Unsigned 24-bit big endian value.
pub(crate) fn u24_from_be(bytes: [u8; 3]) -> u32 {
    u32::from_be_bytes([0, bytes[0], bytes[1], bytes[2]])
}

/// Signed 48-bit big endian value.
pub(crate) fn i48_from_be(bytes: [u8; 6]) -> i64 {
    i64::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], 0, 0]) >> 16
}

/// Unsigned 48-bit big endian value.
pub(crate) fn u48_from_be(bytes: [u8; 6]) -> u64 {
    u64::from_be_bytes([0, 0, bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5]])
}

/// Big endian reads at absolute byte offsets.
/// Every read is bounds checked and returns
/// `Mp4Error::BoundsError` rather than panicking.
pub trait ReadBe {
    /// Returns `N` bytes starting at `offset`.
    fn be_bytes<const N: usize>(&self, offset: usize) -> Result<[u8; N], Mp4Error>;

    fn be_i8(&self, offset: usize) -> Result<i8, Mp4Error> {
        Ok(i8::from_be_bytes(self.be_bytes(offset)?))
    }

    fn be_u8(&self, offset: usize) -> Result<u8, Mp4Error> {
        Ok(u8::from_be_bytes(self.be_bytes(offset)?))
    }

    fn be_i16(&self, offset: usize) -> Result<i16, Mp4Error> {
        Ok(i16::from_be_bytes(self.be_bytes(offset)?))
    }

    fn be_u16(&self, offset: usize) -> Result<u16, Mp4Error> {
        Ok(u16::from_be_bytes(self.be_bytes(offset)?))
    }

    fn be_i24(&self, offset: usize) -> Result<i32, Mp4Error> {
        Ok(i24_from_be(self.be_bytes(offset)?))
    }

    fn be_u24(&self, offset: usize) -> Result<u32, Mp4Error> {
        Ok(u24_from_be(self.be_bytes(offset)?))
    }

    fn be_i32(&self, offset: usize) -> Result<i32, Mp4Error> {
        Ok(i32::from_be_bytes(self.be_bytes(offset)?))
    }

    fn be_u32(&self, offset: usize) -> Result<u32, Mp4Error> {
        Ok(u32::from_be_bytes(self.be_bytes(offset)?))
    }

    fn be_i48(&self, offset: usize) -> Result<i64, Mp4Error> {
        Ok(i48_from_be(self.be_bytes(offset)?))
    }

    fn be_u48(&self, offset: usize) -> Result<u64, Mp4Error> {
        Ok(u48_from_be(self.be_bytes(offset)?))
    }

    fn be_i64(&self, offset: usize) -> Result<i64, Mp4Error> {
        Ok(i64::from_be_bytes(self.be_bytes(offset)?))
    }

    fn be_u64(&self, offset: usize) -> Result<u64, Mp4Error> {
        Ok(u64::from_be_bytes(self.be_bytes(offset)?))
    }
}

impl ReadBe for [u8] {
    fn be_bytes<const N: usize>(&self, offset: usize) -> Result<[u8; N], Mp4Error> {
        let end = offset.checked_add(N)
            .ok_or(Mp4Error::BoundsError((offset, self.len())))?;
        self.get(offset .. end)
            .and_then(|b| b.try_into().ok())
            .ok_or(Mp4Error::BoundsError((end, self.len())))
    }
}

/// Handler name from the bytes following the fixed `hdlr` fields.
/// May be a counted string (first byte specifies size),
/// a null terminated string, or neither.
/// Null bytes are dropped and whitespace trimmed.
pub(crate) fn handler_name(bytes: &[u8]) -> String {
    let name = match bytes.first() {
        Some(count) if *count as usize + 1 <= bytes.len() => &bytes[1 .. *count as usize + 1],
        _ => bytes,
    };
    name.iter()
        .filter_map(|n| match n {
            0 => None,
            _ => Some(*n as char)
        })
        .collect::<String>()
        .trim()
        .to_owned()
}

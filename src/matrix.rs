//! Matrix structure in movie (`mvhd`) and track (`tkhd`) headers.
//!
//! Nine 32-bit values, row-major:
//!
//! ```ignore
//! | a b u |
//! | c d v |
//! | x y w |
//! ```
//!
//! `a`, `b`, `c`, `d`, `x`, `y` are 16.16 fixed-point,
//! `u`, `v`, `w` (third column) are 2.30 fixed-point.
//!
//! Two readings are provided:
//! - `RotationMatrix`: per-cell degrees derived from the hex
//!   representation of each value, kept for compatibility with
//!   existing orientation consumers. The numeric transform is
//!   unusual (an arcsine over part of the hex digits), see
//!   `RotationMatrix::from_raw()`.
//! - `Matrix`: the plain fixed-point values, with
//!   `Matrix::rotation_degrees()` deriving the rotation angle.
//!
//! See: <https://developer.apple.com/documentation/quicktime-file-format/movie_header_atom/matrix_structure>

use std::f64::consts::PI;

use fixed::types::{I16F16, I2F30};

use crate::{support::{number_to_hex, ReadBe}, Mp4Error};

/// Size in bytes of the matrix structure.
pub const MATRIX_SIZE: usize = 36;

/// Per-cell degrees, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RotationMatrix(pub [[u16; 3]; 3]);

impl RotationMatrix {
    /// Derives degrees from the nine raw matrix values.
    ///
    /// For each value the unpadded, upper case hex string is reversed,
    /// then split into chunks of 4 characters (columns 1, 2)
    /// or 6 characters (column 3).
    /// - If there is a second chunk, it is reversed back,
    ///   parsed as hex, divided by `65536` and passed through
    ///   `asin`, then converted to rounded, absolute degrees.
    ///   A non-zero result marks the matrix as relevant.
    /// - Otherwise the hex string is parsed as a decimal integer
    ///   (leading digits only) with the same transform applied.
    ///   These cells never mark the matrix as relevant.
    ///
    /// Cells without a numeric result (e.g. `asin` of a value above 1)
    /// are set to `0`.
    ///
    /// Returns `None` if no cell marked the matrix as relevant,
    /// e.g. for the identity matrix.
    pub fn from_raw(values: &[i32; 9]) -> Option<Self> {
        let mut matrix = [[0_u16; 3]; 3];
        let mut relevant = false;

        for (i, value) in values.iter().enumerate() {
            let (row, col) = (i / 3, i % 3);
            let (degrees, is_relevant) = cell_degrees(*value, col == 2);
            matrix[row][col] = degrees;
            relevant |= is_relevant;
        }

        match relevant {
            true => Some(Self(matrix)),
            false => None,
        }
    }

    pub fn rows(&self) -> &[[u16; 3]; 3] {
        &self.0
    }

    pub fn get(&self, row: usize, col: usize) -> Option<u16> {
        self.0.get(row)?.get(col).copied()
    }
}

/// Returns `(DEGREES, HAS_RELEVANT_DATA)` for a single matrix value.
fn cell_degrees(value: i32, third_column: bool) -> (u16, bool) {
    let chunk = match third_column {
        true => 6,
        false => 4,
    };

    let hex = number_to_hex(value as i64);
    let reversed: Vec<char> = hex.chars().rev().collect();

    match reversed.chunks(chunk).nth(1) {
        Some(second) => {
            let hex16: String = second.iter().rev().collect();
            let ratio = u32::from_str_radix(&hex16, 16)
                .map(|v| v as f64 / 65536.0)
                .unwrap_or(f64::NAN);
            let degrees = to_degrees(ratio, value);
            (degrees, degrees != 0)
        },
        None => {
            let ratio = parse_leading_decimal(&hex)
                .map(|v| v as f64 / 65536.0)
                .unwrap_or(f64::NAN);
            (to_degrees(ratio, value), false)
        }
    }
}

/// `|round(asin(ratio) * 180 / π)|`, with `0` for non-numeric results.
fn to_degrees(ratio: f64, value: i32) -> u16 {
    let degrees = (ratio.asin() * 180.0 / PI).round().abs();
    if degrees.is_nan() {
        log::debug!("no angle for matrix value {value:#010X}, using 0");
        return 0
    }
    degrees as u16
}

/// Parses leading decimal digits, ignoring the rest.
/// `None` if `string` does not start with a digit.
fn parse_leading_decimal(string: &str) -> Option<u64> {
    let digits: String = string.chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// Reads the nine matrix values starting at `offset` in `data`,
/// and derives per-cell degrees. See `RotationMatrix::from_raw()`.
///
/// Returns `Ok(None)` when the matrix has no relevant rotation data.
pub fn decode_rotation_matrix(data: &[u8], offset: usize) -> Result<Option<RotationMatrix>, Mp4Error> {
    let mut values = [0_i32; 9];
    for (i, value) in values.iter_mut().enumerate() {
        *value = data.be_i32(offset + i * 4)?;
    }
    Ok(RotationMatrix::from_raw(&values))
}

/// Matrix structure as fixed-point numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Matrix {
    pub a: I16F16,
    pub b: I16F16,
    pub u: I2F30,
    pub c: I16F16,
    pub d: I16F16,
    pub v: I2F30,
    pub x: I16F16,
    pub y: I16F16,
    pub w: I2F30,
}

impl Matrix {
    pub fn identity() -> Self {
        Self::from_raw(&[0x0001_0000, 0, 0, 0, 0x0001_0000, 0, 0, 0, 0x4000_0000])
    }

    /// Matrix from the nine raw, row-major values.
    pub fn from_raw(values: &[i32; 9]) -> Self {
        Self {
            a: I16F16::from_bits(values[0]),
            b: I16F16::from_bits(values[1]),
            u: I2F30::from_bits(values[2]),
            c: I16F16::from_bits(values[3]),
            d: I16F16::from_bits(values[4]),
            v: I2F30::from_bits(values[5]),
            x: I16F16::from_bits(values[6]),
            y: I16F16::from_bits(values[7]),
            w: I2F30::from_bits(values[8]),
        }
    }

    /// Clockwise rotation in degrees, `0 <= degrees < 360`,
    /// derived from the `a` (cosine) and `b` (sine) cells.
    /// E.g. a portrait recording on a phone is usually `90.0`.
    pub fn rotation_degrees(&self) -> f64 {
        let a = self.a.to_num::<f64>();
        let b = self.b.to_num::<f64>();
        b.atan2(a).to_degrees().rem_euclid(360.0)
    }

    /// Translation `(x, y)` in pixels.
    pub fn translation(&self) -> (f64, f64) {
        (self.x.to_num(), self.y.to_num())
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::identity()
    }
}

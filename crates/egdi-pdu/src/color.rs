//! 24-bit color reads shared by several order kinds.

use crate::cursor::ReadCursor;
use crate::{Decode, DecodeResult};

/// A 24-bit color carried in a 4-byte little-endian word; the top byte is
/// ignored on the wire.
///
/// 2.2.2.2.1.3.4.1.1 TS_COLORREF (rgb ordering).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColorRef(u32);

impl ColorRef {
    pub const FIXED_PART_SIZE: usize = 4;

    pub const fn value(self) -> u32 {
        self.0
    }
}

impl Decode<'_> for ColorRef {
    fn decode(src: &mut ReadCursor<'_>) -> DecodeResult<Self> {
        ensure_fixed_part_size!(in: src);
        Ok(ColorRef(src.read_u32() & 0x00FF_FFFF))
    }
}

/// A color-table entry; same wire shape as [`ColorRef`] with bgr ordering.
///
/// 2.2.2.2.1.2.4.1 TS_COLOR_QUAD.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColorQuad(u32);

impl ColorQuad {
    pub const FIXED_PART_SIZE: usize = 4;

    pub const fn value(self) -> u32 {
        self.0
    }
}

impl Decode<'_> for ColorQuad {
    fn decode(src: &mut ReadCursor<'_>) -> DecodeResult<Self> {
        ensure_fixed_part_size!(in: src);
        Ok(ColorQuad(src.read_u32() & 0x00FF_FFFF))
    }
}

//! Nine-grid bitmap creation order.

use crate::color::ColorRef;
use crate::cursor::ReadCursor;
use crate::{decode_cursor, Decode, DecodeResult};

/// 2.2.2.2.1.3.4 TS_CREATE_NINEGRID_BITMAP_ORDER.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateNineGridBitmap {
    pub bpp: u8,
    pub bitmap_id: u16,
    pub flags: u32,
    pub left_width: u16,
    pub right_width: u16,
    pub top_height: u16,
    pub bottom_height: u16,
    pub transparent_color: ColorRef,
}

impl CreateNineGridBitmap {
    const FIXED_PART_SIZE: usize = 1 + 2 + 4 + 2 + 2 + 2 + 2 + ColorRef::FIXED_PART_SIZE;
}

impl Decode<'_> for CreateNineGridBitmap {
    fn decode(src: &mut ReadCursor<'_>) -> DecodeResult<Self> {
        ensure_fixed_part_size!(in: src);

        let bpp = src.read_u8();
        let bitmap_id = src.read_u16();
        let flags = src.read_u32();
        let left_width = src.read_u16();
        let right_width = src.read_u16();
        let top_height = src.read_u16();
        let bottom_height = src.read_u16();
        let transparent_color = decode_cursor::<ColorRef>(src)?;

        Ok(CreateNineGridBitmap {
            bpp,
            bitmap_id,
            flags,
            left_width,
            right_width,
            top_height,
            bottom_height,
            transparent_color,
        })
    }
}

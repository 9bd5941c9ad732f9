//! Offscreen surface management orders.

use crate::cursor::ReadCursor;
use crate::{Decode, DecodeResult};

/// Reserved id addressing the primary screen surface, which always exists.
pub const SCREEN_SURFACE_ID: u16 = 0xFFFF;

/// 2.2.2.2.1.3.2 TS_CREATE_OFFSCR_BITMAP_ORDER.
///
/// The flags word packs the new surface id in its low 15 bits; the high
/// bit announces a trailing list of surface ids to delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateOffscreenBitmap {
    pub surface_id: u16,
    pub width: u16,
    pub height: u16,
    pub delete_list: Vec<u16>,
}

impl CreateOffscreenBitmap {
    const FIXED_PART_SIZE: usize = 2 + 2 + 2;
}

impl Decode<'_> for CreateOffscreenBitmap {
    fn decode(src: &mut ReadCursor<'_>) -> DecodeResult<Self> {
        ensure_fixed_part_size!(in: src);

        let flags = src.read_u16();
        let surface_id = flags & 0x7FFF;
        let has_delete_list = flags & 0x8000 != 0;
        let width = src.read_u16();
        let height = src.read_u16();

        let mut delete_list = Vec::new();
        if has_delete_list {
            ensure_size!(in: src, size: 2);
            let count = src.read_u16();
            ensure_size!(in: src, size: usize::from(count) * 2);
            delete_list.reserve(usize::from(count));
            for _ in 0..count {
                delete_list.push(src.read_u16());
            }
        }

        Ok(CreateOffscreenBitmap {
            surface_id,
            width,
            height,
            delete_list,
        })
    }
}

/// 2.2.2.2.1.3.3 TS_SWITCH_SURFACE_ORDER.
///
/// Referencing an id with no matching create order is a desynchronization
/// signal, reported distinctly from malformed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchSurface {
    pub surface_id: u16,
}

impl SwitchSurface {
    const FIXED_PART_SIZE: usize = 2;
}

impl Decode<'_> for SwitchSurface {
    fn decode(src: &mut ReadCursor<'_>) -> DecodeResult<Self> {
        ensure_fixed_part_size!(in: src);

        Ok(SwitchSurface {
            surface_id: src.read_u16(),
        })
    }
}

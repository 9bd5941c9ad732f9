//! Color table cache order.

use crate::color::ColorQuad;
use crate::cursor::ReadCursor;
use crate::{decode_cursor, DecodeError, DecodeResult};

/// Number of entries every color table carries on the wire.
const COLOR_TABLE_LEN: u16 = 256;

/// 2.2.2.2.1.2.4 TS_CACHE_COLOR_TABLE_ORDER.
///
/// Color tables are forwarded to the consumer as-is; they do not occupy a
/// slot in the two-level GDI cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheColorTable {
    pub cache_index: u8,
    pub colors: Vec<ColorQuad>,
}

impl CacheColorTable {
    const FIXED_PART_SIZE: usize = 1 + 2;

    pub fn decode(src: &mut ReadCursor<'_>) -> DecodeResult<Self> {
        ensure_fixed_part_size!(in: src);

        let cache_index = src.read_u8();
        let number_colors = src.read_u16();

        if number_colors != COLOR_TABLE_LEN {
            return Err(DecodeError::InvalidColorTableSize { count: number_colors });
        }

        let mut colors = Vec::with_capacity(usize::from(number_colors));
        for _ in 0..number_colors {
            colors.push(decode_cursor::<ColorQuad>(src)?);
        }

        Ok(CacheColorTable { cache_index, colors })
    }
}

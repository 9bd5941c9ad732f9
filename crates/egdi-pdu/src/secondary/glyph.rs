//! Glyph cache order (revision 1).

use crate::cursor::ReadCursor;
use crate::{DecodeError, DecodeResult};

/// extraFlags bit selecting the revision 2 glyph order layout.
const GLYPH_ORDER_REV2: u16 = 0x0002;

/// extraFlags bit announcing a trailing array of UTF-16 code units.
const GLYPH_UNICODE_PRESENT: u16 = 0x0010;

/// A single glyph carried by a [`CacheGlyph`] order.
///
/// 2.2.2.2.1.2.5.1 TS_CACHE_GLYPH_DATA. The 1bpp glyph bitmap rows are
/// byte-aligned and the whole bitmap is padded to a 4-byte boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheGlyphData {
    pub cache_index: u16,
    pub width: u16,
    pub height: u16,
    pub bitmap: Vec<u8>,
}

impl CacheGlyphData {
    const FIXED_PART_SIZE: usize = 2 + 2 + 2;

    fn decode(src: &mut ReadCursor<'_>) -> DecodeResult<Self> {
        ensure_fixed_part_size!(in: src);

        let cache_index = src.read_u16();
        let width = src.read_u16();
        let height = src.read_u16();

        let row_bytes = (usize::from(width) + 7) / 8;
        let bitmap_length = (row_bytes * usize::from(height) + 3) & !3;

        ensure_size!(in: src, size: bitmap_length);
        let bitmap = src.read_slice(bitmap_length).to_vec();

        Ok(CacheGlyphData {
            cache_index,
            width,
            height,
            bitmap,
        })
    }
}

/// 2.2.2.2.1.2.5 TS_CACHE_GLYPH_ORDER.
///
/// Only the revision 1 layout is implemented; a revision 2 order is
/// rejected with a distinct unsupported error rather than misparsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheGlyph {
    pub cache_id: u8,
    pub glyphs: Vec<CacheGlyphData>,
    pub unicode_chars: Vec<u16>,
}

impl CacheGlyph {
    const FIXED_PART_SIZE: usize = 1 + 1;

    pub fn decode(src: &mut ReadCursor<'_>, extra_flags: u16) -> DecodeResult<Self> {
        if extra_flags & GLYPH_ORDER_REV2 != 0 {
            return Err(DecodeError::Unsupported {
                name: "glyph cache order revision 2",
            });
        }

        ensure_fixed_part_size!(in: src);

        let cache_id = src.read_u8();
        let glyph_count = src.read_u8();

        let mut glyphs = Vec::with_capacity(usize::from(glyph_count));
        for _ in 0..glyph_count {
            glyphs.push(CacheGlyphData::decode(src)?);
        }

        let mut unicode_chars = Vec::new();
        if extra_flags & GLYPH_UNICODE_PRESENT != 0 && glyph_count > 0 {
            ensure_size!(in: src, size: usize::from(glyph_count) * 2);
            unicode_chars.reserve(usize::from(glyph_count));
            for _ in 0..glyph_count {
                unicode_chars.push(src.read_u16());
            }
        }

        Ok(CacheGlyph {
            cache_id,
            glyphs,
            unicode_chars,
        })
    }
}

//! Streamed bitmap and GDI+ orders.
//!
//! These orders split one logical payload across a First record, any
//! number of Next records and an End record. Only the First record carries
//! sizes: the total payload size and the block size every following chunk
//! uses. The EMF and codec payloads themselves are opaque to this crate.

use bitflags::bitflags;

use crate::cursor::ReadCursor;
use crate::{Decode, DecodeResult};

bitflags! {
    /// bitmapFlags of the stream bitmap orders.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct StreamBitmapFlags: u8 {
        const END = 0x01;
        const COMPRESSED = 0x02;
        const REV2 = 0x04;
    }
}

/// 2.2.2.2.1.3.5.1 TS_STREAM_BITMAP_FIRST_ORDER.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamBitmapFirst {
    pub flags: StreamBitmapFlags,
    pub bpp: u8,
    pub bitmap_type: u16,
    pub width: u16,
    pub height: u16,
    pub total_size: u32,
    pub block: Vec<u8>,
}

impl StreamBitmapFirst {
    const FIXED_PART_SIZE: usize = 1 + 1 + 2 + 2 + 2;
}

impl Decode<'_> for StreamBitmapFirst {
    fn decode(src: &mut ReadCursor<'_>) -> DecodeResult<Self> {
        ensure_fixed_part_size!(in: src);

        let flags = StreamBitmapFlags::from_bits_truncate(src.read_u8());
        let bpp = src.read_u8();
        let bitmap_type = src.read_u16();
        let width = src.read_u16();
        let height = src.read_u16();

        // The total size field widens to 32 bits for revision 2 streams.
        let total_size = if flags.contains(StreamBitmapFlags::REV2) {
            ensure_size!(in: src, size: 4);
            src.read_u32()
        } else {
            ensure_size!(in: src, size: 2);
            u32::from(src.read_u16())
        };

        ensure_size!(in: src, size: 2);
        let block_size = usize::from(src.read_u16());

        ensure_size!(in: src, size: block_size);
        let block = src.read_slice(block_size).to_vec();

        Ok(StreamBitmapFirst {
            flags,
            bpp,
            bitmap_type,
            width,
            height,
            total_size,
            block,
        })
    }
}

/// 2.2.2.2.1.3.5.2 TS_STREAM_BITMAP_NEXT_ORDER.
///
/// Next records carry no size of their own; the block size declared by the
/// First record applies to every continuation chunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamBitmapNext {
    pub flags: StreamBitmapFlags,
    pub bitmap_type: u16,
    pub block: Vec<u8>,
}

impl StreamBitmapNext {
    const FIXED_PART_SIZE: usize = 1 + 2;

    pub fn decode_with_block_size(src: &mut ReadCursor<'_>, block_size: usize) -> DecodeResult<Self> {
        ensure_fixed_part_size!(in: src);

        let flags = StreamBitmapFlags::from_bits_truncate(src.read_u8());
        let bitmap_type = src.read_u16();

        ensure_size!(in: src, size: block_size);
        let block = src.read_slice(block_size).to_vec();

        Ok(StreamBitmapNext {
            flags,
            bitmap_type,
            block,
        })
    }
}

/// 2.2.2.2.3.1 TS_DRAW_GDIPLUS_FIRST_ORDER.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GdiPlusFirst {
    pub total_size: u32,
    pub total_emf_size: u32,
    pub emf_records: Vec<u8>,
}

impl GdiPlusFirst {
    const FIXED_PART_SIZE: usize = 1 + 2 + 4 + 4;
}

impl Decode<'_> for GdiPlusFirst {
    fn decode(src: &mut ReadCursor<'_>) -> DecodeResult<Self> {
        ensure_fixed_part_size!(in: src);

        let _pad = src.read_u8();
        let chunk_size = usize::from(src.read_u16());
        let total_size = src.read_u32();
        let total_emf_size = src.read_u32();

        ensure_size!(in: src, size: chunk_size);
        let emf_records = src.read_slice(chunk_size).to_vec();

        Ok(GdiPlusFirst {
            total_size,
            total_emf_size,
            emf_records,
        })
    }
}

/// 2.2.2.2.3.2 TS_DRAW_GDIPLUS_NEXT_ORDER.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GdiPlusNext {
    pub emf_records: Vec<u8>,
}

impl GdiPlusNext {
    const FIXED_PART_SIZE: usize = 1;

    pub fn decode_with_chunk_size(src: &mut ReadCursor<'_>, chunk_size: usize) -> DecodeResult<Self> {
        ensure_fixed_part_size!(in: src);

        let _pad = src.read_u8();

        ensure_size!(in: src, size: chunk_size);
        let emf_records = src.read_slice(chunk_size).to_vec();

        Ok(GdiPlusNext { emf_records })
    }
}

/// 2.2.2.2.3.3 TS_DRAW_GDIPLUS_END_ORDER.
///
/// Closes the plain GDI+ stream; the totals of the assembled payload are
/// reported by the session layer from its accumulation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GdiPlusEnd;

impl GdiPlusEnd {
    const FIXED_PART_SIZE: usize = 1;
}

impl Decode<'_> for GdiPlusEnd {
    fn decode(src: &mut ReadCursor<'_>) -> DecodeResult<Self> {
        ensure_fixed_part_size!(in: src);

        let _pad = src.read_u8();

        Ok(GdiPlusEnd)
    }
}

/// 2.2.2.2.3.4 TS_DRAW_GDIPLUS_CACHE_FIRST_ORDER.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GdiPlusCacheFirst {
    pub flags: u8,
    pub cache_type: u16,
    pub cache_index: u16,
    pub total_size: u32,
    pub emf_records: Vec<u8>,
}

impl GdiPlusCacheFirst {
    const FIXED_PART_SIZE: usize = 1 + 2 + 2 + 2 + 4;
}

impl Decode<'_> for GdiPlusCacheFirst {
    fn decode(src: &mut ReadCursor<'_>) -> DecodeResult<Self> {
        ensure_fixed_part_size!(in: src);

        let flags = src.read_u8();
        let cache_type = src.read_u16();
        let cache_index = src.read_u16();
        let chunk_size = usize::from(src.read_u16());
        let total_size = src.read_u32();

        ensure_size!(in: src, size: chunk_size);
        let emf_records = src.read_slice(chunk_size).to_vec();

        Ok(GdiPlusCacheFirst {
            flags,
            cache_type,
            cache_index,
            total_size,
            emf_records,
        })
    }
}

/// 2.2.2.2.3.5 TS_DRAW_GDIPLUS_CACHE_NEXT_ORDER.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GdiPlusCacheNext {
    pub flags: u8,
    pub cache_type: u16,
    pub cache_index: u16,
    pub emf_records: Vec<u8>,
}

impl GdiPlusCacheNext {
    const FIXED_PART_SIZE: usize = 1 + 2 + 2;

    pub fn decode_with_chunk_size(src: &mut ReadCursor<'_>, chunk_size: usize) -> DecodeResult<Self> {
        ensure_fixed_part_size!(in: src);

        let flags = src.read_u8();
        let cache_type = src.read_u16();
        let cache_index = src.read_u16();

        ensure_size!(in: src, size: chunk_size);
        let emf_records = src.read_slice(chunk_size).to_vec();

        Ok(GdiPlusCacheNext {
            flags,
            cache_type,
            cache_index,
            emf_records,
        })
    }
}

/// 2.2.2.2.3.6 TS_DRAW_GDIPLUS_CACHE_END_ORDER.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GdiPlusCacheEnd {
    pub flags: u8,
    pub cache_type: u16,
    pub cache_index: u16,
}

impl GdiPlusCacheEnd {
    const FIXED_PART_SIZE: usize = 1 + 2 + 2;
}

impl Decode<'_> for GdiPlusCacheEnd {
    fn decode(src: &mut ReadCursor<'_>) -> DecodeResult<Self> {
        ensure_fixed_part_size!(in: src);

        let flags = src.read_u8();
        let cache_type = src.read_u16();
        let cache_index = src.read_u16();

        Ok(GdiPlusCacheEnd {
            flags,
            cache_type,
            cache_index,
        })
    }
}

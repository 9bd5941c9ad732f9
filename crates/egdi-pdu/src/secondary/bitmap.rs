//! Bitmap cache orders, revisions 1 through 3.

use bitflags::bitflags;

use crate::cursor::ReadCursor;
use crate::number::{EncodedU16, EncodedU32};
use crate::secondary::SecondaryOrderHeader;
use crate::{decode_cursor, DecodeError, DecodeResult};

/// extraFlags bit suppressing the 8-byte compression header in front of
/// compressed revision 1 bitmap data.
const NO_BITMAP_COMPRESSION_HDR: u16 = 0x0400;

/// Size of the TS_CD_HEADER prefix found in front of compressed bitmap
/// data when the stream was negotiated with compression headers.
const COMPRESSION_HDR_SIZE: usize = 8;

/// Cache index sentinel marking an entry that must not be cached; the
/// entry is placed on the waiting list instead of a cache slot.
pub const DO_NOT_CACHE_INDEX: u16 = 0x7FFF;

/// bitsPerPixelId lookup shared by the revision 2 and 3 orders; a zero
/// entry marks an unassigned id.
const CBR2_BPP: [u8; 7] = [0, 0, 0, 8, 16, 24, 32];

fn bpp_from_id(table: &[u8], id: u16, field: &'static str) -> DecodeResult<u8> {
    match table.get(usize::from(id)) {
        Some(&bpp) if bpp != 0 => Ok(bpp),
        _ => Err(DecodeError::InvalidField {
            field,
            reason: "unassigned bits-per-pixel id",
        }),
    }
}

/// 2.2.2.2.1.2.2 TS_CACHE_BITMAP_ORDER (revision 1, both the compressed
/// and uncompressed order types).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheBitmapV1 {
    pub cache_id: u8,
    pub width: u8,
    pub height: u8,
    pub bpp: u8,
    pub cache_index: u16,
    pub compressed: bool,
    pub data: Vec<u8>,
}

impl CacheBitmapV1 {
    const FIXED_PART_SIZE: usize = 1 + 1 + 1 + 1 + 1 + 2 + 2;

    pub fn decode(src: &mut ReadCursor<'_>, header: &SecondaryOrderHeader, compressed: bool) -> DecodeResult<Self> {
        ensure_fixed_part_size!(in: src);

        let cache_id = src.read_u8();
        let _pad = src.read_u8();
        let width = src.read_u8();
        let height = src.read_u8();
        let bpp = src.read_u8();
        let mut bitmap_length = usize::from(src.read_u16());
        let cache_index = src.read_u16();

        if compressed && header.extra_flags & NO_BITMAP_COMPRESSION_HDR == 0 {
            // The TS_CD_HEADER carries redundant row/size information and
            // is not part of the bitmap payload proper.
            ensure_size!(in: src, size: COMPRESSION_HDR_SIZE);
            src.advance(COMPRESSION_HDR_SIZE);
            bitmap_length = bitmap_length.saturating_sub(COMPRESSION_HDR_SIZE);
        }

        ensure_size!(in: src, size: bitmap_length);
        let data = src.read_slice(bitmap_length).to_vec();

        Ok(CacheBitmapV1 {
            cache_id,
            width,
            height,
            bpp,
            cache_index,
            compressed,
            data,
        })
    }
}

bitflags! {
    /// Flags carried in bits 7..=15 of the revision 2 order's extraFlags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CacheBitmapV2Flags: u16 {
        const HEIGHT_SAME_AS_WIDTH = 0x01;
        const PERSISTENT_KEY_PRESENT = 0x02;
        const NO_BITMAP_COMPRESSION_HDR = 0x08;
        const DO_NOT_CACHE = 0x10;
    }
}

/// 2.2.2.2.1.2.3 TS_CACHE_BITMAP_REV2_ORDER.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheBitmapV2 {
    pub cache_id: u8,
    pub flags: CacheBitmapV2Flags,
    pub bpp: u8,
    pub persistent_key: Option<(u32, u32)>,
    pub width: u16,
    pub height: u16,
    pub cache_index: u16,
    pub compressed: bool,
    pub data: Vec<u8>,
}

impl CacheBitmapV2 {
    pub fn decode(src: &mut ReadCursor<'_>, header: &SecondaryOrderHeader, compressed: bool) -> DecodeResult<Self> {
        let cache_id = (header.extra_flags & 0x0003) as u8;
        let bpp = bpp_from_id(&CBR2_BPP, (header.extra_flags >> 3) & 0x000F, "bitsPerPixelId")?;
        let flags = CacheBitmapV2Flags::from_bits_truncate((header.extra_flags >> 7) & 0x01FF);

        let persistent_key = if flags.contains(CacheBitmapV2Flags::PERSISTENT_KEY_PRESENT) {
            ensure_size!(in: src, size: 8);
            Some((src.read_u32(), src.read_u32()))
        } else {
            None
        };

        let width = decode_cursor::<EncodedU16>(src)?.value();
        let height = if flags.contains(CacheBitmapV2Flags::HEIGHT_SAME_AS_WIDTH) {
            width
        } else {
            decode_cursor::<EncodedU16>(src)?.value()
        };

        let mut bitmap_length = decode_cursor::<EncodedU32>(src)?.value() as usize;

        let cache_index = if flags.contains(CacheBitmapV2Flags::DO_NOT_CACHE) {
            decode_cursor::<EncodedU16>(src)?;
            DO_NOT_CACHE_INDEX
        } else {
            decode_cursor::<EncodedU16>(src)?.value()
        };

        if compressed && !flags.contains(CacheBitmapV2Flags::NO_BITMAP_COMPRESSION_HDR) {
            // TS_CD_HEADER: cbCompFirstRowSize, cbCompMainBodySize,
            // cbScanWidth, cbUncompressedSize. The main body size replaces
            // the declared bitmap length.
            ensure_size!(in: src, size: 8);
            let _first_row_size = src.read_u16();
            let main_body_size = src.read_u16();
            let _scan_width = src.read_u16();
            let _uncompressed_size = src.read_u16();
            bitmap_length = usize::from(main_body_size);
        }

        ensure_size!(in: src, size: bitmap_length);
        let data = src.read_slice(bitmap_length).to_vec();

        Ok(CacheBitmapV2 {
            cache_id,
            flags,
            bpp,
            persistent_key,
            width,
            height,
            cache_index,
            compressed,
            data,
        })
    }
}

/// 2.2.2.2.1.2.8 TS_CACHE_BITMAP_REV3_ORDER.
///
/// Revision 3 entries always carry a persistent key and reference a bitmap
/// codec; the codec payload is kept opaque.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheBitmapV3 {
    pub cache_id: u8,
    pub bpp: u8,
    pub cache_index: u16,
    pub key1: u32,
    pub key2: u32,
    pub codec_id: u8,
    pub width: u16,
    pub height: u16,
    pub data: Vec<u8>,
}

impl CacheBitmapV3 {
    const FIXED_PART_SIZE: usize = 2 + 4 + 4 + 2 + 1 + 2 + 2 + 4;

    pub fn decode(src: &mut ReadCursor<'_>, header: &SecondaryOrderHeader) -> DecodeResult<Self> {
        let cache_id = (header.extra_flags & 0x0003) as u8;
        let bpp = bpp_from_id(&CBR2_BPP, (header.extra_flags >> 3) & 0x000F, "bitsPerPixelId")?;

        ensure_fixed_part_size!(in: src);

        let cache_index = src.read_u16();
        let key1 = src.read_u32();
        let key2 = src.read_u32();
        let _reserved = src.read_u16();
        let codec_id = src.read_u8();
        let width = src.read_u16();
        let height = src.read_u16();
        let data_length = src.read_u32() as usize;

        ensure_size!(in: src, size: data_length);
        let data = src.read_slice(data_length).to_vec();

        Ok(CacheBitmapV3 {
            cache_id,
            bpp,
            cache_index,
            key1,
            key2,
            codec_id,
            width,
            height,
            data,
        })
    }
}

//! Secondary (cache) drawing orders, 2.2.2.2.1.2.
//!
//! Secondary orders populate the GDI caches. They are stateless on the
//! wire: everything needed to decode one record is carried by the record
//! itself, so the decoders here operate without a session context.

mod bitmap;
mod brush;
mod color_table;
mod glyph;

pub use bitmap::{CacheBitmapV1, CacheBitmapV2, CacheBitmapV2Flags, CacheBitmapV3, DO_NOT_CACHE_INDEX};
pub use brush::CacheBrush;
pub use color_table::CacheColorTable;
pub use glyph::{CacheGlyph, CacheGlyphData};

use crate::cursor::ReadCursor;
use crate::{Decode, DecodeError, DecodeResult};

/// Header common to all secondary orders, minus the control byte.
///
/// 2.2.2.2.1.2.1.1 SECONDARY_DRAWING_ORDER_HEADER.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecondaryOrderHeader {
    pub order_length: u16,
    pub extra_flags: u16,
    pub order_type: u8,
}

impl SecondaryOrderHeader {
    pub const FIXED_PART_SIZE: usize = 5;

    /// Number of bytes the order body occupies after this header.
    ///
    /// `orderLength` counts the whole order, control byte included, minus
    /// 13; the six header bytes have already been consumed once the header
    /// is decoded, which leaves `orderLength + 7` bytes of body. This
    /// declared length is authoritative: decoders resynchronize on it even
    /// when field-by-field consumption disagrees.
    pub fn body_length(&self) -> usize {
        usize::from(self.order_length) + 7
    }
}

impl Decode<'_> for SecondaryOrderHeader {
    fn decode(src: &mut ReadCursor<'_>) -> DecodeResult<Self> {
        ensure_fixed_part_size!(in: src);

        let order_length = src.read_u16();
        let extra_flags = src.read_u16();
        let order_type = src.read_u8();

        Ok(SecondaryOrderHeader {
            order_length,
            extra_flags,
            order_type,
        })
    }
}

/// The assigned secondary order type codes.
///
/// Code 0x06 is unassigned in the nine-entry order table and rejected
/// explicitly, as are codes past the end of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecondaryOrderType {
    CacheBitmapUncompressed = 0x00,
    CacheColorTable = 0x01,
    CacheBitmapCompressed = 0x02,
    CacheGlyph = 0x03,
    CacheBitmapUncompressedV2 = 0x04,
    CacheBitmapCompressedV2 = 0x05,
    CacheBrush = 0x07,
    CacheBitmapV3 = 0x08,
}

impl SecondaryOrderType {
    pub fn from_u8(order_type: u8) -> DecodeResult<Self> {
        match order_type {
            0x00 => Ok(Self::CacheBitmapUncompressed),
            0x01 => Ok(Self::CacheColorTable),
            0x02 => Ok(Self::CacheBitmapCompressed),
            0x03 => Ok(Self::CacheGlyph),
            0x04 => Ok(Self::CacheBitmapUncompressedV2),
            0x05 => Ok(Self::CacheBitmapCompressedV2),
            0x06 => Err(DecodeError::ReservedOrderType { order_type }),
            0x07 => Ok(Self::CacheBrush),
            0x08 => Ok(Self::CacheBitmapV3),
            _ => Err(DecodeError::UnknownCacheOrderType { order_type }),
        }
    }
}

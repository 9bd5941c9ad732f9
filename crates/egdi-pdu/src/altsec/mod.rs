//! Alternate secondary drawing orders, 2.2.2.2.1.3.
//!
//! The order type rides in the upper six bits of the control byte; there
//! is no shared header. The streamed kinds (stream bitmap and GDI+) carry
//! their chunk size only on the First record, so the Next decoders take
//! the carried block size as an argument; the matching assembly state
//! machine lives in the session crate.

mod ninegrid;
mod offscreen;
mod stream;

pub use ninegrid::CreateNineGridBitmap;
pub use offscreen::{CreateOffscreenBitmap, SwitchSurface, SCREEN_SURFACE_ID};
pub use stream::{
    GdiPlusCacheEnd, GdiPlusCacheFirst, GdiPlusCacheNext, GdiPlusEnd, GdiPlusFirst, GdiPlusNext, StreamBitmapFirst,
    StreamBitmapFlags, StreamBitmapNext,
};

use crate::cursor::ReadCursor;
use crate::{Decode, DecodeError, DecodeResult};

/// The assigned alternate secondary order type codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AltsecOrderType {
    SwitchSurface = 0x00,
    CreateOffscreenBitmap = 0x01,
    StreamBitmapFirst = 0x02,
    StreamBitmapNext = 0x03,
    CreateNineGridBitmap = 0x04,
    GdiPlusFirst = 0x05,
    GdiPlusNext = 0x06,
    GdiPlusEnd = 0x07,
    GdiPlusCacheFirst = 0x08,
    GdiPlusCacheNext = 0x09,
    GdiPlusCacheEnd = 0x0A,
    Window = 0x0B,
    Compdesk = 0x0C,
    FrameMarker = 0x0D,
}

impl AltsecOrderType {
    pub fn from_u8(order_type: u8) -> DecodeResult<Self> {
        match order_type {
            0x00 => Ok(Self::SwitchSurface),
            0x01 => Ok(Self::CreateOffscreenBitmap),
            0x02 => Ok(Self::StreamBitmapFirst),
            0x03 => Ok(Self::StreamBitmapNext),
            0x04 => Ok(Self::CreateNineGridBitmap),
            0x05 => Ok(Self::GdiPlusFirst),
            0x06 => Ok(Self::GdiPlusNext),
            0x07 => Ok(Self::GdiPlusEnd),
            0x08 => Ok(Self::GdiPlusCacheFirst),
            0x09 => Ok(Self::GdiPlusCacheNext),
            0x0A => Ok(Self::GdiPlusCacheEnd),
            0x0B => Ok(Self::Window),
            0x0C => Ok(Self::Compdesk),
            0x0D => Ok(Self::FrameMarker),
            _ => Err(DecodeError::UnknownAltsecOrderType { order_type }),
        }
    }
}

/// Frame boundary action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameAction {
    Begin = 0x0000_0000,
    End = 0x0000_0001,
}

/// 2.2.2.2.1.3.7 TS_FRAME_MARKER.
///
/// A begin marker snapshots the active surface so drawing happens on a
/// live copy; the matching end marker publishes that copy as one atomic
/// frame. Unbalanced markers are tolerated by consumers as independent
/// publish points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameMarker {
    pub action: FrameAction,
}

impl FrameMarker {
    const FIXED_PART_SIZE: usize = 4;
}

impl Decode<'_> for FrameMarker {
    fn decode(src: &mut ReadCursor<'_>) -> DecodeResult<Self> {
        ensure_fixed_part_size!(in: src);

        let action = match src.read_u32() {
            0x0000_0000 => FrameAction::Begin,
            0x0000_0001 => FrameAction::End,
            _ => {
                return Err(DecodeError::InvalidField {
                    field: "action",
                    reason: "not a frame marker action",
                })
            }
        };

        Ok(FrameMarker { action })
    }
}

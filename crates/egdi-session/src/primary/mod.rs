//! Primary drawing orders and their persistent decode context.
//!
//! Primary orders are aggressively field-compressed: every order type
//! carries a bitmask announcing which of its fields are present, and any
//! absent field keeps the value decoded by the previous occurrence of the
//! same order type. The context below owns that carried state for all 22
//! order types, together with the persistent bounds rectangle and the
//! delta-coordinate mode.

mod orders;

pub use orders::{
    Brush, DrawNineGrid, DstBlt, EllipseCb, EllipseSc, FastGlyph, FastIndex, GlyphIndex, LineTo, Mem3Blt, MemBlt,
    MultiDrawNineGrid, MultiDstBlt, MultiOpaqueRect, MultiPatBlt, MultiScrBlt, OpaqueRect, PatBlt, PolyLine,
    PolygonCb, PolygonSc, SaveBitmap, ScrBlt,
};

pub(crate) use orders::FieldReader;

use bitflags::bitflags;

use egdi_pdu::control::ControlFlags;
use egdi_pdu::cursor::ReadCursor;
use egdi_pdu::{ensure_size, DecodeError, DecodeResult};

use crate::{SessionError, SessionResult};

/// The assigned primary order type codes, 2.2.2.2.1.1.2 orderType.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryOrderType {
    DstBlt = 0x00,
    PatBlt = 0x01,
    ScrBlt = 0x02,
    DrawNineGrid = 0x07,
    MultiDrawNineGrid = 0x08,
    LineTo = 0x09,
    OpaqueRect = 0x0A,
    SaveBitmap = 0x0B,
    MemBlt = 0x0D,
    Mem3Blt = 0x0E,
    MultiDstBlt = 0x0F,
    MultiPatBlt = 0x10,
    MultiScrBlt = 0x11,
    MultiOpaqueRect = 0x12,
    FastIndex = 0x13,
    PolygonSc = 0x14,
    PolygonCb = 0x15,
    PolyLine = 0x16,
    FastGlyph = 0x18,
    EllipseSc = 0x19,
    EllipseCb = 0x1A,
    GlyphIndex = 0x1B,
}

impl PrimaryOrderType {
    /// Codes 0x03..=0x06, 0x0C and 0x17 are unassigned in the 28-entry
    /// order table; they fail here rather than through a table hole.
    pub fn from_u8(order_type: u8) -> DecodeResult<Self> {
        match order_type {
            0x00 => Ok(Self::DstBlt),
            0x01 => Ok(Self::PatBlt),
            0x02 => Ok(Self::ScrBlt),
            0x07 => Ok(Self::DrawNineGrid),
            0x08 => Ok(Self::MultiDrawNineGrid),
            0x09 => Ok(Self::LineTo),
            0x0A => Ok(Self::OpaqueRect),
            0x0B => Ok(Self::SaveBitmap),
            0x0D => Ok(Self::MemBlt),
            0x0E => Ok(Self::Mem3Blt),
            0x0F => Ok(Self::MultiDstBlt),
            0x10 => Ok(Self::MultiPatBlt),
            0x11 => Ok(Self::MultiScrBlt),
            0x12 => Ok(Self::MultiOpaqueRect),
            0x13 => Ok(Self::FastIndex),
            0x14 => Ok(Self::PolygonSc),
            0x15 => Ok(Self::PolygonCb),
            0x16 => Ok(Self::PolyLine),
            0x18 => Ok(Self::FastGlyph),
            0x19 => Ok(Self::EllipseSc),
            0x1A => Ok(Self::EllipseCb),
            0x1B => Ok(Self::GlyphIndex),
            _ => Err(DecodeError::ReservedOrderType { order_type }),
        }
    }

    /// Number of field-presence bytes encoded for this order type before
    /// any zero-byte truncation flags apply.
    pub fn field_bytes(self) -> usize {
        match self {
            Self::DstBlt => 1,
            Self::PatBlt => 2,
            Self::ScrBlt => 1,
            Self::DrawNineGrid => 1,
            Self::MultiDrawNineGrid => 1,
            Self::LineTo => 2,
            Self::OpaqueRect => 1,
            Self::SaveBitmap => 1,
            Self::MemBlt => 2,
            Self::Mem3Blt => 3,
            Self::MultiDstBlt => 1,
            Self::MultiPatBlt => 2,
            Self::MultiScrBlt => 2,
            Self::MultiOpaqueRect => 2,
            Self::FastIndex => 2,
            Self::PolygonSc => 1,
            Self::PolygonCb => 2,
            Self::PolyLine => 1,
            Self::FastGlyph => 2,
            Self::EllipseSc => 1,
            Self::EllipseCb => 2,
            Self::GlyphIndex => 3,
        }
    }
}

bitflags! {
    /// Description byte of a bounds update, 2.2.2.2.1.1.2 TS_BOUND_*.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct BoundsFlags: u8 {
        const LEFT = 0x01;
        const TOP = 0x02;
        const RIGHT = 0x04;
        const BOTTOM = 0x08;
        const DELTA_LEFT = 0x10;
        const DELTA_TOP = 0x20;
        const DELTA_RIGHT = 0x40;
        const DELTA_BOTTOM = 0x80;
    }
}

/// The clipping rectangle shared by all bounded primary orders.
///
/// The rectangle persists until a new bounds update rewrites it; each edge
/// is updated independently, either absolutely or by a signed byte delta.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bounds {
    pub left: i16,
    pub top: i16,
    pub right: i16,
    pub bottom: i16,
}

impl Bounds {
    fn update(&mut self, src: &mut ReadCursor<'_>) -> DecodeResult<()> {
        ensure_size!(in: src, size: 1);
        let flags = BoundsFlags::from_bits_retain(src.read_u8());

        Self::update_edge(src, flags, BoundsFlags::LEFT, BoundsFlags::DELTA_LEFT, &mut self.left)?;
        Self::update_edge(src, flags, BoundsFlags::TOP, BoundsFlags::DELTA_TOP, &mut self.top)?;
        Self::update_edge(src, flags, BoundsFlags::RIGHT, BoundsFlags::DELTA_RIGHT, &mut self.right)?;
        Self::update_edge(src, flags, BoundsFlags::BOTTOM, BoundsFlags::DELTA_BOTTOM, &mut self.bottom)?;

        Ok(())
    }

    fn update_edge(
        src: &mut ReadCursor<'_>,
        flags: BoundsFlags,
        absolute: BoundsFlags,
        delta: BoundsFlags,
        edge: &mut i16,
    ) -> DecodeResult<()> {
        if flags.contains(absolute) {
            ensure_size!(in: src, size: 2);
            *edge = src.read_i16();
        } else if flags.contains(delta) {
            ensure_size!(in: src, size: 1);
            *edge = edge.wrapping_add(i16::from(src.read_i8()));
        }

        Ok(())
    }
}

/// Persistent decode state for the primary order class.
#[derive(Debug, Clone, Default)]
pub struct PrimaryContext {
    order_type: Option<PrimaryOrderType>,
    pub(crate) field_flags: u32,
    pub(crate) delta_coords: bool,

    pub bounds: Bounds,
    pub bounds_active: bool,

    pub dst_blt: DstBlt,
    pub pat_blt: PatBlt,
    pub scr_blt: ScrBlt,
    pub draw_nine_grid: DrawNineGrid,
    pub multi_draw_nine_grid: MultiDrawNineGrid,
    pub line_to: LineTo,
    pub opaque_rect: OpaqueRect,
    pub save_bitmap: SaveBitmap,
    pub mem_blt: MemBlt,
    pub mem3_blt: Mem3Blt,
    pub multi_dst_blt: MultiDstBlt,
    pub multi_pat_blt: MultiPatBlt,
    pub multi_scr_blt: MultiScrBlt,
    pub multi_opaque_rect: MultiOpaqueRect,
    pub fast_index: FastIndex,
    pub polygon_sc: PolygonSc,
    pub polygon_cb: PolygonCb,
    pub poly_line: PolyLine,
    pub fast_glyph: FastGlyph,
    pub ellipse_sc: EllipseSc,
    pub ellipse_cb: EllipseCb,
    pub glyph_index: GlyphIndex,
}

impl PrimaryContext {
    /// The order type the context currently decodes, once established.
    pub fn order_type(&self) -> Option<PrimaryOrderType> {
        self.order_type
    }

    /// Reads the contextual updates at the front of a primary order and
    /// returns the order type to dispatch on.
    ///
    /// An order without the type-change flag reuses the previous order
    /// type, which must have been established at some point before.
    pub(crate) fn update(&mut self, src: &mut ReadCursor<'_>, control: ControlFlags) -> SessionResult<PrimaryOrderType> {
        if control.contains(ControlFlags::TYPE_CHANGE) {
            self.order_type = Some(Self::read_order_type(src)?);
        }

        let order_type = self.order_type.ok_or(SessionError::UninitializedOrderType)?;

        self.field_flags = Self::read_field_flags(src, control, order_type)?;

        self.bounds_active = control.contains(ControlFlags::BOUNDS);
        if self.bounds_active && !control.contains(ControlFlags::ZERO_BOUNDS_DELTAS) {
            self.bounds.update(src)?;
        }

        self.delta_coords = control.contains(ControlFlags::DELTA_COORDS);

        Ok(order_type)
    }

    fn read_order_type(src: &mut ReadCursor<'_>) -> DecodeResult<PrimaryOrderType> {
        ensure_size!(in: src, size: 1);
        PrimaryOrderType::from_u8(src.read_u8())
    }

    /// Reads the little-endian packed field-presence mask, its width given
    /// by the order type minus the zero-byte truncation flags.
    fn read_field_flags(
        src: &mut ReadCursor<'_>,
        control: ControlFlags,
        order_type: PrimaryOrderType,
    ) -> DecodeResult<u32> {
        let mut field_bytes = order_type.field_bytes();

        if control.contains(ControlFlags::ZERO_FIELD_BYTE_BIT0) {
            field_bytes = field_bytes.saturating_sub(1);
        }
        if control.contains(ControlFlags::ZERO_FIELD_BYTE_BIT1) {
            field_bytes = field_bytes.saturating_sub(2);
        }

        ensure_size!(in: src, size: field_bytes);

        let mut field_flags = 0;
        for i in 0..field_bytes {
            field_flags |= u32::from(src.read_u8()) << (i * 8);
        }

        Ok(field_flags)
    }
}

//! The 22 primary order records.
//!
//! Every struct below is the carried state for its order type: decoding an
//! occurrence overwrites the fields whose presence bit is set and leaves
//! the rest untouched. Field numbering follows the wire tables, field `n`
//! mapping to presence bit `n - 1`.
//!
//! Coordinate fields honor the delta-coordinate mode: an absolute signed
//! 16-bit value normally, a signed 8-bit delta added to the carried value
//! when the order was flagged with delta coordinates. All other fields are
//! absolute when present. Glyph fragments and delta-point/rect lists are
//! kept as the opaque byte blobs the wire carries; interpreting them is
//! the consumer's concern.

use egdi_pdu::cursor::ReadCursor;
use egdi_pdu::{ensure_size, DecodeResult};

/// Walks the field-presence mask of one primary order occurrence.
pub(crate) struct FieldReader<'a, 'de> {
    src: &'a mut ReadCursor<'de>,
    field_flags: u32,
    delta_coords: bool,
    next_bit: u32,
}

impl<'a, 'de> FieldReader<'a, 'de> {
    pub(crate) fn new(src: &'a mut ReadCursor<'de>, field_flags: u32, delta_coords: bool) -> Self {
        Self {
            src,
            field_flags,
            delta_coords,
            next_bit: 0,
        }
    }

    fn present(&mut self) -> bool {
        let present = self.field_flags & (1u32 << self.next_bit) != 0;
        self.next_bit += 1;
        present
    }

    fn coord(&mut self, current: i16) -> DecodeResult<i16> {
        if !self.present() {
            return Ok(current);
        }

        let src = &mut *self.src;
        if self.delta_coords {
            ensure_size!(in: src, size: 1);
            Ok(current.wrapping_add(i16::from(src.read_i8())))
        } else {
            ensure_size!(in: src, size: 2);
            Ok(src.read_i16())
        }
    }

    fn u8_field(&mut self, current: u8) -> DecodeResult<u8> {
        if !self.present() {
            return Ok(current);
        }

        let src = &mut *self.src;
        ensure_size!(in: src, size: 1);
        Ok(src.read_u8())
    }

    fn u16_field(&mut self, current: u16) -> DecodeResult<u16> {
        if !self.present() {
            return Ok(current);
        }

        let src = &mut *self.src;
        ensure_size!(in: src, size: 2);
        Ok(src.read_u16())
    }

    fn u32_field(&mut self, current: u32) -> DecodeResult<u32> {
        if !self.present() {
            return Ok(current);
        }

        let src = &mut *self.src;
        ensure_size!(in: src, size: 4);
        Ok(src.read_u32())
    }

    /// 3-byte little-endian TS_COLOR field.
    fn color(&mut self, current: u32) -> DecodeResult<u32> {
        if !self.present() {
            return Ok(current);
        }

        let src = &mut *self.src;
        ensure_size!(in: src, size: 3);
        let [b0, b1, b2] = src.read_array::<3>();
        Ok(u32::from(b0) | (u32::from(b1) << 8) | (u32::from(b2) << 16))
    }

    fn brush_extra(&mut self, current: [u8; 7]) -> DecodeResult<[u8; 7]> {
        if !self.present() {
            return Ok(current);
        }

        let src = &mut *self.src;
        ensure_size!(in: src, size: 7);
        Ok(src.read_array::<7>())
    }

    /// Opaque variable data with a one-byte length prefix.
    fn blob8(&mut self, current: &mut Vec<u8>) -> DecodeResult<()> {
        if !self.present() {
            return Ok(());
        }

        let src = &mut *self.src;
        ensure_size!(in: src, size: 1);
        let len = usize::from(src.read_u8());
        ensure_size!(in: src, size: len);
        *current = src.read_slice(len).to_vec();

        Ok(())
    }

    /// Opaque variable data with a two-byte length prefix.
    fn blob16(&mut self, current: &mut Vec<u8>) -> DecodeResult<()> {
        if !self.present() {
            return Ok(());
        }

        let src = &mut *self.src;
        ensure_size!(in: src, size: 2);
        let len = usize::from(src.read_u16());
        ensure_size!(in: src, size: len);
        *current = src.read_slice(len).to_vec();

        Ok(())
    }
}

/// The five brush fields shared by the pattern-brush orders. Each field
/// has its own presence bit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Brush {
    pub org_x: u8,
    pub org_y: u8,
    pub style: u8,
    pub hatch: u8,
    pub extra: [u8; 7],
}

impl Brush {
    fn update(&mut self, f: &mut FieldReader<'_, '_>) -> DecodeResult<()> {
        self.org_x = f.u8_field(self.org_x)?;
        self.org_y = f.u8_field(self.org_y)?;
        self.style = f.u8_field(self.style)?;
        self.hatch = f.u8_field(self.hatch)?;
        self.extra = f.brush_extra(self.extra)?;

        Ok(())
    }
}

/// 2.2.2.2.1.1.2.1 DSTBLT_ORDER.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DstBlt {
    pub left: i16,
    pub top: i16,
    pub width: i16,
    pub height: i16,
    pub rop: u8,
}

impl DstBlt {
    pub(crate) fn update(&mut self, f: &mut FieldReader<'_, '_>) -> DecodeResult<()> {
        self.left = f.coord(self.left)?;
        self.top = f.coord(self.top)?;
        self.width = f.coord(self.width)?;
        self.height = f.coord(self.height)?;
        self.rop = f.u8_field(self.rop)?;

        Ok(())
    }
}

/// 2.2.2.2.1.1.2.3 PATBLT_ORDER.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatBlt {
    pub left: i16,
    pub top: i16,
    pub width: i16,
    pub height: i16,
    pub rop: u8,
    pub back_color: u32,
    pub fore_color: u32,
    pub brush: Brush,
}

impl PatBlt {
    pub(crate) fn update(&mut self, f: &mut FieldReader<'_, '_>) -> DecodeResult<()> {
        self.left = f.coord(self.left)?;
        self.top = f.coord(self.top)?;
        self.width = f.coord(self.width)?;
        self.height = f.coord(self.height)?;
        self.rop = f.u8_field(self.rop)?;
        self.back_color = f.color(self.back_color)?;
        self.fore_color = f.color(self.fore_color)?;
        self.brush.update(f)?;

        Ok(())
    }
}

/// 2.2.2.2.1.1.2.7 SCRBLT_ORDER.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrBlt {
    pub left: i16,
    pub top: i16,
    pub width: i16,
    pub height: i16,
    pub rop: u8,
    pub src_x: i16,
    pub src_y: i16,
}

impl ScrBlt {
    pub(crate) fn update(&mut self, f: &mut FieldReader<'_, '_>) -> DecodeResult<()> {
        self.left = f.coord(self.left)?;
        self.top = f.coord(self.top)?;
        self.width = f.coord(self.width)?;
        self.height = f.coord(self.height)?;
        self.rop = f.u8_field(self.rop)?;
        self.src_x = f.coord(self.src_x)?;
        self.src_y = f.coord(self.src_y)?;

        Ok(())
    }
}

/// 2.2.2.2.1.1.2.21 DRAWNINEGRID_ORDER.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawNineGrid {
    pub src_left: i16,
    pub src_top: i16,
    pub src_right: i16,
    pub src_bottom: i16,
    pub bitmap_id: u16,
}

impl DrawNineGrid {
    pub(crate) fn update(&mut self, f: &mut FieldReader<'_, '_>) -> DecodeResult<()> {
        self.src_left = f.coord(self.src_left)?;
        self.src_top = f.coord(self.src_top)?;
        self.src_right = f.coord(self.src_right)?;
        self.src_bottom = f.coord(self.src_bottom)?;
        self.bitmap_id = f.u16_field(self.bitmap_id)?;

        Ok(())
    }
}

/// 2.2.2.2.1.1.2.22 MULTI_DRAWNINEGRID_ORDER.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultiDrawNineGrid {
    pub src_left: i16,
    pub src_top: i16,
    pub src_right: i16,
    pub src_bottom: i16,
    pub bitmap_id: u16,
    pub n_delta_entries: u8,
    pub delta_rects: Vec<u8>,
}

impl MultiDrawNineGrid {
    pub(crate) fn update(&mut self, f: &mut FieldReader<'_, '_>) -> DecodeResult<()> {
        self.src_left = f.coord(self.src_left)?;
        self.src_top = f.coord(self.src_top)?;
        self.src_right = f.coord(self.src_right)?;
        self.src_bottom = f.coord(self.src_bottom)?;
        self.bitmap_id = f.u16_field(self.bitmap_id)?;
        self.n_delta_entries = f.u8_field(self.n_delta_entries)?;
        f.blob16(&mut self.delta_rects)?;

        Ok(())
    }
}

/// 2.2.2.2.1.1.2.11 LINETO_ORDER.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineTo {
    pub back_mode: u16,
    pub start_x: i16,
    pub start_y: i16,
    pub end_x: i16,
    pub end_y: i16,
    pub back_color: u32,
    pub rop2: u8,
    pub pen_style: u8,
    pub pen_width: u8,
    pub pen_color: u32,
}

impl LineTo {
    pub(crate) fn update(&mut self, f: &mut FieldReader<'_, '_>) -> DecodeResult<()> {
        self.back_mode = f.u16_field(self.back_mode)?;
        self.start_x = f.coord(self.start_x)?;
        self.start_y = f.coord(self.start_y)?;
        self.end_x = f.coord(self.end_x)?;
        self.end_y = f.coord(self.end_y)?;
        self.back_color = f.color(self.back_color)?;
        self.rop2 = f.u8_field(self.rop2)?;
        self.pen_style = f.u8_field(self.pen_style)?;
        self.pen_width = f.u8_field(self.pen_width)?;
        self.pen_color = f.color(self.pen_color)?;

        Ok(())
    }
}

/// 2.2.2.2.1.1.2.5 OPAQUERECT_ORDER. The color is carried as three
/// separate byte fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OpaqueRect {
    pub left: i16,
    pub top: i16,
    pub width: i16,
    pub height: i16,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl OpaqueRect {
    pub(crate) fn update(&mut self, f: &mut FieldReader<'_, '_>) -> DecodeResult<()> {
        self.left = f.coord(self.left)?;
        self.top = f.coord(self.top)?;
        self.width = f.coord(self.width)?;
        self.height = f.coord(self.height)?;
        self.red = f.u8_field(self.red)?;
        self.green = f.u8_field(self.green)?;
        self.blue = f.u8_field(self.blue)?;

        Ok(())
    }
}

/// 2.2.2.2.1.1.2.12 SAVEBITMAP_ORDER.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SaveBitmap {
    pub saved_position: u32,
    pub left: i16,
    pub top: i16,
    pub right: i16,
    pub bottom: i16,
    pub operation: u8,
}

impl SaveBitmap {
    pub(crate) fn update(&mut self, f: &mut FieldReader<'_, '_>) -> DecodeResult<()> {
        self.saved_position = f.u32_field(self.saved_position)?;
        self.left = f.coord(self.left)?;
        self.top = f.coord(self.top)?;
        self.right = f.coord(self.right)?;
        self.bottom = f.coord(self.bottom)?;
        self.operation = f.u8_field(self.operation)?;

        Ok(())
    }
}

/// 2.2.2.2.1.1.2.9 MEMBLT_ORDER. The first field packs the color-table
/// index into the high byte and the bitmap cache id into the low byte.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemBlt {
    pub cache_id: u8,
    pub color_index: u8,
    pub left: i16,
    pub top: i16,
    pub width: i16,
    pub height: i16,
    pub rop: u8,
    pub src_x: i16,
    pub src_y: i16,
    pub cache_index: u16,
}

impl MemBlt {
    pub(crate) fn update(&mut self, f: &mut FieldReader<'_, '_>) -> DecodeResult<()> {
        let packed = f.u16_field((u16::from(self.color_index) << 8) | u16::from(self.cache_id))?;
        self.cache_id = packed as u8;
        self.color_index = (packed >> 8) as u8;

        self.left = f.coord(self.left)?;
        self.top = f.coord(self.top)?;
        self.width = f.coord(self.width)?;
        self.height = f.coord(self.height)?;
        self.rop = f.u8_field(self.rop)?;
        self.src_x = f.coord(self.src_x)?;
        self.src_y = f.coord(self.src_y)?;
        self.cache_index = f.u16_field(self.cache_index)?;

        Ok(())
    }
}

/// 2.2.2.2.1.1.2.10 MEM3BLT_ORDER.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mem3Blt {
    pub cache_id: u8,
    pub color_index: u8,
    pub left: i16,
    pub top: i16,
    pub width: i16,
    pub height: i16,
    pub rop: u8,
    pub src_x: i16,
    pub src_y: i16,
    pub back_color: u32,
    pub fore_color: u32,
    pub brush: Brush,
    pub cache_index: u16,
}

impl Mem3Blt {
    pub(crate) fn update(&mut self, f: &mut FieldReader<'_, '_>) -> DecodeResult<()> {
        let packed = f.u16_field((u16::from(self.color_index) << 8) | u16::from(self.cache_id))?;
        self.cache_id = packed as u8;
        self.color_index = (packed >> 8) as u8;

        self.left = f.coord(self.left)?;
        self.top = f.coord(self.top)?;
        self.width = f.coord(self.width)?;
        self.height = f.coord(self.height)?;
        self.rop = f.u8_field(self.rop)?;
        self.src_x = f.coord(self.src_x)?;
        self.src_y = f.coord(self.src_y)?;
        self.back_color = f.color(self.back_color)?;
        self.fore_color = f.color(self.fore_color)?;
        self.brush.update(f)?;
        self.cache_index = f.u16_field(self.cache_index)?;

        Ok(())
    }
}

/// 2.2.2.2.1.1.2.2 MULTI_DSTBLT_ORDER.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultiDstBlt {
    pub left: i16,
    pub top: i16,
    pub width: i16,
    pub height: i16,
    pub rop: u8,
    pub n_delta_entries: u8,
    pub delta_rects: Vec<u8>,
}

impl MultiDstBlt {
    pub(crate) fn update(&mut self, f: &mut FieldReader<'_, '_>) -> DecodeResult<()> {
        self.left = f.coord(self.left)?;
        self.top = f.coord(self.top)?;
        self.width = f.coord(self.width)?;
        self.height = f.coord(self.height)?;
        self.rop = f.u8_field(self.rop)?;
        self.n_delta_entries = f.u8_field(self.n_delta_entries)?;
        f.blob16(&mut self.delta_rects)?;

        Ok(())
    }
}

/// 2.2.2.2.1.1.2.4 MULTI_PATBLT_ORDER.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultiPatBlt {
    pub left: i16,
    pub top: i16,
    pub width: i16,
    pub height: i16,
    pub rop: u8,
    pub back_color: u32,
    pub fore_color: u32,
    pub brush: Brush,
    pub n_delta_entries: u8,
    pub delta_rects: Vec<u8>,
}

impl MultiPatBlt {
    pub(crate) fn update(&mut self, f: &mut FieldReader<'_, '_>) -> DecodeResult<()> {
        self.left = f.coord(self.left)?;
        self.top = f.coord(self.top)?;
        self.width = f.coord(self.width)?;
        self.height = f.coord(self.height)?;
        self.rop = f.u8_field(self.rop)?;
        self.back_color = f.color(self.back_color)?;
        self.fore_color = f.color(self.fore_color)?;
        self.brush.update(f)?;
        self.n_delta_entries = f.u8_field(self.n_delta_entries)?;
        f.blob16(&mut self.delta_rects)?;

        Ok(())
    }
}

/// 2.2.2.2.1.1.2.8 MULTI_SCRBLT_ORDER.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultiScrBlt {
    pub left: i16,
    pub top: i16,
    pub width: i16,
    pub height: i16,
    pub rop: u8,
    pub src_x: i16,
    pub src_y: i16,
    pub n_delta_entries: u8,
    pub delta_rects: Vec<u8>,
}

impl MultiScrBlt {
    pub(crate) fn update(&mut self, f: &mut FieldReader<'_, '_>) -> DecodeResult<()> {
        self.left = f.coord(self.left)?;
        self.top = f.coord(self.top)?;
        self.width = f.coord(self.width)?;
        self.height = f.coord(self.height)?;
        self.rop = f.u8_field(self.rop)?;
        self.src_x = f.coord(self.src_x)?;
        self.src_y = f.coord(self.src_y)?;
        self.n_delta_entries = f.u8_field(self.n_delta_entries)?;
        f.blob16(&mut self.delta_rects)?;

        Ok(())
    }
}

/// 2.2.2.2.1.1.2.6 MULTI_OPAQUERECT_ORDER.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultiOpaqueRect {
    pub left: i16,
    pub top: i16,
    pub width: i16,
    pub height: i16,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub n_delta_entries: u8,
    pub delta_rects: Vec<u8>,
}

impl MultiOpaqueRect {
    pub(crate) fn update(&mut self, f: &mut FieldReader<'_, '_>) -> DecodeResult<()> {
        self.left = f.coord(self.left)?;
        self.top = f.coord(self.top)?;
        self.width = f.coord(self.width)?;
        self.height = f.coord(self.height)?;
        self.red = f.u8_field(self.red)?;
        self.green = f.u8_field(self.green)?;
        self.blue = f.u8_field(self.blue)?;
        self.n_delta_entries = f.u8_field(self.n_delta_entries)?;
        f.blob16(&mut self.delta_rects)?;

        Ok(())
    }
}

/// 2.2.2.2.1.1.2.14 FAST_INDEX_ORDER.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FastIndex {
    pub cache_id: u8,
    pub flags: u16,
    pub back_color: u32,
    pub fore_color: u32,
    pub bk_left: i16,
    pub bk_top: i16,
    pub bk_right: i16,
    pub bk_bottom: i16,
    pub op_left: i16,
    pub op_top: i16,
    pub op_right: i16,
    pub op_bottom: i16,
    pub x: i16,
    pub y: i16,
    pub data: Vec<u8>,
}

impl FastIndex {
    pub(crate) fn update(&mut self, f: &mut FieldReader<'_, '_>) -> DecodeResult<()> {
        self.cache_id = f.u8_field(self.cache_id)?;
        self.flags = f.u16_field(self.flags)?;
        self.back_color = f.color(self.back_color)?;
        self.fore_color = f.color(self.fore_color)?;
        self.bk_left = f.coord(self.bk_left)?;
        self.bk_top = f.coord(self.bk_top)?;
        self.bk_right = f.coord(self.bk_right)?;
        self.bk_bottom = f.coord(self.bk_bottom)?;
        self.op_left = f.coord(self.op_left)?;
        self.op_top = f.coord(self.op_top)?;
        self.op_right = f.coord(self.op_right)?;
        self.op_bottom = f.coord(self.op_bottom)?;
        self.x = f.coord(self.x)?;
        self.y = f.coord(self.y)?;
        f.blob8(&mut self.data)?;

        Ok(())
    }
}

/// 2.2.2.2.1.1.2.16 POLYGON_SC_ORDER.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolygonSc {
    pub x_start: i16,
    pub y_start: i16,
    pub rop2: u8,
    pub fill_mode: u8,
    pub brush_color: u32,
    pub n_delta_entries: u8,
    pub delta_points: Vec<u8>,
}

impl PolygonSc {
    pub(crate) fn update(&mut self, f: &mut FieldReader<'_, '_>) -> DecodeResult<()> {
        self.x_start = f.coord(self.x_start)?;
        self.y_start = f.coord(self.y_start)?;
        self.rop2 = f.u8_field(self.rop2)?;
        self.fill_mode = f.u8_field(self.fill_mode)?;
        self.brush_color = f.color(self.brush_color)?;
        self.n_delta_entries = f.u8_field(self.n_delta_entries)?;
        f.blob8(&mut self.delta_points)?;

        Ok(())
    }
}

/// 2.2.2.2.1.1.2.17 POLYGON_CB_ORDER.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolygonCb {
    pub x_start: i16,
    pub y_start: i16,
    pub rop2: u8,
    pub fill_mode: u8,
    pub back_color: u32,
    pub fore_color: u32,
    pub brush: Brush,
    pub n_delta_entries: u8,
    pub delta_points: Vec<u8>,
}

impl PolygonCb {
    pub(crate) fn update(&mut self, f: &mut FieldReader<'_, '_>) -> DecodeResult<()> {
        self.x_start = f.coord(self.x_start)?;
        self.y_start = f.coord(self.y_start)?;
        self.rop2 = f.u8_field(self.rop2)?;
        self.fill_mode = f.u8_field(self.fill_mode)?;
        self.back_color = f.color(self.back_color)?;
        self.fore_color = f.color(self.fore_color)?;
        self.brush.update(f)?;
        self.n_delta_entries = f.u8_field(self.n_delta_entries)?;
        f.blob8(&mut self.delta_points)?;

        Ok(())
    }
}

/// 2.2.2.2.1.1.2.18 POLYLINE_ORDER.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolyLine {
    pub x_start: i16,
    pub y_start: i16,
    pub rop2: u8,
    pub brush_cache_entry: u16,
    pub pen_color: u32,
    pub n_delta_entries: u8,
    pub delta_points: Vec<u8>,
}

impl PolyLine {
    pub(crate) fn update(&mut self, f: &mut FieldReader<'_, '_>) -> DecodeResult<()> {
        self.x_start = f.coord(self.x_start)?;
        self.y_start = f.coord(self.y_start)?;
        self.rop2 = f.u8_field(self.rop2)?;
        self.brush_cache_entry = f.u16_field(self.brush_cache_entry)?;
        self.pen_color = f.color(self.pen_color)?;
        self.n_delta_entries = f.u8_field(self.n_delta_entries)?;
        f.blob8(&mut self.delta_points)?;

        Ok(())
    }
}

/// 2.2.2.2.1.1.2.15 FAST_GLYPH_ORDER. Same shape as the fast index order,
/// with the blob carrying a single inlined glyph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FastGlyph {
    pub cache_id: u8,
    pub flags: u16,
    pub back_color: u32,
    pub fore_color: u32,
    pub bk_left: i16,
    pub bk_top: i16,
    pub bk_right: i16,
    pub bk_bottom: i16,
    pub op_left: i16,
    pub op_top: i16,
    pub op_right: i16,
    pub op_bottom: i16,
    pub x: i16,
    pub y: i16,
    pub glyph_data: Vec<u8>,
}

impl FastGlyph {
    pub(crate) fn update(&mut self, f: &mut FieldReader<'_, '_>) -> DecodeResult<()> {
        self.cache_id = f.u8_field(self.cache_id)?;
        self.flags = f.u16_field(self.flags)?;
        self.back_color = f.color(self.back_color)?;
        self.fore_color = f.color(self.fore_color)?;
        self.bk_left = f.coord(self.bk_left)?;
        self.bk_top = f.coord(self.bk_top)?;
        self.bk_right = f.coord(self.bk_right)?;
        self.bk_bottom = f.coord(self.bk_bottom)?;
        self.op_left = f.coord(self.op_left)?;
        self.op_top = f.coord(self.op_top)?;
        self.op_right = f.coord(self.op_right)?;
        self.op_bottom = f.coord(self.op_bottom)?;
        self.x = f.coord(self.x)?;
        self.y = f.coord(self.y)?;
        f.blob8(&mut self.glyph_data)?;

        Ok(())
    }
}

/// 2.2.2.2.1.1.2.19 ELLIPSE_SC_ORDER.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EllipseSc {
    pub left: i16,
    pub top: i16,
    pub right: i16,
    pub bottom: i16,
    pub rop2: u8,
    pub fill_mode: u8,
    pub color: u32,
}

impl EllipseSc {
    pub(crate) fn update(&mut self, f: &mut FieldReader<'_, '_>) -> DecodeResult<()> {
        self.left = f.coord(self.left)?;
        self.top = f.coord(self.top)?;
        self.right = f.coord(self.right)?;
        self.bottom = f.coord(self.bottom)?;
        self.rop2 = f.u8_field(self.rop2)?;
        self.fill_mode = f.u8_field(self.fill_mode)?;
        self.color = f.color(self.color)?;

        Ok(())
    }
}

/// 2.2.2.2.1.1.2.20 ELLIPSE_CB_ORDER.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EllipseCb {
    pub left: i16,
    pub top: i16,
    pub right: i16,
    pub bottom: i16,
    pub rop2: u8,
    pub fill_mode: u8,
    pub back_color: u32,
    pub fore_color: u32,
    pub brush: Brush,
}

impl EllipseCb {
    pub(crate) fn update(&mut self, f: &mut FieldReader<'_, '_>) -> DecodeResult<()> {
        self.left = f.coord(self.left)?;
        self.top = f.coord(self.top)?;
        self.right = f.coord(self.right)?;
        self.bottom = f.coord(self.bottom)?;
        self.rop2 = f.u8_field(self.rop2)?;
        self.fill_mode = f.u8_field(self.fill_mode)?;
        self.back_color = f.color(self.back_color)?;
        self.fore_color = f.color(self.fore_color)?;
        self.brush.update(f)?;

        Ok(())
    }
}

/// 2.2.2.2.1.1.2.13 GLYPH_INDEX_ORDER.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlyphIndex {
    pub cache_id: u8,
    pub fl_accel: u8,
    pub ul_char_inc: u8,
    pub f_op_redundant: u8,
    pub back_color: u32,
    pub fore_color: u32,
    pub bk_left: i16,
    pub bk_top: i16,
    pub bk_right: i16,
    pub bk_bottom: i16,
    pub op_left: i16,
    pub op_top: i16,
    pub op_right: i16,
    pub op_bottom: i16,
    pub brush: Brush,
    pub x: i16,
    pub y: i16,
    pub data: Vec<u8>,
}

impl GlyphIndex {
    pub(crate) fn update(&mut self, f: &mut FieldReader<'_, '_>) -> DecodeResult<()> {
        self.cache_id = f.u8_field(self.cache_id)?;
        self.fl_accel = f.u8_field(self.fl_accel)?;
        self.ul_char_inc = f.u8_field(self.ul_char_inc)?;
        self.f_op_redundant = f.u8_field(self.f_op_redundant)?;
        self.back_color = f.color(self.back_color)?;
        self.fore_color = f.color(self.fore_color)?;
        self.bk_left = f.coord(self.bk_left)?;
        self.bk_top = f.coord(self.bk_top)?;
        self.bk_right = f.coord(self.bk_right)?;
        self.bk_bottom = f.coord(self.bk_bottom)?;
        self.op_left = f.coord(self.op_left)?;
        self.op_top = f.coord(self.op_top)?;
        self.op_right = f.coord(self.op_right)?;
        self.op_bottom = f.coord(self.op_bottom)?;
        self.brush.update(f)?;
        self.x = f.coord(self.x)?;
        self.y = f.coord(self.y)?;
        f.blob8(&mut self.data)?;

        Ok(())
    }
}

//! The contract through which decoded orders reach their consumers.

use egdi_pdu::altsec::{
    CreateNineGridBitmap, CreateOffscreenBitmap, FrameMarker, GdiPlusCacheEnd, GdiPlusCacheFirst, GdiPlusCacheNext,
    GdiPlusFirst, GdiPlusNext, StreamBitmapFirst, StreamBitmapNext, SwitchSurface,
};
use egdi_pdu::secondary::{CacheBitmapV1, CacheBitmapV2, CacheBitmapV3, CacheBrush, CacheColorTable, CacheGlyph};

use crate::chunk::StreamProgress;
use crate::primary::{
    DrawNineGrid, DstBlt, EllipseCb, EllipseSc, FastGlyph, FastIndex, GlyphIndex, LineTo, Mem3Blt, MemBlt,
    MultiDrawNineGrid, MultiDstBlt, MultiOpaqueRect, MultiPatBlt, MultiScrBlt, OpaqueRect, PatBlt, PolyLine,
    PolygonCb, PolygonSc, SaveBitmap, ScrBlt,
};
use crate::ObserverError;

pub type ObserverResult = Result<(), ObserverError>;

/// Receives exactly one notification per successfully decoded order, in
/// stream order, after any cache or surface mutation the order implies.
///
/// Every method defaults to a no-op so integrators implement only the
/// orders they care about; typical implementors are a rendering frontend
/// and a session recorder. Returning an error aborts the remainder of the
/// current update message.
///
/// Primary order notifications hand out the full carried state of the
/// order type, not just the fields present in this occurrence.
#[allow(unused_variables)]
pub trait GdiObserver {
    // Primary orders.

    fn dst_blt(&mut self, order: &DstBlt) -> ObserverResult {
        Ok(())
    }

    fn pat_blt(&mut self, order: &PatBlt) -> ObserverResult {
        Ok(())
    }

    fn scr_blt(&mut self, order: &ScrBlt) -> ObserverResult {
        Ok(())
    }

    fn draw_nine_grid(&mut self, order: &DrawNineGrid) -> ObserverResult {
        Ok(())
    }

    fn multi_draw_nine_grid(&mut self, order: &MultiDrawNineGrid) -> ObserverResult {
        Ok(())
    }

    fn line_to(&mut self, order: &LineTo) -> ObserverResult {
        Ok(())
    }

    fn opaque_rect(&mut self, order: &OpaqueRect) -> ObserverResult {
        Ok(())
    }

    fn save_bitmap(&mut self, order: &SaveBitmap) -> ObserverResult {
        Ok(())
    }

    fn mem_blt(&mut self, order: &MemBlt) -> ObserverResult {
        Ok(())
    }

    fn mem3_blt(&mut self, order: &Mem3Blt) -> ObserverResult {
        Ok(())
    }

    fn multi_dst_blt(&mut self, order: &MultiDstBlt) -> ObserverResult {
        Ok(())
    }

    fn multi_pat_blt(&mut self, order: &MultiPatBlt) -> ObserverResult {
        Ok(())
    }

    fn multi_scr_blt(&mut self, order: &MultiScrBlt) -> ObserverResult {
        Ok(())
    }

    fn multi_opaque_rect(&mut self, order: &MultiOpaqueRect) -> ObserverResult {
        Ok(())
    }

    fn fast_index(&mut self, order: &FastIndex) -> ObserverResult {
        Ok(())
    }

    fn polygon_sc(&mut self, order: &PolygonSc) -> ObserverResult {
        Ok(())
    }

    fn polygon_cb(&mut self, order: &PolygonCb) -> ObserverResult {
        Ok(())
    }

    fn poly_line(&mut self, order: &PolyLine) -> ObserverResult {
        Ok(())
    }

    fn fast_glyph(&mut self, order: &FastGlyph) -> ObserverResult {
        Ok(())
    }

    fn ellipse_sc(&mut self, order: &EllipseSc) -> ObserverResult {
        Ok(())
    }

    fn ellipse_cb(&mut self, order: &EllipseCb) -> ObserverResult {
        Ok(())
    }

    fn glyph_index(&mut self, order: &GlyphIndex) -> ObserverResult {
        Ok(())
    }

    // Secondary (cache) orders.

    fn cache_bitmap_v1(&mut self, order: &CacheBitmapV1) -> ObserverResult {
        Ok(())
    }

    fn cache_color_table(&mut self, order: &CacheColorTable) -> ObserverResult {
        Ok(())
    }

    fn cache_glyph(&mut self, order: &CacheGlyph) -> ObserverResult {
        Ok(())
    }

    fn cache_bitmap_v2(&mut self, order: &CacheBitmapV2) -> ObserverResult {
        Ok(())
    }

    fn cache_brush(&mut self, order: &CacheBrush) -> ObserverResult {
        Ok(())
    }

    fn cache_bitmap_v3(&mut self, order: &CacheBitmapV3) -> ObserverResult {
        Ok(())
    }

    // Alternate secondary orders.

    fn switch_surface(&mut self, order: &SwitchSurface) -> ObserverResult {
        Ok(())
    }

    fn create_offscreen_bitmap(&mut self, order: &CreateOffscreenBitmap) -> ObserverResult {
        Ok(())
    }

    fn stream_bitmap_first(&mut self, order: &StreamBitmapFirst) -> ObserverResult {
        Ok(())
    }

    fn stream_bitmap_next(&mut self, order: &StreamBitmapNext) -> ObserverResult {
        Ok(())
    }

    fn create_nine_grid_bitmap(&mut self, order: &CreateNineGridBitmap) -> ObserverResult {
        Ok(())
    }

    fn gdiplus_first(&mut self, order: &GdiPlusFirst) -> ObserverResult {
        Ok(())
    }

    fn gdiplus_next(&mut self, order: &GdiPlusNext) -> ObserverResult {
        Ok(())
    }

    fn gdiplus_end(&mut self, assembled: StreamProgress) -> ObserverResult {
        Ok(())
    }

    fn gdiplus_cache_first(&mut self, order: &GdiPlusCacheFirst) -> ObserverResult {
        Ok(())
    }

    fn gdiplus_cache_next(&mut self, order: &GdiPlusCacheNext) -> ObserverResult {
        Ok(())
    }

    fn gdiplus_cache_end(&mut self, order: &GdiPlusCacheEnd, assembled: StreamProgress) -> ObserverResult {
        Ok(())
    }

    /// Window orders are recognized but their payload belongs to another
    /// PDU type; this is an explicit unsupported no-op.
    fn window(&mut self) -> ObserverResult {
        Ok(())
    }

    /// Composited desktop orders are recognized but their payload belongs
    /// to another PDU type; this is an explicit unsupported no-op.
    fn compdesk(&mut self) -> ObserverResult {
        Ok(())
    }

    /// A begin marker snapshots the active surface and directs subsequent
    /// draws at a live copy; the matching end marker publishes that copy
    /// as one atomic frame. Consumers treat every end marker as a publish
    /// point, balanced or not.
    fn frame_marker(&mut self, order: &FrameMarker) -> ObserverResult {
        Ok(())
    }
}

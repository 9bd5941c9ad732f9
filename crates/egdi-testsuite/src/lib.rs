//! Shared helpers for the egdi integration tests: wire message builders
//! and an observer that records every notification it receives.

#![allow(clippy::unwrap_used)]

use egdi_pdu::altsec::{
    CreateNineGridBitmap, CreateOffscreenBitmap, FrameAction, FrameMarker, GdiPlusCacheEnd, GdiPlusCacheFirst,
    GdiPlusCacheNext, GdiPlusFirst, GdiPlusNext, StreamBitmapFirst, StreamBitmapNext, SwitchSurface,
};
use egdi_pdu::secondary::{CacheBitmapV1, CacheBitmapV2, CacheBitmapV3, CacheBrush, CacheColorTable, CacheGlyph};
use egdi_session::chunk::StreamProgress;
use egdi_session::primary::{
    DrawNineGrid, DstBlt, EllipseCb, EllipseSc, FastGlyph, FastIndex, GlyphIndex, LineTo, Mem3Blt, MemBlt,
    MultiDrawNineGrid, MultiDstBlt, MultiOpaqueRect, MultiPatBlt, MultiScrBlt, OpaqueRect, PatBlt, PolyLine,
    PolygonCb, PolygonSc, SaveBitmap, ScrBlt,
};
use egdi_session::{GdiObserver, ObserverResult};

/// Builds the payload of one update message: the order count followed by
/// the already-encoded orders.
pub fn orders_message(number_orders: u16, orders: &[&[u8]]) -> Vec<u8> {
    let mut message = number_orders.to_le_bytes().to_vec();
    for order in orders {
        message.extend_from_slice(order);
    }
    message
}

/// Encodes a full secondary order: control byte, header and body. The
/// declared length is derived from the body so that the decoder's resync
/// lands exactly at the end of the order.
pub fn secondary_order(order_type: u8, extra_flags: u16, body: &[u8]) -> Vec<u8> {
    assert!(body.len() >= 7, "secondary order bodies span at least 7 bytes");
    let order_length = u16::try_from(body.len() - 7).unwrap();

    let mut order = vec![0x03];
    order.extend_from_slice(&order_length.to_le_bytes());
    order.extend_from_slice(&extra_flags.to_le_bytes());
    order.push(order_type);
    order.extend_from_slice(body);
    order
}

/// Encodes an alternate secondary order: the order type rides in the
/// upper six bits of the control byte, with the standard bit clear.
pub fn altsec_order(order_type: u8, body: &[u8]) -> Vec<u8> {
    let mut order = vec![order_type << 2];
    order.extend_from_slice(body);
    order
}

/// Records the name of every notification, plus the payloads a few tests
/// assert on. State carried by primary orders is read back through the
/// processor's context instead.
#[derive(Default)]
pub struct RecordingObserver {
    pub orders: Vec<&'static str>,
    pub color_tables: Vec<CacheColorTable>,
    pub bitmaps_v2: Vec<CacheBitmapV2>,
    pub frame_actions: Vec<FrameAction>,
    pub gdiplus_streams: Vec<StreamProgress>,
    pub mem_blts: Vec<MemBlt>,
}

impl GdiObserver for RecordingObserver {
    fn dst_blt(&mut self, _: &DstBlt) -> ObserverResult {
        self.orders.push("DstBlt");
        Ok(())
    }

    fn pat_blt(&mut self, _: &PatBlt) -> ObserverResult {
        self.orders.push("PatBlt");
        Ok(())
    }

    fn scr_blt(&mut self, _: &ScrBlt) -> ObserverResult {
        self.orders.push("ScrBlt");
        Ok(())
    }

    fn draw_nine_grid(&mut self, _: &DrawNineGrid) -> ObserverResult {
        self.orders.push("DrawNineGrid");
        Ok(())
    }

    fn multi_draw_nine_grid(&mut self, _: &MultiDrawNineGrid) -> ObserverResult {
        self.orders.push("MultiDrawNineGrid");
        Ok(())
    }

    fn line_to(&mut self, _: &LineTo) -> ObserverResult {
        self.orders.push("LineTo");
        Ok(())
    }

    fn opaque_rect(&mut self, _: &OpaqueRect) -> ObserverResult {
        self.orders.push("OpaqueRect");
        Ok(())
    }

    fn save_bitmap(&mut self, _: &SaveBitmap) -> ObserverResult {
        self.orders.push("SaveBitmap");
        Ok(())
    }

    fn mem_blt(&mut self, order: &MemBlt) -> ObserverResult {
        self.orders.push("MemBlt");
        self.mem_blts.push(*order);
        Ok(())
    }

    fn mem3_blt(&mut self, _: &Mem3Blt) -> ObserverResult {
        self.orders.push("Mem3Blt");
        Ok(())
    }

    fn multi_dst_blt(&mut self, _: &MultiDstBlt) -> ObserverResult {
        self.orders.push("MultiDstBlt");
        Ok(())
    }

    fn multi_pat_blt(&mut self, _: &MultiPatBlt) -> ObserverResult {
        self.orders.push("MultiPatBlt");
        Ok(())
    }

    fn multi_scr_blt(&mut self, _: &MultiScrBlt) -> ObserverResult {
        self.orders.push("MultiScrBlt");
        Ok(())
    }

    fn multi_opaque_rect(&mut self, _: &MultiOpaqueRect) -> ObserverResult {
        self.orders.push("MultiOpaqueRect");
        Ok(())
    }

    fn fast_index(&mut self, _: &FastIndex) -> ObserverResult {
        self.orders.push("FastIndex");
        Ok(())
    }

    fn polygon_sc(&mut self, _: &PolygonSc) -> ObserverResult {
        self.orders.push("PolygonSc");
        Ok(())
    }

    fn polygon_cb(&mut self, _: &PolygonCb) -> ObserverResult {
        self.orders.push("PolygonCb");
        Ok(())
    }

    fn poly_line(&mut self, _: &PolyLine) -> ObserverResult {
        self.orders.push("PolyLine");
        Ok(())
    }

    fn fast_glyph(&mut self, _: &FastGlyph) -> ObserverResult {
        self.orders.push("FastGlyph");
        Ok(())
    }

    fn ellipse_sc(&mut self, _: &EllipseSc) -> ObserverResult {
        self.orders.push("EllipseSc");
        Ok(())
    }

    fn ellipse_cb(&mut self, _: &EllipseCb) -> ObserverResult {
        self.orders.push("EllipseCb");
        Ok(())
    }

    fn glyph_index(&mut self, _: &GlyphIndex) -> ObserverResult {
        self.orders.push("GlyphIndex");
        Ok(())
    }

    fn cache_bitmap_v1(&mut self, _: &CacheBitmapV1) -> ObserverResult {
        self.orders.push("CacheBitmapV1");
        Ok(())
    }

    fn cache_color_table(&mut self, order: &CacheColorTable) -> ObserverResult {
        self.orders.push("CacheColorTable");
        self.color_tables.push(order.clone());
        Ok(())
    }

    fn cache_glyph(&mut self, _: &CacheGlyph) -> ObserverResult {
        self.orders.push("CacheGlyph");
        Ok(())
    }

    fn cache_bitmap_v2(&mut self, order: &CacheBitmapV2) -> ObserverResult {
        self.orders.push("CacheBitmapV2");
        self.bitmaps_v2.push(order.clone());
        Ok(())
    }

    fn cache_brush(&mut self, _: &CacheBrush) -> ObserverResult {
        self.orders.push("CacheBrush");
        Ok(())
    }

    fn cache_bitmap_v3(&mut self, _: &CacheBitmapV3) -> ObserverResult {
        self.orders.push("CacheBitmapV3");
        Ok(())
    }

    fn switch_surface(&mut self, _: &SwitchSurface) -> ObserverResult {
        self.orders.push("SwitchSurface");
        Ok(())
    }

    fn create_offscreen_bitmap(&mut self, _: &CreateOffscreenBitmap) -> ObserverResult {
        self.orders.push("CreateOffscreenBitmap");
        Ok(())
    }

    fn stream_bitmap_first(&mut self, _: &StreamBitmapFirst) -> ObserverResult {
        self.orders.push("StreamBitmapFirst");
        Ok(())
    }

    fn stream_bitmap_next(&mut self, _: &StreamBitmapNext) -> ObserverResult {
        self.orders.push("StreamBitmapNext");
        Ok(())
    }

    fn create_nine_grid_bitmap(&mut self, _: &CreateNineGridBitmap) -> ObserverResult {
        self.orders.push("CreateNineGridBitmap");
        Ok(())
    }

    fn gdiplus_first(&mut self, _: &GdiPlusFirst) -> ObserverResult {
        self.orders.push("GdiPlusFirst");
        Ok(())
    }

    fn gdiplus_next(&mut self, _: &GdiPlusNext) -> ObserverResult {
        self.orders.push("GdiPlusNext");
        Ok(())
    }

    fn gdiplus_end(&mut self, assembled: StreamProgress) -> ObserverResult {
        self.orders.push("GdiPlusEnd");
        self.gdiplus_streams.push(assembled);
        Ok(())
    }

    fn gdiplus_cache_first(&mut self, _: &GdiPlusCacheFirst) -> ObserverResult {
        self.orders.push("GdiPlusCacheFirst");
        Ok(())
    }

    fn gdiplus_cache_next(&mut self, _: &GdiPlusCacheNext) -> ObserverResult {
        self.orders.push("GdiPlusCacheNext");
        Ok(())
    }

    fn gdiplus_cache_end(&mut self, _: &GdiPlusCacheEnd, assembled: StreamProgress) -> ObserverResult {
        self.orders.push("GdiPlusCacheEnd");
        self.gdiplus_streams.push(assembled);
        Ok(())
    }

    fn window(&mut self) -> ObserverResult {
        self.orders.push("Window");
        Ok(())
    }

    fn compdesk(&mut self) -> ObserverResult {
        self.orders.push("Compdesk");
        Ok(())
    }

    fn frame_marker(&mut self, order: &FrameMarker) -> ObserverResult {
        self.orders.push("FrameMarker");
        self.frame_actions.push(order.action);
        Ok(())
    }
}

//! The top-level drawing order stream decoder.

use core::cmp;

use egdi_pdu::altsec::{
    AltsecOrderType, CreateNineGridBitmap, CreateOffscreenBitmap, FrameAction, FrameMarker, GdiPlusCacheEnd,
    GdiPlusCacheFirst, GdiPlusCacheNext, GdiPlusEnd, GdiPlusFirst, GdiPlusNext, StreamBitmapFirst, StreamBitmapFlags,
    StreamBitmapNext, SwitchSurface,
};
use egdi_pdu::control::{ControlFlags, OrderClass};
use egdi_pdu::cursor::ReadCursor;
use egdi_pdu::secondary::{
    CacheBitmapV1, CacheBitmapV2, CacheBitmapV3, CacheBrush, CacheColorTable, CacheGlyph, CacheGlyphData,
    SecondaryOrderHeader, SecondaryOrderType, DO_NOT_CACHE_INDEX,
};
use egdi_pdu::{decode_cursor, DecodeError};

use crate::cache::{CacheEntry, GdiCache};
use crate::chunk::{ChunkAssembly, StreamKind};
use crate::observer::{GdiObserver, ObserverResult};
use crate::primary::{FieldReader, PrimaryContext, PrimaryOrderType};
use crate::surface::SurfaceTable;
use crate::{SessionError, SessionResult};

/// Decodes the order stream of one session.
///
/// A processor owns the full GDI state of its session: the primary order
/// context, the bitmap/glyph/brush caches, the surface table and the
/// chunk reassembly slots. Decoding is synchronous and performs no I/O;
/// messages of one session must be processed in order, by one processor.
/// Independent sessions use independent processors.
pub struct OrdersProcessor {
    primary: PrimaryContext,
    bitmaps: GdiCache<CacheEntry>,
    glyphs: GdiCache<CacheGlyphData>,
    brushes: GdiCache<CacheBrush>,
    surfaces: SurfaceTable,
    stream_bitmap: ChunkAssembly,
    gdiplus: ChunkAssembly,
    gdiplus_cache: ChunkAssembly,
    in_frame: bool,
}

/// Brushes have a single cache on the wire; they are stored under this
/// fixed cache id.
const BRUSH_CACHE_ID: u8 = 0;

impl OrdersProcessor {
    pub fn new(screen_width: u16, screen_height: u16) -> Self {
        Self {
            primary: PrimaryContext::default(),
            bitmaps: GdiCache::new(),
            glyphs: GdiCache::new(),
            brushes: GdiCache::new(),
            surfaces: SurfaceTable::new(screen_width, screen_height),
            stream_bitmap: ChunkAssembly::new(StreamKind::StreamBitmap),
            gdiplus: ChunkAssembly::new(StreamKind::GdiPlus),
            gdiplus_cache: ChunkAssembly::new(StreamKind::GdiPlusCache),
            in_frame: false,
        }
    }

    pub fn primary_context(&self) -> &PrimaryContext {
        &self.primary
    }

    pub fn bitmap_cache(&self) -> &GdiCache<CacheEntry> {
        &self.bitmaps
    }

    pub fn glyph_cache(&self) -> &GdiCache<CacheGlyphData> {
        &self.glyphs
    }

    pub fn brush_cache(&self) -> &GdiCache<CacheBrush> {
        &self.brushes
    }

    pub fn surfaces(&self) -> &SurfaceTable {
        &self.surfaces
    }

    /// Whether a frame begin marker is currently open.
    pub fn in_frame(&self) -> bool {
        self.in_frame
    }

    /// Decodes the payload of one update message and reports every order
    /// to the observer.
    ///
    /// Decoding is all-or-nothing: the first error discards the remainder
    /// of the message, and whether the session survives is the caller's
    /// decision. Returns the number of orders decoded.
    pub fn process<O: GdiObserver>(&mut self, input: &[u8], observer: &mut O) -> SessionResult<usize> {
        let src = &mut ReadCursor::new(input);

        ensure_remaining(src, "numberOrders", 2)?;
        let number_orders = src.read_u16();

        for _ in 0..number_orders {
            self.process_order(src, observer)?;
        }

        trace!(number_orders, "update message decoded");

        Ok(usize::from(number_orders))
    }

    fn process_order<O: GdiObserver>(&mut self, src: &mut ReadCursor<'_>, observer: &mut O) -> SessionResult<()> {
        ensure_remaining(src, "controlFlags", 1)?;
        let control = ControlFlags::from_bits_retain(src.read_u8());

        match control.class() {
            OrderClass::Primary => self.process_primary(src, control, observer),
            OrderClass::Secondary => self.process_secondary(src, observer),
            OrderClass::AlternateSecondary => self.process_altsec(src, control, observer),
        }
    }

    fn process_primary<O: GdiObserver>(
        &mut self,
        src: &mut ReadCursor<'_>,
        control: ControlFlags,
        observer: &mut O,
    ) -> SessionResult<()> {
        let order_type = self.primary.update(src, control)?;
        trace!(?order_type, "primary order");

        let field_flags = self.primary.field_flags;
        let delta_coords = self.primary.delta_coords;
        let mut fields = FieldReader::new(src, field_flags, delta_coords);

        match order_type {
            PrimaryOrderType::DstBlt => {
                self.primary.dst_blt.update(&mut fields)?;
                notify(observer.dst_blt(&self.primary.dst_blt), "DstBlt")
            }
            PrimaryOrderType::PatBlt => {
                self.primary.pat_blt.update(&mut fields)?;
                notify(observer.pat_blt(&self.primary.pat_blt), "PatBlt")
            }
            PrimaryOrderType::ScrBlt => {
                self.primary.scr_blt.update(&mut fields)?;
                notify(observer.scr_blt(&self.primary.scr_blt), "ScrBlt")
            }
            PrimaryOrderType::DrawNineGrid => {
                self.primary.draw_nine_grid.update(&mut fields)?;
                notify(observer.draw_nine_grid(&self.primary.draw_nine_grid), "DrawNineGrid")
            }
            PrimaryOrderType::MultiDrawNineGrid => {
                self.primary.multi_draw_nine_grid.update(&mut fields)?;
                notify(
                    observer.multi_draw_nine_grid(&self.primary.multi_draw_nine_grid),
                    "MultiDrawNineGrid",
                )
            }
            PrimaryOrderType::LineTo => {
                self.primary.line_to.update(&mut fields)?;
                notify(observer.line_to(&self.primary.line_to), "LineTo")
            }
            PrimaryOrderType::OpaqueRect => {
                self.primary.opaque_rect.update(&mut fields)?;
                notify(observer.opaque_rect(&self.primary.opaque_rect), "OpaqueRect")
            }
            PrimaryOrderType::SaveBitmap => {
                self.primary.save_bitmap.update(&mut fields)?;
                notify(observer.save_bitmap(&self.primary.save_bitmap), "SaveBitmap")
            }
            PrimaryOrderType::MemBlt => {
                self.primary.mem_blt.update(&mut fields)?;
                notify(observer.mem_blt(&self.primary.mem_blt), "MemBlt")
            }
            PrimaryOrderType::Mem3Blt => {
                self.primary.mem3_blt.update(&mut fields)?;
                notify(observer.mem3_blt(&self.primary.mem3_blt), "Mem3Blt")
            }
            PrimaryOrderType::MultiDstBlt => {
                self.primary.multi_dst_blt.update(&mut fields)?;
                notify(observer.multi_dst_blt(&self.primary.multi_dst_blt), "MultiDstBlt")
            }
            PrimaryOrderType::MultiPatBlt => {
                self.primary.multi_pat_blt.update(&mut fields)?;
                notify(observer.multi_pat_blt(&self.primary.multi_pat_blt), "MultiPatBlt")
            }
            PrimaryOrderType::MultiScrBlt => {
                self.primary.multi_scr_blt.update(&mut fields)?;
                notify(observer.multi_scr_blt(&self.primary.multi_scr_blt), "MultiScrBlt")
            }
            PrimaryOrderType::MultiOpaqueRect => {
                self.primary.multi_opaque_rect.update(&mut fields)?;
                notify(
                    observer.multi_opaque_rect(&self.primary.multi_opaque_rect),
                    "MultiOpaqueRect",
                )
            }
            PrimaryOrderType::FastIndex => {
                self.primary.fast_index.update(&mut fields)?;
                notify(observer.fast_index(&self.primary.fast_index), "FastIndex")
            }
            PrimaryOrderType::PolygonSc => {
                self.primary.polygon_sc.update(&mut fields)?;
                notify(observer.polygon_sc(&self.primary.polygon_sc), "PolygonSc")
            }
            PrimaryOrderType::PolygonCb => {
                self.primary.polygon_cb.update(&mut fields)?;
                notify(observer.polygon_cb(&self.primary.polygon_cb), "PolygonCb")
            }
            PrimaryOrderType::PolyLine => {
                self.primary.poly_line.update(&mut fields)?;
                notify(observer.poly_line(&self.primary.poly_line), "PolyLine")
            }
            PrimaryOrderType::FastGlyph => {
                self.primary.fast_glyph.update(&mut fields)?;
                notify(observer.fast_glyph(&self.primary.fast_glyph), "FastGlyph")
            }
            PrimaryOrderType::EllipseSc => {
                self.primary.ellipse_sc.update(&mut fields)?;
                notify(observer.ellipse_sc(&self.primary.ellipse_sc), "EllipseSc")
            }
            PrimaryOrderType::EllipseCb => {
                self.primary.ellipse_cb.update(&mut fields)?;
                notify(observer.ellipse_cb(&self.primary.ellipse_cb), "EllipseCb")
            }
            PrimaryOrderType::GlyphIndex => {
                self.primary.glyph_index.update(&mut fields)?;
                notify(observer.glyph_index(&self.primary.glyph_index), "GlyphIndex")
            }
        }
    }

    fn process_secondary<O: GdiObserver>(&mut self, src: &mut ReadCursor<'_>, observer: &mut O) -> SessionResult<()> {
        let header = decode_cursor::<SecondaryOrderHeader>(src)?;
        let declared_end = src.pos() + header.body_length();

        let order_type = SecondaryOrderType::from_u8(header.order_type)?;
        trace!(?order_type, order_length = header.order_length, "secondary order");

        match order_type {
            SecondaryOrderType::CacheBitmapUncompressed | SecondaryOrderType::CacheBitmapCompressed => {
                let compressed = order_type == SecondaryOrderType::CacheBitmapCompressed;
                let order = CacheBitmapV1::decode(src, &header, compressed)?;
                self.bitmaps
                    .insert(order.cache_id, order.cache_index, CacheEntry::from(&order));
                notify(observer.cache_bitmap_v1(&order), "CacheBitmapV1")?;
            }
            SecondaryOrderType::CacheColorTable => {
                // Color tables are forwarded, not cached.
                let order = CacheColorTable::decode(src)?;
                notify(observer.cache_color_table(&order), "CacheColorTable")?;
            }
            SecondaryOrderType::CacheGlyph => {
                let order = CacheGlyph::decode(src, header.extra_flags)?;
                for glyph in &order.glyphs {
                    self.glyphs.insert(order.cache_id, glyph.cache_index, glyph.clone());
                }
                notify(observer.cache_glyph(&order), "CacheGlyph")?;
            }
            SecondaryOrderType::CacheBitmapUncompressedV2 | SecondaryOrderType::CacheBitmapCompressedV2 => {
                let compressed = order_type == SecondaryOrderType::CacheBitmapCompressedV2;
                let order = CacheBitmapV2::decode(src, &header, compressed)?;
                if order.cache_index != DO_NOT_CACHE_INDEX {
                    self.bitmaps
                        .insert(order.cache_id, order.cache_index, CacheEntry::from(&order));
                }
                notify(observer.cache_bitmap_v2(&order), "CacheBitmapV2")?;
            }
            SecondaryOrderType::CacheBrush => {
                let order = CacheBrush::decode(src)?;
                self.brushes
                    .insert(BRUSH_CACHE_ID, u16::from(order.cache_index), order.clone());
                notify(observer.cache_brush(&order), "CacheBrush")?;
            }
            SecondaryOrderType::CacheBitmapV3 => {
                let order = CacheBitmapV3::decode(src, &header)?;
                self.bitmaps
                    .insert(order.cache_id, order.cache_index, CacheEntry::from(&order));
                notify(observer.cache_bitmap_v3(&order), "CacheBitmapV3")?;
            }
        }

        resync(src, declared_end);

        Ok(())
    }

    fn process_altsec<O: GdiObserver>(
        &mut self,
        src: &mut ReadCursor<'_>,
        control: ControlFlags,
        observer: &mut O,
    ) -> SessionResult<()> {
        let order_type = AltsecOrderType::from_u8(control.altsec_order_type())?;
        trace!(?order_type, "alternate secondary order");

        match order_type {
            AltsecOrderType::SwitchSurface => {
                let order = decode_cursor::<SwitchSurface>(src)?;
                self.surfaces.switch(order.surface_id)?;
                notify(observer.switch_surface(&order), "SwitchSurface")?;
            }
            AltsecOrderType::CreateOffscreenBitmap => {
                let order = decode_cursor::<CreateOffscreenBitmap>(src)?;
                for &id in &order.delete_list {
                    self.surfaces.delete(id);
                }
                self.surfaces.create(order.surface_id, order.width, order.height);
                notify(observer.create_offscreen_bitmap(&order), "CreateOffscreenBitmap")?;
            }
            AltsecOrderType::StreamBitmapFirst => {
                let order = decode_cursor::<StreamBitmapFirst>(src)?;
                self.stream_bitmap.start(order.total_size, order.block.len());
                if order.flags.contains(StreamBitmapFlags::END) {
                    self.stream_bitmap.finish()?;
                }
                notify(observer.stream_bitmap_first(&order), "StreamBitmapFirst")?;
            }
            AltsecOrderType::StreamBitmapNext => {
                let block_size = self.stream_bitmap.chunk_size()?;
                let order = StreamBitmapNext::decode_with_block_size(src, block_size)?;
                self.stream_bitmap.append(order.block.len())?;
                if order.flags.contains(StreamBitmapFlags::END) {
                    self.stream_bitmap.finish()?;
                }
                notify(observer.stream_bitmap_next(&order), "StreamBitmapNext")?;
            }
            AltsecOrderType::CreateNineGridBitmap => {
                let order = decode_cursor::<CreateNineGridBitmap>(src)?;
                notify(observer.create_nine_grid_bitmap(&order), "CreateNineGridBitmap")?;
            }
            AltsecOrderType::GdiPlusFirst => {
                let order = decode_cursor::<GdiPlusFirst>(src)?;
                self.gdiplus.start(order.total_size, order.emf_records.len());
                notify(observer.gdiplus_first(&order), "GdiPlusFirst")?;
            }
            AltsecOrderType::GdiPlusNext => {
                let chunk_size = self.gdiplus.chunk_size()?;
                let order = GdiPlusNext::decode_with_chunk_size(src, chunk_size)?;
                self.gdiplus.append(order.emf_records.len())?;
                notify(observer.gdiplus_next(&order), "GdiPlusNext")?;
            }
            AltsecOrderType::GdiPlusEnd => {
                decode_cursor::<GdiPlusEnd>(src)?;
                let assembled = self.gdiplus.finish()?;
                notify(observer.gdiplus_end(assembled), "GdiPlusEnd")?;
            }
            AltsecOrderType::GdiPlusCacheFirst => {
                let order = decode_cursor::<GdiPlusCacheFirst>(src)?;
                self.gdiplus_cache.start(order.total_size, order.emf_records.len());
                notify(observer.gdiplus_cache_first(&order), "GdiPlusCacheFirst")?;
            }
            AltsecOrderType::GdiPlusCacheNext => {
                let chunk_size = self.gdiplus_cache.chunk_size()?;
                let order = GdiPlusCacheNext::decode_with_chunk_size(src, chunk_size)?;
                self.gdiplus_cache.append(order.emf_records.len())?;
                notify(observer.gdiplus_cache_next(&order), "GdiPlusCacheNext")?;
            }
            AltsecOrderType::GdiPlusCacheEnd => {
                let order = decode_cursor::<GdiPlusCacheEnd>(src)?;
                let assembled = self.gdiplus_cache.finish()?;
                notify(observer.gdiplus_cache_end(&order, assembled), "GdiPlusCacheEnd")?;
            }
            AltsecOrderType::Window => {
                // The window order payload is carried by a different PDU
                // type; nothing to consume here.
                debug!("window order is not supported");
                notify(observer.window(), "Window")?;
            }
            AltsecOrderType::Compdesk => {
                debug!("composited desktop order is not supported");
                notify(observer.compdesk(), "Compdesk")?;
            }
            AltsecOrderType::FrameMarker => {
                let order = decode_cursor::<FrameMarker>(src)?;
                match order.action {
                    FrameAction::Begin => self.in_frame = true,
                    FrameAction::End => self.in_frame = false,
                }
                notify(observer.frame_marker(&order), "FrameMarker")?;
            }
        }

        Ok(())
    }
}

fn notify(result: ObserverResult, order: &'static str) -> SessionResult<()> {
    result.map_err(|source| SessionError::Observer { order, source })
}

fn ensure_remaining(src: &ReadCursor<'_>, context: &'static str, expected: usize) -> SessionResult<()> {
    if src.len() < expected {
        return Err(DecodeError::Truncated {
            context,
            received: src.len(),
            expected,
        }
        .into());
    }

    Ok(())
}

/// Moves the cursor to the end position implied by a secondary order's
/// declared length, trusting the length field over the field-by-field
/// arithmetic so the stream stays synchronized for subsequent orders.
fn resync(src: &mut ReadCursor<'_>, declared_end: usize) {
    let target = cmp::min(declared_end, src.buffer_len());
    let pos = src.pos();

    if pos < target {
        warn!(
            consumed = pos,
            declared = target,
            "secondary order consumed fewer bytes than declared, resynchronizing"
        );
        src.advance(target - pos);
    } else if pos > target {
        warn!(
            consumed = pos,
            declared = target,
            "secondary order consumed more bytes than declared, resynchronizing"
        );
        src.rewind(pos - target);
    }
}

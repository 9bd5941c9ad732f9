use egdi_pdu::secondary::DO_NOT_CACHE_INDEX;
use egdi_pdu::DecodeError;
use egdi_session::{OrdersProcessor, SessionError};
use egdi_testsuite::{altsec_order, orders_message, secondary_order, RecordingObserver};

fn processor() -> OrdersProcessor {
    OrdersProcessor::new(1024, 768)
}

/// The literal end-to-end scenario: one secondary CACHE_COLOR_TABLE order
/// carrying 256 zero colors, with an arbitrary declared length.
#[test]
fn color_table_end_to_end() {
    let mut processor = processor();
    let mut observer = RecordingObserver::default();

    let mut message = vec![
        0x01, 0x00, // numberOrders
        0x03, // controlFlags: TS_STANDARD | TS_SECONDARY
        0x34, 0x12, // orderLength, any value
        0x00, 0x00, // extraFlags
        0x01, // orderType: CACHE_COLOR_TABLE
        0x00, // cacheIndex
        0x00, 0x01, // numberColors: 256
    ];
    message.extend_from_slice(&[0x00; 256 * 4]);

    assert_eq!(processor.process(&message, &mut observer).unwrap(), 1);

    assert_eq!(observer.orders, vec!["CacheColorTable"]);
    let table = &observer.color_tables[0];
    assert_eq!(table.colors.len(), 256);
    assert!(table.colors.iter().all(|color| color.value() == 0));
}

#[test]
fn color_table_with_wrong_entry_count_fails() {
    let mut processor = processor();
    let mut observer = RecordingObserver::default();

    // numberColors 255; trailing padding is never reached.
    let body = [0x00, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x00];
    let message = orders_message(1, &[&secondary_order(0x01, 0x0000, &body)]);
    let err = processor.process(&message, &mut observer).unwrap_err();

    assert!(matches!(
        err,
        SessionError::Decode(DecodeError::InvalidColorTableSize { count: 255 })
    ));
    assert!(observer.orders.is_empty());
}

#[test]
fn cache_bitmap_v1_populates_the_cache() {
    let mut processor = processor();
    let mut observer = RecordingObserver::default();

    let body = [
        0x00, // cacheId
        0x00, // pad
        0x04, 0x04, 0x08, // width, height, bpp
        0x04, 0x00, // bitmapLength
        0x01, 0x00, // cacheIndex
        0xDE, 0xAD, 0xBE, 0xEF,
    ];
    let message = orders_message(1, &[&secondary_order(0x00, 0x0000, &body)]);
    assert_eq!(processor.process(&message, &mut observer).unwrap(), 1);

    let entry = processor.bitmap_cache().get(0, 1).unwrap();
    assert_eq!((entry.width, entry.height, entry.bpp), (4, 4, 8));
    assert_eq!(entry.data, [0xDE, 0xAD, 0xBE, 0xEF]);
}

#[test]
fn compressed_cache_bitmap_v1_skips_the_compression_header() {
    let mut processor = processor();
    let mut observer = RecordingObserver::default();

    let body = [
        0x00, 0x00, 0x04, 0x04, 0x08, // cacheId, pad, width, height, bpp
        0x0C, 0x00, // bitmapLength: 8-byte header + 4 payload bytes
        0x02, 0x00, // cacheIndex
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // compression header, discarded
        0xAA, 0xBB, 0xCC, 0xDD,
    ];
    let message = orders_message(1, &[&secondary_order(0x02, 0x0000, &body)]);
    assert_eq!(processor.process(&message, &mut observer).unwrap(), 1);

    let entry = processor.bitmap_cache().get(0, 2).unwrap();
    assert_eq!(entry.data, [0xAA, 0xBB, 0xCC, 0xDD]);
}

// extraFlags for a revision 2 order: cacheId 1, bitsPerPixelId 3 (8bpp).
const V2_EXTRA_FLAGS: u16 = 0x0001 | (0x03 << 3);

fn v2_body(cache_index: u8, data: [u8; 4]) -> Vec<u8> {
    let mut body = vec![
        0x04, // bitmapWidth, encoded
        0x04, // bitmapHeight, encoded
        0x04, // bitmapLength, encoded
        cache_index, // cacheIndex, encoded
    ];
    body.extend_from_slice(&data);
    body
}

#[test]
fn cache_overwrite_keeps_only_the_latest_entry() {
    let mut processor = processor();
    let mut observer = RecordingObserver::default();

    let first = secondary_order(0x04, V2_EXTRA_FLAGS, &v2_body(0x09, [0xAA; 4]));
    let second = secondary_order(0x04, V2_EXTRA_FLAGS, &v2_body(0x09, [0xBB; 4]));
    let message = orders_message(2, &[&first, &second]);
    assert_eq!(processor.process(&message, &mut observer).unwrap(), 2);

    let entry = processor.bitmap_cache().get(1, 9).unwrap();
    assert_eq!(entry.data, [0xBB; 4]);
}

#[test]
fn do_not_cache_entries_are_forwarded_but_not_stored() {
    let mut processor = processor();
    let mut observer = RecordingObserver::default();

    // DO_NOT_CACHE rides in bit 7 + 4 of extraFlags.
    let extra_flags = V2_EXTRA_FLAGS | (0x10 << 7);
    let order = secondary_order(0x04, extra_flags, &v2_body(0x05, [0xAA; 4]));
    let message = orders_message(1, &[&order]);
    assert_eq!(processor.process(&message, &mut observer).unwrap(), 1);

    assert_eq!(observer.bitmaps_v2[0].cache_index, DO_NOT_CACHE_INDEX);
    assert!(!processor.bitmap_cache().has(1, 5));
    assert!(!processor.bitmap_cache().has(1, DO_NOT_CACHE_INDEX));
}

#[test]
fn cache_bitmap_v2_persistent_key_is_kept() {
    let mut processor = processor();
    let mut observer = RecordingObserver::default();

    // PERSISTENT_KEY_PRESENT rides in bit 7 + 1 of extraFlags.
    let extra_flags = V2_EXTRA_FLAGS | (0x02 << 7);
    let mut body = vec![
        0x11, 0x22, 0x33, 0x44, // key1
        0x55, 0x66, 0x77, 0x88, // key2
    ];
    body.extend_from_slice(&v2_body(0x01, [0xAA; 4]));
    let message = orders_message(1, &[&secondary_order(0x04, extra_flags, &body)]);
    assert_eq!(processor.process(&message, &mut observer).unwrap(), 1);

    let entry = processor.bitmap_cache().get(1, 1).unwrap();
    assert_eq!(entry.persistent_key, Some((0x4433_2211, 0x8877_6655)));
}

#[test]
fn glyph_cache_v1_stores_every_glyph() {
    let mut processor = processor();
    let mut observer = RecordingObserver::default();

    let body = [
        0x03, // cacheId
        0x01, // glyph count
        0x07, 0x00, // cacheIndex
        0x0A, 0x00, // cx: 10 -> 2 bytes per row
        0x02, 0x00, // cy: 2 rows, padded to 4 bytes
        0xDE, 0xAD, 0xBE, 0xEF,
    ];
    let message = orders_message(1, &[&secondary_order(0x03, 0x0000, &body)]);
    assert_eq!(processor.process(&message, &mut observer).unwrap(), 1);

    let glyph = processor.glyph_cache().get(3, 7).unwrap();
    assert_eq!((glyph.width, glyph.height), (10, 2));
    assert_eq!(glyph.bitmap, [0xDE, 0xAD, 0xBE, 0xEF]);
}

#[test]
fn glyph_cache_v2_is_rejected_distinctly() {
    let mut processor = processor();
    let mut observer = RecordingObserver::default();

    let body = [0x00; 7];
    let message = orders_message(1, &[&secondary_order(0x03, 0x0002, &body)]);
    let err = processor.process(&message, &mut observer).unwrap_err();

    assert!(matches!(
        err,
        SessionError::Decode(DecodeError::Unsupported {
            name: "glyph cache order revision 2"
        })
    ));
}

#[test]
fn monochrome_brush_rows_are_reversed() {
    let mut processor = processor();
    let mut observer = RecordingObserver::default();

    let body = [
        0x02, // cacheEntry
        0x01, // iBitmapFormat: BMF_1BPP
        0x08, 0x08, // cx, cy
        0x00, // style
        0x08, // iBytes
        0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08,
    ];
    let message = orders_message(1, &[&secondary_order(0x07, 0x0000, &body)]);
    assert_eq!(processor.process(&message, &mut observer).unwrap(), 1);

    let brush = processor.brush_cache().get(0, 2).unwrap();
    assert_eq!(brush.data[..8], [0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]);
}

#[test]
fn compressed_brush_formats_are_rejected_distinctly() {
    let mut processor = processor();
    let mut observer = RecordingObserver::default();

    // 8bpp with iBytes 20 selects the RLE-compressed layout.
    let body = [0x02, 0x03, 0x08, 0x08, 0x00, 0x14, 0x00];
    let message = orders_message(1, &[&secondary_order(0x07, 0x0000, &body)]);
    let err = processor.process(&message, &mut observer).unwrap_err();

    assert!(matches!(
        err,
        SessionError::Decode(DecodeError::Unsupported {
            name: "compressed brush data"
        })
    ));
}

#[test]
fn color_brush_scanlines_fill_bottom_to_top() {
    let mut processor = processor();
    let mut observer = RecordingObserver::default();

    // 8bpp uncompressed: 7 scanlines of 8 bytes, first one on the wire
    // landing in the last stored row.
    let mut body = vec![0x04, 0x03, 0x08, 0x08, 0x00, 0x38];
    for row in 0..7u8 {
        body.extend_from_slice(&[row; 8]);
    }
    let message = orders_message(1, &[&secondary_order(0x07, 0x0000, &body)]);
    assert_eq!(processor.process(&message, &mut observer).unwrap(), 1);

    let brush = processor.brush_cache().get(0, 4).unwrap();
    assert_eq!(brush.data[48..56], [0x00; 8]);
    assert_eq!(brush.data[..8], [0x06; 8]);
}

#[test]
fn cache_bitmap_v3_keeps_codec_and_key() {
    let mut processor = processor();
    let mut observer = RecordingObserver::default();

    // extraFlags: cacheId 2, bitsPerPixelId 4 (16bpp).
    let body = [
        0x05, 0x00, // cacheIndex
        0x11, 0x22, 0x33, 0x44, // key1
        0x55, 0x66, 0x77, 0x88, // key2
        0x00, 0x00, // reserved
        0x20, // codecId
        0x08, 0x00, // width
        0x08, 0x00, // height
        0x02, 0x00, 0x00, 0x00, // dataLen
        0xCA, 0xFE,
    ];
    let message = orders_message(1, &[&secondary_order(0x08, 0x0002 | (0x04 << 3), &body)]);
    assert_eq!(processor.process(&message, &mut observer).unwrap(), 1);

    let entry = processor.bitmap_cache().get(2, 5).unwrap();
    assert_eq!(entry.bpp, 16);
    assert_eq!(entry.persistent_key, Some((0x4433_2211, 0x8877_6655)));
    assert_eq!(entry.data, [0xCA, 0xFE]);
}

#[test]
fn reserved_secondary_order_type_fails() {
    let mut processor = processor();
    let mut observer = RecordingObserver::default();

    let message = orders_message(1, &[&secondary_order(0x06, 0x0000, &[0x00; 7])]);
    let err = processor.process(&message, &mut observer).unwrap_err();

    assert!(matches!(
        err,
        SessionError::Decode(DecodeError::ReservedOrderType { order_type: 0x06 })
    ));
}

#[test]
fn out_of_range_secondary_order_type_fails() {
    let mut processor = processor();
    let mut observer = RecordingObserver::default();

    let message = orders_message(1, &[&secondary_order(0x09, 0x0000, &[0x00; 7])]);
    let err = processor.process(&message, &mut observer).unwrap_err();

    assert!(matches!(
        err,
        SessionError::Decode(DecodeError::UnknownCacheOrderType { order_type: 0x09 })
    ));
}

#[test]
fn declared_length_resynchronizes_over_trailing_bytes() {
    let mut processor = processor();
    let mut observer = RecordingObserver::default();

    // A CacheBitmapV1 whose declared length covers three bytes the field
    // arithmetic never consumes; the frame marker after it must still
    // decode cleanly.
    let mut body = vec![
        0x00, 0x00, 0x04, 0x04, 0x08, // cacheId, pad, width, height, bpp
        0x04, 0x00, // bitmapLength
        0x01, 0x00, // cacheIndex
        0xDE, 0xAD, 0xBE, 0xEF,
    ];
    body.extend_from_slice(&[0x55, 0x55, 0x55]);
    let bitmap = secondary_order(0x00, 0x0000, &body);
    let frame_end = altsec_order(0x0D, &[0x01, 0x00, 0x00, 0x00]);

    let message = orders_message(2, &[&bitmap, &frame_end]);
    assert_eq!(processor.process(&message, &mut observer).unwrap(), 2);

    assert_eq!(observer.orders, vec!["CacheBitmapV1", "FrameMarker"]);
}

use egdi_pdu::DecodeError;
use egdi_session::primary::Bounds;
use egdi_session::{OrdersProcessor, SessionError};
use egdi_testsuite::{orders_message, RecordingObserver};

fn processor() -> OrdersProcessor {
    OrdersProcessor::new(1024, 768)
}

// controlFlags: STANDARD | TYPE_CHANGE, orderType MEMBLT, all 9 fields
// present, absolute coordinates.
const MEMBLT_FULL: &[u8] = &[
    0x09, 0x0D, // control, orderType
    0xFF, 0x01, // fieldFlags
    0x02, 0x01, // colorIndex 1, cacheId 2
    0x0A, 0x00, // left 10
    0x14, 0x00, // top 20
    0x1E, 0x00, // width 30
    0x28, 0x00, // height 40
    0xCC, // rop
    0x05, 0x00, // srcX 5
    0x06, 0x00, // srcY 6
    0x03, 0x00, // cacheIndex 3
];

#[test]
fn memblt_decodes_every_field() {
    let mut processor = processor();
    let mut observer = RecordingObserver::default();

    let message = orders_message(1, &[MEMBLT_FULL]);
    assert_eq!(processor.process(&message, &mut observer).unwrap(), 1);

    let memblt = &processor.primary_context().mem_blt;
    assert_eq!(memblt.cache_id, 2);
    assert_eq!(memblt.color_index, 1);
    assert_eq!(memblt.left, 10);
    assert_eq!(memblt.top, 20);
    assert_eq!(memblt.width, 30);
    assert_eq!(memblt.height, 40);
    assert_eq!(memblt.rop, 0xCC);
    assert_eq!(memblt.src_x, 5);
    assert_eq!(memblt.src_y, 6);
    assert_eq!(memblt.cache_index, 3);
    assert_eq!(observer.orders, vec!["MemBlt"]);
}

#[test]
fn absent_fields_carry_over_within_the_order_type() {
    let mut processor = processor();
    let mut observer = RecordingObserver::default();

    // Second occurrence reuses the stored order type and only rewrites
    // the left coordinate (field 2).
    let second: &[u8] = &[0x01, 0x02, 0x00, 0x63, 0x00];
    let message = orders_message(2, &[MEMBLT_FULL, second]);
    assert_eq!(processor.process(&message, &mut observer).unwrap(), 2);

    let memblt = &processor.primary_context().mem_blt;
    assert_eq!(memblt.left, 99);
    assert_eq!(memblt.top, 20);
    assert_eq!(memblt.cache_index, 3);
    assert_eq!(observer.mem_blts.len(), 2);
    assert_eq!(observer.mem_blts[0].left, 10);
    assert_eq!(observer.mem_blts[1].left, 99);
}

#[test]
fn another_order_type_does_not_disturb_carried_fields() {
    let mut processor = processor();
    let mut observer = RecordingObserver::default();

    // An OpaqueRect in between; the MemBlt state must survive untouched.
    let opaque_rect: &[u8] = &[0x09, 0x0A, 0x0F, 0x01, 0x00, 0x02, 0x00, 0x03, 0x00, 0x04, 0x00];
    let memblt_again: &[u8] = &[0x09, 0x0D, 0x00, 0x00];
    let message = orders_message(3, &[MEMBLT_FULL, opaque_rect, memblt_again]);
    assert_eq!(processor.process(&message, &mut observer).unwrap(), 3);

    assert_eq!(observer.orders, vec!["MemBlt", "OpaqueRect", "MemBlt"]);
    let memblt = &processor.primary_context().mem_blt;
    assert_eq!(memblt.top, 20);
    assert_eq!(memblt.rop, 0xCC);
}

#[test]
fn delta_coordinates_add_to_the_previous_value() {
    let mut processor = processor();
    let mut observer = RecordingObserver::default();

    // STANDARD | DELTA_COORDS, left present, delta -3.
    let delta: &[u8] = &[0x11, 0x02, 0x00, 0xFD];
    let message = orders_message(2, &[MEMBLT_FULL, delta]);
    assert_eq!(processor.process(&message, &mut observer).unwrap(), 2);

    assert_eq!(processor.primary_context().mem_blt.left, 7);
}

#[test]
fn zero_field_byte_flags_truncate_the_field_mask() {
    let mut processor = processor();
    let mut observer = RecordingObserver::default();

    // STANDARD | ZERO_FIELD_BYTE_BIT1 removes both field bytes of a
    // MemBlt: nothing present, everything carried.
    let truncated: &[u8] = &[0x81];
    let message = orders_message(2, &[MEMBLT_FULL, truncated]);
    assert_eq!(processor.process(&message, &mut observer).unwrap(), 2);

    assert_eq!(observer.mem_blts[1], observer.mem_blts[0]);
}

#[test]
fn field_flags_before_any_type_change_fail() {
    let mut processor = processor();
    let mut observer = RecordingObserver::default();

    let message = orders_message(1, &[&[0x01, 0x00]]);
    let err = processor.process(&message, &mut observer).unwrap_err();

    assert!(matches!(err, SessionError::UninitializedOrderType));
    assert!(observer.orders.is_empty());
}

#[test]
fn reserved_primary_order_type_fails() {
    let mut processor = processor();
    let mut observer = RecordingObserver::default();

    let message = orders_message(1, &[&[0x09, 0x03]]);
    let err = processor.process(&message, &mut observer).unwrap_err();

    assert!(matches!(
        err,
        SessionError::Decode(DecodeError::ReservedOrderType { order_type: 0x03 })
    ));
}

#[test]
fn bounds_persist_across_orders() {
    let mut processor = processor();
    let mut observer = RecordingObserver::default();

    // OpaqueRect with TS_BOUNDS and a full absolute bounds update.
    let bounded: &[u8] = &[
        0x0D, 0x0A, // STANDARD | TYPE_CHANGE | BOUNDS, orderType
        0x0F, // fieldFlags: four coordinates
        0x0F, // bounds description: all edges absolute
        0x01, 0x00, 0x02, 0x00, 0x03, 0x00, 0x04, 0x00, // bounds edges
        0x0A, 0x00, 0x0B, 0x00, 0x0C, 0x00, 0x0D, 0x00, // rectangle fields
    ];
    // Follow-up without TS_BOUNDS: stored bounds must not move.
    let unbounded: &[u8] = &[0x01, 0x00];
    let message = orders_message(2, &[bounded, unbounded]);
    assert_eq!(processor.process(&message, &mut observer).unwrap(), 2);

    let expected = Bounds {
        left: 1,
        top: 2,
        right: 3,
        bottom: 4,
    };
    assert_eq!(processor.primary_context().bounds, expected);
    assert!(!processor.primary_context().bounds_active);
}

#[test]
fn zero_bounds_deltas_reuses_the_stored_rectangle() {
    let mut processor = processor();
    let mut observer = RecordingObserver::default();

    let bounded: &[u8] = &[
        0x0D, 0x0A, 0x0F, 0x0F, 0x01, 0x00, 0x02, 0x00, 0x03, 0x00, 0x04, 0x00, 0x0A, 0x00, 0x0B, 0x00, 0x0C, 0x00,
        0x0D, 0x00,
    ];
    // TS_BOUNDS | TS_ZERO_BOUNDS_DELTAS: no bounds update record on the
    // wire, the stored rectangle applies as-is.
    let reused: &[u8] = &[0x25, 0x00];
    let message = orders_message(2, &[bounded, reused]);
    assert_eq!(processor.process(&message, &mut observer).unwrap(), 2);

    let bounds = processor.primary_context().bounds;
    assert_eq!((bounds.left, bounds.top, bounds.right, bounds.bottom), (1, 2, 3, 4));
    assert!(processor.primary_context().bounds_active);
}

#[test]
fn bounds_edges_update_independently_by_delta() {
    let mut processor = processor();
    let mut observer = RecordingObserver::default();

    let bounded: &[u8] = &[
        0x0D, 0x0A, 0x0F, 0x0F, 0x01, 0x00, 0x02, 0x00, 0x03, 0x00, 0x04, 0x00, 0x0A, 0x00, 0x0B, 0x00, 0x0C, 0x00,
        0x0D, 0x00,
    ];
    // No fields present; DELTA_LEFT (+5) and absolute TOP (20) in the
    // bounds update, right/bottom untouched.
    let delta_bounds: &[u8] = &[0x05, 0x00, 0x12, 0x05, 0x14, 0x00];
    let message = orders_message(2, &[bounded, delta_bounds]);
    assert_eq!(processor.process(&message, &mut observer).unwrap(), 2);

    let bounds = processor.primary_context().bounds;
    assert_eq!((bounds.left, bounds.top, bounds.right, bounds.bottom), (6, 20, 3, 4));
}

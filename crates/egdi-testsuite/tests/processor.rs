use egdi_pdu::DecodeError;
use egdi_session::primary::{DstBlt, OpaqueRect};
use egdi_session::{GdiObserver, ObserverResult, OrdersProcessor, SessionError};
use egdi_testsuite::{orders_message, RecordingObserver};

fn processor() -> OrdersProcessor {
    OrdersProcessor::new(1024, 768)
}

const OPAQUE_RECT: &[u8] = &[0x09, 0x0A, 0x0F, 0x01, 0x00, 0x02, 0x00, 0x03, 0x00, 0x04, 0x00];
const DST_BLT: &[u8] = &[0x09, 0x00, 0x1F, 0x01, 0x00, 0x02, 0x00, 0x03, 0x00, 0x04, 0x00, 0xCC];

#[test]
fn the_order_count_governs_the_decode_loop() {
    let mut processor = processor();
    let mut observer = RecordingObserver::default();

    let message = orders_message(2, &[OPAQUE_RECT, DST_BLT]);
    assert_eq!(processor.process(&message, &mut observer).unwrap(), 2);

    assert_eq!(observer.orders, vec!["OpaqueRect", "DstBlt"]);
}

#[test]
fn an_empty_message_decodes_zero_orders() {
    let mut processor = processor();
    let mut observer = RecordingObserver::default();

    assert_eq!(processor.process(&[0x00, 0x00], &mut observer).unwrap(), 0);
    assert!(observer.orders.is_empty());
}

#[test]
fn a_missing_order_count_is_truncated() {
    let mut processor = processor();
    let mut observer = RecordingObserver::default();

    let err = processor.process(&[0x01], &mut observer).unwrap_err();
    assert!(matches!(err, SessionError::Decode(DecodeError::Truncated { .. })));
}

#[test]
fn truncating_the_last_byte_fails_the_message() {
    let mut processor = processor();
    let mut observer = RecordingObserver::default();

    let message = orders_message(2, &[OPAQUE_RECT, DST_BLT]);
    let err = processor
        .process(&message[..message.len() - 1], &mut observer)
        .unwrap_err();

    assert!(matches!(err, SessionError::Decode(DecodeError::Truncated { .. })));
    // The first order was observed before the failure.
    assert_eq!(observer.orders, vec!["OpaqueRect"]);
}

#[test]
fn a_declared_order_missing_entirely_is_truncated() {
    let mut processor = processor();
    let mut observer = RecordingObserver::default();

    // Two declared orders, only one present.
    let message = orders_message(2, &[OPAQUE_RECT]);
    let err = processor.process(&message, &mut observer).unwrap_err();

    assert!(matches!(err, SessionError::Decode(DecodeError::Truncated { .. })));
}

#[derive(Default)]
struct RejectingObserver {
    calls: Vec<&'static str>,
}

impl GdiObserver for RejectingObserver {
    fn opaque_rect(&mut self, _: &OpaqueRect) -> ObserverResult {
        self.calls.push("OpaqueRect");
        Err("no room for rectangles today".into())
    }

    fn dst_blt(&mut self, _: &DstBlt) -> ObserverResult {
        self.calls.push("DstBlt");
        Ok(())
    }
}

#[test]
fn a_failing_observer_aborts_the_message() {
    let mut processor = processor();
    let mut observer = RejectingObserver::default();

    let message = orders_message(2, &[OPAQUE_RECT, DST_BLT]);
    let err = processor.process(&message, &mut observer).unwrap_err();

    assert!(matches!(err, SessionError::Observer { order: "OpaqueRect", .. }));
    assert_eq!(observer.calls, vec!["OpaqueRect"]);
}

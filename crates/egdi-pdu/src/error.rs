use thiserror::Error;

/// Errors produced while decoding drawing order wire records.
///
/// None of these are recoverable within an update message: the decoder
/// stops at the first error and the rest of the message is discarded.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("not enough bytes in {context}: received {received} bytes, expected {expected} bytes")]
    Truncated {
        context: &'static str,
        received: usize,
        expected: usize,
    },

    #[error("invalid `{field}`: {reason}")]
    InvalidField {
        field: &'static str,
        reason: &'static str,
    },

    #[error("order type {order_type:#04x} maps to a reserved table entry")]
    ReservedOrderType { order_type: u8 },

    #[error("unknown cache order type {order_type:#04x}")]
    UnknownCacheOrderType { order_type: u8 },

    #[error("unknown alternate secondary order type {order_type:#04x}")]
    UnknownAltsecOrderType { order_type: u8 },

    #[error("color table holds {count} entries instead of 256")]
    InvalidColorTableSize { count: u16 },

    #[error("unsupported {name}")]
    Unsupported { name: &'static str },
}

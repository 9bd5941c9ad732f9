use egdi_pdu::DecodeError;
use thiserror::Error;

use crate::chunk::StreamKind;

/// Error type observers may return to abort the current message.
pub type ObserverError = Box<dyn std::error::Error + Send + Sync>;

/// Errors surfaced to the session owner.
///
/// All of them discard the remainder of the current update message; the
/// caller decides whether the session itself survives.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("order decoding failed")]
    Decode(#[from] DecodeError),

    #[error("field flags requested before any order type was established")]
    UninitializedOrderType,

    #[error("switch to unknown surface {surface_id:#06x}")]
    UnknownSurface { surface_id: u16 },

    #[error("{kind} continuation without a preceding first chunk")]
    MissingFirstChunk { kind: StreamKind },

    #[error("observer rejected the {order} notification")]
    Observer {
        order: &'static str,
        #[source]
        source: ObserverError,
    },
}

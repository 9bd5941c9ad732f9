//! Reassembly state for orders streamed across First/Next/End records.
//!
//! Only the First record of a stream declares sizes: the total payload
//! size and the chunk size every continuation record uses. One assembly
//! slot exists per stream kind; a continuation or end record arriving on
//! an idle slot is a protocol violation.

use core::fmt;

use crate::{SessionError, SessionResult};

/// The three independently streamed order kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamKind {
    StreamBitmap,
    GdiPlus,
    GdiPlusCache,
}

impl fmt::Display for StreamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StreamBitmap => write!(f, "stream bitmap"),
            Self::GdiPlus => write!(f, "GDI+"),
            Self::GdiPlusCache => write!(f, "GDI+ cache"),
        }
    }
}

/// Sizes of an assembled stream, reported when its slot closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamProgress {
    /// Total payload size declared by the First record.
    pub declared: u32,
    /// Bytes received across all chunks so far.
    pub received: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AssemblyState {
    Idle,
    Accumulating {
        declared: u32,
        received: u32,
        chunk_size: usize,
    },
}

/// Reassembly slot for one stream kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkAssembly {
    kind: StreamKind,
    state: AssemblyState,
}

impl ChunkAssembly {
    pub fn new(kind: StreamKind) -> Self {
        Self {
            kind,
            state: AssemblyState::Idle,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.state == AssemblyState::Idle
    }

    /// Opens the slot for a First record. A First record arriving while a
    /// previous stream is still open abandons the stale stream.
    pub fn start(&mut self, declared: u32, first_chunk: usize) {
        if !self.is_idle() {
            warn!(kind = %self.kind, "first chunk while a stream was already open, dropping the stale stream");
        }

        self.state = AssemblyState::Accumulating {
            declared,
            received: first_chunk as u32,
            chunk_size: first_chunk,
        };
    }

    /// The chunk size continuation records of this stream use, carried
    /// forward from the First record.
    pub fn chunk_size(&self) -> SessionResult<usize> {
        match self.state {
            AssemblyState::Accumulating { chunk_size, .. } => Ok(chunk_size),
            AssemblyState::Idle => Err(SessionError::MissingFirstChunk { kind: self.kind }),
        }
    }

    /// Accounts for one continuation chunk.
    pub fn append(&mut self, chunk: usize) -> SessionResult<()> {
        match &mut self.state {
            AssemblyState::Accumulating { received, .. } => {
                *received += chunk as u32;
                Ok(())
            }
            AssemblyState::Idle => Err(SessionError::MissingFirstChunk { kind: self.kind }),
        }
    }

    /// Closes the slot and reports the assembled sizes.
    pub fn finish(&mut self) -> SessionResult<StreamProgress> {
        match self.state {
            AssemblyState::Accumulating { declared, received, .. } => {
                self.state = AssemblyState::Idle;
                Ok(StreamProgress { declared, received })
            }
            AssemblyState::Idle => Err(SessionError::MissingFirstChunk { kind: self.kind }),
        }
    }
}

#![cfg_attr(doc, doc = include_str!("../README.md"))]
#![doc(html_logo_url = "https://cdnweb.devolutions.net/images/projects/devolutions/logos/devolutions-icon-shadow.svg")]
#![allow(clippy::arithmetic_side_effects)] // FIXME: remove
#![allow(clippy::cast_possible_truncation)] // FIXME: remove

#[macro_use]
mod macros;

pub mod altsec;
pub mod color;
pub mod control;
pub mod cursor;
pub mod number;
pub mod secondary;

mod error;

pub use error::DecodeError;

use crate::cursor::{ReadCursor, WriteCursor};

pub type DecodeResult<T> = Result<T, DecodeError>;

/// Wire record that can be decoded from a binary input.
pub trait Decode<'de>: Sized {
    fn decode(src: &mut ReadCursor<'de>) -> DecodeResult<Self>;
}

/// Decodes a record from the beginning of a byte slice.
pub fn decode<'de, T: Decode<'de>>(src: &'de [u8]) -> DecodeResult<T> {
    let mut cursor = ReadCursor::new(src);
    T::decode(&mut cursor)
}

/// Decodes a record in-place using the provided `ReadCursor`.
pub fn decode_cursor<'de, T: Decode<'de>>(src: &mut ReadCursor<'de>) -> DecodeResult<T> {
    T::decode(src)
}

/// Wire record that can be encoded into its binary form.
pub trait Encode {
    /// Encodes this record in-place using the provided `WriteCursor`.
    fn encode(&self, dst: &mut WriteCursor<'_>) -> DecodeResult<()>;

    /// Returns the wire format name of this record.
    fn name(&self) -> &'static str;

    /// Computes the size in bytes for this record.
    fn size(&self) -> usize;
}

/// Encodes the given record into the provided buffer and returns the number of bytes written.
pub fn encode<T: Encode>(record: &T, dst: &mut [u8]) -> DecodeResult<usize> {
    let mut cursor = WriteCursor::new(dst);
    record.encode(&mut cursor)?;
    Ok(cursor.pos())
}

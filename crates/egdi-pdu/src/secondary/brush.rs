//! Brush cache order.

use crate::cursor::ReadCursor;
use crate::{DecodeError, DecodeResult};

/// iBitmapFormat lookup (BMF_1BPP..BMF_32BPP); zero entries are
/// unassigned format ids.
const BMF_BPP: [u8; 8] = [0, 1, 0, 8, 16, 24, 32, 0];

/// Brush pattern storage size; scanlines are written into this buffer from
/// the bottom row upwards.
const BRUSH_DATA_LEN: usize = 256;

/// `(bpp, iBytes)` pairs identifying RLE-compressed brush data.
const COMPRESSED_BRUSH_SIZES: [(u8, u8); 3] = [(8, 20), (16, 24), (24, 32)];

/// 2.2.2.2.1.2.7 TS_CACHE_BRUSH_ORDER.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheBrush {
    pub cache_index: u8,
    pub bpp: u8,
    pub width: u8,
    pub height: u8,
    pub style: u8,
    pub data: Vec<u8>,
}

impl CacheBrush {
    const FIXED_PART_SIZE: usize = 1 + 1 + 1 + 1 + 1 + 1;

    pub fn decode(src: &mut ReadCursor<'_>) -> DecodeResult<Self> {
        ensure_fixed_part_size!(in: src);

        let cache_index = src.read_u8();
        let format = src.read_u8();
        let width = src.read_u8();
        let height = src.read_u8();
        let style = src.read_u8();
        let byte_count = src.read_u8();

        let bpp = match BMF_BPP.get(usize::from(format)) {
            Some(&bpp) if bpp != 0 => bpp,
            _ => {
                return Err(DecodeError::InvalidField {
                    field: "iBitmapFormat",
                    reason: "unassigned brush format id",
                })
            }
        };

        let mut data = vec![0; BRUSH_DATA_LEN];

        if width == 8 && height == 8 && bpp == 1 {
            // Monochrome 8x8 pattern: one byte per row, stored reversed.
            ensure_size!(in: src, size: 8);
            for i in 0..8 {
                data[7 - i] = src.read_u8();
            }
        } else if COMPRESSED_BRUSH_SIZES.contains(&(bpp, byte_count)) {
            // Compressed brushes use an RLE scheme of their own; decoding
            // it is out of scope for this crate.
            return Err(DecodeError::Unsupported {
                name: "compressed brush data",
            });
        } else {
            // Uncompressed color brush: the wire carries rows top-down,
            // the pattern buffer is filled bottom-up.
            let scanline = usize::from(bpp / 8) * 8;
            ensure_size!(in: src, size: scanline * 7);
            for row in (0..7).rev() {
                let offset = row * scanline;
                data[offset..offset + scanline].copy_from_slice(src.read_slice(scanline));
            }
        }

        Ok(CacheBrush {
            cache_index,
            bpp,
            width,
            height,
            style,
            data,
        })
    }
}

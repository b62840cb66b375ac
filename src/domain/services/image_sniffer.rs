//! Image size detection from header bytes.
//!
//! Reads width and height of PNG and JPEG files without decoding pixel
//! data. The format is decided by magic bytes only; file extensions are
//! never consulted.

use crate::domain::entities::{ImageDimensions, ImageFormat};
use crate::domain::errors::SniffError;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n'];
const PNG_IHDR: &[u8; 4] = b"IHDR";
const PNG_IHDR_TYPE_OFFSET: usize = 12;
const PNG_IHDR_SIZE_OFFSET: usize = 16;
const PNG_LEGACY_SIZE_OFFSET: usize = 8;

const JPEG_SOI: [u8; 2] = [0xFF, 0xD8];
const JPEG_FILL: u8 = 0xFF;

/// Reads the pixel size of a PNG or JPEG image.
///
/// # Errors
/// Returns [`SniffError`] if the signature is unknown or the header is
/// truncated or malformed.
pub fn sniff(bytes: &[u8]) -> Result<ImageDimensions, SniffError> {
    if bytes.starts_with(&PNG_SIGNATURE) {
        sniff_png(bytes)
    } else if bytes.starts_with(&JPEG_SOI) {
        sniff_jpeg(bytes)
    } else {
        Err(SniffError::UnsupportedFormat)
    }
}

fn sniff_png(bytes: &[u8]) -> Result<ImageDimensions, SniffError> {
    let mut cursor = ByteCursor::new(bytes);

    let has_ihdr = bytes.len() >= PNG_IHDR_SIZE_OFFSET + 8
        && bytes.get(PNG_IHDR_TYPE_OFFSET..PNG_IHDR_SIZE_OFFSET) == Some(PNG_IHDR.as_slice());

    let format = if has_ihdr {
        cursor.seek(PNG_IHDR_SIZE_OFFSET, ImageFormat::Png)?;
        ImageFormat::Png
    } else {
        cursor.seek(PNG_LEGACY_SIZE_OFFSET, ImageFormat::LegacyPng)?;
        ImageFormat::LegacyPng
    };

    let width = cursor.read_u32_be(format)?;
    let height = cursor.read_u32_be(format)?;
    Ok(ImageDimensions::new(width, height))
}

/// SOFn markers carry the frame size. 0xC4 (DHT), 0xC8 (JPG) and 0xCC
/// (DAC) share the range but do not.
const fn is_frame_marker(marker: u8) -> bool {
    matches!(marker, 0xC0..=0xCF) && !matches!(marker, 0xC4 | 0xC8 | 0xCC)
}

fn sniff_jpeg(bytes: &[u8]) -> Result<ImageDimensions, SniffError> {
    const FORMAT: ImageFormat = ImageFormat::Jpeg;

    let mut cursor = ByteCursor::new(bytes);
    cursor.seek(JPEG_SOI.len(), FORMAT)?;

    loop {
        while cursor.peek_u8(FORMAT)? == JPEG_FILL {
            cursor.skip(1, FORMAT)?;
        }

        let marker = cursor.read_u8(FORMAT)?;

        if is_frame_marker(marker) {
            // segment length (2) + sample precision (1)
            cursor.skip(3, FORMAT)?;
            let height = cursor.read_u16_be(FORMAT)?;
            let width = cursor.read_u16_be(FORMAT)?;
            return Ok(ImageDimensions::new(u32::from(width), u32::from(height)));
        }

        // The length field counts itself, so skipping it from here lands
        // on the next marker.
        let length = cursor.peek_u16_be(FORMAT)?;
        if length < 2 {
            return Err(SniffError::Malformed {
                format: FORMAT,
                reason: "segment length shorter than its own field",
            });
        }
        cursor.skip(usize::from(length), FORMAT)?;
    }
}

/// Bounds-checked forward reader over a byte slice.
struct ByteCursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn seek(&mut self, pos: usize, format: ImageFormat) -> Result<(), SniffError> {
        if pos > self.bytes.len() {
            return Err(SniffError::Truncated { format });
        }
        self.pos = pos;
        Ok(())
    }

    fn skip(&mut self, count: usize, format: ImageFormat) -> Result<(), SniffError> {
        let pos = self
            .pos
            .checked_add(count)
            .ok_or(SniffError::Truncated { format })?;
        self.seek(pos, format)
    }

    fn peek<const N: usize>(&self, format: ImageFormat) -> Result<[u8; N], SniffError> {
        self.bytes
            .get(self.pos..self.pos + N)
            .and_then(|slice| slice.try_into().ok())
            .ok_or(SniffError::Truncated { format })
    }

    fn read<const N: usize>(&mut self, format: ImageFormat) -> Result<[u8; N], SniffError> {
        let value = self.peek::<N>(format)?;
        self.pos += N;
        Ok(value)
    }

    fn peek_u8(&self, format: ImageFormat) -> Result<u8, SniffError> {
        self.peek::<1>(format).map(|[b]| b)
    }

    fn read_u8(&mut self, format: ImageFormat) -> Result<u8, SniffError> {
        self.read::<1>(format).map(|[b]| b)
    }

    fn peek_u16_be(&self, format: ImageFormat) -> Result<u16, SniffError> {
        self.peek(format).map(u16::from_be_bytes)
    }

    fn read_u16_be(&mut self, format: ImageFormat) -> Result<u16, SniffError> {
        self.read(format).map(u16::from_be_bytes)
    }

    fn read_u32_be(&mut self, format: ImageFormat) -> Result<u32, SniffError> {
        self.read(format).map(u32::from_be_bytes)
    }
}

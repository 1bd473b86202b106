//! Sentinel-terminated source buffer for bounds-check-free scanning.
//!
//! The buffer guarantees a `0x00` sentinel byte after the scannable content,
//! so the scanner detects end of input by looking at the current byte. The
//! total size is rounded up to the next 64-byte boundary after reserving room
//! for the sentinel and two lookahead bytes, which keeps `peek()` and
//! `peek2()` in bounds at every cursor position.
//!
//! # Interior Null Bytes
//!
//! A NUL byte is end of input for the scanner. When the source contains one,
//! only the bytes before it are copied into the buffer; the offset of the NUL
//! is kept in [`SourceBuffer::truncated_at`] so the driver can warn about the
//! ignored tail.

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Bytes reserved after the content: the sentinel plus two lookahead bytes.
const TRAILER: usize = 3;

/// Longest content a buffer holds; every offset must fit in `u32`.
#[allow(
    clippy::cast_possible_truncation,
    reason = "std targets have at least 32-bit usize"
)]
const MAX_SOURCE_LEN: usize = u32::MAX as usize;

/// The prefix of `source` the scanner can see: at most `max_len` bytes, cut
/// at the first NUL. Also returns the NUL's offset if one was found.
fn scannable(source: &[u8], max_len: usize) -> (&[u8], Option<usize>) {
    let capped = &source[..source.len().min(max_len)];
    match memchr::memchr(0, capped) {
        Some(end) => (&capped[..end], Some(end)),
        None => (capped, None),
    }
}

/// Sentinel-terminated source buffer.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
///
/// Every byte from `source_len` to the end of the buffer is `0x00`.
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Owned buffer: `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the scannable content (excludes sentinel and padding).
    source_len: u32,
    /// Offset of the first NUL byte in the original input, if any.
    truncated_at: Option<u32>,
}

impl SourceBuffer {
    /// Create a new sentinel-terminated buffer from raw source bytes.
    ///
    /// Content after the first NUL byte is dropped, since the scanner would
    /// stop there anyway.
    ///
    /// # File Size
    ///
    /// Offsets are `u32`, so only the first `u32::MAX` bytes (~4 GiB) of a
    /// larger source are kept.
    pub fn new(source: &[u8]) -> Self {
        let (content, nul) = scannable(source, MAX_SOURCE_LEN);
        let content_len = content.len();

        let padded_len = (content_len + TRAILER + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        // Zero-filled, so the sentinel and padding need no extra writes.
        let mut buf = vec![0u8; padded_len];
        buf[..content_len].copy_from_slice(content);

        Self {
            buf,
            source_len: u32::try_from(content_len).unwrap_or(u32::MAX),
            truncated_at: nul.map(|pos| u32::try_from(pos).unwrap_or(u32::MAX)),
        }
    }

    /// Returns the scannable source bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Create a [`Cursor`] positioned at byte 0, line 1.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Length of the scannable content in bytes.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if there is nothing to scan.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    /// Offset of the NUL byte that ended the scannable content, if the
    /// original input contained one.
    pub fn truncated_at(&self) -> Option<u32> {
        self.truncated_at
    }
}

impl From<&str> for SourceBuffer {
    fn from(source: &str) -> Self {
        Self::new(source.as_bytes())
    }
}

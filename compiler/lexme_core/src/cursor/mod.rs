//! Forward-only cursor over a sentinel-terminated buffer.
//!
//! The cursor advances through the buffer byte-by-byte and keeps the 1-based
//! line counter in step: every `\n` it moves past bumps the line. End of input
//! is the sentinel (`0x00`) at `source_len`; since [`SourceBuffer`] drops
//! everything from the first NUL onward, a zero byte under the cursor always
//! means EOF.
//!
//! [`SourceBuffer`]: crate::SourceBuffer

/// Forward-only cursor over a sentinel-terminated byte buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`], so a scanner can snapshot its position cheaply.
///
/// # Invariant
///
/// `buf[source_len..]` is all `0x00` and at least three bytes long (sentinel
/// plus two lookahead bytes), and `pos <= source_len`. Both are guaranteed by
/// [`SourceBuffer`](crate::SourceBuffer) construction and by never advancing
/// past the sentinel.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel + padding).
    buf: &'a [u8],
    /// Current read position (byte index into `buf`).
    pos: u32,
    /// Length of the scannable content (excludes sentinel and padding).
    source_len: u32,
    /// 1-based line of the byte under the cursor.
    line: u32,
}

/// Size assertion: Cursor should be <= 32 bytes on 64-bit platforms.
/// &[u8] = 16 (fat pointer), 3 x u32 = 12, + 4 padding => 32 bytes.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 32);

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0, line 1.
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) + 2 < buf.len(),
            "sentinel and lookahead must be within buffer bounds"
        );
        debug_assert!(buf[source_len as usize] == 0, "sentinel byte must be 0x00");
        Self {
            buf,
            pos: 0,
            source_len,
            line: 1,
        }
    }

    /// Returns the byte at the current position (`0x00` at EOF).
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// Returns the byte one position ahead of current.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.buf[self.pos as usize + 1]
    }

    /// Returns the byte two positions ahead of current.
    #[inline]
    pub fn peek2(&self) -> u8 {
        self.buf[self.pos as usize + 2]
    }

    /// Advance the cursor by one byte, counting a newline if it was one.
    ///
    /// Does nothing at EOF, so the cursor never leaves the sentinel.
    #[inline]
    pub fn advance(&mut self) {
        if self.is_eof() {
            return;
        }
        if self.current() == b'\n' {
            self.line += 1;
        }
        self.pos += 1;
    }

    /// Advance the cursor by `n` bytes without line accounting.
    ///
    /// # Contract
    ///
    /// The skipped bytes must be known delimiter bytes (`/*`, `...`) that lie
    /// within the source content and contain no newline.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        debug_assert!(
            self.pos + n <= self.source_len,
            "advance_n past end of source"
        );
        debug_assert!(
            !self.slice(self.pos, self.pos + n).contains(&b'\n'),
            "advance_n must not skip newlines"
        );
        self.pos += n;
    }

    /// Returns `true` if the cursor has reached the sentinel.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Current 1-based line number.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Length of the scannable content.
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Extract a source byte range.
    ///
    /// `start..end` must fall within the source content.
    pub fn slice(&self, start: u32, end: u32) -> &'a [u8] {
        debug_assert!(
            end <= self.source_len,
            "slice end {end} exceeds source length {}",
            self.source_len
        );
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.buf[start as usize..end as usize]
    }

    /// Extract the source bytes from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a [u8] {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// # Contract
    ///
    /// `pred(0)` must return `false`, so the sentinel stops the loop.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        loop {
            let b = self.buf[self.pos as usize];
            if !pred(b) {
                break;
            }
            if b == b'\n' {
                self.line += 1;
            }
            self.pos += 1;
        }
    }

    /// Advance to the next `\n` byte or EOF using SIMD-accelerated search.
    ///
    /// Used to skip line comment bodies. The newline itself is not consumed.
    pub fn eat_until_newline_or_eof(&mut self) {
        let remaining = self.remaining();
        match memchr::memchr(b'\n', remaining) {
            Some(offset) => self.pos += to_u32(offset),
            None => self.pos = self.source_len,
        }
    }

    /// Advance until `byte` is found or EOF is reached.
    ///
    /// Returns the number of bytes consumed. The cursor is positioned at the
    /// found byte (not consumed), or at EOF. Newlines passed over are counted.
    pub fn eat_until(&mut self, byte: u8) -> u32 {
        let start = self.pos;
        let target = match memchr::memchr(byte, self.remaining()) {
            Some(offset) => self.pos + to_u32(offset),
            None => self.source_len,
        };
        self.jump_to(target);
        self.pos - start
    }

    /// Advance past the next occurrence of `needle`, or to EOF if there is
    /// none. Newlines passed over are counted.
    ///
    /// Used to skip block comment bodies up to and including `*/`.
    pub fn eat_past(&mut self, needle: &[u8]) {
        let target = match memchr::memmem::find(self.remaining(), needle) {
            Some(offset) => self.pos + to_u32(offset + needle.len()),
            None => self.source_len,
        };
        self.jump_to(target);
    }

    /// Source content from the cursor to the end (sentinel excluded).
    #[inline]
    fn remaining(&self) -> &'a [u8] {
        &self.buf[self.pos as usize..self.source_len as usize]
    }

    /// Move to `target`, counting every newline in between.
    fn jump_to(&mut self, target: u32) {
        debug_assert!(
            self.pos <= target && target <= self.source_len,
            "jump target {target} out of range"
        );
        let skipped = &self.buf[self.pos as usize..target as usize];
        self.line += to_u32(memchr::memchr_iter(b'\n', skipped).count());
        self.pos = target;
    }
}

/// Narrow an in-buffer offset or count to `u32`.
///
/// Every offset inside the scannable content is `<= source_len`, which is
/// itself a `u32`.
#[inline]
#[allow(
    clippy::cast_possible_truncation,
    reason = "offsets within the source content are bounded by source_len: u32"
)]
fn to_u32(n: usize) -> u32 {
    n as u32
}

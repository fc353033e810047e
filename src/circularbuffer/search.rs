//! Substring search over the logical content.
//!
//! Matching walks logical indices and translates each one to its physical
//! offset, so a pattern straddling the wrap point is found without flattening
//! the buffer first.

use super::{CircularBuffer, RangeArgument};
use crate::error::Error;
use crate::utils::clamp_range;

impl CircularBuffer {
    /// Returns the lowest index at or after `start` where `pattern` begins,
    /// or `None` if it does not occur.
    ///
    /// # Errors
    ///
    /// Fails with `Error::EmptyPattern` if `pattern` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use circularbuffer::CircularBuffer;
    ///
    /// let mut buf = CircularBuffer::new(32);
    /// buf.write(b"asdf\r\njkl;\r\n1234\r\n");
    /// assert_eq!(buf.find(b"\r\n", 0), Ok(Some(4)));
    /// assert_eq!(buf.find(b"\r\n", 5), Ok(Some(10)));
    /// assert_eq!(buf.find(b"x", 0), Ok(None));
    /// assert!(buf.find(b"", 0).is_err());
    /// ```
    #[inline]
    pub fn find(&self, pattern: &[u8], start: usize) -> Result<Option<usize>, Error> {
        self.find_in(pattern, start..)
    }

    /// Like `find`, but the match must lie completely inside `range`.
    ///
    /// Bounds are clamped to the content; an empty or inverted range finds
    /// nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use circularbuffer::CircularBuffer;
    ///
    /// let mut buf = CircularBuffer::new(32);
    /// buf.write(b"AT+CSQ\r\nOK\r\n");
    /// assert_eq!(buf.find_in(b"\r\n", 8..), Ok(Some(10)));
    /// assert_eq!(buf.find_in(b"OK", ..9), Ok(None));
    /// assert_eq!(buf.find_in(b"OK", ..10), Ok(Some(8)));
    /// ```
    pub fn find_in<R>(&self, pattern: &[u8], range: R) -> Result<Option<usize>, Error>
        where R: RangeArgument<usize>
    {
        if pattern.is_empty() {
            return Err(Error::EmptyPattern);
        }

        let (start, end) = clamp_range(range.start().unwrap_or(0),
                                       range.end().unwrap_or(self.len),
                                       self.len);
        if end - start < pattern.len() {
            return Ok(None);
        }

        Ok((start..=end - pattern.len()).find(|&at| self.matches_at(at, pattern)))
    }

    /// Like `find`, but a missing pattern is an error.
    ///
    /// # Errors
    ///
    /// Fails with `Error::EmptyPattern` if `pattern` is empty and with
    /// `Error::NotFound` if it does not occur at or after `start`.
    ///
    /// # Examples
    ///
    /// ```
    /// use circularbuffer::{CircularBuffer, ErrorKind};
    ///
    /// let mut buf = CircularBuffer::new(32);
    /// buf.write(b"asdf\r\njkl;\r\n");
    /// assert_eq!(buf.index(b"\r\n", 5), Ok(10));
    /// assert_eq!(buf.index(b"x", 0).unwrap_err().kind(), ErrorKind::NotFound);
    /// ```
    #[inline]
    pub fn index(&self, pattern: &[u8], start: usize) -> Result<usize, Error> {
        self.index_in(pattern, start..)
    }

    /// Like `find_in`, but a missing pattern is an error.
    pub fn index_in<R>(&self, pattern: &[u8], range: R) -> Result<usize, Error>
        where R: RangeArgument<usize>
    {
        self.find_in(pattern, range)?.ok_or(Error::NotFound)
    }

    /// Counts the non-overlapping occurrences of `pattern`, scanning left to
    /// right.
    ///
    /// # Errors
    ///
    /// Fails with `Error::EmptyPattern` if `pattern` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use circularbuffer::CircularBuffer;
    ///
    /// let mut buf = CircularBuffer::new(8);
    /// buf.write(b"aaaa");
    /// assert_eq!(buf.count(b"aa"), Ok(2));
    /// assert_eq!(buf.count(b"b"), Ok(0));
    /// ```
    pub fn count(&self, pattern: &[u8]) -> Result<usize, Error> {
        if pattern.is_empty() {
            return Err(Error::EmptyPattern);
        }

        let mut count = 0;
        let mut at = 0;
        while at + pattern.len() <= self.len {
            if self.matches_at(at, pattern) {
                count += 1;
                at += pattern.len();
            } else {
                at += 1;
            }
        }
        Ok(count)
    }

    /// Returns true if the content begins with `prefix`.
    ///
    /// An empty prefix always matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use circularbuffer::CircularBuffer;
    ///
    /// let mut buf = CircularBuffer::new(1024);
    /// buf.write(b"1234567890");
    /// assert!(buf.starts_with(b"123"));
    /// assert!(!buf.starts_with(b"678"));
    /// assert!(buf.starts_with(b"1234567890"));
    /// assert!(!buf.starts_with(b"12345678901"));
    /// ```
    #[inline]
    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        prefix.len() <= self.len && self.matches_at(0, prefix)
    }

    /// Returns true if `pattern` occurs anywhere in the content.
    ///
    /// This is exactly `find(pattern, 0)` reporting a match, so an empty
    /// pattern is never contained.
    ///
    /// # Examples
    ///
    /// ```
    /// use circularbuffer::CircularBuffer;
    ///
    /// let mut buf = CircularBuffer::new(10);
    /// buf.write(b"12315");
    /// assert!(buf.contains(b"15"));
    /// assert!(!buf.contains(b"51"));
    /// assert!(!buf.contains(b""));
    /// ```
    #[inline]
    pub fn contains(&self, pattern: &[u8]) -> bool {
        match self.find(pattern, 0) {
            Ok(found) => found.is_some(),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds `"678901234567"` wrapped around the end of a 15 byte store.
    fn wrapped() -> CircularBuffer {
        let mut buf = CircularBuffer::new(15);
        assert_eq!(buf.write(b"1234567890"), 10);
        assert_eq!(buf.read(5), b"12345");
        assert_eq!(buf.write(b"1234567"), 7);
        assert!(!buf.is_contiguous());
        buf
    }

    #[test]
    fn find_across_wrap() {
        let buf = wrapped();
        assert_eq!(buf.find(b"01", 0), Ok(Some(4)));
        assert_eq!(buf.find(b"90123", 0), Ok(Some(3)));
        assert_eq!(buf.find(b"567", 0), Ok(Some(9)));
        assert_eq!(buf.find(b"6", 1), Ok(Some(10)));
        assert_eq!(buf.find(b"678901234567", 0), Ok(Some(0)));
        assert_eq!(buf.find(b"6789012345678", 0), Ok(None));
    }

    #[test]
    fn find_start_past_end() {
        let buf = wrapped();
        assert_eq!(buf.find(b"6", 12), Ok(None));
        assert_eq!(buf.find(b"6", 100), Ok(None));
    }

    #[test]
    fn find_backtracks_after_partial_match() {
        let mut buf = CircularBuffer::new(16);
        buf.write(b"aab");
        assert_eq!(buf.find(b"ab", 0), Ok(Some(1)));
        buf.clear();
        buf.write(b"\r\r\nOK");
        assert_eq!(buf.find(b"\r\nOK", 0), Ok(Some(1)));
    }

    #[test]
    fn find_in_range() {
        let buf = wrapped();
        assert_eq!(buf.find_in(b"01", 4..6), Ok(Some(4)));
        assert_eq!(buf.find_in(b"01", 4..5), Ok(None));
        assert_eq!(buf.find_in(b"01", 6..4), Ok(None));
        assert_eq!(buf.find_in(b"", 0..4), Err(Error::EmptyPattern));
        assert_eq!(buf.index_in(b"23", ..), Ok(6));
        assert_eq!(buf.index_in(b"23", ..7), Err(Error::NotFound));
    }

    #[test]
    fn empty_pattern() {
        let buf = wrapped();
        assert_eq!(buf.find(b"", 0), Err(Error::EmptyPattern));
        assert_eq!(buf.index(b"", 0), Err(Error::EmptyPattern));
        assert_eq!(buf.count(b""), Err(Error::EmptyPattern));
        assert!(buf.starts_with(b""));
        assert!(!buf.contains(b""));
    }

    #[test]
    fn search_empty_buffer() {
        let buf = CircularBuffer::new(0);
        assert_eq!(buf.find(b"a", 0), Ok(None));
        assert_eq!(buf.count(b"a"), Ok(0));
        assert!(buf.starts_with(b""));
        assert!(!buf.starts_with(b"a"));
        assert!(!buf.contains(b"a"));
    }

    #[test]
    fn count_across_wrap() {
        let mut buf = CircularBuffer::new(8);
        buf.write(b"xxxxxxaa");
        buf.read(6);
        buf.write(b"aaaa");
        assert!(!buf.is_contiguous());
        assert_eq!(buf.count(b"aa"), Ok(3));
        assert_eq!(buf.count(b"aaa"), Ok(2));
        assert_eq!(buf.count(b"a"), Ok(6));
    }

    #[test]
    fn count_lines() {
        let mut buf = CircularBuffer::new(32);
        buf.write(b"asdf\r\njkl;\r\n1234\r\n");
        assert_eq!(buf.count(b"\r\n"), Ok(3));
        buf.clear();
        buf.write(b"asdf\r\njkl;\r\n1234\r\na");
        assert_eq!(buf.count(b"\r\n"), Ok(3));
    }

    #[test]
    fn starts_with_across_wrap() {
        let buf = wrapped();
        assert!(buf.starts_with(b"678901234"));
        assert!(!buf.starts_with(b"1234"));
    }
}

use alloc::vec::Vec;

use super::CircularBuffer;
use crate::error::Error;
use crate::utils::{adjust_slice, resolve_index};

impl CircularBuffer {
    /// Returns the byte at logical position `index`.
    ///
    /// Negative indices count from the back, so `-1` is the last byte.
    ///
    /// # Errors
    ///
    /// Fails with `Error::OutOfRange` unless `-len <= index < len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use circularbuffer::CircularBuffer;
    ///
    /// let mut buf = CircularBuffer::new(10);
    /// buf.write(b"12345");
    /// assert_eq!(buf.get(0), Ok(b'1'));
    /// assert_eq!(buf.get(-1), Ok(b'5'));
    /// assert!(buf.get(6).is_err());
    /// ```
    pub fn get(&self, index: isize) -> Result<u8, Error> {
        let resolved = self.resolve(index)?;
        Ok(self.byte_at(resolved))
    }

    /// Replaces the byte at logical position `index`.
    ///
    /// Index rules are the same as for `get`. Length and capacity do not
    /// change.
    ///
    /// # Examples
    ///
    /// ```
    /// use circularbuffer::CircularBuffer;
    ///
    /// let mut buf = CircularBuffer::new(10);
    /// buf.write(b"12345");
    /// buf.set(3, b'1').unwrap();
    /// assert_eq!(buf.to_string(), "12315");
    /// ```
    pub fn set(&mut self, index: isize, value: u8) -> Result<(), Error> {
        let resolved = self.resolve(index)?;
        *self.byte_at_mut(resolved) = value;
        Ok(())
    }

    /// Returns a copy of the bytes selected by `start`, `stop` and `step`,
    /// following ordinary sequence slicing rules.
    ///
    /// Omitted bounds default to the respective end of the content (which
    /// end depends on the sign of `step`), negative bounds count from the
    /// back, and out-of-range bounds are clamped.
    ///
    /// # Errors
    ///
    /// Fails with `Error::ZeroStep` if `step` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use circularbuffer::CircularBuffer;
    ///
    /// let mut buf = CircularBuffer::new(8);
    /// buf.write(b"0123456");
    /// assert_eq!(buf.slice(Some(1), Some(-1), 1).unwrap(), b"12345");
    /// assert_eq!(buf.slice(None, None, 2).unwrap(), b"0246");
    /// assert_eq!(buf.slice(None, None, -1).unwrap(), b"6543210");
    /// assert_eq!(buf.slice(Some(-100), Some(100), 1).unwrap(), b"0123456");
    /// ```
    pub fn slice(&self, start: Option<isize>, stop: Option<isize>, step: isize) -> Result<Vec<u8>, Error> {
        if step == 0 {
            return Err(Error::ZeroStep);
        }

        let (start, count) = adjust_slice(start, stop, step, self.len);
        if count == 0 {
            return Ok(Vec::new());
        }
        if step == 1 {
            let start = start as usize;
            return Ok(self.peek(start..start + count));
        }

        Ok((0..count as isize)
            .map(|i| self.byte_at((start + i * step) as usize))
            .collect())
    }

    fn resolve(&self, index: isize) -> Result<usize, Error> {
        resolve_index(index, self.len).ok_or(Error::OutOfRange { index, len: self.len })
    }
}

use std::cmp;

use alloc::vec::Vec;
use log::{debug, trace};

pub use odds::IndexRange as RangeArgument;

use crate::utils::*;

mod internal;
mod iterator_impls;
mod search;
mod sequence;
mod trait_impls;
mod view;

#[cfg(feature = "std")]
mod io_impls;

#[cfg(test)]
mod tests;

pub use self::view::ContiguousView;

/// `CircularBuffer` is a fixed capacity ring buffer for bytes.
///
/// Bytes are appended with `write` and removed from the front with `read`.
/// Once the write cursor reaches the end of the backing store it wraps to
/// offset 0, so the content may occupy two physical segments. Searching,
/// indexing and slicing all work on the logical content and bridge the wrap
/// point transparently.
///
/// # Capacity
///
/// The capacity is fixed at construction and can only be increased with
/// `resize`. Writes that do not fit are truncated, never rejected.
pub struct CircularBuffer {
    xs: Vec<u8>,
    head: usize,
    len: usize,
}

/// `CircularBuffer` iterator
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
#[derive(Clone)]
pub struct Iter<'a> {
    ring: &'a [u8],
    head: usize,
    remaining: usize,
}

impl CircularBuffer {
    /// Creates an empty `CircularBuffer` able to hold `capacity` bytes.
    ///
    /// A capacity of zero yields a valid buffer that accepts nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use circularbuffer::CircularBuffer;
    ///
    /// let buf = CircularBuffer::new(256);
    /// assert_eq!(buf.capacity(), 256);
    /// assert_eq!(buf.write_available(), 256);
    /// assert_eq!(buf.len(), 0);
    /// ```
    #[inline]
    pub fn new(capacity: usize) -> CircularBuffer {
        CircularBuffer {
            xs: alloc::vec![0; capacity],
            head: 0,
            len: 0,
        }
    }

    /// Return the capacity of the `CircularBuffer`.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.xs.len()
    }

    /// Returns the number of bytes in the `CircularBuffer`.
    ///
    /// # Examples
    ///
    /// ```
    /// use circularbuffer::CircularBuffer;
    ///
    /// let mut buf = CircularBuffer::new(4);
    /// assert_eq!(buf.len(), 0);
    /// buf.write(b"ab");
    /// assert_eq!(buf.len(), 2);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the buffer contains no bytes
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if the buffer is full.
    ///
    /// # Examples
    ///
    /// ```
    /// use circularbuffer::CircularBuffer;
    ///
    /// let mut buf = CircularBuffer::new(2);
    /// assert!(!buf.is_full());
    /// buf.write(b"xy");
    /// assert!(buf.is_full());
    /// ```
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Returns the number of bytes that can still be written.
    ///
    /// `len() + write_available() == capacity()` always holds.
    #[inline]
    pub fn write_available(&self) -> usize {
        self.capacity() - self.len
    }

    /// Returns true if the content occupies a single physical segment.
    ///
    /// # Examples
    ///
    /// ```
    /// use circularbuffer::CircularBuffer;
    ///
    /// let mut buf = CircularBuffer::new(4);
    /// buf.write(b"abc");
    /// buf.read(2);
    /// assert!(buf.is_contiguous());
    /// buf.write(b"de");
    /// assert!(!buf.is_contiguous());
    /// ```
    #[inline]
    pub fn is_contiguous(&self) -> bool {
        self.head + self.len <= self.capacity()
    }

    /// Appends as many bytes of `data` as fit and returns how many were
    /// written.
    ///
    /// Bytes beyond `write_available()` are silently discarded; this is not
    /// an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use circularbuffer::CircularBuffer;
    ///
    /// let mut buf = CircularBuffer::new(4);
    /// assert_eq!(buf.write(b"12"), 2);
    /// assert_eq!(buf.write(b"3456"), 2);
    /// assert_eq!(buf.write(b""), 0);
    /// assert_eq!(buf.read(4), b"1234");
    /// ```
    pub fn write(&mut self, data: &[u8]) -> usize {
        let count = cmp::min(data.len(), self.write_available());
        if count < data.len() {
            trace!("write truncated: {} of {} bytes accepted", count, data.len());
        }
        if count == 0 {
            return 0;
        }

        let tail = self.tail();
        let first = cmp::min(count, self.capacity() - tail);
        self.xs[tail..tail + first].copy_from_slice(&data[..first]);
        self.xs[..count - first].copy_from_slice(&data[first..count]);
        self.len += count;
        count
    }

    /// Removes and returns up to `size` bytes from the front of the buffer.
    ///
    /// Asking for more than `len()` returns everything that is there.
    ///
    /// # Examples
    ///
    /// ```
    /// use circularbuffer::CircularBuffer;
    ///
    /// let mut buf = CircularBuffer::new(15);
    /// buf.write(b"12345");
    /// assert_eq!(buf.read(2), b"12");
    /// assert_eq!(buf.read(10), b"345");
    /// assert!(buf.is_empty());
    /// ```
    pub fn read(&mut self, size: usize) -> Vec<u8> {
        let count = cmp::min(size, self.len);
        if count < size {
            trace!("short read: {} of {} bytes available", count, size);
        }
        let mut out = alloc::vec![0; count];
        self.copy_out(0, &mut out);
        self.consume(count);
        out
    }

    /// Removes and returns the whole content.
    #[inline]
    pub fn read_all(&mut self) -> Vec<u8> {
        let len = self.len;
        self.read(len)
    }

    /// Discards up to `size` bytes from the front of the buffer and returns
    /// how many were discarded.
    ///
    /// # Examples
    ///
    /// ```
    /// use circularbuffer::CircularBuffer;
    ///
    /// let mut buf = CircularBuffer::new(8);
    /// buf.write(b"\r\nOK\r\n");
    /// assert_eq!(buf.consume(2), 2);
    /// assert!(buf.starts_with(b"OK"));
    /// assert_eq!(buf.consume(100), 4);
    /// ```
    pub fn consume(&mut self, size: usize) -> usize {
        let count = cmp::min(size, self.len);
        if count == self.len {
            self.clear();
        } else {
            self.head = wrap_add(self.head, count, self.capacity());
            self.len -= count;
        }
        count
    }

    /// Copies the bytes in `range` without removing them.
    ///
    /// Bounds are clamped to the content.
    ///
    /// # Examples
    ///
    /// ```
    /// use circularbuffer::CircularBuffer;
    ///
    /// let mut buf = CircularBuffer::new(8);
    /// buf.write(b"abcdef");
    /// assert_eq!(buf.peek(1..3), b"bc");
    /// assert_eq!(buf.peek(4..), b"ef");
    /// assert_eq!(buf.peek(..100), b"abcdef");
    /// assert_eq!(buf.len(), 6);
    /// ```
    pub fn peek<R>(&self, range: R) -> Vec<u8>
        where R: RangeArgument<usize>
    {
        let (start, end) = clamp_range(range.start().unwrap_or(0),
                                       range.end().unwrap_or(self.len),
                                       self.len);
        let mut out = alloc::vec![0; end - start];
        self.copy_out(start, &mut out);
        out
    }

    /// Clears the buffer, removing all bytes.
    ///
    /// The backing store is kept.
    #[inline]
    pub fn clear(&mut self) {
        self.head = 0;
        self.len = 0;
    }

    /// Grows the backing store to `new_capacity` bytes and returns the
    /// effective capacity.
    ///
    /// Requests that do not exceed the current capacity leave the buffer
    /// untouched. Growing lays the content out contiguously from offset 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use circularbuffer::CircularBuffer;
    ///
    /// let mut buf = CircularBuffer::new(10);
    /// assert_eq!(buf.resize(5), 10);
    /// assert_eq!(buf.resize(15), 15);
    /// assert_eq!(buf.write_available(), 15);
    /// ```
    pub fn resize(&mut self, new_capacity: usize) -> usize {
        if new_capacity <= self.capacity() {
            return self.capacity();
        }

        let mut xs = alloc::vec![0; new_capacity];
        self.copy_out(0, &mut xs[..self.len]);
        debug!("resized from {} to {} bytes, {} bytes retained",
               self.capacity(),
               new_capacity,
               self.len);

        self.xs = xs;
        self.head = 0;
        new_capacity
    }

    /// Moves the content to the start of the backing store so it occupies a
    /// single physical segment, and returns it.
    ///
    /// Calling it on an already rebased buffer does nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use circularbuffer::CircularBuffer;
    ///
    /// let mut buf = CircularBuffer::new(10);
    /// buf.write(b"12345678");
    /// buf.read(2);
    /// buf.write(b"9012");
    /// assert_eq!(buf.as_slices(), (&b"34567890"[..], &b"12"[..]));
    ///
    /// assert_eq!(buf.make_contiguous(), b"3456789012");
    /// assert_eq!(buf.as_slices(), (&b"3456789012"[..], &b""[..]));
    /// ```
    pub fn make_contiguous(&mut self) -> &mut [u8] {
        let head = self.head;
        if head != 0 {
            if self.is_contiguous() {
                self.xs.copy_within(head..head + self.len, 0);
            } else {
                self.xs.rotate_left(head);
            }
            debug!("rebased {} bytes from offset {}", self.len, head);
            self.head = 0;
        }
        &mut self.xs[..self.len]
    }

    /// Returns a pair of slices which contain, in order, the contents of the
    /// `CircularBuffer`.
    ///
    /// The second slice is empty unless the content wraps around the end of
    /// the backing store.
    ///
    /// # Examples
    ///
    /// ```
    /// use circularbuffer::CircularBuffer;
    ///
    /// let mut buf = CircularBuffer::new(6);
    /// buf.write(b"abcdef");
    /// buf.read(4);
    /// buf.write(b"gh");
    /// assert_eq!(buf.as_slices(), (&b"ef"[..], &b"gh"[..]));
    /// ```
    #[inline]
    pub fn as_slices(&self) -> (&[u8], &[u8]) {
        if self.is_contiguous() {
            (&self.xs[self.head..self.head + self.len], &[])
        } else {
            let tail = self.tail();
            (&self.xs[self.head..], &self.xs[..tail])
        }
    }

    /// Returns a pair of mutable slices which contain, in order, the contents
    /// of the `CircularBuffer`.
    #[inline]
    pub fn as_mut_slices(&mut self) -> (&mut [u8], &mut [u8]) {
        let head = self.head;
        let len = self.len;
        if self.is_contiguous() {
            let (empty, buf) = self.xs.split_at_mut(0);
            (&mut buf[head..head + len], empty)
        } else {
            let tail = self.tail();
            let (left, right) = self.xs.split_at_mut(head);
            (right, &mut left[..tail])
        }
    }

    /// Returns the first physical segment of the content.
    ///
    /// This is the whole content only while `is_contiguous()` holds; use
    /// `acquire_contiguous_view` when a flat view is needed regardless of the
    /// wrap state.
    #[inline]
    pub fn as_raw_slice(&self) -> &[u8] {
        self.as_slices().0
    }

    /// Returns a front-to-back iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use circularbuffer::CircularBuffer;
    ///
    /// let mut buf = CircularBuffer::new(4);
    /// buf.write(b"abcd");
    /// buf.read(3);
    /// buf.write(b"ef");
    /// let bytes: Vec<u8> = buf.iter().collect();
    /// assert_eq!(bytes, b"def");
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter {
        Iter {
            ring: &self.xs,
            head: self.head,
            remaining: self.len,
        }
    }
}

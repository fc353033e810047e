use std::ops::{Deref, DerefMut};

use log::trace;

use super::CircularBuffer;

/// A flat view of the content of a `CircularBuffer`.
///
/// Created by [`CircularBuffer::acquire_contiguous_view`]. The view borrows
/// the buffer mutably, so the buffer cannot be written, read or resized while
/// the view is alive; dropping the view releases it.
///
/// [`CircularBuffer::acquire_contiguous_view`]: struct.CircularBuffer.html#method.acquire_contiguous_view
pub struct ContiguousView<'a> {
    buffer: &'a mut CircularBuffer,
}

impl CircularBuffer {
    /// Returns a view exposing the content as one slice.
    ///
    /// If the content currently wraps around the end of the backing store,
    /// the buffer is made contiguous first. That rebasing persists after the
    /// view is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use circularbuffer::CircularBuffer;
    ///
    /// let mut buf = CircularBuffer::new(15);
    /// buf.write(b"1234567890");
    /// buf.read(5);
    /// buf.write(b"1234567");
    /// assert!(!buf.is_contiguous());
    ///
    /// {
    ///     let view = buf.acquire_contiguous_view();
    ///     assert_eq!(&view[..], b"678901234567");
    ///     assert!(view.windows(2).any(|w| w == b"01"));
    /// }
    /// assert!(buf.is_contiguous());
    /// ```
    pub fn acquire_contiguous_view(&mut self) -> ContiguousView {
        if !self.is_contiguous() {
            self.make_contiguous();
        }
        trace!("contiguous view acquired over {} bytes", self.len);
        ContiguousView { buffer: self }
    }
}

impl<'a> Deref for ContiguousView<'a> {
    type Target = [u8];

    #[inline]
    fn deref(&self) -> &[u8] {
        let (front, back) = self.buffer.as_slices();
        debug_assert!(back.is_empty());
        front
    }
}

impl<'a> DerefMut for ContiguousView<'a> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [u8] {
        let (front, back) = self.buffer.as_mut_slices();
        debug_assert!(back.is_empty());
        front
    }
}

impl<'a> Drop for ContiguousView<'a> {
    fn drop(&mut self) {
        trace!("contiguous view released");
    }
}

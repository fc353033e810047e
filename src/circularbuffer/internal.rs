use std::cmp;

use super::CircularBuffer;
use crate::utils::*;

impl CircularBuffer {
    /// Physical offset one past the last logical byte.
    #[inline]
    pub(super) fn tail(&self) -> usize {
        tail(self.head, self.len, self.capacity())
    }

    /// Translates a logical index into an offset in the backing store.
    #[inline]
    pub(super) fn physical(&self, index: usize) -> usize {
        debug_assert!(index < self.len,
                      "phy index={} len={} cap={}",
                      index,
                      self.len,
                      self.capacity());
        wrap_add(self.head, index, self.capacity())
    }

    #[inline]
    pub(super) fn byte_at(&self, index: usize) -> u8 {
        self.xs[self.physical(index)]
    }

    #[inline]
    pub(super) fn byte_at_mut(&mut self, index: usize) -> &mut u8 {
        let offset = self.physical(index);
        &mut self.xs[offset]
    }

    /// Copies the logical bytes `[start, start + out.len())` into `out`.
    pub(super) fn copy_out(&self, start: usize, out: &mut [u8]) {
        debug_assert!(start + out.len() <= self.len,
                      "cpy start={} len={} buf={}",
                      start,
                      out.len(),
                      self.len);

        let len = out.len();
        let (front, back) = self.as_slices();
        if start < front.len() {
            let n = cmp::min(len, front.len() - start);
            out[..n].copy_from_slice(&front[start..start + n]);
            out[n..].copy_from_slice(&back[..len - n]);
        } else {
            let start = start - front.len();
            out.copy_from_slice(&back[start..start + len]);
        }
    }

    /// Returns true if `pattern` occurs at logical position `at`.
    #[inline]
    pub(super) fn matches_at(&self, at: usize, pattern: &[u8]) -> bool {
        debug_assert!(at + pattern.len() <= self.len);
        pattern
            .iter()
            .enumerate()
            .all(|(i, &expected)| self.byte_at(at + i) == expected)
    }
}

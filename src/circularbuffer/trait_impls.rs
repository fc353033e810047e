use std::cmp::{self, Ordering};
use std::fmt::{self, Write};
use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut};

use alloc::string::String;
use alloc::vec::Vec;

use super::CircularBuffer;

/// Number of bytes shown by the `Debug` rendering before it is cut short.
const PREVIEW_LEN: usize = 41;

impl CircularBuffer {
    /// Renders the buffer for diagnostics as `<CircularBuffer[len]:preview>`.
    ///
    /// The preview holds at most 41 bytes, each shown as the character with
    /// the same code point; longer content is cut and marked with `..`.
    ///
    /// # Examples
    ///
    /// ```
    /// use circularbuffer::CircularBuffer;
    ///
    /// let mut buf = CircularBuffer::new(70);
    /// assert_eq!(buf.debug_repr(), "<CircularBuffer[0]:>");
    /// buf.write(&[b'b'; 64]);
    /// assert_eq!(buf.debug_repr(), format!("<CircularBuffer[64]:{}..>", "b".repeat(41)));
    /// ```
    pub fn debug_repr(&self) -> String {
        alloc::format!("{:?}", self)
    }
}

impl Clone for CircularBuffer {
    fn clone(&self) -> CircularBuffer {
        CircularBuffer {
            xs: self.xs.clone(),
            head: self.head,
            len: self.len,
        }
    }
}

impl Default for CircularBuffer {
    #[inline]
    fn default() -> CircularBuffer {
        CircularBuffer::new(0)
    }
}

impl PartialEq for CircularBuffer {
    fn eq(&self, other: &CircularBuffer) -> bool {
        if self.len() != other.len() {
            return false;
        }
        let (sa, sb) = self.as_slices();
        let (oa, ob) = other.as_slices();
        if sa.len() == oa.len() {
            sa == oa && sb == ob
        } else if sa.len() < oa.len() {
            // Always divisible in three sections, for example:
            // self:  [a b c|d e f]
            // other: [0 1 2 3|4 5]
            // front = 3, mid = 1,
            // [a b c] == [0 1 2] && [d] == [3] && [e f] == [4 5]
            let front = sa.len();
            let mid = oa.len() - front;

            let (oa_front, oa_mid) = oa.split_at(front);
            let (sb_mid, sb_back) = sb.split_at(mid);
            debug_assert_eq!(sa.len(), oa_front.len());
            debug_assert_eq!(sb_mid.len(), oa_mid.len());
            debug_assert_eq!(sb_back.len(), ob.len());
            sa == oa_front && sb_mid == oa_mid && sb_back == ob
        } else {
            let front = oa.len();
            let mid = sa.len() - front;

            let (sa_front, sa_mid) = sa.split_at(front);
            let (ob_mid, ob_back) = ob.split_at(mid);
            debug_assert_eq!(sa_front.len(), oa.len());
            debug_assert_eq!(sa_mid.len(), ob_mid.len());
            debug_assert_eq!(sb.len(), ob_back.len());
            sa_front == oa && sa_mid == ob_mid && sb == ob_back
        }
    }
}

impl PartialEq<[u8]> for CircularBuffer {
    fn eq(&self, other: &[u8]) -> bool {
        if self.len() != other.len() {
            return false;
        }
        let (front, back) = self.as_slices();
        let (other_front, other_back) = other.split_at(front.len());
        front == other_front && back == other_back
    }
}

impl<'a> PartialEq<&'a [u8]> for CircularBuffer {
    #[inline]
    fn eq(&self, other: &&'a [u8]) -> bool {
        *self == **other
    }
}

impl Eq for CircularBuffer {}

impl PartialOrd for CircularBuffer {
    #[inline]
    fn partial_cmp(&self, other: &CircularBuffer) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CircularBuffer {
    #[inline]
    fn cmp(&self, other: &CircularBuffer) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl Hash for CircularBuffer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        // byte by byte, so the hash does not depend on where the data wraps
        for byte in self {
            state.write_u8(byte);
        }
    }
}

impl Index<usize> for CircularBuffer {
    type Output = u8;

    #[inline]
    fn index(&self, index: usize) -> &u8 {
        let len = self.len();
        if index >= len {
            panic!("index out of bounds: the len is {} but the index is {}",
                   len,
                   index);
        }
        &self.xs[self.physical(index)]
    }
}

impl IndexMut<usize> for CircularBuffer {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut u8 {
        let len = self.len();
        if index >= len {
            panic!("index out of bounds: the len is {} but the index is {}",
                   len,
                   index);
        }
        self.byte_at_mut(index)
    }
}

/// Extend the `CircularBuffer` with an iterator.
///
/// Does not extract more items than there is space for. No error
/// occurs if there are more iterator elements.
impl Extend<u8> for CircularBuffer {
    fn extend<T: IntoIterator<Item = u8>>(&mut self, iter: T) {
        let take = self.write_available();
        for byte in iter.into_iter().take(take) {
            let tail = self.tail();
            self.xs[tail] = byte;
            self.len += 1;
        }
    }
}

impl<'a> Extend<&'a u8> for CircularBuffer {
    fn extend<T: IntoIterator<Item = &'a u8>>(&mut self, iter: T) {
        self.extend(iter.into_iter().cloned());
    }
}

impl From<Vec<u8>> for CircularBuffer {
    /// Adopts the vector's allocation, holding its elements as content.
    ///
    /// The capacity of the buffer is `xs.capacity()`, which depends on how
    /// the vector was allocated and may exceed `xs.len()`. Convert from a
    /// slice when the capacity must equal the length.
    ///
    /// # Examples
    ///
    /// ```
    /// use circularbuffer::CircularBuffer;
    ///
    /// let mut xs = Vec::with_capacity(8);
    /// xs.extend_from_slice(b"OK");
    /// let buf = CircularBuffer::from(xs);
    /// assert!(buf.capacity() >= 8);
    ///
    /// let buf = CircularBuffer::from(&b"OK"[..]);
    /// assert_eq!(buf.capacity(), 2);
    /// ```
    fn from(mut xs: Vec<u8>) -> CircularBuffer {
        let len = xs.len();
        let capacity = cmp::max(xs.capacity(), len);
        xs.resize(capacity, 0);
        CircularBuffer { xs, head: 0, len }
    }
}

impl<'a> From<&'a [u8]> for CircularBuffer {
    /// Copies `bytes` into a full buffer whose capacity is `bytes.len()`.
    fn from(bytes: &'a [u8]) -> CircularBuffer {
        CircularBuffer {
            xs: bytes.to_vec(),
            head: 0,
            len: bytes.len(),
        }
    }
}

/// Writes every byte as the character with the same code point; no text
/// decoding takes place.
impl fmt::Display for CircularBuffer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for byte in self {
            f.write_char(byte as char)?;
        }
        Ok(())
    }
}

impl fmt::Debug for CircularBuffer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<CircularBuffer[{}]:", self.len())?;
        for byte in self.iter().take(PREVIEW_LEN) {
            f.write_char(byte as char)?;
        }
        if self.len() > PREVIEW_LEN {
            f.write_str("..")?;
        }
        f.write_char('>')
    }
}

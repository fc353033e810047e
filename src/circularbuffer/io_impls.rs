//! `std::io` adapters, so a `CircularBuffer` can sit directly between a
//! socket or serial port and a line-oriented parser.

use std::cmp;
use std::io;

use super::CircularBuffer;

/// Short writes follow the truncation policy of [`CircularBuffer::write`]:
/// a full buffer accepts `Ok(0)` bytes, which `write_all` reports as
/// `ErrorKind::WriteZero`.
///
/// [`CircularBuffer::write`]: struct.CircularBuffer.html#method.write
impl io::Write for CircularBuffer {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(CircularBuffer::write(self, buf))
    }

    #[inline]
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Drains bytes from the front of the buffer into the caller's slice.
impl io::Read for CircularBuffer {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let count = cmp::min(buf.len(), self.len);
        self.copy_out(0, &mut buf[..count]);
        CircularBuffer::consume(self, count);
        Ok(count)
    }
}

/// `fill_buf` exposes the first physical segment only; once it is consumed
/// the wrapped remainder follows.
impl io::BufRead for CircularBuffer {
    #[inline]
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        Ok(self.as_slices().0)
    }

    #[inline]
    fn consume(&mut self, amt: usize) {
        CircularBuffer::consume(self, amt);
    }
}

#[cfg(test)]
mod tests {
    use std::io::{BufRead, Read, Write};

    use super::*;

    #[test]
    fn write_all_reports_overflow() {
        let mut buf = CircularBuffer::new(4);
        let err = buf.write_all(b"123456").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::WriteZero);
        assert_eq!(buf, &b"1234"[..]);
    }

    #[test]
    fn read_exact_across_wrap() {
        let mut buf = CircularBuffer::new(6);
        Write::write(&mut buf, b"xxxx01").unwrap();
        CircularBuffer::consume(&mut buf, 4);
        Write::write(&mut buf, b"2345").unwrap();

        let mut out = [0; 5];
        buf.read_exact(&mut out).unwrap();
        assert_eq!(&out, b"01234");
        assert_eq!(Read::read(&mut buf, &mut out).unwrap(), 1);
        assert_eq!(out[0], b'5');
        assert_eq!(Read::read(&mut buf, &mut out).unwrap(), 0);
    }

    #[test]
    fn read_lines_across_wrap() {
        let mut buf = CircularBuffer::new(16);
        buf.write(b"ATZ\r\nOK\r\n");
        buf.read(5);
        buf.write(b"+CSQ: 9\r\n");
        assert!(!buf.is_contiguous());

        let lines: Vec<String> = (&mut buf).lines().map(|line| line.unwrap()).collect();
        assert_eq!(lines, vec!["OK".to_string(), "+CSQ: 9".to_string()]);
        assert!(buf.is_empty());
    }
}

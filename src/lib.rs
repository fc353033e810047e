//! A circular buffer for bytes with fixed capacity.
//!
//! `CircularBuffer` is meant to sit under protocol parsers: bytes arrive
//! incrementally with `write`, recognised frames are located with `find`,
//! `index`, `count` and `starts_with`, and consumed with `read`. The backing
//! store is allocated once and only ever grows on an explicit `resize`.
//!
//! Content may wrap around the end of the backing store. Every search,
//! index and slice operation works on the logical (unwrapped) content, and
//! `acquire_contiguous_view` hands out a single flat slice when an external
//! matcher needs one.
//!
//! # Feature Flags
//! The **circularbuffer** crate has the following cargo feature flags:
//!
//! - `std`
//!   - Optional, enabled by default
//!   - Use libstd; adds `std::io::{Read, BufRead, Write}` implementations
//!     and `std::error::Error` for the error type
//!
//! Without `std` the crate only needs `alloc`.
//!
//! # Usage
//!
//! First, add the following to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! circularbuffer = "0.1"
//! ```
//!
//! # Capacity
//!
//! Writes never fail: whatever does not fit into `write_available()` is
//! dropped and the number of bytes actually written is returned. `resize`
//! only grows the buffer; asking for less than the current capacity is a
//! no-op.
//!
//! # Examples
//! ```
//! use circularbuffer::CircularBuffer;
//!
//! let mut buf = CircularBuffer::new(15);
//! assert_eq!(buf.write(b"1234567890"), 10);
//! assert_eq!(buf.read(5), b"12345");
//! assert_eq!(buf.write(b"1234567"), 7);
//!
//! // the content now wraps around the end of the backing store
//! assert_eq!(buf.to_string(), "678901234567");
//! assert_eq!(buf.find(b"01", 0), Ok(Some(4)));
//! ```
//!
//! # Framing
//! ```
//! use circularbuffer::CircularBuffer;
//!
//! let mut buf = CircularBuffer::new(64);
//! buf.write(b"\r\nOK\r\n\r\n+CSQ: 21,99\r\n");
//!
//! let mut frames = Vec::new();
//! while let Ok(Some(end)) = buf.find(b"\r\n", 2) {
//!     let frame = buf.read(end + 2);
//!     frames.push(frame[2..end].to_vec());
//! }
//! assert_eq!(frames, vec![b"OK".to_vec(), b"+CSQ: 21,99".to_vec()]);
//! ```
//!
//! # Contiguous view
//! ```
//! use circularbuffer::CircularBuffer;
//!
//! let mut buf = CircularBuffer::new(8);
//! buf.write(b"xxxxxx\r\n");
//! buf.read(6);
//! buf.write(b"OK\r\n");
//!
//! let view = buf.acquire_contiguous_view();
//! assert_eq!(&view[..], b"\r\nOK\r\n");
//! ```

#![cfg_attr(not(any(feature="std", test)), no_std)]

#![deny(missing_docs)]

extern crate alloc;
#[cfg(not(any(feature="std", test)))]
extern crate core as std;

mod circularbuffer;
mod utils;
pub mod error;

pub use crate::circularbuffer::{CircularBuffer, ContiguousView, Iter, RangeArgument};
pub use crate::error::{Error, ErrorKind};

// Copyright 2026 The wirebuf authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![deny(missing_docs)]

//! # wirebuf
//!
//! Binary buffer cursors for constructing and parsing little-endian wire-format messages.
//!
//! `wirebuf` provides a pair of independent cursors over contiguous byte regions:
//! [`WriteBuffer`] encodes fixed-width integers, raw byte spans, and strings while
//! [`ReadBuffer`] decodes them with the identical widths and endianness. The pair is the
//! typical substrate for building and parsing protocol frames.
//!
//! ## Features
//!
//! - **Deferred writes** - reserve space for a value that is not known yet (a length
//!   prefix, a checksum), keep writing, and patch the reservation in place later through
//!   a typed handle
//! - **Cursor repositioning** - capture positions and seek back to overwrite
//!   placeholders without disturbing the rest of the buffer
//! - **Growable or wrapped storage** - buffers either own a region that grows on demand
//!   or borrow caller-owned memory with a hard bound
//! - **Sticky errors** - the first failure disables a buffer and is checked once per
//!   batch instead of after every call
//! - **Stream plumbing** - flush produced bytes to any [`std::io::Write`], fill a reader
//!   from any [`std::io::Read`]
//!
//! ## Quick Start
//!
//! ```rust
//! use wirebuf::{ReadBuffer, WriteBuffer};
//!
//! // Build a length-prefixed frame; the length is patched in after the payload.
//! let mut writer = WriteBuffer::with_capacity(128);
//! let frame_len = writer.defer::<u16>();
//! writer.write_str("Hello NYC");
//! writer.write(0xBEEF_DEADu32);
//! frame_len.update(&mut writer, 9);
//! assert!(writer.err().is_none());
//!
//! // Decode it back.
//! let mut reader = ReadBuffer::wrap(writer.bytes());
//! let len = reader.read::<u16>();
//! assert_eq!(reader.read_str(len as usize), "Hello NYC");
//! assert_eq!(reader.read::<u32>(), 0xBEEF_DEAD);
//! assert!(reader.err().is_none());
//! ```
//!
//! ## Streaming
//!
//! ```rust
//! use wirebuf::{ReadBuffer, WriteBuffer};
//!
//! let mut writer = WriteBuffer::with_capacity(64);
//! writer.write(0x0123_4567_89AB_CDEFu64);
//! writer.write_str("the small brown fix");
//!
//! let mut wire = Vec::new();
//! let flushed = writer.flush_to(&mut wire)?;
//!
//! let mut reader = ReadBuffer::with_capacity(64);
//! reader.fill_from(&mut wire.as_slice(), flushed)?;
//! assert_eq!(reader.read::<u64>(), 0x0123_4567_89AB_CDEF);
//! assert_eq!(reader.read_str(19), "the small brown fix");
//! # Ok::<(), wirebuf::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`io`] - the [`io::WireIO`] trait and bounds-checked little-endian primitives that
//!   both cursors are built on
//! - [`WriteBuffer`], [`Deferred`], [`DeferredBytes`], [`Pos`] - the builder side
//! - [`ReadBuffer`] - the consuming side
//! - [`Error`] and [`Result`] - error handling
//! - [`prelude`] - convenient re-exports
//!
//! ## Error Handling
//!
//! Primitive operations never return errors at the call site. The first failure is
//! recorded in the buffer and every later operation becomes a no-op: writes are
//! discarded, reads yield zero-valued or empty results, and the cursor freezes. Callers
//! issue a chain of operations and check `err()` once at the end:
//!
//! ```rust
//! use wirebuf::{Error, ReadBuffer};
//!
//! let mut reader = ReadBuffer::wrap(&[0x01]);
//! let a = reader.read::<u32>(); // faults: only one byte available
//! let b = reader.read::<u16>(); // no-op
//! assert_eq!((a, b), (0, 0));
//! assert!(matches!(reader.err(), Some(Error::OutOfBounds)));
//! ```
//!
//! `seek`, `fill_from`, and `flush_to` are the exception: they represent discrete
//! attempts and return their error directly as well as recording it.
//!
//! ## Concurrency
//!
//! Buffers are single-owner, single-thread values with no internal locking. Only
//! `fill_from`/`flush_to` block, with the semantics of the supplied stream.

pub(crate) mod error;

pub mod io;
pub mod prelude;

mod read;
mod write;

/// `wirebuf` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always
/// [`Error`]. This is used consistently throughout the crate for all fallible operations.
///
/// # Examples
///
/// ```rust
/// use wirebuf::{ReadBuffer, Result};
///
/// fn read_frame(wire: &[u8]) -> Result<u64> {
///     let mut reader = ReadBuffer::with_capacity(wire.len());
///     reader.fill_from(&mut &wire[..], wire.len())?;
///     Ok(reader.read::<u64>())
/// }
/// # assert!(read_frame(&[0u8; 8]).is_ok());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// `wirebuf` Error type
///
/// The main error type for all operations in this crate. See [`error::Error`] for the
/// full taxonomy: capacity violations, deferred update mismatches, seek range errors,
/// stream exhaustion, and I/O failures.
pub use error::Error;

/// The consuming cursor: decodes little-endian primitives, byte spans, and strings from
/// a wrapped slice or stream-filled storage.
pub use read::ReadBuffer;

/// The building cursor and its companions: deferred-write handles and opaque cursor
/// positions.
pub use write::{Deferred, DeferredBytes, Pos, WriteBuffer};

//! # wirebuf Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the wirebuf library. Import this module to get quick access to both buffer
//! cursors and their companions.
//!
//! # Usage
//!
//! ```rust
//! use wirebuf::prelude::*;
//!
//! let mut writer = WriteBuffer::with_capacity(16);
//! writer.write(0xDEADu16);
//!
//! let mut reader = ReadBuffer::wrap(writer.bytes());
//! assert_eq!(reader.read::<u16>(), 0xDEAD);
//! ```

/// The main error type for all wirebuf operations
pub use crate::Error;

/// The result type used throughout wirebuf
pub use crate::Result;

/// The building cursor for wire-format messages
pub use crate::WriteBuffer;

/// The consuming cursor for wire-format messages
pub use crate::ReadBuffer;

/// Deferred-write handles and opaque cursor positions
pub use crate::{Deferred, DeferredBytes, Pos};

/// The trait tying primitive types to their wire representation
pub use crate::io::WireIO;

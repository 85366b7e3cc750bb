//! Byte-order aware reading of WKB streams.
//!
//! A WKB stream repeats its byte-order marker in front of every geometry, including each
//! member of a collection. The [`ValueReader`] therefore carries a byte order that can be
//! switched while reading: [`ValueReader::read_byte_order`] consumes a marker and applies it
//! to every multi-byte read that follows, until the next marker.
//!
//! # Examples
//!
//! ```rust
//! use geowkx_core::io::{ByteOrder, ValueReader, ValueReaderSlice};
//!
//! let data = [0x00, 0x00, 0x00, 0x00, 0x02];
//! let mut reader = ValueReaderSlice::new(&data);
//! assert_eq!(reader.read_byte_order().unwrap(), ByteOrder::BigEndian);
//! assert_eq!(reader.read_u32().unwrap(), 2);
//! ```

mod byte_order;
mod value_reader;
mod value_reader_slice;

pub use byte_order::*;
pub use value_reader::*;
pub use value_reader_slice::*;

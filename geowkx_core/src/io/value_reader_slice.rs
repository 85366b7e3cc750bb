//! This module provides the `ValueReaderSlice` struct for reading WKB values from a byte slice.
//!
//! # Examples
//!
//! ```rust
//! use geowkx_core::io::{ValueReader, ValueReaderSlice};
//! use geowkx_core::Result;
//!
//! fn main() -> Result<()> {
//!     let data = &[0x01, 0x00, 0x00, 0x00];
//!
//!     let mut reader_le = ValueReaderSlice::new_le(data);
//!     assert_eq!(reader_le.read_u32()?, 1);
//!
//!     let mut reader_be = ValueReaderSlice::new_be(data);
//!     assert_eq!(reader_be.read_u32()?, 0x0100_0000);
//!
//!     Ok(())
//! }
//! ```

use super::{ByteOrder, SeekRead, ValueReader};
use std::io::Cursor;

/// Reads WKB values from a borrowed byte slice.
pub struct ValueReaderSlice<'a> {
	cursor: Cursor<&'a [u8]>,
	byte_order: ByteOrder,
	len: u64,
}

impl<'a> ValueReaderSlice<'a> {
	/// Creates a reader positioned at the start of `slice`.
	///
	/// The byte order defaults to little-endian until a marker is read.
	#[must_use]
	pub fn new(slice: &'a [u8]) -> ValueReaderSlice<'a> {
		ValueReaderSlice {
			len: slice.len() as u64,
			cursor: Cursor::new(slice),
			byte_order: ByteOrder::default(),
		}
	}

	/// Creates a reader with little-endian byte order.
	#[must_use]
	pub fn new_le(slice: &'a [u8]) -> ValueReaderSlice<'a> {
		ValueReaderSlice::new(slice)
	}

	/// Creates a reader with big-endian byte order.
	#[must_use]
	pub fn new_be(slice: &'a [u8]) -> ValueReaderSlice<'a> {
		let mut reader = ValueReaderSlice::new(slice);
		reader.byte_order = ByteOrder::BigEndian;
		reader
	}
}

impl SeekRead for Cursor<&[u8]> {}

impl ValueReader for ValueReaderSlice<'_> {
	fn get_reader(&mut self) -> &mut dyn SeekRead {
		&mut self.cursor
	}

	fn len(&self) -> u64 {
		self.len
	}

	fn position(&mut self) -> u64 {
		self.cursor.position()
	}

	fn byte_order(&self) -> ByteOrder {
		self.byte_order
	}

	fn set_byte_order(&mut self, byte_order: ByteOrder) {
		self.byte_order = byte_order;
	}
}

// This module defines the `ValueReader` trait for reading WKB values with a switchable byte order.
//
// # Overview
//
// Every read of a multi-byte value goes through the byte order currently held by the reader.
// The order starts as little-endian and is replaced whenever a marker byte is consumed with
// `read_byte_order`. Reading past the end of the data fails with `WkxError::MalformedEncoding`.
//
// Counts announced by the stream are read with `read_count`, which refuses counts that cannot
// possibly fit into the remaining bytes. Callers can therefore size their vectors from the count
// without trusting the stream.

use super::ByteOrder;
use crate::{Result, WkxError};
use byteorder::{BigEndian, LittleEndian, ReadBytesExt};
use std::io::{Read, Seek};

/// A simple alias for types implementing both `Seek` and `Read`, used for convenience.
pub trait SeekRead: Seek + Read {}

/// A trait for reading WKB values with a byte order that is resolved at runtime.
pub trait ValueReader {
	/// Returns the underlying reader to access raw bytes.
	fn get_reader(&mut self) -> &mut dyn SeekRead;

	/// Returns the total length of the readable data.
	fn len(&self) -> u64;

	/// Returns the current position within the readable data.
	fn position(&mut self) -> u64;

	/// Returns the byte order applied to multi-byte reads.
	fn byte_order(&self) -> ByteOrder;

	/// Replaces the byte order applied to multi-byte reads.
	fn set_byte_order(&mut self, byte_order: ByteOrder);

	/// Checks if there is no data to read.
	fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Returns the number of bytes remaining to be read.
	fn remaining(&mut self) -> u64 {
		self.len().saturating_sub(self.position())
	}

	/// Checks if there are any bytes remaining to be read.
	fn has_remaining(&mut self) -> bool {
		self.remaining() > 0
	}

	/// Reads a byte-order marker and applies it to all following reads.
	///
	/// # Errors
	/// Returns `InvalidByteOrder` if the marker is neither `0` nor `1`, or
	/// `MalformedEncoding` if no byte is left.
	fn read_byte_order(&mut self) -> Result<ByteOrder> {
		let marker = self.read_u8()?;
		let byte_order = ByteOrder::try_from(marker)?;
		self.set_byte_order(byte_order);
		Ok(byte_order)
	}

	/// Reads an unsigned 8-bit integer.
	fn read_u8(&mut self) -> Result<u8> {
		Ok(self.get_reader().read_u8()?)
	}

	/// Reads an unsigned 32-bit integer in the current byte order.
	fn read_u32(&mut self) -> Result<u32> {
		Ok(match self.byte_order() {
			ByteOrder::BigEndian => self.get_reader().read_u32::<BigEndian>()?,
			ByteOrder::LittleEndian => self.get_reader().read_u32::<LittleEndian>()?,
		})
	}

	/// Reads an unsigned 64-bit integer in the current byte order.
	fn read_u64(&mut self) -> Result<u64> {
		Ok(match self.byte_order() {
			ByteOrder::BigEndian => self.get_reader().read_u64::<BigEndian>()?,
			ByteOrder::LittleEndian => self.get_reader().read_u64::<LittleEndian>()?,
		})
	}

	/// Reads a 64-bit floating point number in the current byte order.
	fn read_f64(&mut self) -> Result<f64> {
		Ok(match self.byte_order() {
			ByteOrder::BigEndian => self.get_reader().read_f64::<BigEndian>()?,
			ByteOrder::LittleEndian => self.get_reader().read_f64::<LittleEndian>()?,
		})
	}

	/// Reads two consecutive 64-bit floating point numbers, in stream order.
	fn read_f64_pair(&mut self) -> Result<(f64, f64)> {
		let first = self.read_f64()?;
		let second = self.read_f64()?;
		Ok((first, second))
	}

	/// Reads a 32-bit element count.
	///
	/// `min_item_size` is the smallest number of bytes a single element can occupy. A count whose
	/// elements could not fit into the remaining bytes is rejected before anything is allocated.
	///
	/// # Errors
	/// Returns `MalformedEncoding` if the count overruns the buffer.
	fn read_count(&mut self, min_item_size: u64) -> Result<usize> {
		let count = self.read_u32()?;
		let remaining = self.remaining();
		let needed = u64::from(count) * min_item_size;
		if needed > remaining {
			log::debug!("rejecting element count {count} with {remaining} bytes left");
			return Err(WkxError::MalformedEncoding(format!(
				"declared {count} elements need at least {needed} bytes, but only {remaining} remain"
			)));
		}
		Ok(count as usize)
	}
}

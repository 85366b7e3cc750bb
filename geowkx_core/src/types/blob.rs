//! This module provides the [`Blob`] struct, an owned byte buffer holding one encoded geometry.
//!
//! Databases usually hand geometry columns over as hexadecimal text, so a [`Blob`] is most often
//! created with [`Blob::from_hex`].
//!
//! # Examples
//!
//! ```rust
//! use geowkx_core::Blob;
//!
//! let blob = Blob::from_hex("0101ff").unwrap();
//! assert_eq!(blob.as_slice(), &[0x01, 0x01, 0xff]);
//! assert_eq!(blob.as_hex(), "0101ff");
//! ```

use crate::{Result, WkxError};
use std::fmt::Debug;

/// A simple wrapper around [`Vec<u8>`].
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Blob(Vec<u8>);

impl Blob {
	/// Decodes hexadecimal text, upper or lower case, two digits per byte.
	///
	/// # Errors
	/// Returns `MalformedEncoding` for an odd number of digits or a non-hex character.
	///
	/// # Examples
	///
	/// ```rust
	/// use geowkx_core::Blob;
	///
	/// assert_eq!(Blob::from_hex("DEadBE").unwrap().as_slice(), &[0xde, 0xad, 0xbe]);
	/// assert!(Blob::from_hex("abc").is_err());
	/// assert!(Blob::from_hex("zz").is_err());
	/// ```
	pub fn from_hex(hex: &str) -> Result<Blob> {
		Blob::from_hex_bytes(hex.as_bytes())
	}

	/// Decodes hexadecimal text given as ASCII bytes.
	///
	/// # Errors
	/// Returns `MalformedEncoding` for an odd number of digits or a non-hex byte.
	pub fn from_hex_bytes(hex: &[u8]) -> Result<Blob> {
		if hex.len() % 2 != 0 {
			return Err(WkxError::MalformedEncoding(format!(
				"hex text has odd length {}",
				hex.len()
			)));
		}

		hex
			.chunks_exact(2)
			.enumerate()
			.map(|(i, pair)| -> Result<u8> { Ok((nibble(pair[0], i * 2)? << 4) | nibble(pair[1], i * 2 + 1)?) })
			.collect::<Result<Vec<u8>>>()
			.map(Blob)
	}

	/// Returns a reference to the underlying byte slice.
	#[must_use]
	pub fn as_slice(&self) -> &[u8] {
		self.0.as_ref()
	}

	/// Returns the bytes as lowercase hexadecimal text without separators.
	#[must_use]
	pub fn as_hex(&self) -> String {
		self.0.iter().map(|byte| format!("{byte:02x}")).collect()
	}

	/// Returns the length of the underlying byte slice.
	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Checks if the blob is empty.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

fn nibble(digit: u8, offset: usize) -> Result<u8> {
	match digit {
		b'0'..=b'9' => Ok(digit - b'0'),
		b'a'..=b'f' => Ok(digit - b'a' + 10),
		b'A'..=b'F' => Ok(digit - b'A' + 10),
		_ => Err(WkxError::MalformedEncoding(format!(
			"invalid hex character {:?} at offset {offset}",
			char::from(digit)
		))),
	}
}

impl From<Vec<u8>> for Blob {
	fn from(item: Vec<u8>) -> Self {
		Blob(item)
	}
}

impl From<&[u8]> for Blob {
	fn from(item: &[u8]) -> Self {
		Blob(item.to_vec())
	}
}

impl Debug for Blob {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "Blob({}): {}", self.len(), self.as_hex())
	}
}

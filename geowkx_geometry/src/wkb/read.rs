use super::WkbType;
use geowkx_core::{
	Blob, Result, SqlValue, WkxError,
	io::{ValueReader, ValueReaderSlice},
};
use log::{debug, trace};

/// Decoding of one shape from WKB.
///
/// Decoding is a pure function of the input: the value is only constructed once every field has
/// been read, so a failed decode never leaves a half-filled geometry behind.
///
/// Implementors provide the header check and the body; the entry points (`from_wkb`,
/// `from_wkb_hex`, `from_sql_value`) are shared.
pub trait FromWkb: Sized + Default {
	/// The tag this shape expects in its header.
	const WKB_TYPE: WkbType;

	/// Reads and checks the type header that follows the byte-order marker.
	///
	/// The default reads an 8-byte tag that must equal [`Self::WKB_TYPE`] exactly.
	///
	/// # Errors
	/// Returns `TypeMismatch` if the tag belongs to another shape.
	fn read_wkb_type(reader: &mut dyn ValueReader) -> Result<()> {
		let tag = reader.read_u64()?;
		expect_wkb_type(Self::WKB_TYPE, tag)
	}

	/// Reads the body that follows the type header.
	fn read_wkb_body(reader: &mut dyn ValueReader) -> Result<Self>;

	/// Reads a complete geometry: byte-order marker, type header and body.
	fn read_wkb(reader: &mut dyn ValueReader) -> Result<Self> {
		let byte_order = reader.read_byte_order()?;
		Self::read_wkb_type(reader)?;
		trace!("reading {:?} body ({byte_order})", Self::WKB_TYPE);
		Self::read_wkb_body(reader)
	}

	/// Decodes raw WKB bytes.
	///
	/// Bytes left over after a complete geometry are ignored.
	fn from_wkb(bytes: &[u8]) -> Result<Self> {
		let mut reader = ValueReaderSlice::new(bytes);
		let geometry = Self::read_wkb(&mut reader)?;
		let remaining = reader.remaining();
		if remaining > 0 {
			debug!("ignoring {remaining} trailing bytes after {:?}", Self::WKB_TYPE);
		}
		Ok(geometry)
	}

	/// Decodes WKB given as hexadecimal text, the way PostGIS returns geometry columns.
	fn from_wkb_hex(hex: &str) -> Result<Self> {
		Self::from_wkb(Blob::from_hex(hex)?.as_slice())
	}

	/// Decodes the value a database driver returned for a geometry column.
	///
	/// A null value yields the zero value of the shape (an empty sequence, or the origin for a
	/// point) without error.
	///
	/// # Errors
	/// Returns `UnsupportedInputKind` for values that are neither null, text nor bytes, and any
	/// decoding error of the carried WKB.
	fn from_sql_value(value: &SqlValue) -> Result<Self> {
		match value.to_wkb_blob()? {
			Some(blob) => Self::from_wkb(blob.as_slice()),
			None => Ok(Self::default()),
		}
	}
}

/// Fails with `TypeMismatch` unless `tag` is the tag of `expected`.
pub(crate) fn expect_wkb_type(expected: WkbType, tag: u64) -> Result<()> {
	if tag == expected.as_u64() {
		Ok(())
	} else {
		Err(WkxError::TypeMismatch {
			expected: expected.as_u64(),
			found: tag,
		})
	}
}

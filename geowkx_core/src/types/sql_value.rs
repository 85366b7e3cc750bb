//! Values exchanged with a database driver for a geometry column.
//!
//! The decode direction receives one of these from the driver; only [`SqlValue::Null`],
//! [`SqlValue::Text`] and [`SqlValue::Bytes`] can carry a geometry. The encode direction always
//! produces [`SqlValue::Text`] holding SRID-annotated WKT.

use crate::{Blob, Result, WkxError};

#[derive(Clone, Debug, PartialEq)]
pub enum SqlValue {
	Null,
	Bool(bool),
	Int(i64),
	Float(f64),
	Text(String),
	Bytes(Vec<u8>),
}

impl SqlValue {
	/// Short name of the value kind, used in error messages.
	#[must_use]
	pub fn kind(&self) -> &'static str {
		match self {
			SqlValue::Null => "null",
			SqlValue::Bool(_) => "bool",
			SqlValue::Int(_) => "int",
			SqlValue::Float(_) => "float",
			SqlValue::Text(_) => "text",
			SqlValue::Bytes(_) => "bytes",
		}
	}

	/// Returns the encoded geometry carried by this value, or `None` if the value is null.
	///
	/// Text and bytes are both read as the hexadecimal text a driver returns for a geometry
	/// column.
	///
	/// # Errors
	/// Returns `UnsupportedInputKind` for kinds that cannot carry a geometry and
	/// `MalformedEncoding` if the hex text is invalid.
	pub fn to_wkb_blob(&self) -> Result<Option<Blob>> {
		match self {
			SqlValue::Null => Ok(None),
			SqlValue::Text(text) => Blob::from_hex(text).map(Some),
			SqlValue::Bytes(bytes) => Blob::from_hex_bytes(bytes).map(Some),
			other => Err(WkxError::UnsupportedInputKind(other.kind())),
		}
	}
}

impl From<String> for SqlValue {
	fn from(value: String) -> Self {
		SqlValue::Text(value)
	}
}

impl From<&str> for SqlValue {
	fn from(value: &str) -> Self {
		SqlValue::Text(value.to_string())
	}
}

impl From<Vec<u8>> for SqlValue {
	fn from(value: Vec<u8>) -> Self {
		SqlValue::Bytes(value)
	}
}

impl<T> From<Option<T>> for SqlValue
where
	SqlValue: From<T>,
{
	fn from(value: Option<T>) -> Self {
		value.map_or(SqlValue::Null, SqlValue::from)
	}
}

//! Error kinds raised while turning encoded geometry bytes into typed values.
//!
//! Encoding to text never fails, so every variant here belongs to the decode direction.

use thiserror::Error;

/// Shorthand used throughout the workspace.
pub type Result<T, E = WkxError> = std::result::Result<T, E>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum WkxError {
	/// The byte-order marker was neither `0` (big-endian) nor `1` (little-endian).
	///
	/// `element` is the index of the collection member whose marker was rejected,
	/// or `None` for the outermost geometry.
	#[error("invalid byte order {marker}{}", fmt_element(.element))]
	InvalidByteOrder { marker: u8, element: Option<u32> },

	/// The type tag does not belong to the shape being decoded.
	#[error("invalid geometry type: expected {expected}, found {found}")]
	TypeMismatch { expected: u64, found: u64 },

	/// A collection member carries a tag other than Point, LineString or Polygon.
	#[error("unsupported geometry type in collection: {tag} (element {element})")]
	UnsupportedElementType { tag: u64, element: u32 },

	/// The input is not valid hex, or ended before a declared count was satisfied.
	#[error("malformed encoding: {0}")]
	MalformedEncoding(String),

	/// The value handed over is neither absent, text nor bytes.
	#[error("cannot decode a geometry from a value of kind {0}")]
	UnsupportedInputKind(&'static str),
}

impl WkxError {
	/// Attaches the collection member index to an `InvalidByteOrder` error.
	///
	/// Other variants are returned unchanged.
	#[must_use]
	pub fn in_element(self, index: u32) -> Self {
		match self {
			WkxError::InvalidByteOrder { marker, element: None } => WkxError::InvalidByteOrder {
				marker,
				element: Some(index),
			},
			other => other,
		}
	}
}

#[allow(clippy::ref_option, clippy::trivially_copy_pass_by_ref)]
fn fmt_element(element: &Option<u32>) -> String {
	match element {
		Some(index) => format!(" for geometry {index}"),
		None => String::new(),
	}
}

impl From<std::io::Error> for WkxError {
	fn from(error: std::io::Error) -> Self {
		match error.kind() {
			std::io::ErrorKind::UnexpectedEof => WkxError::MalformedEncoding("unexpected end of buffer".to_string()),
			_ => WkxError::MalformedEncoding(error.to_string()),
		}
	}
}

use crate::WkxError;
use std::fmt::Display;

/// Layout of multi-byte values, as announced by the marker byte in front of each geometry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ByteOrder {
	/// Marker `0` (XDR).
	BigEndian,
	/// Marker `1` (NDR), the layout PostGIS emits.
	#[default]
	LittleEndian,
}

impl ByteOrder {
	/// The marker byte announcing this order.
	#[must_use]
	pub fn as_marker(&self) -> u8 {
		match self {
			ByteOrder::BigEndian => 0,
			ByteOrder::LittleEndian => 1,
		}
	}
}

impl TryFrom<u8> for ByteOrder {
	type Error = WkxError;

	fn try_from(marker: u8) -> Result<Self, Self::Error> {
		match marker {
			0 => Ok(ByteOrder::BigEndian),
			1 => Ok(ByteOrder::LittleEndian),
			_ => Err(WkxError::InvalidByteOrder { marker, element: None }),
		}
	}
}

impl Display for ByteOrder {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(match self {
			ByteOrder::BigEndian => "big-endian",
			ByteOrder::LittleEndian => "little-endian",
		})
	}
}

use crate::Geometry;

/// Flag in a 32-bit EWKB type header announcing an embedded SRID.
pub const EWKB_SRID_FLAG: u32 = 0x2000_0000;

/// Mask selecting the base type of a 32-bit EWKB type header.
pub const EWKB_TYPE_MASK: u32 = 0x1FFF_FFFF;

/// Type tags of the supported shapes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WkbType {
	Point = 1,
	LineString = 2,
	Polygon = 3,
	GeometryCollection = 7,
}

impl WkbType {
	pub fn as_u64(&self) -> u64 {
		*self as u64
	}

	pub fn as_u32(&self) -> u32 {
		*self as u32
	}

	/// Resolves a tag read from the stream; `None` for every unsupported shape.
	pub fn from_tag(tag: u64) -> Option<WkbType> {
		match tag {
			1 => Some(WkbType::Point),
			2 => Some(WkbType::LineString),
			3 => Some(WkbType::Polygon),
			7 => Some(WkbType::GeometryCollection),
			_ => None,
		}
	}
}

impl From<&Geometry> for WkbType {
	fn from(geometry: &Geometry) -> Self {
		match geometry {
			Geometry::Point(_) => WkbType::Point,
			Geometry::LineString(_) => WkbType::LineString,
			Geometry::Polygon(_) => WkbType::Polygon,
		}
	}
}

impl Geometry {
	/// The tag this member carries inside an encoded collection.
	#[must_use]
	pub fn wkb_type(&self) -> WkbType {
		WkbType::from(self)
	}
}

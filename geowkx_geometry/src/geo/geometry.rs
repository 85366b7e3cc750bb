use super::*;
use std::fmt::Debug;

/// A member of a [`GeometryCollection`].
///
/// The set of shapes is closed: a collection can never contain another collection.
///
/// In JSON a member appears as its bare shape, without a variant tag.
#[derive(Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(untagged))]
pub enum Geometry {
	Point(PointGeometry),
	LineString(LineStringGeometry),
	Polygon(PolygonGeometry),
}

impl Geometry {
	pub fn new_point<T: Copy + Into<f64>>(value: [T; 2]) -> Self {
		Self::Point(PointGeometry::from(value))
	}
	pub fn new_line_string<T: Copy + Into<f64>>(value: Vec<[T; 2]>) -> Self {
		Self::LineString(LineStringGeometry::from(value))
	}
	pub fn new_polygon<T: Copy + Into<f64>>(value: Vec<Vec<[T; 2]>>) -> Self {
		Self::Polygon(PolygonGeometry::from(value))
	}

	/// The shape name, as used in error and log messages.
	#[must_use]
	pub fn type_name(&self) -> &'static str {
		match self {
			Geometry::Point(_) => "Point",
			Geometry::LineString(_) => "LineString",
			Geometry::Polygon(_) => "Polygon",
		}
	}

	#[must_use]
	pub fn as_point(&self) -> Option<&PointGeometry> {
		match self {
			Geometry::Point(g) => Some(g),
			_ => None,
		}
	}
	#[must_use]
	pub fn as_line_string(&self) -> Option<&LineStringGeometry> {
		match self {
			Geometry::LineString(g) => Some(g),
			_ => None,
		}
	}
	#[must_use]
	pub fn as_polygon(&self) -> Option<&PolygonGeometry> {
		match self {
			Geometry::Polygon(g) => Some(g),
			_ => None,
		}
	}
}

impl Debug for Geometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let inner: &dyn Debug = match self {
			Geometry::Point(g) => g,
			Geometry::LineString(g) => g,
			Geometry::Polygon(g) => g,
		};
		f.debug_tuple(self.type_name()).field(inner).finish()
	}
}

impl From<PointGeometry> for Geometry {
	fn from(geometry: PointGeometry) -> Self {
		Geometry::Point(geometry)
	}
}

impl From<LineStringGeometry> for Geometry {
	fn from(geometry: LineStringGeometry) -> Self {
		Geometry::LineString(geometry)
	}
}

impl From<PolygonGeometry> for Geometry {
	fn from(geometry: PolygonGeometry) -> Self {
		Geometry::Polygon(geometry)
	}
}

impl From<Geometry> for geo_types::Geometry<f64> {
	fn from(geometry: Geometry) -> Self {
		match geometry {
			Geometry::Point(g) => geo_types::Geometry::Point(g.into()),
			Geometry::LineString(g) => geo_types::Geometry::LineString(g.into()),
			Geometry::Polygon(g) => geo_types::Geometry::Polygon(g.into()),
		}
	}
}

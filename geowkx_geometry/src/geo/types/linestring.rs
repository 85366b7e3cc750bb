use super::Coordinates;
use std::fmt::Debug;

/// An ordered path of coordinates, stored in PostGIS as `geometry(LineString,4326)`.
///
/// Zero or one coordinates are representable; no minimum length is enforced.
#[derive(Clone, Default, PartialEq)]
#[cfg_attr(
	feature = "serde",
	derive(serde::Serialize, serde::Deserialize),
	serde(from = "LineStringFields", into = "LineStringFields")
)]
pub struct LineStringGeometry(pub Vec<Coordinates>);

impl Debug for LineStringGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_composite_geometry!(LineStringGeometry, Coordinates);

/// JSON form: `{"points": [...]}`.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct LineStringFields {
	points: Vec<Coordinates>,
}

#[cfg(feature = "serde")]
impl From<LineStringFields> for LineStringGeometry {
	fn from(fields: LineStringFields) -> Self {
		LineStringGeometry(fields.points)
	}
}

#[cfg(feature = "serde")]
impl From<LineStringGeometry> for LineStringFields {
	fn from(line: LineStringGeometry) -> Self {
		LineStringFields { points: line.0 }
	}
}

impl From<geo_types::LineString<f64>> for LineStringGeometry {
	fn from(line: geo_types::LineString<f64>) -> Self {
		line.0.into_iter().map(Coordinates::from).collect()
	}
}

impl From<LineStringGeometry> for geo_types::LineString<f64> {
	fn from(line: LineStringGeometry) -> Self {
		geo_types::LineString(line.0.into_iter().map(geo_types::Coord::from).collect())
	}
}

use super::Coordinates;
use std::fmt::Debug;

/// A single location, stored in PostGIS as `geometry(Point,4326)`.
///
/// Created by literal construction or by decoding WKB; a decoded point never changes.
#[derive(Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
pub struct PointGeometry(pub Coordinates);

impl PointGeometry {
	/// Constructs a point from longitude and latitude.
	#[must_use]
	pub fn new(lng: f64, lat: f64) -> Self {
		Self(Coordinates::new(lng, lat))
	}
	/// Returns the longitude (x).
	#[must_use]
	pub fn lng(&self) -> f64 {
		self.0.lng
	}
	/// Returns the latitude (y).
	#[must_use]
	pub fn lat(&self) -> f64 {
		self.0.lat
	}
	/// Returns a reference to the underlying `Coordinates`.
	#[must_use]
	pub fn as_coord(&self) -> &Coordinates {
		&self.0
	}
}

impl Debug for PointGeometry {
	/// Formats the point as `[lng, lat]` for readability.
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}

impl From<Coordinates> for PointGeometry {
	fn from(value: Coordinates) -> Self {
		Self(value)
	}
}

impl<T> From<[T; 2]> for PointGeometry
where
	T: Copy + Into<f64>,
{
	fn from(value: [T; 2]) -> Self {
		Self(Coordinates::from(value))
	}
}

impl<'a, T> From<&'a [T; 2]> for PointGeometry
where
	T: Copy + Into<f64>,
{
	fn from(value: &'a [T; 2]) -> Self {
		Self(Coordinates::from(value))
	}
}

impl From<(f64, f64)> for PointGeometry {
	fn from(value: (f64, f64)) -> Self {
		Self(Coordinates::from(value))
	}
}

impl From<geo_types::Point<f64>> for PointGeometry {
	fn from(point: geo_types::Point<f64>) -> Self {
		Self(Coordinates::from(point.0))
	}
}

impl From<PointGeometry> for geo_types::Point<f64> {
	fn from(point: PointGeometry) -> Self {
		geo_types::Point(point.0.into())
	}
}

use std::fmt::Debug;

/// A coordinate pair in WGS 84: longitude (x) first, latitude (y) second.
///
/// Values are not range-checked.
#[derive(Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinates {
	pub lng: f64,
	pub lat: f64,
}

impl Coordinates {
	#[must_use]
	pub fn new(lng: f64, lat: f64) -> Self {
		Self { lng, lat }
	}
}

impl<T> From<[T; 2]> for Coordinates
where
	T: Copy + Into<f64>,
{
	fn from(value: [T; 2]) -> Self {
		Coordinates::new(value[0].into(), value[1].into())
	}
}

impl<'a, T> From<&'a [T; 2]> for Coordinates
where
	T: Copy + Into<f64>,
{
	fn from(value: &'a [T; 2]) -> Self {
		Coordinates::new(value[0].into(), value[1].into())
	}
}

impl From<(f64, f64)> for Coordinates {
	fn from(value: (f64, f64)) -> Self {
		Coordinates::new(value.0, value.1)
	}
}

impl From<Coordinates> for [f64; 2] {
	fn from(value: Coordinates) -> Self {
		[value.lng, value.lat]
	}
}

impl From<geo_types::Coord<f64>> for Coordinates {
	fn from(value: geo_types::Coord<f64>) -> Self {
		Coordinates::new(value.x, value.y)
	}
}

impl From<Coordinates> for geo_types::Coord<f64> {
	fn from(value: Coordinates) -> Self {
		geo_types::Coord {
			x: value.lng,
			y: value.lat,
		}
	}
}

impl Debug for Coordinates {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		[self.lng, self.lat].fmt(f)
	}
}

use super::Coordinates;
use std::fmt::Debug;

/// One boundary of a polygon.
///
/// By convention a ring is closed (first coordinate equals the last), but this is neither
/// checked on decode nor enforced on encode.
#[derive(Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
pub struct RingGeometry(pub Vec<Coordinates>);

impl RingGeometry {
	/// Checks whether the first and last coordinates are identical.
	pub fn is_closed(&self) -> bool {
		self.0.first() == self.0.last()
	}
}

impl Debug for RingGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_composite_geometry!(RingGeometry, Coordinates);

impl From<geo_types::LineString<f64>> for RingGeometry {
	fn from(line: geo_types::LineString<f64>) -> Self {
		line.0.into_iter().map(Coordinates::from).collect()
	}
}

impl From<RingGeometry> for geo_types::LineString<f64> {
	fn from(ring: RingGeometry) -> Self {
		geo_types::LineString(ring.0.into_iter().map(geo_types::Coord::from).collect())
	}
}

use super::RingGeometry;
use std::fmt::Debug;

/// An area bounded by rings, stored in PostGIS as `geometry(Polygon,4326)`.
///
/// The first ring is the outer boundary, any further rings are holes. Ring order and
/// containment are not verified.
#[derive(Clone, Default, PartialEq)]
#[cfg_attr(
	feature = "serde",
	derive(serde::Serialize, serde::Deserialize),
	serde(from = "PolygonFields", into = "PolygonFields")
)]
pub struct PolygonGeometry(pub Vec<RingGeometry>);

impl PolygonGeometry {
	/// Returns the outer boundary, if the polygon has any ring.
	#[must_use]
	pub fn exterior(&self) -> Option<&RingGeometry> {
		self.0.first()
	}

	/// Returns the holes, i.e. every ring after the first.
	#[must_use]
	pub fn interiors(&self) -> &[RingGeometry] {
		self.0.get(1..).unwrap_or_default()
	}
}

impl Debug for PolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_composite_geometry!(PolygonGeometry, RingGeometry);

/// JSON form: `{"rings": [[...], ...]}`.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct PolygonFields {
	rings: Vec<RingGeometry>,
}

#[cfg(feature = "serde")]
impl From<PolygonFields> for PolygonGeometry {
	fn from(fields: PolygonFields) -> Self {
		PolygonGeometry(fields.rings)
	}
}

#[cfg(feature = "serde")]
impl From<PolygonGeometry> for PolygonFields {
	fn from(polygon: PolygonGeometry) -> Self {
		PolygonFields { rings: polygon.0 }
	}
}

impl From<geo_types::Polygon<f64>> for PolygonGeometry {
	fn from(geometry: geo_types::Polygon<f64>) -> Self {
		let (exterior, interiors) = geometry.into_inner();
		if exterior.0.is_empty() && interiors.is_empty() {
			return PolygonGeometry::default();
		}
		let mut rings = Vec::with_capacity(interiors.len() + 1);
		rings.push(RingGeometry::from(exterior));
		rings.extend(interiors.into_iter().map(RingGeometry::from));
		PolygonGeometry(rings)
	}
}

impl From<PolygonGeometry> for geo_types::Polygon<f64> {
	/// geo-types closes open rings while converting.
	fn from(polygon: PolygonGeometry) -> Self {
		let mut rings = polygon.0.into_iter().map(geo_types::LineString::from);
		let exterior = rings.next().unwrap_or_else(|| geo_types::LineString(Vec::new()));
		geo_types::Polygon::new(exterior, rings.collect())
	}
}

use super::Geometry;
use std::fmt::Debug;

/// An ordered, heterogeneous list of points, line strings and polygons, stored in PostGIS as
/// `geometry(GeometryCollection,4326)`.
#[derive(Clone, Default, PartialEq)]
#[cfg_attr(
	feature = "serde",
	derive(serde::Serialize, serde::Deserialize),
	serde(from = "CollectionFields", into = "CollectionFields")
)]
pub struct GeometryCollection(pub Vec<Geometry>);

impl Debug for GeometryCollection {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_composite_geometry!(GeometryCollection, Geometry);

/// JSON form: `{"geometries": [...]}`.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct CollectionFields {
	geometries: Vec<Geometry>,
}

#[cfg(feature = "serde")]
impl From<CollectionFields> for GeometryCollection {
	fn from(fields: CollectionFields) -> Self {
		GeometryCollection(fields.geometries)
	}
}

#[cfg(feature = "serde")]
impl From<GeometryCollection> for CollectionFields {
	fn from(collection: GeometryCollection) -> Self {
		CollectionFields {
			geometries: collection.0,
		}
	}
}

impl From<GeometryCollection> for geo_types::GeometryCollection<f64> {
	fn from(collection: GeometryCollection) -> Self {
		collection.0.into_iter().map(geo_types::Geometry::from).collect()
	}
}

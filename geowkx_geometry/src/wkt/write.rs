use super::{SRID_PREFIX, format_coordinate_list, format_coordinates};
use crate::{Geometry, GeometryCollection, LineStringGeometry, PointGeometry, PolygonGeometry};
use geowkx_core::SqlValue;
use std::fmt::Display;

/// Rendering of a geometry as SRID-annotated WKT.
///
/// Rendering is total: every in-memory value has a text form.
pub trait ToWkt {
	/// Returns the full text, including the `SRID=4326;` prefix.
	fn to_wkt(&self) -> String;

	/// Returns the value to hand to a database driver: the WKT as text.
	fn to_sql_value(&self) -> SqlValue {
		SqlValue::Text(self.to_wkt())
	}
}

/// Builds `SRID=4326;KEYWORD(body)`, or `SRID=4326;KEYWORD EMPTY` when `is_empty` is set.
fn annotated(keyword: &str, is_empty: bool, body: impl FnOnce() -> String) -> String {
	if is_empty {
		format!("{SRID_PREFIX}{keyword} EMPTY")
	} else {
		format!("{SRID_PREFIX}{keyword}({})", body())
	}
}

/// Removes the coordinate-system annotation from a rendered member.
///
/// Everything up to and including the first `;` is dropped. Text without `;` is kept verbatim.
fn strip_srid(wkt: &str) -> &str {
	wkt.split_once(';').map_or(wkt, |(_, rest)| rest)
}

impl ToWkt for PointGeometry {
	fn to_wkt(&self) -> String {
		annotated("POINT", false, || format_coordinates(&self.0))
	}
}

impl ToWkt for LineStringGeometry {
	fn to_wkt(&self) -> String {
		annotated("LINESTRING", self.0.is_empty(), || format_coordinate_list(&self.0))
	}
}

impl ToWkt for PolygonGeometry {
	fn to_wkt(&self) -> String {
		annotated("POLYGON", self.0.is_empty(), || {
			self
				.0
				.iter()
				.map(|ring| format!("({})", format_coordinate_list(&ring.0)))
				.collect::<Vec<_>>()
				.join(",")
		})
	}
}

impl ToWkt for Geometry {
	fn to_wkt(&self) -> String {
		match self {
			Geometry::Point(g) => g.to_wkt(),
			Geometry::LineString(g) => g.to_wkt(),
			Geometry::Polygon(g) => g.to_wkt(),
		}
	}
}

impl ToWkt for GeometryCollection {
	fn to_wkt(&self) -> String {
		annotated("GEOMETRYCOLLECTION", self.0.is_empty(), || {
			self
				.0
				.iter()
				.map(|geometry| strip_srid(&geometry.to_wkt()).to_string())
				.collect::<Vec<_>>()
				.join(",")
		})
	}
}

macro_rules! impl_display_as_wkt {
	($($t:ty),*) => {$(
		impl Display for $t {
			fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
				f.write_str(&self.to_wkt())
			}
		}
	)*}
}

impl_display_as_wkt!(PointGeometry, LineStringGeometry, PolygonGeometry, Geometry, GeometryCollection);

use super::{FromWkb, WkbType};
use crate::{Geometry, GeometryCollection, LineStringGeometry, PointGeometry, PolygonGeometry};
use geowkx_core::{Result, WkxError, io::ValueReader};
use log::{debug, trace};

/// A member occupies at least its byte-order marker and 8-byte tag.
const MIN_MEMBER_SIZE: u64 = 9;

impl FromWkb for GeometryCollection {
	const WKB_TYPE: WkbType = WkbType::GeometryCollection;

	fn read_wkb_body(reader: &mut dyn ValueReader) -> Result<Self> {
		let count = reader.read_count(MIN_MEMBER_SIZE)?;
		trace!("reading {count} collection members");

		let mut geometries = Vec::with_capacity(count);
		for index in 0..count as u32 {
			geometries.push(read_member(reader, index)?);
		}
		Ok(GeometryCollection(geometries))
	}
}

/// Reads one collection member, which carries its own byte-order marker.
///
/// The marker only applies to this member; the LineString body is read without EWKB SRID
/// handling.
fn read_member(reader: &mut dyn ValueReader, index: u32) -> Result<Geometry> {
	let byte_order = reader.read_byte_order().map_err(|e| e.in_element(index))?;
	let tag = reader.read_u64()?;

	let geometry = match WkbType::from_tag(tag) {
		Some(WkbType::Point) => Geometry::Point(PointGeometry::read_wkb_body(reader)?),
		Some(WkbType::LineString) => Geometry::LineString(LineStringGeometry::read_wkb_body(reader)?),
		Some(WkbType::Polygon) => Geometry::Polygon(PolygonGeometry::read_wkb_body(reader)?),
		Some(WkbType::GeometryCollection) | None => {
			debug!("rejecting collection member {index} with type {tag}");
			return Err(WkxError::UnsupportedElementType { tag, element: index });
		}
	};

	trace!("read collection member {index}: {} ({byte_order})", geometry.type_name());
	Ok(geometry)
}

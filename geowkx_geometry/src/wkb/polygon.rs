use super::{COORDINATES_SIZE, FromWkb, WkbType};
use crate::{Coordinates, PolygonGeometry, RingGeometry};
use geowkx_core::{Result, io::ValueReader};

/// A ring occupies at least its own 4-byte point count.
const MIN_RING_SIZE: u64 = 4;

impl FromWkb for PolygonGeometry {
	const WKB_TYPE: WkbType = WkbType::Polygon;

	fn read_wkb_body(reader: &mut dyn ValueReader) -> Result<Self> {
		let ring_count = reader.read_count(MIN_RING_SIZE)?;
		let mut rings = Vec::with_capacity(ring_count);
		for _ in 0..ring_count {
			let count = reader.read_count(COORDINATES_SIZE)?;
			let mut coords = Vec::with_capacity(count);
			for _ in 0..count {
				let (lng, lat) = reader.read_f64_pair()?;
				coords.push(Coordinates::new(lng, lat));
			}
			rings.push(RingGeometry(coords));
		}
		Ok(PolygonGeometry(rings))
	}
}

use super::{FromWkb, WkbType};
use crate::{Coordinates, PointGeometry};
use geowkx_core::{Result, io::ValueReader};

impl FromWkb for PointGeometry {
	const WKB_TYPE: WkbType = WkbType::Point;

	fn read_wkb_body(reader: &mut dyn ValueReader) -> Result<Self> {
		let (lng, lat) = reader.read_f64_pair()?;
		Ok(PointGeometry(Coordinates::new(lng, lat)))
	}
}

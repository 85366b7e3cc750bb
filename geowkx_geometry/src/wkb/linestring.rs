use super::{COORDINATES_SIZE, EWKB_SRID_FLAG, EWKB_TYPE_MASK, FromWkb, WkbType};
use crate::{Coordinates, LineStringGeometry};
use geowkx_core::{Result, WkxError, io::ValueReader};
use log::trace;

impl FromWkb for LineStringGeometry {
	const WKB_TYPE: WkbType = WkbType::LineString;

	/// Reads a 4-byte header that may carry the EWKB SRID flag.
	///
	/// The flag is masked off before comparing the tag; if it is set, the 4-byte SRID following
	/// the header is read and discarded.
	fn read_wkb_type(reader: &mut dyn ValueReader) -> Result<()> {
		let tag = reader.read_u32()?;
		if tag & EWKB_TYPE_MASK != Self::WKB_TYPE.as_u32() {
			return Err(WkxError::TypeMismatch {
				expected: Self::WKB_TYPE.as_u64(),
				found: u64::from(tag),
			});
		}
		if tag & EWKB_SRID_FLAG != 0 {
			let srid = reader.read_u32()?;
			trace!("skipping embedded SRID {srid}");
		}
		Ok(())
	}

	fn read_wkb_body(reader: &mut dyn ValueReader) -> Result<Self> {
		let count = reader.read_count(COORDINATES_SIZE)?;
		let mut coords = Vec::with_capacity(count);
		for _ in 0..count {
			let (lng, lat) = reader.read_f64_pair()?;
			coords.push(Coordinates::new(lng, lat));
		}
		Ok(LineStringGeometry(coords))
	}
}

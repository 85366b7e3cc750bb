//! Decoding PostGIS output and rendering it back as insertable WKT.

#[path = "../src/wkb/test_utils.rs"]
#[allow(dead_code)]
mod test_utils;

use anyhow::Result;
use geowkx_core::{SqlValue, WkxError, io::ByteOrder};
use geowkx_geometry::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use test_utils::WkbBuilder;

const SQUARE: [[f64; 2]; 5] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [0.0, 0.0]];

#[rstest]
#[case(ByteOrder::LittleEndian)]
#[case(ByteOrder::BigEndian)]
fn point_from_hex_to_wkt(#[case] order: ByteOrder) -> Result<()> {
	let hex = WkbBuilder::new(order).point(-74.0445, 40.6892).hex();
	let point = PointGeometry::from_sql_value(&SqlValue::Text(hex))?;
	assert_eq!(point.to_wkt(), "SRID=4326;POINT(-74.0445 40.6892)");
	Ok(())
}

#[rstest]
#[case(ByteOrder::LittleEndian)]
#[case(ByteOrder::BigEndian)]
fn line_string_from_bytes_to_wkt(#[case] order: ByteOrder) -> Result<()> {
	let hex = WkbBuilder::new(order)
		.line_string(&[[-73.989, 40.756], [-73.985, 40.758]])
		.hex();
	let line = LineStringGeometry::from_sql_value(&SqlValue::Bytes(hex.into_bytes()))?;
	assert_eq!(line.to_wkt(), "SRID=4326;LINESTRING(-73.989 40.756,-73.985 40.758)");
	Ok(())
}

#[test]
fn ewkb_line_string_skips_embedded_srid() -> Result<()> {
	let hex = WkbBuilder::le()
		.marker(ByteOrder::LittleEndian)
		.u32(0x2000_0002)
		.u32(4326)
		.counted_coords(&[[0.0, 0.0], [1.0, 1.0]])
		.hex();
	assert_eq!(
		LineStringGeometry::from_wkb_hex(&hex)?.to_wkt(),
		"SRID=4326;LINESTRING(0 0,1 1)"
	);
	Ok(())
}

#[test]
fn polygon_with_hole_to_wkt() -> Result<()> {
	let hole = [[0.25, 0.25], [0.25, 0.5], [0.5, 0.5], [0.25, 0.25]];
	let bytes = WkbBuilder::be().polygon(&[&SQUARE, &hole]).build();
	let polygon = PolygonGeometry::from_wkb(&bytes)?;
	assert_eq!(polygon.len(), 2);
	assert_eq!(
		polygon.to_wkt(),
		"SRID=4326;POLYGON((0 0,1 0,1 1,0 1,0 0),(0.25 0.25,0.25 0.5,0.5 0.5,0.25 0.25))"
	);
	Ok(())
}

#[test]
fn mixed_byte_order_collection_to_wkt() -> Result<()> {
	let bytes = WkbBuilder::le()
		.collection(3)
		.order(ByteOrder::BigEndian)
		.point(2.0, 0.0)
		.order(ByteOrder::LittleEndian)
		.member_line_string(&[[0.0, 0.0], [1.0, 1.0]])
		.order(ByteOrder::BigEndian)
		.polygon(&[&SQUARE])
		.build();
	let collection = GeometryCollection::from_wkb(&bytes)?;
	assert_eq!(
		collection.to_wkt(),
		"SRID=4326;GEOMETRYCOLLECTION(POINT(2 0),LINESTRING(0 0,1 1),POLYGON((0 0,1 0,1 1,0 1,0 0)))"
	);
	Ok(())
}

#[test]
fn full_precision_survives() -> Result<()> {
	let lng = 0.1 + 0.2;
	let lat = -1.0 / 3.0;
	let point = PointGeometry::from_wkb(&WkbBuilder::le().point(lng, lat).build())?;
	let wkt = point.to_wkt();
	assert_eq!(wkt, "SRID=4326;POINT(0.30000000000000004 -0.3333333333333333)");

	let body = wkt.trim_start_matches("SRID=4326;POINT(").trim_end_matches(')');
	let parsed: Vec<f64> = body.split(' ').map(str::parse).collect::<Result<_, _>>()?;
	assert_eq!(parsed, vec![lng, lat]);
	Ok(())
}

#[test]
fn postgis_empty_point_renders_nan() -> Result<()> {
	let point = PointGeometry::from_wkb(&WkbBuilder::le().point(f64::NAN, f64::NAN).build())?;
	assert!(point.lng().is_nan() && point.lat().is_nan());
	assert_eq!(point.to_wkt(), "SRID=4326;POINT(NaN NaN)");
	Ok(())
}

#[test]
fn null_values_decode_to_empty_shapes() -> Result<()> {
	assert_eq!(PointGeometry::from_sql_value(&SqlValue::Null)?.to_wkt(), "SRID=4326;POINT(0 0)");
	assert_eq!(
		LineStringGeometry::from_sql_value(&SqlValue::Null)?.to_wkt(),
		"SRID=4326;LINESTRING EMPTY"
	);
	assert_eq!(
		PolygonGeometry::from_sql_value(&SqlValue::Null)?.to_wkt(),
		"SRID=4326;POLYGON EMPTY"
	);
	assert_eq!(
		GeometryCollection::from_sql_value(&SqlValue::Null)?.to_wkt(),
		"SRID=4326;GEOMETRYCOLLECTION EMPTY"
	);
	Ok(())
}

#[rstest]
#[case(SqlValue::Bool(true), "bool")]
#[case(SqlValue::Int(7), "int")]
#[case(SqlValue::Float(1.5), "float")]
fn unsupported_input_kinds(#[case] value: SqlValue, #[case] kind: &'static str) {
	assert_eq!(
		PointGeometry::from_sql_value(&value),
		Err(WkxError::UnsupportedInputKind(kind))
	);
}

#[test]
fn invalid_outer_marker() {
	let bytes = WkbBuilder::le().u8(2).u64(1).f64(0.0).f64(0.0).build();
	assert_eq!(
		PointGeometry::from_wkb(&bytes),
		Err(WkxError::InvalidByteOrder {
			marker: 2,
			element: None
		})
	);
}

#[test]
fn invalid_member_marker_names_the_member() {
	let bytes = WkbBuilder::le()
		.collection(2)
		.point(1.0, 1.0)
		.u8(9)
		.u64(1)
		.f64(0.0)
		.f64(0.0)
		.build();
	assert_eq!(
		GeometryCollection::from_wkb(&bytes),
		Err(WkxError::InvalidByteOrder {
			marker: 9,
			element: Some(1)
		})
	);
}

#[test]
fn shapes_reject_each_other() {
	let point = WkbBuilder::le().point(1.0, 2.0).build();
	let polygon = WkbBuilder::le().polygon(&[&SQUARE]).build();

	assert_eq!(
		PolygonGeometry::from_wkb(&point),
		Err(WkxError::TypeMismatch { expected: 3, found: 1 })
	);
	assert_eq!(
		PointGeometry::from_wkb(&polygon),
		Err(WkxError::TypeMismatch { expected: 1, found: 3 })
	);
	assert_eq!(
		GeometryCollection::from_wkb(&point),
		Err(WkxError::TypeMismatch { expected: 7, found: 1 })
	);
	assert!(matches!(
		LineStringGeometry::from_wkb(&point),
		Err(WkxError::TypeMismatch { expected: 2, .. })
	));
}

#[test]
fn malformed_hex_is_reported() {
	assert!(matches!(
		PointGeometry::from_wkb_hex("01010"),
		Err(WkxError::MalformedEncoding(_))
	));
	assert!(matches!(
		PointGeometry::from_wkb_hex("zz"),
		Err(WkxError::MalformedEncoding(_))
	));
}

#[test]
fn truncated_input_is_reported() {
	let mut bytes = WkbBuilder::le().polygon(&[&SQUARE]).build();
	bytes.truncate(bytes.len() - 8);
	assert!(matches!(
		PolygonGeometry::from_wkb(&bytes),
		Err(WkxError::MalformedEncoding(_))
	));
}

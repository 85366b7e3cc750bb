//! PostGIS geometry types with WKB decoding and SRID-annotated WKT encoding.
//!
//! Four shapes are supported: [`PointGeometry`], [`LineStringGeometry`], [`PolygonGeometry`] and
//! [`GeometryCollection`]. Each one decodes from the (E)WKB a PostGIS column returns
//! ([`FromWkb`]) and renders to the `SRID=4326;…` text PostGIS accepts on insert ([`ToWkt`]).
//!
//! ```rust
//! use geowkx_geometry::{FromWkb, PointGeometry, ToWkt};
//!
//! let point = PointGeometry::new(-74.0445, 40.6892);
//! assert_eq!(point.to_wkt(), "SRID=4326;POINT(-74.0445 40.6892)");
//!
//! let decoded = PointGeometry::from_wkb_hex("010100000000000000000000000000f03f000000000000f0bf").unwrap();
//! assert_eq!(decoded, PointGeometry::new(1.0, -1.0));
//! ```

mod geo;
pub mod wkb;
pub mod wkt;

pub use geo::*;
pub use wkb::{FromWkb, WkbType};
pub use wkt::ToWkt;

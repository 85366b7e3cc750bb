//! Rendering of geometries as SRID-annotated WKT.
//!
//! The output is the literal text handed to PostGIS on insert, e.g.
//! `SRID=4326;POINT(-74.0445 40.6892)` or `SRID=4326;LINESTRING EMPTY`. Nothing is escaped or
//! quoted.

mod format;
mod write;

pub use format::*;
pub use write::*;

/// Coordinate system of every geometry: WGS 84.
pub const SRID: u32 = 4326;

/// Prefix of every rendered geometry.
pub const SRID_PREFIX: &str = "SRID=4326;";

//! Decoding of the WKB a PostGIS geometry column returns.
//!
//! # Layout
//!
//! Every geometry starts with a one-byte order marker (`0` big-endian, `1` little-endian) that
//! governs all multi-byte values of that geometry's header and body. The type header follows:
//!
//! | shape              | header  | body                                                    |
//! |--------------------|---------|---------------------------------------------------------|
//! | Point              | u64 `1` | `f64` lng, `f64` lat                                    |
//! | LineString         | u32 `2` | optional u32 SRID, u32 count, count × (lng, lat)        |
//! | Polygon            | u64 `3` | u32 ring count, per ring: u32 count, count × (lng, lat) |
//! | GeometryCollection | u64 `7` | u32 count, count × member                               |
//!
//! A collection member repeats its own order marker, followed by a u64 tag and the body of a
//! Point, LineString or Polygon. Members cannot be collections.
//!
//! # Embedded SRID
//!
//! Only a top-level LineString recognises the EWKB SRID flag (`0x2000_0000`) in its header; the
//! SRID that follows is skipped. Point, Polygon and GeometryCollection headers, as well as
//! LineString members of a collection, must carry the plain tag. This mirrors what the existing
//! store writes and reads, byte for byte; a flagged tag anywhere else fails with `TypeMismatch`
//! (or `UnsupportedElementType` inside a collection).

mod collection;
mod geometry_type;
mod linestring;
mod point;
mod polygon;
mod read;
#[cfg(test)]
pub(crate) mod test_utils;

pub use geometry_type::*;
pub use read::*;

/// Size of one encoded coordinate pair.
const COORDINATES_SIZE: u64 = 16;

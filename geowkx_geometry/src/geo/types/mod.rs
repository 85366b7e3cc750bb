// This module defines the geometric primitives stored in a PostGIS column: `Coordinates`,
// `PointGeometry`, `LineStringGeometry`, `RingGeometry` and `PolygonGeometry`. The sequence-valued
// types share the `CompositeGeometryTrait`. No geometric validation happens here; rings are
// neither checked for closure nor for orientation.

mod coordinates;
mod linestring;
mod macros;
mod point;
mod polygon;
mod ring;
mod traits;

pub use coordinates::*;
pub use linestring::*;
pub use point::*;
pub use polygon::*;
pub use ring::*;
pub use traits::*;

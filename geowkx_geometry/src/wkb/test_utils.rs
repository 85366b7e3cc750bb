use byteorder::{BigEndian, LittleEndian, WriteBytesExt};
use geowkx_core::io::ByteOrder;

/// Builds WKB byte streams for tests, in either byte order.
pub struct WkbBuilder {
	buf: Vec<u8>,
	order: ByteOrder,
}

impl WkbBuilder {
	pub fn new(order: ByteOrder) -> Self {
		Self { buf: Vec::new(), order }
	}

	pub fn le() -> Self {
		Self::new(ByteOrder::LittleEndian)
	}

	pub fn be() -> Self {
		Self::new(ByteOrder::BigEndian)
	}

	/// Switches the order without writing a marker.
	pub fn order(mut self, order: ByteOrder) -> Self {
		self.order = order;
		self
	}

	/// Switches the order and writes its marker.
	pub fn marker(mut self, order: ByteOrder) -> Self {
		self.order = order;
		self.buf.push(order.as_marker());
		self
	}

	pub fn u8(mut self, value: u8) -> Self {
		self.buf.push(value);
		self
	}

	pub fn u32(mut self, value: u32) -> Self {
		match self.order {
			ByteOrder::BigEndian => self.buf.write_u32::<BigEndian>(value).unwrap(),
			ByteOrder::LittleEndian => self.buf.write_u32::<LittleEndian>(value).unwrap(),
		}
		self
	}

	pub fn u64(mut self, value: u64) -> Self {
		match self.order {
			ByteOrder::BigEndian => self.buf.write_u64::<BigEndian>(value).unwrap(),
			ByteOrder::LittleEndian => self.buf.write_u64::<LittleEndian>(value).unwrap(),
		}
		self
	}

	pub fn f64(mut self, value: f64) -> Self {
		match self.order {
			ByteOrder::BigEndian => self.buf.write_f64::<BigEndian>(value).unwrap(),
			ByteOrder::LittleEndian => self.buf.write_f64::<LittleEndian>(value).unwrap(),
		}
		self
	}

	pub fn coords(self, coords: &[[f64; 2]]) -> Self {
		coords.iter().fold(self, |b, c| b.f64(c[0]).f64(c[1]))
	}

	pub fn counted_coords(self, coords: &[[f64; 2]]) -> Self {
		self.u32(coords.len() as u32).coords(coords)
	}

	/// Point: marker, u64 tag, coordinates.
	pub fn point(self, lng: f64, lat: f64) -> Self {
		let order = self.order;
		self.marker(order).u64(1).f64(lng).f64(lat)
	}

	/// Top-level line string: marker, u32 tag, count, coordinates.
	pub fn line_string(self, coords: &[[f64; 2]]) -> Self {
		let order = self.order;
		self.marker(order).u32(2).counted_coords(coords)
	}

	/// Line string as collection member: marker, u64 tag, count, coordinates.
	pub fn member_line_string(self, coords: &[[f64; 2]]) -> Self {
		let order = self.order;
		self.marker(order).u64(2).counted_coords(coords)
	}

	/// Polygon: marker, u64 tag, ring count, counted rings.
	pub fn polygon(self, rings: &[&[[f64; 2]]]) -> Self {
		let order = self.order;
		let builder = self.marker(order).u64(3).u32(rings.len() as u32);
		rings.iter().fold(builder, |b, ring| b.counted_coords(ring))
	}

	/// Collection header: marker, u64 tag, member count. Members are appended by the caller.
	pub fn collection(self, count: u32) -> Self {
		let order = self.order;
		self.marker(order).u64(7).u32(count)
	}

	pub fn build(self) -> Vec<u8> {
		self.buf
	}

	pub fn hex(self) -> String {
		self.buf.iter().map(|b| format!("{b:02x}")).collect()
	}
}

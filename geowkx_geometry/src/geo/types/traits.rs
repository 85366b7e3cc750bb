use std::fmt::Debug;

/// Represents geometries that are ordered sequences of simpler elements.
/// A line string is made of coordinates, a polygon of rings, a collection of geometries.
pub trait CompositeGeometryTrait<Item>: Debug + Clone {
	/// Creates a new, empty composite geometry.
	fn new() -> Self;

	/// Returns an immutable reference to the inner collection of elements.
	fn as_vec(&self) -> &Vec<Item>;

	/// Returns a mutable reference to the inner collection of elements.
	fn as_mut_vec(&mut self) -> &mut Vec<Item>;

	/// Consumes the composite geometry and returns the inner collection of elements.
	fn into_inner(self) -> Vec<Item>;

	/// Checks whether the composite geometry contains no elements.
	///
	/// Empty geometries render as `EMPTY` in WKT.
	fn is_empty(&self) -> bool {
		self.as_vec().is_empty()
	}

	/// Returns the number of elements.
	fn len(&self) -> usize {
		self.as_vec().len()
	}

	/// Appends an element at the end.
	fn push(&mut self, item: Item) {
		self.as_mut_vec().push(item);
	}

	/// Returns the first element, if any.
	fn first(&self) -> Option<&Item> {
		self.as_vec().first()
	}

	/// Returns an iterator over the elements, in order.
	fn iter(&self) -> std::slice::Iter<'_, Item> {
		self.as_vec().iter()
	}
}

/// Implements [`CompositeGeometryTrait`](crate::CompositeGeometryTrait) for a tuple struct
/// wrapping a `Vec`, plus the conversions used to build it from literals or iterators.
#[macro_export]
macro_rules! impl_composite_geometry {
	($($t:ty, $i:ty);* $(;)?) => {$(
		impl $crate::CompositeGeometryTrait<$i> for $t {
			fn new() -> Self {
				Self(Vec::new())
			}
			fn as_vec(&self) -> &Vec<$i> {
				&self.0
			}
			fn as_mut_vec(&mut self) -> &mut Vec<$i> {
				&mut self.0
			}
			fn into_inner(self) -> Vec<$i> {
				self.0
			}
		}

		impl<T> From<Vec<T>> for $t
		where
			$i: From<T>,
		{
			fn from(value: Vec<T>) -> Self {
				Self(value.into_iter().map(<$i>::from).collect())
			}
		}

		impl FromIterator<$i> for $t {
			fn from_iter<I: IntoIterator<Item = $i>>(iter: I) -> Self {
				Self(iter.into_iter().collect())
			}
		}

		impl<'a> IntoIterator for &'a $t {
			type Item = &'a $i;
			type IntoIter = std::slice::Iter<'a, $i>;

			fn into_iter(self) -> Self::IntoIter {
				self.0.iter()
			}
		}
	)*}
}

use crate::Coordinates;

/// Formats a coordinate value with the shortest digits that round-trip to the same `f64`.
///
/// There is no fixed precision, no exponent notation and no trailing zeros: `2.0` renders as
/// `2`, `1e-7` as `0.0000001`, negative zero as `-0`.
///
/// Non-finite values render as `NaN`, `+Inf` and `-Inf`. PostGIS stores `POINT EMPTY` as a
/// point with NaN coordinates.
#[must_use]
pub fn format_number(value: f64) -> String {
	if value.is_nan() {
		String::from("NaN")
	} else if value == f64::INFINITY {
		String::from("+Inf")
	} else if value == f64::NEG_INFINITY {
		String::from("-Inf")
	} else {
		format!("{value}")
	}
}

/// Formats a coordinate pair as `lng lat`.
#[must_use]
pub fn format_coordinates(coordinates: &Coordinates) -> String {
	format!("{} {}", format_number(coordinates.lng), format_number(coordinates.lat))
}

/// Formats a coordinate sequence as `lng lat,lng lat,…`.
#[must_use]
pub fn format_coordinate_list(coordinates: &[Coordinates]) -> String {
	coordinates.iter().map(format_coordinates).collect::<Vec<_>>().join(",")
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(0.0, "0")]
	#[case(-0.0, "-0")]
	#[case(2.0, "2")]
	#[case(-74.0445, "-74.0445")]
	#[case(40.6892, "40.6892")]
	#[case(0.1, "0.1")]
	#[case(0.1 + 0.2, "0.30000000000000004")]
	#[case(1.0 / 3.0, "0.3333333333333333")]
	#[case(1e-7, "0.0000001")]
	#[case(123456789.125, "123456789.125")]
	#[case(1e21, "1000000000000000000000")]
	#[case(f64::NAN, "NaN")]
	#[case(-f64::NAN, "NaN")]
	#[case(f64::INFINITY, "+Inf")]
	#[case(f64::NEG_INFINITY, "-Inf")]
	fn number_vectors(#[case] value: f64, #[case] expected: &str) {
		assert_eq!(format_number(value), expected);
	}

	#[test]
	fn numbers_round_trip() {
		for value in [-73.965355, 40.782865, 1.0 / 7.0, 1e-300, 9007199254740993.0] {
			assert_eq!(format_number(value).parse::<f64>().unwrap(), value);
		}
	}

	#[test]
	fn coordinates() {
		assert_eq!(format_coordinates(&Coordinates::new(-73.989, 40.756)), "-73.989 40.756");
	}

	#[test]
	fn coordinate_list() {
		let list = [Coordinates::new(0.0, 0.0), Coordinates::new(1.0, 1.0)];
		assert_eq!(format_coordinate_list(&list), "0 0,1 1");
		assert_eq!(format_coordinate_list(&[]), "");
	}
}

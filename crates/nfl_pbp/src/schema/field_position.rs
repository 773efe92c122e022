use crate::error::LocationError;
use std::str::FromStr;

pub const MIDFIELD: i64 = 50;

/// Ball spot taken from the `location` column, e.g. "NWE 35".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPosition {
	/// Lowercased team abbreviation owning this half of the field.
	pub side: Option<String>,
	pub yd_line: Option<i64>,
}

impl FieldPosition {
	pub fn midfield() -> Self {
		FieldPosition {
			side: None,
			yd_line: Some(MIDFIELD),
		}
	}

	fn unknown() -> Self {
		FieldPosition { side: None, yd_line: None }
	}

	/// An absent or blank location means the ball sits on the 50.
	pub fn from_location(location: Option<&str>) -> Self {
		match location.map(str::parse::<FieldPosition>) {
			None | Some(Err(LocationError::Empty)) => FieldPosition::midfield(),
			Some(Err(_)) => FieldPosition::unknown(),
			Some(Ok(position)) => position,
		}
	}

	/// Yards the offense still needs to reach the end zone.
	pub fn dist_to_goal(&self, offense: &str) -> Option<i64> {
		let yd_line = self.yd_line?;
		match &self.side {
			Some(side) if side.eq_ignore_ascii_case(offense.trim()) => Some(100 - yd_line),
			Some(_) => Some(yd_line),
			None if yd_line == MIDFIELD => Some(MIDFIELD),
			None => None,
		}
	}
}

impl FromStr for FieldPosition {
	type Err = LocationError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let parts: Vec<&str> = s.split_whitespace().collect();

		let (side, yd_line) = match parts.as_slice() {
			[] => return Err(LocationError::Empty),
			[yd_line] => (None, *yd_line),
			[side, yd_line, ..] => (Some(side.to_lowercase()), *yd_line),
		};

		let yd_line = yd_line.parse::<i64>().map_err(|_| LocationError::invalid_yard_line_error(s))?;

		Ok(FieldPosition {
			side,
			yd_line: Some(yd_line),
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_field_position_from_str() {
		let position = FieldPosition::from_str("NWE 35").unwrap();
		assert_eq!(position.side.as_deref(), Some("nwe"));
		assert_eq!(position.yd_line, Some(35));

		let bare = FieldPosition::from_str(" 50 ").unwrap();
		assert_eq!(bare.side, None);
		assert_eq!(bare.yd_line, Some(50));

		assert_eq!(FieldPosition::from_str("   "), Err(LocationError::Empty));
		assert_eq!(FieldPosition::from_str("NWE XX"), Err(LocationError::invalid_yard_line_error("NWE XX")));
	}

	#[test]
	fn test_missing_location_is_midfield() {
		assert_eq!(FieldPosition::from_location(None), FieldPosition::midfield());
		assert_eq!(FieldPosition::from_location(Some("")), FieldPosition::midfield());
		assert_eq!(FieldPosition::from_location(Some("KAN ??")), FieldPosition::unknown());
	}

	#[test]
	fn test_dist_to_goal() {
		let own_side = FieldPosition::from_str("NWE 20").unwrap();
		assert_eq!(own_side.dist_to_goal("NWE"), Some(80));
		assert_eq!(own_side.dist_to_goal("mia"), Some(20));
		assert_eq!(FieldPosition::midfield().dist_to_goal("nwe"), Some(50));
		assert_eq!(FieldPosition::from_str("35").unwrap().dist_to_goal("nwe"), None);
	}
}

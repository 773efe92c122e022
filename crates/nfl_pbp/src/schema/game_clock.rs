use crate::error::ClockError;
use std::str::FromStr;

pub const SECONDS_PER_QUARTER: i64 = 900;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quarter {
	First,
	Second,
	Third,
	Fourth,
	/// Overtime period, starting at 1.
	Overtime(u8),
}

impl Quarter {
	pub fn number(self) -> i64 {
		match self {
			Quarter::First => 1,
			Quarter::Second => 2,
			Quarter::Third => 3,
			Quarter::Fourth => 4,
			Quarter::Overtime(period) => 4 + i64::from(period),
		}
	}
}

impl FromStr for Quarter {
	type Err = ClockError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim() {
			"1" | "1st" => Ok(Quarter::First),
			"2" | "2nd" => Ok(Quarter::Second),
			"3" | "3rd" => Ok(Quarter::Third),
			"4" | "4th" => Ok(Quarter::Fourth),
			"OT" | "ot" => Ok(Quarter::Overtime(1)),
			other => match other.parse::<u8>() {
				Ok(number) if number >= 5 => Ok(Quarter::Overtime(number - 4)),
				_ => Err(ClockError::invalid_quarter_error(s)),
			},
		}
	}
}

/// Minutes left on the quarter clock (valid range: 0-15)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Minutes(u8);

impl Minutes {
	pub fn new(value: u8) -> Result<Self, ClockError> {
		if value > 15 {
			Err(ClockError::invalid_minutes_error(value))
		} else {
			Ok(Minutes(value))
		}
	}
}

impl FromStr for Minutes {
	type Err = ClockError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let value = s.parse::<u8>()?;
		Minutes::new(value)
	}
}

/// Seconds left on the quarter clock (valid range: 0-59)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seconds(u8);

impl Seconds {
	pub fn new(value: u8) -> Result<Self, ClockError> {
		if value >= 60 {
			Err(ClockError::invalid_seconds_error(value))
		} else {
			Ok(Seconds(value))
		}
	}
}

impl FromStr for Seconds {
	type Err = ClockError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let value = s.parse::<u8>()?;
		Seconds::new(value)
	}
}

/// Time left in the quarter, as written in the `qtr_time_remain` column ("10:30").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockRemaining {
	minutes: Minutes,
	seconds: Seconds,
}

impl ClockRemaining {
	pub fn new(minutes: Minutes, seconds: Seconds) -> Self {
		ClockRemaining { minutes, seconds }
	}

	/// The full clock shown at kickoff of every quarter.
	pub const fn quarter_start() -> Self {
		ClockRemaining {
			minutes: Minutes(15),
			seconds: Seconds(0),
		}
	}

	pub fn total_seconds(self) -> i64 {
		i64::from(self.minutes.0) * 60 + i64::from(self.seconds.0)
	}

	/// Seconds elapsed in the whole game when this clock reading is shown in `quarter`.
	pub fn secs_elapsed(self, quarter: Quarter) -> i64 {
		quarter.number() * SECONDS_PER_QUARTER - self.total_seconds()
	}
}

impl FromStr for ClockRemaining {
	type Err = ClockError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let time = s.trim();
		let (minutes_str, seconds_str) = time.split_once(':').ok_or_else(|| ClockError::invalid_time_format_error(s))?;

		let minutes = minutes_str.parse::<Minutes>()?;
		let seconds = seconds_str.parse::<Seconds>()?;

		Ok(ClockRemaining::new(minutes, seconds))
	}
}

/// Elapsed game seconds from raw quarter and clock text, when both parse.
pub fn secs_elapsed(quarter: &str, clock: &str) -> Option<i64> {
	let quarter = quarter.parse::<Quarter>().ok()?;
	let clock = clock.parse::<ClockRemaining>().ok()?;
	Some(clock.secs_elapsed(quarter))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_quarter_from_str() {
		assert_eq!(Quarter::from_str("1"), Ok(Quarter::First));
		assert_eq!(Quarter::from_str("2nd"), Ok(Quarter::Second));
		assert_eq!(Quarter::from_str("3"), Ok(Quarter::Third));
		assert_eq!(Quarter::from_str("4"), Ok(Quarter::Fourth));
		assert_eq!(Quarter::from_str("OT"), Ok(Quarter::Overtime(1)));
		assert_eq!(Quarter::from_str("5"), Ok(Quarter::Overtime(1)));
		assert_eq!(Quarter::from_str("6"), Ok(Quarter::Overtime(2)));
		assert_eq!(Quarter::Overtime(1).number(), 5);
		assert_eq!(Quarter::Overtime(2).number(), 6);
		assert_eq!(Quarter::from_str("0"), Err(ClockError::invalid_quarter_error("0")));
		assert_eq!(Quarter::from_str("fifth"), Err(ClockError::invalid_quarter_error("fifth")));
	}

	#[test]
	fn test_clock_remaining_from_str() {
		let test_cases = vec![
			("10:30", Ok(ClockRemaining::new(Minutes(10), Seconds(30)))),
			("0:05", Ok(ClockRemaining::new(Minutes(0), Seconds(5)))),
			("15:00", Ok(ClockRemaining::new(Minutes(15), Seconds(0)))),
			("16:00", Err(ClockError::invalid_minutes_error(16))),
			("14:60", Err(ClockError::invalid_seconds_error(60))),
			("1430", Err(ClockError::invalid_time_format_error("1430"))),
		];

		for (input, expected) in test_cases {
			assert_eq!(ClockRemaining::from_str(input), expected, "Failed for input: {}", input);
		}

		assert!(matches!(ClockRemaining::from_str("ab:12"), Err(ClockError::ParseError { .. })));
		assert_eq!(ClockRemaining::from_str("15:00"), Ok(ClockRemaining::quarter_start()));
	}

	#[test]
	fn test_secs_elapsed() {
		assert_eq!(secs_elapsed("2", "10:30"), Some(1170));
		assert_eq!(secs_elapsed("1", "15:00"), Some(0));
		assert_eq!(secs_elapsed("4", "0:00"), Some(3600));
		assert_eq!(secs_elapsed("OT", "10:00"), Some(3900));
		assert_eq!(secs_elapsed("6", "10:00"), Some(4800));
		assert_eq!(secs_elapsed("2", "garbage"), None);
		assert_eq!(secs_elapsed("", "10:30"), None);
	}
}

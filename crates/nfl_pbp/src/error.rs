use serde::Serialize;
use std::num::ParseIntError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ClockError {
	#[error("Invalid quarter: {quarter}")]
	InvalidQuarter { quarter: String },

	#[error("Invalid minutes: {minutes}, must be between 0 and 15")]
	InvalidMinutes { minutes: u8 },

	#[error("Invalid seconds: {seconds}, must be between 0 and 59")]
	InvalidSeconds { seconds: u8 },

	#[error("Invalid time format: {time}")]
	InvalidTimeFormat { time: String },

	#[error("Parse error occurred for number: {source}")]
	ParseError {
		#[from]
		source: ParseIntError,
	},
}

#[derive(Debug, Error, PartialEq)]
pub enum LocationError {
	#[error("Location is empty")]
	Empty,

	#[error("Invalid yard line in location: {location}")]
	InvalidYardLine { location: String },
}

/// Boundary corrections that could not be applied to a game series.
///
/// These are reported alongside the series instead of failing the game.
#[derive(Debug, Error, Clone, PartialEq, Serialize)]
pub enum SeriesGap {
	#[error("Point spread missing; first play win probability left uncorrected")]
	MissingPointSpread,

	#[error("Game outcome missing; last play win probability left uncorrected")]
	MissingOutcome,

	#[error("Home/away teams missing; last play win probability left uncorrected")]
	MissingTeams,

	#[error("Winner {winner} is neither the home nor the away team")]
	UnknownWinner { winner: String },
}

impl ClockError {
	pub fn invalid_quarter_error(quarter: &str) -> Self {
		ClockError::InvalidQuarter { quarter: quarter.to_string() }
	}

	pub fn invalid_minutes_error(minutes: u8) -> Self {
		ClockError::InvalidMinutes { minutes }
	}

	pub fn invalid_seconds_error(seconds: u8) -> Self {
		ClockError::InvalidSeconds { seconds }
	}

	pub fn invalid_time_format_error(time: &str) -> Self {
		ClockError::InvalidTimeFormat { time: time.to_string() }
	}
}

impl LocationError {
	pub fn invalid_yard_line_error(location: &str) -> Self {
		LocationError::InvalidYardLine {
			location: location.to_string(),
		}
	}
}

impl SeriesGap {
	pub fn unknown_winner(winner: &str) -> Self {
		SeriesGap::UnknownWinner { winner: winner.to_string() }
	}
}

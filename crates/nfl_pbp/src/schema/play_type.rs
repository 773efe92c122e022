use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of play a description was classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayCategory {
	Kickoff,
	Timeout,
	FieldGoal,
	Punt,
	Kneel,
	Spike,
	ExtraPoint,
	TwoPointConversion,
	Pass,
	PresnapPenalty,
	Run,
	Unrecognized,
}

impl PlayCategory {
	/// Matching order. Earlier categories win when several grammars match.
	pub const PRIORITY: [PlayCategory; 11] = [
		PlayCategory::Kickoff,
		PlayCategory::Timeout,
		PlayCategory::FieldGoal,
		PlayCategory::Punt,
		PlayCategory::Kneel,
		PlayCategory::Spike,
		PlayCategory::ExtraPoint,
		PlayCategory::TwoPointConversion,
		PlayCategory::Pass,
		PlayCategory::PresnapPenalty,
		PlayCategory::Run,
	];

	/// Name of the boolean column flagging this category.
	pub fn flag(self) -> Option<&'static str> {
		match self {
			PlayCategory::Kickoff => Some("isKickoff"),
			PlayCategory::Timeout => Some("isTimeout"),
			PlayCategory::FieldGoal => Some("isFieldGoal"),
			PlayCategory::Punt => Some("isPunt"),
			PlayCategory::Kneel => Some("isKneel"),
			PlayCategory::Spike => Some("isSpike"),
			PlayCategory::ExtraPoint => Some("isXP"),
			PlayCategory::TwoPointConversion => Some("isTwoPoint"),
			PlayCategory::Pass => Some("isPass"),
			PlayCategory::PresnapPenalty => Some("isPresnapPenalty"),
			PlayCategory::Run => Some("isRun"),
			PlayCategory::Unrecognized => None,
		}
	}

	pub fn is_recognized(self) -> bool {
		self != PlayCategory::Unrecognized
	}
}

impl fmt::Display for PlayCategory {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			PlayCategory::Kickoff => "kickoff",
			PlayCategory::Timeout => "timeout",
			PlayCategory::FieldGoal => "field goal",
			PlayCategory::Punt => "punt",
			PlayCategory::Kneel => "kneel",
			PlayCategory::Spike => "spike",
			PlayCategory::ExtraPoint => "extra point",
			PlayCategory::TwoPointConversion => "two point conversion",
			PlayCategory::Pass => "pass",
			PlayCategory::PresnapPenalty => "pre-snap penalty",
			PlayCategory::Run => "run",
			PlayCategory::Unrecognized => "unrecognized",
		};
		write!(f, "{}", name)
	}
}

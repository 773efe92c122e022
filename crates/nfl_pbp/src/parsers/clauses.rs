//! Clauses shared by several play grammars.

use crate::parsers::fields::{capture, Extract, ExtractedFields};
use regex::Captures;

/// "(tackle by X [and Y])"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tackle {
	pub tackler1: Option<String>,
	pub tackler2: Option<String>,
}

impl Tackle {
	pub fn from_captures(caps: &Captures<'_>) -> Self {
		Tackle {
			tackler1: capture(caps, "tackler1"),
			tackler2: capture(caps, "tackler2"),
		}
	}
}

impl Extract for Tackle {
	fn extract(&self, out: &mut ExtractedFields) {
		out.insert("tackler1", self.tackler1.as_deref());
		out.insert("tackler2", self.tackler2.as_deref());
	}
}

/// A fumble: the original fumbler and whoever finally recovered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fumble {
	pub fumbler: Option<String>,
	pub forced_by: Option<String>,
	pub recovered_by: Option<String>,
	pub recovery_side: Option<String>,
	pub recovery_yd_line: Option<String>,
	pub return_yds: Option<String>,
}

impl Fumble {
	pub fn from_captures(caps: &Captures<'_>) -> Self {
		Fumble {
			fumbler: capture(caps, "fumbler"),
			forced_by: capture(caps, "fumbForcer"),
			recovered_by: capture(caps, "fumbRecoverer"),
			recovery_side: capture(caps, "fumbRecFieldSide"),
			recovery_yd_line: capture(caps, "fumbRecYdLine"),
			return_yds: capture(caps, "fumbRetYds"),
		}
	}
}

impl Extract for Fumble {
	fn extract(&self, out: &mut ExtractedFields) {
		out.insert("fumbler", self.fumbler.as_deref());
		out.insert("fumbForcer", self.forced_by.as_deref());
		out.insert("fumbRecoverer", self.recovered_by.as_deref());
		out.insert("fumbRecFieldSide", self.recovery_side.as_deref());
		out.insert("fumbRecYdLine", self.recovery_yd_line.as_deref());
		out.insert("fumbRetYds", self.return_yds.as_deref());
	}
}

/// ", touchdown" or ", safety" at the end of a play.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Score {
	pub touchdown: Option<String>,
	pub safety: Option<String>,
}

impl Score {
	pub fn from_captures(caps: &Captures<'_>) -> Self {
		Score {
			touchdown: capture(caps, "isTD"),
			safety: capture(caps, "isSafety"),
		}
	}
}

impl Extract for Score {
	fn extract(&self, out: &mut ExtractedFields) {
		out.insert("isTD", self.touchdown.as_deref());
		out.insert("isSafety", self.safety.as_deref());
	}
}

/// "Penalty on X: <name> (Declined | N yards) [(no play)]"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Penalty {
	pub on: Option<String>,
	pub name: Option<String>,
	pub declined: Option<String>,
	pub yards: Option<String>,
}

impl Penalty {
	pub fn from_captures(caps: &Captures<'_>) -> Self {
		Penalty {
			on: capture(caps, "penOn"),
			name: capture(caps, "penalty"),
			declined: capture(caps, "penDeclined"),
			yards: capture(caps, "penYds"),
		}
	}
}

impl Extract for Penalty {
	fn extract(&self, out: &mut ExtractedFields) {
		out.insert("penOn", self.on.as_deref());
		out.insert("penalty", self.name.as_deref());
		out.insert("penDeclined", self.declined.as_deref());
		out.insert("penYds", self.yards.as_deref());
	}
}

/// "<challenger> challenged ... the play was upheld|overturned."
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Challenge {
	pub challenger: Option<String>,
	pub call: Option<String>,
}

impl Challenge {
	pub fn from_captures(caps: &Captures<'_>) -> Self {
		Challenge {
			challenger: capture(caps, "challenger"),
			call: capture(caps, "callUpheld"),
		}
	}

	pub fn overturned(&self) -> bool {
		self.call.as_deref().is_some_and(|c| c.eq_ignore_ascii_case("overturned"))
	}
}

impl Extract for Challenge {
	fn extract(&self, out: &mut ExtractedFields) {
		out.mark("isChallenge");
		out.insert("challenger", self.challenger.as_deref());
		out.insert("callUpheld", self.call.as_deref());
	}
}

//! One record type per play category, holding exactly what its grammar captures.

use crate::parsers::clauses::{Fumble, Penalty, Score, Tackle};
use crate::parsers::fields::{capture, Extract, ExtractedFields};
use crate::schema::PlayCategory;
use regex::Captures;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Kickoff {
	pub kicker: Option<String>,
	pub onside: Option<String>,
	pub yards: Option<String>,
	pub returner: Option<String>,
	pub return_yds: Option<String>,
	pub muffed_catch: Option<String>,
	pub muffed_by: Option<String>,
	pub muff_recoverer: Option<String>,
	pub muff_return_yds: Option<String>,
	pub onside_recoverer: Option<String>,
	pub out_of_bounds: Option<String>,
	pub touchback: Option<String>,
	pub tackle: Tackle,
	pub fumble: Fumble,
	pub score: Score,
	pub penalty: Penalty,
}

impl Kickoff {
	pub fn from_captures(caps: &Captures<'_>) -> Self {
		Kickoff {
			kicker: capture(caps, "koKicker"),
			onside: capture(caps, "isOnside"),
			yards: capture(caps, "koYds"),
			returner: capture(caps, "koReturner"),
			return_yds: capture(caps, "koRetYds"),
			muffed_catch: capture(caps, "isMuffedCatch"),
			muffed_by: capture(caps, "muffedBy"),
			muff_recoverer: capture(caps, "muffRecoverer"),
			muff_return_yds: capture(caps, "muffRetYds"),
			onside_recoverer: capture(caps, "onsideRecoverer"),
			out_of_bounds: capture(caps, "oob"),
			touchback: capture(caps, "isTouchback"),
			tackle: Tackle::from_captures(caps),
			fumble: Fumble::from_captures(caps),
			score: Score::from_captures(caps),
			penalty: Penalty::from_captures(caps),
		}
	}
}

impl Extract for Kickoff {
	fn extract(&self, out: &mut ExtractedFields) {
		out.insert("koKicker", self.kicker.as_deref());
		out.insert("isOnside", self.onside.as_deref());
		out.insert("koYds", self.yards.as_deref());
		out.insert("koReturner", self.returner.as_deref());
		out.insert("koRetYds", self.return_yds.as_deref());
		out.insert("isMuffedCatch", self.muffed_catch.as_deref());
		out.insert("muffedBy", self.muffed_by.as_deref());
		out.insert("muffRecoverer", self.muff_recoverer.as_deref());
		out.insert("muffRetYds", self.muff_return_yds.as_deref());
		out.insert("onsideRecoverer", self.onside_recoverer.as_deref());
		out.insert("oob", self.out_of_bounds.as_deref());
		out.insert("isTouchback", self.touchback.as_deref());
		self.tackle.extract(out);
		self.fumble.extract(out);
		self.score.extract(out);
		self.penalty.extract(out);
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timeout {
	pub number: Option<String>,
	pub team: Option<String>,
}

impl Timeout {
	pub fn from_captures(caps: &Captures<'_>) -> Self {
		Timeout {
			number: capture(caps, "timeoutNum"),
			team: capture(caps, "timeoutTeam"),
		}
	}
}

impl Extract for Timeout {
	fn extract(&self, out: &mut ExtractedFields) {
		out.insert("timeoutNum", self.number.as_deref());
		out.insert("timeoutTeam", self.team.as_deref());
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldGoal {
	pub kicker: Option<String>,
	pub distance: Option<String>,
	pub good: Option<String>,
	pub blocked: Option<String>,
	pub blocker: Option<String>,
	pub block_recoverer: Option<String>,
	pub block_return_yds: Option<String>,
	pub score: Score,
	pub penalty: Penalty,
}

impl FieldGoal {
	pub fn from_captures(caps: &Captures<'_>) -> Self {
		FieldGoal {
			kicker: capture(caps, "fgKicker"),
			distance: capture(caps, "fgDist"),
			good: capture(caps, "fgGood"),
			blocked: capture(caps, "isBlocked"),
			blocker: capture(caps, "fgBlocker"),
			block_recoverer: capture(caps, "fgBlockRecoverer"),
			block_return_yds: capture(caps, "fgBlockRetYds"),
			score: Score::from_captures(caps),
			penalty: Penalty::from_captures(caps),
		}
	}
}

impl Extract for FieldGoal {
	fn extract(&self, out: &mut ExtractedFields) {
		out.insert("fgKicker", self.kicker.as_deref());
		out.insert("fgDist", self.distance.as_deref());
		out.insert("fgGood", self.good.as_deref());
		out.insert("isBlocked", self.blocked.as_deref());
		out.insert("fgBlocker", self.blocker.as_deref());
		out.insert("fgBlockRecoverer", self.block_recoverer.as_deref());
		out.insert("fgBlockRetYds", self.block_return_yds.as_deref());
		self.score.extract(out);
		self.penalty.extract(out);
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Punt {
	pub punter: Option<String>,
	pub blocked: Option<String>,
	pub blocker: Option<String>,
	pub block_recoverer: Option<String>,
	pub block_return_yds: Option<String>,
	pub yards: Option<String>,
	pub fair_catch: Option<String>,
	pub fair_catcher: Option<String>,
	pub out_of_bounds: Option<String>,
	pub muffed_catch: Option<String>,
	pub muffed_by: Option<String>,
	pub muff_recoverer: Option<String>,
	pub muff_return_yds: Option<String>,
	pub returner: Option<String>,
	pub return_yds: Option<String>,
	pub touchback: Option<String>,
	pub tackle: Tackle,
	pub fumble: Fumble,
	pub score: Score,
	pub penalty: Penalty,
}

impl Punt {
	pub fn from_captures(caps: &Captures<'_>) -> Self {
		Punt {
			punter: capture(caps, "punter"),
			blocked: capture(caps, "isBlocked"),
			blocker: capture(caps, "puntBlocker"),
			block_recoverer: capture(caps, "puntBlockRecoverer"),
			block_return_yds: capture(caps, "puntBlockRetYds"),
			yards: capture(caps, "puntYds"),
			fair_catch: capture(caps, "isFairCatch"),
			fair_catcher: capture(caps, "fairCatcher"),
			out_of_bounds: capture(caps, "oob"),
			muffed_catch: capture(caps, "isMuffedCatch"),
			muffed_by: capture(caps, "muffedBy"),
			muff_recoverer: capture(caps, "muffRecoverer"),
			muff_return_yds: capture(caps, "muffRetYds"),
			returner: capture(caps, "puntReturner"),
			return_yds: capture(caps, "puntRetYds"),
			touchback: capture(caps, "isTouchback"),
			tackle: Tackle::from_captures(caps),
			fumble: Fumble::from_captures(caps),
			score: Score::from_captures(caps),
			penalty: Penalty::from_captures(caps),
		}
	}
}

impl Extract for Punt {
	fn extract(&self, out: &mut ExtractedFields) {
		out.insert("punter", self.punter.as_deref());
		out.insert("isBlocked", self.blocked.as_deref());
		out.insert("puntBlocker", self.blocker.as_deref());
		out.insert("puntBlockRecoverer", self.block_recoverer.as_deref());
		out.insert("puntBlockRetYds", self.block_return_yds.as_deref());
		out.insert("puntYds", self.yards.as_deref());
		out.insert("isFairCatch", self.fair_catch.as_deref());
		out.insert("fairCatcher", self.fair_catcher.as_deref());
		out.insert("oob", self.out_of_bounds.as_deref());
		out.insert("isMuffedCatch", self.muffed_catch.as_deref());
		out.insert("muffedBy", self.muffed_by.as_deref());
		out.insert("muffRecoverer", self.muff_recoverer.as_deref());
		out.insert("muffRetYds", self.muff_return_yds.as_deref());
		out.insert("puntReturner", self.returner.as_deref());
		out.insert("puntRetYds", self.return_yds.as_deref());
		out.insert("isTouchback", self.touchback.as_deref());
		self.tackle.extract(out);
		self.fumble.extract(out);
		self.score.extract(out);
		self.penalty.extract(out);
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Kneel {
	pub quarterback: Option<String>,
	pub yards: Option<String>,
}

impl Kneel {
	pub fn from_captures(caps: &Captures<'_>) -> Self {
		Kneel {
			quarterback: capture(caps, "kneelQB"),
			yards: capture(caps, "kneelYds"),
		}
	}
}

impl Extract for Kneel {
	fn extract(&self, out: &mut ExtractedFields) {
		out.insert("kneelQB", self.quarterback.as_deref());
		out.insert("kneelYds", self.yards.as_deref());
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Spike {
	pub quarterback: Option<String>,
}

impl Extract for Spike {
	fn extract(&self, out: &mut ExtractedFields) {
		out.insert("spikeQB", self.quarterback.as_deref());
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtraPoint {
	pub kicker: Option<String>,
	pub good: Option<String>,
}

impl Extract for ExtraPoint {
	fn extract(&self, out: &mut ExtractedFields) {
		out.insert("xpKicker", self.kicker.as_deref());
		out.insert("xpGood", self.good.as_deref());
	}
}

/// "Two Point Attempt: <inner play>, conversion succeeds|fails"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwoPointConversion {
	pub attempt: Option<String>,
	pub success: Option<String>,
	/// The attempt itself, classified on its own.
	pub inner: Box<PlayDetails>,
}

impl Extract for TwoPointConversion {
	fn extract(&self, out: &mut ExtractedFields) {
		out.insert("twoPoint", self.attempt.as_deref());
		out.insert("twoPointSuccess", self.success.as_deref());
		self.inner.extract(out);
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sack {
	pub sacker1: Option<String>,
	pub sacker2: Option<String>,
	pub yards: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Interception {
	pub interceptor: Option<String>,
	pub field_side: Option<String>,
	pub yd_line: Option<String>,
	pub return_yds: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Throw {
	pub completion: Option<String>,
	pub location: Option<String>,
	pub target: Option<String>,
	pub yards: Option<String>,
	pub interception: Option<Interception>,
	pub tackle: Tackle,
}

/// A dropback ends either in a sack or in a throw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PassAction {
	Sack(Sack),
	Throw(Throw),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pass {
	pub passer: Option<String>,
	pub action: PassAction,
	pub fumble: Fumble,
	pub score: Score,
	pub penalty: Penalty,
}

impl Pass {
	pub fn from_captures(caps: &Captures<'_>) -> Self {
		let action = if caps.name("sackYds").is_some() {
			PassAction::Sack(Sack {
				sacker1: capture(caps, "sacker1"),
				sacker2: capture(caps, "sacker2"),
				yards: capture(caps, "sackYds"),
			})
		} else {
			let interception = caps.name("interceptor").map(|_| Interception {
				interceptor: capture(caps, "interceptor"),
				field_side: capture(caps, "intFieldSide"),
				yd_line: capture(caps, "intYdLine"),
				return_yds: capture(caps, "intRetYds"),
			});
			PassAction::Throw(Throw {
				completion: capture(caps, "isComplete"),
				location: capture(caps, "passLoc"),
				target: capture(caps, "target"),
				yards: capture(caps, "passYds"),
				interception,
				tackle: Tackle::from_captures(caps),
			})
		};

		Pass {
			passer: capture(caps, "passer"),
			action,
			fumble: Fumble::from_captures(caps),
			score: Score::from_captures(caps),
			penalty: Penalty::from_captures(caps),
		}
	}
}

impl Extract for Interception {
	fn extract(&self, out: &mut ExtractedFields) {
		out.insert("interceptor", self.interceptor.as_deref());
		out.insert("intFieldSide", self.field_side.as_deref());
		out.insert("intYdLine", self.yd_line.as_deref());
		out.insert("intRetYds", self.return_yds.as_deref());
	}
}

impl Extract for Pass {
	fn extract(&self, out: &mut ExtractedFields) {
		out.insert("passer", self.passer.as_deref());
		match &self.action {
			PassAction::Sack(sack) => {
				out.insert("sacker1", sack.sacker1.as_deref());
				out.insert("sacker2", sack.sacker2.as_deref());
				out.insert("sackYds", sack.yards.as_deref());
			}
			PassAction::Throw(throw) => {
				out.insert("isComplete", throw.completion.as_deref());
				out.insert("passLoc", throw.location.as_deref());
				out.insert("target", throw.target.as_deref());
				out.insert("passYds", throw.yards.as_deref());
				throw.interception.extract(out);
				throw.tackle.extract(out);
			}
		}
		self.fumble.extract(out);
		self.score.extract(out);
		self.penalty.extract(out);
	}
}

/// A foul called before the snap; the description is only the penalty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresnapPenalty {
	pub penalty: Penalty,
}

impl Extract for PresnapPenalty {
	fn extract(&self, out: &mut ExtractedFields) {
		self.penalty.extract(out);
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Run {
	pub rusher: Option<String>,
	pub direction: Option<String>,
	pub yards: Option<String>,
	pub tackle: Tackle,
	pub fumble: Fumble,
	pub score: Score,
	pub penalty: Penalty,
}

impl Run {
	pub fn from_captures(caps: &Captures<'_>) -> Self {
		Run {
			rusher: capture(caps, "rusher"),
			direction: capture(caps, "rushDir"),
			yards: capture(caps, "rushYds"),
			tackle: Tackle::from_captures(caps),
			fumble: Fumble::from_captures(caps),
			score: Score::from_captures(caps),
			penalty: Penalty::from_captures(caps),
		}
	}
}

impl Extract for Run {
	fn extract(&self, out: &mut ExtractedFields) {
		out.insert("rusher", self.rusher.as_deref());
		out.insert("rushDir", self.direction.as_deref());
		out.insert("rushYds", self.yards.as_deref());
		self.tackle.extract(out);
		self.fumble.extract(out);
		self.score.extract(out);
		self.penalty.extract(out);
	}
}

/// What a description was parsed into, one variant per category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayDetails {
	Kickoff(Kickoff),
	Timeout(Timeout),
	FieldGoal(FieldGoal),
	Punt(Punt),
	Kneel(Kneel),
	Spike(Spike),
	ExtraPoint(ExtraPoint),
	TwoPointConversion(TwoPointConversion),
	Pass(Pass),
	PresnapPenalty(PresnapPenalty),
	Run(Run),
	Unrecognized,
}

impl PlayDetails {
	pub fn category(&self) -> PlayCategory {
		match self {
			PlayDetails::Kickoff(_) => PlayCategory::Kickoff,
			PlayDetails::Timeout(_) => PlayCategory::Timeout,
			PlayDetails::FieldGoal(_) => PlayCategory::FieldGoal,
			PlayDetails::Punt(_) => PlayCategory::Punt,
			PlayDetails::Kneel(_) => PlayCategory::Kneel,
			PlayDetails::Spike(_) => PlayCategory::Spike,
			PlayDetails::ExtraPoint(_) => PlayCategory::ExtraPoint,
			PlayDetails::TwoPointConversion(_) => PlayCategory::TwoPointConversion,
			PlayDetails::Pass(_) => PlayCategory::Pass,
			PlayDetails::PresnapPenalty(_) => PlayCategory::PresnapPenalty,
			PlayDetails::Run(_) => PlayCategory::Run,
			PlayDetails::Unrecognized => PlayCategory::Unrecognized,
		}
	}
}

impl Extract for PlayDetails {
	fn extract(&self, out: &mut ExtractedFields) {
		if let Some(flag) = self.category().flag() {
			out.mark(flag);
		}
		match self {
			PlayDetails::Kickoff(play) => play.extract(out),
			PlayDetails::Timeout(play) => play.extract(out),
			PlayDetails::FieldGoal(play) => play.extract(out),
			PlayDetails::Punt(play) => play.extract(out),
			PlayDetails::Kneel(play) => play.extract(out),
			PlayDetails::Spike(play) => play.extract(out),
			PlayDetails::ExtraPoint(play) => play.extract(out),
			PlayDetails::TwoPointConversion(play) => play.extract(out),
			PlayDetails::Pass(play) => play.extract(out),
			PlayDetails::PresnapPenalty(play) => play.extract(out),
			PlayDetails::Run(play) => play.extract(out),
			PlayDetails::Unrecognized => {}
		}
	}
}

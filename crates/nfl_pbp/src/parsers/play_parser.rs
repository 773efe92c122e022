use crate::parsers::clauses::{Challenge, Penalty};
use crate::parsers::fields::{capture, Extract, ExtractedFields};
use crate::parsers::patterns::*;
use crate::parsers::play_type::*;
use crate::schema::PlayCategory;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::debug;

/// Tries one category's grammar against a description.
pub trait PlayMatcher: Sync {
	fn category(&self) -> PlayCategory;

	fn attempt(&self, description: &str) -> Option<PlayDetails>;
}

/// A category recognized by a single grammar.
pub struct GrammarMatcher {
	category: PlayCategory,
	grammar: &'static Lazy<Regex>,
	build: fn(&Captures<'_>) -> PlayDetails,
}

impl PlayMatcher for GrammarMatcher {
	fn category(&self) -> PlayCategory {
		self.category
	}

	fn attempt(&self, description: &str) -> Option<PlayDetails> {
		self.grammar.captures(description).map(|caps| (self.build)(&caps))
	}
}

/// Two point attempts wrap another play, which is classified on its own.
pub struct TwoPointMatcher;

impl PlayMatcher for TwoPointMatcher {
	fn category(&self) -> PlayCategory {
		PlayCategory::TwoPointConversion
	}

	fn attempt(&self, description: &str) -> Option<PlayDetails> {
		let caps = TWO_POINT_RE.captures(description)?;
		let attempt = capture(&caps, "twoPoint");
		let inner = attempt.as_deref().map_or(PlayDetails::Unrecognized, classify_details);

		Some(PlayDetails::TwoPointConversion(TwoPointConversion {
			attempt,
			success: capture(&caps, "twoPointSuccess"),
			inner: Box::new(inner),
		}))
	}
}

static KICKOFF: GrammarMatcher = GrammarMatcher {
	category: PlayCategory::Kickoff,
	grammar: &KICKOFF_RE,
	build: |caps| PlayDetails::Kickoff(Kickoff::from_captures(caps)),
};

static TIMEOUT: GrammarMatcher = GrammarMatcher {
	category: PlayCategory::Timeout,
	grammar: &TIMEOUT_RE,
	build: |caps| PlayDetails::Timeout(Timeout::from_captures(caps)),
};

static FIELD_GOAL: GrammarMatcher = GrammarMatcher {
	category: PlayCategory::FieldGoal,
	grammar: &FIELD_GOAL_RE,
	build: |caps| PlayDetails::FieldGoal(FieldGoal::from_captures(caps)),
};

static PUNT: GrammarMatcher = GrammarMatcher {
	category: PlayCategory::Punt,
	grammar: &PUNT_RE,
	build: |caps| PlayDetails::Punt(Punt::from_captures(caps)),
};

static KNEEL: GrammarMatcher = GrammarMatcher {
	category: PlayCategory::Kneel,
	grammar: &KNEEL_RE,
	build: |caps| PlayDetails::Kneel(Kneel::from_captures(caps)),
};

static SPIKE: GrammarMatcher = GrammarMatcher {
	category: PlayCategory::Spike,
	grammar: &SPIKE_RE,
	build: |caps| {
		PlayDetails::Spike(Spike {
			quarterback: capture(caps, "spikeQB"),
		})
	},
};

static EXTRA_POINT: GrammarMatcher = GrammarMatcher {
	category: PlayCategory::ExtraPoint,
	grammar: &EXTRA_POINT_RE,
	build: |caps| {
		PlayDetails::ExtraPoint(ExtraPoint {
			kicker: capture(caps, "xpKicker"),
			good: capture(caps, "xpGood"),
		})
	},
};

static TWO_POINT: TwoPointMatcher = TwoPointMatcher;

static PASS: GrammarMatcher = GrammarMatcher {
	category: PlayCategory::Pass,
	grammar: &PASS_RE,
	build: |caps| PlayDetails::Pass(Pass::from_captures(caps)),
};

static PRESNAP_PENALTY: GrammarMatcher = GrammarMatcher {
	category: PlayCategory::PresnapPenalty,
	grammar: &PRESNAP_PENALTY_RE,
	build: |caps| {
		PlayDetails::PresnapPenalty(PresnapPenalty {
			penalty: Penalty::from_captures(caps),
		})
	},
};

static RUN: GrammarMatcher = GrammarMatcher {
	category: PlayCategory::Run,
	grammar: &RUN_RE,
	build: |caps| PlayDetails::Run(Run::from_captures(caps)),
};

/// Matchers in [`PlayCategory::PRIORITY`] order; the first match wins.
pub static MATCHERS: [&dyn PlayMatcher; 11] = [
	&KICKOFF,
	&TIMEOUT,
	&FIELD_GOAL,
	&PUNT,
	&KNEEL,
	&SPIKE,
	&EXTRA_POINT,
	&TWO_POINT,
	&PASS,
	&PRESNAP_PENALTY,
	&RUN,
];

/// A classified description together with the metadata common to all categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedPlay {
	details: PlayDetails,
	challenge: Option<Challenge>,
	is_lateral: bool,
}

impl ClassifiedPlay {
	fn unrecognized() -> Self {
		ClassifiedPlay {
			details: PlayDetails::Unrecognized,
			challenge: None,
			is_lateral: false,
		}
	}

	pub fn category(&self) -> PlayCategory {
		self.details.category()
	}

	pub fn details(&self) -> &PlayDetails {
		&self.details
	}

	pub fn challenge(&self) -> Option<&Challenge> {
		self.challenge.as_ref()
	}

	pub fn is_lateral(&self) -> bool {
		self.is_lateral
	}

	/// Flattened captures; empty for unrecognized plays.
	pub fn extracted(&self) -> ExtractedFields {
		let mut fields = ExtractedFields::new();
		if !self.category().is_recognized() {
			return fields;
		}
		self.details.extract(&mut fields);
		self.challenge.extract(&mut fields);
		if self.is_lateral {
			fields.mark("isLateral");
		}
		fields
	}

	pub fn into_parts(self) -> (PlayCategory, ExtractedFields) {
		let fields = self.extracted();
		(self.category(), fields)
	}
}

/// Runs the category matchers over `description` in priority order.
pub fn classify_details(description: &str) -> PlayDetails {
	MATCHERS.iter().find_map(|matcher| matcher.attempt(description)).unwrap_or(PlayDetails::Unrecognized)
}

/// Classifies one play description. Never fails; unmatched text is `Unrecognized`.
pub fn classify(description: &str) -> ClassifiedPlay {
	let mut text = description.trim();

	let mut challenge = None;
	if let Some(caps) = CHALLENGE_RE.captures(text) {
		let review = Challenge::from_captures(&caps);
		// only the play as called after review is kept
		if review.overturned() {
			if let Some(whole) = caps.get(0) {
				text = text[whole.end()..].trim();
			}
		}
		challenge = Some(review);
	}

	let details = classify_details(text);
	if !details.category().is_recognized() {
		debug!(description, "unrecognized play description");
		return ClassifiedPlay::unrecognized();
	}

	ClassifiedPlay {
		details,
		challenge,
		is_lateral: text.contains("lateral"),
	}
}

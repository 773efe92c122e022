//! Turns the raw captures of one play into typed columns.

use crate::parsers::patterns::{pass_location_code, rush_direction_code};
use crate::parsers::ExtractedFields;
use crate::schema::{ClockRemaining, FieldPosition, FieldValue, NormalizedPlay, PlayCategory, Quarter, RawPlayRow};

/// Captured keywords that become `true` when they equal the given text.
const KEYWORD_FLAGS: [(&str, &str); 11] = [
	("callUpheld", "upheld"),
	("fgGood", "good"),
	("isBlocked", "blocked"),
	("isComplete", "complete"),
	("isFairCatch", "fair catch"),
	("isOnside", "onside"),
	("isTD", ", touchdown"),
	("isTouchback", ", touchback"),
	("penDeclined", "declined"),
	("twoPointSuccess", "succeeds"),
	("xpGood", "good"),
];

/// Flags that are `true` whenever their source field was captured.
const PRESENCE_FLAGS: [(&str, &str); 7] = [
	("isChallenge", "isChallenge"),
	("isFumble", "fumbler"),
	("isInt", "interceptor"),
	("isLateral", "isLateral"),
	("isMuffedCatch", "isMuffedCatch"),
	("isSack", "sackYds"),
	("oob", "oob"),
];

pub const INT_FIELDS: [&str; 22] = [
	"down",
	"fgBlockRetYds",
	"fgDist",
	"fumbRecYdLine",
	"fumbRetYds",
	"intRetYds",
	"intYdLine",
	"kneelYds",
	"koRetYds",
	"koYds",
	"muffRetYds",
	"passYds",
	"pbp_score_aw",
	"pbp_score_hm",
	"penYds",
	"puntBlockRetYds",
	"puntRetYds",
	"puntYds",
	"rushYds",
	"sackYds",
	"timeoutNum",
	"yds_to_go",
];

pub const FLOAT_FIELDS: [&str; 3] = ["exp_pts_after", "exp_pts_before", "home_wp"];

pub const STRING_FIELDS: [&str; 35] = [
	"challenger",
	"detail",
	"fairCatcher",
	"fgBlockRecoverer",
	"fgBlocker",
	"fgKicker",
	"fumbForcer",
	"fumbRecFieldSide",
	"fumbRecoverer",
	"fumbler",
	"intFieldSide",
	"interceptor",
	"kneelQB",
	"koKicker",
	"koReturner",
	"muffRecoverer",
	"muffedBy",
	"onsideRecoverer",
	"passer",
	"penOn",
	"puntBlockRecoverer",
	"puntBlocker",
	"puntReturner",
	"punter",
	"qtr_time_remain",
	"rusher",
	"sacker1",
	"sacker2",
	"spikeQB",
	"tackler1",
	"tackler2",
	"target",
	"timeoutTeam",
	"twoPoint",
	"xpKicker",
];

struct Source<'a> {
	extracted: &'a ExtractedFields,
	row: &'a RawPlayRow,
}

impl<'a> Source<'a> {
	/// Captured value first, then the raw column of the same name.
	fn raw(&self, name: &str) -> Option<&'a str> {
		self.extracted
			.get(name)
			.or_else(|| self.row.get(name))
			.map(str::trim)
			.filter(|v| !v.is_empty())
	}

	fn int(&self, name: &str) -> Option<i64> {
		self.raw(name).and_then(|v| v.parse::<i64>().ok())
	}

	fn float(&self, name: &str) -> Option<f64> {
		self.raw(name).and_then(|v| v.parse::<f64>().ok())
	}

	fn equals(&self, name: &str, keyword: &str) -> bool {
		self.raw(name).is_some_and(|v| v.eq_ignore_ascii_case(keyword))
	}
}

/// Types every canonical column of one play.
///
/// Never fails: unparsable or absent values become [`FieldValue::Missing`],
/// except run and pass yardage which fall back to 0 ("no gain").
pub fn normalize(category: PlayCategory, extracted: &ExtractedFields, row: &RawPlayRow) -> NormalizedPlay {
	let src = Source { extracted, row };
	let mut play = NormalizedPlay::new(category);

	// context columns nobody types are carried as text
	for (name, value) in row.iter() {
		play.set(name, FieldValue::text(value));
	}

	for flag in PlayCategory::PRIORITY.iter().filter_map(|c| c.flag()) {
		play.set(flag, FieldValue::Bool(extracted.contains(flag)));
	}
	for (name, keyword) in KEYWORD_FLAGS {
		play.set(name, FieldValue::Bool(src.equals(name, keyword)));
	}
	for (name, source) in PRESENCE_FLAGS {
		play.set(name, FieldValue::Bool(src.raw(source).is_some()));
	}

	let detail = src.raw("detail").unwrap_or_default();
	play.set(
		"isNoPlay",
		FieldValue::Bool(detail.contains(" (no play)") && !detail.contains("penalty enforced in end zone")),
	);
	play.set(
		"isSafety",
		FieldValue::Bool(src.raw("isSafety").is_some_and(|v| v.eq_ignore_ascii_case(", safety")) || detail.contains("enforced in end zone, safety")),
	);

	play.set("passLoc", FieldValue::text(src.raw("passLoc").and_then(pass_location_code)));
	play.set("rushDir", FieldValue::text(src.raw("rushDir").and_then(rush_direction_code)));

	for name in INT_FIELDS {
		play.set(name, FieldValue::int(src.int(name)));
	}
	for name in FLOAT_FIELDS {
		play.set(name, FieldValue::float(src.float(name)));
	}
	for name in STRING_FIELDS {
		play.set(name, FieldValue::text(src.raw(name)));
	}

	if play.flag("isRun") {
		play.set("rushYds", FieldValue::Int(src.int("rushYds").unwrap_or(0)));
	}
	if play.flag("isPass") {
		play.set("passYds", FieldValue::Int(src.int("passYds").unwrap_or(0)));
	}

	let penalty = src.raw("penalty");
	play.set("penalty", FieldValue::text(penalty));
	play.set("isPenalty", FieldValue::Bool(penalty.is_some()));

	let quarter = src.raw("quarter").and_then(|q| q.parse::<Quarter>().ok());
	play.set("quarter", FieldValue::int(quarter.map(Quarter::number)));

	let clock = src.raw("qtr_time_remain").and_then(|c| c.parse::<ClockRemaining>().ok());
	let secs_elapsed = quarter.zip(clock).map(|(quarter, clock)| clock.secs_elapsed(quarter));
	play.set("secsElapsed", FieldValue::int(secs_elapsed));

	set_field_position(&mut play, &src);

	let epa = src.float("exp_pts_after").zip(src.float("exp_pts_before")).map(|(after, before)| after - before);
	play.set("team_epa", FieldValue::float(epa));
	play.set("opp_epa", FieldValue::float(epa.map(|e| -e)));

	play.set("is_error", FieldValue::Bool(!category.is_recognized()));

	play
}

fn set_field_position(play: &mut NormalizedPlay, src: &Source<'_>) {
	// extra points are always spotted at the two
	if play.flag("isXP") {
		play.set("fieldSide", FieldValue::Missing);
		play.set("ydLine", FieldValue::Missing);
		play.set("distToGoal", FieldValue::int(src.int("distToGoal")));
		return;
	}

	let position = FieldPosition::from_location(src.raw("location"));
	let dist_to_goal = match src.raw("team") {
		Some(offense) => position.dist_to_goal(offense),
		None => src.int("distToGoal"),
	};

	play.set("fieldSide", FieldValue::text(position.side.as_deref()));
	play.set("ydLine", FieldValue::int(position.yd_line));
	play.set("distToGoal", FieldValue::int(dist_to_goal));
}

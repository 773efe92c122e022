//! Regular expressions for play descriptions.
//!
//! Every grammar is assembled from the shared clauses below. `{player}` in a
//! template is replaced by [`PLAYER`] before compiling, and all grammars are
//! case-insensitive.

use once_cell::sync::Lazy;
use regex::Regex;

/// Player identifiers look like `BradTo00`.
pub const PLAYER: &str = r"\S{6,8}\d{2}";

pub const RUSH_DIRECTIONS: [(&str, &str); 8] = [
	("left end", "LE"),
	("left tackle", "LT"),
	("left guard", "LG"),
	("up the middle", "M"),
	("middle", "M"),
	("right end", "RE"),
	("right tackle", "RT"),
	("right guard", "RG"),
];

pub const PASS_LOCATIONS: [(&str, &str); 6] = [
	("short left", "SL"),
	("short middle", "SM"),
	("short right", "SR"),
	("deep left", "DL"),
	("deep middle", "DM"),
	("deep right", "DR"),
];

const TACKLE: &str = r"(?: \(tackle by (?P<tackler1>{player})(?: and (?P<tackler2>{player}))?\))?";

// Only the first fumbler and the last recoverer are kept on multi-fumble plays.
const FUMBLE: &str = concat!(
	r"(?:",
	r"\.? ?(?P<fumbler>{player}) fumbles",
	r"(?: \(forced by (?P<fumbForcer>{player})\))?",
	r"(?:.*, recovered by (?P<fumbRecoverer>{player}) at )?",
	r"(?:, ball out of bounds at )?",
	r"(?:(?P<fumbRecFieldSide>[a-z]+)?-?(?P<fumbRecYdLine>-?\d+))?",
	r"(?: and returned for (?P<fumbRetYds>-?\d*) yards)?",
	r")?"
);

const TD_SAFETY: &str = r"(?:(?P<isTD>, touchdown)|(?P<isSafety>, safety))?";

const PENALTY: &str = concat!(
	r"(?:.*?",
	r"\. Penalty on (?P<penOn>{player}|): ",
	r"(?P<penalty>[^\(,]+)",
	r"(?: \((?P<penDeclined>Declined)\)|, (?P<penYds>\d*) yards?)",
	r"(?: \(no play\))?",
	r")?"
);

const CHALLENGE: &str = r"^.+\. (?P<challenger>.+?) challenged.*? the play was (?P<callUpheld>upheld|overturned)\.";

const KICKOFF: &str = concat!(
	r"(?P<koKicker>{player}) kicks (?:off|(?P<isOnside>onside)) (?:(?P<koYds>\d+) yards?|no gain)",
	r"(?:, (?:returned|recovered) by (?P<koReturner>{player})(?: for (?:(?P<koRetYds>-?\d+) yards?|no gain))?)?",
	r"(?:(?P<isMuffedCatch>, muffed catch by )(?P<muffedBy>{player}),(?: recovered by (?P<muffRecoverer>{player}))?",
	r"(?: and returned for (?:(?P<muffRetYds>-?\d+) yards|no gain))?)?",
	r"(?:, recovered by (?P<onsideRecoverer>{player}))?",
	r"(?:(?P<oob>, out of bounds))?",
	r"(?:(?P<isTouchback>, touchback))?",
);

const TIMEOUT: &str = r"Timeout #(?P<timeoutNum>\d) by (?P<timeoutTeam>.+)";

const FIELD_GOAL: &str = concat!(
	r"(?P<fgKicker>{player}) (?P<fgDist>\d+) yard field goal (?P<fgGood>good|no good)",
	r"(?:, (?P<isBlocked>blocked) by (?P<fgBlocker>{player}))?",
	r"(?:, recovered by (?P<fgBlockRecoverer>{player}))?",
	r"(?: and returned for (?:(?P<fgBlockRetYds>-?\d+) yards?|no gain))?",
);

const PUNT: &str = concat!(
	r".*?(?P<punter>{player})",
	r"(?:",
	r" punts, (?P<isBlocked>blocked) by (?P<puntBlocker>{player})",
	r"(?:, recovered by (?P<puntBlockRecoverer>{player})(?: and returned (?:(?P<puntBlockRetYds>-?\d+) yards|no gain))?)?",
	r"|",
	r" punts (?P<puntYds>\d+) yards?",
	r")",
	r"(?:",
	r", (?P<isFairCatch>fair catch) by (?P<fairCatcher>{player})",
	r"|, (?P<oob>out of bounds)",
	r"|(?P<isMuffedCatch>, muffed catch by )(?P<muffedBy>{player}), recovered by (?P<muffRecoverer>{player}) and returned for (?:(?P<muffRetYds>\d+) yards|no gain)",
	r"|, returned by (?P<puntReturner>{player}) for (?:(?P<puntRetYds>-?\d+) yards?|no gain)",
	r"|(?P<isTouchback>, touchback)",
	r")?",
);

const KNEEL: &str = r"(?P<kneelQB>{player}) kneels for (?:(?P<kneelYds>-?\d+) yards?|no gain)";

const SPIKE: &str = r"(?P<spikeQB>{player}) spiked the ball";

const EXTRA_POINT: &str = r"(?:(?P<xpKicker>{player}) kicks)? ?extra point (?P<xpGood>good|no good)";

const TWO_POINT: &str = r"Two Point Attempt: (?P<twoPoint>.*?),?\s+conversion\s+(?P<twoPointSuccess>succeeds|fails)";

const SACK: &str = r"(?:sacked (?:by (?P<sacker1>{player})(?: and (?P<sacker2>{player}))? )?for (?P<sackYds>-?\d+) yards?)";

const INTERCEPTION: &str = concat!(
	r"(?: is intercepted by (?P<interceptor>{player}) at ",
	r"(?:(?P<intFieldSide>[a-z]*)?-?(?P<intYdLine>-?\d*))?",
	r"(?: and returned for (?P<intRetYds>-?\d+) yards?\.?)?)?",
);

const PASS_YARDS: &str = r"(?: for (?:(?P<passYds>-?\d+) yards?|no gain))";

const PRESNAP_PENALTY: &str = concat!(
	r"^Penalty on (?P<penOn>{player}|\w{3}): ",
	r"(?P<penalty>[^\(,]+)",
	r"(?: \((?P<penDeclined>Declined)\)|, (?P<penYds>\d*) yards?|.*?(?: \(no play\)))",
);

fn options(name: &str, table: &[(&str, &str)]) -> String {
	let alternatives: Vec<&str> = table.iter().map(|(raw, _)| *raw).collect();
	format!("(?P<{}>{})", name, alternatives.join("|"))
}

fn compile(template: &str) -> Regex {
	let pattern = format!("(?i){}", template.replace("{player}", PLAYER));
	Regex::new(&pattern).unwrap()
}

pub static CHALLENGE_RE: Lazy<Regex> = Lazy::new(|| compile(CHALLENGE));

pub static KICKOFF_RE: Lazy<Regex> = Lazy::new(|| compile(&[KICKOFF, TACKLE, FUMBLE, TD_SAFETY, PENALTY].concat()));

pub static TIMEOUT_RE: Lazy<Regex> = Lazy::new(|| compile(TIMEOUT));

pub static FIELD_GOAL_RE: Lazy<Regex> = Lazy::new(|| compile(&[FIELD_GOAL, TD_SAFETY, PENALTY].concat()));

pub static PUNT_RE: Lazy<Regex> = Lazy::new(|| compile(&[PUNT, TACKLE, FUMBLE, TD_SAFETY, PENALTY].concat()));

pub static KNEEL_RE: Lazy<Regex> = Lazy::new(|| compile(KNEEL));

pub static SPIKE_RE: Lazy<Regex> = Lazy::new(|| compile(SPIKE));

pub static EXTRA_POINT_RE: Lazy<Regex> = Lazy::new(|| compile(EXTRA_POINT));

pub static TWO_POINT_RE: Lazy<Regex> = Lazy::new(|| compile(TWO_POINT));

pub static PASS_RE: Lazy<Regex> = Lazy::new(|| {
	let location = format!("(?: {})?", options("passLoc", &PASS_LOCATIONS));
	let throw = format!(
		r"(?:pass (?P<isComplete>(?:in)?complete){}(?: (?:to |intended for )?(?P<target>{{player}}))?(?:(?:{}|{}){})?)",
		location, PASS_YARDS, INTERCEPTION, TACKLE
	);
	compile(&format!(r"(?P<passer>{{player}}) (?:{}|{})(?:{}{}{})?", SACK, throw, FUMBLE, TD_SAFETY, PENALTY))
});

pub static PRESNAP_PENALTY_RE: Lazy<Regex> = Lazy::new(|| compile(PRESNAP_PENALTY));

pub static RUN_RE: Lazy<Regex> = Lazy::new(|| {
	let direction = format!("(?: {})?", options("rushDir", &RUSH_DIRECTIONS));
	compile(&format!(
		r"(?P<rusher>{{player}}){}(?: for (?:(?:(?P<rushYds>-?\d+) yards?)|(?:no gain)){}{}{}{})?",
		direction, TACKLE, FUMBLE, TD_SAFETY, PENALTY
	))
});

/// Canonical code for a raw rush direction, e.g. "left end" -> "LE".
pub fn rush_direction_code(raw: &str) -> Option<&'static str> {
	lookup(&RUSH_DIRECTIONS, raw)
}

/// Canonical code for a raw pass depth and side, e.g. "short left" -> "SL".
pub fn pass_location_code(raw: &str) -> Option<&'static str> {
	lookup(&PASS_LOCATIONS, raw)
}

fn lookup(table: &[(&'static str, &'static str)], raw: &str) -> Option<&'static str> {
	let raw = raw.trim();
	table.iter().find(|(key, _)| key.eq_ignore_ascii_case(raw)).map(|(_, code)| *code)
}

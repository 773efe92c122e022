//! Whole-game passes that need neighbouring plays: clock filling, score and
//! win probability lags, win probability added and distance to goal.

use crate::error::SeriesGap;
use crate::schema::{ClockRemaining, FieldValue, GameContext, GameSeries, NormalizedPlay, SECONDS_PER_QUARTER};
use std::f64::consts::SQRT_2;
use tracing::{info, instrument, warn};

const KICKOFF_DIST_TO_GOAL: i64 = 65;
const SCORE_FIELDS: [&str; 2] = ["pbp_score_hm", "pbp_score_aw"];

pub const DEFAULT_SPREAD_STD_DEV: f64 = 13.86;

/// Pre-game home win probability (0-100) from the point spread.
pub trait WinProbabilityModel {
	fn initial_win_prob(&self, point_spread: f64) -> f64;
}

/// Home margin is normal around the spread; a tie splits evenly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpreadNormalModel {
	std_dev: f64,
}

impl SpreadNormalModel {
	pub fn new(std_dev: f64) -> Self {
		SpreadNormalModel { std_dev }
	}

	fn margin_below(&self, margin: f64, point_spread: f64) -> f64 {
		0.5 * (1.0 + erf((margin - point_spread) / (self.std_dev * SQRT_2)))
	}
}

impl Default for SpreadNormalModel {
	fn default() -> Self {
		SpreadNormalModel::new(DEFAULT_SPREAD_STD_DEV)
	}
}

impl WinProbabilityModel for SpreadNormalModel {
	fn initial_win_prob(&self, point_spread: f64) -> f64 {
		let below_half = self.margin_below(0.5, point_spread);
		let below_neg_half = self.margin_below(-0.5, point_spread);
		let win = 1.0 - below_half;
		let tie = below_half - below_neg_half;
		100.0 * (win + 0.5 * tie)
	}
}

/// Abramowitz-Stegun 7.1.26
fn erf(x: f64) -> f64 {
	let a1 = 0.254_829_592;
	let a2 = -0.284_496_736;
	let a3 = 1.421_413_741;
	let a4 = -1.453_152_027;
	let a5 = 1.061_405_429;
	let p = 0.327_591_1;

	let sign = if x < 0.0 { -1.0 } else { 1.0 };
	let x = x.abs();
	let t = 1.0 / (1.0 + p * x);
	let y = 1.0 - (((((a5 * t + a4) * t) + a3) * t + a2) * t + a1) * t * (-x * x).exp();
	sign * y
}

/// Builds the game series from normalized plays in source order.
///
/// Missing game context skips the matching boundary correction and is
/// reported through [`GameSeries::gaps`].
#[instrument(skip_all, fields(plays = plays.len()))]
pub fn assemble<M: WinProbabilityModel + ?Sized>(mut plays: Vec<NormalizedPlay>, context: &GameContext, model: &M) -> GameSeries {
	if plays.is_empty() {
		return GameSeries::default();
	}

	let mut gaps = Vec::new();
	let last = plays.len() - 1;

	fill_clock(&mut plays);

	let post_wp: Vec<Option<f64>> = plays.iter().map(|p| p.float("home_wp")).collect();
	let mut wpa = successive_diff(&post_wp);
	let mut pre_wp = lag(&post_wp, None);
	forward_fill(&mut pre_wp);

	for field in SCORE_FIELDS {
		let post: Vec<Option<i64>> = plays.iter().map(|p| p.int(field)).collect();
		for (play, score) in plays.iter_mut().zip(lag(&post, Some(0))) {
			play.set(field, FieldValue::int(score));
		}
	}

	match context.point_spread {
		Some(spread) => {
			let initial = model.initial_win_prob(spread);
			pre_wp[0] = Some(initial);
			wpa[0] = pre_wp.get(1).copied().flatten().map(|next| next - initial);
		}
		None => gaps.push(SeriesGap::MissingPointSpread),
	}

	let terminal = match context.terminal_win_probability() {
		Ok(terminal) => {
			wpa[last] = pre_wp[last].map(|wp| terminal - wp);
			Some(terminal)
		}
		Err(gap) => {
			gaps.push(gap);
			None
		}
	};

	correct_timeouts(&plays, &pre_wp, terminal, &mut wpa);

	for ((play, wp), added) in plays.iter_mut().zip(pre_wp).zip(wpa) {
		play.set("home_wp", FieldValue::float(wp));
		play.set("home_wpa", FieldValue::float(added));
	}

	fill_dist_to_goal(&mut plays);

	for gap in &gaps {
		warn!(%gap, "boundary correction skipped");
	}
	info!(plays = plays.len(), gaps = gaps.len(), "assembled game series");

	GameSeries::new(plays, gaps)
}

/// Gives every play a usable clock.
///
/// A play without one inherits the previous play's clock and `secsElapsed`
/// within the same quarter; the first play of a quarter starts at 15:00.
fn fill_clock(plays: &mut [NormalizedPlay]) {
	let mut last_seen: Option<(Option<i64>, ClockRemaining)> = None;
	let mut last_elapsed: Option<i64> = None;

	for play in plays.iter_mut() {
		let quarter = play.int("quarter");

		if let Some(clock) = play.text("qtr_time_remain").and_then(|c| c.parse::<ClockRemaining>().ok()) {
			last_seen = Some((quarter, clock));
			last_elapsed = quarter.map(|q| q * SECONDS_PER_QUARTER - clock.total_seconds());
			continue;
		}

		match last_seen {
			Some((seen_quarter, clock)) if seen_quarter == quarter => {
				play.set("qtr_time_remain", FieldValue::Text(format_clock(clock)));
				play.set("secsElapsed", FieldValue::int(last_elapsed));
			}
			_ => {
				let clock = ClockRemaining::quarter_start();
				let elapsed = quarter.map(|q| q * SECONDS_PER_QUARTER - clock.total_seconds());
				play.set("qtr_time_remain", FieldValue::Text(format_clock(clock)));
				play.set("secsElapsed", FieldValue::int(elapsed));
				last_seen = Some((quarter, clock));
				last_elapsed = elapsed;
			}
		}
	}
}

fn format_clock(clock: ClockRemaining) -> String {
	let total = clock.total_seconds();
	format!("{}:{:02}", total / 60, total % 60)
}

/// Zeroes timeouts and charges the movement across them to the next real play.
fn correct_timeouts(plays: &[NormalizedPlay], pre_wp: &[Option<f64>], terminal: Option<f64>, wpa: &mut [Option<f64>]) {
	let last = plays.len() - 1;
	let mut before_timeouts: Option<Option<f64>> = None;

	for (i, play) in plays.iter().enumerate() {
		let is_timeout = play.flag("isTimeout");
		if is_timeout && before_timeouts.is_none() {
			before_timeouts = Some(pre_wp[i]);
		}
		let Some(before) = before_timeouts else {
			continue;
		};

		if is_timeout && i < last {
			wpa[i] = Some(0.0);
			continue;
		}

		// first play after the timeouts, or a timeout that ends the game
		let after = if i < last { pre_wp[i + 1] } else { terminal };
		wpa[i] = after.zip(before).map(|(after, before)| after - before);
		before_timeouts = None;
	}
}

/// Kickoffs are spotted 65 yards out; gaps take the next known value, the tail the last one.
fn fill_dist_to_goal(plays: &mut [NormalizedPlay]) {
	let mut dist: Vec<Option<i64>> = plays
		.iter()
		.map(|p| if p.flag("isKickoff") { Some(KICKOFF_DIST_TO_GOAL) } else { p.int("distToGoal") })
		.collect();

	backward_fill(&mut dist);
	forward_fill(&mut dist);

	for (play, dist) in plays.iter_mut().zip(dist) {
		play.set("distToGoal", FieldValue::int(dist));
	}
}

fn successive_diff(values: &[Option<f64>]) -> Vec<Option<f64>> {
	let mut diffs = Vec::with_capacity(values.len());
	let mut previous: Option<f64> = None;
	for (i, &value) in values.iter().enumerate() {
		diffs.push(if i == 0 { None } else { value.zip(previous).map(|(v, p)| v - p) });
		previous = value;
	}
	diffs
}

/// Each play's pre-play value is the previous play's post-play value.
fn lag<T: Copy>(values: &[Option<T>], first: Option<T>) -> Vec<Option<T>> {
	let mut lagged = Vec::with_capacity(values.len());
	let mut previous = first;
	for &value in values {
		lagged.push(previous);
		previous = value;
	}
	lagged
}

fn forward_fill<T: Copy>(values: &mut [Option<T>]) {
	let mut last_seen = None;
	for value in values.iter_mut() {
		match *value {
			Some(v) => last_seen = Some(v),
			None => *value = last_seen,
		}
	}
}

fn backward_fill<T: Copy>(values: &mut [Option<T>]) {
	let mut next_seen = None;
	for value in values.iter_mut().rev() {
		match *value {
			Some(v) => next_seen = Some(v),
			None => *value = next_seen,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::schema::{secs_elapsed, GameOutcome, PlayCategory, HOME_WIN_PROB, TIE_WIN_PROB};

	struct FixedModel(f64);

	impl WinProbabilityModel for FixedModel {
		fn initial_win_prob(&self, _point_spread: f64) -> f64 {
			self.0
		}
	}

	fn play(category: PlayCategory, home_wp: f64) -> NormalizedPlay {
		let mut play = NormalizedPlay::new(category);
		if let Some(flag) = category.flag() {
			play.set(flag, FieldValue::Bool(true));
		}
		play.set("quarter", FieldValue::Int(1));
		play.set("qtr_time_remain", FieldValue::text(Some("12:00")));
		play.set("home_wp", FieldValue::Float(home_wp));
		play
	}

	fn context(outcome: GameOutcome) -> GameContext {
		GameContext::new("nwe", "mia").with_point_spread(3.0).with_outcome(outcome)
	}

	fn wpa(series: &GameSeries) -> Vec<f64> {
		series.plays().iter().map(|p| p.float("home_wpa").unwrap()).collect()
	}

	fn assert_close(actual: &[f64], expected: &[f64]) {
		assert_eq!(actual.len(), expected.len());
		for (a, e) in actual.iter().zip(expected) {
			assert!((a - e).abs() < 1e-9, "expected {:?}, got {:?}", expected, actual);
		}
	}

	#[test]
	fn test_wpa_telescopes_to_terminal() {
		let plays = vec![
			play(PlayCategory::Kickoff, 55.0),
			play(PlayCategory::Run, 60.0),
			play(PlayCategory::Pass, 40.0),
			play(PlayCategory::Pass, 70.0),
		];
		let series = assemble(plays, &context(GameOutcome::Winner("nwe".into())), &FixedModel(52.0));

		let pre: Vec<f64> = series.plays().iter().map(|p| p.float("home_wp").unwrap()).collect();
		assert_close(&pre, &[52.0, 55.0, 60.0, 40.0]);
		assert_close(&wpa(&series), &[3.0, 5.0, -20.0, 60.0]);

		let total: f64 = wpa(&series).iter().sum();
		assert!((pre[0] + total - HOME_WIN_PROB).abs() < 1e-9);
		assert!(series.gaps().is_empty());
	}

	#[test]
	fn test_timeout_has_no_movement() {
		let plays = vec![
			play(PlayCategory::Run, 55.0),
			play(PlayCategory::Timeout, 55.0),
			play(PlayCategory::Pass, 65.0),
			play(PlayCategory::Run, 70.0),
		];
		let series = assemble(plays, &context(GameOutcome::Winner("mia".into())), &FixedModel(50.0));

		// play after the timeout: WP two plays on minus WP before the timeout
		assert_close(&wpa(&series), &[5.0, 0.0, 10.0, -65.0]);
		let total: f64 = wpa(&series).iter().sum();
		assert!((50.0 + total).abs() < 1e-9);
	}

	#[test]
	fn test_timeout_before_last_play_uses_terminal() {
		let plays = vec![
			play(PlayCategory::Run, 55.0),
			play(PlayCategory::Run, 60.0),
			play(PlayCategory::Timeout, 60.0),
			play(PlayCategory::Kneel, 80.0),
		];
		let series = assemble(plays, &context(GameOutcome::Tie), &FixedModel(50.0));

		assert_close(&wpa(&series), &[5.0, 5.0, 0.0, -10.0]);
		let total: f64 = wpa(&series).iter().sum();
		assert!((50.0 + total - TIE_WIN_PROB).abs() < 1e-9);
	}

	#[test]
	fn test_consecutive_and_final_timeouts() {
		let plays = vec![
			play(PlayCategory::Pass, 58.0),
			play(PlayCategory::Timeout, 58.0),
			play(PlayCategory::Timeout, 58.0),
			play(PlayCategory::Run, 75.0),
			play(PlayCategory::Timeout, 75.0),
		];
		let series = assemble(plays, &context(GameOutcome::Winner("nwe".into())), &FixedModel(50.0));

		assert_close(&wpa(&series), &[8.0, 0.0, 0.0, 17.0, 25.0]);
		let total: f64 = wpa(&series).iter().sum();
		assert!((50.0 + total - HOME_WIN_PROB).abs() < 1e-9);
	}

	#[test]
	fn test_scores_are_lagged() {
		let scores = [(0, 0), (7, 0), (7, 3), (14, 3)];
		let plays = scores
			.iter()
			.map(|(hm, aw)| {
				let mut p = play(PlayCategory::Run, 50.0);
				p.set("pbp_score_hm", FieldValue::Int(*hm));
				p.set("pbp_score_aw", FieldValue::Int(*aw));
				p
			})
			.collect();
		let series = assemble(plays, &context(GameOutcome::Tie), &FixedModel(50.0));

		let hm: Vec<Option<i64>> = series.plays().iter().map(|p| p.int("pbp_score_hm")).collect();
		let aw: Vec<Option<i64>> = series.plays().iter().map(|p| p.int("pbp_score_aw")).collect();
		assert_eq!(hm, vec![Some(0), Some(0), Some(7), Some(7)]);
		assert_eq!(aw, vec![Some(0), Some(0), Some(0), Some(3)]);
	}

	#[test]
	fn test_clock_is_filled() {
		let mut plays: Vec<NormalizedPlay> = (0..4).map(|_| play(PlayCategory::Run, 50.0)).collect();
		plays[0].set("qtr_time_remain", FieldValue::Missing);
		plays[1].set("qtr_time_remain", FieldValue::text(Some("14:20")));
		plays[2].set("qtr_time_remain", FieldValue::Missing);
		plays[3].set("qtr_time_remain", FieldValue::text(Some("garbled")));
		plays[3].set("quarter", FieldValue::Int(2));

		let series = assemble(plays, &context(GameOutcome::Tie), &FixedModel(50.0));

		let clocks: Vec<Option<&str>> = series.plays().iter().map(|p| p.text("qtr_time_remain")).collect();
		assert_eq!(clocks, vec![Some("15:00"), Some("14:20"), Some("14:20"), Some("15:00")]);
		let elapsed: Vec<Option<i64>> = series.plays().iter().map(|p| p.int("secsElapsed")).collect();
		assert_eq!(elapsed, vec![Some(0), None, Some(40), Some(900)]);
	}

	#[test]
	fn test_elapsed_never_decreases_across_quarters() {
		let clocks = [(1, Some("0:12")), (1, None), (2, None), (2, Some("14:30")), (2, None), (3, Some("15:00"))];
		let plays = clocks
			.iter()
			.map(|&(quarter, clock)| {
				let mut p = play(PlayCategory::Run, 50.0);
				p.set("quarter", FieldValue::Int(quarter));
				p.set("qtr_time_remain", FieldValue::text(clock));
				p.set("secsElapsed", FieldValue::int(clock.and_then(|c| secs_elapsed(&quarter.to_string(), c))));
				p
			})
			.collect();

		let series = assemble(plays, &context(GameOutcome::Tie), &FixedModel(50.0));

		let elapsed: Vec<i64> = series.plays().iter().map(|p| p.int("secsElapsed").unwrap()).collect();
		assert_eq!(elapsed, vec![888, 888, 900, 930, 930, 1800]);
		assert!(elapsed.windows(2).all(|pair| pair[0] <= pair[1]), "went backwards: {:?}", elapsed);

		let filled: Vec<Option<&str>> = series.plays().iter().map(|p| p.text("qtr_time_remain")).collect();
		assert_eq!(filled[1], Some("0:12"));
		assert_eq!(filled[2], Some("15:00"));
		assert_eq!(filled[4], Some("14:30"));
	}

	#[test]
	fn test_dist_to_goal_is_filled() {
		let mut plays: Vec<NormalizedPlay> = vec![
			play(PlayCategory::Kickoff, 50.0),
			play(PlayCategory::Run, 50.0),
			play(PlayCategory::Run, 50.0),
			play(PlayCategory::Punt, 50.0),
		];
		plays[2].set("distToGoal", FieldValue::Int(72));

		let series = assemble(plays, &context(GameOutcome::Tie), &FixedModel(50.0));

		let dist: Vec<Option<i64>> = series.plays().iter().map(|p| p.int("distToGoal")).collect();
		assert_eq!(dist, vec![Some(65), Some(72), Some(72), Some(72)]);
	}

	#[test]
	fn test_missing_context_is_reported() {
		let plays = vec![play(PlayCategory::Run, 55.0), play(PlayCategory::Pass, 60.0)];
		let series = assemble(plays, &GameContext::default(), &FixedModel(50.0));

		assert_eq!(series.len(), 2);
		assert_eq!(series.gaps(), &[SeriesGap::MissingPointSpread, SeriesGap::MissingOutcome]);
		assert!(series.plays()[0].get("home_wpa").is_missing());
		assert_eq!(series.plays()[1].float("home_wpa"), Some(5.0));
		assert_eq!(series.plays()[1].float("home_wp"), Some(55.0));
	}

	#[test]
	fn test_single_play_game() {
		let series = assemble(vec![play(PlayCategory::Kneel, 90.0)], &context(GameOutcome::Winner("nwe".into())), &FixedModel(60.0));
		assert_close(&wpa(&series), &[40.0]);
	}

	#[test]
	fn test_empty_game() {
		let series = assemble(Vec::new(), &GameContext::default(), &SpreadNormalModel::default());
		assert!(series.is_empty());
		assert!(series.gaps().is_empty());
	}

	#[test]
	fn test_spread_model() {
		let model = SpreadNormalModel::default();

		assert!((model.initial_win_prob(0.0) - 50.0).abs() < 1e-6);
		let favored = model.initial_win_prob(7.0);
		assert!(favored > 65.0 && favored < 75.0, "got {}", favored);
		assert!((model.initial_win_prob(-7.0) - (100.0 - favored)).abs() < 1e-6);
		assert!(model.initial_win_prob(14.0) > favored);
	}

	#[test]
	fn test_fill_helpers() {
		let mut values = vec![None, Some(1), None, Some(3), None];
		backward_fill(&mut values);
		assert_eq!(values, vec![Some(1), Some(1), Some(3), Some(3), None]);
		forward_fill(&mut values);
		assert_eq!(values, vec![Some(1), Some(1), Some(3), Some(3), Some(3)]);

		assert_eq!(lag(&[Some(1), Some(2)], Some(0)), vec![Some(0), Some(1)]);
		assert_eq!(successive_diff(&[Some(1.0), None, Some(4.0)]), vec![None, None, None]);
	}
}

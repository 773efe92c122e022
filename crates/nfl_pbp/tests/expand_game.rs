use nfl_pbp::{expand_game, GameContext, PbpConfig, PlayCategory, RawPlayRow, SeriesGap, SpreadNormalModel, WinProbabilityModel};
use serde_json::{json, Value};

fn rows() -> Vec<RawPlayRow> {
	serde_json::from_value(json!([
		{
			"detail": "GostSt00 kicks off 65 yards, touchback",
			"quarter": "1", "qtr_time_remain": "15:00", "location": "nwe 35", "team": "mia",
			"home_wp": "50.5", "pbp_score_hm": "0", "pbp_score_aw": "0"
		},
		{
			"detail": "BlouLe00 right tackle for 4 yards (tackle by AlonKi00)",
			"quarter": "1", "qtr_time_remain": "14:55", "location": "nwe 25", "team": "nwe", "down": "1",
			"home_wp": "52.1", "pbp_score_hm": "0", "pbp_score_aw": "0"
		},
		{
			"detail": "BradTo00 pass complete short left to EdelJu00 for 12 yards (tackle by JoneBy00)",
			"quarter": "1", "qtr_time_remain": null, "location": "nwe 29", "team": "nwe", "down": "2",
			"home_wp": "55.0", "pbp_score_hm": "0", "pbp_score_aw": "0"
		},
		{
			"detail": "Timeout #1 by Miami Dolphins",
			"quarter": "1", "qtr_time_remain": "14:10",
			"home_wp": "55.0", "pbp_score_hm": "0", "pbp_score_aw": "0"
		},
		{
			"detail": "BradTo00 pass complete deep right to GronRo00 for 59 yards, touchdown",
			"quarter": "1", "qtr_time_remain": "14:02", "location": "nwe 41", "team": "nwe", "down": "1",
			"home_wp": "68.0", "pbp_score_hm": "6", "pbp_score_aw": "0"
		},
		{
			"detail": "GostSt00 kicks extra point good",
			"quarter": "1", "qtr_time_remain": "13:58", "location": "mia 2", "team": "nwe",
			"home_wp": "69.0", "pbp_score_hm": "7", "pbp_score_aw": "0"
		},
		{
			"detail": "BradTo00 kneels for -1 yards",
			"quarter": "4", "qtr_time_remain": "0:40", "location": "nwe 30", "team": "nwe", "down": "1",
			"home_wp": "99.0", "pbp_score_hm": "7", "pbp_score_aw": "0"
		}
	]))
	.unwrap()
}

fn context() -> GameContext {
	serde_json::from_value(json!({
		"point_spread": 6.5,
		"home": "nwe",
		"away": "mia",
		"outcome": { "Winner": "nwe" }
	}))
	.unwrap()
}

#[test]
fn test_expand_game() {
	let series = expand_game(&rows(), &context(), &PbpConfig::default());
	assert!(series.gaps().is_empty());

	let categories: Vec<PlayCategory> = series.plays().iter().map(|p| p.category()).collect();
	assert_eq!(
		categories,
		vec![
			PlayCategory::Kickoff,
			PlayCategory::Run,
			PlayCategory::Pass,
			PlayCategory::Timeout,
			PlayCategory::Pass,
			PlayCategory::ExtraPoint,
			PlayCategory::Kneel,
		]
	);

	let plays = series.plays();
	assert_eq!(plays[1].text("rushDir"), Some("RT"));
	assert_eq!(plays[2].text("passLoc"), Some("SL"));
	assert_eq!(plays[2].text("qtr_time_remain"), Some("14:55"));
	assert_eq!(plays[2].int("secsElapsed"), Some(5));
	assert!(plays[4].flag("isTD"));
	assert!(plays[5].flag("xpGood"));
	assert!(plays[5].get("ydLine").is_missing());

	let scores: Vec<Option<i64>> = plays.iter().map(|p| p.int("pbp_score_hm")).collect();
	assert_eq!(scores, vec![Some(0), Some(0), Some(0), Some(0), Some(0), Some(6), Some(7)]);

	let dist: Vec<Option<i64>> = plays.iter().map(|p| p.int("distToGoal")).collect();
	assert_eq!(dist, vec![Some(65), Some(75), Some(71), Some(59), Some(59), Some(70), Some(70)]);
}

#[test]
fn test_win_probability_added() {
	let series = expand_game(&rows(), &context(), &PbpConfig::default());
	let plays = series.plays();

	let initial = SpreadNormalModel::default().initial_win_prob(6.5);
	assert_eq!(plays[0].float("home_wp"), Some(initial));
	assert!((plays[0].float("home_wpa").unwrap() - (50.5 - initial)).abs() < 1e-9);

	// the timeout is flat and the touchdown pass carries its movement
	assert_eq!(plays[3].float("home_wpa"), Some(0.0));
	assert!((plays[4].float("home_wpa").unwrap() - 13.0).abs() < 1e-9);
	assert!((plays[6].float("home_wpa").unwrap() - 31.0).abs() < 1e-9);

	let total: f64 = plays.iter().map(|p| p.float("home_wpa").unwrap()).sum();
	assert!((initial + total - 100.0).abs() < 1e-9);
}

#[test]
fn test_missing_context_keeps_every_play() {
	let mut rows = rows();
	rows.push(RawPlayRow::new().with("detail", "End of Regulation").with("quarter", "4"));

	let series = expand_game(&rows, &GameContext::default(), &PbpConfig::default());
	assert_eq!(series.len(), 8);
	assert_eq!(series.gaps(), &[SeriesGap::MissingPointSpread, SeriesGap::MissingOutcome]);

	let last = &series.plays()[7];
	assert_eq!(last.category(), PlayCategory::Unrecognized);
	assert!(last.is_error());
	assert_eq!(last.text("qtr_time_remain"), Some("0:40"));
}

#[test]
fn test_series_serializes_flat() {
	let series = expand_game(&rows(), &context(), &PbpConfig::default());
	let value = serde_json::to_value(&series).unwrap();

	let first: &Value = &value["plays"][0];
	assert_eq!(first["category"], json!("Kickoff"));
	assert_eq!(first["isKickoff"], json!(true));
	assert_eq!(first["koYds"], json!(65));
	assert_eq!(first["isTouchback"], json!(true));
	assert_eq!(value["gaps"], json!([]));
}

#[test]
fn test_every_play_carries_its_category_flag() {
	let series = expand_game(&rows(), &context(), &PbpConfig::default());

	for play in series.into_plays() {
		let flag = play.category().flag().unwrap();
		let set: Vec<&str> = play
			.fields()
			.filter(|(name, value)| name.starts_with("is") && value.as_bool() == Some(true))
			.map(|(name, _)| name)
			.collect();
		assert!(set.contains(&flag), "{} missing from {:?}", flag, set);
		assert!(play.fields().any(|(name, _)| name == "home_wpa"));
	}
}

use nfl_pbp::{classify, expand_game, GameContext, GameOutcome, PbpConfig, RawPlayRow};
use tracing::Level;

fn main() {
	tracing_subscriber::fmt().with_max_level(Level::DEBUG).with_target(false).init();

	let config = PbpConfig::new();

	let descriptions = [
		"GostSt00 kicks off 65 yards, returned by DrakKe00 for 24 yards (tackle by SlatMa00)",
		"TannRy00 pass incomplete deep left intended for LandJa00",
		"TannRy00 sacked by FlowTr00 for -8 yards",
		"Timeout #1 by New England Patriots",
		"BradTo00 pass complete short right to EdelJu00 for 9 yards. Penalty on MIA: Defensive Offside (Declined)",
		"BlouLe00 up the middle for 2 yards, touchdown",
		"Two Point Attempt: BradTo00 pass complete to GronRo00, conversion succeeds",
		"BradTo00 kneels for -1 yards",
	];

	let rows: Vec<RawPlayRow> = descriptions
		.iter()
		.enumerate()
		.map(|(i, detail)| {
			let wp = 50.0 + 6.0 * i as f64;
			RawPlayRow::new()
				.with(config.detail_column.as_str(), *detail)
				.with("quarter", if i < 6 { "1" } else { "4" })
				.with("home_wp", wp.to_string())
		})
		.collect();

	for detail in descriptions {
		println!("{:<16} {}", classify(detail).category().to_string(), detail);
	}

	let context = GameContext::new("nwe", "mia").with_point_spread(3.5).with_outcome(GameOutcome::Winner("nwe".to_string()));
	let series = expand_game(&rows, &context, &config);

	match serde_json::to_string_pretty(&series) {
		Ok(json) => println!("{}", json),
		Err(e) => eprintln!("Failed to serialize game series: {}", e),
	}

	for play in series.into_plays() {
		let populated: Vec<&str> = play.fields().filter(|(_, value)| !value.is_missing()).map(|(name, _)| name).collect();
		println!("{:<16} {} columns: {}", play.category().to_string(), populated.len(), populated.join(", "));
	}
}

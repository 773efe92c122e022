pub mod config;
pub mod error;
pub mod normalize;
pub mod parsers;
pub mod schema;
pub mod sequence;

pub use config::PbpConfig;
pub use error::{ClockError, LocationError, SeriesGap};
pub use normalize::normalize;
pub use parsers::{classify, ClassifiedPlay};
pub use schema::{FieldValue, GameContext, GameOutcome, GameSeries, NormalizedPlay, PlayCategory, RawPlayRow};
pub use sequence::{assemble, SpreadNormalModel, WinProbabilityModel};

use std::borrow::Cow;
use tracing::{info, instrument};

/// Classifies and normalizes every row, keeping row order.
pub fn expand_details(rows: &[RawPlayRow], config: &PbpConfig) -> Vec<NormalizedPlay> {
	rows.iter().map(|row| expand_row(row, &config.detail_column)).collect()
}

fn expand_row(row: &RawPlayRow, detail_column: &str) -> NormalizedPlay {
	let detail = row.get(detail_column).unwrap_or_default();
	let (category, extracted) = classify(detail).into_parts();

	let row = if detail_column == config::DEFAULT_DETAIL_COLUMN {
		Cow::Borrowed(row)
	} else {
		let mut renamed = row.clone();
		renamed.insert(config::DEFAULT_DETAIL_COLUMN, Some(detail.to_string()));
		Cow::Owned(renamed)
	};

	normalize(category, &extracted, &row)
}

/// Runs one game's rows through classification, normalization and assembly.
#[instrument(skip_all, fields(rows = rows.len()))]
pub fn expand_game(rows: &[RawPlayRow], context: &GameContext, config: &PbpConfig) -> GameSeries {
	let plays = expand_details(rows, config);
	let unrecognized = plays.iter().filter(|p| !p.category().is_recognized()).count();
	info!(unrecognized, "classified game plays");

	let model = SpreadNormalModel::new(config.spread_std_dev);
	assemble(plays, context, &model)
}

use crate::sequence::DEFAULT_SPREAD_STD_DEV;
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const DEFAULT_DETAIL_COLUMN: &str = "detail";

#[derive(Parser, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[command(author, version, about, long_about = None)]
pub struct PbpConfig {
	/// Column holding the free-text play description
	#[arg(long, env = "PBP_DETAIL_COLUMN", default_value = DEFAULT_DETAIL_COLUMN)]
	pub detail_column: String,

	/// Standard deviation of the home margin around the point spread
	#[arg(long, env = "PBP_SPREAD_STD_DEV", default_value_t = DEFAULT_SPREAD_STD_DEV)]
	pub spread_std_dev: f64,
}

impl PbpConfig {
	/// Reads `.env`, then the environment and command line.
	pub fn new() -> Self {
		dotenv::dotenv().ok();
		Self::parse()
	}
}

impl Default for PbpConfig {
	fn default() -> Self {
		PbpConfig {
			detail_column: DEFAULT_DETAIL_COLUMN.to_string(),
			spread_std_dev: DEFAULT_SPREAD_STD_DEV,
		}
	}
}

use crate::error::SeriesGap;
use crate::schema::NormalizedPlay;
use serde::{Deserialize, Serialize};

pub const HOME_WIN_PROB: f64 = 100.0;
pub const AWAY_WIN_PROB: f64 = 0.0;
pub const TIE_WIN_PROB: f64 = 50.0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
	Winner(String),
	Tie,
}

/// Per-game values needed for the boundary corrections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameContext {
	/// Points the home team is favored by; negative when the away team is favored.
	pub point_spread: Option<f64>,
	pub home: Option<String>,
	pub away: Option<String>,
	pub outcome: Option<GameOutcome>,
}

impl GameContext {
	pub fn new(home: impl Into<String>, away: impl Into<String>) -> Self {
		GameContext {
			home: Some(home.into()),
			away: Some(away.into()),
			..Self::default()
		}
	}

	pub fn with_point_spread(mut self, spread: f64) -> Self {
		self.point_spread = Some(spread);
		self
	}

	pub fn with_outcome(mut self, outcome: GameOutcome) -> Self {
		self.outcome = Some(outcome);
		self
	}

	/// Home win probability once the game is over.
	pub fn terminal_win_probability(&self) -> Result<f64, SeriesGap> {
		let outcome = self.outcome.as_ref().ok_or(SeriesGap::MissingOutcome)?;
		let winner = match outcome {
			GameOutcome::Tie => return Ok(TIE_WIN_PROB),
			GameOutcome::Winner(winner) => winner,
		};

		let (Some(home), Some(away)) = (&self.home, &self.away) else {
			return Err(SeriesGap::MissingTeams);
		};

		if winner == home {
			Ok(HOME_WIN_PROB)
		} else if winner == away {
			Ok(AWAY_WIN_PROB)
		} else {
			Err(SeriesGap::unknown_winner(winner))
		}
	}
}

/// A whole game's plays, in source order, with the sequence columns filled in.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GameSeries {
	plays: Vec<NormalizedPlay>,
	gaps: Vec<SeriesGap>,
}

impl GameSeries {
	pub fn new(plays: Vec<NormalizedPlay>, gaps: Vec<SeriesGap>) -> Self {
		GameSeries { plays, gaps }
	}

	pub fn plays(&self) -> &[NormalizedPlay] {
		&self.plays
	}

	/// Boundary corrections skipped for lack of game context.
	pub fn gaps(&self) -> &[SeriesGap] {
		&self.gaps
	}

	pub fn len(&self) -> usize {
		self.plays.len()
	}

	pub fn is_empty(&self) -> bool {
		self.plays.is_empty()
	}

	pub fn into_plays(self) -> Vec<NormalizedPlay> {
		self.plays
	}
}

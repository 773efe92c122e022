use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One row of a play-by-play table: raw column name to raw cell text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawPlayRow {
	columns: BTreeMap<String, Option<String>>,
}

impl RawPlayRow {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.insert(name, Some(value.into()));
		self
	}

	pub fn insert(&mut self, name: impl Into<String>, value: Option<String>) {
		self.columns.insert(name.into(), value);
	}

	/// Cell text, or `None` when the column is absent, null or blank.
	pub fn get(&self, name: &str) -> Option<&str> {
		self.columns.get(name)?.as_deref().filter(|v| !v.trim().is_empty())
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
		self.columns.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
	}
}

impl<K, V> FromIterator<(K, V)> for RawPlayRow
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let columns = iter.into_iter().map(|(k, v)| (k.into(), Some(v.into()))).collect();
		RawPlayRow { columns }
	}
}

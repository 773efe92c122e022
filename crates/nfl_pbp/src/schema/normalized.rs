use crate::schema::{FieldValue, PlayCategory};
use serde::Serialize;
use std::collections::BTreeMap;

static MISSING: FieldValue = FieldValue::Missing;

/// A play with every canonical column typed. Absent columns read as missing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedPlay {
	category: PlayCategory,
	#[serde(flatten)]
	fields: BTreeMap<String, FieldValue>,
}

impl NormalizedPlay {
	pub fn new(category: PlayCategory) -> Self {
		NormalizedPlay {
			category,
			fields: BTreeMap::new(),
		}
	}

	pub fn category(&self) -> PlayCategory {
		self.category
	}

	pub fn get(&self, name: &str) -> &FieldValue {
		self.fields.get(name).unwrap_or(&MISSING)
	}

	pub fn set(&mut self, name: impl Into<String>, value: FieldValue) {
		self.fields.insert(name.into(), value);
	}

	/// Boolean column; missing reads as `false`.
	pub fn flag(&self, name: &str) -> bool {
		self.get(name).as_bool().unwrap_or(false)
	}

	pub fn int(&self, name: &str) -> Option<i64> {
		self.get(name).as_int()
	}

	pub fn float(&self, name: &str) -> Option<f64> {
		self.get(name).as_float()
	}

	pub fn text(&self, name: &str) -> Option<&str> {
		self.get(name).as_str()
	}

	pub fn is_error(&self) -> bool {
		self.flag("is_error")
	}

	pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
		self.fields.iter().map(|(k, v)| (k.as_str(), v))
	}
}

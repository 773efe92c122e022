use serde::Serialize;

/// A typed cell of a normalized play.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
	#[default]
	Missing,
	Bool(bool),
	Int(i64),
	Float(f64),
	Text(String),
}

impl FieldValue {
	/// Blank text is stored as missing.
	pub fn text(value: Option<&str>) -> Self {
		match value.map(str::trim) {
			Some(v) if !v.is_empty() => FieldValue::Text(v.to_string()),
			_ => FieldValue::Missing,
		}
	}

	pub fn int(value: Option<i64>) -> Self {
		value.map_or(FieldValue::Missing, FieldValue::Int)
	}

	pub fn float(value: Option<f64>) -> Self {
		match value {
			Some(v) if v.is_finite() => FieldValue::Float(v),
			_ => FieldValue::Missing,
		}
	}

	pub fn is_missing(&self) -> bool {
		matches!(self, FieldValue::Missing)
	}

	pub fn as_bool(&self) -> Option<bool> {
		match self {
			FieldValue::Bool(b) => Some(*b),
			_ => None,
		}
	}

	pub fn as_int(&self) -> Option<i64> {
		match self {
			FieldValue::Int(i) => Some(*i),
			_ => None,
		}
	}

	pub fn as_float(&self) -> Option<f64> {
		match self {
			FieldValue::Float(f) => Some(*f),
			FieldValue::Int(i) => Some(*i as f64),
			_ => None,
		}
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			FieldValue::Text(s) => Some(s),
			_ => None,
		}
	}
}

use regex::Captures;
use std::collections::BTreeMap;

/// Raw text captured from a description, keyed by canonical field name.
///
/// Only captured fields are stored; a name that is absent was not matched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedFields {
	values: BTreeMap<&'static str, String>,
}

impl ExtractedFields {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert(&mut self, name: &'static str, value: Option<&str>) {
		if let Some(value) = value {
			self.values.insert(name, value.to_string());
		}
	}

	/// Marks a discriminator field such as `isRun` as present.
	pub fn mark(&mut self, name: &'static str) {
		self.values.insert(name, "true".to_string());
	}

	pub fn get(&self, name: &str) -> Option<&str> {
		self.values.get(name).map(String::as_str)
	}

	pub fn contains(&self, name: &str) -> bool {
		self.values.contains_key(name)
	}

	pub fn merge(&mut self, other: ExtractedFields) {
		self.values.extend(other.values);
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
		self.values.iter().map(|(k, v)| (*k, v.as_str()))
	}
}

/// Something captured from a description that can be flattened into fields.
pub trait Extract {
	fn extract(&self, out: &mut ExtractedFields);
}

impl<T: Extract> Extract for Option<T> {
	fn extract(&self, out: &mut ExtractedFields) {
		if let Some(inner) = self {
			inner.extract(out);
		}
	}
}

pub(crate) fn capture(caps: &Captures<'_>, name: &str) -> Option<String> {
	caps.name(name).map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_absent_values_are_not_stored() {
		let mut fields = ExtractedFields::new();
		fields.insert("rusher", Some("BradTo00"));
		fields.insert("rushYds", None);
		fields.mark("isRun");

		assert_eq!(fields.len(), 2);
		assert_eq!(fields.get("rusher"), Some("BradTo00"));
		assert!(fields.contains("isRun"));
		assert!(!fields.contains("rushYds"));

		let mut inner = ExtractedFields::new();
		inner.insert("target", Some("GronRo00"));
		fields.merge(inner);
		assert_eq!(fields.iter().map(|(k, _)| k).collect::<Vec<_>>(), vec!["isRun", "rusher", "target"]);
	}
}

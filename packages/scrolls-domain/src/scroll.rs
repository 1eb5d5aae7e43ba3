use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scroll {
	pub id: u64,
	pub name: String,
	/// Every other field of the catalog item, left for presentation layers.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}
impl Scroll {
	pub fn new(id: u64, name: impl Into<String>) -> Self {
		Self { id, name: name.into(), extra: Map::new() }
	}

	/// Lookup key used by the catalog cache.
	pub fn key(&self) -> String {
		self.name.to_lowercase()
	}

	pub fn has_name(&self) -> bool {
		!self.name.trim().is_empty()
	}

	pub fn field(&self, key: &str) -> Option<&Value> {
		self.extra.get(key)
	}
}

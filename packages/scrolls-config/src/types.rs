use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
	pub service: Service,
	pub catalog: Catalog,
	#[serde(default)]
	pub matching: Matching,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Service {
	pub log_level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
	pub api_base: String,
	#[serde(default = "default_catalog_path")]
	pub path: String,
	/// Bounds both the HTTP client and the whole cache population step.
	#[serde(default = "default_timeout_ms")]
	pub timeout_ms: u64,
	#[serde(default)]
	pub default_headers: Map<String, Value>,
	#[serde(default)]
	pub duplicate_names: DuplicateNames,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateNames {
	#[default]
	Reject,
	LastWins,
}
impl DuplicateNames {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Reject => "reject",
			Self::LastWins => "last_wins",
		}
	}
}

#[derive(Debug, Clone, Deserialize)]
pub struct Matching {
	/// Fraction in 0.0-1.0; scores are compared on the 0-100 scale.
	#[serde(default = "default_threshold")]
	pub threshold: f32,
}
impl Default for Matching {
	fn default() -> Self {
		Self { threshold: default_threshold() }
	}
}

pub(crate) fn default_catalog_path() -> String {
	"/scrolls".to_string()
}

fn default_timeout_ms() -> u64 {
	10_000
}

fn default_threshold() -> f32 {
	0.7
}

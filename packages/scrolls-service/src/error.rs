pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Beyond this many tied names the ambiguity message stops enumerating them.
pub const MAX_LISTED_CANDIDATES: usize = 5;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error(transparent)]
	Fetch(#[from] FetchError),
	#[error("No scroll matches '{query}'.")]
	NotFound { query: String },
	#[error("{}", ambiguous_message(.query, .candidates))]
	Ambiguous { query: String, candidates: Vec<String> },
	#[error("Invalid configuration: {message}")]
	InvalidConfig { message: String },
}
impl Error {
	/// Only fetch failures may succeed on a plain retry; the others need a different query.
	pub fn is_retryable(&self) -> bool {
		matches!(self, Self::Fetch(_))
	}
}

impl From<scrolls_config::Error> for Error {
	fn from(err: scrolls_config::Error) -> Self {
		Self::InvalidConfig { message: err.to_string() }
	}
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
	#[error("Catalog provider failed: {message}")]
	Provider { message: String },
	#[error("Catalog fetch timed out after {timeout_ms} ms.")]
	Timeout { timeout_ms: u64 },
	#[error("Catalog item {id} has an empty name.")]
	EmptyName { id: u64 },
	#[error("Catalog contains duplicate scroll name '{name}'.")]
	DuplicateName { name: String },
}
impl From<scrolls_providers::Error> for FetchError {
	fn from(err: scrolls_providers::Error) -> Self {
		Self::Provider { message: err.to_string() }
	}
}

fn ambiguous_message(query: &str, candidates: &[String]) -> String {
	if candidates.len() > MAX_LISTED_CANDIDATES {
		return format!("Too many scrolls match your query '{query}'.");
	}

	format!("Multiple scrolls match '{query}': {}", candidates.join(", "))
}

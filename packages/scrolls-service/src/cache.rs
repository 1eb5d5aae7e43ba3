use std::{
	collections::{HashMap, hash_map::Entry},
	sync::{
		Arc,
		atomic::{AtomicUsize, Ordering},
	},
	time::{Duration, Instant},
};

use tokio::{sync::OnceCell, time};

use crate::{CatalogProvider, FetchError, Result};
use scrolls_config::DuplicateNames;
use scrolls_domain::Scroll;

/// Immutable snapshot of the catalog keyed by lowercased scroll name.
#[derive(Debug, Default)]
pub struct Catalog {
	positions: HashMap<String, usize>,
	names: Vec<String>,
	scrolls: Vec<Arc<Scroll>>,
}
impl Catalog {
	pub fn build(scrolls: Vec<Scroll>, duplicates: DuplicateNames) -> Result<Self, FetchError> {
		let mut catalog = Self {
			positions: HashMap::with_capacity(scrolls.len()),
			names: Vec::with_capacity(scrolls.len()),
			scrolls: Vec::with_capacity(scrolls.len()),
		};

		for scroll in scrolls {
			if !scroll.has_name() {
				return Err(FetchError::EmptyName { id: scroll.id });
			}

			match catalog.positions.entry(scroll.key()) {
				Entry::Vacant(entry) => {
					catalog.names.push(entry.key().clone());
					catalog.scrolls.push(Arc::new(scroll));
					entry.insert(catalog.scrolls.len() - 1);
				},
				Entry::Occupied(entry) => match duplicates {
					DuplicateNames::Reject => {
						return Err(FetchError::DuplicateName { name: scroll.name });
					},
					DuplicateNames::LastWins => {
						let id = scroll.id;
						let Some(slot) = catalog.scrolls.get_mut(*entry.get()) else { continue };
						let replaced = std::mem::replace(slot, Arc::new(scroll));

						tracing::warn!(
							name = %replaced.name,
							replaced_id = replaced.id,
							id,
							"Duplicate scroll name replaced."
						);
					},
				},
			}
		}

		Ok(catalog)
	}

	pub fn get(&self, key: &str) -> Option<&Arc<Scroll>> {
		self.positions.get(key).and_then(|&position| self.scrolls.get(position))
	}

	/// Lowercased names in catalog order.
	pub fn names(&self) -> &[String] {
		&self.names
	}

	/// Lowercased names paired with their scrolls, in catalog order.
	pub fn entries(&self) -> impl Iterator<Item = (&str, &Arc<Scroll>)> {
		self.names.iter().map(String::as_str).zip(&self.scrolls)
	}

	pub fn len(&self) -> usize {
		self.names.len()
	}

	pub fn is_empty(&self) -> bool {
		self.names.is_empty()
	}
}

/// Lazily populated, process-wide catalog. The provider is called at most once at a time and
/// the snapshot is published only after it is fully built.
pub struct CatalogCache {
	provider: Arc<dyn CatalogProvider>,
	cfg: scrolls_config::Catalog,
	catalog: OnceCell<Catalog>,
	attempts: AtomicUsize,
}
impl CatalogCache {
	pub fn new(provider: Arc<dyn CatalogProvider>, cfg: scrolls_config::Catalog) -> Self {
		Self { provider, cfg, catalog: OnceCell::new(), attempts: AtomicUsize::new(0) }
	}

	/// Populates the cache on first use. A failed attempt leaves it empty so the next call
	/// fetches again.
	pub async fn ensure_loaded(&self) -> Result<&Catalog> {
		self.catalog.get_or_try_init(|| self.populate()).await
	}

	pub fn lookup(&self, key: &str) -> Option<Arc<Scroll>> {
		self.catalog.get()?.get(key).cloned()
	}

	pub fn all_names(&self) -> Vec<String> {
		self.catalog.get().map(|catalog| catalog.names().to_vec()).unwrap_or_default()
	}

	pub fn is_loaded(&self) -> bool {
		self.catalog.initialized()
	}

	pub fn len(&self) -> usize {
		self.catalog.get().map(Catalog::len).unwrap_or(0)
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn fetch_attempts(&self) -> usize {
		self.attempts.load(Ordering::SeqCst)
	}

	async fn populate(&self) -> Result<Catalog> {
		let attempt = self.attempts.fetch_add(1, Ordering::SeqCst) + 1;
		let started = Instant::now();

		tracing::debug!(
			attempt,
			api_base = %self.cfg.api_base,
			path = %self.cfg.path,
			"Catalog fetch started."
		);

		let limit = Duration::from_millis(self.cfg.timeout_ms);
		let fetched = time::timeout(limit, self.provider.fetch_all(&self.cfg)).await;
		let built = match fetched {
			Ok(Ok(scrolls)) => Catalog::build(scrolls, self.cfg.duplicate_names),
			Ok(Err(err)) => Err(FetchError::from(err)),
			Err(_) => Err(FetchError::Timeout { timeout_ms: self.cfg.timeout_ms }),
		};
		let elapsed_ms = started.elapsed().as_millis() as u64;

		match &built {
			Ok(catalog) => tracing::info!(
				attempt,
				scrolls = catalog.len(),
				duplicate_names = self.cfg.duplicate_names.as_str(),
				elapsed_ms,
				"Catalog populated."
			),
			Err(err) => {
				tracing::warn!(attempt, error = %err, elapsed_ms, "Catalog population failed.")
			},
		}

		built.map_err(Into::into)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn builds_lowercase_index_in_source_order() {
		let catalog = Catalog::build(
			vec![Scroll::new(1, "Kinfolk Veteran"), Scroll::new(2, "Burn")],
			DuplicateNames::Reject,
		)
		.expect("build failed");

		assert_eq!(catalog.names(), &["kinfolk veteran", "burn"]);
		assert_eq!(catalog.get("burn").map(|scroll| scroll.id), Some(2));
		assert!(catalog.get("Burn").is_none());
	}

	#[test]
	fn rejects_case_insensitive_duplicates() {
		let err = Catalog::build(
			vec![Scroll::new(1, "Burn"), Scroll::new(2, "BURN")],
			DuplicateNames::Reject,
		)
		.expect_err("expected duplicate error");

		assert_eq!(err, FetchError::DuplicateName { name: "BURN".to_string() });
	}

	#[test]
	fn last_duplicate_wins_and_keeps_first_position() {
		let catalog = Catalog::build(
			vec![Scroll::new(1, "Burn"), Scroll::new(2, "Bear Paw"), Scroll::new(3, "burn")],
			DuplicateNames::LastWins,
		)
		.expect("build failed");

		assert_eq!(catalog.names(), &["burn", "bear paw"]);
		assert_eq!(catalog.get("burn").map(|scroll| scroll.id), Some(3));
		assert_eq!(
			catalog.entries().map(|(name, scroll)| (name, scroll.id)).collect::<Vec<_>>(),
			vec![("burn", 3), ("bear paw", 2)]
		);
	}

	#[test]
	fn rejects_blank_names() {
		let err = Catalog::build(vec![Scroll::new(9, " ")], DuplicateNames::LastWins)
			.expect_err("expected empty name error");

		assert_eq!(err, FetchError::EmptyName { id: 9 });
	}
}

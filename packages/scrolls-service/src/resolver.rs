use std::sync::Arc;

use crate::{Error, Result, cache::Catalog, cache::CatalogCache};
use scrolls_domain::{Scroll, Threshold, fuzzy};

pub struct Resolver {
	cache: Arc<CatalogCache>,
	threshold: Threshold,
}
impl Resolver {
	pub fn new(cache: Arc<CatalogCache>, threshold: Threshold) -> Self {
		Self { cache, threshold }
	}

	pub fn threshold(&self) -> Threshold {
		self.threshold
	}

	pub async fn resolve(&self, query: &str) -> Result<Arc<Scroll>> {
		self.resolve_with_threshold(query, self.threshold).await
	}

	pub async fn resolve_with_threshold(
		&self,
		query: &str,
		threshold: Threshold,
	) -> Result<Arc<Scroll>> {
		let catalog = self.cache.ensure_loaded().await?;

		resolve_in(catalog, query, threshold)
	}
}

/// Picks the single best scroll for `query` from a populated catalog.
///
/// An exact (case-insensitive) name wins outright. Otherwise every name is scored with the
/// partial ratio and the ones below `threshold` are dropped; a lone top score resolves, equal
/// top scores are ambiguous.
pub fn resolve_in(catalog: &Catalog, query: &str, threshold: Threshold) -> Result<Arc<Scroll>> {
	let normalized = query.to_lowercase();

	if let Some(scroll) = catalog.get(&normalized) {
		tracing::debug!(query, id = scroll.id, "Exact scroll match.");

		return Ok(scroll.clone());
	}

	let candidates = fuzzy::score_candidates(&normalized, catalog.entries(), threshold);
	let tied = fuzzy::tied_best(&candidates);

	tracing::debug!(
		query,
		threshold = %threshold,
		candidates = candidates.len(),
		tied = tied.len(),
		best_score = %tied.first().map(|candidate| candidate.score).unwrap_or_default(),
		"Fuzzy scroll match."
	);

	// Candidates carry their scroll, so the winner never needs a second lookup.
	match tied.as_slice() {
		[] => Err(Error::NotFound { query: query.to_string() }),
		[best] => Ok(best.item.clone()),
		_ => Err(Error::Ambiguous {
			query: query.to_string(),
			candidates: tied.iter().map(|candidate| candidate.item.name.clone()).collect(),
		}),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use scrolls_config::DuplicateNames;

	fn catalog(names: &[&str]) -> Catalog {
		let scrolls = names
			.iter()
			.enumerate()
			.map(|(index, name)| Scroll::new(index as u64 + 1, *name))
			.collect();

		Catalog::build(scrolls, DuplicateNames::Reject).expect("build failed")
	}

	fn threshold(fraction: f32) -> Threshold {
		Threshold::from_fraction(fraction).expect("valid threshold")
	}

	#[test]
	fn exact_name_ignores_threshold() {
		let catalog = catalog(&["Burn", "Burning Wrath"]);
		let scroll = resolve_in(&catalog, "BURN", threshold(1.0)).expect("resolve failed");

		assert_eq!(scroll.name, "Burn");
	}

	#[test]
	fn literal_ties_are_ambiguous() {
		let catalog = catalog(&["Foo", "Fon"]);
		let err = resolve_in(&catalog, "fo", threshold(0.7)).expect_err("expected ambiguity");

		match err {
			Error::Ambiguous { query, candidates } => {
				assert_eq!(query, "fo");
				assert_eq!(candidates, vec!["Foo".to_string(), "Fon".to_string()]);
			},
			other => panic!("Unexpected error: {other:?}"),
		}
	}

	#[test]
	fn strictly_higher_score_wins() {
		let catalog = catalog(&["Foo", "Fon"]);
		let scroll = resolve_in(&catalog, "foon", threshold(0.7)).expect("resolve failed");

		assert_eq!(scroll.name, "Foo");
	}

	#[test]
	fn ambiguity_keeps_original_query_text() {
		let catalog = catalog(&["Foo", "Fon"]);
		let err = resolve_in(&catalog, "FOX", threshold(0.6)).expect_err("expected ambiguity");

		assert_eq!(err.to_string(), "Multiple scrolls match 'FOX': Foo, Fon");
	}

	#[test]
	fn empty_catalog_is_not_found() {
		let catalog = catalog(&[]);
		let err = resolve_in(&catalog, "anything", threshold(0.0)).expect_err("expected not found");

		assert!(matches!(err, Error::NotFound { .. }));
	}

	#[test]
	fn empty_query_scores_zero() {
		let catalog = catalog(&["Burn", "Bear Paw"]);
		let err = resolve_in(&catalog, "", threshold(0.7)).expect_err("expected not found");

		assert!(matches!(err, Error::NotFound { .. }));

		let err = resolve_in(&catalog, "", threshold(0.0)).expect_err("expected ambiguity");

		assert!(matches!(err, Error::Ambiguous { .. }));
	}
}

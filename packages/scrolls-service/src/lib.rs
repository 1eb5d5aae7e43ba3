pub mod cache;
pub mod resolver;

mod error;

pub use cache::{Catalog, CatalogCache};
pub use error::{Error, FetchError, MAX_LISTED_CANDIDATES, Result};
pub use resolver::{Resolver, resolve_in};

use std::{future::Future, pin::Pin, sync::Arc};

use scrolls_config::Config;
use scrolls_domain::{Scroll, Threshold};
use scrolls_providers::catalog;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

pub trait CatalogProvider
where
	Self: Send + Sync,
{
	fn fetch_all<'a>(
		&'a self,
		cfg: &'a scrolls_config::Catalog,
	) -> BoxFuture<'a, scrolls_providers::Result<Vec<Scroll>>>;
}

struct HttpCatalogProvider;
impl CatalogProvider for HttpCatalogProvider {
	fn fetch_all<'a>(
		&'a self,
		cfg: &'a scrolls_config::Catalog,
	) -> BoxFuture<'a, scrolls_providers::Result<Vec<Scroll>>> {
		Box::pin(catalog::fetch_all(cfg))
	}
}

pub struct ScrollService {
	pub cfg: Config,
	cache: Arc<CatalogCache>,
	resolver: Resolver,
}
impl ScrollService {
	/// Rejects configurations that fail validation, including a threshold outside 0.0-1.0.
	pub fn new(cfg: Config, provider: Arc<dyn CatalogProvider>) -> Result<Self> {
		scrolls_config::validate(&cfg)?;

		let threshold = Threshold::from_fraction(cfg.matching.threshold).ok_or_else(|| {
			Error::InvalidConfig {
				message: "matching.threshold must be in the range 0.0-1.0.".to_string(),
			}
		})?;
		let cache = Arc::new(CatalogCache::new(provider, cfg.catalog.clone()));
		let resolver = Resolver::new(cache.clone(), threshold);

		Ok(Self { cfg, cache, resolver })
	}

	pub fn with_default_provider(cfg: Config) -> Result<Self> {
		Self::new(cfg, Arc::new(HttpCatalogProvider))
	}

	pub fn cache(&self) -> &Arc<CatalogCache> {
		&self.cache
	}

	pub fn threshold(&self) -> Threshold {
		self.resolver.threshold()
	}

	/// Populates the catalog ahead of the first query and returns the number of scrolls.
	pub async fn warm_up(&self) -> Result<usize> {
		Ok(self.cache.ensure_loaded().await?.len())
	}

	pub async fn resolve(&self, query: &str) -> Result<Arc<Scroll>> {
		self.resolver.resolve(query).await
	}

	pub async fn resolve_with_threshold(
		&self,
		query: &str,
		threshold: Threshold,
	) -> Result<Arc<Scroll>> {
		self.resolver.resolve_with_threshold(query, threshold).await
	}
}

mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Catalog, Config, DuplicateNames, Matching, Service};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;
	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.log_level.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.log_level must be non-empty.".to_string(),
		});
	}
	if !(cfg.catalog.api_base.starts_with("http://")
		|| cfg.catalog.api_base.starts_with("https://"))
	{
		return Err(Error::Validation {
			message: "catalog.api_base must start with http:// or https://.".to_string(),
		});
	}
	if !cfg.catalog.path.starts_with('/') {
		return Err(Error::Validation {
			message: "catalog.path must start with '/'.".to_string(),
		});
	}
	if cfg.catalog.timeout_ms == 0 {
		return Err(Error::Validation {
			message: "catalog.timeout_ms must be greater than zero.".to_string(),
		});
	}

	for (key, value) in &cfg.catalog.default_headers {
		if !value.is_string() {
			return Err(Error::Validation {
				message: format!("catalog.default_headers.{key} must be a string."),
			});
		}
	}

	if !cfg.matching.threshold.is_finite() {
		return Err(Error::Validation {
			message: "matching.threshold must be a finite number.".to_string(),
		});
	}
	if !(0.0..=1.0).contains(&cfg.matching.threshold) {
		return Err(Error::Validation {
			message: "matching.threshold must be in the range 0.0-1.0.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	let api_base = cfg.catalog.api_base.trim().trim_end_matches('/').to_string();
	let path = cfg.catalog.path.trim().to_string();

	cfg.catalog.api_base = api_base;
	cfg.catalog.path = if path.is_empty() { types::default_catalog_path() } else { path };
}

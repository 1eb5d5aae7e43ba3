use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::{Error, Result};
use scrolls_domain::Scroll;

pub async fn fetch_all(cfg: &scrolls_config::Catalog) -> Result<Vec<Scroll>> {
	let client = Client::builder().timeout(Duration::from_millis(cfg.timeout_ms)).build()?;
	let url = catalog_url(cfg);
	let res = client.get(url).headers(crate::request_headers(&cfg.default_headers)?).send().await?;
	let text = res.error_for_status()?.text().await?;
	let json: Value = serde_json::from_str(&text)?;

	parse_catalog_response(json)
}

pub fn catalog_url(cfg: &scrolls_config::Catalog) -> String {
	format!("{}{}", cfg.api_base, cfg.path)
}

fn parse_catalog_response(json: Value) -> Result<Vec<Scroll>> {
	let Value::Object(mut root) = json else {
		return Err(Error::InvalidResponse {
			message: "Catalog response must be a JSON object.".to_string(),
		});
	};
	let items = match root.remove("data") {
		None | Some(Value::Null) => return Ok(Vec::new()),
		Some(Value::Array(items)) => items,
		Some(_) => {
			return Err(Error::InvalidResponse {
				message: "Catalog response data must be an array.".to_string(),
			});
		},
	};
	let mut scrolls = Vec::with_capacity(items.len());

	for (index, item) in items.into_iter().enumerate() {
		if !item.is_object() {
			return Err(Error::InvalidResponse {
				message: format!("Catalog item {index} must be an object."),
			});
		}

		let scroll: Scroll = serde_json::from_value(item).map_err(|err| Error::InvalidResponse {
			message: format!("Catalog item {index} is invalid: {err}"),
		})?;

		scrolls.push(scroll);
	}

	Ok(scrolls)
}

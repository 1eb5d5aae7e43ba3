use std::{path::PathBuf, sync::Arc};

use clap::Parser;
use color_eyre::eyre;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use scrolls_domain::{Scroll, Threshold};
use scrolls_service::{Error, ScrollService};

#[derive(Debug, Parser)]
#[command(
	version = scrolls_cli::VERSION,
	rename_all = "kebab",
	styles = scrolls_cli::styles(),
)]
pub struct Args {
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: PathBuf,
	/// Overrides matching.threshold for this run (0.0-1.0).
	#[arg(long, short = 't', value_name = "FRACTION")]
	pub threshold: Option<f32>,
	#[arg(value_name = "QUERY", required = true)]
	pub queries: Vec<String>,
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
	Found { query: String, id: u64, name: String },
	NotFound { query: String },
	Ambiguous { query: String, candidates: Vec<String>, message: String },
	FetchError { query: String, message: String },
	InvalidConfig { query: String, message: String },
}
impl Outcome {
	pub fn from_result(query: &str, result: Result<Arc<Scroll>, Error>) -> Self {
		let query = query.to_string();
		let err = match result {
			Ok(scroll) => return Self::Found { query, id: scroll.id, name: scroll.name.clone() },
			Err(err) => err,
		};
		let message = err.to_string();

		match err {
			Error::NotFound { .. } => Self::NotFound { query },
			Error::Ambiguous { candidates, .. } => Self::Ambiguous { query, candidates, message },
			Error::Fetch(_) => Self::FetchError { query, message },
			Error::InvalidConfig { .. } => Self::InvalidConfig { query, message },
		}
	}
}

pub async fn run(args: Args) -> color_eyre::Result<()> {
	let config = scrolls_config::load(&args.config)?;

	init_tracing(&config);

	let service = Arc::new(ScrollService::with_default_provider(config)?);
	let threshold = match args.threshold {
		Some(fraction) => Threshold::from_fraction(fraction)
			.ok_or_else(|| eyre::eyre!("--threshold must be in the range 0.0-1.0."))?,
		None => service.threshold(),
	};

	tracing::info!(queries = args.queries.len(), %threshold, "Resolving scroll queries.");

	for outcome in resolve_all(service, args.queries, threshold).await? {
		println!("{}", serde_json::to_string(&outcome)?);
	}

	Ok(())
}

/// Resolves every query concurrently against one shared service, keeping input order.
pub async fn resolve_all(
	service: Arc<ScrollService>,
	queries: Vec<String>,
	threshold: Threshold,
) -> color_eyre::Result<Vec<Outcome>> {
	let mut handles = Vec::with_capacity(queries.len());

	for query in queries {
		let service = service.clone();

		handles.push(tokio::spawn(async move {
			let result = service.resolve_with_threshold(&query, threshold).await;

			Outcome::from_result(&query, result)
		}));
	}

	let mut outcomes = Vec::with_capacity(handles.len());

	for handle in handles {
		outcomes.push(handle.await?);
	}

	Ok(outcomes)
}

fn init_tracing(config: &scrolls_config::Config) {
	let filter =
		EnvFilter::try_new(&config.service.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

	// Logs go to stderr so stdout stays one JSON object per query.
	if let Err(err) =
		tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init()
	{
		eprintln!("Tracing subscriber was already installed: {err}.");
	}
}

mod error;

pub use axum::http::StatusCode;
pub use error::{Error, Result};

use std::{
	net::SocketAddr,
	sync::{
		Arc, Mutex,
		atomic::{AtomicUsize, Ordering},
	},
	time::Duration,
};

use axum::{
	Router,
	extract::State,
	http::{HeaderMap, header},
	routing::get,
};
use serde_json::Value;
use tokio::{net::TcpListener, task::JoinHandle, time};

pub const CATALOG_PATH: &str = "/scrolls";

struct ServerState {
	status: StatusCode,
	body: String,
	delay: Duration,
	hits: AtomicUsize,
	headers: Mutex<Vec<HeaderMap>>,
}

/// Serves a fixed catalog document on `127.0.0.1` and records every request it answers.
pub struct CatalogServer {
	addr: SocketAddr,
	state: Arc<ServerState>,
	handle: JoinHandle<()>,
}
impl CatalogServer {
	pub async fn start(body: Value) -> Result<Self> {
		Self::start_raw(StatusCode::OK, body.to_string(), Duration::ZERO).await
	}

	pub async fn start_delayed(body: Value, delay: Duration) -> Result<Self> {
		Self::start_raw(StatusCode::OK, body.to_string(), delay).await
	}

	pub async fn start_raw(
		status: StatusCode,
		body: impl Into<String>,
		delay: Duration,
	) -> Result<Self> {
		let state = Arc::new(ServerState {
			status,
			body: body.into(),
			delay,
			hits: AtomicUsize::new(0),
			headers: Mutex::new(Vec::new()),
		});
		let app = Router::new().route(CATALOG_PATH, get(serve_catalog)).with_state(state.clone());
		let listener = TcpListener::bind("127.0.0.1:0").await?;
		let addr = listener.local_addr()?;
		let handle = tokio::spawn(async move {
			if let Err(err) = axum::serve(listener, app).await {
				eprintln!("Catalog test server stopped: {err}.");
			}
		});

		Ok(Self { addr, state, handle })
	}

	pub fn api_base(&self) -> String {
		format!("http://{}", self.addr)
	}

	pub fn hits(&self) -> usize {
		self.state.hits.load(Ordering::SeqCst)
	}

	/// Value of `name` on the most recent request, if any.
	pub fn last_header(&self, name: &str) -> Option<String> {
		let seen = self.state.headers.lock().unwrap_or_else(|err| err.into_inner());

		seen.last()
			.and_then(|headers| headers.get(name))
			.and_then(|value| value.to_str().ok())
			.map(str::to_string)
	}
}
impl Drop for CatalogServer {
	fn drop(&mut self) {
		self.handle.abort();
	}
}

async fn serve_catalog(
	State(state): State<Arc<ServerState>>,
	headers: HeaderMap,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], String) {
	state.hits.fetch_add(1, Ordering::SeqCst);
	state.headers.lock().unwrap_or_else(|err| err.into_inner()).push(headers);

	if !state.delay.is_zero() {
		time::sleep(state.delay).await;
	}

	(state.status, [(header::CONTENT_TYPE, "application/json")], state.body.clone())
}

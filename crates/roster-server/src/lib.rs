//! Assembly of the Roster HTTP server: configuration, store opening and the
//! top-level router. The `roster` binary is a thin wrapper around this.

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use axum::Router;
use roster_core::EmployeeService;
use roster_store_sqlite::SqliteStore;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration.
///
/// Layered, lowest precedence first: built-in defaults, the TOML file,
/// `ROSTER_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  pub store_path: PathBuf,
}

impl ServerConfig {
  /// Load configuration from `path` (which may be absent) and the
  /// environment.
  pub fn load(path: &Path) -> Result<Self, config::ConfigError> {
    config::Config::builder()
      .set_default("host", "127.0.0.1")?
      .set_default("port", 8080)?
      .set_default("store_path", "roster.db")?
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("ROSTER"))
      .build()?
      .try_deserialize()
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

// ─── Store ────────────────────────────────────────────────────────────────────

/// Open the SQLite store at `path`. SQLite itself treats `:memory:` as an
/// in-memory database.
pub async fn open_store(path: &Path) -> roster_store_sqlite::Result<SqliteStore> {
  SqliteStore::open(expand_tilde(path)).await
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the full application: the employee API under `/api`, with request
/// tracing.
pub fn app(store: SqliteStore) -> Router {
  let service = Arc::new(EmployeeService::new(store));
  Router::new()
    .nest("/api", roster_api::api_router(service))
    .layer(TraceLayer::new_for_http())
}

//! JSON REST API for Roster.
//!
//! Maps the `/employees` routes onto an [`EmployeeService`] and turns its
//! errors into status codes (404 for a missing id, 409 for a taken email).
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", roster_api::api_router(service.clone()))
//! ```

pub mod employees;
pub mod error;

use std::sync::Arc;

use axum::{Router, routing::get};
use roster_core::{EmployeeService, EmployeeStore};

pub use error::ApiError;

/// Router for the employee endpoints, with `service` already bound as state
/// so it can be nested under any prefix.
pub fn api_router<S>(service: Arc<EmployeeService<S>>) -> Router<()>
where
  S: EmployeeStore + 'static,
{
  Router::new()
    .route(
      "/employees",
      get(employees::list::<S>).post(employees::create::<S>),
    )
    .route("/employees/search", get(employees::search::<S>))
    .route(
      "/employees/{id}",
      get(employees::get_one::<S>)
        .put(employees::update::<S>)
        .delete(employees::delete::<S>),
    )
    .with_state(service)
}

// ─── Integration tests ────────────────────────────────────────────────────────

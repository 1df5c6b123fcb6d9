//! Handlers for `/employees` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `POST`   | `/employees` | Body: [`NewEmployee`]; 201 + stored employee, 409 on a taken email |
//! | `GET`    | `/employees` | All employees |
//! | `GET`    | `/employees/search` | `?email=` or `?firstName=&lastName=`; 0 or 1 results |
//! | `GET`    | `/employees/:id` | 404 if not found |
//! | `PUT`    | `/employees/:id` | Body: [`EmployeePatch`]; 404 if not found |
//! | `DELETE` | `/employees/:id` | Plain-text confirmation, even for an absent id |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use roster_core::{
  Employee, EmployeeId, EmployeePatch, EmployeeService, EmployeeStore,
  NewEmployee,
};
use serde::Deserialize;

use crate::error::ApiError;

pub const DELETED_MESSAGE: &str = "Employee deleted successfully!.";

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /employees` — returns 201 + the stored [`Employee`].
pub async fn create<S>(
  State(service): State<Arc<EmployeeService<S>>>,
  Json(body): Json<NewEmployee>,
) -> Result<impl IntoResponse, ApiError>
where
  S: EmployeeStore,
{
  let employee = service.create(body).await?;
  Ok((StatusCode::CREATED, Json(employee)))
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /employees`
pub async fn list<S>(
  State(service): State<Arc<EmployeeService<S>>>,
) -> Result<Json<Vec<Employee>>, ApiError>
where
  S: EmployeeStore,
{
  Ok(Json(service.list().await?))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /employees/:id`
pub async fn get_one<S>(
  State(service): State<Arc<EmployeeService<S>>>,
  Path(id): Path<EmployeeId>,
) -> Result<Json<Employee>, ApiError>
where
  S: EmployeeStore,
{
  Ok(Json(service.get_by_id(id).await?))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /employees/:id` — fetch, overlay the body, persist.
pub async fn update<S>(
  State(service): State<Arc<EmployeeService<S>>>,
  Path(id): Path<EmployeeId>,
  Json(patch): Json<EmployeePatch>,
) -> Result<Json<Employee>, ApiError>
where
  S: EmployeeStore,
{
  let merged = service.get_by_id(id).await?.apply(patch);
  Ok(Json(service.update(merged).await?))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /employees/:id`
pub async fn delete<S>(
  State(service): State<Arc<EmployeeService<S>>>,
  Path(id): Path<EmployeeId>,
) -> Result<impl IntoResponse, ApiError>
where
  S: EmployeeStore,
{
  service.delete(id).await?;
  Ok((StatusCode::OK, DELETED_MESSAGE))
}

// ─── Search ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
  pub email:      Option<String>,
  pub first_name: Option<String>,
  pub last_name:  Option<String>,
}

/// `GET /employees/search?email=...` or `?firstName=...&lastName=...`
///
/// `email` wins when both forms are given.
pub async fn search<S>(
  State(service): State<Arc<EmployeeService<S>>>,
  Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Employee>>, ApiError>
where
  S: EmployeeStore,
{
  let found = match params {
    SearchParams { email: Some(email), .. } => {
      service.find_by_email(&email).await?
    }
    SearchParams {
      first_name: Some(first),
      last_name: Some(last),
      ..
    } => service.find_by_first_last_name(&first, &last).await?,
    _ => {
      return Err(ApiError::BadRequest(
        "expected `email` or both `firstName` and `lastName`".to_owned(),
      ));
    }
  };

  Ok(Json(found.into_iter().collect()))
}

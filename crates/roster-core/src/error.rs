//! Error types for `roster-core`.

use thiserror::Error;

use crate::employee::EmployeeId;

#[derive(Debug, Error)]
pub enum Error {
  #[error("employee already exists with the given email: {0}")]
  DuplicateEmail(String),

  #[error("employee not found: {0}")]
  NotFound(EmployeeId),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  pub(crate) fn store<E>(e: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Store(Box::new(e))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

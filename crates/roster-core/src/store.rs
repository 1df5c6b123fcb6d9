//! The `EmployeeStore` trait — the storage collaborator.
//!
//! The trait is implemented by storage backends (e.g. `roster-store-sqlite`).
//! [`EmployeeService`](crate::service::EmployeeService) depends on this
//! abstraction, not on any concrete backend.

use std::future::Future;

use crate::employee::{Employee, EmployeeId, NewEmployee};

/// Errors raised by a storage backend.
pub trait StoreError: std::error::Error + Send + Sync + 'static {
  /// `true` when a write was rejected by the unique `email` constraint.
  fn is_email_conflict(&self) -> bool;
}

/// Abstraction over an employee store backend.
///
/// Uniqueness of `email` is checked by the service before insertion, but a
/// backend should also reject duplicate emails itself and report the
/// rejection through [`StoreError::is_email_conflict`]; that closes the race
/// between the check and the insert.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait EmployeeStore: Send + Sync {
  type Error: StoreError;

  /// Persist a new employee and return it with its assigned id.
  fn insert(
    &self,
    input: NewEmployee,
  ) -> impl Future<Output = Result<Employee, Self::Error>> + Send + '_;

  /// Retrieve an employee by id. Returns `None` if not found.
  fn get(
    &self,
    id: EmployeeId,
  ) -> impl Future<Output = Result<Option<Employee>, Self::Error>> + Send + '_;

  /// List all employees in storage-native order.
  fn list(
    &self,
  ) -> impl Future<Output = Result<Vec<Employee>, Self::Error>> + Send + '_;

  /// Overwrite every mutable field of the row with `employee.id`.
  /// Returns `None` if no such row exists.
  fn update(
    &self,
    employee: Employee,
  ) -> impl Future<Output = Result<Option<Employee>, Self::Error>> + Send + '_;

  /// Remove the row with `id`. Returns whether a row was removed.
  fn delete(
    &self,
    id: EmployeeId,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  /// Exact match on `email`; first result if any.
  fn find_by_email<'a>(
    &'a self,
    email: &'a str,
  ) -> impl Future<Output = Result<Option<Employee>, Self::Error>> + Send + 'a;

  /// Exact match on both names; first result (lowest id) if any.
  fn find_by_first_last_name<'a>(
    &'a self,
    first_name: &'a str,
    last_name: &'a str,
  ) -> impl Future<Output = Result<Option<Employee>, Self::Error>> + Send + 'a;
}

//! [`EmployeeService`] — business rules between callers and storage.
//!
//! The service holds no mutable state of its own. It enforces email
//! uniqueness on create and turns a missing id into [`Error::NotFound`];
//! everything else is delegated to the [`EmployeeStore`].

use tracing::{debug, info, warn};

use crate::{
  Error, Result,
  employee::{Employee, EmployeeId, NewEmployee},
  store::{EmployeeStore, StoreError},
};

pub struct EmployeeService<S> {
  store: S,
}

impl<S: EmployeeStore> EmployeeService<S> {
  pub fn new(store: S) -> Self { Self { store } }

  /// Persist `input` unless another employee already uses its email.
  ///
  /// The lookup and the insert are separate statements; a backend unique
  /// constraint catches a concurrent create that slips between them.
  pub async fn create(&self, input: NewEmployee) -> Result<Employee> {
    let existing = self
      .store
      .find_by_email(&input.email)
      .await
      .map_err(Error::store)?;

    if existing.is_some() {
      warn!(email = %input.email, "rejected create: email already in use");
      return Err(Error::DuplicateEmail(input.email));
    }

    let email = input.email.clone();
    match self.store.insert(input).await {
      Ok(employee) => {
        info!(id = employee.id, "created employee");
        Ok(employee)
      }
      Err(e) if e.is_email_conflict() => {
        warn!(%email, "rejected create: email taken concurrently");
        Err(Error::DuplicateEmail(email))
      }
      Err(e) => Err(Error::store(e)),
    }
  }

  /// All employees; an empty store yields an empty vec.
  pub async fn list(&self) -> Result<Vec<Employee>> {
    self.store.list().await.map_err(Error::store)
  }

  /// The employee with `id`, or [`Error::NotFound`].
  pub async fn get_by_id(&self, id: EmployeeId) -> Result<Employee> {
    self
      .store
      .get(id)
      .await
      .map_err(Error::store)?
      .ok_or(Error::NotFound(id))
  }

  /// Persist an already-merged record. Email uniqueness is not re-checked
  /// here, though the backend constraint may still reject the write.
  pub async fn update(&self, employee: Employee) -> Result<Employee> {
    let id = employee.id;
    let email = employee.email.clone();
    match self.store.update(employee).await {
      Ok(Some(updated)) => {
        info!(id, "updated employee");
        Ok(updated)
      }
      Ok(None) => Err(Error::NotFound(id)),
      Err(e) if e.is_email_conflict() => {
        warn!(%email, "rejected update: email already in use");
        Err(Error::DuplicateEmail(email))
      }
      Err(e) => Err(Error::store(e)),
    }
  }

  /// Remove the employee with `id`. Deleting an absent id succeeds.
  pub async fn delete(&self, id: EmployeeId) -> Result<()> {
    if self.store.delete(id).await.map_err(Error::store)? {
      info!(id, "deleted employee");
    } else {
      debug!(id, "delete of absent employee ignored");
    }
    Ok(())
  }

  pub async fn find_by_email(&self, email: &str) -> Result<Option<Employee>> {
    self.store.find_by_email(email).await.map_err(Error::store)
  }

  pub async fn find_by_first_last_name(
    &self,
    first_name: &str,
    last_name: &str,
  ) -> Result<Option<Employee>> {
    self
      .store
      .find_by_first_last_name(first_name, last_name)
      .await
      .map_err(Error::store)
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

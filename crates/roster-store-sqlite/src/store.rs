//! [`SqliteStore`] — the SQLite implementation of [`EmployeeStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;

use roster_core::{Employee, EmployeeId, EmployeeStore, NewEmployee};

use crate::{
  Error, Result,
  row::{COLUMNS, employee_from_row},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// An employee store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Run a single-row `SELECT {COLUMNS} FROM employees WHERE …` query.
  async fn select_one<P>(
    &self,
    where_clause: &'static str,
    params: P,
  ) -> Result<Option<Employee>>
  where
    P: rusqlite::Params + Send + 'static,
  {
    let employee = self
      .conn
      .call(move |conn| {
        let sql = format!(
          "SELECT {COLUMNS} FROM employees WHERE {where_clause} \
           ORDER BY id LIMIT 1"
        );
        Ok(conn.query_row(&sql, params, employee_from_row).optional()?)
      })
      .await?;
    Ok(employee)
  }
}

// ─── EmployeeStore impl ──────────────────────────────────────────────────────

impl EmployeeStore for SqliteStore {
  type Error = Error;

  async fn insert(&self, input: NewEmployee) -> Result<Employee> {
    let NewEmployee { first_name, last_name, email } = input.clone();

    let id: EmployeeId = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO employees (first_name, last_name, email) VALUES (?1, ?2, ?3)",
          rusqlite::params![first_name, last_name, email],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(input.with_id(id))
  }

  async fn get(&self, id: EmployeeId) -> Result<Option<Employee>> {
    self.select_one("id = ?1", [id]).await
  }

  async fn list(&self) -> Result<Vec<Employee>> {
    let employees = self
      .conn
      .call(|conn| {
        let mut stmt =
          conn.prepare(&format!("SELECT {COLUMNS} FROM employees ORDER BY id"))?;
        let rows = stmt
          .query_map([], employee_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(employees)
  }

  async fn update(&self, employee: Employee) -> Result<Option<Employee>> {
    let Employee { id, first_name, last_name, email } = employee.clone();

    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE employees SET first_name = ?1, last_name = ?2, email = ?3
           WHERE id = ?4",
          rusqlite::params![first_name, last_name, email, id],
        )?)
      })
      .await?;

    Ok((changed > 0).then_some(employee))
  }

  async fn delete(&self, id: EmployeeId) -> Result<bool> {
    let removed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute("DELETE FROM employees WHERE id = ?1", [id])?)
      })
      .await?;
    Ok(removed > 0)
  }

  async fn find_by_email(&self, email: &str) -> Result<Option<Employee>> {
    self.select_one("email = ?1", [email.to_owned()]).await
  }

  async fn find_by_first_last_name(
    &self,
    first_name: &str,
    last_name: &str,
  ) -> Result<Option<Employee>> {
    self
      .select_one(
        "first_name = ?1 AND last_name = ?2",
        [first_name.to_owned(), last_name.to_owned()],
      )
      .await
  }
}

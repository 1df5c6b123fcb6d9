//! Mapping between `employees` rows and [`Employee`].

use roster_core::Employee;

/// Column list shared by every `SELECT`; order matches [`employee_from_row`].
pub const COLUMNS: &str = "id, first_name, last_name, email";

pub fn employee_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Employee> {
  Ok(Employee {
    id:         row.get(0)?,
    first_name: row.get(1)?,
    last_name:  row.get(2)?,
    email:      row.get(3)?,
  })
}

//! Employee — the sole entity of the directory.
//!
//! An employee is identified by a numeric id that storage assigns on insert
//! and that never changes afterwards. Every other field may be rewritten.

use serde::{Deserialize, Serialize};

/// Storage-assigned identifier. Always positive once persisted.
pub type EmployeeId = i64;

// ─── Employee ────────────────────────────────────────────────────────────────

/// A persisted employee record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
  pub id:         EmployeeId,
  pub first_name: String,
  pub last_name:  String,
  /// Unique across all persisted employees.
  pub email:      String,
}

impl Employee {
  /// Overlay the fields present in `patch` onto this record. `id` is kept.
  pub fn apply(mut self, patch: EmployeePatch) -> Self {
    if let Some(first_name) = patch.first_name {
      self.first_name = first_name;
    }
    if let Some(last_name) = patch.last_name {
      self.last_name = last_name;
    }
    if let Some(email) = patch.email {
      self.email = email;
    }
    self
  }
}

// ─── NewEmployee ─────────────────────────────────────────────────────────────

/// Input to [`crate::service::EmployeeService::create`].
/// `id` is always assigned by the store; an `id` in a request body is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
  pub first_name: String,
  pub last_name:  String,
  pub email:      String,
}

impl NewEmployee {
  pub fn new(
    first_name: impl Into<String>,
    last_name: impl Into<String>,
    email: impl Into<String>,
  ) -> Self {
    Self {
      first_name: first_name.into(),
      last_name:  last_name.into(),
      email:      email.into(),
    }
  }

  /// Attach a storage-assigned id.
  pub fn with_id(self, id: EmployeeId) -> Employee {
    Employee {
      id,
      first_name: self.first_name,
      last_name: self.last_name,
      email: self.email,
    }
  }
}

// ─── EmployeePatch ───────────────────────────────────────────────────────────

/// Fields to overlay on an existing record; absent fields are left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePatch {
  pub first_name: Option<String>,
  pub last_name:  Option<String>,
  pub email:      Option<String>,
}

#[cfg(test)]
mod tests {
  use super::*;

  fn john() -> Employee {
    NewEmployee::new("John", "Cena", "john@gmail.com").with_id(1)
  }

  #[test]
  fn apply_overlays_present_fields_only() {
    let patched = john().apply(EmployeePatch {
      email: Some("cena@gmail.com".into()),
      ..Default::default()
    });

    assert_eq!(patched.id, 1);
    assert_eq!(patched.first_name, "John");
    assert_eq!(patched.last_name, "Cena");
    assert_eq!(patched.email, "cena@gmail.com");
  }

  #[test]
  fn apply_full_patch_keeps_id() {
    let patched = john().apply(EmployeePatch {
      first_name: Some("Johnson".into()),
      last_name:  Some("C".into()),
      email:      Some("johnson@gmail.com".into()),
    });

    assert_eq!(
      patched,
      NewEmployee::new("Johnson", "C", "johnson@gmail.com").with_id(1)
    );
  }

  #[test]
  fn json_uses_camel_case() {
    let value = serde_json_value(&john());
    assert_eq!(value["firstName"], "John");
    assert_eq!(value["lastName"], "Cena");
    assert_eq!(value["email"], "john@gmail.com");
    assert_eq!(value["id"], 1);
  }

  fn serde_json_value(e: &Employee) -> serde_json::Value {
    serde_json::to_value(e).expect("serialise employee")
  }
}

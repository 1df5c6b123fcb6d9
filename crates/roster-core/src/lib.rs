//! Employee model, storage trait and service for Roster.
//!
//! Holds the email-uniqueness rule and the `NotFound` / `DuplicateEmail`
//! errors. Storage backends and the HTTP layer live in sibling crates.

pub mod employee;
pub mod error;
pub mod service;
pub mod store;

pub use employee::{Employee, EmployeeId, EmployeePatch, NewEmployee};
pub use error::{Error, Result};
pub use service::EmployeeService;
pub use store::{EmployeeStore, StoreError};

//! Integration tests for `SqliteStore` against an in-memory database.

use roster_core::{EmployeeStore, NewEmployee, StoreError};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn john() -> NewEmployee { NewEmployee::new("John", "Cena", "john@gmail.com") }

fn will() -> NewEmployee { NewEmployee::new("Will", "Smith", "will@gmail.com") }

// ─── Insert / get ────────────────────────────────────────────────────────────

#[tokio::test]
async fn insert_assigns_positive_id() {
  let s = store().await;

  let saved = s.insert(john()).await.unwrap();
  assert!(saved.id > 0);
  assert_eq!(saved.first_name, "John");
  assert_eq!(saved.email, "john@gmail.com");
}

#[tokio::test]
async fn insert_and_get() {
  let s = store().await;
  let saved = s.insert(john()).await.unwrap();

  let fetched = s.get(saved.id).await.unwrap();
  assert_eq!(fetched, Some(saved));
}

#[tokio::test]
async fn get_missing_returns_none() {
  let s = store().await;
  assert!(s.get(1).await.unwrap().is_none());
}

#[tokio::test]
async fn duplicate_email_is_a_conflict() {
  let s = store().await;
  s.insert(john()).await.unwrap();

  let err = s
    .insert(NewEmployee::new("Other", "Person", "john@gmail.com"))
    .await
    .unwrap_err();
  assert!(err.is_email_conflict(), "unexpected error: {err}");
  assert_eq!(s.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn ids_are_not_reused_after_delete() {
  let s = store().await;
  let first = s.insert(john()).await.unwrap();
  s.delete(first.id).await.unwrap();

  let second = s.insert(john()).await.unwrap();
  assert!(second.id > first.id);
}

// ─── List ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_empty() {
  let s = store().await;
  assert!(s.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn list_in_id_order() {
  let s = store().await;
  let a = s.insert(john()).await.unwrap();
  let b = s.insert(will()).await.unwrap();

  let all = s.list().await.unwrap();
  assert_eq!(all, vec![a, b]);
}

// ─── Update ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn update_overwrites_fields() {
  let s = store().await;
  let mut saved = s.insert(john()).await.unwrap();
  saved.first_name = "Johnson".into();
  saved.email = "johnson@gmail.com".into();

  let updated = s.update(saved.clone()).await.unwrap();
  assert_eq!(updated.as_ref(), Some(&saved));
  assert_eq!(s.get(saved.id).await.unwrap(), Some(saved));
}

#[tokio::test]
async fn update_missing_returns_none() {
  let s = store().await;
  let ghost = john().with_id(7);
  assert!(s.update(ghost).await.unwrap().is_none());
  assert!(s.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn update_onto_taken_email_is_a_conflict() {
  let s = store().await;
  s.insert(john()).await.unwrap();
  let mut other = s.insert(will()).await.unwrap();
  other.email = "john@gmail.com".into();

  let err = s.update(other).await.unwrap_err();
  assert!(err.is_email_conflict());
}

// ─── Delete ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_reports_whether_removed() {
  let s = store().await;
  let saved = s.insert(john()).await.unwrap();

  assert!(s.delete(saved.id).await.unwrap());
  assert!(!s.delete(saved.id).await.unwrap());
  assert!(s.get(saved.id).await.unwrap().is_none());
}

// ─── Lookups ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn find_by_email_exact_match() {
  let s = store().await;
  let saved = s.insert(john()).await.unwrap();
  s.insert(will()).await.unwrap();

  assert_eq!(s.find_by_email("john@gmail.com").await.unwrap(), Some(saved));
  assert!(s.find_by_email("JOHN@gmail.com").await.unwrap().is_none());
  assert!(s.find_by_email("john@").await.unwrap().is_none());
}

#[tokio::test]
async fn find_by_first_last_name_returns_lowest_id() {
  let s = store().await;
  let first = s.insert(john()).await.unwrap();
  s.insert(NewEmployee::new("John", "Cena", "cena@gmail.com"))
    .await
    .unwrap();

  let found = s.find_by_first_last_name("John", "Cena").await.unwrap();
  assert_eq!(found, Some(first));

  assert!(
    s.find_by_first_last_name("John", "Smith")
      .await
      .unwrap()
      .is_none()
  );
}

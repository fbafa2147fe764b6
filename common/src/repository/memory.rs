//! In-process testimonial store.
//!
//! Behaves like the hosted table: it assigns ids and increasing timestamps and
//! does not enforce `(name, role)` uniqueness. Failures can be injected per
//! operation and every call is counted, which is what the submission tests use.

use std::cell::{Cell, RefCell};

use chrono::{DateTime, Duration};

use super::{RepositoryError, TestimonialRepository};
use crate::model::testimonial::{NewTestimonial, Testimonial};

/// 2025-01-01T00:00:00Z
const EPOCH_SECONDS: i64 = 1_735_689_600;

#[derive(Debug, Default)]
pub struct MemoryRepository {
    records: RefCell<Vec<Testimonial>>,
    next_id: Cell<u64>,
    list_failure: RefCell<Option<RepositoryError>>,
    exists_failure: RefCell<Option<RepositoryError>>,
    insert_failure: RefCell<Option<RepositoryError>>,
    list_calls: Cell<usize>,
    exists_calls: Cell<usize>,
    insert_calls: Cell<usize>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store as if each candidate had been inserted in order.
    pub fn with_records(candidates: &[NewTestimonial]) -> Result<Self, RepositoryError> {
        let repository = Self::new();
        for candidate in candidates {
            repository.append(candidate)?;
        }
        Ok(repository)
    }

    pub fn fail_list_with(&self, error: Option<RepositoryError>) {
        *self.list_failure.borrow_mut() = error;
    }

    pub fn fail_exists_with(&self, error: Option<RepositoryError>) {
        *self.exists_failure.borrow_mut() = error;
    }

    pub fn fail_insert_with(&self, error: Option<RepositoryError>) {
        *self.insert_failure.borrow_mut() = error;
    }

    pub fn records(&self) -> Vec<Testimonial> {
        self.records.borrow().clone()
    }

    pub fn count_matching(&self, name: &str, role: &str) -> usize {
        self.records
            .borrow()
            .iter()
            .filter(|t| t.name == name && t.role == role)
            .count()
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.get()
    }

    pub fn exists_calls(&self) -> usize {
        self.exists_calls.get()
    }

    pub fn insert_calls(&self) -> usize {
        self.insert_calls.get()
    }

    fn append(&self, candidate: &NewTestimonial) -> Result<Testimonial, RepositoryError> {
        let sequence = self.next_id.get().saturating_add(1);
        self.next_id.set(sequence);

        let offset = i64::try_from(sequence)
            .ok()
            .and_then(Duration::try_seconds)
            .ok_or_else(|| RepositoryError::Decode("record sequence overflow".to_string()))?;
        let created_at = DateTime::from_timestamp(EPOCH_SECONDS, 0)
            .and_then(|epoch| epoch.checked_add_signed(offset))
            .ok_or_else(|| RepositoryError::Decode("timestamp out of range".to_string()))?
            .fixed_offset();

        let testimonial = Testimonial {
            id: format!("mem-{}", sequence),
            name: candidate.name.clone(),
            role: candidate.role.clone(),
            review: candidate.review.clone(),
            created_at,
        };
        self.records.borrow_mut().push(testimonial.clone());
        Ok(testimonial)
    }
}

impl TestimonialRepository for MemoryRepository {
    async fn list_all(&self) -> Result<Vec<Testimonial>, RepositoryError> {
        self.list_calls.set(self.list_calls.get() + 1);
        if let Some(error) = self.list_failure.borrow().clone() {
            return Err(error);
        }
        let mut records = self.records.borrow().clone();
        records.sort_by_key(|t| t.created_at);
        Ok(records)
    }

    async fn exists_by_name_and_role(
        &self,
        name: &str,
        role: &str,
    ) -> Result<bool, RepositoryError> {
        self.exists_calls.set(self.exists_calls.get() + 1);
        if let Some(error) = self.exists_failure.borrow().clone() {
            return Err(error);
        }
        Ok(self.count_matching(name, role) > 0)
    }

    async fn insert(&self, candidate: &NewTestimonial) -> Result<Testimonial, RepositoryError> {
        self.insert_calls.set(self.insert_calls.get() + 1);
        if let Some(error) = self.insert_failure.borrow().clone() {
            return Err(error);
        }
        self.append(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: &str) -> NewTestimonial {
        NewTestimonial {
            name: name.into(),
            role: "Client".into(),
            review: "Good".into(),
        }
    }

    #[tokio::test]
    async fn inserted_records_get_ids_and_increasing_timestamps() {
        let repository = MemoryRepository::new();
        let first = repository.insert(&candidate("A")).await.unwrap();
        let second = repository.insert(&candidate("B")).await.unwrap();

        assert_ne!(first.id, second.id);
        assert!(first.created_at < second.created_at);
        assert_eq!(repository.list_all().await.unwrap(), vec![first, second]);
    }

    #[tokio::test]
    async fn injected_failure_is_returned_until_cleared() {
        let repository = MemoryRepository::with_records(&[candidate("A")]).unwrap();
        repository.fail_list_with(Some(RepositoryError::Transport("offline".into())));
        assert!(repository.list_all().await.is_err());

        repository.fail_list_with(None);
        assert_eq!(repository.list_all().await.unwrap().len(), 1);
        assert_eq!(repository.list_calls(), 2);
    }

    #[tokio::test]
    async fn exists_matches_on_both_fields() {
        let repository = MemoryRepository::with_records(&[candidate("A")]).unwrap();
        assert!(repository.exists_by_name_and_role("A", "Client").await.unwrap());
        assert!(!repository.exists_by_name_and_role("A", "Other").await.unwrap());
        assert!(!repository.exists_by_name_and_role("B", "Client").await.unwrap());
    }
}

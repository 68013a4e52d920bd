//! Persistence collaborator for employee records.
//!
//! The service talks to storage only through [`EmployeeStore`], which is
//! constructed once at startup and injected as `Arc<dyn EmployeeStore>`.
//! [`MemoryStore`] is the bundled implementation.

mod memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Employee, EmployeeChanges, EmployeeFilter, EmployeeId, NewEmployee};

pub use memory::MemoryStore;

/// Failure reported by a record store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store could not complete the operation.
    #[error("store unavailable: {message}")]
    Unavailable {
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return StoreError.
pub type StoreResult<T> = Result<T, StoreError>;

/// Typed CRUD and filtered queries over employee records.
///
/// Each call is atomic for the record it touches. No multi-record
/// transactions are offered; concurrent updates to one id are last write wins.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Persists a new record and returns it with its assigned id.
    async fn insert(&self, employee: NewEmployee) -> StoreResult<Employee>;

    /// Returns every record in storage order.
    async fn list(&self) -> StoreResult<Vec<Employee>>;

    /// Fetches one record.
    async fn get(&self, id: EmployeeId) -> StoreResult<Option<Employee>>;

    /// Applies `changes` to a record. Returns `None` if the id does not exist.
    async fn update(
        &self,
        id: EmployeeId,
        changes: EmployeeChanges,
    ) -> StoreResult<Option<Employee>>;

    /// Removes a record. Returns `false` if the id does not exist.
    async fn delete(&self, id: EmployeeId) -> StoreResult<bool>;

    /// Returns every record matching `filter`.
    async fn find(&self, filter: &EmployeeFilter) -> StoreResult<Vec<Employee>>;

    /// Returns only the salaries of records matching `filter`.
    async fn salaries(&self, filter: &EmployeeFilter) -> StoreResult<Vec<f64>>;
}

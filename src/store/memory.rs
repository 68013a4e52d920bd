//! In-memory record store.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::{Employee, EmployeeChanges, EmployeeFilter, EmployeeId, NewEmployee};

use super::{EmployeeStore, StoreResult};

/// Employee records held in process memory.
///
/// Ids start at 1 and are never reused, even after a delete. Listing
/// returns records in ascending id order.
#[derive(Debug)]
pub struct MemoryStore {
    records: RwLock<BTreeMap<EmployeeId, Employee>>,
    next_id: AtomicU64,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(BTreeMap::new()),
            next_id: AtomicU64::new(1),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmployeeStore for MemoryStore {
    async fn insert(&self, employee: NewEmployee) -> StoreResult<Employee> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let record = employee.into_employee(id);
        self.records.write().await.insert(id, record.clone());
        Ok(record)
    }

    async fn list(&self) -> StoreResult<Vec<Employee>> {
        Ok(self.records.read().await.values().cloned().collect())
    }

    async fn get(&self, id: EmployeeId) -> StoreResult<Option<Employee>> {
        Ok(self.records.read().await.get(&id).cloned())
    }

    async fn update(
        &self,
        id: EmployeeId,
        changes: EmployeeChanges,
    ) -> StoreResult<Option<Employee>> {
        let mut records = self.records.write().await;
        Ok(records.get_mut(&id).map(|record| {
            changes.apply_to(record);
            record.clone()
        }))
    }

    async fn delete(&self, id: EmployeeId) -> StoreResult<bool> {
        Ok(self.records.write().await.remove(&id).is_some())
    }

    async fn find(&self, filter: &EmployeeFilter) -> StoreResult<Vec<Employee>> {
        Ok(self
            .records
            .read()
            .await
            .values()
            .filter(|record| filter.matches(record))
            .cloned()
            .collect())
    }

    async fn salaries(&self, filter: &EmployeeFilter) -> StoreResult<Vec<f64>> {
        Ok(self
            .records
            .read()
            .await
            .values()
            .filter(|record| filter.matches(record))
            .map(|record| record.salary)
            .collect())
    }
}

//! Application state for the employee service API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::service::EmployeeService;
use crate::store::EmployeeStore;

/// Shared application state.
///
/// Holds the employee service, which in turn owns the record store
/// handle constructed at startup.
#[derive(Clone)]
pub struct AppState {
    service: EmployeeService,
}

impl AppState {
    /// Creates application state around the given record store.
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self {
            service: EmployeeService::new(store),
        }
    }

    /// Returns the employee service.
    pub fn service(&self) -> &EmployeeService {
        &self.service
    }
}

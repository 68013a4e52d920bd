//! Employee record service.
//!
//! This crate provides CRUD over employee records together with
//! country-based salary deductions and per-country / per-job-title
//! salary statistics, exposed over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod store;

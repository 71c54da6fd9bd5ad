//! HTTP handlers for all web routes.

pub mod accounts;
pub mod dashboard;
pub mod transactions;

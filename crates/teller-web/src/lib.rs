//! teller-web — Web GUI and JSON API for Teller
//! Provides a demo banking dashboard with:
//!   - Balance and income/expense stat cards
//!   - Monthly income vs expenses chart
//!   - Recent transactions feed
//!   - Deposit / withdraw / transfer endpoints

pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

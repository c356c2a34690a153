//! Shared test utilities for the table-sync workspace.
//!
//! This crate provides standardised test fixtures to eliminate duplication
//! across crate test suites. It is a dev-dependency only — never published.
//!
//! # Modules
//!
//! - [`git`] — real git repository fixture
//! - [`table`] — sample [`table_data::DataTable`] builders

pub mod git;
pub mod table;

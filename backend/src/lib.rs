//! Bookshelf API: a CRUD HTTP service for a catalog of book records, backed
//! by process memory or a single SQLite table.

pub mod app;
pub mod config;
pub mod error;
pub mod response;
pub mod services;
pub mod store;

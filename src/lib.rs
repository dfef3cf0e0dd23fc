//! Contacts API - a small HTTP service for managing a contact list.
//!
//! Contacts (a name and a phone number) are created, listed, fetched,
//! updated and deleted through a JSON API. Every response uses the same
//! `{success, data | error}` envelope.
//!
//! # Architecture
//!
//! - **domain**: Value objects and the field validator
//! - **models**: The stored contact record and the write payload
//! - **db**: Lazily connected SQLite pool
//! - **repositories**: Store access behind the `ContactRepository` trait
//! - **services**: Presence checks, validation and error mapping
//! - **server**: Axum router, handlers and the response envelope
//! - **observability**: Request counters
//! - **config** / **error**: Environment configuration and error types

pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod models;
pub mod observability;
pub mod repositories;
pub mod server;
pub mod services;

pub use config::Config;
pub use db::{Database, DatabaseConfig};
pub use error::{ConfigError, ContactError, StoreError};
pub use models::{Contact, ContactInput};
pub use observability::MetricsTracker;
pub use repositories::{ContactRepository, SqliteContactRepository};
pub use server::{build_router, AppState};
pub use services::{ContactService, ContactServiceImpl};

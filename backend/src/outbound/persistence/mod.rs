//! MongoDB persistence adapters.
//!
//! This module provides concrete implementations of domain repository ports
//! backed by a MongoDB database.
//!
//! # Architecture
//!
//! - **Thin adapters**: Repository implementations only translate between
//!   stored documents and domain types. No business logic resides here.
//! - **Internal models**: Document structs (`models.rs`) are internal
//!   implementation details, never exposed to the domain layer.
//! - **Explicit handle**: One [`MongoConnection`] is built at startup and
//!   handed to each repository; the driver pools connections internally.
//! - **Bounded calls**: Every driver call is raced against the caller's
//!   request deadline.
//!
//! # Example
//!
//! ```ignore
//! use trackme::outbound::persistence::{MongoConfig, MongoConnection, MongoUserRepository};
//!
//! let config = MongoConfig::new("mongodb://localhost:27017", "trackme");
//! let connection = MongoConnection::connect(&config).await?;
//! connection.ping().await?;
//! let repo = MongoUserRepository::new(&connection);
//! ```

mod connection;
mod models;
mod mongo_error_mapping;
mod mongo_user_repository;

pub use connection::{ConnectionError, MongoConfig, MongoConnection};
pub use mongo_user_repository::MongoUserRepository;

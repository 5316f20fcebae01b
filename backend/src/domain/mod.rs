//! Domain primitives, records, and use-cases.
//!
//! Purpose: Define the finance records served by the API, the identifiers
//! and deadline that flow through every layer, and the error taxonomy the
//! inbound adapters map to responses. Only [`User`] has a lifecycle; the
//! other records are schema declarations.
//!
//! Public surface:
//! - DocumentId (alias to `document_id::DocumentId`) — opaque record key.
//! - RequestDeadline (alias to `deadline::RequestDeadline`) — per-request
//!   deadline passed explicitly to services and repositories.
//! - Error (alias to `error::Error`) — API error response payload.
//! - ErrorCode (alias to `error::ErrorCode`) — stable error identifier.
//! - UserService (alias to `user_service::UserService`) — implements the
//!   driving ports over a [`ports::UserRepository`].

pub mod account;
pub mod budget;
pub mod deadline;
pub mod document_id;
pub mod error;
pub mod ports;
pub mod trace_id;
pub mod transaction;
pub mod user;
pub mod user_service;

pub use self::account::Account;
pub use self::budget::Budget;
pub use self::deadline::{DEFAULT_REQUEST_TIMEOUT, DeadlineExceeded, RequestDeadline};
pub use self::document_id::{
    AccountId, BudgetId, DocumentId, DocumentIdValidationError, TransactionId, UserId,
};
pub use self::error::{Error, ErrorCode, TRACE_ID_HEADER};
pub use self::trace_id::TraceId;
pub use self::transaction::Transaction;
pub use self::user::{User, UserFields};
pub use self::user_service::UserService;

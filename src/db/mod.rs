//! Database layer for data persistence and access.
//!
//! Implements the data access layer with SQLx over PostgreSQL, following the
//! repository pattern:
//!
//! ```text
//! API handlers → db::handlers (repositories) → db::models → PostgreSQL
//! ```
//!
//! - [`handlers`]: repository implementations for CRUD operations
//! - [`models`]: database request/response records matching the table schemas
//! - [`errors`]: database-specific error types
//!
//! Repositories borrow a `&mut PgConnection` supplied by the caller; there is
//! no module-level connection singleton. Every mutating operation is a single
//! conditional statement, so no multi-statement transactions are issued.
//!
//! Migrations live in `migrations/` and run through [`crate::migrator`].

pub mod errors;
pub mod handlers;
pub mod models;

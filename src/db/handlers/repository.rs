//! Base repository trait for database operations.

use crate::db::errors::Result;

/// Base repository trait providing common database operations.
///
/// A repository is the data access layer for one table. It has separate
/// associated types for create requests, update requests, and responses, and
/// is keyed by `Key` — a plain id for doctores/pacientes, the composite
/// triple for citas.
#[async_trait::async_trait]
pub trait Repository {
    /// The request type for creating entities
    type CreateRequest;

    /// The request type for updating entities
    type UpdateRequest;

    /// The response/DTO type returned by operations
    type Response;

    /// The key type for lookups
    type Key: Send + Sync;

    /// Create a new entity
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response>;

    /// Get an entity by key
    async fn get(&mut self, key: Self::Key) -> Result<Option<Self::Response>>;

    /// List all entities, unfiltered, in database-default order
    async fn list(&mut self) -> Result<Vec<Self::Response>>;

    /// Apply a partial update to the entity with the given key.
    /// Fails with `DbError::NotFound` when no row matches.
    async fn update(&mut self, key: Self::Key, request: &Self::UpdateRequest) -> Result<Self::Response>;

    /// Delete an entity by key; returns whether a row was removed
    async fn delete(&mut self, key: Self::Key) -> Result<bool>;
}

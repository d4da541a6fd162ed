//! The [`MovieStore`] abstraction over movie persistence.
//!
//! Handlers depend on the trait only. [`PgMovieStore`] backs production;
//! [`InMemoryMovieStore`] backs tests and database-less local runs.

mod memory;
mod postgres;

pub use memory::InMemoryMovieStore;
pub use postgres::PgMovieStore;

use async_trait::async_trait;
use movies_core::types::DbId;

use crate::models::movie::{Movie, NewMovie};

/// Result type for store operations. Store failures surface as sqlx errors
/// so the HTTP layer classifies them in one place.
pub type StoreResult<T> = Result<T, sqlx::Error>;

/// Single-table movie storage.
///
/// Each method is one independent interaction; nothing spans calls.
#[async_trait]
pub trait MovieStore: Send + Sync {
    /// Persist a new movie and return it with its assigned id.
    async fn create(&self, input: NewMovie) -> StoreResult<Movie>;

    /// Movies ordered by id ascending, skipping `skip`, at most `take`.
    async fn list(&self, skip: i64, take: i64) -> StoreResult<Vec<Movie>>;

    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<Movie>>;

    /// Replace the mutable fields of the row with `id`. `None` if absent.
    async fn update(&self, id: DbId, movie: &Movie) -> StoreResult<Option<Movie>>;

    /// Remove the row with `id`. `false` if there was none.
    async fn delete(&self, id: DbId) -> StoreResult<bool>;

    /// Confirm the backing store is reachable.
    async fn ping(&self) -> StoreResult<()>;
}

use async_trait::async_trait;
use movies_core::types::DbId;

use super::{MovieStore, StoreResult};
use crate::models::movie::{Movie, NewMovie};
use crate::repositories::MovieRepo;
use crate::DbPool;

/// [`MovieStore`] backed by the PostgreSQL `movies` table.
#[derive(Clone)]
pub struct PgMovieStore {
    pool: DbPool,
}

impl PgMovieStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MovieStore for PgMovieStore {
    async fn create(&self, input: NewMovie) -> StoreResult<Movie> {
        MovieRepo::create(&self.pool, &input).await
    }

    async fn list(&self, skip: i64, take: i64) -> StoreResult<Vec<Movie>> {
        MovieRepo::list(&self.pool, skip, take).await
    }

    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<Movie>> {
        MovieRepo::find_by_id(&self.pool, id).await
    }

    async fn update(&self, id: DbId, movie: &Movie) -> StoreResult<Option<Movie>> {
        MovieRepo::update(&self.pool, id, movie).await
    }

    async fn delete(&self, id: DbId) -> StoreResult<bool> {
        MovieRepo::delete(&self.pool, id).await
    }

    async fn ping(&self) -> StoreResult<()> {
        crate::health_check(&self.pool).await
    }
}

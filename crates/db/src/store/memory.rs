use std::collections::BTreeMap;

use async_trait::async_trait;
use movies_core::types::DbId;
use tokio::sync::RwLock;

use super::{MovieStore, StoreResult};
use crate::models::movie::{Movie, NewMovie};

#[derive(Debug)]
struct Inner {
    next_id: DbId,
    rows: BTreeMap<DbId, Movie>,
}

/// [`MovieStore`] kept in process memory.
///
/// Ids start at 1 and are never reused, matching a BIGSERIAL column.
#[derive(Debug)]
pub struct InMemoryMovieStore {
    inner: RwLock<Inner>,
}

impl InMemoryMovieStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                next_id: 1,
                rows: BTreeMap::new(),
            }),
        }
    }
}

impl Default for InMemoryMovieStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MovieStore for InMemoryMovieStore {
    async fn create(&self, input: NewMovie) -> StoreResult<Movie> {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id += 1;

        let movie = Movie {
            id,
            title: input.title,
            duration: input.duration,
            director: input.director,
            genre: input.genre,
        };
        inner.rows.insert(id, movie.clone());
        tracing::debug!(movie_id = id, "Movie stored in memory");
        Ok(movie)
    }

    async fn list(&self, skip: i64, take: i64) -> StoreResult<Vec<Movie>> {
        let skip = usize::try_from(skip).unwrap_or(0);
        let take = usize::try_from(take).unwrap_or(0);
        let inner = self.inner.read().await;
        Ok(inner.rows.values().skip(skip).take(take).cloned().collect())
    }

    async fn find_by_id(&self, id: DbId) -> StoreResult<Option<Movie>> {
        Ok(self.inner.read().await.rows.get(&id).cloned())
    }

    async fn update(&self, id: DbId, movie: &Movie) -> StoreResult<Option<Movie>> {
        let mut inner = self.inner.write().await;
        let Some(row) = inner.rows.get_mut(&id) else {
            return Ok(None);
        };
        row.title = movie.title.clone();
        row.duration = movie.duration;
        row.director = movie.director.clone();
        row.genre = movie.genre.clone();
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: DbId) -> StoreResult<bool> {
        let removed = self.inner.write().await.rows.remove(&id).is_some();
        if removed {
            tracing::debug!(movie_id = id, "Movie removed from memory");
        }
        Ok(removed)
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}

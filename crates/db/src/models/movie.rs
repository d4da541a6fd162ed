//! Movie entity model, wire shapes and the conversions between them.
//!
//! Every conversion lists its fields explicitly so a dropped or renamed
//! field shows up in review:
//!
//! ```text
//! CreateMovie -> NewMovie      (id assigned by the store)
//! UpdateMovie -> Movie         (Movie::apply_update, id kept)
//! Movie       -> UpdateMovie   (base state for PATCH; id dropped)
//! Movie       -> ReadMovie     (adds query_time; id dropped)
//! ```

use movies_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `movies` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    /// Running time in minutes.
    pub duration: i32,
    pub director: Option<String>,
    pub genre: Option<String>,
}

/// A movie that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMovie {
    pub title: String,
    pub duration: i32,
    pub director: Option<String>,
    pub genre: Option<String>,
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// Request body for `POST /movie`.
///
/// Decoded only after the rule table has accepted the raw body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateMovie {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub duration: i32,
    #[serde(default)]
    pub director: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
}

/// Request body for `PUT /movie/{id}` and the patch target for
/// `PATCH /movie/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateMovie {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub duration: i32,
    #[serde(default)]
    pub director: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
}

/// Response body for reads. `query_time` is stamped when the read happens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadMovie {
    pub title: String,
    pub duration: i32,
    pub director: Option<String>,
    pub genre: Option<String>,
    pub query_time: Timestamp,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

impl From<CreateMovie> for NewMovie {
    fn from(input: CreateMovie) -> Self {
        Self {
            title: input.title,
            duration: input.duration,
            director: input.director,
            genre: input.genre,
        }
    }
}

impl From<&Movie> for UpdateMovie {
    fn from(movie: &Movie) -> Self {
        Self {
            title: movie.title.clone(),
            duration: movie.duration,
            director: movie.director.clone(),
            genre: movie.genre.clone(),
        }
    }
}

impl Movie {
    /// Overwrite every mutable field from `input`. The id is left as is.
    pub fn apply_update(&mut self, input: UpdateMovie) {
        self.title = input.title;
        self.duration = input.duration;
        self.director = input.director;
        self.genre = input.genre;
    }
}

impl ReadMovie {
    pub fn from_movie(movie: Movie, query_time: Timestamp) -> Self {
        Self {
            title: movie.title,
            duration: movie.duration,
            director: movie.director,
            genre: movie.genre,
            query_time,
        }
    }
}

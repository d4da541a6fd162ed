//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Skip/take pagination parameters (`?skip=&take=`).
///
/// Defaults and clamping are applied by `movies_core::pagination::PageRequest`.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub skip: Option<i64>,
    pub take: Option<i64>,
}

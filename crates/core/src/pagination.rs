//! Skip/take pagination for list endpoints.

/// Rows skipped when the client sends no `skip`.
pub const DEFAULT_SKIP: i64 = 0;

/// Rows returned when the client sends no `take`.
pub const DEFAULT_TAKE: i64 = 50;

/// A resolved page window. Both values are non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub skip: i64,
    pub take: i64,
}

impl PageRequest {
    /// Apply defaults and clamp negatives to zero.
    ///
    /// `take` has no upper bound; a negative `take` yields an empty page.
    pub fn new(skip: Option<i64>, take: Option<i64>) -> Self {
        Self {
            skip: skip.unwrap_or(DEFAULT_SKIP).max(0),
            take: take.unwrap_or(DEFAULT_TAKE).max(0),
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

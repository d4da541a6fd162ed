//! Entity models and request/response shapes.

pub mod movie;

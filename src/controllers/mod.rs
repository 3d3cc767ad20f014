// src/controllers/mod.rs

pub mod advisor_controller;
pub mod booking_controller;
pub mod status_controller;

use serde::Deserialize;

use crate::errors::{FieldError, ValidationError};

/// Query parameters shared by the list endpoints.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub limit: Option<i64>,
}

/// Applies the endpoint default; a given limit must be positive.
fn resolve_limit(limit: Option<i64>, default: i64) -> Result<i64, ValidationError> {
    match limit {
        None => Ok(default),
        Some(n) if n > 0 => Ok(n),
        Some(_) => Err(ValidationError::single(FieldError::new(
            &["query", "limit"],
            "greater_than",
            "Input should be greater than 0",
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_defaults_and_bounds() {
        assert_eq!(resolve_limit(None, 12), Ok(12));
        assert_eq!(resolve_limit(Some(1), 12), Ok(1));
        assert!(resolve_limit(Some(0), 12).unwrap_err().has_field("limit"));
        assert!(resolve_limit(Some(-3), 20).is_err());
    }
}

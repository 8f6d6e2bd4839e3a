//! # Error Traits
//!
//! Conversion traits for error handling.

use crate::{AppError, Result};

/// Turns a missing value into a `NotFound` error carrying context.
pub trait Context<T> {
    fn context<C: ToString>(self, context: C) -> Result<T>;
}

impl<T> Context<T> for Option<T> {
    fn context<C: ToString>(self, context: C) -> Result<T> { self.ok_or_else(|| AppError::not_found(context)) }
}

/// Adds context to the `AppError` a failed result converts into.
pub trait ResultExt<T> {
    fn context<C: ToString>(self, context: C) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<AppError>,
{
    fn context<C: ToString>(self, context: C) -> Result<T> { self.map_err(|e| Into::<AppError>::into(e).context(context)) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_context() {
        let result: std::result::Result<i32, sea_orm::DbErr> = Err(sea_orm::DbErr::Custom("gone".to_string()));
        let err = ResultExt::context(result, "Counting school zone events").unwrap_err();
        assert_eq!(err.to_string(), "Database: Counting school zone events: Custom Error: gone");
    }

    #[test]
    fn test_option_context() {
        let missing: Option<i32> = None;
        let err = Context::context(missing, "SZ_404").unwrap_err();
        assert_eq!(err.code(), "NOT_FOUND");
        assert_eq!(err.exit_code(), 66);
        assert_eq!(err.to_string(), "NotFound: SZ_404");

        assert_eq!(Context::context(Some(7), "unused").unwrap(), 7);
    }
}

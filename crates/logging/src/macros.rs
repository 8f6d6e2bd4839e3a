//! # Logging Macros
//!
//! Convenience macros for structured logging.
//! These macros provide additional metadata and structured fields.

/// Log a schema change applied by a migration.
///
/// # Example
///
/// ```rust
/// use logging::log_schema_change;
///
/// log_schema_change!("create_table", "hntb_school_zone");
/// log_schema_change!("add_column", "hntb_trips", "origin_county");
/// ```
#[macro_export]
macro_rules! log_schema_change {
    ($action:expr, $table:expr) => {
        $crate::info!(
            target: "migration",
            action = %$action,
            table = %$table,
            "Schema change applied"
        )
    };
    ($action:expr, $table:expr, $column:expr) => {
        $crate::info!(
            target: "migration",
            action = %$action,
            table = %$table,
            column = %$column,
            "Schema change applied"
        )
    };
}

/// Log a failed schema change together with the database error.
#[macro_export]
macro_rules! log_schema_failure {
    ($action:expr, $table:expr, $err:expr) => {
        $crate::error!(
            target: "migration",
            action = %$action,
            table = %$table,
            error = %$err,
            "Schema change failed"
        )
    };
    ($action:expr, $table:expr, $column:expr, $err:expr) => {
        $crate::error!(
            target: "migration",
            action = %$action,
            table = %$table,
            column = %$column,
            error = %$err,
            "Schema change failed"
        )
    };
}

/// Log a database query with duration and table name.
#[macro_export]
macro_rules! log_db_query {
    ($query:expr, $table:expr, $duration:expr) => {
        $crate::debug!(
            target: "database",
            query = %$query,
            table = %$table,
            duration_ms = %$duration,
            "Database query"
        )
    };
}

/// Measure and log the duration of a block of code.
///
/// # Example
///
/// ```rust
/// use logging::measure_duration;
///
/// let rows = measure_duration!("analytics", "hntb_school_zone", {
///     vec![1, 2, 3]
/// });
/// assert_eq!(rows.len(), 3);
/// ```
#[macro_export]
macro_rules! measure_duration {
    ($target:expr, $context:expr, $block:block) => {{
        let start = std::time::Instant::now();
        let result = $block;
        let duration = start.elapsed();
        $crate::debug!(
            target: $target,
            context = %$context,
            duration_ms = duration.as_secs_f64() * 1000.0,
            "Operation completed"
        );
        result
    }};
}

//! # CLI Report Command
//!
//! Runs one of the example analytics queries and renders it as JSON.

use entity::analytics;
use error::Result;
use sea_orm::DatabaseConnection;

use crate::commands::ReportKind;

/// Runs the requested report and returns it as pretty-printed JSON.
///
/// # Errors
///
/// Returns a `Database` error if the query fails, e.g. when migrations have
/// not been applied.
pub async fn report(db: &DatabaseConnection, kind: ReportKind) -> Result<String> {
    tracing::info!(target: "report", kind = ?kind, "Running report");

    let json = match kind {
        ReportKind::SchoolZone => serde_json::to_string_pretty(&analytics::school_zone_event_counts(db).await?)?,
        ReportKind::TowAndGo => serde_json::to_string_pretty(&analytics::tow_and_go_outcomes(db).await?)?,
        ReportKind::County => serde_json::to_string_pretty(&analytics::events_by_county(db).await?)?,
    };
    Ok(json)
}

/// Looks up one school zone event and returns it as pretty-printed JSON.
///
/// # Errors
///
/// Returns a `NotFound` error when no event has `action_id`.
pub async fn event(db: &DatabaseConnection, action_id: &str) -> Result<String> {
    let event = analytics::find_school_zone_event(db, action_id).await?;
    Ok(serde_json::to_string_pretty(&event)?)
}

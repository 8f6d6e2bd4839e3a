//! Example analytics queries
//!
//! Read-only aggregations over the event tables, used by `hntb report` and as
//! a reference for the research team's own queries.

use std::time::Instant;

use error::{AppError, Context, ResultExt};
use logging::{log_db_query, measure_duration};
use sea_orm::{
    sea_query::Expr,
    ColumnTrait,
    ConnectionTrait,
    EntityTrait,
    FromQueryResult,
    QueryFilter,
    QueryOrder,
    QuerySelect,
};
use serde::Serialize;

use crate::{hntb_school_zone, hntb_tow_and_go, SchoolZone, TowAndGo, TowStatus};

/// Number of school zone events recorded under one event name
#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult, Serialize)]
pub struct EventNameCount {
    pub event_name:  String,
    pub event_count: i64,
}

/// Requests per tow and go outcome
#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult, Serialize)]
pub struct TowAndGoOutcome {
    pub status:    TowStatus,
    pub requests:  i64,
    /// Requests with a recorded `response_time`
    pub responded: i64,
}

/// School zone events per county; `None` collects rows not yet enriched
#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult, Serialize)]
pub struct CountyCount {
    pub event_county: Option<String>,
    pub event_count:  i64,
}

/// `SELECT event_name, COUNT(action_id) FROM hntb_school_zone GROUP BY event_name`
///
/// # Errors
///
/// Returns a `Database` error if the query fails.
pub async fn school_zone_event_counts<C: ConnectionTrait>(db: &C) -> Result<Vec<EventNameCount>, AppError> {
    let start = Instant::now();
    let rows = SchoolZone::find()
        .select_only()
        .column(hntb_school_zone::Column::EventName)
        .column_as(Expr::col(hntb_school_zone::Column::ActionId).count(), "event_count")
        .group_by(hntb_school_zone::Column::EventName)
        .order_by_asc(hntb_school_zone::Column::EventName)
        .into_model::<EventNameCount>()
        .all(db)
        .await
        .context("Counting school zone events")?;

    log_db_query!("school_zone_event_counts", "hntb_school_zone", start.elapsed().as_millis());
    tracing::debug!(target: "analytics", rows = rows.len(), "school_zone_event_counts");
    Ok(rows)
}

/// Request totals per status, with how many of them were answered.
///
/// # Errors
///
/// Returns a `Database` error if the query fails.
pub async fn tow_and_go_outcomes<C: ConnectionTrait>(db: &C) -> Result<Vec<TowAndGoOutcome>, AppError> {
    let start = Instant::now();
    let rows = TowAndGo::find()
        .select_only()
        .column(hntb_tow_and_go::Column::Status)
        .column_as(Expr::col(hntb_tow_and_go::Column::TowAndGoId).count(), "requests")
        // COUNT(column) skips nulls
        .column_as(Expr::col(hntb_tow_and_go::Column::ResponseTime).count(), "responded")
        .group_by(hntb_tow_and_go::Column::Status)
        .order_by_asc(hntb_tow_and_go::Column::Status)
        .into_model::<TowAndGoOutcome>()
        .all(db)
        .await
        .context("Summarising tow and go outcomes")?;

    log_db_query!("tow_and_go_outcomes", "hntb_tow_and_go", start.elapsed().as_millis());
    tracing::debug!(target: "analytics", rows = rows.len(), "tow_and_go_outcomes");
    Ok(rows)
}

/// School zone events grouped by `event_county`.
///
/// # Errors
///
/// Returns a `Database` error if the query fails, including when the county
/// column has not been added yet.
pub async fn events_by_county<C: ConnectionTrait>(db: &C) -> Result<Vec<CountyCount>, AppError> {
    let start = Instant::now();
    let rows = SchoolZone::find()
        .select_only()
        .column(hntb_school_zone::Column::EventCounty)
        .column_as(Expr::col(hntb_school_zone::Column::ActionId).count(), "event_count")
        .group_by(hntb_school_zone::Column::EventCounty)
        .order_by_asc(hntb_school_zone::Column::EventCounty)
        .into_model::<CountyCount>()
        .all(db)
        .await
        .context("Counting school zone events by county")?;

    log_db_query!("events_by_county", "hntb_school_zone", start.elapsed().as_millis());
    tracing::debug!(target: "analytics", rows = rows.len(), "events_by_county");
    Ok(rows)
}

/// Looks up a single school zone event by its client generated id.
///
/// # Errors
///
/// Returns a `NotFound` error when no event has this id and a `Database`
/// error if the query fails.
pub async fn find_school_zone_event<C: ConnectionTrait>(db: &C, action_id: &str) -> Result<hntb_school_zone::Model, AppError> {
    let event = measure_duration!("analytics", action_id, {
        SchoolZone::find()
            .filter(hntb_school_zone::Column::ActionId.eq(action_id))
            .one(db)
            .await
            .context("Looking up school zone event")?
    });

    event.context(format!("School zone event {}", action_id))
}

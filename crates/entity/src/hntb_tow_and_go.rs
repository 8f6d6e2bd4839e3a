//! Tow and Go Entity
//!
//! One row per emergency roadside assistance request.
//!
//! CUSTOMIZATION REGION START: tow_and_go_entity_custom_types
//! This region is preserved during entity regeneration. Add custom types and implementations here.
//! CUSTOMIZATION REGION END

use error::{AppError, ResultExt};
use sea_orm::{
    entity::prelude::*,
    sea_query::{Expr, SimpleExpr},
};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "hntb_tow_and_go")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub tow_and_go_id: u32,
    pub user_id:       String,
    pub status:        TowStatus,
    pub event_lat:     f64,
    pub event_lng:     f64,
    pub event_county:  Option<String>,
    pub request_time:  DateTime,
    pub response_time: Option<DateTime>,
    pub created_at:    DateTime,
    pub updated_at:    DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Outcome of an assistance request, stored as a tinyint
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i8", db_type = "TinyInteger")]
#[serde(rename_all = "snake_case")]
pub enum TowStatus {
    /// Request could not be served
    #[sea_orm(num_value = 0)]
    Failure,
    /// Assistance was delivered
    #[sea_orm(num_value = 1)]
    Success,
}

impl std::fmt::Display for TowStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TowStatus::Failure => write!(f, "failure"),
            TowStatus::Success => write!(f, "success"),
        }
    }
}

// CUSTOMIZATION REGION START: tow_and_go_entity_methods

impl Entity {
    /// Records the response to a request.
    ///
    /// A request is answered at most once: the update only matches rows whose
    /// `response_time` is still null. Returns whether a row was updated.
    ///
    /// # Errors
    ///
    /// Returns a `Database` error if the update fails.
    pub async fn record_response<C: ConnectionTrait>(
        db: &C,
        tow_and_go_id: u32,
        status: TowStatus,
        response_time: DateTime,
    ) -> Result<bool, AppError> {
        let result = Self::update_many()
            .col_expr(Column::Status, Expr::value(status.into_value()))
            .col_expr(Column::ResponseTime, Expr::value(response_time))
            .col_expr(Column::UpdatedAt, SimpleExpr::from(Expr::current_timestamp()))
            .filter(Column::TowAndGoId.eq(tow_and_go_id))
            .filter(Column::ResponseTime.is_null())
            .exec(db)
            .await
            .context("Recording tow and go response")?;

        tracing::debug!(
            target: "database",
            tow_and_go_id,
            status = %status,
            rows_affected = result.rows_affected,
            "Recorded tow and go response"
        );
        Ok(result.rows_affected == 1)
    }
}

// CUSTOMIZATION REGION END

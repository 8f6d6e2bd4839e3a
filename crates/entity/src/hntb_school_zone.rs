//! School Zone Entity
//!
//! One row per behavioural event observed inside a school zone. The primary
//! key is the client generated `action_id`.
//!
//! CUSTOMIZATION REGION START: school_zone_entity_custom_types
//! This region is preserved during entity regeneration. Add custom types and implementations here.
//! CUSTOMIZATION REGION END

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "hntb_school_zone")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub action_id:    String,
    pub user_id:      String,
    pub event_name:   String,
    pub event_lat:    f64,
    pub event_lng:    f64,
    pub event_county: Option<String>,
    pub logged_time:  DateTime,
    pub created_at:   DateTime,
    pub updated_at:   DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

//! Target Users Entity
//!
//! Opaque hashed identifiers of the users enrolled in the research study.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "hntb_target_users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub target_user_id: u32,
    pub hash_id:        String,
    pub created_at:     DateTime,
    pub updated_at:     DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

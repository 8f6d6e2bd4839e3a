//! Entity definitions for the HNTB research database
//!
//! Sea-ORM entity definitions for the tables created by the `migration` crate,
//! plus the example analytics queries run against them.

pub mod analytics;
pub mod hntb_school_zone;
pub use hntb_school_zone::Entity as SchoolZone;
pub mod hntb_target_users;
pub use hntb_target_users::Entity as TargetUsers;
pub mod hntb_tow_and_go;
pub use hntb_tow_and_go::{Entity as TowAndGo, TowStatus};

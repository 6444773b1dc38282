use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Staff member record. Email and mobile are optional but carry unique
/// indexes in the database when present.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "attendants")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub address: Option<String>,
    pub mobile: Option<String>,
    pub email: Option<String>,
    pub comments: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

//! Hero banner with an optional inline image blob.
//! The blob never leaves through JSON; it is served by a dedicated endpoint.
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "banner")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub highlight_tag: String,
    pub title: String,
    pub description: Option<String>,
    #[sea_orm(column_type = "Blob", nullable)]
    #[serde(skip)]
    pub image: Option<Vec<u8>>,
    pub image_mime: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}

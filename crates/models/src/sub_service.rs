use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::main_service;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sub_service")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub main_service_id: i64,
    pub service_name: String,
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { MainService }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::MainService => Entity::belongs_to(main_service::Entity)
                .from(Column::MainServiceId)
                .to(main_service::Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::entity::prelude::*;

/// Guild row in the legacy player database. Read-only.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "guild")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: Option<String>,
    pub sp: Option<i16>,
    pub master: Option<i32>,
    pub level: Option<i32>,
    pub exp: Option<i32>,
    pub skill_point: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub skill: Option<String>,
    pub win: Option<i32>,
    pub draw: Option<i32>,
    pub loss: Option<i32>,
    pub ladder_point: Option<i32>,
    pub gold: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

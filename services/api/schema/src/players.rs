use sea_orm::entity::prelude::*;

/// Player character row in the legacy player database. Read-only.
///
/// `last_play` is a naive DATETIME in game-server local time (treated as UTC
/// throughout the panel).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "player")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub account_id: i32,
    pub name: Option<String>,
    pub job: Option<i32>,
    pub level: Option<i32>,
    pub exp: Option<i32>,
    pub last_play: Option<chrono::NaiveDateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

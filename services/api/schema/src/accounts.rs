use sea_orm::entity::prelude::*;

/// Game account row in the legacy account database.
///
/// `password` holds the game-compatible double-SHA1 digest (41 chars,
/// `*`-prefixed). The table is owned by the game server; this service only
/// reads and writes through the columns the website needs.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "account")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub login: String,
    pub password: String,
    pub social_id: String,
    pub email: String,
    /// "OK", "BANNED", or a fork-specific value.
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

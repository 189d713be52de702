use sea_orm::entity::prelude::*;

/// Game-site configuration, the aggregate root for all web content.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "sites")]
pub struct Model {
    /// UUID stored as CHAR(36).
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub initial_level: String,
    pub max_level: String,
    pub rates: Option<String>,
    pub facebook_url: Option<String>,
    pub facebook_enable: bool,
    #[sea_orm(column_type = "Text", nullable)]
    pub footer_info: Option<String>,
    pub footer_menu_enable: bool,
    pub footer_info_enable: bool,
    pub forum_url: Option<String>,
    pub last_online: bool,
    pub is_active: bool,
    pub maintenance_mode: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::pages::Entity")]
    Pages,
    #[sea_orm(has_many = "super::downloads::Entity")]
    Downloads,
    #[sea_orm(has_many = "super::images::Entity")]
    Images,
}

impl Related<super::pages::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pages.def()
    }
}

impl Related<super::downloads::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Downloads.def()
    }
}

impl Related<super::images::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Images.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

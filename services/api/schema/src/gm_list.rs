use sea_orm::entity::prelude::*;

/// GM grant row in the legacy common database. Read-only.
///
/// `m_account` references `account.login` by value; there is no foreign key
/// across databases. `m_authority` is loosely typed in the wild, so it is
/// mapped as a plain string and ranked leniently at the domain layer.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "gmlist")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "mID")]
    pub m_id: i32,
    #[sea_orm(column_name = "mAccount")]
    pub m_account: String,
    #[sea_orm(column_name = "mName")]
    pub m_name: Option<String>,
    #[sea_orm(column_name = "mContactIP")]
    pub m_contact_ip: Option<String>,
    #[sea_orm(column_name = "mServerIP")]
    pub m_server_ip: Option<String>,
    #[sea_orm(column_name = "mAuthority")]
    pub m_authority: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

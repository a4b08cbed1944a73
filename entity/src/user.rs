use sea_orm::entity::prelude::*;

/// Clinic user account.
///
/// Soft-deleted accounts keep their row with `deleted_at` set; every read
/// path filters them out.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub phone: String,
    /// Argon2id hash, never the plain password.
    pub password: String,
    pub avatar: Option<String>,
    pub account_type: String,
    /// Set once the registration confirmation token has been redeemed.
    pub is_registered: bool,
    pub confirmation_token: Option<String>,
    pub reset_token: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

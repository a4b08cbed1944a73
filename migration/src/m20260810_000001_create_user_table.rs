use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(string(User::Id).primary_key())
                    .col(string(User::Name))
                    .col(string_uniq(User::Email))
                    .col(string(User::Phone))
                    .col(string(User::Password))
                    .col(string_null(User::Avatar))
                    .col(string(User::AccountType))
                    .col(boolean(User::IsRegistered))
                    .col(string_null(User::ConfirmationToken))
                    .col(string_null(User::ResetToken))
                    .col(timestamp(User::CreatedAt))
                    .col(timestamp(User::UpdatedAt))
                    .col(timestamp_null(User::DeletedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    Name,
    Email,
    Phone,
    Password,
    Avatar,
    AccountType,
    IsRegistered,
    ConfirmationToken,
    ResetToken,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

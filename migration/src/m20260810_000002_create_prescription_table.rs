use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260810_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Prescription::Table)
                    .if_not_exists()
                    .col(string(Prescription::Id).primary_key())
                    .col(string(Prescription::PatientId))
                    .col(string(Prescription::DocterId))
                    .col(string(Prescription::Content))
                    .col(timestamp(Prescription::CreatedAt))
                    .col(timestamp(Prescription::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_prescription_patient")
                            .from(Prescription::Table, Prescription::PatientId)
                            .to(User::Table, User::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_prescription_docter")
                            .from(Prescription::Table, Prescription::DocterId)
                            .to(User::Table, User::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Prescription::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Prescription {
    Table,
    Id,
    PatientId,
    DocterId,
    Content,
    CreatedAt,
    UpdatedAt,
}

use sea_orm::entity::prelude::*;

/// Medical prescription issued by a doctor to a patient.
///
/// Both `patient_id` and `docter_id` reference `user.id`. The "docter"
/// spelling is part of the documented API and is kept throughout.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "prescription")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub patient_id: String,
    pub docter_id: String,
    pub content: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::PatientId",
        to = "super::user::Column::Id"
    )]
    Patient,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::DocterId",
        to = "super::user::Column::Id"
    )]
    Docter,
}

impl ActiveModelBehavior for ActiveModel {}

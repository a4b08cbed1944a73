pub use super::prescription::Entity as Prescription;
pub use super::user::Entity as User;

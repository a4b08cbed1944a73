pub mod prelude;

pub mod prescription;
pub mod user;

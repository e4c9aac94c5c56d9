pub mod users_schema;
pub mod users_service;

pub use users_schema::User;
pub use users_service::{UserView, UsersService};

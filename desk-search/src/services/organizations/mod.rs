pub mod organizations_schema;
pub mod organizations_service;

pub use organizations_schema::Organization;
pub use organizations_service::{OrganizationView, OrganizationsService};

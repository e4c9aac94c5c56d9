use std::sync::Arc;

use desk_core::{DeskApp, SearchService};

pub mod types;
pub use types::DeskState;

pub mod organizations;
pub mod tickets;
pub mod users;

#[cfg(test)]
pub(crate) mod fixtures;

/// Register one search service per collection, all sharing `state`.
pub fn configure(app: &DeskApp, state: Arc<DeskState>) {
    let users: Arc<dyn SearchService> = Arc::new(users::UsersService::new(Arc::clone(&state)));
    let organizations: Arc<dyn SearchService> =
        Arc::new(organizations::OrganizationsService::new(Arc::clone(&state)));
    let tickets: Arc<dyn SearchService> = Arc::new(tickets::TicketsService::new(state));

    for service in [users, organizations, tickets] {
        app.register_service(service.collection().as_str(), service);
    }
}

mod app;
pub mod cli;
pub mod services;

use std::sync::Arc;

use desk_core::{DataSource, DeskApp, DeskConfig, DeskResult, FileSource};

pub use services::organizations::{Organization, OrganizationView, OrganizationsService};
pub use services::tickets::{Ticket, TicketView, TicketsService};
pub use services::users::{User, UserView, UsersService};
pub use services::DeskState;

/// A wired app and the stores its services read from.
pub struct Desk {
    pub app: DeskApp,
    pub state: Arc<DeskState>,
}

/// Load the snapshots named by `config` from disk and register the services.
pub fn build(config: DeskConfig) -> DeskResult<Desk> {
    let app = app::desk_app(config);
    let source = FileSource::from_config(&app.config_snapshot());
    build_with(app, &source)
}

/// Same as [`build`] but reading the snapshots from `source`.
pub fn build_from(config: DeskConfig, source: &dyn DataSource) -> DeskResult<Desk> {
    build_with(app::desk_app(config), source)
}

fn build_with(app: DeskApp, source: &dyn DataSource) -> DeskResult<Desk> {
    let state = Arc::new(DeskState::new());
    state.load_all(source)?;
    services::configure(&app, Arc::clone(&state));
    Ok(Desk { app, state })
}

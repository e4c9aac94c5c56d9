use desk_core::{DataSource, DeskResult, RecordStore};

use super::organizations::Organization;
use super::tickets::Ticket;
use super::users::User;

/// The three collections every service reads from.
#[derive(Default)]
pub struct DeskState {
    pub users: RecordStore<User>,
    pub organizations: RecordStore<Organization>,
    pub tickets: RecordStore<Ticket>,
}

impl DeskState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load organizations, users and tickets from `source`.
    ///
    /// All three are staged first and published only when every load
    /// succeeded, so a failure leaves this state exactly as it was.
    pub fn load_all(&self, source: &dyn DataSource) -> DeskResult<()> {
        let staged = DeskState::new();
        staged.organizations.load_from(source)?;
        staged.users.load_from(source)?;
        staged.tickets.load_from(source)?;

        self.organizations.replace_from(&staged.organizations);
        self.users.replace_from(&staged.users);
        self.tickets.replace_from(&staged.tickets);
        Ok(())
    }

    pub fn organization_name(&self, id: i64) -> Option<String> {
        self.organizations.retrieve(&id).map(|o| o.name.clone())
    }

    pub fn user_name(&self, id: i64) -> Option<String> {
        self.users.retrieve(&id).map(|u| u.name.clone())
    }
}

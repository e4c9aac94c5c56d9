use std::sync::Arc;

use desk_core::service::to_values;
use desk_core::{CollectionKind, DeskResult, FindParams, Record, SearchService};
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::services::DeskState;

use super::User;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserView {
    #[serde(flatten)]
    pub user: User,
    pub organization_name: String,
    pub assignee_ticket_subjects: Vec<String>,
    pub submitted_ticket_subjects: Vec<String>,
}

pub struct UsersService {
    pub state: Arc<DeskState>,
}

impl UsersService {
    pub fn new(state: Arc<DeskState>) -> Self {
        Self { state }
    }

    pub fn list(&self, field: &str, value: &str) -> DeskResult<Vec<UserView>> {
        let users = self.state.users.list(field, value)?;
        Ok(users.iter().map(|u| self.enrich(u)).collect())
    }

    fn enrich(&self, user: &User) -> UserView {
        let uid = user.id.to_string();

        UserView {
            user: user.clone(),
            organization_name: self
                .state
                .organization_name(user.organization_id)
                .unwrap_or_else(|| {
                    warn!(
                        user_id = user.id,
                        organization_id = user.organization_id,
                        "cannot get organization of user"
                    );
                    String::new()
                }),
            assignee_ticket_subjects: self.ticket_subjects(user, "assignee_id", &uid),
            submitted_ticket_subjects: self.ticket_subjects(user, "submitter_id", &uid),
        }
    }

    fn ticket_subjects(&self, user: &User, field: &str, uid: &str) -> Vec<String> {
        self.state
            .tickets
            .project(field, uid, |t| t.subject.clone())
            .unwrap_or_else(|err| {
                warn!(user_id = user.id, field, error = %err, "cannot list tickets of user");
                Vec::new()
            })
    }
}

impl SearchService for UsersService {
    fn collection(&self) -> CollectionKind {
        CollectionKind::Users
    }

    fn fields(&self) -> Vec<&'static str> {
        User::fields().names()
    }

    fn find(&self, params: &FindParams) -> DeskResult<Vec<Value>> {
        to_values(&self.list(&params.field, &params.value)?)
    }
}

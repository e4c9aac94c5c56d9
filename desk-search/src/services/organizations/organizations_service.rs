use std::sync::Arc;

use desk_core::service::to_values;
use desk_core::{CollectionKind, DeskResult, FindParams, Record, SearchService};
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::services::DeskState;

use super::Organization;

/// An organization plus the names of its users and the subjects of its tickets.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrganizationView {
    #[serde(flatten)]
    pub organization: Organization,
    pub user_names: Vec<String>,
    pub ticket_subjects: Vec<String>,
}

pub struct OrganizationsService {
    pub state: Arc<DeskState>,
}

impl OrganizationsService {
    pub fn new(state: Arc<DeskState>) -> Self {
        Self { state }
    }

    pub fn list(&self, field: &str, value: &str) -> DeskResult<Vec<OrganizationView>> {
        let organizations = self.state.organizations.list(field, value)?;
        Ok(organizations.iter().map(|o| self.enrich(o)).collect())
    }

    fn enrich(&self, organization: &Organization) -> OrganizationView {
        let oid = organization.id.to_string();

        let user_names = self
            .state
            .users
            .project("organization_id", &oid, |u| u.name.clone())
            .unwrap_or_else(|err| {
                warn!(
                    organization_id = organization.id,
                    error = %err,
                    "cannot list users of organization"
                );
                Vec::new()
            });

        let ticket_subjects = self
            .state
            .tickets
            .project("organization_id", &oid, |t| t.subject.clone())
            .unwrap_or_else(|err| {
                warn!(
                    organization_id = organization.id,
                    error = %err,
                    "cannot list tickets of organization"
                );
                Vec::new()
            });

        OrganizationView {
            organization: organization.clone(),
            user_names,
            ticket_subjects,
        }
    }
}

impl SearchService for OrganizationsService {
    fn collection(&self) -> CollectionKind {
        CollectionKind::Organizations
    }

    fn fields(&self) -> Vec<&'static str> {
        Organization::fields().names()
    }

    fn find(&self, params: &FindParams) -> DeskResult<Vec<Value>> {
        to_values(&self.list(&params.field, &params.value)?)
    }
}

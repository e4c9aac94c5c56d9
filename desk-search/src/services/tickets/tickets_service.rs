use std::sync::Arc;

use desk_core::service::to_values;
use desk_core::{CollectionKind, DeskResult, FindParams, Record, SearchService};
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::services::DeskState;

use super::Ticket;

/// A ticket plus the names behind its organization, assignee and submitter ids.
///
/// A reference that does not resolve leaves its name empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TicketView {
    #[serde(flatten)]
    pub ticket: Ticket,
    pub organization_name: String,
    pub assignee_name: String,
    pub submitter_name: String,
}

pub struct TicketsService {
    pub state: Arc<DeskState>,
}

impl TicketsService {
    pub fn new(state: Arc<DeskState>) -> Self {
        Self { state }
    }

    pub fn list(&self, field: &str, value: &str) -> DeskResult<Vec<TicketView>> {
        let tickets = self.state.tickets.list(field, value)?;
        Ok(tickets.iter().map(|t| self.enrich(t)).collect())
    }

    fn enrich(&self, ticket: &Ticket) -> TicketView {
        let organization_name = self
            .state
            .organization_name(ticket.organization_id)
            .unwrap_or_else(|| {
                warn!(
                    ticket_id = %ticket.id,
                    organization_id = ticket.organization_id,
                    "cannot get organization of ticket"
                );
                String::new()
            });

        let assignee_name = self
            .state
            .user_name(ticket.assignee_id)
            .unwrap_or_else(|| {
                warn!(
                    ticket_id = %ticket.id,
                    assignee_id = ticket.assignee_id,
                    "cannot get assignee of ticket"
                );
                String::new()
            });

        let submitter_name = self
            .state
            .user_name(ticket.submitter_id)
            .unwrap_or_else(|| {
                warn!(
                    ticket_id = %ticket.id,
                    submitter_id = ticket.submitter_id,
                    "cannot get submitter of ticket"
                );
                String::new()
            });

        TicketView {
            ticket: ticket.clone(),
            organization_name,
            assignee_name,
            submitter_name,
        }
    }
}

impl SearchService for TicketsService {
    fn collection(&self) -> CollectionKind {
        CollectionKind::Tickets
    }

    fn fields(&self) -> Vec<&'static str> {
        Ticket::fields().names()
    }

    fn find(&self, params: &FindParams) -> DeskResult<Vec<Value>> {
        to_values(&self.list(&params.field, &params.value)?)
    }
}

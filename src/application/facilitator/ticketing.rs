//! Turning a finished questionnaire into a stored ticket.

use crate::domain::foundation::TicketId;
use crate::domain::maintenance::{Ticket, TicketOwner};
use crate::ports::SessionTransport;

use super::{Facilitator, SubflowError};

impl<T: SessionTransport> Facilitator<T> {
    /// Finalizes the agent's draft, derives priority and persists the
    /// ticket for the session's tenant.
    pub(super) async fn submit_ticket(&mut self) -> Result<TicketId, SubflowError> {
        let draft = self.agent.finalize().await?;
        let owner = TicketOwner::single_unit_tenant(self.session.user_id().clone());
        let ticket = Ticket::assemble(&draft, &owner, &self.settings.tickets)?;

        self.collaborators.tickets.create(&ticket).await?;
        self.tickets_submitted += 1;

        tracing::info!(
            ticket_id = %ticket.id(),
            unit_id = %ticket.unit_id(),
            priority = %ticket.priority(),
            issue_area = ticket.issue_area(),
            "Maintenance ticket created"
        );
        Ok(ticket.id())
    }
}

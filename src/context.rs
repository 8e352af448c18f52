use std::sync::Arc;

use crate::services::TicketSearchService;

#[derive(Clone)]
pub struct AppContext {
    pub ticket_source: Arc<dyn TicketSearchService>,
}

impl AppContext {
    pub fn new(ticket_source: Arc<dyn TicketSearchService>) -> Self {
        Self { ticket_source }
    }
}

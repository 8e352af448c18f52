use async_trait::async_trait;

use crate::domain::query::SearchFilter;
use crate::domain::ticket::RawTicket;
use crate::error::AppResult;

#[async_trait]
pub trait TicketSearchService: Send + Sync {
    async fn search(&self, filter: &SearchFilter) -> AppResult<Vec<RawTicket>>;
}

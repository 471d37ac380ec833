//! Inbound port. The CLI (adapter) calls into the application.

use crate::domain::DomainError;

/// Input port: entry surface that drives the calculation use case.
#[async_trait::async_trait]
pub trait InputPort: Send + Sync {
    /// Process every available sensor package. Returns how many summaries were reported.
    async fn run(&self) -> Result<usize, DomainError>;
}

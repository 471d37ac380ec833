//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{DomainError, InfoMessage, SensorPackage};

/// Source of raw sensor packages.
#[async_trait::async_trait]
pub trait PackageSource: Send + Sync {
    /// All packages to process, in processing order.
    async fn packages(&self) -> Result<Vec<SensorPackage>, DomainError>;
}

/// Destination for computed workout summaries.
#[async_trait::async_trait]
pub trait ReportSink: Send + Sync {
    /// Output one summary. Called once per package, in order.
    async fn emit(&self, message: &InfoMessage) -> Result<(), DomainError>;
}

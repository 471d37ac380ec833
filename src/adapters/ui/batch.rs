//! Implements InputPort. Non-interactive: runs the workout batch once.

use crate::domain::DomainError;
use crate::ports::InputPort;
use crate::usecases::WorkoutService;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

pub struct BatchInputPort {
    service: Arc<WorkoutService>,
}

impl BatchInputPort {
    pub fn new(service: Arc<WorkoutService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl InputPort for BatchInputPort {
    async fn run(&self) -> Result<usize, DomainError> {
        let emitted = self.service.process_all().await?;
        info!(emitted, "batch run finished");
        Ok(emitted)
    }
}

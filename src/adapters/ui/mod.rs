//! CLI-facing adapters. Implement the inbound port.

pub mod batch;

pub use batch::BatchInputPort;

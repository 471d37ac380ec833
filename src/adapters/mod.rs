//! Infrastructure adapters. Implement ports.
//!
//! Package sources, report writers, the batch CLI surface. Map errors to DomainError.

pub mod report;
pub mod sensors;
pub mod ui;

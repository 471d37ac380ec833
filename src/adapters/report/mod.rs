//! Report sinks. Render summaries and write them out.

pub mod writer;

pub use writer::{ReportFormat, WriterReportSink};

//! Implements ReportSink over any `std::io::Write`.
//!
//! One line per summary: the localized text message, or the summary as a JSON object.

use crate::domain::{DomainError, InfoMessage, Locale};
use crate::ports::ReportSink;
use serde::Deserialize;
use std::io::Write;
use tokio::sync::Mutex;

/// Line format written by the sink.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

pub struct WriterReportSink<W> {
    writer: Mutex<W>,
    format: ReportFormat,
    locale: Locale,
}

impl<W: Write + Send> WriterReportSink<W> {
    pub fn new(writer: W, format: ReportFormat, locale: Locale) -> Self {
        Self {
            writer: Mutex::new(writer),
            format,
            locale,
        }
    }

    fn render(&self, message: &InfoMessage) -> Result<String, DomainError> {
        match self.format {
            ReportFormat::Text => Ok(message.get_message(self.locale)),
            ReportFormat::Json => serde_json::to_string(message)
                .map_err(|e| DomainError::Report(format!("serialize summary: {}", e))),
        }
    }
}

impl WriterReportSink<std::io::Stdout> {
    pub fn stdout(format: ReportFormat, locale: Locale) -> Self {
        Self::new(std::io::stdout(), format, locale)
    }
}

impl WriterReportSink<Vec<u8>> {
    pub fn in_memory(format: ReportFormat, locale: Locale) -> Self {
        Self::new(Vec::new(), format, locale)
    }

    /// Drain everything written so far.
    pub async fn take_output(&self) -> String {
        let bytes = std::mem::take(&mut *self.writer.lock().await);
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

#[async_trait::async_trait]
impl<W: Write + Send> ReportSink for WriterReportSink<W> {
    async fn emit(&self, message: &InfoMessage) -> Result<(), DomainError> {
        let line = self.render(message)?;
        let mut writer = self.writer.lock().await;
        writeln!(writer, "{}", line)
            .and_then(|_| writer.flush())
            .map_err(|e| DomainError::Report(format!("write summary: {}", e)))
    }
}

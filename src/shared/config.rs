//! Application configuration. Output locale and report format.

use crate::adapters::report::ReportFormat;
use crate::domain::Locale;
use config::ConfigBuilder;
use config::builder::DefaultState;
use config::{Environment, File, FileFormat, FileSourceFile, Source};
use serde::Deserialize;

/// Environment prefix: WORKOUT_CALC_LOCALE, WORKOUT_CALC_REPORT_FORMAT.
pub const ENV_PREFIX: &str = "WORKOUT_CALC";

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Summary language, `en` or `ru`. Read from WORKOUT_CALC_LOCALE.
    #[serde(default)]
    pub locale: Option<Locale>,

    /// Output line format, `text` or `json`. Read from WORKOUT_CALC_REPORT_FORMAT.
    #[serde(default)]
    pub report_format: Option<ReportFormat>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let file = std::env::var("WORKOUT_CALC_CONFIG")
            .ok()
            .map(|path| config_file(&path));
        Self::from_builder(sources(file, Environment::with_prefix(ENV_PREFIX)))
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, config::ConfigError> {
        builder.build()?.try_deserialize()
    }

    /// Returns the summary locale. Defaults to English.
    pub fn locale_or_default(&self) -> Locale {
        self.locale.unwrap_or_default()
    }

    /// Returns the report format. Defaults to text lines.
    pub fn report_format_or_default(&self) -> ReportFormat {
        self.report_format.unwrap_or_default()
    }
}

/// Config file named by WORKOUT_CALC_CONFIG. A missing file is skipped so env overrides still apply.
fn config_file(path: &str) -> File<FileSourceFile, FileFormat> {
    File::with_name(path).required(false)
}

/// File first so environment variables override it.
fn sources<F>(file: Option<F>, env: Environment) -> ConfigBuilder<DefaultState>
where
    F: Source + Send + Sync + 'static,
{
    let mut c = config::Config::builder();
    if let Some(file) = file {
        c = c.add_source(file);
    }
    c.add_source(env)
}

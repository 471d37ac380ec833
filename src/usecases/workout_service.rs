//! Workout service. Runs the batch: dispatch, compute, report.
//!
//! Packages are processed in source order. The first failure stops the batch;
//! summaries already emitted stay emitted.

use crate::domain::{DomainError, InfoMessage, SensorPackage, Workout};
use crate::ports::{PackageSource, ReportSink};
use std::sync::Arc;
use tracing::{debug, info};

pub struct WorkoutService {
    source: Arc<dyn PackageSource>,
    sink: Arc<dyn ReportSink>,
}

impl WorkoutService {
    pub fn new(source: Arc<dyn PackageSource>, sink: Arc<dyn ReportSink>) -> Self {
        Self { source, sink }
    }

    /// Dispatch a single package and compute its summary. Pure; no ports involved.
    pub fn summarize(package: &SensorPackage) -> Result<InfoMessage, DomainError> {
        let workout = Workout::try_from(package)?;
        Ok(workout.show_training_info())
    }

    /// Process every package from the source. Returns the number of summaries emitted.
    pub async fn process_all(&self) -> Result<usize, DomainError> {
        let packages = self.source.packages().await?;
        info!(packages = packages.len(), "processing sensor packages");

        let mut emitted = 0;
        for (index, package) in packages.iter().enumerate() {
            // The caller reports the error; keep stderr to that one line.
            let message = Self::summarize(package).inspect_err(|e| {
                debug!(index, code = %package.code, error = %e, "rejected sensor package");
            })?;
            debug!(
                index,
                code = %package.code,
                training_type = %message.training_type,
                distance = message.distance,
                speed = message.speed,
                calories = message.calories,
                "workout computed"
            );
            self.sink.emit(&message).await?;
            emitted += 1;
        }

        info!(emitted, "batch complete");
        Ok(emitted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::report::{ReportFormat, WriterReportSink};
    use crate::adapters::sensors::StaticPackageSource;
    use crate::domain::Locale;

    fn service(
        packages: Vec<SensorPackage>,
    ) -> (WorkoutService, Arc<WriterReportSink<Vec<u8>>>) {
        let sink = Arc::new(WriterReportSink::in_memory(ReportFormat::Text, Locale::En));
        let source = Arc::new(StaticPackageSource::new(packages));
        let svc = WorkoutService::new(source, Arc::clone(&sink) as Arc<dyn ReportSink>);
        (svc, sink)
    }

    #[tokio::test]
    async fn test_process_sample_packages() {
        let sink = Arc::new(WriterReportSink::in_memory(ReportFormat::Text, Locale::En));
        let svc = WorkoutService::new(
            Arc::new(StaticPackageSource::sample()),
            Arc::clone(&sink) as Arc<dyn ReportSink>,
        );

        let emitted = svc.process_all().await.unwrap();
        assert_eq!(emitted, 3);

        let output = sink.take_output().await;
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Activity type: Swimming; Duration: 1.000 h; Distance: 0.994 km; \
                 Mean speed: 1.000 km/h; Calories spent: 336.000.",
                "Activity type: Running; Duration: 1.000 h; Distance: 9.750 km; \
                 Mean speed: 9.750 km/h; Calories spent: 699.750.",
                "Activity type: SportsWalking; Duration: 1.000 h; Distance: 5.850 km; \
                 Mean speed: 5.850 km/h; Calories spent: 157.500.",
            ]
        );
    }

    #[tokio::test]
    async fn test_unknown_code_stops_batch() {
        let (svc, sink) = service(vec![
            SensorPackage::new("RUN", [15000.0, 1.0, 75.0]),
            SensorPackage::new("YOG", [1.0, 1.0, 1.0]),
            SensorPackage::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
        ]);

        let err = svc.process_all().await.unwrap_err();
        assert_eq!(err, DomainError::UnsupportedActivity("YOG".to_string()));
        // Rows before the failure were already reported.
        assert_eq!(sink.take_output().await.lines().count(), 1);
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_rejected_package_logged_below_warn() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let (svc, _sink) = service(vec![SensorPackage::new("BIK", [1.0, 1.0, 1.0])]);
        assert!(svc.process_all().await.is_err());

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        let rejected: Vec<&str> = output
            .lines()
            .filter(|l| l.contains("rejected sensor package"))
            .collect();
        assert_eq!(rejected.len(), 1);
        assert!(rejected[0].contains("DEBUG"));
        assert!(!output.contains("WARN"));
        assert!(!output.contains("ERROR"));
    }

    #[tokio::test]
    async fn test_bad_arity_is_fatal() {
        let (svc, sink) = service(vec![SensorPackage::new("SWM", [720.0, 1.0, 80.0, 25.0])]);
        let err = svc.process_all().await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgumentCount { .. }));
        assert!(sink.take_output().await.is_empty());
    }

    #[tokio::test]
    async fn test_empty_source() {
        let (svc, sink) = service(Vec::new());
        assert_eq!(svc.process_all().await.unwrap(), 0);
        assert!(sink.take_output().await.is_empty());
    }

    #[test]
    fn test_summarize_is_idempotent() {
        let pkg = SensorPackage::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]);
        let first = WorkoutService::summarize(&pkg).unwrap();
        let second = WorkoutService::summarize(&pkg).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.get_message(Locale::En), second.get_message(Locale::En));
        assert_eq!(first.calories, 336.0);
    }

    #[test]
    fn test_summarize_zero_duration() {
        let pkg = SensorPackage::new("RUN", [15000.0, 0.0, 75.0]);
        assert!(matches!(
            WorkoutService::summarize(&pkg),
            Err(DomainError::InvalidArgumentValue { field: "duration", .. })
        ));
    }
}

//! Implements PackageSource over a fixed in-memory list.

use crate::domain::{DomainError, SensorPackage};
use crate::ports::PackageSource;

/// Packages known at construction time. `sample()` holds the demonstration data.
#[derive(Debug, Clone, Default)]
pub struct StaticPackageSource {
    packages: Vec<SensorPackage>,
}

impl StaticPackageSource {
    pub fn new(packages: Vec<SensorPackage>) -> Self {
        Self { packages }
    }

    /// One package per supported activity.
    pub fn sample() -> Self {
        Self::new(vec![
            SensorPackage::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
            SensorPackage::new("RUN", [15000.0, 1.0, 75.0]),
            SensorPackage::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
        ])
    }
}

#[async_trait::async_trait]
impl PackageSource for StaticPackageSource {
    async fn packages(&self) -> Result<Vec<SensorPackage>, DomainError> {
        Ok(self.packages.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{WORKOUT_CODES, lookup_kind};

    #[tokio::test]
    async fn test_sample_covers_every_code() {
        let packages = StaticPackageSource::sample().packages().await.unwrap();
        assert_eq!(packages.len(), WORKOUT_CODES.len());
        for pkg in &packages {
            let kind = lookup_kind(&pkg.code).unwrap();
            assert_eq!(pkg.data.len(), kind.arity());
        }
    }

    #[tokio::test]
    async fn test_packages_keep_order() {
        let source = StaticPackageSource::new(vec![
            SensorPackage::new("WLK", [1.0, 1.0, 1.0, 1.0]),
            SensorPackage::new("RUN", [2.0, 1.0, 1.0]),
        ]);
        let codes: Vec<String> = source
            .packages()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.code)
            .collect();
        assert_eq!(codes, ["WLK", "RUN"]);
    }
}

//! Package sources.

pub mod sample_packages;

pub use sample_packages::StaticPackageSource;

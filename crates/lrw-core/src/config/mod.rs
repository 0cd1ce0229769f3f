//! Configuration system.
//! TOML-based, environment overrides applied on top, compiled defaults underneath.

pub mod conversion_config;
pub mod defaults;
pub mod lrw_config;
pub mod observability_config;

pub use conversion_config::ConversionConfig;
pub use lrw_config::LrwConfig;
pub use observability_config::ObservabilityConfig;

// Library exports for binaries and tests
pub mod audit;
pub mod config;
pub mod email;
pub mod error;
pub mod i18n;

//! Shared bootstrap utilities for client front-ends.
//!
//! Provides configuration loading, oracle assembly, and generator setup that
//! can be reused by the CLI or any other front-end crate.
pub mod builder;
pub mod config;
pub mod ids;
pub mod oracles;

pub use builder::{GeneratorBuilder, GeneratorSetup};
pub use config::BootstrapConfig;
pub use ids::RandomIds;
pub use oracles::{ContentOracleFactory, OracleBundle, OracleFactory};

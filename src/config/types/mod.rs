//! Configuration utility types.

mod error;
mod field;
mod handle;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError};
pub use field::FieldPath;
pub use handle::{cfg, clear_clean_flag, init_config, reload_config};

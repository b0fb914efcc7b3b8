//! Configuration, errors and logging

pub mod config;
pub mod error;
pub mod logging;

pub use config::StoreSettings;
pub use error::{AppError, AppResult, ContentStoreError, MediaError};
pub use logging::{init_logger, log_store_configuration};

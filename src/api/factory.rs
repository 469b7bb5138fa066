//! Builds the API client from configuration.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};

use super::{HttpTodoApi, TodoApi};
use crate::config::ApiConfig;

/// Create the shared API client described by `config`.
///
/// # Errors
/// Returns an error if the base URL cannot be parsed or the HTTP client
/// cannot be constructed.
pub fn create_api(config: &ApiConfig) -> Result<Arc<dyn TodoApi>> {
    let api = HttpTodoApi::new(&config.base_url, Duration::from_secs(config.timeout_secs))
        .with_context(|| format!("Failed to create API client for {}", config.base_url))?;
    log::info!("Using todos API at {}", api.base_url());
    Ok(Arc::new(api))
}

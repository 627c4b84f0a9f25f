use crate::{ConfigError, Environment, FromEnv, env_parse};

pub const DEFAULT_PAGE_SIZE: usize = 50;
pub const MAX_PAGE_SIZE: usize = 200;

/// Settings for the product catalog service
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogConfig {
    pub environment: Environment,
    /// Page size used when a listing request does not specify one
    pub default_page_size: usize,
    /// Upper bound applied to every listing request
    pub max_page_size: usize,
}

impl CatalogConfig {
    /// Clamp a requested page size into `1..=max_page_size`, treating a zero maximum as one
    pub fn clamp_page_size(&self, requested: usize) -> usize {
        requested.max(1).min(self.max_page_size.max(1))
    }
}

impl FromEnv for CatalogConfig {
    /// Reads from environment variables:
    /// - APP_ENV: development (default) or production
    /// - CATALOG_DEFAULT_PAGE_SIZE: defaults to 50
    /// - CATALOG_MAX_PAGE_SIZE: defaults to 200
    fn from_env() -> Result<Self, ConfigError> {
        let environment = Environment::from_env();
        let default_page_size = env_parse("CATALOG_DEFAULT_PAGE_SIZE", DEFAULT_PAGE_SIZE)?;
        let max_page_size = env_parse("CATALOG_MAX_PAGE_SIZE", MAX_PAGE_SIZE)?;

        if max_page_size == 0 {
            return Err(ConfigError::Invalid(
                "CATALOG_MAX_PAGE_SIZE must be greater than zero".to_string(),
            ));
        }

        if default_page_size == 0 || default_page_size > max_page_size {
            return Err(ConfigError::Invalid(format!(
                "CATALOG_DEFAULT_PAGE_SIZE must be between 1 and {}",
                max_page_size
            )));
        }

        Ok(Self {
            environment,
            default_page_size,
            max_page_size,
        })
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Development,
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: MAX_PAGE_SIZE,
        }
    }
}

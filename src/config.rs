//! Runtime configuration, read once at cold start.

use crate::error::ConfigError;

use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::{Client, config::Region};

/// Table used when `BOOKS_TABLE_NAME` is unset.
pub const DEFAULT_TABLE_NAME: &str = "Books-API";

const TABLE_NAME_VAR: &str = "BOOKS_TABLE_NAME";
const REGION_VAR: &str = "BOOKS_REGION";
const CONSISTENT_READ_VAR: &str = "BOOKS_CONSISTENT_READ";

/// Where the books live and how they are read.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// DynamoDB table name.
    pub table_name: String,
    /// Region override; `None` defers to the SDK's provider chain (`AWS_REGION` in Lambda).
    pub region: Option<String>,
    /// Whether lookups use strongly consistent reads.
    pub consistent_read: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table_name: DEFAULT_TABLE_NAME.to_string(),
            region: None,
            consistent_read: false,
        }
    }
}

impl Config {
    /// Configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Configuration from any variable lookup; unset variables keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(table_name) = lookup(TABLE_NAME_VAR) {
            if table_name.is_empty() {
                return Err(ConfigError::Empty(TABLE_NAME_VAR));
            }
            config.table_name = table_name;
        }
        config.region = lookup(REGION_VAR).filter(|region| !region.is_empty());
        if let Some(value) = lookup(CONSISTENT_READ_VAR) {
            config.consistent_read = value.parse().map_err(|_| ConfigError::InvalidBool {
                name: CONSISTENT_READ_VAR,
                value,
            })?;
        }
        Ok(config)
    }

    /// Set the table name
    pub fn with_table_name(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = table_name.into();
        self
    }

    /// Set the region override
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// DynamoDB client for the configured region, with credentials from the environment.
    pub async fn dynamodb_client(&self) -> Client {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = &self.region {
            loader = loader.region(Region::new(region.clone()));
        }
        let sdk_config = loader.load().await;
        Client::new(&sdk_config)
    }
}

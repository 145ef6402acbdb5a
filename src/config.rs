use crate::error::{FeedError, Result};

/// Runtime configuration for the feed export core
#[derive(Debug, Clone)]
pub struct FeedConfig {
    pub database_url: String,
    pub batch_size: u64,
    pub max_connections: u32,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            database_url: "postgresql://localhost/feedgen_development".to_string(),
            batch_size: 100,
            max_connections: 10,
        }
    }
}

impl FeedConfig {
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(db_url) = std::env::var("DATABASE_URL") {
            config.database_url = db_url;
        }

        if let Ok(batch_size) = std::env::var("FEEDGEN_BATCH_SIZE") {
            config.batch_size = batch_size
                .parse()
                .map_err(|e| FeedError::Configuration(format!("Invalid batch_size: {e}")))?;
        }

        if let Ok(max_connections) = std::env::var("FEEDGEN_MAX_CONNECTIONS") {
            config.max_connections = max_connections
                .parse()
                .map_err(|e| FeedError::Configuration(format!("Invalid max_connections: {e}")))?;
        }

        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(FeedError::Configuration(
                "batch_size must be at least 1".to_string(),
            ));
        }
        if self.max_connections == 0 {
            return Err(FeedError::Configuration(
                "max_connections must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

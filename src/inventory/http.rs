// Copyright (c) 2025 - Cowboy AI, Inc.
//! HTTP Inventory Source
//!
//! Fetches the manifest with a single `GET` against the configured inventory
//! service. The whole request, body included, is bounded by the configured
//! timeout.
//!
//! # Example
//!
//! ```rust,no_run
//! use cim_infrastructure_cassandra::config::InventoryConfig;
//! use cim_infrastructure_cassandra::inventory::{HttpInventorySource, InventorySource};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = HttpInventorySource::new(InventoryConfig {
//!         base_url: "http://inventory.internal:8080".to_string(),
//!         path: "/hosts".to_string(),
//!         timeout_secs: 5,
//!     })?;
//!
//!     let hosts = source.hosts().await?;
//!     println!("{} hosts", hosts.len());
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error, info};

use super::{InventorySource, Manifest};
use crate::config::InventoryConfig;
use crate::errors::{TopologyError, TopologyResult};

/// Inventory source backed by an HTTP service
#[derive(Debug, Clone)]
pub struct HttpInventorySource {
    client: Client,
    url: String,
}

impl HttpInventorySource {
    /// Create a new HTTP inventory source
    pub fn new(config: InventoryConfig) -> TopologyResult<Self> {
        let timeout = config.timeout();
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()
            .map_err(|e| {
                TopologyError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            url: config.url(),
        })
    }

    /// The full URL the manifest is fetched from
    pub fn url(&self) -> &str {
        &self.url
    }

    async fn fetch_body(&self) -> TopologyResult<String> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TopologyError::BackingStoreUnavailable(format!(
                "inventory returned {}",
                status
            )));
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl InventorySource for HttpInventorySource {
    async fn fetch(&self) -> TopologyResult<Manifest> {
        debug!("Fetching inventory manifest from {}", self.url);

        let body = self.fetch_body().await.map_err(|e| {
            error!("Inventory fetch from {} failed: {}", self.url, e);
            e
        })?;

        let manifest = Manifest::parse(&body).map_err(|e| {
            error!("Inventory manifest from {} is malformed: {}", self.url, e);
            e
        })?;

        info!(
            regions = manifest.regions().count(),
            hosts = manifest.host_count(),
            "Fetched inventory manifest"
        );

        Ok(manifest)
    }
}

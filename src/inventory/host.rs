// Copyright (c) 2025 - Cowboy AI, Inc.
//! Raw inventory records
//!
//! The inventory document is shaped as region → hostname → host record:
//!
//! ```json
//! {
//!   "us-east-1": {
//!     "cass01ea1": {
//!       "roles": ["cassandra", "cassandra_myring"],
//!       "zone": "us-east-1a",
//!       "public ip": "54.2.1.2",
//!       "private ip": "10.2.1.2",
//!       "id": "jkl4"
//!     }
//!   }
//! }
//! ```
//!
//! Nothing in it is trusted: missing or `null` fields become empty values and
//! unknown fields are ignored.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use crate::errors::{TopologyError, TopologyResult};

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One host as reported by the inventory
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct HostRecord {
    /// Opaque host identifier
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,

    /// Hostname; carried as the map key in the wire format
    #[serde(skip)]
    pub hostname: String,

    /// Region the host is listed under; carried as the outer map key
    #[serde(skip)]
    pub region: String,

    /// Role tags in inventory order
    #[serde(default, deserialize_with = "null_as_default")]
    pub roles: Vec<String>,

    /// Availability zone, e.g. `us-east-1a`
    #[serde(default, deserialize_with = "null_as_default")]
    pub zone: String,

    #[serde(rename = "public ip", default, deserialize_with = "null_as_default")]
    pub public_ip: String,

    #[serde(rename = "private ip", default, deserialize_with = "null_as_default")]
    pub private_ip: String,
}

impl HostRecord {
    pub fn new(
        hostname: impl Into<String>,
        roles: impl IntoIterator<Item = impl Into<String>>,
        zone: impl Into<String>,
        public_ip: impl Into<String>,
    ) -> Self {
        Self {
            hostname: hostname.into(),
            roles: roles.into_iter().map(Into::into).collect(),
            zone: zone.into(),
            public_ip: public_ip.into(),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    pub fn with_private_ip(mut self, private_ip: impl Into<String>) -> Self {
        self.private_ip = private_ip.into();
        self
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

/// A full inventory document
///
/// Regions and hosts are kept in sorted maps so that flattening the manifest
/// always yields hosts in the same order. Every stored record carries its
/// hostname and region, however the manifest was built.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Manifest {
    regions: BTreeMap<String, BTreeMap<String, HostRecord>>,
}

#[derive(Deserialize)]
struct NullableHost(#[serde(deserialize_with = "null_as_default")] HostRecord);

#[derive(Deserialize)]
struct NullableRegion(
    #[serde(deserialize_with = "null_as_default")] BTreeMap<String, NullableHost>,
);

impl<'de> Deserialize<'de> for Manifest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, NullableRegion>::deserialize(deserializer)?;

        let mut manifest = Manifest::new();
        for (region, NullableRegion(hosts)) in raw {
            manifest.regions.entry(region.clone()).or_default();
            for (hostname, NullableHost(host)) in hosts {
                manifest.insert(
                    region.as_str(),
                    HostRecord {
                        hostname,
                        ..host
                    },
                );
            }
        }
        Ok(manifest)
    }
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an inventory document
    ///
    /// Any JSON error is reported as [`TopologyError::BackingStoreUnavailable`].
    pub fn parse(body: &str) -> TopologyResult<Self> {
        serde_json::from_str(body).map_err(|e| {
            TopologyError::BackingStoreUnavailable(format!("malformed inventory manifest: {}", e))
        })
    }

    /// Add a host to a region, replacing any host with the same name there
    pub fn insert(&mut self, region: impl Into<String>, host: HostRecord) {
        let region = region.into();
        let host = HostRecord {
            region: region.clone(),
            ..host
        };
        self.regions
            .entry(region)
            .or_default()
            .insert(host.hostname.clone(), host);
    }

    pub fn with_host(mut self, region: impl Into<String>, host: HostRecord) -> Self {
        self.insert(region, host);
        self
    }

    /// Add a region with no hosts
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.regions.entry(region.into()).or_default();
        self
    }

    pub fn regions(&self) -> impl Iterator<Item = &str> {
        self.regions.keys().map(String::as_str)
    }

    /// All hosts across all regions, with hostname and region filled in
    pub fn hosts(&self) -> Vec<HostRecord> {
        self.regions
            .values()
            .flat_map(|hosts| hosts.values().cloned())
            .collect()
    }

    pub fn host_count(&self) -> usize {
        self.regions.values().map(BTreeMap::len).sum()
    }

    /// True when no region holds any host
    pub fn is_empty(&self) -> bool {
        self.host_count() == 0
    }
}

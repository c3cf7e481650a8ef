// Copyright (c) 2025 - Cowboy AI, Inc.
//! Topology Resolution
//!
//! Turns a flat list of inventory hosts into per-ring membership:
//!
//! ```text
//! [HostRecord] ──resolve──> Topology { ring → { InstanceId → CassandraInstance } }
//! ```
//!
//! A host is a member of ring `R` iff it carries the membership tag and the
//! ring tag for `R`. Hosts tagged for several rings appear in all of them.
//! Resolution is pure and never fails; unrecognised tags are ignored.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use tracing::{debug, warn};

use super::TagConvention;
use crate::domain::{CassandraInstance, CassandraRing, InstanceId, RegionZone, ZoneConvention};
use crate::inventory::HostRecord;

/// Resolved ring membership of one inventory snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Topology {
    rings: BTreeMap<String, BTreeMap<InstanceId, CassandraInstance>>,
}

impl Topology {
    /// Names of every ring seen in the snapshot
    pub fn rings(&self) -> BTreeSet<&str> {
        self.rings.keys().map(String::as_str).collect()
    }

    pub fn contains(&self, ring: &str) -> bool {
        self.rings.contains_key(ring)
    }

    /// Members of `ring` in identifier order; empty for an unseen ring
    pub fn members_of<'a>(&'a self, ring: &str) -> impl Iterator<Item = &'a CassandraInstance> + 'a {
        self.rings
            .get(ring)
            .into_iter()
            .flat_map(|members| members.values())
    }

    /// The ring named `ring`, if it was seen
    pub fn ring(&self, ring: &str) -> Option<CassandraRing> {
        self.rings
            .get(ring)
            .map(|members| CassandraRing::new(ring, members.values().cloned()))
    }

    /// All rings, ordered by name
    pub fn into_rings(self) -> Vec<CassandraRing> {
        self.rings
            .into_iter()
            .map(|(name, members)| CassandraRing::new(name, members.into_values()))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    fn register(&mut self, ring: &str, instance: CassandraInstance) {
        let members = self.rings.entry(ring.to_string()).or_default();
        if let Some(previous) = members.insert(instance.id.clone(), instance) {
            warn!(
                ring,
                id = %previous.id,
                hostname = %previous.hostname,
                "Duplicate instance identifier in ring, keeping the later host"
            );
        }
    }
}

/// Resolves inventory hosts into a [`Topology`]
#[derive(Clone)]
pub struct TopologyResolver {
    tags: TagConvention,
    zones: Arc<dyn ZoneConvention>,
}

impl std::fmt::Debug for TopologyResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TopologyResolver")
            .field("tags", &self.tags)
            .finish_non_exhaustive()
    }
}

impl Default for TopologyResolver {
    fn default() -> Self {
        Self::new(TagConvention::default(), Arc::new(RegionZone))
    }
}

impl TopologyResolver {
    pub fn new(tags: TagConvention, zones: Arc<dyn ZoneConvention>) -> Self {
        Self { tags, zones }
    }

    pub fn tags(&self) -> &TagConvention {
        &self.tags
    }

    /// Resolve hosts into ring membership in a single pass
    pub fn resolve<'a>(&self, hosts: impl IntoIterator<Item = &'a HostRecord>) -> Topology {
        let mut topology = Topology::default();

        for host in hosts {
            let tags = self.tags.inspect(&host.roles);

            if !tags.member {
                debug!(hostname = %host.hostname, "Host is not a cluster member, skipping");
                continue;
            }

            let rings = tags.member_rings();
            if rings.is_empty() {
                debug!(hostname = %host.hostname, "Cluster member has no ring tag, skipping");
                continue;
            }

            let instance = self.to_instance(host);
            for ring in rings {
                topology.register(ring, instance.clone());
            }
        }

        topology
    }

    /// Build the instance a member host contributes to its rings
    ///
    /// A host without an inventory id is identified by `region/hostname`,
    /// since hostnames are only unique within a region.
    pub fn to_instance(&self, host: &HostRecord) -> CassandraInstance {
        let placement = self.zones.place(&host.zone);
        let id = if !host.id.trim().is_empty() {
            InstanceId::parse(&host.id)
        } else if host.region.is_empty() {
            InstanceId::Named(host.hostname.clone())
        } else {
            InstanceId::Named(format!("{}/{}", host.region, host.hostname))
        };

        CassandraInstance::builder(id)
            .datacenter(placement.datacenter)
            .rack(placement.rack)
            .hostname(host.hostname.as_str())
            .public_ip_address(host.public_ip.as_str())
            .fully_qualified_domain_name(host.hostname.as_str())
            .build()
    }
}

// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for cim-infrastructure-cassandra
//!
//! Deterministic inventory documents and instances shared by the integration
//! tests. Hosts, addresses and identifiers are fixed constants.
#![allow(dead_code)]

use std::collections::BTreeSet;

use cim_infrastructure_cassandra::domain::CassandraInstance;
use cim_infrastructure_cassandra::inventory::HostRecord;

/// Inventory with an empty region, a region without Cassandra hosts and two
/// rings spread across two regions
pub const MANIFEST: &str = r#"{
  "ap-southeast-1": {},
  "ap-northeast-1": {
    "tagserve01ap1": {
      "private ip": "10.0.1.1",
      "roles": ["tagserve"],
      "public ip": "54.0.1.1",
      "id": "abc1",
      "zone": "us-northeast-1a"
    }
  },
  "us-west-2": {
    "cass01we2": {
      "private ip": "10.1.1.1",
      "roles": ["cassandra", "cassandra_myring"],
      "public ip": "54.1.1.1",
      "id": "def2",
      "zone": "us-west-2a"
    }
  },
  "us-east-1": {
    "stats01ea1": {
      "private ip": "10.2.1.1",
      "roles": ["cassandra", "cassandra_stats"],
      "public ip": "54.2.1.1",
      "id": "ghi3",
      "zone": "us-east-1c"
    },
    "cass01ea1": {
      "private ip": "10.2.1.2",
      "roles": ["cassandra", "cassandra_myring"],
      "public ip": "54.2.1.2",
      "id": "jkl4",
      "zone": "us-east-1a"
    },
    "cass02ea1": {
      "private ip": "10.2.1.3",
      "roles": ["cassandra", "cassandra_myring"],
      "public ip": "54.2.1.3",
      "id": "mno5",
      "zone": "us-east-1b"
    }
  }
}"#;

pub const EMPTY_MANIFEST: &str = "{}";

pub const BAD_MANIFEST: &str = "{]";

/// Hosts of [`MANIFEST`], hostnames and regions filled in
pub fn manifest_hosts() -> Vec<HostRecord> {
    vec![
        HostRecord::new("tagserve01ap1", ["tagserve"], "us-northeast-1a", "54.0.1.1")
            .with_id("abc1")
            .with_region("ap-northeast-1")
            .with_private_ip("10.0.1.1"),
        HostRecord::new("cass01we2", ["cassandra", "cassandra_myring"], "us-west-2a", "54.1.1.1")
            .with_id("def2")
            .with_region("us-west-2")
            .with_private_ip("10.1.1.1"),
        HostRecord::new("stats01ea1", ["cassandra", "cassandra_stats"], "us-east-1c", "54.2.1.1")
            .with_id("ghi3")
            .with_region("us-east-1")
            .with_private_ip("10.2.1.1"),
        HostRecord::new("cass01ea1", ["cassandra", "cassandra_myring"], "us-east-1a", "54.2.1.2")
            .with_id("jkl4")
            .with_region("us-east-1")
            .with_private_ip("10.2.1.2"),
        HostRecord::new("cass02ea1", ["cassandra", "cassandra_myring"], "us-east-1b", "54.2.1.3")
            .with_id("mno5")
            .with_region("us-east-1")
            .with_private_ip("10.2.1.3"),
    ]
}

/// A Cassandra host with a numeric identifier in one ring
pub fn ring_host(id: i64, ring: &str, zone: &str, ip: &str) -> HostRecord {
    HostRecord::new(
        format!("cass{:02}", id),
        ["cassandra".to_string(), format!("cassandra_{}", ring)],
        zone,
        ip,
    )
    .with_id(id.to_string())
}

/// A fully populated owned-ring instance
pub fn instance(id: i64, datacenter: &str, ip: &str) -> CassandraInstance {
    CassandraInstance::builder(id)
        .datacenter(datacenter)
        .rack("a")
        .hostname(format!("cass{:02}", id))
        .public_ip_address(ip)
        .fully_qualified_domain_name(format!("cass{:02}.example.com", id))
        .build()
}

pub fn addresses(ips: &[&str]) -> BTreeSet<String> {
    ips.iter().map(|ip| ip.to_string()).collect()
}
